//! CLI entrypoint for deckwright
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use deckwright_application::{
    ClarificationPort, DialogConfig, InterpretRequestUseCase, RunDialogInput, RunDialogUseCase,
    ScriptedClarification,
};
use deckwright_domain::OutputFormat;
use deckwright_infrastructure::{ConfigLoader, FileConfig};
use deckwright_presentation::{
    Cli, ConsoleFormatter, InteractiveClarification, formatter_for,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // stderr keeps stdout clean for --output json
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    info!("Starting deckwright");

    // === Configuration ===
    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };

    if !file_config.output.color {
        colored::control::set_override(false);
    }

    let dialog_config = build_dialog_config(&cli, &file_config)?;
    let output_format = cli
        .output
        .map(OutputFormat::from)
        .or(file_config.output.format)
        .unwrap_or_default();
    let formatter = formatter_for(output_format);

    // === Dependency Injection ===
    let interactive = Arc::new(InteractiveClarification::new());

    let request = match (cli.request.clone(), cli.interactive) {
        (Some(request), _) => request,
        (None, true) => interactive.read_request()?,
        (None, false) => bail!("A deck request is required. Use --interactive to be prompted."),
    };

    // One-shot without answers: report the first round as-is
    if !cli.interactive && cli.answer.is_empty() {
        let policy = dialog_config.policy()?;
        let interpretation = InterpretRequestUseCase::new()
            .with_defaults(dialog_config.defaults.clone())
            .execute(&request, &policy);
        println!("{}", formatter.format_interpretation(&interpretation)?);
        return Ok(());
    }

    let port: Arc<dyn ClarificationPort> = if cli.interactive {
        interactive
    } else {
        Arc::new(ScriptedClarification::new(cli.answer.clone()))
    };

    let outcome = RunDialogUseCase::new(port)
        .execute(RunDialogInput::new(request, dialog_config))
        .await?;
    println!("{}", formatter.format_outcome(&outcome)?);

    Ok(())
}

/// Merge file config and CLI overrides, reporting config issues on stderr.
fn build_dialog_config(cli: &Cli, file_config: &FileConfig) -> Result<DialogConfig> {
    for issue in file_config.ensure_valid()? {
        eprintln!("{}", ConsoleFormatter::format_issue(&issue));
    }

    let (mut config, _) = file_config.to_dialog_config();
    if let Some(max) = cli.max_questions {
        if max == 0 {
            bail!("--max-questions must be positive");
        }
        config = config.with_max_questions(max);
    }
    Ok(config)
}
