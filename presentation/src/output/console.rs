//! Console output formatter for interpreted requests

use crate::dialog::interactive::question_text;
use crate::output::formatter::{FormatResult, OutputFormatter};
use colored::Colorize;
use deckwright_application::{DialogOutcome, Interpretation};
use deckwright_domain::{
    AppliedDefault, ClarificationRequest, ConfigIssue, DeckIntent, DeckQuery, Severity,
    SignalStrength,
};

/// Formats results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format one interpretation round
    pub fn format_interpretation(interpretation: &Interpretation) -> String {
        let mut output = String::new();
        output.push_str(&Self::format_intent(interpretation.intent()));

        match interpretation {
            Interpretation::NeedsClarification { request, .. } => {
                output.push('\n');
                output.push_str(&Self::format_request(request));
            }
            Interpretation::Resolved {
                query,
                defaults_applied,
                ..
            } => {
                output.push_str(&Self::format_defaults(defaults_applied));
                output.push('\n');
                output.push_str(&Self::format_query(query));
            }
        }

        output
    }

    /// Format the result of a full dialog
    pub fn format_outcome(outcome: &DialogOutcome) -> String {
        let mut output = String::new();
        output.push_str(&Self::format_intent(&outcome.intent));

        if !outcome.asked.is_empty() {
            let asked: Vec<_> = outcome.asked.iter().map(|t| t.as_str()).collect();
            output.push_str(&format!(
                "  {:<13}{}\n",
                "Asked:".dimmed(),
                asked.join(", ")
            ));
        }
        output.push_str(&Self::format_defaults(&outcome.defaults_applied));
        output.push('\n');
        output.push_str(&Self::format_query(&outcome.query));
        output
    }

    /// Format the fields of an intent with its confidence
    pub fn format_intent(intent: &DeckIntent) -> String {
        let mut output = format!(
            "{} {}\n",
            "Deck request".cyan().bold(),
            format!("(confidence {:.2})", intent.confidence()).dimmed()
        );

        let colors = intent
            .colors()
            .filter(|colors| !colors.is_empty())
            .map(|colors| {
                colors
                    .iter()
                    .map(|c| c.code())
                    .collect::<Vec<_>>()
                    .join("")
            });
        let constraints = (!intent.constraints().is_empty()).then(|| {
            intent
                .constraints()
                .iter()
                .map(|c| c.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        });

        let rows = [
            ("Format:", intent.format().map(|f| f.to_string())),
            ("Colors:", colors),
            ("Archetype:", intent.archetype().map(|a| a.to_string())),
            ("Tribe:", intent.tribe().map(str::to_string)),
            ("Theme:", intent.theme().map(str::to_string)),
            ("Constraints:", constraints),
        ];
        for (label, value) in rows {
            let value = match value {
                Some(v) => v.normal(),
                None => "-".dimmed(),
            };
            output.push_str(&format!("  {:<13}{}\n", label.bold(), value));
        }

        output
    }

    /// Format a pending clarification question with its choices
    pub fn format_request(request: &ClarificationRequest) -> String {
        let mut output = format!(
            "{} {}\n",
            "?".yellow().bold(),
            question_text(request.clarification_type).bold()
        );
        if request.has_options() {
            output.push_str(&format!(
                "  {} {}\n",
                "Options:".dimmed(),
                request.options.join(", ")
            ));
        }
        output
    }

    /// Format a deck query, one signal per line
    pub fn format_query(query: &DeckQuery) -> String {
        let mut output = format!("{}\n", "Query".cyan().bold());
        if query.is_empty() {
            output.push_str(&format!("  {}\n", "(no signals)".dimmed()));
            return output;
        }

        for signal in query.signals() {
            let strength = match signal.strength {
                SignalStrength::Required => signal.strength.as_str().red().bold(),
                SignalStrength::Strong => signal.strength.as_str().green(),
                SignalStrength::Moderate => signal.strength.as_str().yellow(),
                SignalStrength::Weak => signal.strength.as_str().dimmed(),
            };
            output.push_str(&format!(
                "  {:<10} {:<10} {}\n",
                signal.signal_type.as_str(),
                strength,
                signal.value
            ));
        }
        output
    }

    /// Format a config issue as a one-line warning or error
    pub fn format_issue(issue: &ConfigIssue) -> String {
        let label = match issue.severity {
            Severity::Error => "error:".red().bold(),
            Severity::Warning => "warning:".yellow().bold(),
        };
        format!("{} {}", label, issue.message)
    }

    fn format_defaults(defaults: &[AppliedDefault]) -> String {
        if defaults.is_empty() {
            return String::new();
        }
        let applied: Vec<_> = defaults
            .iter()
            .map(|d| match d {
                AppliedDefault::Format(format) => format!("format={}", format),
                AppliedDefault::Archetype(archetype) => format!("archetype={}", archetype),
            })
            .collect();
        format!("  {:<13}{}\n", "Defaulted:".dimmed(), applied.join(", "))
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_interpretation(&self, interpretation: &Interpretation) -> FormatResult {
        Ok(Self::format_interpretation(interpretation))
    }

    fn format_outcome(&self, outcome: &DialogOutcome) -> FormatResult {
        Ok(Self::format_outcome(outcome))
    }
}
