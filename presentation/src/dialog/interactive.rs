//! Interactive clarification on the terminal.
//!
//! # User Interface
//!
//! ```text
//! ? Which colors should the deck play?
//!   1) white  2) blue  3) black  4) red  5) green
//!   (number, several numbers, free text, or empty to skip)
//! deckwright> 4 5
//! ```
//!
//! # Answers
//!
//! | Input | Meaning |
//! |-------|---------|
//! | empty, `skip`, `s` | Decline; defaults will fill the gap |
//! | `3` or `1 4` | Pick offered options by number |
//! | anything else | Free-form answer, parsed like a request |

use async_trait::async_trait;
use colored::Colorize;
use deckwright_application::{ClarificationPort, ClarificationPortError};
use deckwright_domain::{ClarificationRequest, ClarificationType, DeckIntent};
use std::io::{self, Write};

/// The question shown for `clarification_type`.
pub fn question_text(clarification_type: ClarificationType) -> &'static str {
    match clarification_type {
        ClarificationType::Format => "Which format are you building for?",
        ClarificationType::Colors => "Which colors should the deck play?",
        ClarificationType::Archetype => "What play style do you want?",
        ClarificationType::TribeOrTheme => "Is there a creature type or theme to build around?",
        ClarificationType::Constraints => "Any constraints, such as budget or singleton?",
    }
}

/// Turn raw input into an answer for `request`.
///
/// Numbers select offered options (1-based) and are joined with spaces so
/// the result reads like a request. Out-of-range numbers are rejected.
pub fn resolve_answer(
    request: &ClarificationRequest,
    input: &str,
) -> Result<Option<String>, ClarificationPortError> {
    let trimmed = input.trim();
    if trimmed.is_empty() || matches!(trimmed.to_lowercase().as_str(), "skip" | "s") {
        return Ok(None);
    }

    let tokens: Vec<&str> = trimmed
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();
    if tokens.is_empty() {
        return Ok(None);
    }
    let numbers: Option<Vec<usize>> = tokens.iter().map(|t| t.parse().ok()).collect();

    let Some(numbers) = numbers else {
        return Ok(Some(trimmed.to_string()));
    };

    let picked = numbers
        .iter()
        .map(|&n| {
            n.checked_sub(1)
                .and_then(|i| request.options.get(i))
                .cloned()
                .ok_or_else(|| {
                    ClarificationPortError::InvalidInput(format!(
                        "{} is not one of the {} options",
                        n,
                        request.options.len()
                    ))
                })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Some(picked.join(" ")))
}

/// Interactive clarification handler for CLI.
///
/// Implements [`ClarificationPort`] by prompting on stdout and reading a
/// line from stdin. Invalid input re-prompts; end of input cancels.
pub struct InteractiveClarification;

impl InteractiveClarification {
    pub fn new() -> Self {
        Self
    }

    fn display_question(&self, request: &ClarificationRequest) {
        println!();
        println!(
            "{} {}",
            "?".yellow().bold(),
            question_text(request.clarification_type).bold()
        );

        if request.has_options() {
            let options: Vec<String> = request
                .options
                .iter()
                .enumerate()
                .map(|(i, option)| format!("{} {}", format!("{})", i + 1).cyan(), option))
                .collect();
            println!("  {}", options.join("  "));
            println!(
                "  {}",
                "(number, several numbers, free text, or empty to skip)".dimmed()
            );
        } else {
            println!("  {}", "(free text, or empty to skip)".dimmed());
        }
    }

    fn read_line(&self) -> Result<String, ClarificationPortError> {
        print!("{} ", "deckwright>".magenta().bold());
        io::stdout().flush().map_err(|e| {
            ClarificationPortError::IoError(format!("Failed to flush stdout: {}", e))
        })?;

        let mut input = String::new();
        let read = io::stdin()
            .read_line(&mut input)
            .map_err(|e| ClarificationPortError::IoError(format!("Failed to read input: {}", e)))?;
        if read == 0 {
            return Err(ClarificationPortError::Cancelled);
        }

        Ok(input)
    }

    /// Prompt for the deck request itself.
    pub fn read_request(&self) -> Result<String, ClarificationPortError> {
        println!("{}", "Describe the deck you want:".cyan().bold());
        let input = self.read_line()?;
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ClarificationPortError::InvalidInput(
                "empty request".to_string(),
            ));
        }
        Ok(trimmed.to_string())
    }
}

impl Default for InteractiveClarification {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClarificationPort for InteractiveClarification {
    async fn ask(
        &self,
        _intent: &DeckIntent,
        request: &ClarificationRequest,
    ) -> Result<Option<String>, ClarificationPortError> {
        self.display_question(request);

        loop {
            let input = self.read_line()?;
            match resolve_answer(request, &input) {
                Ok(answer) => return Ok(answer),
                Err(ClarificationPortError::InvalidInput(msg)) => {
                    println!("  {} {}", "!".red().bold(), msg);
                }
                Err(e) => return Err(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(t: ClarificationType) -> ClarificationRequest {
        ClarificationRequest::for_type(t)
    }

    #[test]
    fn test_empty_and_skip_decline() {
        let format = request(ClarificationType::Format);
        assert_eq!(resolve_answer(&format, "").unwrap(), None);
        assert_eq!(resolve_answer(&format, "  \n").unwrap(), None);
        assert_eq!(resolve_answer(&format, "Skip").unwrap(), None);
    }

    #[test]
    fn test_number_picks_option() {
        let format = request(ClarificationType::Format);
        assert_eq!(
            resolve_answer(&format, "5\n").unwrap().as_deref(),
            Some("modern")
        );
    }

    #[test]
    fn test_several_numbers_pick_several_colors() {
        let colors = request(ClarificationType::Colors);
        assert_eq!(
            resolve_answer(&colors, "4, 5").unwrap().as_deref(),
            Some("red green")
        );
    }

    #[test]
    fn test_out_of_range_number_is_invalid() {
        let archetype = request(ClarificationType::Archetype);
        assert!(matches!(
            resolve_answer(&archetype, "7"),
            Err(ClarificationPortError::InvalidInput(_))
        ));
        assert!(matches!(
            resolve_answer(&archetype, "0"),
            Err(ClarificationPortError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_number_without_options_is_invalid() {
        let tribe = request(ClarificationType::TribeOrTheme);
        assert!(resolve_answer(&tribe, "2").is_err());
    }

    #[test]
    fn test_free_text_passes_through() {
        let tribe = request(ClarificationType::TribeOrTheme);
        assert_eq!(
            resolve_answer(&tribe, " +1/+1 counters ").unwrap().as_deref(),
            Some("+1/+1 counters")
        );
    }

    #[test]
    fn test_every_type_has_a_question() {
        for t in ClarificationType::PRIORITY {
            assert!(question_text(t).ends_with('?'));
        }
    }
}
