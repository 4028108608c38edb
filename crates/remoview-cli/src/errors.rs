use console::style;
use remoview_core::error::{INVALID_GUESSES_MESSAGE, SESSION_FAILED_MESSAGE};
use remoview_core::models::GuessError;
use std::fmt;

/// Enhanced error type with suggestions
pub struct CliError {
    pub message: String,
    pub context: Option<String>,
    pub suggestions: Vec<String>,
    pub help_command: Option<String>,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: None,
            suggestions: Vec::new(),
            help_command: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_help(mut self, command: impl Into<String>) -> Self {
        self.help_command = Some(command.into());
        self
    }

    pub fn display(&self) {
        eprintln!("{} {}\n", style("✗").red().bold(), style(&self.message).red().bold());

        if let Some(ref context) = self.context {
            eprintln!("{}", context);
            eprintln!();
        }

        if !self.suggestions.is_empty() {
            eprintln!("{}", style("To fix this:").yellow().bold());
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, suggestion);
            }
            eprintln!();
        }

        if let Some(ref help_cmd) = self.help_command {
            eprintln!("{} {}", style("Need help?").cyan(), style(help_cmd).cyan().bold());
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Create error for a missing Gemini API key
pub fn missing_api_key() -> CliError {
    CliError::new("Gemini API key is not configured")
        .with_context("Playing a session needs a key for the Gemini generateContent API.")
        .with_suggestion("Set it in the environment: export REMOVIEW_API_KEY=\"...\"")
        .with_suggestion("Or add to .remoview/config.toml:\n  api_key = \"...\"")
        .with_suggestion("Or pass it once: remoview --api-key ... play")
        .with_help("Run: remoview config")
}

/// Create error for guesses rejected before any network call
pub fn invalid_guesses(error: &GuessError) -> CliError {
    CliError::new(INVALID_GUESSES_MESSAGE)
        .with_context(error.to_string())
        .with_suggestion("Give three concrete impressions (e.g. \"lighthouse\", not \"sky\")")
        .with_suggestion("Pick a continent and an area type from the listed choices")
        .with_help("Run: remoview play --help")
}

/// Create error for a failed remote round trip. The cause is in the logs only.
pub fn session_failed() -> CliError {
    CliError::new(SESSION_FAILED_MESSAGE)
        .with_suggestion("Check your network connection and run the session again")
        .with_suggestion("Inspect the cause with RUST_LOG=remoview_session=debug")
}

/// Create error for an unknown session id
pub fn session_not_found(id: &str) -> CliError {
    CliError::new("Session not found")
        .with_context(format!("No stored session has the ID {}.", id))
        .with_suggestion("List stored sessions: remoview history")
        .with_help("Run: remoview show --help")
}

/// Create error for guesses missing in non-interactive mode
pub fn guesses_required() -> CliError {
    CliError::new("All guesses are required in JSON mode")
        .with_context("Interactive prompts are disabled when --json is set.")
        .with_suggestion(
            "Pass --impression three times plus --continent, --area-type and --language",
        )
        .with_help("Run: remoview play --help")
}

#[cfg(test)]
mod tests {
    use super::*;
    use remoview_core::models::GuessField;

    #[test]
    fn test_invalid_guesses_uses_participant_message() {
        let err = invalid_guesses(&GuessError::MissingField { field: GuessField::Language });
        assert_eq!(err.message, INVALID_GUESSES_MESSAGE);
        assert_eq!(err.context.as_deref(), Some("Language is required"));
    }

    #[test]
    fn test_session_failed_hides_cause() {
        let err = session_failed();
        assert_eq!(err.to_string(), SESSION_FAILED_MESSAGE);
        assert!(err.context.is_none());
    }
}
