//! Error types for the pagesmith CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for pagesmith operations.
///
/// Each variant maps to a process exit code via [`PageError::exit_code`].
#[derive(Error, Debug)]
pub enum PageError {
    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// A template referenced a token with no wireframe entry.
    #[error("unknown token '[[{name}]]' in {location} (no wireframe entry)")]
    UnknownToken { name: String, location: String },

    /// The answer never matched the question's pattern within the retry ceiling.
    #[error("no valid answer for '{question}' after {attempts} attempt(s)")]
    ValidationExhausted { question: String, attempts: u32 },

    /// Reading an answer from the user failed.
    #[error("prompt for '{question}' failed: {reason}")]
    PromptFailed { question: String, reason: String },

    /// No template file exists for a page type.
    #[error("no template for page type '{page_type}' (looked for '{path}')")]
    TemplateNotFound { page_type: String, path: String },

    /// A wireframe names an action that was never registered.
    #[error("action '{0}' is not registered")]
    UnknownAction(String),

    /// A registered action handler reported a failure.
    #[error("action '{action}' failed: {reason}")]
    ActionFailed { action: String, reason: String },

    /// Filesystem operation failed.
    #[error("{0}")]
    IoError(String),
}

impl PageError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PageError::UserError(_)
            | PageError::UnknownToken { .. }
            | PageError::TemplateNotFound { .. }
            | PageError::UnknownAction(_)
            | PageError::ActionFailed { .. } => exit_codes::USER_ERROR,
            PageError::ValidationExhausted { .. } => exit_codes::VALIDATION_EXHAUSTED,
            PageError::PromptFailed { .. } => exit_codes::PROMPT_FAILURE,
            PageError::IoError(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for pagesmith operations.
pub type Result<T> = std::result::Result<T, PageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = PageError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn unknown_token_is_a_user_error() {
        let err = PageError::UnknownToken {
            name: "mystery".to_string(),
            location: "the interface template".to_string(),
        };
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn validation_exhausted_has_correct_exit_code() {
        let err = PageError::ValidationExhausted {
            question: "count".to_string(),
            attempts: 3,
        };
        assert_eq!(err.exit_code(), exit_codes::VALIDATION_EXHAUSTED);
    }

    #[test]
    fn prompt_failed_has_correct_exit_code() {
        let err = PageError::PromptFailed {
            question: "summary".to_string(),
            reason: "input closed".to_string(),
        };
        assert_eq!(err.exit_code(), exit_codes::PROMPT_FAILURE);
    }

    #[test]
    fn io_error_has_correct_exit_code() {
        let err = PageError::IoError("disk full".to_string());
        assert_eq!(err.exit_code(), exit_codes::IO_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = PageError::UnknownToken {
            name: "mystery".to_string(),
            location: "the interface template".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unknown token '[[mystery]]' in the interface template (no wireframe entry)"
        );

        let err = PageError::ValidationExhausted {
            question: "count".to_string(),
            attempts: 3,
        };
        assert_eq!(err.to_string(), "no valid answer for 'count' after 3 attempt(s)");
    }
}
