//! Answer states.

use crate::wireframe::DONT_ASK;
use std::fmt;

/// The state of a question's answer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Answer {
    /// Not answered yet.
    #[default]
    Pending,
    /// Fixed; never prompted and never substituted.
    DontAsk,
    /// Answered with nothing ("no"). The token is left for later passes.
    Empty,
    /// A real answer, substituted into templates.
    Text(String),
}

impl Answer {
    /// Map raw input: an empty string means "no".
    pub fn from_input(input: impl Into<String>) -> Self {
        let input = input.into();
        if input.is_empty() {
            Answer::Empty
        } else if input == DONT_ASK {
            Answer::DontAsk
        } else {
            Answer::Text(input)
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Answer::Pending)
    }

    /// Text to substitute for a token, if this answer substitutes at all.
    pub fn substitution(&self) -> Option<&str> {
        match self {
            Answer::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for Answer {
    fn from(value: &str) -> Self {
        Answer::from_input(value)
    }
}

impl From<String> for Answer {
    fn from(value: String) -> Self {
        Answer::from_input(value)
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Pending => write!(f, "<pending>"),
            Answer::DontAsk => write!(f, "{}", DONT_ASK),
            Answer::Empty => write!(f, "<no>"),
            Answer::Text(s) => write!(f, "{}", s),
        }
    }
}
