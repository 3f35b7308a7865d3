//! Wireframe catalog: the static definitions behind every question.
//!
//! A catalog maps a question name to either a full [`WireframeEntry`] or the
//! literal string `"Don't ask."`, which marks a token whose answer is fixed and
//! must never trigger a prompt.
//!
//! # File format
//!
//! ```yaml
//! interface:
//!   question: What is the interface name?
//! summary:
//!   question: Summarize the interface in one sentence.
//!   help: The summary appears at the top of the page.
//! spec_count:
//!   question: How many specifications define it?
//!   default: "1"
//!   pattern: ^\d+$
//!   help: Enter a whole number.
//! examples:
//!   question: Include an examples section? (y/n)
//!   action:
//!     name: include
//! copyright: Don't ask.
//! ```
//!
//! JSON catalogs load too, since JSON is valid YAML.

#[cfg(test)]
mod tests;

use crate::error::{PageError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Reserved catalog value that suppresses prompting for a token.
pub const DONT_ASK: &str = "Don't ask.";

/// A reference to a named post-answer action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRef {
    pub name: String,
}

/// Definition of one askable question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireframeEntry {
    /// Prompt text shown to the user.
    pub question: String,

    /// Answer used when the user submits an empty line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    /// Regex the answer must match (search semantics, not a full match).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Printed after an answer is rejected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,

    /// Action run after the question is answered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<ActionRef>,
}

impl WireframeEntry {
    /// Create an entry with only prompt text.
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            ..Self::default()
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn with_action(mut self, name: impl Into<String>) -> Self {
        self.action = Some(ActionRef { name: name.into() });
        self
    }
}

/// One catalog value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Wireframe {
    Ask(WireframeEntry),
    DontAsk,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawWireframe {
    Sentinel(String),
    Entry(WireframeEntry),
}

/// Read-only mapping from question name to its wireframe.
#[derive(Debug, Clone, Default)]
pub struct WireframeCatalog {
    entries: BTreeMap<String, Wireframe>,
}

impl WireframeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog from a YAML (or JSON) file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PageError::UserError(format!(
                "failed to read wireframe catalog '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse and validate a catalog from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let raw: BTreeMap<String, RawWireframe> = serde_yaml::from_str(yaml).map_err(|e| {
            PageError::UserError(format!("failed to parse wireframe catalog: {}", e))
        })?;

        let mut catalog = Self::new();
        for (name, value) in raw {
            let wireframe = match value {
                RawWireframe::Entry(entry) => Wireframe::Ask(entry),
                RawWireframe::Sentinel(s) if s == DONT_ASK => Wireframe::DontAsk,
                RawWireframe::Sentinel(s) => {
                    return Err(PageError::UserError(format!(
                        "wireframe '{}' has string value '{}'; the only allowed string is \"{}\"",
                        name, s, DONT_ASK
                    )));
                }
            };
            catalog.entries.insert(name, wireframe);
        }

        catalog.validate()?;
        Ok(catalog)
    }

    /// Add or replace a wireframe. Returns `self` for chaining.
    pub fn insert(mut self, name: impl Into<String>, wireframe: Wireframe) -> Self {
        self.entries.insert(name.into(), wireframe);
        self
    }

    /// Compile every pattern so a bad regex fails at load time.
    pub fn validate(&self) -> Result<()> {
        for (name, wireframe) in &self.entries {
            if let Wireframe::Ask(entry) = wireframe {
                if entry.question.trim().is_empty() {
                    return Err(PageError::UserError(format!(
                        "wireframe '{}' has an empty question",
                        name
                    )));
                }
                if let Some(pattern) = &entry.pattern {
                    Regex::new(pattern).map_err(|e| {
                        PageError::UserError(format!(
                            "wireframe '{}' has an invalid pattern '{}': {}",
                            name, pattern, e
                        ))
                    })?;
                }
            }
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Wireframe> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn is_dont_ask(&self, name: &str) -> bool {
        matches!(self.entries.get(name), Some(Wireframe::DontAsk))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every action name referenced by an entry, deduplicated.
    pub fn action_names(&self) -> BTreeSet<&str> {
        self.entries
            .values()
            .filter_map(|w| match w {
                Wireframe::Ask(entry) => entry.action.as_ref().map(|a| a.name.as_str()),
                Wireframe::DontAsk => None,
            })
            .collect()
    }
}
