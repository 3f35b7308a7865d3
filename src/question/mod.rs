//! Questions and question sets.
//!
//! A [`Question`] is one answerable slot bound to a wireframe entry. A
//! [`QuestionSet`] groups questions under one intro message and is either
//! owned by a single page (local) or shared by every page in an invocation.

mod answer;
mod set;


pub use answer::Answer;
pub use set::QuestionSet;

use crate::error::{PageError, Result};
use crate::page::{Interview, Page};
use crate::prompt::Prompter;
use crate::template::{TokenScope, local_token, shared_token};
use crate::wireframe::WireframeEntry;
use regex::Regex;
use tracing::{debug, warn};

/// One answerable slot.
#[derive(Debug, Clone)]
pub struct Question {
    name: String,
    entry: WireframeEntry,
    pattern: Option<Regex>,
    scope: TokenScope,
    pub answer: Answer,
}

impl Question {
    /// Bind a question to its wireframe entry. The answer starts pending.
    pub fn new(name: impl Into<String>, entry: WireframeEntry) -> Result<Self> {
        let name = name.into();
        let pattern = match &entry.pattern {
            Some(p) => Some(Regex::new(p).map_err(|e| {
                PageError::UserError(format!(
                    "question '{}' has an invalid pattern '{}': {}",
                    name, p, e
                ))
            })?),
            None => None,
        };
        Ok(Self {
            name,
            entry,
            pattern,
            scope: TokenScope::Local,
            answer: Answer::Pending,
        })
    }

    /// A question with no wireframe behind it, answered up front.
    pub fn seeded(name: impl Into<String>, answer: Answer) -> Self {
        Self {
            name: name.into(),
            entry: WireframeEntry::default(),
            pattern: None,
            scope: TokenScope::Local,
            answer,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scope(&self) -> TokenScope {
        self.scope
    }

    /// Set which token form this question answers.
    pub fn with_scope(mut self, scope: TokenScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn entry(&self) -> &WireframeEntry {
        &self.entry
    }

    pub fn question(&self) -> &str {
        &self.entry.question
    }

    pub fn default_answer(&self) -> Option<&str> {
        self.entry.default.as_deref()
    }

    pub fn help(&self) -> Option<&str> {
        self.entry.help.as_deref()
    }

    pub fn action_name(&self) -> Option<&str> {
        self.entry.action.as_ref().map(|a| a.name.as_str())
    }

    /// The placeholder replaced by this question's answer: `[[name]]`, or
    /// `[[shared:name]]` for a shared question.
    pub fn token(&self) -> String {
        match self.scope {
            TokenScope::Local => local_token(&self.name),
            TokenScope::Shared => shared_token(&self.name),
        }
    }

    /// Prompt text, with the default in parentheses when there is one.
    pub fn text(&self) -> String {
        match self.default_answer() {
            Some(default) => format!("\n{} ({})\n", self.entry.question, default),
            None => format!("\n{}\n", self.entry.question),
        }
    }

    /// True if there is no pattern or the pattern matches somewhere in the answer.
    pub fn is_answer_valid(&self) -> bool {
        match (&self.pattern, &self.answer) {
            (None, _) => true,
            (Some(_), Answer::DontAsk) => true,
            (Some(_), Answer::Pending) => false,
            (Some(_), Answer::Empty) => self.accepts(""),
            (Some(_), Answer::Text(s)) => self.accepts(s),
        }
    }

    /// Check a candidate answer against the pattern without storing it.
    pub fn accepts(&self, candidate: &str) -> bool {
        self.pattern.as_ref().is_none_or(|re| re.is_match(candidate))
    }

    /// Prompt until a valid answer arrives or `max_attempts` is reached.
    ///
    /// Rejected answers print the help text and re-prompt. The stored answer
    /// is only changed once a valid one is read.
    pub fn prompt(&mut self, prompter: &mut dyn Prompter, max_attempts: u32) -> Result<()> {
        let text = self.text();
        for attempt in 1..=max_attempts {
            let input = prompter
                .ask(&text, self.default_answer())
                .map_err(|e| PageError::PromptFailed {
                    question: self.name.clone(),
                    reason: e.to_string(),
                })?;

            if self.accepts(&input) {
                debug!(question = %self.name, attempt, "answer accepted");
                self.answer = Answer::from_input(input);
                return Ok(());
            }

            warn!(question = %self.name, attempt, "answer rejected by pattern");
            prompter
                .say(self.help().unwrap_or("That answer is not valid. Try again."))
                .map_err(|e| PageError::PromptFailed {
                    question: self.name.clone(),
                    reason: e.to_string(),
                })?;
        }

        Err(PageError::ValidationExhausted {
            question: self.name.clone(),
            attempts: max_attempts,
        })
    }

    /// Resolve this question for `page`.
    ///
    /// Prompts, then runs the configured action (which may mutate the page),
    /// then substitutes this question's token in the page contents. A failed
    /// prompt fails the page without touching its contents.
    pub fn ask(&mut self, page: &mut Page, interview: &mut Interview<'_>) -> Result<()> {
        self.prompt(&mut *interview.prompter, interview.max_attempts)?;

        if let Some(action) = self.action_name() {
            let action = action.to_string();
            debug!(question = %self.name, %action, "running action");
            interview.actions.run(&action, page, self)?;
        }

        page.substitute(&self.token(), &self.answer);
        Ok(())
    }
}
