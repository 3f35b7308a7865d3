//! Ordered question collections.

use super::{Answer, Question};
use crate::error::{PageError, Result};
use crate::prompt::Prompter;
use crate::template::TokenScope;
use crate::wireframe::{Wireframe, WireframeCatalog};
use std::sync::Arc;
use tracing::debug;

/// Questions sharing one intro message.
///
/// Insertion order is prompt order. Adding a name twice is a no-op, so the
/// first registrant of a shared token wins.
#[derive(Debug, Clone)]
pub struct QuestionSet {
    name: Option<String>,
    intro: String,
    catalog: Arc<WireframeCatalog>,
    questions: Vec<Question>,
}

impl QuestionSet {
    pub fn new(intro: impl Into<String>, catalog: Arc<WireframeCatalog>) -> Self {
        Self {
            name: None,
            intro: intro.into(),
            catalog,
            questions: Vec::new(),
        }
    }

    /// A set labelled with the artifact's root name, used for shared questions.
    pub fn named(
        name: impl Into<String>,
        intro: impl Into<String>,
        catalog: Arc<WireframeCatalog>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new(intro, catalog)
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn intro(&self) -> &str {
        &self.intro
    }

    pub fn set_intro(&mut self, message: impl Into<String>) {
        self.intro = message.into();
    }

    pub fn catalog(&self) -> &Arc<WireframeCatalog> {
        &self.catalog
    }

    /// Register a question.
    ///
    /// Returns `Ok(false)` when nothing was added: the catalog marks the name
    /// "Don't ask." or it is already present. A name missing from the catalog
    /// is accepted only with a seed answer.
    pub fn add(&mut self, name: &str, answer: Option<Answer>) -> Result<bool> {
        if self.contains(name) {
            return Ok(false);
        }

        let question = match (self.catalog.get(name), answer) {
            (Some(Wireframe::DontAsk), _) => return Ok(false),
            (Some(Wireframe::Ask(entry)), answer) => {
                let mut q = Question::new(name, entry.clone())?;
                if let Some(answer) = answer {
                    q.answer = answer;
                }
                q
            }
            (None, Some(answer)) => Question::seeded(name, answer),
            (None, None) => {
                return Err(PageError::UnknownToken {
                    name: name.to_string(),
                    location: self.label(),
                });
            }
        };

        debug!(set = %self.label(), question = %name, "question registered");
        self.questions.push(question.with_scope(self.scope()));
        Ok(true)
    }

    /// Force-set an existing question's answer.
    pub fn answer(&mut self, name: &str, value: impl Into<Answer>) -> Result<()> {
        let label = self.label();
        let question = self.get_mut(name).ok_or_else(|| {
            PageError::UserError(format!("no question '{}' in {}", name, label))
        })?;
        question.answer = value.into();
        Ok(())
    }

    /// True iff any question is still pending.
    pub fn needs_answers(&self) -> bool {
        self.questions.iter().any(|q| q.answer.is_pending())
    }

    /// Print the intro unless it is empty.
    pub fn print_intro(&self, prompter: &mut dyn Prompter) -> Result<()> {
        if self.intro.is_empty() {
            return Ok(());
        }
        prompter
            .say(&self.intro)
            .map_err(|e| PageError::PromptFailed {
                question: self.label(),
                reason: e.to_string(),
            })
    }

    pub fn get(&self, name: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.name() == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Question> {
        self.questions.iter_mut().find(|q| q.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Names of questions still pending, in prompt order.
    pub fn pending(&self) -> Vec<String> {
        self.questions
            .iter()
            .filter(|q| q.answer.is_pending())
            .map(|q| q.name().to_string())
            .collect()
    }

    /// Named sets hold shared questions.
    pub fn scope(&self) -> TokenScope {
        if self.name.is_some() {
            TokenScope::Shared
        } else {
            TokenScope::Local
        }
    }

    fn label(&self) -> String {
        match &self.name {
            Some(name) => format!("shared questions for '{}'", name),
            None => "local questions".to_string(),
        }
    }
}
