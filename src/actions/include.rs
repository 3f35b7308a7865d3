//! The `include` action: optional template sections.
//!
//! Bound to a yes/no question. On yes, the template fragment named after the
//! question replaces the question's token and the fragment's own tokens are
//! registered, so the caller's next asking pass picks them up. On no, the
//! token is removed and the answer becomes empty.
//!
//! A shared question edits its `[[shared:name]]` token. Its "no" answer is
//! recorded as an empty text so pages rendered later drop the token too.

use super::ActionHandler;
use crate::error::{PageError, Result};
use crate::page::Page;
use crate::question::{Answer, Question};
use crate::template::{TemplateStore, TokenScope};
use std::sync::Arc;
use tracing::debug;

pub(super) const NAME: &str = "include";

pub struct IncludeAction {
    templates: Arc<dyn TemplateStore>,
}

impl IncludeAction {
    pub fn new(templates: Arc<dyn TemplateStore>) -> Self {
        Self { templates }
    }
}

fn parse_yes_no(answer: &Answer) -> Option<bool> {
    match answer {
        Answer::Empty => Some(false),
        Answer::Text(s) => match s.trim().to_lowercase().as_str() {
            "y" | "yes" => Some(true),
            "n" | "no" => Some(false),
            _ => None,
        },
        Answer::Pending | Answer::DontAsk => None,
    }
}

impl ActionHandler for IncludeAction {
    fn run(&self, page: &mut Page, question: &mut Question) -> Result<()> {
        let token = question.token();

        let include = parse_yes_no(&question.answer).ok_or_else(|| PageError::ActionFailed {
            action: NAME.to_string(),
            reason: format!(
                "expected yes or no for '{}', got '{}'",
                question.name(),
                question.answer
            ),
        })?;

        if !include {
            page.remove_token(&token);
            question.answer = match question.scope() {
                TokenScope::Local => Answer::Empty,
                TokenScope::Shared => Answer::Text(String::new()),
            };
            return Ok(());
        }

        let fragment = self.templates.template(question.name())?;
        let added = page.register_tokens(&fragment)?;
        debug!(
            page = %page.name(),
            section = %question.name(),
            scope = ?question.scope(),
            added,
            "section included"
        );

        question.answer = Answer::Text(fragment);
        page.substitute(&token, &question.answer);
        Ok(())
    }
}
