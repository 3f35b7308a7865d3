//! Question-asking passes.

use super::{Page, PageState, Scope};
use crate::actions::ActionRegistry;
use crate::error::Result;
use crate::prompt::Prompter;
use tracing::debug;

const MORE_SHARED_INTRO: &str = "More shared questions found.";

/// Everything an asking pass needs besides the page itself.
pub struct Interview<'a> {
    pub prompter: &'a mut dyn Prompter,
    pub actions: &'a ActionRegistry,
    /// Retry ceiling for answers rejected by a pattern.
    pub max_attempts: u32,
}

impl<'a> Interview<'a> {
    pub fn new(prompter: &'a mut dyn Prompter, actions: &'a ActionRegistry, max_attempts: u32) -> Self {
        Self {
            prompter,
            actions,
            max_attempts,
        }
    }
}

impl Page {
    /// Ask every pending question, shared ones first.
    ///
    /// `extra_message` marks a follow-up pass, typically after an action added
    /// questions; it replaces the intro banners for this pass.
    pub fn ask_questions(
        &mut self,
        interview: &mut Interview<'_>,
        extra_message: Option<&str>,
    ) -> Result<()> {
        if self.shared.borrow().needs_answers() {
            if extra_message.is_some() {
                self.shared.borrow_mut().set_intro(format!(
                    "{}\n{}",
                    MORE_SHARED_INTRO,
                    "-".repeat(MORE_SHARED_INTRO.len())
                ));
            }
            self.state = PageState::AwaitingSharedAnswers;
            self.ask_set(Scope::Shared, interview)?;
        }

        if self.questions.needs_answers() {
            if let Some(message) = extra_message {
                self.questions.set_intro(format!(
                    "{}\n{}",
                    message,
                    "-".repeat(message.chars().count())
                ));
            }
            self.state = PageState::AwaitingLocalAnswers;
            self.ask_set(Scope::Local, interview)?;
        }

        Ok(())
    }

    /// One pass over the questions pending when the pass starts.
    fn ask_set(&mut self, scope: Scope, interview: &mut Interview<'_>) -> Result<()> {
        let pending = {
            let set = self.set_mut(scope);
            if !set.needs_answers() {
                return Ok(());
            }
            set.print_intro(&mut *interview.prompter)?;
            set.pending()
        };
        debug!(page = %self.name, ?scope, count = pending.len(), "asking pass");

        for name in pending {
            // An earlier action may have answered or replaced this one.
            let Some(mut question) = self
                .set_mut(scope)
                .get(&name)
                .filter(|q| q.answer.is_pending())
                .cloned()
            else {
                continue;
            };

            question.ask(self, interview)?;

            if let Some(stored) = self.set_mut(scope).get_mut(&name) {
                stored.answer = question.answer;
            }
        }

        Ok(())
    }
}
