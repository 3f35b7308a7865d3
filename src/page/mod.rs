//! Pages: one rendered output artifact each.
//!
//! A page owns a local [`QuestionSet`] and holds a handle to the shared set
//! that every page in an invocation uses. Its lifecycle runs strictly forward:
//!
//! ```text
//! Scanned -> AwaitingSharedAnswers -> AwaitingLocalAnswers -> Rendered -> Written
//! ```
//!
//! The awaiting states are skipped when nothing is pending. An action run
//! while answering may add questions, which the caller resolves by calling
//! [`Page::ask_questions`] again before rendering.

mod ask;
mod render;


pub use ask::Interview;
pub use render::OUTPUT_EXTENSION;

use crate::error::{PageError, Result};
use crate::question::{Answer, QuestionSet};
use crate::template::{TemplateStore, scan_tokens};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

/// Handle to the invocation-wide shared question set.
pub type SharedQuestions = Rc<RefCell<QuestionSet>>;

/// Wrap a question set so pages can share it.
pub fn share(set: QuestionSet) -> SharedQuestions {
    Rc::new(RefCell::new(set))
}

/// Where a page is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PageState {
    Scanned,
    AwaitingSharedAnswers,
    AwaitingLocalAnswers,
    Rendered,
    Written,
}

/// Which question set a name lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scope {
    Shared,
    Local,
}

/// One output artifact.
#[derive(Debug)]
pub struct Page {
    name: String,
    page_type: String,
    shared: SharedQuestions,
    questions: QuestionSet,
    /// Starts as the raw template; rewritten by actions and rendering.
    pub contents: String,
    state: PageState,
}

impl Page {
    /// Load the template for `page_type` and register its tokens.
    ///
    /// The page type is itself a pre-answered question in both sets, so a
    /// template can print the artifact name with `[[<type>]]` or
    /// `[[shared:<type>]]` without prompting.
    pub fn new(
        name: impl Into<String>,
        page_type: impl Into<String>,
        shared: SharedQuestions,
        templates: &dyn TemplateStore,
    ) -> Result<Self> {
        let name = name.into();
        let page_type = page_type.into();

        shared
            .borrow_mut()
            .add(&page_type, Some(Answer::Text(name.clone())))?;

        let catalog = shared.borrow().catalog().clone();
        let intro = format!(
            "\nQuestions for the {} {} page\n{}",
            name,
            page_type,
            "-".repeat(80)
        );
        let mut questions = QuestionSet::new(intro, catalog);
        questions.add(&page_type, Some(Answer::Text(name.clone())))?;

        let contents = templates.template(&page_type)?;

        let mut page = Self {
            name,
            page_type,
            shared,
            questions,
            contents,
            state: PageState::Scanned,
        };
        let template = page.contents.clone();
        let found = page.register_tokens(&template)?;
        debug!(page = %page.name, page_type = %page.page_type, found, "template scanned");
        Ok(page)
    }

    /// Register every token in `text` into the shared or local set.
    ///
    /// Returns how many new questions were added. Used at construction and by
    /// actions that splice new template text into the page.
    pub fn register_tokens(&mut self, text: &str) -> Result<usize> {
        let mut added = 0;
        for token in scan_tokens(text) {
            let result = if token.is_shared() {
                self.shared.borrow_mut().add(&token.name, None)
            } else {
                self.questions.add(&token.name, None)
            };
            match result {
                Ok(true) => added += 1,
                Ok(false) => {}
                Err(PageError::UnknownToken { name, .. }) => {
                    return Err(PageError::UnknownToken {
                        name,
                        location: format!("the {} template", self.page_type),
                    });
                }
                Err(e) => return Err(e),
            }
        }
        Ok(added)
    }

    /// Pre-supply an answer by question name.
    ///
    /// Shared questions take precedence over local ones. Returns `Ok(false)`
    /// if this page knows no question by that name; an answer failing the
    /// question's pattern is a user error.
    pub fn seed(&mut self, name: &str, value: &str) -> Result<bool> {
        let scope = if self.shared.borrow().contains(name) {
            Scope::Shared
        } else if self.questions.contains(name) {
            Scope::Local
        } else {
            return Ok(false);
        };

        let mut set = self.set_mut(scope);
        let question = set.get_mut(name).ok_or_else(|| {
            PageError::UserError(format!("no question '{}' to seed", name))
        })?;
        if !question.accepts(value) {
            return Err(PageError::UserError(format!(
                "pre-supplied answer '{}' for '{}' does not match its pattern{}",
                value,
                name,
                question
                    .help()
                    .map(|h| format!(": {}", h))
                    .unwrap_or_default()
            )));
        }
        question.answer = Answer::from_input(value);
        Ok(true)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn page_type(&self) -> &str {
        &self.page_type
    }

    pub fn state(&self) -> PageState {
        self.state
    }

    /// The page's own questions.
    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    pub fn questions_mut(&mut self) -> &mut QuestionSet {
        &mut self.questions
    }

    /// The invocation-wide shared questions.
    pub fn shared(&self) -> &SharedQuestions {
        &self.shared
    }

    /// True if either set still has a pending question.
    pub fn needs_answers(&self) -> bool {
        self.shared.borrow().needs_answers() || self.questions.needs_answers()
    }

    pub(crate) fn set_mut(&mut self, scope: Scope) -> SetRef<'_> {
        match scope {
            Scope::Shared => SetRef::Shared(self.shared.borrow_mut()),
            Scope::Local => SetRef::Local(&mut self.questions),
        }
    }
}

/// Mutable access to either question set behind one type.
pub(crate) enum SetRef<'a> {
    Shared(std::cell::RefMut<'a, QuestionSet>),
    Local(&'a mut QuestionSet),
}

impl std::ops::Deref for SetRef<'_> {
    type Target = QuestionSet;

    fn deref(&self) -> &QuestionSet {
        match self {
            SetRef::Shared(set) => &**set,
            SetRef::Local(set) => &**set,
        }
    }
}

impl std::ops::DerefMut for SetRef<'_> {
    fn deref_mut(&mut self) -> &mut QuestionSet {
        match self {
            SetRef::Shared(set) => &mut **set,
            SetRef::Local(set) => &mut **set,
        }
    }
}
