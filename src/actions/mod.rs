//! Post-answer actions.
//!
//! An action runs after a specific question is answered and before its token
//! is substituted. It may rewrite the page contents, add questions, or change
//! the answer. Wireframes refer to actions by name; the registry resolves
//! those names once at startup.

mod include;


pub use include::IncludeAction;

use crate::error::{PageError, Result};
use crate::page::Page;
use crate::question::Question;
use crate::template::TemplateStore;
use crate::wireframe::WireframeCatalog;
use std::collections::BTreeMap;
use std::sync::Arc;

/// A named side effect run after a question is answered.
pub trait ActionHandler {
    fn run(&self, page: &mut Page, question: &mut Question) -> Result<()>;
}

/// Name to handler mapping.
#[derive(Default)]
pub struct ActionRegistry {
    handlers: BTreeMap<String, Box<dyn ActionHandler>>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in actions (`include`).
    pub fn with_builtins(templates: Arc<dyn TemplateStore>) -> Self {
        let mut registry = Self::new();
        registry.register(include::NAME, IncludeAction::new(templates));
        registry
    }

    /// Add or replace a handler.
    pub fn register(&mut self, name: impl Into<String>, handler: impl ActionHandler + 'static) {
        self.handlers.insert(name.into(), Box::new(handler));
    }

    pub fn get(&self, name: &str) -> Option<&dyn ActionHandler> {
        self.handlers.get(name).map(|h| h.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    /// Run the handler registered as `name`.
    pub fn run(&self, name: &str, page: &mut Page, question: &mut Question) -> Result<()> {
        let handler = self
            .get(name)
            .ok_or_else(|| PageError::UnknownAction(name.to_string()))?;
        handler.run(page, question)
    }

    /// Fail if the catalog names an action this registry lacks.
    pub fn check_catalog(&self, catalog: &WireframeCatalog) -> Result<()> {
        match catalog.action_names().into_iter().find(|n| !self.contains(n)) {
            Some(missing) => Err(PageError::UnknownAction(missing.to_string())),
            None => Ok(()),
        }
    }
}

impl std::fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionRegistry")
            .field("handlers", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}
