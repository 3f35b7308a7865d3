//! Template stores.

use crate::error::{PageError, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Supplies raw template text for a page type.
pub trait TemplateStore {
    fn template(&self, page_type: &str) -> Result<String>;
}

/// Reads `<root>/<page_type>.<extension>` with the page type lowercased.
#[derive(Debug, Clone)]
pub struct DirTemplateStore {
    root: PathBuf,
    extension: String,
}

impl DirTemplateStore {
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path the store reads for `page_type`.
    pub fn path_for(&self, page_type: &str) -> PathBuf {
        self.root
            .join(format!("{}.{}", page_type.to_lowercase(), self.extension))
    }
}

impl TemplateStore for DirTemplateStore {
    fn template(&self, page_type: &str) -> Result<String> {
        let path = self.path_for(page_type);
        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(PageError::TemplateNotFound {
                    page_type: page_type.to_string(),
                    path: path.display().to_string(),
                })
            }
            Err(e) => Err(PageError::UserError(format!(
                "failed to read template '{}': {}",
                path.display(),
                e
            ))),
        }
    }
}

/// Templates held in memory, keyed by lowercased page type.
#[derive(Debug, Clone, Default)]
pub struct MemoryTemplateStore {
    templates: HashMap<String, String>,
}

impl MemoryTemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, page_type: &str, text: impl Into<String>) -> Self {
        self.templates.insert(page_type.to_lowercase(), text.into());
        self
    }
}

impl TemplateStore for MemoryTemplateStore {
    fn template(&self, page_type: &str) -> Result<String> {
        let key = page_type.to_lowercase();
        self.templates
            .get(&key)
            .cloned()
            .ok_or_else(|| PageError::TemplateNotFound {
                page_type: page_type.to_string(),
                path: format!("<memory>/{}", key),
            })
    }
}
