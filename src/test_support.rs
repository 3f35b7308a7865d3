use crate::page::{SharedQuestions, share};
use crate::prompt::Prompter;
use crate::question::QuestionSet;
use crate::wireframe::{Wireframe, WireframeCatalog, WireframeEntry};
use std::collections::VecDeque;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock, Mutex, MutexGuard};

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // The current directory is process-global; serialize tests that change it.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Prompter that replays canned answers and records everything shown.
#[derive(Debug, Default)]
pub(crate) struct ScriptedPrompter {
    answers: VecDeque<String>,
    pub(crate) asked: Vec<String>,
    pub(crate) said: Vec<String>,
    /// When set, every `say` fails as if stdout were closed.
    closed_output: bool,
}

impl ScriptedPrompter {
    pub(crate) fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Make every later `say` fail as if stdout were closed.
    pub(crate) fn with_closed_output(mut self) -> Self {
        self.closed_output = true;
        self
    }

    pub(crate) fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, text: &str, default: Option<&str>) -> io::Result<String> {
        self.asked.push(text.to_string());
        match self.answers.pop_front() {
            Some(answer) if answer.is_empty() => Ok(default.unwrap_or_default().to_string()),
            Some(answer) => Ok(answer),
            None => Err(io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted")),
        }
    }

    fn say(&mut self, line: &str) -> io::Result<()> {
        if self.closed_output {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "output closed"));
        }
        self.said.push(line.to_string());
        Ok(())
    }
}

/// Catalog used across page and command tests.
pub(crate) fn test_catalog() -> Arc<WireframeCatalog> {
    let catalog = WireframeCatalog::new()
        .insert("interface", Wireframe::Ask(WireframeEntry::new("Interface name?")))
        .insert("summary", Wireframe::Ask(WireframeEntry::new("Summary?")))
        .insert(
            "count",
            Wireframe::Ask(
                WireframeEntry::new("How many?")
                    .with_pattern(r"^\d+$")
                    .with_help("Enter a whole number."),
            ),
        )
        .insert(
            "status",
            Wireframe::Ask(WireframeEntry::new("Status?").with_default("draft")),
        )
        .insert(
            "examples",
            Wireframe::Ask(
                WireframeEntry::new("Include examples? (y/n)")
                    .with_pattern("^(y|yes|n|no)$")
                    .with_help("Answer y or n.")
                    .with_action("include"),
            ),
        )
        .insert(
            "example_title",
            Wireframe::Ask(WireframeEntry::new("Example title?")),
        )
        .insert("copyright", Wireframe::DontAsk);
    Arc::new(catalog)
}

/// A named shared set over [`test_catalog`].
pub(crate) fn shared_set(name: &str) -> SharedQuestions {
    share(QuestionSet::named(name, "Shared questions", test_catalog()))
}
