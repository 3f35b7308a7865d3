//! Rendering and writing.

use super::{Page, PageState};
use crate::error::{PageError, Result};
use crate::fs::{ensure_dir, write_file};
use crate::question::Answer;
use crate::template::{Token, find_token_from};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Extension of every written page.
pub const OUTPUT_EXTENSION: &str = "html";

impl Page {
    /// Replace every resolvable token in `contents`.
    ///
    /// Tokens whose answer is pending, "Don't ask.", or empty are left as they
    /// are. Tokens inside an inserted answer are expanded in the same call, so
    /// rendering twice in a row changes nothing unless an answer refers to
    /// itself. A token is never expanded inside its own answer; such a
    /// self-reference stays literal. Rendering again after a follow-up pass
    /// fills in tokens answered since.
    pub fn render(&mut self) {
        let mut replaced = 0;
        let contents = std::mem::take(&mut self.contents);
        self.contents = self.expand(contents, &mut Vec::new(), &mut replaced);

        debug!(page = %self.name, replaced, "rendered");
        self.state = PageState::Rendered;
    }

    /// Resolve tokens in `text`, recursing into each inserted answer.
    ///
    /// `open` holds the literals currently being expanded.
    fn expand(&self, mut text: String, open: &mut Vec<String>, replaced: &mut usize) -> String {
        let mut pos = 0;
        while let Some(token) = find_token_from(&text, pos) {
            let literal = token.literal();
            let answer = if open.contains(&literal) {
                None
            } else {
                self.resolve(&token)
            };

            match answer {
                Some(answer) => {
                    open.push(literal);
                    let inserted = self.expand(answer, open, replaced);
                    open.pop();

                    text.replace_range(token.span.clone(), &inserted);
                    pos = token.span.start + inserted.len();
                    *replaced += 1;
                }
                None => pos = token.span.end,
            }
        }
        text
    }

    /// The substitution text for `token`, if its answer has one.
    fn resolve(&self, token: &Token) -> Option<String> {
        if token.is_shared() {
            self.shared
                .borrow()
                .get(&token.name)
                .and_then(|q| q.answer.substitution().map(str::to_string))
        } else {
            self.questions
                .get(&token.name)
                .and_then(|q| q.answer.substitution().map(str::to_string))
        }
    }

    /// Replace every literal `token` with `answer`, if the answer substitutes.
    pub fn substitute(&mut self, token: &str, answer: &Answer) {
        if let Some(text) = answer.substitution()
            && self.contents.contains(token)
        {
            self.contents = self.contents.replace(token, text);
        }
    }

    /// Remove every literal `token` from the contents.
    pub fn remove_token(&mut self, token: &str) {
        self.contents = self.contents.replace(token, "");
    }

    /// Path this page writes to under `out_root`:
    /// `<out_root>/<shared>/<shared>_<name>_<type>.html`.
    pub fn output_path(&self, out_root: &Path) -> Result<PathBuf> {
        let shared = self.shared.borrow();
        let shared_name = shared.name().ok_or_else(|| {
            PageError::UserError(
                "the shared question set has no name; cannot choose an output directory"
                    .to_string(),
            )
        })?;
        Ok(out_root.join(shared_name).join(format!(
            "{}_{}_{}.{}",
            shared_name, self.name, self.page_type, OUTPUT_EXTENSION
        )))
    }

    /// Render, then write the page, replacing any existing file.
    pub fn write(&mut self, out_root: &Path) -> Result<PathBuf> {
        self.render();

        let path = self.output_path(out_root)?;
        if let Some(dir) = path.parent() {
            ensure_dir(dir)?;
        }
        write_file(&path, &self.contents)?;

        info!(page = %self.name, page_type = %self.page_type, path = %path.display(), "page written");
        self.state = PageState::Written;
        Ok(path)
    }
}
