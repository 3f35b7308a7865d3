//! Template loading and token discovery.
//!
//! Templates are plain text (usually HTML) containing placeholder tokens:
//!
//! - `[[name]]` - a local token, answered once per page
//! - `[[shared:name]]` - a shared token, answered once per invocation and
//!   reused by every page in the batch
//!
//! This module provides:
//!
//! - **Tokens**: the token grammar and a scanner over template text
//! - **Stores**: the [`TemplateStore`] seam plus directory and in-memory stores

mod store;
mod tokens;

#[cfg(test)]
mod tests;

pub use store::{DirTemplateStore, MemoryTemplateStore, TemplateStore};
pub use tokens::{Token, TokenScope, find_token_from, local_token, scan_tokens, shared_token};
