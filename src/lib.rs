//! Pagesmith: interactive page scaffolding from wireframe templates.
//!
//! A run builds one or more pages for a single artifact. Each page type has
//! a template containing `[[name]]` (per page) and `[[shared:name]]` (per run)
//! tokens. Every token names a wireframe in the catalog describing the
//! question to ask. Answers are validated, optionally post-processed by a
//! named action, substituted into the template, and written to disk.

pub mod actions;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod page;
pub mod prompt;
pub mod question;
pub mod template;
pub mod wireframe;

#[cfg(test)]
mod test_support;
