//! CLI argument parsing for pagesmith.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Pagesmith: interactive page scaffolding from wireframe templates.
///
/// Each page type has a template containing `[[name]]` and
/// `[[shared:name]]` tokens. Pagesmith asks one question per token
/// (shared tokens once per run), fills the answers in, and writes
/// `<out>/<name>/<name>_<page>_<type>.html`.
#[derive(Parser, Debug)]
#[command(name = "pagesmith")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (default: ./pagesmith.yaml if present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for pagesmith.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Ask questions and write one page per type.
    ///
    /// Shared questions are asked once for the whole run, then each page's
    /// own questions, then every page is rendered and written.
    Build(BuildArgs),

    /// List the questions the given page types would ask.
    ///
    /// Nothing is prompted or written.
    Questions(QuestionsArgs),
}

/// Overrides for config file paths.
#[derive(Args, Debug, Default, Clone)]
pub struct PathArgs {
    /// Template directory.
    #[arg(long)]
    pub templates: Option<PathBuf>,

    /// Wireframe catalog file.
    #[arg(long)]
    pub wireframes: Option<PathBuf>,
}

/// A page to generate: `type` or `type:page-name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSpec {
    pub page_type: String,
    /// Defaults to the artifact name.
    pub name: Option<String>,
}

fn parse_page_spec(s: &str) -> Result<PageSpec, String> {
    let (page_type, name) = match s.split_once(':') {
        Some((t, n)) => (t.trim(), Some(n.trim())),
        None => (s.trim(), None),
    };
    if page_type.is_empty() {
        return Err(format!("page '{}' has an empty type", s));
    }
    if name.is_some_and(str::is_empty) {
        return Err(format!("page '{}' has an empty name after ':'", s));
    }
    Ok(PageSpec {
        page_type: page_type.to_string(),
        name: name.map(str::to_string),
    })
}

fn parse_answer(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{}'", s)),
    }
}

/// Arguments for the `build` command.
#[derive(Parser, Debug)]
pub struct BuildArgs {
    /// Artifact name; names the output directory and answers shared `[[<type>]]` tokens.
    pub name: String,

    /// Pages to build, as `type` or `type:page-name`.
    #[arg(required = true, value_parser = parse_page_spec)]
    pub pages: Vec<PageSpec>,

    /// Pre-supplied answer (repeatable). Skips the prompt for that question.
    #[arg(short, long = "answer", value_name = "KEY=VALUE", value_parser = parse_answer)]
    pub answers: Vec<(String, String)>,

    /// Output root directory.
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Prompts allowed per question before failing.
    #[arg(long)]
    pub max_attempts: Option<u32>,

    #[command(flatten)]
    pub paths: PathArgs,
}

/// Arguments for the `questions` command.
#[derive(Parser, Debug)]
pub struct QuestionsArgs {
    /// Page types to inspect.
    #[arg(required = true)]
    pub types: Vec<String>,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub paths: PathArgs,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
