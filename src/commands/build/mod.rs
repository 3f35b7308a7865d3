//! Implementation of the `pagesmith build` command.
//!
//! # What `pagesmith build` does
//!
//! 1. Creates one shared question set named after the artifact
//! 2. Creates one page per requested type, scanning each template
//! 3. Applies `--answer` values to whichever pages know the question
//! 4. For each page in order: asks shared then local questions, then repeats
//!    follow-up passes while actions keep adding questions
//! 5. Renders and writes every page under `<out>/<name>/`


use super::Environment;
use crate::cli::{BuildArgs, PageSpec};
use crate::error::{PageError, Result};
use crate::page::{Interview, Page, share};
use crate::prompt::{Prompter, TerminalPrompter};
use crate::question::QuestionSet;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Execute the `pagesmith build` command.
pub fn cmd_build(args: BuildArgs, config_path: Option<&Path>) -> Result<()> {
    let mut env = Environment::load(config_path, &args.paths)?;
    if let Some(out) = args.out {
        env.config.output_dir = out;
    }
    if let Some(max_attempts) = args.max_attempts {
        env.config.max_attempts = max_attempts;
        env.config.validate()?;
    }

    let mut prompter = TerminalPrompter::stdio();
    let written = build_pages(&env, &args.name, &args.pages, &args.answers, &mut prompter)?;

    println!();
    println!("Wrote {} page(s):", written.len());
    for path in &written {
        println!("  {}", path.display());
    }
    Ok(())
}

/// Build, ask, and write every page for one artifact.
///
/// Pages are processed strictly one after another; the shared set is the only
/// state that crosses page boundaries. Returns the written paths in order.
pub fn build_pages(
    env: &Environment,
    name: &str,
    specs: &[PageSpec],
    answers: &[(String, String)],
    prompter: &mut dyn Prompter,
) -> Result<Vec<PathBuf>> {
    let intro = format!("\nShared questions for {}\n{}", name, "-".repeat(80));
    let shared = share(QuestionSet::named(name, intro, env.catalog.clone()));

    let mut seen = HashSet::new();
    let mut pages = Vec::with_capacity(specs.len());
    for spec in specs {
        let page_name = spec.name.as_deref().unwrap_or(name);
        if !seen.insert((page_name.to_string(), spec.page_type.clone())) {
            return Err(PageError::UserError(format!(
                "page '{}' of type '{}' was requested twice",
                page_name, spec.page_type
            )));
        }
        pages.push(Page::new(
            page_name,
            &spec.page_type,
            shared.clone(),
            &*env.templates,
        )?);
    }

    seed_answers(&mut pages, answers)?;

    let mut interview = Interview::new(prompter, &env.actions, env.config.max_attempts);
    for page in &mut pages {
        ask_until_answered(page, &mut interview, env.config.max_passes)?;
    }

    let mut written = Vec::with_capacity(pages.len());
    for page in &mut pages {
        written.push(page.write(&env.config.output_dir)?);
    }
    info!(name, pages = written.len(), "build complete");
    Ok(written)
}

/// Apply pre-supplied answers. Every key must be known to at least one page.
fn seed_answers(pages: &mut [Page], answers: &[(String, String)]) -> Result<()> {
    for (key, value) in answers {
        let mut known = false;
        for page in pages.iter_mut() {
            known |= page.seed(key, value)?;
        }
        if !known {
            return Err(PageError::UserError(format!(
                "--answer {}: no requested page asks a question named '{}'",
                key, key
            )));
        }
        debug!(question = %key, "answer pre-supplied");
    }
    Ok(())
}

/// First pass, then follow-up passes while actions keep adding questions.
fn ask_until_answered(
    page: &mut Page,
    interview: &mut Interview<'_>,
    max_passes: u32,
) -> Result<()> {
    page.ask_questions(interview, None)?;

    let mut passes = 0;
    while page.needs_answers() {
        if passes == max_passes {
            return Err(PageError::UserError(format!(
                "the {} {} page still has unanswered questions after {} follow-up pass(es)",
                page.name(),
                page.page_type(),
                max_passes
            )));
        }
        passes += 1;
        let message = format!(
            "\nMore questions for the {} {} page",
            page.name(),
            page.page_type()
        );
        page.ask_questions(interview, Some(&message))?;
    }
    Ok(())
}
