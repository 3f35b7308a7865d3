//! Implementation of the `pagesmith questions` command.
//!
//! Scans templates the same way `build` does and lists what would be asked,
//! without prompting or writing anything.

use super::Environment;
use crate::cli::QuestionsArgs;
use crate::error::{PageError, Result};
use crate::page::{Page, share};
use crate::question::{Question, QuestionSet};
use serde::Serialize;
use std::path::Path;

/// One listed question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionInfo {
    pub page_type: String,
    pub scope: &'static str,
    pub name: String,
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl QuestionInfo {
    fn from_question(page_type: &str, scope: &'static str, q: &Question) -> Self {
        Self {
            page_type: page_type.to_string(),
            scope,
            name: q.name().to_string(),
            question: q.question().to_string(),
            default: q.default_answer().map(str::to_string),
            pattern: q.entry().pattern.clone(),
            action: q.action_name().map(str::to_string),
        }
    }
}

/// Execute the `pagesmith questions` command.
pub fn cmd_questions(args: QuestionsArgs, config_path: Option<&Path>) -> Result<()> {
    let env = Environment::load(config_path, &args.paths)?;
    let infos = collect_questions(&env, &args.types)?;

    if args.json {
        let json = serde_json::to_string_pretty(&infos).map_err(|e| {
            PageError::UserError(format!("failed to serialize questions: {}", e))
        })?;
        println!("{}", json);
        return Ok(());
    }

    if infos.is_empty() {
        println!("No questions.");
        return Ok(());
    }
    for info in &infos {
        let default = info
            .default
            .as_ref()
            .map(|d| format!(" ({})", d))
            .unwrap_or_default();
        println!(
            "  {:<12} {:<6} {:<20} {}{}",
            info.page_type, info.scope, info.name, info.question, default
        );
    }
    Ok(())
}

/// Pending questions for each page type, shared ones listed once under the
/// first page that references them.
pub(crate) fn collect_questions(env: &Environment, types: &[String]) -> Result<Vec<QuestionInfo>> {
    let shared = share(QuestionSet::named("preview", "", env.catalog.clone()));
    let mut infos = Vec::new();

    for page_type in types {
        let page = Page::new("preview", page_type, shared.clone(), &*env.templates)?;

        for q in shared.borrow().iter().filter(|q| q.answer.is_pending()) {
            if !infos
                .iter()
                .any(|i: &QuestionInfo| i.scope == "shared" && i.name == q.name())
            {
                infos.push(QuestionInfo::from_question(page_type, "shared", q));
            }
        }
        for q in page.questions().iter().filter(|q| q.answer.is_pending()) {
            infos.push(QuestionInfo::from_question(page_type, "local", q));
        }
    }

    Ok(infos)
}
