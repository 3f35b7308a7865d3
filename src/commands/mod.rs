//! Command implementations for pagesmith.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the shared setup every command needs: config,
//! wireframe catalog, templates, and actions.

mod build;
mod questions;

use crate::actions::ActionRegistry;
use crate::cli::{Cli, Command, PathArgs};
use crate::config::Config;
use crate::error::Result;
use crate::template::DirTemplateStore;
use crate::wireframe::WireframeCatalog;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

pub use build::build_pages;

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();
    match cli.command {
        Command::Build(args) => build::cmd_build(args, config_path),
        Command::Questions(args) => questions::cmd_questions(args, config_path),
    }
}

/// Everything loaded once per invocation and read-only afterwards.
pub struct Environment {
    pub config: Config,
    pub catalog: Arc<WireframeCatalog>,
    pub templates: Arc<DirTemplateStore>,
    pub actions: ActionRegistry,
}

impl Environment {
    /// Load config (with CLI path overrides), the catalog, and templates.
    ///
    /// Fails if the catalog references an action that is not registered.
    pub fn load(config_path: Option<&Path>, paths: &PathArgs) -> Result<Self> {
        let mut config = Config::resolve(config_path)?;
        if let Some(dir) = &paths.templates {
            config.template_dir = dir.clone();
        }
        if let Some(file) = &paths.wireframes {
            config.wireframes = file.clone();
        }
        Self::from_config(config)
    }

    pub fn from_config(config: Config) -> Result<Self> {
        config.validate()?;
        let catalog = Arc::new(WireframeCatalog::load(&config.wireframes)?);
        let templates = Arc::new(DirTemplateStore::new(
            &config.template_dir,
            &config.template_extension,
        ));
        let actions = ActionRegistry::with_builtins(templates.clone());
        actions.check_catalog(&catalog)?;

        debug!(
            wireframes = catalog.len(),
            templates = %templates.root().display(),
            "environment loaded"
        );
        Ok(Self {
            config,
            catalog,
            templates,
            actions,
        })
    }
}
