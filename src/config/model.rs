//! Config struct definition and defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File read from the current directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "pagesmith.yaml";

/// Configuration for a pagesmith run.
///
/// Relative paths are resolved against the current directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Paths
    // =========================================================================
    /// Root directory for generated pages.
    pub output_dir: PathBuf,

    /// Directory holding one template file per page type.
    pub template_dir: PathBuf,

    /// Wireframe catalog file (YAML or JSON).
    pub wireframes: PathBuf,

    /// Extension of template files, without the leading dot.
    pub template_extension: String,

    // =========================================================================
    // Asking
    // =========================================================================
    /// Prompts allowed per question before giving up on an invalid answer.
    pub max_attempts: u32,

    /// Follow-up asking passes per page after actions add questions.
    pub max_passes: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("out"),
            template_dir: PathBuf::from("templates"),
            wireframes: PathBuf::from("wireframes.yaml"),
            template_extension: "html".to_string(),
            max_attempts: 5,
            max_passes: 10,
        }
    }
}
