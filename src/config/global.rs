//! Global user configuration (`~/.cursorflow/config.toml`).
//!
//! Every key is optional; a missing file is the same as an empty one.
//!
//! ```toml
//! # Directory that contains .cursor/commands/common
//! base_dir = "~/work/prompts"
//!
//! # Where single and batch generation write by default
//! output_dir = "~/work/prompts/out"
//!
//! # Default answer for the wizard's output folder question
//! wizard_output_dir = "~/Documents/CursorFlow"
//! ```
//!
//! Paths may start with `~`; they are expanded when read through the accessor
//! methods, not at parse time.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_ENV_VAR, CONFIG_FILE_NAME, OUTPUT_DIR, TEMPLATE_DIR,
    WIZARD_OUTPUT_SUBDIR,
};
use crate::core::CursorflowError;
use crate::utils::fs::{expand_user_path, read_text_file};

/// User-wide defaults for the generator and the wizard.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GlobalConfig {
    /// Base directory holding the template store.
    #[serde(default)]
    pub base_dir: Option<String>,

    /// Default output directory for generated prompts.
    #[serde(default)]
    pub output_dir: Option<String>,

    /// Default wizard output folder.
    #[serde(default)]
    pub wizard_output_dir: Option<String>,
}

impl GlobalConfig {
    /// Load from `path` when given, otherwise from [`GlobalConfig::default_path`].
    ///
    /// A path that does not exist yields the default configuration.
    pub fn load_with_optional(path: Option<PathBuf>) -> Result<Self, CursorflowError> {
        let path = match path {
            Some(path) => path,
            None => match Self::default_path() {
                Some(path) => path,
                None => return Ok(Self::default()),
            },
        };

        if path.exists() {
            Self::load_from(&path)
        } else {
            debug!(path = %path.display(), "no global config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Load from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, CursorflowError> {
        let content = read_text_file(path).map_err(|e| CursorflowError::ConfigError {
            message: format!("Failed to read global config: {e}"),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| CursorflowError::ConfigError {
            message: format!("Failed to parse global config from {}: {e}", path.display()),
        })?;
        debug!(path = %path.display(), ?config, "loaded global config");
        Ok(config)
    }

    /// `$CURSORFLOW_CONFIG` if set, else `~/.cursorflow/config.toml`.
    ///
    /// `None` when neither is available (no home directory).
    pub fn default_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|v| !v.is_empty()) {
            return Some(PathBuf::from(path));
        }
        dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Configured base directory, expanded.
    pub fn base_dir(&self) -> Option<PathBuf> {
        self.base_dir.as_deref().map(expand_user_path)
    }

    /// Configured output directory, expanded.
    pub fn output_dir(&self) -> Option<PathBuf> {
        self.output_dir.as_deref().map(expand_user_path)
    }

    /// Wizard output folder: configured value, else `~/Desktop/CursorFlow`.
    pub fn wizard_output_dir(&self) -> PathBuf {
        if let Some(dir) = self.wizard_output_dir.as_deref() {
            return expand_user_path(dir);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(WIZARD_OUTPUT_SUBDIR)
    }
}

/// Template store inside `base_dir`.
pub fn template_dir(base_dir: &Path) -> PathBuf {
    base_dir.join(TEMPLATE_DIR)
}

/// Default output directory inside `base_dir`.
pub fn default_output_dir(base_dir: &Path) -> PathBuf {
    base_dir.join(OUTPUT_DIR)
}
