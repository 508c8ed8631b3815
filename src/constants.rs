//! Global constants used throughout the cursorflow codebase.
//!
//! Directory layouts, file naming and timestamp formats live here so the
//! generator, the wizard and the tests agree on them.

/// Template store, relative to the base directory.
pub const TEMPLATE_DIR: &str = ".cursor/commands/common";

/// Default output directory for generated prompts, relative to the base directory.
pub const OUTPUT_DIR: &str = ".cursor/commands/specify";

/// Suffix appended to every generated filename.
pub const OUTPUT_SUFFIX: &str = ".prompt.md";

/// Wizard output folder, relative to the user's home directory.
pub const WIZARD_OUTPUT_SUBDIR: &str = "Desktop/CursorFlow";

/// Timestamp format used in the requirements and metadata blocks.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Environment variable that overrides the global config file location.
pub const CONFIG_ENV_VAR: &str = "CURSORFLOW_CONFIG";

/// Directory under the home directory that holds the global config file.
pub const CONFIG_DIR_NAME: &str = ".cursorflow";

/// Name of the global config file.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Maximum length of the project name the wizard derives from the description.
pub const MAX_DEFAULT_PROJECT_NAME_LEN: usize = 40;
