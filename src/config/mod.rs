//! Configuration management for cursorflow
//!
//! Settings come from three layers, highest precedence first:
//!
//! 1. **Command-line flags** (`--base-dir`, `--output`)
//! 2. **Global configuration** (`~/.cursorflow/config.toml`, or the file named by
//!    `$CURSORFLOW_CONFIG` / `--config`)
//! 3. **Built-in defaults** (current directory as base, `.cursor/commands/specify`
//!    for output, `~/Desktop/CursorFlow` for the wizard)
//!
//! The template store and the default output directory are always resolved
//! relative to the base directory; see [`template_dir`] and [`default_output_dir`].

pub mod global;

pub use global::{GlobalConfig, default_output_dir, template_dir};
