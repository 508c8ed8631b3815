//! Core types for cursorflow
//!
//! This module holds the pieces every other module leans on:
//!
//! - [`error`] - [`CursorflowError`], [`ErrorContext`] and [`user_friendly_error`]
//! - [`prompt_type`] - [`PromptType`] and the CLI-level [`PromptSelection`]
//!
//! # Error Handling Pattern
//!
//! ```rust,no_run
//! use cursorflow::core::{CursorflowError, user_friendly_error};
//! use anyhow::Result;
//!
//! fn example_operation() -> Result<String> {
//!     Err(CursorflowError::TemplateNotFound { path: "missing.md".into() }.into())
//! }
//!
//! if let Err(e) = example_operation() {
//!     user_friendly_error(e).display();
//! }
//! ```

pub mod error;
pub mod prompt_type;

pub use error::{CursorflowError, ErrorContext, create_error_context, user_friendly_error};
pub use prompt_type::{PromptSelection, PromptType};
