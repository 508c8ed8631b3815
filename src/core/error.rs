//! Error handling for cursorflow
//!
//! The error system follows two principles:
//! 1. **Strongly-typed errors** ([`CursorflowError`]) for precise handling in code
//! 2. **User-friendly messages** ([`ErrorContext`]) with actionable suggestions for CLI users
//!
//! # Error Categories
//!
//! - **Input**: [`CursorflowError::UnsupportedEcosystem`], [`CursorflowError::UnsupportedPromptType`]
//! - **Template store**: [`CursorflowError::TemplateNotFound`]
//! - **File System**: [`CursorflowError::FileSystemError`]
//! - **Configuration**: [`CursorflowError::ConfigError`], [`CursorflowError::IncompleteProfile`],
//!   [`CursorflowError::InvalidPattern`]
//!
//! Use [`user_friendly_error`] to turn any `anyhow::Error` into an [`ErrorContext`]
//! that can be printed to stderr.
//!
//! # Examples
//!
//! ```rust,no_run
//! use cursorflow::core::{CursorflowError, user_friendly_error};
//!
//! let err = CursorflowError::TemplateNotFound {
//!     path: ".cursor/commands/common/research_plan_common.prompt.md".to_string(),
//! };
//! user_friendly_error(anyhow::Error::from(err)).display();
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for cursorflow operations.
///
/// Every variant carries owned strings so the error can be cloned into an
/// [`ErrorContext`] and reported per item by batch generation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CursorflowError {
    /// Language input did not resolve to a registry key.
    ///
    /// `supported` is the comma-separated, sorted list of canonical keys.
    #[error(
        "Unsupported language: {input}. Supported: {supported}\nCommon variations like 'reactjs', 'react.js' are automatically mapped to 'react'."
    )]
    UnsupportedEcosystem {
        /// The raw text the user supplied
        input: String,
        /// Comma-separated canonical keys
        supported: String,
    },

    /// Prompt type is not one of the known kinds.
    #[error("Unsupported prompt type: {input}. Supported: {supported}")]
    UnsupportedPromptType {
        /// The raw text the user supplied
        input: String,
        /// Comma-separated prompt type keys
        supported: String,
    },

    /// Template file missing from the template store.
    #[error("Template not found: {path}")]
    TemplateNotFound {
        /// The path that was expected to hold the template
        path: String,
    },

    /// A read or write against the filesystem failed.
    #[error("Failed to {operation} '{path}': {reason}")]
    FileSystemError {
        /// What was being attempted ("write", "read", "create directory")
        operation: String,
        /// The path involved
        path: String,
        /// The underlying OS message
        reason: String,
    },

    /// Global configuration could not be loaded.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration error
        message: String,
    },

    /// A registry entry is missing a required attribute.
    #[error("Ecosystem profile '{key}' has an empty '{field}' field")]
    IncompleteProfile {
        /// Canonical key of the broken profile
        key: String,
        /// Name of the empty field
        field: String,
    },

    /// A built-in pattern (section marker, code fence or rewrite rule) failed to compile.
    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The offending pattern
        pattern: String,
        /// Compiler message from the regex engine
        reason: String,
    },
}

impl CursorflowError {
    /// Build a [`CursorflowError::FileSystemError`] from an I/O error.
    pub fn file_system(
        operation: impl Into<String>,
        path: &std::path::Path,
        source: &std::io::Error,
    ) -> Self {
        Self::FileSystemError {
            operation: operation.into(),
            path: path.display().to_string(),
            reason: source.to_string(),
        }
    }
}

/// Error wrapper carrying a user-facing suggestion and details.
///
/// Suggestions are printed in green, details in yellow.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: CursorflowError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: CursorflowError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error context to stderr with terminal colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

/// Attach the standard suggestion for each error variant.
pub fn create_error_context(error: CursorflowError) -> ErrorContext {
    match &error {
        CursorflowError::UnsupportedEcosystem { .. } => ErrorContext::new(error)
            .with_suggestion("Pass one of the canonical keys, or a common alias such as 'reactjs', 'ts', 'swiftui' or 'node'"),
        CursorflowError::UnsupportedPromptType { .. } => ErrorContext::new(error)
            .with_suggestion("Use 'all' to generate every prompt type at once"),
        CursorflowError::TemplateNotFound { .. } => ErrorContext::new(error)
            .with_suggestion("Point --base-dir at the directory that contains .cursor/commands/common")
            .with_details("Templates are read from <base-dir>/.cursor/commands/common"),
        CursorflowError::FileSystemError { .. } => ErrorContext::new(error)
            .with_suggestion("Check that the output location exists and is writable"),
        CursorflowError::ConfigError { .. } => ErrorContext::new(error)
            .with_suggestion("Check the TOML syntax of your cursorflow config file")
            .with_details("The config file is read from ~/.cursorflow/config.toml or $CURSORFLOW_CONFIG"),
        CursorflowError::IncompleteProfile { .. } | CursorflowError::InvalidPattern { .. } => {
            ErrorContext::new(error)
                .with_details("The built-in ecosystem tables are inconsistent; this is a bug")
        }
    }
}

/// Convert any error into an [`ErrorContext`] suitable for CLI display.
///
/// Errors that are not a [`CursorflowError`] are wrapped as a generic
/// file-system error when they come from `std::io`, otherwise they keep their
/// message under a configuration error. When context was attached, the full
/// cause chain becomes the details line.
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    // downcast_ref also sees through `.context(...)` wrappers
    if let Some(err) = error.downcast_ref::<CursorflowError>() {
        let ctx = create_error_context(err.clone());
        if error.chain().nth(1).is_some() {
            return ctx.with_details(format!("{error:#}"));
        }
        return ctx;
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        return ErrorContext::new(CursorflowError::FileSystemError {
            operation: "access".to_string(),
            path: "unknown".to_string(),
            reason: io_error.to_string(),
        })
        .with_suggestion("Check that the file or directory exists and is accessible");
    }

    ErrorContext::new(CursorflowError::ConfigError {
        message: error.to_string(),
    })
    .with_details(format!("{error:#}"))
}
