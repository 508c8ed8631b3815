//! Test utilities for cursorflow
//!
//! Helpers for unit and integration tests: one-time logging setup and fixtures
//! that lay out a template store inside a temporary directory.
//!
//! # Example
//!
//! ```rust,ignore
//! use cursorflow::core::PromptType;
//! use cursorflow::test_utils::TemplateStore;
//!
//! let store = TemplateStore::with_all_templates().unwrap();
//! assert!(store.template_path(PromptType::ResearchPlan).exists());
//! ```

pub mod fixtures;

pub use fixtures::{TemplateFixture, TemplateStore};

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has an effect. An explicit `level` wins; otherwise
/// `RUST_LOG` is used, and with neither set logging stays off.
///
/// ```bash
/// RUST_LOG=cursorflow=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}
