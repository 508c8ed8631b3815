//! cursorflow - ecosystem-aware prompt generation for Cursor
//!
//! cursorflow turns a small set of common prompt templates (research plan,
//! implementation plan, UI/UX design system, UI/UX bridge, project rules and
//! test rules) into documents tailored to one target language or framework.
//!
//! # Pipeline
//!
//! For one prompt type and one ecosystem:
//!
//! 1. free-text language input is normalized to a canonical key
//!    ([`ecosystem::resolve_ecosystem`])
//! 2. the template is read from `<base>/.cursor/commands/common`
//! 3. conditional `<!-- BEGIN:X -->` sections are kept or dropped, placeholders
//!    are substituted and leftover terminology is rewritten
//!    ([`templating::TemplateCustomizer`])
//! 4. a requirements block and a metadata footer are added and the result is
//!    written atomically ([`generator::PromptGenerator`])
//!
//! # Modules
//!
//! - [`cli`] - command-line parsing, generate mode and the interactive wizard
//! - [`config`] - optional global config file (`~/.cursorflow/config.toml`)
//! - [`core`] - error types and prompt type definitions
//! - [`ecosystem`] - ecosystem registry, alias table and normalization
//! - [`generator`] - template store access, file naming and batch generation
//! - [`templating`] - the customization stages
//! - [`utils`] - file system helpers
//!
//! # Example
//!
//! ```rust,no_run
//! use cursorflow::core::PromptType;
//! use cursorflow::generator::PromptGenerator;
//!
//! # fn example() -> Result<(), cursorflow::core::CursorflowError> {
//! let generator = PromptGenerator::new(".")?;
//! let report = generator.generate_all("kotlin", None, Some("Shopping Cart"), None)?;
//! for (prompt_type, path) in report.succeeded() {
//!     println!("{prompt_type}: {}", path.display());
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod ecosystem;
pub mod generator;
pub mod templating;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
