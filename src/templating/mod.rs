//! Template customization engine.
//!
//! Turns a common prompt template into an ecosystem-specific document. The
//! stages always run in this order:
//!
//! 1. [`SectionResolver`] keeps `<!-- BEGIN:X -->` regions that match the target
//!    ecosystem and deletes the rest
//! 2. [`PlaceholderSubstitutor`] replaces `[build_command]`-style tokens and
//!    `` ```[language] `` fence tags
//! 3. [`TerminologyRewriter`] fixes leftover vocabulary for ecosystems that
//!    have a rule list
//! 4. [`OutputAssembler`] adds the requirements block and the metadata footer
//!
//! # Example
//!
//! ```rust
//! use cursorflow::ecosystem::EcosystemKey;
//! use cursorflow::templating::TemplateCustomizer;
//!
//! let customizer = TemplateCustomizer::new().unwrap();
//! let out = customizer
//!     .customize(
//!         "Run `[build_command]`\n<!-- BEGIN:GO -->go only<!-- END:GO -->",
//!         EcosystemKey::Rust,
//!         None,
//!         "2025-01-01 00:00:00",
//!     )
//!     .unwrap();
//! assert!(out.starts_with("Run `cargo build`\n"));
//! assert!(!out.contains("go only"));
//! ```

pub mod assembler;
pub mod placeholders;
pub mod sections;
pub mod terminology;

pub use assembler::OutputAssembler;
pub use placeholders::{PLACEHOLDER_TOKENS, PlaceholderSubstitutor};
pub use sections::{SectionResolver, should_include};
pub use terminology::{RewriteRule, TerminologyRewriter};

use regex::Regex;
use tracing::debug;

use crate::core::CursorflowError;
use crate::ecosystem::EcosystemKey;

/// Compile a built-in pattern, reporting failures as [`CursorflowError::InvalidPattern`].
pub(crate) fn compile_pattern(pattern: &str) -> Result<Regex, CursorflowError> {
    Regex::new(pattern).map_err(|e| CursorflowError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })
}

/// Runs the full customization pipeline for one template and one ecosystem.
#[derive(Debug, Clone)]
pub struct TemplateCustomizer {
    sections: SectionResolver,
    placeholders: PlaceholderSubstitutor,
}

impl TemplateCustomizer {
    pub fn new() -> Result<Self, CursorflowError> {
        Ok(Self {
            sections: SectionResolver::new()?,
            placeholders: PlaceholderSubstitutor::new()?,
        })
    }

    /// Customize `template` for `key`.
    ///
    /// `timestamp` is written into the requirements and metadata blocks as is.
    pub fn customize(
        &self,
        template: &str,
        key: EcosystemKey,
        requirements: Option<&str>,
        timestamp: &str,
    ) -> Result<String, CursorflowError> {
        let profile = key.profile();

        let content = self.sections.resolve(template, key.as_str());
        debug!(ecosystem = %key, bytes = content.len(), "resolved conditional sections");

        let content = self.placeholders.substitute(&content, profile);

        let rewriter = TerminologyRewriter::for_ecosystem(key)?;
        let content = if rewriter.is_empty() {
            content
        } else {
            debug!(ecosystem = %key, "applying terminology rules");
            rewriter.rewrite(&content)
        };

        Ok(OutputAssembler::new(profile, timestamp).assemble(&content, requirements))
    }
}
