//! Target ecosystems: the language/framework registry and input normalization.
//!
//! An *ecosystem* is the language or framework a prompt is customized for.
//! Every supported ecosystem has one canonical [`EcosystemKey`] and one complete
//! [`EcosystemProfile`] in a process-wide, read-only table.
//!
//! Free-text input ("React.js", "swift ui", "golang") goes through
//! [`normalize_language`] to produce a canonical key guess, and
//! [`resolve_ecosystem`] turns that guess into a validated key or an
//! [`UnsupportedEcosystem`](crate::core::CursorflowError::UnsupportedEcosystem) error.
//!
//! # Example
//!
//! ```rust
//! use cursorflow::ecosystem::{EcosystemKey, resolve_ecosystem};
//!
//! let key = resolve_ecosystem("reactjs").unwrap();
//! assert_eq!(key, EcosystemKey::React);
//! assert_eq!(key.profile().build_command, "npm run build");
//! ```

mod normalize;
mod registry;

pub use normalize::{LANGUAGE_ALIASES, normalize_language, resolve_ecosystem};
pub use registry::{EcosystemProfile, package_format, supported_keys, validate_registry};

use crate::core::CursorflowError;

/// Canonical identifier of a supported ecosystem.
///
/// Variants are declared in registry order; that order is observable because
/// fuzzy matching returns the first key that matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EcosystemKey {
    Dart,
    Flutter,
    Kotlin,
    Android,
    Swift,
    Ios,
    TypeScript,
    React,
    Python,
    Java,
    CSharp,
    Go,
    Rust,
}

impl EcosystemKey {
    /// Every key, in registry order.
    pub const ALL: [EcosystemKey; 13] = [
        EcosystemKey::Dart,
        EcosystemKey::Flutter,
        EcosystemKey::Kotlin,
        EcosystemKey::Android,
        EcosystemKey::Swift,
        EcosystemKey::Ios,
        EcosystemKey::TypeScript,
        EcosystemKey::React,
        EcosystemKey::Python,
        EcosystemKey::Java,
        EcosystemKey::CSharp,
        EcosystemKey::Go,
        EcosystemKey::Rust,
    ];

    /// The canonical lower-case key.
    pub const fn as_str(self) -> &'static str {
        match self {
            EcosystemKey::Dart => "dart",
            EcosystemKey::Flutter => "flutter",
            EcosystemKey::Kotlin => "kotlin",
            EcosystemKey::Android => "android",
            EcosystemKey::Swift => "swift",
            EcosystemKey::Ios => "ios",
            EcosystemKey::TypeScript => "typescript",
            EcosystemKey::React => "react",
            EcosystemKey::Python => "python",
            EcosystemKey::Java => "java",
            EcosystemKey::CSharp => "csharp",
            EcosystemKey::Go => "go",
            EcosystemKey::Rust => "rust",
        }
    }

    /// The attribute record for this ecosystem.
    pub fn profile(self) -> &'static EcosystemProfile {
        registry::profile_for(self)
    }

    /// Look up a key by its exact canonical spelling (already lower-cased).
    pub fn from_canonical(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }
}

impl std::fmt::Display for EcosystemKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EcosystemKey {
    type Err = CursorflowError;

    /// Accepts canonical keys only; use [`resolve_ecosystem`] for aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_canonical(&s.trim().to_lowercase()).ok_or_else(|| {
            CursorflowError::UnsupportedEcosystem {
                input: s.to_string(),
                supported: supported_keys().join(", "),
            }
        })
    }
}
