//! Ecosystem-specific phrase rewriting.
//!
//! Some templates carry vocabulary from the ecosystem they were first written
//! for ("pubspec.yaml", "StatefulWidget"). Placeholders cannot reach those
//! phrases, so a few ecosystems get an ordered list of rewrite rules applied
//! after substitution.
//!
//! Rules run once each, in order, case-insensitively. A later rule sees the
//! output of earlier ones, but nothing is re-run: output produced by rule N is
//! never revisited by rule M < N.

use regex::{NoExpand, Regex};

use super::compile_pattern;
use crate::core::CursorflowError;
use crate::ecosystem::EcosystemKey;

const REACT_RULES: &[(&str, &str)] = &[
    (r"\bpub dependencies\b", "npm dependencies"),
    (r"\bpubspec\.yaml\b", "package.json"),
    (r"\bflutter pub\b", "npm"),
    (r"\bStatefulWidget\b", "React.Component"),
    (r"\bStatelessWidget\b", "React.FC"),
    (r"\bFuture<Either<", "Promise<Result<"),
    (r"\bEither<Failure, T>", "Result<T, E>"),
    (r"\b@freezed\b", "readonly"),
    (r"\b@JsonSerializable\b", "class-transformer"),
    (r"\bimport 'package:", "import {"),
    (r"\b\.dart\b", ".tsx"),
];

const FLUTTER_RULES: &[(&str, &str)] = &[
    (r"\bnpm dependencies\b", "pub dependencies"),
    (r"\bpackage\.json\b", "pubspec.yaml"),
    (r"\bnpm\b", "flutter pub"),
    (r"\bPromise<Result<", "Future<Either<"),
    (r"\bResult<T, E>", "Either<Failure, T>"),
];

const KOTLIN_RULES: &[(&str, &str)] = &[
    (r"\bpub dependencies\b", "gradle dependencies"),
    (r"\bpubspec\.yaml\b", "build.gradle.kts"),
    (r"\bFuture<Either<", "suspend fun"),
    (r"\bEither<Failure, T>", "Result<T, E>"),
];

/// The built-in rule table for `key`; empty for ecosystems without one.
pub fn builtin_rules(key: EcosystemKey) -> &'static [(&'static str, &'static str)] {
    match key {
        EcosystemKey::React => REACT_RULES,
        EcosystemKey::Flutter => FLUTTER_RULES,
        EcosystemKey::Kotlin => KOTLIN_RULES,
        _ => &[],
    }
}

/// One compiled `pattern -> replacement` rule.
#[derive(Debug, Clone)]
pub struct RewriteRule {
    pattern: Regex,
    replacement: String,
}

impl RewriteRule {
    /// Compile `pattern` case-insensitively. `replacement` is inserted literally.
    pub fn new(pattern: &str, replacement: impl Into<String>) -> Result<Self, CursorflowError> {
        Ok(Self {
            pattern: compile_pattern(&format!("(?i){pattern}"))?,
            replacement: replacement.into(),
        })
    }

    fn apply(&self, content: &str) -> String {
        self.pattern.replace_all(content, NoExpand(&self.replacement)).into_owned()
    }
}

/// An ordered list of [`RewriteRule`]s.
#[derive(Debug, Clone, Default)]
pub struct TerminologyRewriter {
    rules: Vec<RewriteRule>,
}

impl TerminologyRewriter {
    /// Build a rewriter from `(pattern, replacement)` pairs.
    pub fn with_rules(rules: &[(&str, &str)]) -> Result<Self, CursorflowError> {
        let rules = rules
            .iter()
            .map(|(pattern, replacement)| RewriteRule::new(pattern, *replacement))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    /// The built-in rewriter for `key`.
    pub fn for_ecosystem(key: EcosystemKey) -> Result<Self, CursorflowError> {
        Self::with_rules(builtin_rules(key))
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply every rule once, in order.
    pub fn rewrite(&self, content: &str) -> String {
        let mut out = content.to_string();
        for rule in &self.rules {
            out = rule.apply(&out);
        }
        out
    }
}
