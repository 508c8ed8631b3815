//! Free-text language input to canonical key.

use super::{EcosystemKey, supported_keys};
use crate::core::CursorflowError;
use tracing::{debug, warn};

/// Common spellings of supported ecosystems, keyed by lower-cased text.
///
/// Values are always canonical keys, so resolution never chains.
pub const LANGUAGE_ALIASES: &[(&str, EcosystemKey)] = &[
    ("reactjs", EcosystemKey::React),
    ("react.js", EcosystemKey::React),
    ("react-js", EcosystemKey::React),
    ("reactjsx", EcosystemKey::React),
    ("react tsx", EcosystemKey::React),
    ("react typescript", EcosystemKey::React),
    ("ts", EcosystemKey::TypeScript),
    ("tsx", EcosystemKey::React),
    ("typescript react", EcosystemKey::React),
    ("dart flutter", EcosystemKey::Flutter),
    ("flutter dart", EcosystemKey::Flutter),
    ("android kotlin", EcosystemKey::Kotlin),
    ("kotlin android", EcosystemKey::Kotlin),
    ("android studio", EcosystemKey::Kotlin),
    ("ios swift", EcosystemKey::Swift),
    ("swift ios", EcosystemKey::Swift),
    ("swiftui", EcosystemKey::Swift),
    ("swift ui", EcosystemKey::Swift),
    ("js", EcosystemKey::TypeScript),
    ("javascript", EcosystemKey::TypeScript),
    ("node", EcosystemKey::TypeScript),
    ("nodejs", EcosystemKey::TypeScript),
    ("node.js", EcosystemKey::TypeScript),
];

fn lookup_alias(text: &str) -> Option<EcosystemKey> {
    LANGUAGE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == text)
        .map(|(_, key)| *key)
}

/// Drop every dot, hyphen and whitespace character.
fn collapse_separators(text: &str) -> String {
    text.chars().filter(|c| !(*c == '.' || *c == '-' || c.is_whitespace())).collect()
}

/// Guess the canonical key for arbitrary language text.
///
/// Tries, in order: the alias table on the trimmed lower-cased input, the alias
/// table with dots/hyphens/whitespace removed, an exact canonical key, and
/// finally a substring match against the canonical keys in registry order.
/// When nothing matches the trimmed lower-cased input comes back unchanged,
/// so callers must still check it against the registry.
pub fn normalize_language(language: &str) -> String {
    let lowered = language.trim().to_lowercase();

    if let Some(key) = lookup_alias(&lowered) {
        return key.as_str().to_string();
    }

    let collapsed = collapse_separators(&lowered);
    if let Some(key) = lookup_alias(&collapsed) {
        return key.as_str().to_string();
    }

    if let Some(key) = EcosystemKey::from_canonical(&lowered) {
        return key.as_str().to_string();
    }

    for key in EcosystemKey::ALL {
        let candidate = key.as_str();
        if candidate.contains(lowered.as_str()) || lowered.contains(candidate) {
            warn!(input = %language, guess = candidate, "language matched by substring");
            return candidate.to_string();
        }
    }

    debug!(input = %language, "language did not match any ecosystem");
    lowered
}

/// Normalize `language` and look the result up in the registry.
pub fn resolve_ecosystem(language: &str) -> Result<EcosystemKey, CursorflowError> {
    let normalized = normalize_language(language);
    EcosystemKey::from_canonical(&normalized).ok_or_else(|| CursorflowError::UnsupportedEcosystem {
        input: language.to_string(),
        supported: supported_keys().join(", "),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_alias_maps_to_its_key() {
        for (alias, key) in LANGUAGE_ALIASES {
            assert_eq!(normalize_language(alias), key.as_str(), "alias {alias}");
        }
    }

    #[test]
    fn test_canonical_keys_are_fixed_points() {
        for key in EcosystemKey::ALL {
            assert_eq!(normalize_language(key.as_str()), key.as_str());
            assert_eq!(normalize_language(&key.as_str().to_uppercase()), key.as_str());
        }
    }

    #[test]
    fn test_separator_variants() {
        assert_eq!(normalize_language("React.JS"), "react");
        assert_eq!(normalize_language("React JS"), "react");
        assert_eq!(normalize_language("  Node-JS "), "typescript");
        assert_eq!(normalize_language("Swift-UI"), "swift");
    }

    #[test]
    fn test_substring_fallback_uses_registry_order() {
        // "go" is a substring of "golang"
        assert_eq!(normalize_language("golang"), "go");
        // "rust" is contained in the input
        assert_eq!(normalize_language("rustlang"), "rust");
        // "script" is inside "typescript" before any later key
        assert_eq!(normalize_language("script"), "typescript");
        // "a" is inside "dart", the first key
        assert_eq!(normalize_language("a"), "dart");
    }

    #[test]
    fn test_unknown_input_passes_through_lowercased() {
        assert_eq!(normalize_language("  COBOL "), "cobol");
    }

    #[test]
    fn test_blank_input_falls_back_to_first_key() {
        // the empty string is inside every key, so the first one in registry order wins
        assert_eq!(normalize_language(""), "dart");
        assert_eq!(normalize_language("   "), "dart");
        assert_eq!(resolve_ecosystem(" ").unwrap(), EcosystemKey::Dart);
    }

    #[test]
    fn test_resolve_ecosystem() {
        assert_eq!(resolve_ecosystem("reactjs").unwrap(), EcosystemKey::React);
        assert_eq!(resolve_ecosystem("Kotlin Android").unwrap(), EcosystemKey::Kotlin);
        assert_eq!(resolve_ecosystem("golang").unwrap(), EcosystemKey::Go);
    }

    #[test]
    fn test_resolve_unsupported_lists_all_keys() {
        let err = resolve_ecosystem("cobol").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Unsupported language: cobol"));
        for key in EcosystemKey::ALL {
            assert!(msg.contains(key.as_str()), "missing {key}");
        }
    }
}
