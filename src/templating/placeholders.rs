//! Bracketed placeholder substitution.

use regex::{NoExpand, Regex};

use super::compile_pattern;
use crate::core::CursorflowError;
use crate::ecosystem::EcosystemProfile;

/// Every placeholder token the substitutor recognizes, in replacement order.
///
/// `[package-manager-format]` is listed before `[package-manager]`.
pub const PLACEHOLDER_TOKENS: [&str; 15] = [
    "[language]",
    "[Language]",
    "[extension]",
    "[package-manager-format]",
    "[package-manager]",
    "[package_file]",
    "[build_command]",
    "[linter]",
    "[code-gen-tool]",
    "[di-library]",
    "[state-management-library]",
    "[async_pattern]",
    "[result_type]",
    "[immutability]",
    "[json_serialization]",
];

/// Values for [`PLACEHOLDER_TOKENS`], index for index.
fn placeholder_values(profile: &EcosystemProfile) -> [String; 15] {
    [
        profile.name.to_lowercase(),
        profile.name.to_string(),
        profile.extension.to_string(),
        profile.package_format().to_string(),
        profile.package_manager.to_string(),
        profile.package_file.to_string(),
        profile.build_command.to_string(),
        profile.linter.to_string(),
        profile.code_gen.to_string(),
        profile.di_library.to_string(),
        profile.primary_state_management().to_string(),
        profile.async_pattern.to_string(),
        profile.result_type.to_string(),
        profile.immutability.to_string(),
        profile.json_serialization.to_string(),
    ]
}

/// Replaces placeholder tokens and code-fence language tags.
#[derive(Debug, Clone)]
pub struct PlaceholderSubstitutor {
    fence_display: Regex,
    fence_lower: Regex,
}

impl PlaceholderSubstitutor {
    pub fn new() -> Result<Self, CursorflowError> {
        Ok(Self {
            fence_display: compile_pattern(r"```\[Language\]")?,
            fence_lower: compile_pattern(r"(?i)```\[language\]")?,
        })
    }

    /// Replace every recognized token in `content` with values from `profile`.
    pub fn substitute(&self, content: &str, profile: &EcosystemProfile) -> String {
        let mut out = content.to_string();
        for (token, value) in PLACEHOLDER_TOKENS.iter().zip(placeholder_values(profile)) {
            if out.contains(token) {
                out = out.replace(token, &value);
            }
        }

        // Fence tags in casings the literal pass did not cover, e.g. ```[LANGUAGE]
        let display = format!("```{}", profile.name);
        let lower = format!("```{}", profile.name.to_lowercase());
        let out = self.fence_display.replace_all(&out, NoExpand(&display));
        self.fence_lower.replace_all(&out, NoExpand(&lower)).into_owned()
    }
}
