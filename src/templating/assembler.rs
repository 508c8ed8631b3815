//! Final document assembly: requirements block and generation metadata.

use crate::ecosystem::EcosystemProfile;

const FRONTMATTER_DELIMITER: &str = "---";

/// Wraps customized template text with the requirements and metadata blocks.
#[derive(Debug, Clone)]
pub struct OutputAssembler<'a> {
    profile: &'a EcosystemProfile,
    timestamp: String,
}

impl<'a> OutputAssembler<'a> {
    /// `timestamp` is already formatted; it is written verbatim into both blocks.
    pub fn new(profile: &'a EcosystemProfile, timestamp: impl Into<String>) -> Self {
        Self {
            profile,
            timestamp: timestamp.into(),
        }
    }

    /// Insert the requirements block (when given and non-empty) and append metadata.
    pub fn assemble(&self, content: &str, requirements: Option<&str>) -> String {
        let content = match requirements {
            Some(requirements) if !requirements.is_empty() => {
                self.insert_requirements(content, requirements)
            }
            _ => content.to_string(),
        };
        self.append_metadata(&content)
    }

    fn requirements_block(&self, requirements: &str) -> String {
        format!(
            "\n## Generated Requirements\n\n\
             **Target Language/Framework:** {name}\n\
             **Generation Date:** {timestamp}\n\n\
             **User Requirements:**\n\
             {requirements}\n\n\
             ---\n\n",
            name = self.profile.name,
            timestamp = self.timestamp,
        )
    }

    /// Place the requirements block right after a leading frontmatter block,
    /// or at the very start when the document has none.
    ///
    /// The frontmatter ends at the next `---` after the opening one, wherever it
    /// occurs.
    pub fn insert_requirements(&self, content: &str, requirements: &str) -> String {
        let block = self.requirements_block(requirements);

        if let Some(rest) = content.strip_prefix(FRONTMATTER_DELIMITER) {
            if let Some(offset) = rest.find(FRONTMATTER_DELIMITER) {
                let insert_at = FRONTMATTER_DELIMITER.len() + offset + FRONTMATTER_DELIMITER.len();
                let (head, tail) = content.split_at(insert_at);
                return format!("{head}{block}{tail}");
            }
        }

        format!("{block}{content}")
    }

    /// Append the generation metadata block.
    pub fn append_metadata(&self, content: &str) -> String {
        let p = self.profile;
        format!(
            "{content}\n\n---\n\n## Generation Metadata\n\n\
             **Generated for:** {name}\n\
             **Generated on:** {timestamp}\n\
             **Language Extension:** {extension}\n\
             **Package Manager:** {package_manager}\n\
             **Build Command:** `{build_command}`\n\
             **Linter:** `{linter}`\n\n\
             **Language-Specific Features:**\n\
             - State Management: {state_management}\n\
             - Async Pattern: {async_pattern}\n\
             - Result Type: {result_type}\n\
             - Immutability: {immutability}\n\
             - JSON Serialization: {json_serialization}\n\
             - Dependency Injection: {di_library}\n\n",
            name = p.name,
            timestamp = self.timestamp,
            extension = p.extension,
            package_manager = p.package_manager,
            build_command = p.build_command,
            linter = p.linter,
            state_management = p.state_management.join(", "),
            async_pattern = p.async_pattern,
            result_type = p.result_type,
            immutability = p.immutability,
            json_serialization = p.json_serialization,
            di_library = p.di_library,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecosystem::EcosystemKey;

    const TS: &str = "2025-01-02 03:04:05";

    #[test]
    fn test_requirements_go_after_frontmatter() {
        let assembler = OutputAssembler::new(EcosystemKey::Go.profile(), TS);
        let out = assembler.insert_requirements("---\ntitle: x\n---\nBody", "Login flow");

        assert!(out.starts_with("---\ntitle: x\n---\n## Generated Requirements"));
        let block_at = out.find("## Generated Requirements").unwrap();
        let body_at = out.find("Body").unwrap();
        assert!(block_at < body_at);
        assert!(out.contains("**Target Language/Framework:** Go"));
        assert!(out.contains(&format!("**Generation Date:** {TS}")));
        assert!(out.contains("**User Requirements:**\nLogin flow\n"));
        assert!(out.ends_with("---\n\n\nBody"));
    }

    #[test]
    fn test_requirements_prepended_without_frontmatter() {
        let assembler = OutputAssembler::new(EcosystemKey::Rust.profile(), TS);
        let out = assembler.insert_requirements("# Title\nBody", "Req");
        assert!(out.starts_with("\n## Generated Requirements"));
        assert!(out.ends_with("---\n\n# Title\nBody"));
    }

    #[test]
    fn test_unterminated_frontmatter_is_treated_as_none() {
        let assembler = OutputAssembler::new(EcosystemKey::Rust.profile(), TS);
        let out = assembler.insert_requirements("---\ntitle: x\nBody", "Req");
        assert!(out.starts_with("\n## Generated Requirements"));
        assert!(out.ends_with("---\n\n---\ntitle: x\nBody"));
    }

    #[test]
    fn test_metadata_block() {
        let assembler = OutputAssembler::new(EcosystemKey::Rust.profile(), TS);
        let out = assembler.append_metadata("Body");
        assert!(out.starts_with("Body\n\n---\n\n## Generation Metadata\n"));
        assert!(out.contains("**Generated for:** Rust\n"));
        assert!(out.contains("**Build Command:** `cargo build`\n"));
        assert!(out.contains("**Linter:** `clippy`\n"));
        assert!(out.contains("- JSON Serialization: serde\n"));
        assert!(out.contains("- Dependency Injection: shaku\n"));
    }

    #[test]
    fn test_metadata_lists_all_state_management_options() {
        let assembler = OutputAssembler::new(EcosystemKey::Flutter.profile(), TS);
        let out = assembler.append_metadata("");
        assert!(out.contains("- State Management: Bloc, Cubit, Riverpod, Provider\n"));
    }

    #[test]
    fn test_empty_requirements_are_skipped() {
        let assembler = OutputAssembler::new(EcosystemKey::Go.profile(), TS);
        let out = assembler.assemble("Body", Some(""));
        assert!(!out.contains("Generated Requirements"));
        assert!(out.contains("## Generation Metadata"));
    }
}
