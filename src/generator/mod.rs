//! Prompt generation: template store in, customized prompt files out.
//!
//! [`PromptGenerator`] ties the pieces together for one base directory:
//!
//! - templates are read from `<base>/.cursor/commands/common`
//! - output goes to `<base>/.cursor/commands/specify` unless an explicit path is
//!   given (see [`PromptGenerator::generate`] for the path rules)
//! - file names follow `{prompt_type}_{ecosystem}[_{feature}].prompt.md`
//!
//! [`PromptGenerator::generate_all`] runs every prompt type and isolates failures
//! per item; the returned [`BatchReport`] says which ones succeeded.
//!
//! # Example
//!
//! ```rust,no_run
//! use cursorflow::core::PromptType;
//! use cursorflow::generator::PromptGenerator;
//!
//! # fn example() -> Result<(), cursorflow::core::CursorflowError> {
//! let generator = PromptGenerator::new(".")?;
//! let path = generator.generate(
//!     PromptType::ResearchPlan,
//!     "flutter",
//!     Some("User authentication feature"),
//!     None,
//!     None,
//! )?;
//! println!("wrote {}", path.display());
//! # Ok(())
//! # }
//! ```

use regex::Regex;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::config::{default_output_dir, template_dir};
use crate::constants::{OUTPUT_SUFFIX, TIMESTAMP_FORMAT};
use crate::core::{CursorflowError, PromptType};
use crate::ecosystem::{EcosystemKey, resolve_ecosystem};
use crate::templating::{TemplateCustomizer, compile_pattern};
use crate::utils::fs::{ensure_dir, read_text_file, safe_write};

/// Outcome of one prompt type in a batch run.
pub type BatchOutcome = (PromptType, Result<PathBuf, CursorflowError>);

/// Per-prompt-type results of [`PromptGenerator::generate_all`], in generation order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<BatchOutcome>,
}

impl BatchReport {
    /// Paths written, in order.
    pub fn succeeded(&self) -> impl Iterator<Item = (PromptType, &PathBuf)> {
        self.outcomes.iter().filter_map(|(t, r)| r.as_ref().ok().map(|p| (*t, p)))
    }

    /// Prompt types that failed, with their errors.
    pub fn failed(&self) -> impl Iterator<Item = (PromptType, &CursorflowError)> {
        self.outcomes.iter().filter_map(|(t, r)| r.as_ref().err().map(|e| (*t, e)))
    }

    pub fn success_count(&self) -> usize {
        self.succeeded().count()
    }

    pub fn has_failures(&self) -> bool {
        self.failed().next().is_some()
    }
}

/// Generates customized prompt files from the template store under one base directory.
#[derive(Debug, Clone)]
pub struct PromptGenerator {
    template_dir: PathBuf,
    output_dir: PathBuf,
    customizer: TemplateCustomizer,
    strip_chars: Regex,
    collapse_separators: Regex,
}

impl PromptGenerator {
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self, CursorflowError> {
        let base_dir = base_dir.into();
        Ok(Self {
            template_dir: template_dir(&base_dir),
            output_dir: default_output_dir(&base_dir),
            customizer: TemplateCustomizer::new()?,
            strip_chars: compile_pattern(r"[^\w\s-]")?,
            collapse_separators: compile_pattern(r"[-\s]+")?,
        })
    }

    /// Replace the default output directory.
    #[must_use]
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Directory used when no explicit output path is given.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Read the common template for `prompt_type`.
    pub fn read_template(&self, prompt_type: PromptType) -> Result<String, CursorflowError> {
        let path = self.template_dir.join(prompt_type.template_name());
        if !path.is_file() {
            return Err(CursorflowError::TemplateNotFound {
                path: path.display().to_string(),
            });
        }
        debug!(template = %path.display(), "reading template");
        read_text_file(&path)
    }

    /// Make a feature name safe for a file name.
    ///
    /// Characters other than word characters, whitespace and hyphens are
    /// dropped, then runs of hyphens and whitespace become one underscore.
    pub fn sanitize_feature_name(&self, feature: &str) -> String {
        let stripped = self.strip_chars.replace_all(feature, "");
        self.collapse_separators.replace_all(stripped.trim(), "_").into_owned()
    }

    /// `{prompt_type}_{ecosystem}[_{feature}].prompt.md`
    ///
    /// A feature that sanitizes to nothing is left out.
    pub fn generate_filename(
        &self,
        prompt_type: PromptType,
        key: EcosystemKey,
        feature: Option<&str>,
    ) -> String {
        let mut name = format!("{}_{}", prompt_type.output_prefix(), key.as_str());
        if let Some(feature) = feature {
            let safe = self.sanitize_feature_name(feature);
            if !safe.is_empty() {
                name.push('_');
                name.push_str(&safe);
            }
        }
        name.push_str(OUTPUT_SUFFIX);
        name
    }

    /// Generate one prompt file and return where it was written.
    ///
    /// Output location:
    /// - `output` is `None`: the output directory plus the generated file name
    /// - `output` is an existing directory: that directory plus the generated file name
    /// - otherwise `output` is used as the file path
    pub fn generate(
        &self,
        prompt_type: PromptType,
        language: &str,
        requirements: Option<&str>,
        feature: Option<&str>,
        output: Option<&Path>,
    ) -> Result<PathBuf, CursorflowError> {
        let key = resolve_ecosystem(language)?;
        let template = self.read_template(prompt_type)?;
        let content = self.customizer.customize(&template, key, requirements, &timestamp())?;

        let path = match output {
            None => self.output_dir.join(self.generate_filename(prompt_type, key, feature)),
            Some(dir) if dir.is_dir() => dir.join(self.generate_filename(prompt_type, key, feature)),
            Some(file) => file.to_path_buf(),
        };

        safe_write(&path, &content)?;
        info!(prompt_type = %prompt_type, ecosystem = %key, path = %path.display(), "generated prompt");
        Ok(path)
    }

    /// Generate every prompt type for `language`.
    ///
    /// `output_dir`, when given, is created if needed and always treated as a
    /// directory. A failure for one prompt type is recorded and the run moves on.
    pub fn generate_all(
        &self,
        language: &str,
        requirements: Option<&str>,
        feature: Option<&str>,
        output_dir: Option<&Path>,
    ) -> Result<BatchReport, CursorflowError> {
        let target = output_dir.unwrap_or(&self.output_dir);
        ensure_dir(target)?;

        let mut report = BatchReport::default();
        for prompt_type in PromptType::ALL {
            let outcome = self.generate(prompt_type, language, requirements, feature, Some(target));
            if let Err(e) = &outcome {
                warn!(prompt_type = %prompt_type, error = %e, "prompt generation failed");
            }
            report.outcomes.push((prompt_type, outcome));
        }
        Ok(report)
    }
}

fn timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{TemplateFixture, TemplateStore, init_test_logging};
    use std::fs;

    fn generator(store: &TemplateStore) -> PromptGenerator {
        init_test_logging(None);
        PromptGenerator::new(store.base_dir()).unwrap()
    }

    #[test]
    fn test_generate_filename_with_feature() {
        let store = TemplateStore::empty().unwrap();
        let key = resolve_ecosystem("reactjs").unwrap();
        assert_eq!(
            generator(&store).generate_filename(PromptType::ImplementationPlan, key, Some("Shopping Cart")),
            "implementation_plan_react_Shopping_Cart.prompt.md"
        );
    }

    #[test]
    fn test_generate_filename_without_feature() {
        let store = TemplateStore::empty().unwrap();
        assert_eq!(
            generator(&store).generate_filename(PromptType::TestRules, EcosystemKey::Go, None),
            "test_rules_go.prompt.md"
        );
    }

    #[test]
    fn test_sanitize_feature_name() {
        let store = TemplateStore::empty().unwrap();
        let g = generator(&store);
        assert_eq!(g.sanitize_feature_name("  Login / Sign-up!! flow "), "Login_Sign_up_flow");
        assert_eq!(g.sanitize_feature_name("a--b  c"), "a_b_c");
        assert_eq!(g.sanitize_feature_name("café menü"), "café_menü");
        assert_eq!(g.sanitize_feature_name("!!!"), "");
        assert_eq!(
            g.generate_filename(PromptType::ResearchPlan, EcosystemKey::Rust, Some("???")),
            "research_plan_rust.prompt.md"
        );
    }

    #[test]
    fn test_generate_rust_metadata() {
        let store = TemplateStore::with_all_templates().unwrap();
        let path = generator(&store)
            .generate(PromptType::ResearchPlan, "rust", None, None, None)
            .unwrap();

        assert_eq!(path, store.default_output_dir().join("research_plan_rust.prompt.md"));
        let out = fs::read_to_string(&path).unwrap();
        assert!(out.contains("**Build Command:** `cargo build`"));
        assert!(out.contains("**Linter:** `clippy`"));
        assert!(!out.contains("## Generated Requirements"));
        assert!(!out.contains("Go section body"));
    }

    #[test]
    fn test_generate_go_metadata() {
        let store = TemplateStore::with_all_templates().unwrap();
        let path = generator(&store)
            .generate(PromptType::ResearchPlan, "golang", None, None, None)
            .unwrap();

        assert!(path.ends_with("research_plan_go.prompt.md"));
        let out = fs::read_to_string(&path).unwrap();
        assert!(out.contains("**Build Command:** `go build`"));
        assert!(out.contains("**Linter:** `golangci-lint`"));
        assert!(out.contains("Go section body."));
    }

    #[test]
    fn test_generate_into_existing_directory() {
        let store = TemplateStore::with_all_templates().unwrap();
        let out_dir = store.base_dir().join("out");
        fs::create_dir_all(&out_dir).unwrap();

        let path = generator(&store)
            .generate(PromptType::ProjectRules, "ts", None, Some("Billing"), Some(&out_dir))
            .unwrap();
        assert_eq!(path, out_dir.join("project_rules_typescript_Billing.prompt.md"));
    }

    #[test]
    fn test_generate_to_explicit_file() {
        let store = TemplateStore::with_all_templates().unwrap();
        let target = store.base_dir().join("custom/name.md");

        let path = generator(&store)
            .generate(PromptType::UiUxBridge, "swift", Some("Dark mode"), None, Some(&target))
            .unwrap();
        assert_eq!(path, target);
        let out = fs::read_to_string(&target).unwrap();
        assert!(out.contains("Dark mode"));
        assert!(out.contains("**Generated for:** Swift"));
    }

    #[test]
    fn test_with_output_dir() {
        let store = TemplateStore::with_all_templates().unwrap();
        let out_dir = store.base_dir().join("configured");
        let path = generator(&store)
            .with_output_dir(&out_dir)
            .generate(PromptType::TestRules, "python", None, None, None)
            .unwrap();
        assert_eq!(path, out_dir.join("test_rules_python.prompt.md"));
    }

    #[test]
    fn test_missing_template() {
        let store = TemplateStore::empty().unwrap();
        let err = generator(&store)
            .generate(PromptType::ResearchPlan, "rust", None, None, None)
            .unwrap_err();
        match err {
            CursorflowError::TemplateNotFound { path } => {
                assert!(path.ends_with("research_plan_common.prompt.md"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unsupported_language_lists_keys() {
        let store = TemplateStore::with_all_templates().unwrap();
        let err = generator(&store)
            .generate(PromptType::ResearchPlan, "cobol", None, None, None)
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("cobol"));
        for key in EcosystemKey::ALL {
            assert!(message.contains(key.as_str()), "missing {key}");
        }
    }

    #[test]
    fn test_generate_all_isolates_failures() {
        let store =
            TemplateStore::with_templates(&[PromptType::ResearchPlan, PromptType::TestRules]).unwrap();
        let out_dir = store.base_dir().join("batch/out");

        let report = generator(&store)
            .generate_all("kotlin", Some("Offline"), Some("Cart"), Some(&out_dir))
            .unwrap();

        assert_eq!(report.outcomes.len(), PromptType::ALL.len());
        assert_eq!(report.success_count(), 2);
        assert!(report.has_failures());
        let written: Vec<_> = report.succeeded().map(|(t, _)| t).collect();
        assert_eq!(written, vec![PromptType::ResearchPlan, PromptType::TestRules]);
        assert!(out_dir.join("research_plan_kotlin_Cart.prompt.md").is_file());
        assert!(out_dir.join("test_rules_kotlin_Cart.prompt.md").is_file());
        assert!(
            report
                .failed()
                .all(|(_, e)| matches!(e, CursorflowError::TemplateNotFound { .. }))
        );
    }

    #[test]
    fn test_generate_all_unsupported_language_fails_each_item() {
        let store = TemplateStore::with_all_templates().unwrap();
        let report = generator(&store).generate_all("cobol", None, None, None).unwrap();
        assert_eq!(report.success_count(), 0);
        assert_eq!(report.failed().count(), PromptType::ALL.len());
    }

    #[test]
    fn test_plain_template_only_gains_metadata() {
        let store = TemplateStore::empty().unwrap();
        store
            .add(&TemplateFixture::plain(PromptType::ResearchPlan, "Just text.\n"))
            .unwrap();
        let path = generator(&store)
            .generate(PromptType::ResearchPlan, "java", None, None, None)
            .unwrap();
        let out = fs::read_to_string(path).unwrap();
        assert!(out.starts_with("Just text.\n"));
        assert!(out.contains("**Package Manager:** maven"));
    }
}
