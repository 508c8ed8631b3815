//! Template fixtures and an on-disk template store for tests.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::config::template_dir;
use crate::core::PromptType;

/// A template file body and the prompt type it belongs to.
#[derive(Clone, Debug)]
pub struct TemplateFixture {
    pub prompt_type: PromptType,
    pub content: String,
}

impl TemplateFixture {
    /// Small template that touches every pipeline stage.
    ///
    /// It has front matter, placeholders, a fenced block and conditional
    /// sections for flutter, react and go.
    pub fn standard(prompt_type: PromptType) -> Self {
        let content = format!(
            r#"---
description: {key} for [Language]
---
# {label} ([Language])

Manage dependencies in `[package_file]` ({package}) and build with `[build_command]`.
Lint with `[linter]`; state via [state-management-library].

<!-- BEGIN:FLUTTER -->
Keep StatefulWidget trees shallow.
<!-- END:FLUTTER -->
<!-- BEGIN:REACT -->
Compose StatefulWidget-free components.
<!-- END:REACT -->
<!-- BEGIN:GO -->
Go section body.
<!-- END:GO -->

```[language]
// entry point[extension]
```
"#,
            key = prompt_type.as_str(),
            label = prompt_type.label(),
            package = "[package-manager]",
        );
        Self {
            prompt_type,
            content,
        }
    }

    /// Template with no markers or placeholders at all.
    pub fn plain(prompt_type: PromptType, body: &str) -> Self {
        Self {
            prompt_type,
            content: body.to_string(),
        }
    }

    /// Write this template into the template store rooted at `base_dir`.
    pub fn write_to(&self, base_dir: &Path) -> Result<PathBuf> {
        let dir = template_dir(base_dir);
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create template dir {}", dir.display()))?;
        let path = dir.join(self.prompt_type.template_name());
        fs::write(&path, &self.content)
            .with_context(|| format!("Failed to write template {}", path.display()))?;
        Ok(path)
    }
}

/// Temporary base directory holding a template store.
pub struct TemplateStore {
    temp_dir: TempDir,
}

impl TemplateStore {
    /// Empty base directory with no templates.
    pub fn empty() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new().context("Failed to create temp dir")?,
        })
    }

    /// Base directory with a standard template for every prompt type.
    pub fn with_all_templates() -> Result<Self> {
        let store = Self::empty()?;
        for prompt_type in PromptType::ALL {
            store.add(&TemplateFixture::standard(prompt_type))?;
        }
        Ok(store)
    }

    /// Base directory with standard templates for the given prompt types only.
    pub fn with_templates(prompt_types: &[PromptType]) -> Result<Self> {
        let store = Self::empty()?;
        for prompt_type in prompt_types {
            store.add(&TemplateFixture::standard(*prompt_type))?;
        }
        Ok(store)
    }

    pub fn add(&self, fixture: &TemplateFixture) -> Result<PathBuf> {
        fixture.write_to(self.base_dir())
    }

    pub fn base_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn template_path(&self, prompt_type: PromptType) -> PathBuf {
        template_dir(self.base_dir()).join(prompt_type.template_name())
    }

    /// `<base>/.cursor/commands/specify`
    pub fn default_output_dir(&self) -> PathBuf {
        crate::config::default_output_dir(self.base_dir())
    }
}
