//! Non-interactive generation: `cursorflow <PROMPT_TYPE> <LANGUAGE> [options]`.

use anyhow::{Context, Result};
use colored::Colorize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::PromptSelection;
use crate::generator::{BatchReport, PromptGenerator};

/// Arguments of one generation request, already detached from clap.
#[derive(Debug, Clone)]
pub struct GenerateCommand {
    pub selection: PromptSelection,
    pub language: String,
    pub requirements: Option<String>,
    pub feature: Option<String>,
    pub output: Option<PathBuf>,
}

impl GenerateCommand {
    /// Run the request, printing progress to `out`.
    ///
    /// Returns the process exit code. A batch run reports each prompt type on
    /// its own line and exits with 0 even when some or all of them failed.
    pub fn execute<W: Write>(&self, generator: &PromptGenerator, out: &mut W) -> Result<i32> {
        debug!(?self, "executing generate command");
        match self.selection {
            PromptSelection::Single(prompt_type) => {
                let path = generator
                    .generate(
                        prompt_type,
                        &self.language,
                        self.requirements.as_deref(),
                        self.feature.as_deref(),
                        self.output.as_deref(),
                    )
                    .with_context(|| format!("Failed to generate {prompt_type} prompt"))?;

                writeln!(out, "{} Generated: {}", "✓".green(), path.display())?;
                writeln!(out, "  Location: {}", absolute(&path).display())?;
                Ok(0)
            }
            PromptSelection::All => {
                writeln!(out, "Generating all prompts for {}...", self.language)?;
                let target = self.output.as_deref().unwrap_or_else(|| generator.output_dir());
                let report = generator.generate_all(
                    &self.language,
                    self.requirements.as_deref(),
                    self.feature.as_deref(),
                    Some(target),
                )?;
                write_batch_report(out, &report)?;
                writeln!(
                    out,
                    "\n{} Generated {} files in {}",
                    "✓".green(),
                    report.success_count(),
                    target.display()
                )?;
                Ok(0)
            }
        }
    }
}

/// One line per prompt type: `✓ Generated: <file>` or `✗ Failed to generate <type>: <error>`.
pub fn write_batch_report<W: Write>(out: &mut W, report: &BatchReport) -> Result<()> {
    for (prompt_type, outcome) in &report.outcomes {
        match outcome {
            Ok(path) => {
                let name = path.file_name().map_or_else(
                    || path.display().to_string(),
                    |n| n.to_string_lossy().into_owned(),
                );
                writeln!(out, "{} Generated: {name}", "✓".green())?;
            }
            Err(e) => writeln!(out, "{} Failed to generate {prompt_type}: {e}", "✗".red())?,
        }
    }
    Ok(())
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
