//! Interactive project wizard, run when `cursorflow` is started without arguments.
//!
//! The wizard asks seven short questions, proposes an ecosystem from the
//! answers, shows a summary and then generates every prompt type into one
//! folder. Input and output are generic so tests can drive it with in-memory
//! buffers.

use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

use crate::constants::MAX_DEFAULT_PROJECT_NAME_LEN;
use crate::core::PromptType;
use crate::ecosystem::{EcosystemKey, resolve_ecosystem};
use crate::generator::PromptGenerator;
use crate::utils::fs::{ensure_dir, expand_user_path};

use super::generate::write_batch_report;

/// Input reached EOF while a question was still open.
#[derive(Debug, Error)]
#[error("input ended before the wizard finished")]
struct InputClosed;

const RULE: &str = "────────────────────────────────────────";

const MOBILE_KEYWORDS: &[&str] = &["mobile app", "ios app", "android app", "react native"];
const WEB_KEYWORDS: &[&str] = &[
    "web app",
    "website",
    "web application",
    "spa",
    "react",
    "next.js",
    "vue",
    "angular",
];
const BACKEND_KEYWORDS: &[&str] = &["api", "backend", "microservice", "server"];

/// Guess an ecosystem from free text.
///
/// Named frameworks are checked first, then web, backend and mobile keywords.
/// Matching is by substring on the lower-cased text; the fallback is react.
pub fn infer_ecosystem(text: &str) -> EcosystemKey {
    let text = text.to_lowercase();
    let has = |needle: &str| text.contains(needle);
    let any = |needles: &[&str]| needles.iter().any(|n| text.contains(n));

    if has("flutter") || has("dart") {
        EcosystemKey::Flutter
    } else if has("react native") {
        EcosystemKey::React
    } else if has("jetpack compose") || has("android") || has("kotlin") {
        EcosystemKey::Kotlin
    } else if has("swiftui") || has("swift") || has("ios") {
        EcosystemKey::Swift
    } else if any(WEB_KEYWORDS) {
        EcosystemKey::React
    } else if any(BACKEND_KEYWORDS) {
        EcosystemKey::Python
    } else if any(MOBILE_KEYWORDS) {
        EcosystemKey::Flutter
    } else {
        EcosystemKey::React
    }
}

/// Answers collected by the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectAnswers {
    pub description: String,
    pub target_users: String,
    pub platforms: String,
    pub extra_notes: String,
    pub ecosystem: EcosystemKey,
    pub project_name: String,
    pub output_dir: PathBuf,
}

impl ProjectAnswers {
    /// Requirements text handed to every generated prompt.
    pub fn requirements(&self) -> String {
        let or = |value: &str, fallback: &'static str| {
            if value.is_empty() { fallback.to_string() } else { value.to_string() }
        };
        [
            "## Project Idea".to_string(),
            self.description.clone(),
            String::new(),
            "## Target Users".to_string(),
            or(&self.target_users, "Not specified"),
            String::new(),
            "## Platforms".to_string(),
            or(&self.platforms, "Not specified"),
            String::new(),
            "## Extra Notes".to_string(),
            or(&self.extra_notes, "None"),
        ]
        .join("\n")
    }
}

/// Step-by-step project wizard over an arbitrary reader and writer.
pub struct Wizard<'g, R, W> {
    input: R,
    output: W,
    generator: &'g PromptGenerator,
    default_output_dir: PathBuf,
}

impl<'g, R: BufRead, W: Write> Wizard<'g, R, W> {
    pub fn new(
        input: R,
        output: W,
        generator: &'g PromptGenerator,
        default_output_dir: PathBuf,
    ) -> Self {
        Self {
            input,
            output,
            generator,
            default_output_dir,
        }
    }

    /// Run the wizard to completion and return the process exit code.
    ///
    /// 1 when no description is given or input ends before the last answer;
    /// nothing is written in either case. 0 when the user cancels at the
    /// confirmation or the batch ran, whatever its per-item results.
    pub fn run(&mut self) -> Result<i32> {
        match self.interview() {
            Err(e) if e.is::<InputClosed>() => {
                writeln!(self.output, "\nInput ended before the wizard finished. No files generated.")?;
                Ok(1)
            }
            other => other,
        }
    }

    fn interview(&mut self) -> Result<i32> {
        self.banner()?;

        let Some(answers) = self.collect_answers()? else {
            writeln!(self.output, "No description provided, aborting.")?;
            return Ok(1);
        };
        debug!(?answers, "wizard answers collected");

        self.summary(&answers)?;
        if !self.ask_yes_no("\nProceed with generation?", true)? {
            writeln!(self.output, "Cancelled. No files generated.")?;
            return Ok(0);
        }

        writeln!(
            self.output,
            "\nGenerating files for '{}' ({}) ...\n",
            answers.project_name, answers.ecosystem
        )?;

        ensure_dir(&answers.output_dir)?;
        let requirements = answers.requirements();
        let report = self.generator.generate_all(
            answers.ecosystem.as_str(),
            Some(&requirements),
            Some(&answers.project_name),
            Some(&answers.output_dir),
        )?;
        write_batch_report(&mut self.output, &report)?;

        writeln!(self.output, "Done. Generated files:")?;
        for (_, path) in report.succeeded() {
            writeln!(self.output, "  - {}", path.display())?;
        }
        writeln!(
            self.output,
            "\nYou can open these markdown files in Cursor and run them as commands."
        )?;

        Ok(0)
    }

    fn banner(&mut self) -> Result<()> {
        writeln!(self.output, "{RULE}")?;
        writeln!(self.output, "  {}", "CursorFlow Project Wizard".bold())?;
        writeln!(self.output, "{RULE}")?;
        writeln!(self.output, "I'll ask a few simple questions about your project,")?;
        writeln!(self.output, "then generate research plan, implementation plan,")?;
        writeln!(self.output, "UI/UX design system, UI/UX bridge, project rules,")?;
        writeln!(self.output, "and test rules for you.\n")?;
        Ok(())
    }

    /// `None` when the description is empty.
    fn collect_answers(&mut self) -> Result<Option<ProjectAnswers>> {
        writeln!(self.output, "1) What do you want to build?")?;
        writeln!(self.output, "   (Example: \"I want to create a shopping mobile app\")")?;
        let description = self.ask("> ")?;
        if description.is_empty() {
            return Ok(None);
        }

        writeln!(self.output, "\n2) Who is this for? (target users / audience)")?;
        writeln!(
            self.output,
            "   (Example: \"Young adults buying sneakers\", or press Enter to skip)"
        )?;
        let target_users = self.ask("> ")?;

        writeln!(self.output, "\n3) Which platforms do you care about most?")?;
        writeln!(
            self.output,
            "   (Examples: \"mobile\", \"web\", \"mobile + web\", or press Enter to skip)"
        )?;
        let platforms = self.ask("> ")?;

        writeln!(self.output, "\n4) Any important constraints or preferences?")?;
        writeln!(
            self.output,
            "   (Examples: \"offline first\", \"small budget\", \"must be very fast\","
        )?;
        writeln!(self.output, "    or press Enter to skip)")?;
        let extra_notes = self.ask("> ")?;

        let ecosystem = self.choose_ecosystem(&format!("{description} {platforms}"))?;

        let default_name = self.default_project_name(&description);
        writeln!(self.output, "\n6) Give this project a short name (used only for filenames).")?;
        let project_name = self.ask(&format!("   Project name [{default_name}]: "))?;
        let project_name = if project_name.is_empty() { default_name } else { project_name };

        writeln!(self.output, "\n7) Where should I save the generated files?")?;
        writeln!(
            self.output,
            "   Press Enter to use the default folder: {}",
            self.default_output_dir.display()
        )?;
        let output = self.ask("   Output folder: ")?;
        let output_dir = if output.is_empty() {
            self.default_output_dir.clone()
        } else {
            expand_user_path(&output)
        };

        Ok(Some(ProjectAnswers {
            description,
            target_users,
            platforms,
            extra_notes,
            ecosystem,
            project_name,
            output_dir,
        }))
    }

    fn choose_ecosystem(&mut self, text: &str) -> Result<EcosystemKey> {
        let inferred = infer_ecosystem(text);
        writeln!(self.output, "\n5) About the tech stack")?;
        writeln!(self.output, "   Based on your answers, a good default could be: {inferred}")?;

        if !self.ask_yes_no("   Do you want to choose a different language/framework?", false)? {
            return Ok(inferred);
        }

        writeln!(self.output, "   Some options you can type:")?;
        writeln!(self.output, "     flutter, dart, kotlin, android, swift, ios")?;
        writeln!(self.output, "     typescript, react, reactjs, python, java, csharp, go, rust")?;
        let choice =
            self.ask("   Enter language/framework (or press Enter to keep the default): ")?;
        if choice.is_empty() {
            return Ok(inferred);
        }

        match resolve_ecosystem(&choice) {
            Ok(key) => {
                writeln!(self.output, "   {} Using: {}", "✓".green(), key.profile().name)?;
                Ok(key)
            }
            Err(_) => {
                writeln!(
                    self.output,
                    "   {} Could not recognize '{choice}', using default: {inferred}",
                    "⚠".yellow()
                )?;
                Ok(inferred)
            }
        }
    }

    /// Sanitized, lower-cased description cut to a short file-name-friendly length.
    fn default_project_name(&self, description: &str) -> String {
        let name: String = self
            .generator
            .sanitize_feature_name(&description.to_lowercase())
            .chars()
            .take(MAX_DEFAULT_PROJECT_NAME_LEN)
            .collect();
        if name.is_empty() { "project".to_string() } else { name }
    }

    fn summary(&mut self, answers: &ProjectAnswers) -> Result<()> {
        writeln!(self.output, "\n{RULE}")?;
        writeln!(self.output, "Summary")?;
        writeln!(self.output, "{RULE}")?;
        writeln!(self.output, "Project name   : {}", answers.project_name)?;
        writeln!(self.output, "Tech stack     : {}", answers.ecosystem.profile().name)?;
        writeln!(self.output, "Output folder  : {}", answers.output_dir.display())?;
        writeln!(self.output, "I'll now generate:")?;
        for prompt_type in PromptType::ALL {
            writeln!(self.output, "  - {}", prompt_type.label())?;
        }
        Ok(())
    }

    /// Print `prompt` without a newline and read one trimmed line.
    ///
    /// Fails with [`InputClosed`] at end of input.
    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputClosed.into());
        }
        Ok(line.trim().to_string())
    }

    fn ask_yes_no(&mut self, prompt: &str, default: bool) -> Result<bool> {
        let suffix = if default { " [Y/n]: " } else { " [y/N]: " };
        let answer = self.ask(&format!("{prompt}{suffix}"))?.to_lowercase();
        if answer.is_empty() {
            return Ok(default);
        }
        Ok(answer.starts_with('y'))
    }
}
