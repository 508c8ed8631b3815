//! Command-line interface for cursorflow.
//!
//! Two modes share one entry point:
//!
//! - **Generate**: `cursorflow <PROMPT_TYPE> <LANGUAGE> [options]` writes one
//!   prompt (or all of them with `all`) and exits. See [`generate`].
//! - **Wizard**: `cursorflow` with no positional arguments asks a few questions
//!   and generates every prompt type. See [`wizard`]. `-r`, `-f` and `-o` only
//!   apply to generate mode and are rejected without a prompt type.
//!
//! Global flags:
//!
//! - `--verbose` / `--quiet` pick the log level (debug / error, default warn);
//!   `RUST_LOG` overrides both
//! - `--config` points at a global config file (also `$CURSORFLOW_CONFIG`)
//! - `--base-dir` selects the directory holding `.cursor/commands/common`
//!
//! # Examples
//!
//! ```bash
//! cursorflow research_plan flutter --requirements "User authentication feature"
//! cursorflow all kotlin --feature "Shopping Cart"
//! cursorflow implementation_plan typescript -o plans/dashboard.prompt.md
//! cursorflow                      # interactive wizard
//! ```

pub mod generate;
pub mod wizard;

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::GlobalConfig;
use crate::core::PromptSelection;
use crate::ecosystem::validate_registry;
use crate::generator::PromptGenerator;

pub use generate::GenerateCommand;
pub use wizard::{Wizard, infer_ecosystem};

const EXAMPLES: &str = "\
Examples:
  # Generate research plan for Flutter
  cursorflow research_plan flutter --requirements \"User authentication feature\"

  # Generate all prompts for Kotlin
  cursorflow all kotlin --feature \"Shopping Cart\"

  # Generate implementation plan for TypeScript
  cursorflow implementation_plan typescript --requirements \"Dashboard component\"

  # Start the interactive project wizard
  cursorflow";

/// Runtime settings derived from the global flags.
///
/// Kept separate from [`Cli`] so tests can run commands with explicit settings.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Default log directive for the `cursorflow` target; `RUST_LOG` wins when set.
    pub log_level: Option<String>,
    /// Global config file to load instead of the default location.
    pub config_path: Option<PathBuf>,
}

impl CliConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the global tracing subscriber, writing to stderr.
    ///
    /// Safe to call more than once; later calls are ignored.
    pub fn init_logging(&self) {
        let filter = match std::env::var("RUST_LOG") {
            Ok(_) => EnvFilter::from_default_env(),
            Err(_) => EnvFilter::new(format!(
                "cursorflow={}",
                self.log_level.as_deref().unwrap_or("warn")
            )),
        };

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(io::stderr))
            .try_init();
    }
}

/// Generate ecosystem-specific Cursor prompt files from common templates.
#[derive(Parser, Debug)]
#[command(
    name = "cursorflow",
    version,
    about = "Generate customized prompt files from common templates",
    long_about = "Generate customized prompt files from common templates.\n\n\
                  Run without arguments to start the interactive project wizard.",
    after_help = EXAMPLES
)]
pub struct Cli {
    /// Prompt type: research_plan, implementation_plan, ui_ux_design,
    /// ui_ux_bridge, project_rules, test_rules, or all
    #[arg(value_name = "PROMPT_TYPE", requires = "language")]
    prompt_type: Option<String>,

    /// Target language/framework (e.g. flutter, kotlin, swift, typescript, reactjs)
    #[arg(value_name = "LANGUAGE")]
    language: Option<String>,

    /// User requirements/description for the feature
    #[arg(short, long, requires = "prompt_type")]
    requirements: Option<String>,

    /// Feature name (used in the output filename)
    #[arg(short, long, requires = "prompt_type")]
    feature: Option<String>,

    /// Output file or directory (default: <base-dir>/.cursor/commands/specify/)
    #[arg(short, long, requires = "prompt_type")]
    output: Option<PathBuf>,

    /// Directory containing .cursor/commands/common (default: current directory)
    #[arg(long)]
    base_dir: Option<PathBuf>,

    /// Show debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,

    /// Path to the global config file (default: ~/.cursorflow/config.toml)
    #[arg(short, long, env = "CURSORFLOW_CONFIG")]
    config: Option<PathBuf>,
}

impl Cli {
    /// Execute with settings taken from the global flags. Returns the exit code.
    pub fn execute(self) -> Result<i32> {
        let config = self.build_config();
        config.init_logging();
        self.execute_with_config(config)
    }

    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            Some("error".to_string())
        } else {
            None
        };

        CliConfig {
            log_level,
            config_path: self.config.clone(),
        }
    }

    /// Execute with explicit settings. Logging is not touched.
    pub fn execute_with_config(self, config: CliConfig) -> Result<i32> {
        validate_registry().context("Built-in ecosystem registry failed validation")?;

        let global = GlobalConfig::load_with_optional(config.config_path)?;
        let base_dir = match self.base_dir.or_else(|| global.base_dir()) {
            Some(dir) => dir,
            None => std::env::current_dir().context("Failed to determine current directory")?,
        };
        debug!(base_dir = %base_dir.display(), "resolved base directory");

        let mut generator = PromptGenerator::new(&base_dir)?;
        if let Some(output_dir) = global.output_dir() {
            generator = generator.with_output_dir(output_dir);
        }

        match (self.prompt_type, self.language) {
            (Some(prompt_type), Some(language)) => {
                let command = GenerateCommand {
                    selection: prompt_type.parse::<PromptSelection>()?,
                    language,
                    requirements: self.requirements,
                    feature: self.feature,
                    output: self.output,
                };
                command.execute(&generator, &mut io::stdout().lock())
            }
            _ => {
                let stdin = io::stdin();
                Wizard::new(stdin.lock(), io::stdout(), &generator, global.wizard_output_dir()).run()
            }
        }
    }
}
