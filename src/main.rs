//! cursorflow CLI entry point
//!
//! Parses arguments, runs either generate mode or the interactive wizard, and
//! turns errors into colored messages on stderr with exit code 1.

use clap::Parser;
use cursorflow::cli;
use cursorflow::core::user_friendly_error;

fn main() {
    let cli = cli::Cli::parse();

    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
