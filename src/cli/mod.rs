//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no business logic - that belongs in the [`crate::core`] module.

pub mod commands;
pub mod output;

use anyhow::Result;
use clap::Parser;

use crate::core::request::BuildOutcome;
use commands::Commands;

/// tsbuild - Build TypeScript projects
///
/// Compile once, watch for changes, or produce a production build with
/// its dependencies installed.
#[derive(Parser, Debug)]
#[command(name = "tsbuild")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Execute the CLI command
    ///
    /// Returns `None` when no subcommand was given and help was shown.
    pub async fn run(self) -> Result<Option<BuildOutcome>> {
        if let Some(cmd) = self.command {
            Ok(Some(cmd.run().await))
        } else {
            // No subcommand provided, show help
            use clap::CommandFactory;
            let mut cmd = Self::command();
            cmd.print_help()?;
            Ok(None)
        }
    }
}
