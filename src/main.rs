//! tsbuild CLI - Build TypeScript projects
//!
//! Entry point for the tsbuild command-line application.

use anyhow::Result;
use clap::Parser;

use tsbuild::cli::output::{display_error, OutputConfig};
use tsbuild::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let output_config = OutputConfig::new(cli.quiet, cli.verbose);
    output_config.apply_global();

    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(output_config.tracing_level().into()),
        )
        .init();

    // Failed or aborted builds have already been reported by the logger
    match cli.run().await {
        Ok(Some(outcome)) if !outcome.is_success() => std::process::exit(1),
        Ok(_) => Ok(()),
        Err(e) => {
            display_error(&e);
            std::process::exit(1);
        }
    }
}
