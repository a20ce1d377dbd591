//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod build;

use clap::Subcommand;

use crate::core::request::BuildOutcome;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile TypeScript code to JavaScript. Optionally watch for file changes
    Build {
        /// Watch for file changes and re-build the project
        #[arg(short, long)]
        watch: bool,

        /// Build for production
        #[arg(long, visible_alias = "prod")]
        production: bool,

        /// Select between npm or yarn for installing dependencies
        #[arg(long, value_name = "CLIENT")]
        client: Option<String>,
    },
}

impl Commands {
    /// Execute the command
    pub async fn run(self) -> BuildOutcome {
        match self {
            Self::Build {
                watch,
                production,
                client,
            } => {
                let options = build::BuildOptions {
                    watch,
                    production,
                    client,
                };
                build::execute(options).await
            }
        }
    }
}
