//! Build request model
//!
//! Transient values describing one `tsbuild build` invocation: the request
//! itself, the package-manager client, the chosen mode and the outcome.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::core::services::EnvironmentResolver;

/// One invocation's intent, built from the environment and CLI flags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildRequest {
    /// Project root, if one could be located
    pub working_directory: Option<PathBuf>,
    /// Whether the project is a TypeScript project
    pub is_typed_project: bool,
    /// `--watch`
    pub watch: bool,
    /// `--production`
    pub production: bool,
    /// `--client` exactly as the user typed it
    pub client: Option<String>,
}

impl BuildRequest {
    /// Combine environment facts with the user's flags
    pub fn from_environment(
        env: &impl EnvironmentResolver,
        watch: bool,
        production: bool,
        client: Option<String>,
    ) -> Self {
        Self {
            working_directory: env.working_directory(),
            is_typed_project: env.is_typed_project(),
            watch,
            production,
            client,
        }
    }

    /// The explicit client, treating an empty value as unset
    pub fn explicit_client(&self) -> Option<&str> {
        self.client.as_deref().filter(|c| !c.is_empty())
    }
}

/// Package-manager client used to install production dependencies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Client {
    Npm,
    Yarn,
}

impl Client {
    /// Program name on PATH
    pub fn command(self) -> &'static str {
        match self {
            Client::Npm => "npm",
            Client::Yarn => "yarn",
        }
    }

    /// Lockfile this client reads
    pub fn lockfile(self) -> &'static str {
        match self {
            Client::Npm => crate::config::defaults::NPM_LOCKFILE,
            Client::Yarn => crate::config::defaults::YARN_LOCKFILE,
        }
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}

/// Rejected `--client` value
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("--client must be set to \"npm\" or \"yarn\"")]
pub struct InvalidClient(pub String);

impl FromStr for Client {
    type Err = InvalidClient;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "npm" => Ok(Client::Npm),
            "yarn" => Ok(Client::Yarn),
            other => Err(InvalidClient(other.to_string())),
        }
    }
}

/// Execution path selected for a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    /// Single compile pass
    OneShotCompile,
    /// Compile, then recompile on changes until cancelled
    WatchCompile,
    /// Compile, then install runtime dependencies
    ProductionCompile,
}

impl BuildMode {
    /// Select the mode for a pair of flags; `production` wins over `watch`
    pub fn select(watch: bool, production: bool) -> Self {
        if production {
            BuildMode::ProductionCompile
        } else if watch {
            BuildMode::WatchCompile
        } else {
            BuildMode::OneShotCompile
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BuildMode::OneShotCompile => "compile",
            BuildMode::WatchCompile => "watch",
            BuildMode::ProductionCompile => "production",
        };
        f.write_str(name)
    }
}

/// Why an invocation stopped before any build service ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbortReason {
    /// No project root, or not a TypeScript project
    NotTypedProject,
    /// `--client` was neither npm nor yarn
    InvalidClient(String),
}

/// How one invocation ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    /// Validation failed; nothing was built
    Aborted(AbortReason),
    /// The delegated service returned normally
    Done(BuildMode),
    /// The delegated service failed; the failure was logged as fatal
    Failed(BuildMode),
}

impl BuildOutcome {
    /// Whether the invocation completed its build
    pub fn is_success(&self) -> bool {
        matches!(self, BuildOutcome::Done(_))
    }
}
