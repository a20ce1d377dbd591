//! Build service contracts
//!
//! The orchestrator only sees these traits. Default implementations live
//! in [`crate::infra`]; tests substitute recording mocks.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;

use crate::core::logger::Logger;
use crate::core::request::Client;
use crate::error::BuildError;

/// Supplies process-wide facts about where tsbuild is running
pub trait EnvironmentResolver {
    /// Project root, if it can be located
    fn working_directory(&self) -> Option<PathBuf>;

    /// Whether the project is a TypeScript project
    fn is_typed_project(&self) -> bool;
}

/// Detects which package manager a project uses
pub trait PackageManagerDetector {
    /// Whether a yarn lockfile is present in `dir`
    fn has_yarn(&self, dir: &Path) -> bool;
}

/// Compiles the project, optionally packaging it for production
#[async_trait]
pub trait CompileService: Send + Sync {
    /// One compile pass
    async fn compile(&self) -> Result<(), BuildError>;

    /// Compile, then install runtime dependencies with `client`
    async fn compile_for_production(&self, client: Client) -> Result<(), BuildError>;
}

/// Compiles once, then recompiles on source changes until cancelled
#[async_trait]
pub trait WatchService: Send + Sync {
    /// Returns only on external cancellation or a start-up failure
    async fn watch(&self) -> Result<(), BuildError>;
}

/// Constructs build services once validation has passed
pub trait ServiceFactory {
    /// Compiler for `cwd`
    fn compiler(&self, cwd: &Path, logger: Arc<dyn Logger>) -> Box<dyn CompileService>;

    /// Watcher for `cwd`
    fn watcher(&self, cwd: &Path, logger: Arc<dyn Logger>) -> Box<dyn WatchService>;
}
