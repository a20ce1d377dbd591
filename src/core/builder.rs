//! Build orchestration logic
//!
//! Decides which of the three build modes to run for a request, validates
//! the flags, resolves the package-manager client and hands off to exactly
//! one build service. Every failure ends in a log entry, never an error.

use std::path::Path;
use std::sync::Arc;

use crate::core::logger::Logger;
use crate::core::request::{
    AbortReason, BuildMode, BuildOutcome, BuildRequest, Client, InvalidClient,
};
use crate::core::services::{PackageManagerDetector, ServiceFactory};

/// Shown when the environment gate fails
pub const NOT_TYPED_PROJECT_MESSAGE: &str =
    "Cannot build non-typescript project. Make sure to run \"tsbuild build\" from the project root";

/// Shown when `--watch` is dropped in favour of `--production`
pub const WATCH_IGNORED_MESSAGE: &str =
    "--watch and --production flags cannot be used together. Skipping --watch";

/// Resolve the client for `cwd`
///
/// An explicit value must be `npm` or `yarn`. Without one, yarn is used when
/// the detector finds a yarn lockfile, npm otherwise.
pub fn resolve_client(
    explicit: Option<&str>,
    cwd: &Path,
    detector: &impl PackageManagerDetector,
) -> Result<Client, InvalidClient> {
    match explicit {
        Some(value) => value.parse(),
        None if detector.has_yarn(cwd) => Ok(Client::Yarn),
        None => Ok(Client::Npm),
    }
}

/// Build orchestrator
pub struct BuildOrchestrator<D, F> {
    detector: D,
    services: F,
    logger: Arc<dyn Logger>,
}

impl<D, F> BuildOrchestrator<D, F>
where
    D: PackageManagerDetector,
    F: ServiceFactory,
{
    /// Create a new build orchestrator
    pub fn new(detector: D, services: F, logger: Arc<dyn Logger>) -> Self {
        Self {
            detector,
            services,
            logger,
        }
    }

    /// Validate `request` and run the selected build
    pub async fn run(&self, request: BuildRequest) -> BuildOutcome {
        let cwd = match request.working_directory.as_deref() {
            Some(cwd) if request.is_typed_project => cwd,
            _ => {
                self.logger.error(NOT_TYPED_PROJECT_MESSAGE);
                return BuildOutcome::Aborted(AbortReason::NotTypedProject);
            }
        };

        if request.watch && request.production {
            self.logger.info(WATCH_IGNORED_MESSAGE);
        }
        let mode = BuildMode::select(request.watch, request.production);

        let client = match resolve_client(request.explicit_client(), cwd, &self.detector) {
            Ok(client) => client,
            Err(err) => {
                self.logger.warn(&err.to_string());
                return BuildOutcome::Aborted(AbortReason::InvalidClient(err.0));
            }
        };

        tracing::debug!(
            cwd = %cwd.display(),
            %mode,
            %client,
            "Dispatching build"
        );

        let logger = Arc::clone(&self.logger);
        let result = match mode {
            BuildMode::ProductionCompile => {
                self.services
                    .compiler(cwd, logger)
                    .compile_for_production(client)
                    .await
            }
            BuildMode::WatchCompile => self.services.watcher(cwd, logger).watch().await,
            BuildMode::OneShotCompile => self.services.compiler(cwd, logger).compile().await,
        };

        match result {
            Ok(()) => BuildOutcome::Done(mode),
            Err(e) => {
                self.logger.fatal(&e);
                BuildOutcome::Failed(mode)
            }
        }
    }
}
