//! Build command implementation
//!
//! Implements `tsbuild build`: wires the process environment, the default
//! build services and the console logger into the orchestrator.

use std::sync::Arc;

use crate::cli::output::{print_success, ConsoleLogger};
use crate::core::builder::BuildOrchestrator;
use crate::core::logger::Logger;
use crate::core::request::{BuildOutcome, BuildRequest};
use crate::core::services::{EnvironmentResolver, PackageManagerDetector, ServiceFactory};
use crate::infra::environment::ProcessEnvironment;
use crate::infra::factory::DefaultServices;
use crate::infra::package_manager::LockfileDetector;

/// Build options
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Watch for file changes and rebuild
    pub watch: bool,
    /// Build for production
    pub production: bool,
    /// Client used to install production dependencies
    pub client: Option<String>,
}

/// Execute the build command against the real environment
pub async fn execute(options: BuildOptions) -> BuildOutcome {
    execute_with(
        &ProcessEnvironment::from_process(),
        LockfileDetector,
        DefaultServices,
        Arc::new(ConsoleLogger),
        options,
    )
    .await
}

/// Execute the build command with explicit collaborators
pub async fn execute_with<D, F>(
    env: &impl EnvironmentResolver,
    detector: D,
    services: F,
    logger: Arc<dyn Logger>,
    options: BuildOptions,
) -> BuildOutcome
where
    D: PackageManagerDetector,
    F: ServiceFactory,
{
    let request =
        BuildRequest::from_environment(env, options.watch, options.production, options.client);
    tracing::debug!(?request, "Resolved build request");

    let outcome = BuildOrchestrator::new(detector, services, logger)
        .run(request)
        .await;

    if let BuildOutcome::Done(mode) = &outcome {
        print_success(&format!("Build complete ({mode})"));
    }
    outcome
}
