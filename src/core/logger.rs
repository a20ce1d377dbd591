//! Logging sink used by the orchestrator and the build services
//!
//! One-way: nothing returned by a logger is ever consumed.

use crate::error::BuildError;

/// Message sink shared by the orchestrator and every service it constructs
pub trait Logger: Send + Sync {
    /// Informational message
    fn info(&self, message: &str);

    /// Something the user should fix, but not a failure of the build itself
    fn warn(&self, message: &str);

    /// A failure the user can recover from by re-running
    fn error(&self, message: &str);

    /// A build failure reported by a delegated service
    fn fatal(&self, error: &BuildError);
}
