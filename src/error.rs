//! Error types for tsbuild
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

use crate::core::request::Client;

/// Project configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file '{path}': {error}")]
    ReadError { path: String, error: String },

    /// Failed to parse config file
    #[error("Failed to parse config file '{path}': {error}")]
    ParseError { path: String, error: String },

    /// Output directory would overlap the project itself
    #[error("Invalid out_dir '{value}': {reason}")]
    InvalidOutDir { value: String, reason: String },
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to remove directory
    #[error("Failed to remove directory '{path}': {error}")]
    RemoveDir { path: PathBuf, error: String },

    /// Failed to copy a file
    #[error("Failed to copy '{from}' to '{to}': {error}")]
    CopyFile {
        from: PathBuf,
        to: PathBuf,
        error: String,
    },

    /// Failed to read file
    #[error("Failed to read file '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },
}

/// Failures raised by the build services
///
/// The orchestrator reports every variant the same way; the variants exist
/// so the console message says what actually went wrong.
#[derive(Error, Debug)]
pub enum BuildError {
    /// Program could not be located
    #[error("'{program}' not found. Install it or add it to PATH")]
    ProgramNotFound { program: String },

    /// Program could not be started
    #[error("Failed to run '{program}': {error}")]
    Spawn { program: String, error: String },

    /// TypeScript compiler exited with a failure status
    #[error("TypeScript compilation failed ({status})\n{output}")]
    CompileFailed { status: String, output: String },

    /// Output directory holds TypeScript sources and cannot be cleaned
    #[error("Refusing to clean '{path}': it contains the source file '{source_file}'")]
    OutDirHasSources { path: PathBuf, source_file: PathBuf },

    /// Dependency installation exited with a failure status
    #[error("Installing production dependencies with {client} failed ({status})\n{output}")]
    InstallFailed {
        client: Client,
        status: String,
        output: String,
    },

    /// File watcher could not be started
    #[error("Failed to start file watcher: {error}")]
    Watch { error: String },

    /// Project configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Filesystem error
    #[error("Filesystem error: {0}")]
    Filesystem(#[from] FilesystemError),
}

impl From<notify::Error> for BuildError {
    fn from(error: notify::Error) -> Self {
        Self::Watch {
            error: error.to_string(),
        }
    }
}
