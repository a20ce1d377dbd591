//! tsbuild - Build TypeScript projects
//!
//! This library decides how a TypeScript project is built: a one-shot
//! compile, watch mode, or a production build that also installs runtime
//! dependencies with npm or yarn.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Build decision logic (no I/O operations)
//! - [`infra`] - Infrastructure layer (environment, processes, file watching)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
