//! Output formatting
//!
//! This module provides utilities for printing status messages to the user,
//! and the console-backed [`Logger`] handed to the build orchestrator.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::core::logger::Logger;
use crate::error::BuildError;

static QUIET: AtomicBool = AtomicBool::new(false);

/// Process-wide output settings taken from the global CLI flags
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Suppress informational messages
    pub quiet: bool,
    /// Verbosity level (-v count)
    pub verbose: u8,
}

impl OutputConfig {
    /// Create an output configuration
    pub fn new(quiet: bool, verbose: u8) -> Self {
        Self { quiet, verbose }
    }

    /// Make these settings visible to the print helpers
    pub fn apply_global(self) {
        QUIET.store(self.quiet, Ordering::Relaxed);
    }

    /// Default tracing directive for this verbosity
    pub fn tracing_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        }
    }
}

/// Whether informational output is suppressed
pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Warning prefix (yellow triangle)
    pub const WARNING: &str = "⚠";

    /// Info prefix (blue circle)
    pub const INFO: &str = "ℹ";
}

/// Print an informational message unless quiet
pub fn print_info(message: &str) {
    if !is_quiet() {
        println!("{} {message}", status::INFO);
    }
}

/// Print a success message unless quiet
pub fn print_success(message: &str) {
    if !is_quiet() {
        println!("{} {message}", status::SUCCESS);
    }
}

/// Print a warning
pub fn print_warning(message: &str) {
    eprintln!("{} {message}", status::WARNING);
}

/// Print an error
pub fn print_error(message: &str) {
    eprintln!("{} {message}", status::ERROR);
}

/// Print an unexpected command failure with its cause chain
pub fn display_error(error: &anyhow::Error) {
    print_error(&error.to_string());
    for cause in error.chain().skip(1) {
        eprintln!("  caused by: {cause}");
    }
}

/// [`Logger`] printing to the terminal
///
/// Every line is also recorded as a `debug` tracing event.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn info(&self, message: &str) {
        tracing::debug!(kind = "info", "{message}");
        print_info(message);
    }

    fn warn(&self, message: &str) {
        tracing::debug!(kind = "warn", "{message}");
        print_warning(message);
    }

    fn error(&self, message: &str) {
        tracing::debug!(kind = "error", "{message}");
        print_error(message);
    }

    fn fatal(&self, error: &BuildError) {
        tracing::debug!(kind = "fatal", "{error}");
        print_error(&format!("Build failed: {error}"));
    }
}
