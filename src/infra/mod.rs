//! Infrastructure layer
//!
//! Handles all I/O operations: environment, filesystem, external processes
//! and file watching. This module is the only place where side effects occur.

pub mod compiler;
pub mod environment;
pub mod factory;
pub mod filesystem;
pub mod package_manager;
pub mod process;
pub mod watcher;
