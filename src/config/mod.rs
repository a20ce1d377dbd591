//! Configuration and constants
//!
//! - [`defaults`] - Default values and well-known file names
//! - [`env`] - Environment variables read by tsbuild

pub mod defaults;
pub mod env;
