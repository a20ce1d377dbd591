//! Core business logic module
//!
//! This module contains the build decision logic for tsbuild.
//! It has NO I/O operations - those belong in [`crate::infra`].
//!
//! # Submodules
//!
//! - [`request`] - Build request, client, mode and outcome types
//! - [`services`] - Contracts for the environment and the build services
//! - [`logger`] - Message sink shared by the orchestrator and services
//! - [`builder`] - Build orchestration logic
//! - [`project_config`] - Project configuration (tsbuild.toml)

pub mod builder;
pub mod logger;
pub mod project_config;
pub mod request;
pub mod services;
