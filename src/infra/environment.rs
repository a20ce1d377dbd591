//! Process environment resolution
//!
//! Locates the project root and decides whether it is a TypeScript project.
//!
//! Environment variables take precedence over detection:
//! - `TSBUILD_CWD` - Project root
//! - `TSBUILD_IS_TYPESCRIPT` - `true`/`1` marks the project as TypeScript,
//!   any other value marks it as not

use std::env;
use std::path::{Path, PathBuf};

use crate::config::defaults::{DEFAULT_TSCONFIG, PACKAGE_JSON};
use crate::config::env::{CWD_VAR, IS_TYPESCRIPT_VAR};
use crate::core::services::EnvironmentResolver;

/// Environment facts captured once at start-up
#[derive(Debug, Clone, Default)]
pub struct ProcessEnvironment {
    cwd_override: Option<String>,
    typescript_override: Option<String>,
    current_dir: Option<PathBuf>,
}

impl ProcessEnvironment {
    /// Capture the running process's environment
    pub fn from_process() -> Self {
        Self::new(
            env::var(CWD_VAR).ok(),
            env::var(IS_TYPESCRIPT_VAR).ok(),
            env::current_dir().ok(),
        )
    }

    /// Build from explicit values
    pub fn new(
        cwd_override: Option<String>,
        typescript_override: Option<String>,
        current_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            cwd_override,
            typescript_override,
            current_dir,
        }
    }
}

impl EnvironmentResolver for ProcessEnvironment {
    fn working_directory(&self) -> Option<PathBuf> {
        if let Some(path) = self.cwd_override.as_deref().filter(|p| !p.is_empty()) {
            return Some(PathBuf::from(path));
        }

        self.current_dir
            .as_deref()
            .filter(|dir| dir.join(PACKAGE_JSON).is_file())
            .map(Path::to_path_buf)
    }

    fn is_typed_project(&self) -> bool {
        if let Some(value) = self.typescript_override.as_deref() {
            return matches!(value.trim(), "true" | "1");
        }

        self.working_directory()
            .is_some_and(|dir| dir.join(DEFAULT_TSCONFIG).is_file())
    }
}
