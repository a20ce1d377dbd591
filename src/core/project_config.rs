//! Project configuration
//!
//! Reads optional build settings from `tsbuild.toml` in the project root.
//! Every setting has a default, so a project without the file builds with
//! `tsc` into `build/`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::config::defaults;
use crate::error::ConfigError;

/// Build settings for one project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Output directory, relative to the project root
    pub out_dir: Option<String>,

    /// TypeScript project file passed to the compiler
    pub tsconfig: Option<String>,

    /// Extra files or directories copied into the output
    #[serde(default)]
    pub meta_files: Vec<String>,

    /// Compiler settings
    #[serde(default)]
    pub compiler: CompilerConfig,

    /// Watch mode settings
    #[serde(default)]
    pub watch: WatchConfig,
}

/// Compiler settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompilerConfig {
    /// Program and leading arguments used instead of `tsc`
    pub command: Option<Vec<String>>,
}

/// Watch mode settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WatchConfig {
    /// Quiet period before a rebuild, in milliseconds
    pub debounce_ms: Option<u64>,

    /// Path prefixes, relative to the project root, that never trigger a rebuild
    #[serde(default)]
    pub ignore: Vec<String>,
}

impl ProjectConfig {
    /// Load `tsbuild.toml` from `project_dir`
    ///
    /// A missing file yields the default configuration; an unreadable or
    /// invalid one is an error.
    pub fn load(project_dir: &Path) -> Result<Self, ConfigError> {
        Self::load_from_path(&project_dir.join(defaults::CONFIG_FILE))
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the output directory is a subdirectory of the project root
    ///
    /// The output directory is deleted before every compile, so it must
    /// never resolve to the root itself or to anything outside it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Some(out_dir) = self.out_dir.as_deref() else {
            return Ok(());
        };
        let invalid = |reason: &str| ConfigError::InvalidOutDir {
            value: out_dir.to_string(),
            reason: reason.to_string(),
        };

        let path = Path::new(out_dir);
        if path.is_absolute() || path.has_root() {
            return Err(invalid("must be relative to the project root"));
        }

        let mut depth = 0;
        for component in path.components() {
            match component {
                Component::Normal(_) => depth += 1,
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(invalid("must stay inside the project root"));
                }
            }
        }
        if depth == 0 {
            return Err(invalid("must not be the project root"));
        }
        Ok(())
    }

    /// Output directory relative to the project root
    #[must_use]
    pub fn out_dir(&self) -> &str {
        self.out_dir.as_deref().unwrap_or(defaults::DEFAULT_OUT_DIR)
    }

    /// Absolute output directory for `project_dir`
    pub fn out_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(self.out_dir())
    }

    /// TypeScript project file
    #[must_use]
    pub fn tsconfig(&self) -> &str {
        self.tsconfig.as_deref().unwrap_or(defaults::DEFAULT_TSCONFIG)
    }

    /// Effective debounce window
    #[must_use]
    pub fn debounce_ms(&self) -> u64 {
        self.watch.debounce_ms.unwrap_or(defaults::WATCH_DEBOUNCE_MS)
    }

    /// Every path prefix the watcher skips: built-in, output dir, and configured
    pub fn ignored_paths(&self, project_dir: &Path) -> Vec<PathBuf> {
        defaults::WATCH_ALWAYS_IGNORED
            .iter()
            .map(|p| project_dir.join(p))
            .chain(std::iter::once(self.out_path(project_dir)))
            .chain(self.watch.ignore.iter().map(|p| project_dir.join(p)))
            .collect()
    }

    /// Files copied into the output after every compile
    pub fn files_to_copy(&self) -> Vec<&str> {
        let mut files = vec![defaults::PACKAGE_JSON, defaults::CONFIG_FILE];
        for file in &self.meta_files {
            if !files.contains(&file.as_str()) {
                files.push(file.as_str());
            }
        }
        files
    }
}
