//! TypeScript compiler service
//!
//! Runs `tsc` into the output directory, copies the files the compiled
//! project needs at runtime, and for production builds installs its
//! dependencies with the selected client.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::defaults::{
    CONFIG_FILE, DEFAULT_COMPILER, LOCAL_COMPILER, NPM_LOCKFILE, PACKAGE_JSON,
};
use crate::core::logger::Logger;
use crate::core::project_config::ProjectConfig;
use crate::core::request::Client;
use crate::core::services::CompileService;
use crate::error::BuildError;
use crate::infra::filesystem;
use crate::infra::process::run_program;

/// The subset of package.json read for log messages
#[derive(Debug, Deserialize)]
struct PackageManifest {
    name: Option<String>,
}

/// Whether `path` is a TypeScript source rather than compiler output
fn is_typescript_source(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    let declaration = [".d.ts", ".d.mts", ".d.cts"]
        .iter()
        .any(|suffix| name.ends_with(suffix));
    let source = [".ts", ".tsx", ".mts", ".cts"]
        .iter()
        .any(|suffix| name.ends_with(suffix));
    source && !declaration
}

/// Command line installing production dependencies with `client`
///
/// npm uses `ci` when a lockfile was copied into the output, since `ci`
/// refuses to run without one.
pub fn install_argv(client: Client, has_npm_lockfile: bool) -> Vec<String> {
    let args: &[&str] = match client {
        Client::Npm if has_npm_lockfile => &["npm", "ci", "--production"],
        Client::Npm => &["npm", "install", "--production"],
        Client::Yarn => &["yarn", "install", "--production"],
    };
    args.iter().map(ToString::to_string).collect()
}

/// `tsc`-backed [`CompileService`]
pub struct TscCompiler {
    project_dir: PathBuf,
    logger: Arc<dyn Logger>,
}

impl TscCompiler {
    /// Create a compiler for the project rooted at `project_dir`
    pub fn new(project_dir: &Path, logger: Arc<dyn Logger>) -> Self {
        Self {
            project_dir: project_dir.to_path_buf(),
            logger,
        }
    }

    /// Full compiler command line for `config`
    pub fn compiler_argv(&self, config: &ProjectConfig) -> Vec<String> {
        let mut argv = config.compiler.command.clone().unwrap_or_else(|| {
            let program = if self.project_dir.join(LOCAL_COMPILER).is_file() {
                LOCAL_COMPILER
            } else {
                DEFAULT_COMPILER
            };
            vec![program.to_string()]
        });
        argv.extend([
            "--project".to_string(),
            config.tsconfig().to_string(),
            "--outDir".to_string(),
            config.out_dir().to_string(),
        ]);
        argv
    }

    fn project_name(&self) -> Option<String> {
        let content = filesystem::read_file(&self.project_dir.join(PACKAGE_JSON)).ok()?;
        serde_json::from_str::<PackageManifest>(&content).ok()?.name
    }

    /// Compile with an already loaded configuration
    pub async fn compile_with(&self, config: &ProjectConfig) -> Result<(), BuildError> {
        let out_dir = config.out_path(&self.project_dir);
        match self.project_name() {
            Some(name) => self.logger.info(&format!("Building project: {name}")),
            None => self.logger.info("Building project"),
        }

        if let Some(source_file) =
            filesystem::find_file(&out_dir, &["node_modules"], is_typescript_source)
        {
            return Err(BuildError::OutDirHasSources {
                path: out_dir,
                source_file,
            });
        }
        filesystem::remove_dir_all(&out_dir)?;
        tracing::debug!("Cleaned output directory {}", out_dir.display());

        let argv = self.compiler_argv(config);
        let result = run_program(&argv, &self.project_dir).await?;
        if !result.success() {
            return Err(BuildError::CompileFailed {
                status: result.status.to_string(),
                output: result.output,
            });
        }
        if !result.output.is_empty() {
            tracing::debug!("{}", result.output);
        }

        self.copy_meta_files(config, &out_dir)?;
        self.logger.info(&format!("Built into {}", config.out_dir()));
        Ok(())
    }

    fn copy_meta_files(&self, config: &ProjectConfig, out_dir: &Path) -> Result<(), BuildError> {
        for file in config.files_to_copy() {
            let from = self.project_dir.join(file);
            if !from.exists() {
                if file != CONFIG_FILE {
                    self.logger.warn(&format!("Skipping missing file '{file}'"));
                }
                continue;
            }
            let copied = filesystem::copy_path(&from, &out_dir.join(file))?;
            tracing::debug!("Copied {file} ({copied} files)");
        }
        Ok(())
    }

    async fn install_dependencies(&self, out_dir: &Path, client: Client) -> Result<(), BuildError> {
        let lockfile = self.project_dir.join(client.lockfile());
        if lockfile.is_file() {
            filesystem::copy_file(&lockfile, &out_dir.join(client.lockfile()))?;
        } else {
            self.logger.warn(&format!(
                "No {} found, installing without a lockfile",
                client.lockfile()
            ));
        }

        let has_npm_lockfile = out_dir.join(NPM_LOCKFILE).is_file();
        let argv = install_argv(client, has_npm_lockfile);
        self.logger.info(&format!("Installing production dependencies ({})", argv.join(" ")));

        let result = run_program(&argv, out_dir).await?;
        if !result.success() {
            return Err(BuildError::InstallFailed {
                client,
                status: result.status.to_string(),
                output: result.output,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl CompileService for TscCompiler {
    async fn compile(&self) -> Result<(), BuildError> {
        let config = ProjectConfig::load(&self.project_dir)?;
        self.compile_with(&config).await
    }

    async fn compile_for_production(&self, client: Client) -> Result<(), BuildError> {
        let config = ProjectConfig::load(&self.project_dir)?;
        self.compile_with(&config).await?;
        self.install_dependencies(&config.out_path(&self.project_dir), client)
            .await?;
        self.logger.info(&format!("Production build ready in {}", config.out_dir()));
        Ok(())
    }
}
