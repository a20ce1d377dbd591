//! Watch mode
//!
//! Compiles once, then recompiles whenever a source file changes until the
//! process receives Ctrl-C.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::defaults::WATCH_CHANNEL_CAPACITY;
use crate::core::logger::Logger;
use crate::core::project_config::ProjectConfig;
use crate::core::services::WatchService;
use crate::error::BuildError;
use crate::infra::compiler::TscCompiler;

/// First changed path in `event` that should trigger a rebuild
pub fn relevant_path(event: &Event, ignored: &[PathBuf]) -> Option<PathBuf> {
    if !matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    ) {
        return None;
    }

    event
        .paths
        .iter()
        .find(|path| !ignored.iter().any(|prefix| path.starts_with(prefix)))
        .cloned()
}

fn setup_watcher(
    ignored: Vec<PathBuf>,
) -> Result<(RecommendedWatcher, mpsc::Receiver<PathBuf>), BuildError> {
    let (tx, rx) = mpsc::channel(WATCH_CHANNEL_CAPACITY);
    let watcher = RecommendedWatcher::new(
        move |res: Result<Event, notify::Error>| match res {
            Ok(event) => {
                if let Some(path) = relevant_path(&event, &ignored) {
                    // A full channel already has a rebuild queued
                    let _ = tx.try_send(path);
                }
            }
            Err(e) => tracing::warn!("Watch error: {e}"),
        },
        notify::Config::default(),
    )?;
    Ok((watcher, rx))
}

/// Drive `work` to completion unless `shutdown` finishes first
///
/// Returns `false` when stopped.
async fn run_or_stop<F, W>(shutdown: Pin<&mut F>, work: W) -> bool
where
    F: Future<Output = ()>,
    W: Future<Output = ()>,
{
    tokio::select! {
        biased;
        () = work => true,
        () = shutdown => false,
    }
}

/// `notify`-backed [`WatchService`]
pub struct FsWatcher {
    project_dir: PathBuf,
    logger: Arc<dyn Logger>,
    compiler: TscCompiler,
}

impl FsWatcher {
    /// Create a watcher for the project rooted at `project_dir`
    pub fn new(project_dir: &Path, logger: Arc<dyn Logger>) -> Self {
        Self {
            project_dir: project_dir.to_path_buf(),
            compiler: TscCompiler::new(project_dir, Arc::clone(&logger)),
            logger,
        }
    }

    /// Watch until `shutdown` completes
    ///
    /// `shutdown` is also raced against every compile, so a long running
    /// compiler is stopped instead of awaited.
    pub async fn watch_until<F>(&self, shutdown: F) -> Result<(), BuildError>
    where
        F: Future<Output = ()>,
    {
        let config = ProjectConfig::load(&self.project_dir)?;
        tokio::pin!(shutdown);

        if run_or_stop(shutdown.as_mut(), self.rebuild(&config)).await {
            let root = self
                .project_dir
                .canonicalize()
                .unwrap_or_else(|_| self.project_dir.clone());
            let (mut watcher, mut rx) = setup_watcher(config.ignored_paths(&root))?;
            watcher.watch(&root, RecursiveMode::Recursive)?;

            let debounce = Duration::from_millis(config.debounce_ms());
            self.logger.info("Watching for file changes");

            loop {
                let path = tokio::select! {
                    () = &mut shutdown => break,
                    Some(path) = rx.recv() => path,
                };

                let changed = async {
                    tokio::time::sleep(debounce).await;
                    while rx.try_recv().is_ok() {}

                    let relative = path.strip_prefix(&root).unwrap_or(&path);
                    self.logger
                        .info(&format!("{} changed, rebuilding", relative.display()));
                    self.rebuild(&config).await;
                };
                if !run_or_stop(shutdown.as_mut(), changed).await {
                    break;
                }
            }
        }

        self.logger.info("Stopped watching");
        Ok(())
    }

    /// Compile, reporting failure without leaving watch mode
    async fn rebuild(&self, config: &ProjectConfig) {
        if let Err(e) = self.compiler.compile_with(config).await {
            self.logger.error(&e.to_string());
        }
    }
}

#[async_trait]
impl WatchService for FsWatcher {
    async fn watch(&self) -> Result<(), BuildError> {
        self.watch_until(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!("Failed to listen for Ctrl-C: {e}");
                std::future::pending::<()>().await;
            }
        })
        .await
    }
}
