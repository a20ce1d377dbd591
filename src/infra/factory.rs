//! Default build services

use std::path::Path;
use std::sync::Arc;

use crate::core::logger::Logger;
use crate::core::services::{CompileService, ServiceFactory, WatchService};
use crate::infra::compiler::TscCompiler;
use crate::infra::watcher::FsWatcher;

/// Builds `tsc` compilers and filesystem watchers
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultServices;

impl ServiceFactory for DefaultServices {
    fn compiler(&self, cwd: &Path, logger: Arc<dyn Logger>) -> Box<dyn CompileService> {
        Box::new(TscCompiler::new(cwd, logger))
    }

    fn watcher(&self, cwd: &Path, logger: Arc<dyn Logger>) -> Box<dyn WatchService> {
        Box::new(FsWatcher::new(cwd, logger))
    }
}
