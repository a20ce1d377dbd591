//! Package manager detection

use std::path::Path;

use crate::config::defaults::YARN_LOCKFILE;
use crate::core::services::PackageManagerDetector;

/// Detects yarn by the presence of its lockfile
#[derive(Debug, Clone, Copy, Default)]
pub struct LockfileDetector;

impl PackageManagerDetector for LockfileDetector {
    fn has_yarn(&self, dir: &Path) -> bool {
        dir.join(YARN_LOCKFILE).is_file()
    }
}
