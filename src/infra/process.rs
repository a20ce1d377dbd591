//! External process execution
//!
//! Locates programs and runs them to completion, capturing their output.

use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};

use tokio::process::Command;

use crate::error::BuildError;

/// Result of a finished program
#[derive(Debug)]
pub struct ProgramOutput {
    /// Exit status
    pub status: ExitStatus,
    /// Captured stderr followed by stdout
    pub output: String,
}

impl ProgramOutput {
    /// Whether the program exited successfully
    pub fn success(&self) -> bool {
        self.status.success()
    }
}

/// Locate `program`
///
/// Names containing a path separator are resolved against `cwd`; bare
/// names are looked up on PATH.
pub fn resolve_program(program: &str, cwd: &Path) -> Result<PathBuf, BuildError> {
    let not_found = || BuildError::ProgramNotFound {
        program: program.to_string(),
    };

    if Path::new(program).components().count() > 1 {
        let path = cwd.join(program);
        return if path.is_file() {
            Ok(path)
        } else {
            Err(not_found())
        };
    }

    which::which(program).map_err(|_| not_found())
}

/// Run `argv` in `cwd` and wait for it to exit
///
/// Dropping the returned future kills the program.
pub async fn run_program(argv: &[String], cwd: &Path) -> Result<ProgramOutput, BuildError> {
    let Some((program, args)) = argv.split_first() else {
        return Err(BuildError::Spawn {
            program: String::new(),
            error: "empty command".to_string(),
        });
    };
    let resolved = resolve_program(program, cwd)?;

    tracing::debug!("Running {} {}", resolved.display(), args.join(" "));

    let output = Command::new(&resolved)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .kill_on_drop(true)
        .output()
        .await
        .map_err(|e| BuildError::Spawn {
            program: program.clone(),
            error: e.to_string(),
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let mut combined = String::new();
    if !stderr.trim().is_empty() {
        combined.push_str(stderr.trim_end());
    }
    if !stdout.trim().is_empty() {
        if !combined.is_empty() {
            combined.push('\n');
        }
        combined.push_str(stdout.trim_end());
    }

    Ok(ProgramOutput {
        status: output.status,
        output: combined,
    })
}
