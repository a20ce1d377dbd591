//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Test project context
///
/// Creates a temporary directory for test projects and provides
/// utilities for setting up test scenarios.
pub struct TestProject {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl TestProject {
    /// Create a new empty project directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Create a TypeScript project with package.json and tsconfig.json
    pub fn typescript() -> Self {
        let project = Self::new();
        project.create_file("package.json", SAMPLE_PACKAGE_JSON);
        project.create_file("tsconfig.json", SAMPLE_TSCONFIG);
        project.create_file("src/index.ts", "export const answer: number = 42\n");
        project
    }

    /// Get the path to the test project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the test project
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Create an executable script in the test project
    #[cfg(unix)]
    #[allow(dead_code)]
    pub fn create_executable(&self, name: &str, content: &str) {
        use std::os::unix::fs::PermissionsExt;

        self.create_file(name, content);
        let path = self.dir.path().join(name);
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make file executable");
    }

    /// Check if a file exists in the test project
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Read a file from the test project
    #[allow(dead_code)]
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }

    /// Command running tsbuild inside the project, isolated from the caller's environment
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_tsbuild"));
        cmd.current_dir(self.path());
        cmd.env_remove("TSBUILD_CWD");
        cmd.env_remove("TSBUILD_IS_TYPESCRIPT");
        cmd.env_remove("RUST_LOG");
        cmd
    }

    /// Run `tsbuild build` with extra arguments
    pub fn run_build(&self, args: &[&str]) -> Output {
        let mut cmd = self.command();
        cmd.arg("build");
        for arg in args {
            cmd.arg(arg);
        }
        cmd.output().expect("Failed to execute tsbuild build")
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Sample package.json for testing
pub const SAMPLE_PACKAGE_JSON: &str = r#"{
  "name": "sample-app",
  "version": "1.0.0",
  "dependencies": {}
}
"#;

/// Sample tsconfig.json for testing
pub const SAMPLE_TSCONFIG: &str = r#"{
  "compilerOptions": {
    "target": "es2020",
    "module": "commonjs",
    "outDir": "build"
  },
  "include": ["src"]
}
"#;

/// tsbuild.toml whose compiler writes `build/index.js` without needing `tsc`
///
/// Arguments after the script land in `$0..$3`; the output dir is `$3`.
#[allow(dead_code)]
pub const STUB_COMPILER_CONFIG: &str = r#"
[compiler]
command = ["sh", "-c", "mkdir -p \"$3\" && echo 'exports.answer = 42' > \"$3/index.js\""]
"#;

/// tsbuild.toml whose compiler always reports a type error
#[allow(dead_code)]
pub const FAILING_COMPILER_CONFIG: &str = r#"
[compiler]
command = ["sh", "-c", "echo \"src/index.ts(1,14): error TS2322: Type 'string' is not assignable to type 'number'.\" >&2; exit 2"]
"#;
