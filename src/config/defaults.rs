//! Default configuration values

/// Project configuration file name
pub const CONFIG_FILE: &str = "tsbuild.toml";

/// Default output directory, relative to the project root
pub const DEFAULT_OUT_DIR: &str = "build";

/// Default TypeScript project file
pub const DEFAULT_TSCONFIG: &str = "tsconfig.json";

/// Default compiler program when no local install is found
pub const DEFAULT_COMPILER: &str = "tsc";

/// Locally installed compiler, relative to the project root
pub const LOCAL_COMPILER: &str = "node_modules/.bin/tsc";

/// Package manifest, always copied into the output
pub const PACKAGE_JSON: &str = "package.json";

/// npm lockfile
pub const NPM_LOCKFILE: &str = "package-lock.json";

/// yarn lockfile, also the marker used for client detection
pub const YARN_LOCKFILE: &str = "yarn.lock";

/// Watch debounce window in milliseconds
pub const WATCH_DEBOUNCE_MS: u64 = 300;

/// Paths never watched, in addition to the output directory
pub const WATCH_ALWAYS_IGNORED: &[&str] = &["node_modules", ".git"];

/// Capacity of the watcher event channel
pub const WATCH_CHANNEL_CAPACITY: usize = 16;
