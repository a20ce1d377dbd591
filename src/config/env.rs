//! Environment variables

/// Project root, set by whatever launches tsbuild on behalf of a project
pub const CWD_VAR: &str = "TSBUILD_CWD";

/// Overrides TypeScript project detection (`true`/`1` or anything else)
pub const IS_TYPESCRIPT_VAR: &str = "TSBUILD_IS_TYPESCRIPT";
