//! Test utilities
//!
//! Recording mocks for the orchestrator's collaborators and proptest
//! generators for build requests.

#[cfg(test)]
pub mod mocks {
    use std::path::{Path, PathBuf};
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use crate::core::logger::Logger;
    use crate::core::request::Client;
    use crate::core::services::{
        CompileService, EnvironmentResolver, PackageManagerDetector, ServiceFactory, WatchService,
    };
    use crate::error::BuildError;

    /// A single message captured by [`RecordingLogger`]
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum LogEntry {
        Info(String),
        Warn(String),
        Error(String),
        Fatal(String),
    }

    /// Logger that keeps every message in memory
    #[derive(Debug, Default)]
    pub struct RecordingLogger {
        entries: Mutex<Vec<LogEntry>>,
    }

    impl RecordingLogger {
        pub fn new() -> Arc<Self> {
            Arc::new(Self::default())
        }

        pub fn entries(&self) -> Vec<LogEntry> {
            self.entries.lock().unwrap().clone()
        }

        pub fn infos(&self) -> Vec<String> {
            self.entries()
                .into_iter()
                .filter_map(|e| match e {
                    LogEntry::Info(m) => Some(m),
                    _ => None,
                })
                .collect()
        }

        pub fn warnings(&self) -> Vec<String> {
            self.entries()
                .into_iter()
                .filter_map(|e| match e {
                    LogEntry::Warn(m) => Some(m),
                    _ => None,
                })
                .collect()
        }

        pub fn errors(&self) -> Vec<String> {
            self.entries()
                .into_iter()
                .filter_map(|e| match e {
                    LogEntry::Error(m) => Some(m),
                    _ => None,
                })
                .collect()
        }

        pub fn fatals(&self) -> Vec<String> {
            self.entries()
                .into_iter()
                .filter_map(|e| match e {
                    LogEntry::Fatal(m) => Some(m),
                    _ => None,
                })
                .collect()
        }

        fn push(&self, entry: LogEntry) {
            self.entries.lock().unwrap().push(entry);
        }
    }

    impl Logger for RecordingLogger {
        fn info(&self, message: &str) {
            self.push(LogEntry::Info(message.to_string()));
        }

        fn warn(&self, message: &str) {
            self.push(LogEntry::Warn(message.to_string()));
        }

        fn error(&self, message: &str) {
            self.push(LogEntry::Error(message.to_string()));
        }

        fn fatal(&self, error: &BuildError) {
            self.push(LogEntry::Fatal(error.to_string()));
        }
    }

    /// Calls observed by [`MockServices`], in order
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ServiceCall {
        NewCompiler(PathBuf),
        NewWatcher(PathBuf),
        Compile,
        CompileForProduction(Client),
        Watch,
    }

    /// Service factory whose services only record that they were called
    #[derive(Debug, Clone, Default)]
    pub struct MockServices {
        calls: Arc<Mutex<Vec<ServiceCall>>>,
        fail: bool,
    }

    impl MockServices {
        pub fn new() -> Self {
            Self::default()
        }

        /// Every service call fails with a compile error
        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        pub fn calls(&self) -> Vec<ServiceCall> {
            self.calls.lock().unwrap().clone()
        }

        /// Calls that actually ran a build, ignoring construction
        pub fn invocations(&self) -> Vec<ServiceCall> {
            self.calls()
                .into_iter()
                .filter(|c| !matches!(c, ServiceCall::NewCompiler(_) | ServiceCall::NewWatcher(_)))
                .collect()
        }

        fn service(&self) -> MockService {
            MockService {
                calls: Arc::clone(&self.calls),
                fail: self.fail,
            }
        }
    }

    impl ServiceFactory for MockServices {
        fn compiler(&self, cwd: &Path, _logger: Arc<dyn Logger>) -> Box<dyn CompileService> {
            self.calls
                .lock()
                .unwrap()
                .push(ServiceCall::NewCompiler(cwd.to_path_buf()));
            Box::new(self.service())
        }

        fn watcher(&self, cwd: &Path, _logger: Arc<dyn Logger>) -> Box<dyn WatchService> {
            self.calls
                .lock()
                .unwrap()
                .push(ServiceCall::NewWatcher(cwd.to_path_buf()));
            Box::new(self.service())
        }
    }

    struct MockService {
        calls: Arc<Mutex<Vec<ServiceCall>>>,
        fail: bool,
    }

    impl MockService {
        fn record(&self, call: ServiceCall) -> Result<(), BuildError> {
            self.calls.lock().unwrap().push(call);
            if self.fail {
                return Err(BuildError::CompileFailed {
                    status: "exit status: 2".to_string(),
                    output: "src/index.ts(1,7): error TS2322".to_string(),
                });
            }
            Ok(())
        }
    }

    #[async_trait]
    impl CompileService for MockService {
        async fn compile(&self) -> Result<(), BuildError> {
            self.record(ServiceCall::Compile)
        }

        async fn compile_for_production(&self, client: Client) -> Result<(), BuildError> {
            self.record(ServiceCall::CompileForProduction(client))
        }
    }

    #[async_trait]
    impl WatchService for MockService {
        async fn watch(&self) -> Result<(), BuildError> {
            self.record(ServiceCall::Watch)
        }
    }

    /// Detector with a fixed answer
    #[derive(Debug, Clone, Copy, Default)]
    pub struct StaticDetector(pub bool);

    impl PackageManagerDetector for StaticDetector {
        fn has_yarn(&self, _dir: &Path) -> bool {
            self.0
        }
    }

    /// Environment with fixed answers
    #[derive(Debug, Clone, Default)]
    pub struct StaticEnvironment {
        pub cwd: Option<PathBuf>,
        pub typed: bool,
    }

    impl EnvironmentResolver for StaticEnvironment {
        fn working_directory(&self) -> Option<PathBuf> {
            self.cwd.clone()
        }

        fn is_typed_project(&self) -> bool {
            self.typed
        }
    }
}

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;
    use std::path::PathBuf;

    use crate::core::request::BuildRequest;

    /// A `--client` value that is neither npm nor yarn
    pub fn invalid_client() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9_-]{1,12}".prop_filter("must not be a valid client", |s| {
            s != "npm" && s != "yarn"
        })
    }

    /// Any `--client` value, including unset and empty
    pub fn any_client() -> impl Strategy<Value = Option<String>> {
        prop_oneof![
            Just(None),
            Just(Some(String::new())),
            Just(Some("npm".to_string())),
            Just(Some("yarn".to_string())),
            invalid_client().prop_map(Some),
        ]
    }

    /// A request with arbitrary environment facts and flags
    pub fn build_request() -> impl Strategy<Value = BuildRequest> {
        (
            prop::option::of("/[a-z]{1,8}(/[a-z]{1,8}){0,2}"),
            any::<bool>(),
            any::<bool>(),
            any::<bool>(),
            any_client(),
        )
            .prop_map(|(cwd, typed, watch, production, client)| BuildRequest {
                working_directory: cwd.map(PathBuf::from),
                is_typed_project: typed,
                watch,
                production,
                client,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_invalid_client_generator(client in invalid_client()) {
            prop_assert!(client.parse::<crate::core::request::Client>().is_err());
        }
    }
}
