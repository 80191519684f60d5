//! Shared application state.

use std::path::PathBuf;

/// Behavior of the per-request access log hook
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AccessLog {
    /// The hook runs but writes nothing
    #[default]
    Silent,
    /// One line on arrival and one on completion, tagged with a request ID
    Tracing,
}

/// Shared application state accessible to all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Directory every request path is resolved under
    pub root: PathBuf,
    /// Whether the access log hook writes anything
    pub access_log: AccessLog,
}
