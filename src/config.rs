//! Server configuration.

use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
};

use crate::{error::ServerError, state::AccessLog};

/// Port the development server always listens on
pub const DEFAULT_PORT: u16 = 8000;

/// Everything needed to construct a [`Server`](crate::server::Server)
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listening address, `0.0.0.0:8000` unless overridden
    pub addr: SocketAddr,
    /// Directory served at `/`
    pub root: PathBuf,
    /// Access log hook behavior
    pub access_log: AccessLog,
}

impl ServerConfig {
    /// Serves `root` on every interface at [`DEFAULT_PORT`] with a silent access log.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            root: root.into(),
            access_log: AccessLog::default(),
        }
    }

    pub fn with_addr(mut self, addr: SocketAddr) -> Self {
        self.addr = addr;
        self
    }

    pub fn with_access_log(mut self, access_log: AccessLog) -> Self {
        self.access_log = access_log;
        self
    }
}

/// Resolves the project root: two directories above `entry_point`.
///
/// For `<crate>/src/main.rs` this is `<crate>`, independent of the current
/// working directory. The result is canonicalized.
pub fn project_root(entry_point: &Path) -> Result<PathBuf, ServerError> {
    let root = entry_point
        .parent()
        .and_then(Path::parent)
        .filter(|dir| !dir.as_os_str().is_empty())
        .ok_or_else(|| ServerError::NoProjectRoot(entry_point.to_path_buf()))?;

    root.canonicalize().map_err(|source| ServerError::Root {
        path: root.to_path_buf(),
        source,
    })
}
