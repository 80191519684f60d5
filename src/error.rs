//! Startup and serving errors.

use std::{io, net::SocketAddr, path::PathBuf};

/// Errors that stop the server from starting or keep it from serving.
///
/// Failures of individual requests never surface here; they are answered
/// with an HTTP error status and the server keeps running.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("entry point {} has no directory two levels up", .0.display())]
    NoProjectRoot(PathBuf),

    #[error("cannot resolve serving directory {}: {source}", path.display())]
    Root {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("server stopped unexpectedly: {0}")]
    Serve(#[from] io::Error),
}

impl ServerError {
    /// Checks if the listening address was unavailable.
    pub fn is_bind_error(&self) -> bool {
        matches!(self, ServerError::Bind { .. })
    }
}
