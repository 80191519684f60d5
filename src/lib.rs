//! MapleQuest asset server - static file server for local game development.
//!
//! Serves a project directory over HTTP with JavaScript modules typed as
//! `application/javascript` and caching disabled on every response.

pub mod banner;
pub mod cli;
pub mod colors;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod mime;
pub mod server;
pub mod state;

pub use config::{DEFAULT_PORT, ServerConfig};
pub use error::ServerError;
pub use server::{Server, router};
pub use state::{AccessLog, AppState};
