//! Minimal HTTP file server.
//!
//! Serves one directory subtree over HTTP: `GET` returns file bytes or an
//! HTML directory listing with an upload form, `POST` accepts a single-file
//! multipart upload into the requested directory. It can be used as a
//! standalone binary or embedded in another application.

pub mod config;
pub mod error;
pub mod handlers;
pub mod listing;
pub mod resolve;
pub mod routes;

use std::path::PathBuf;
use std::sync::Arc;

pub use config::Config;
pub use error::ServeError;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Root directory to serve files from, symlink-resolved at startup
    pub root_dir: PathBuf,
    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Create a new AppState with the given root directory and default config.
    pub fn new(root_dir: PathBuf) -> Self {
        Self {
            root_dir,
            config: Arc::new(Config::default()),
        }
    }

    /// Create a new AppState with the given root directory and config.
    pub fn with_config(root_dir: PathBuf, config: Config) -> Self {
        Self {
            root_dir,
            config: Arc::new(config),
        }
    }
}
