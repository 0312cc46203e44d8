//! Session context and store path resolution.
//!
//! Records are partitioned per server address for remote sessions and kept
//! inside the world save for local ones.

use crate::store::StoreConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Subdirectory used when no world or server can be determined.
pub const DEFAULT_SESSION_DIR: &str = "default";

/// Connection context a session was started with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionContext {
    /// Connected to a server at the given address (`host[:port]`).
    Remote(String),

    /// Local world with its save root directory.
    Local(PathBuf),

    /// No world available yet.
    Unresolved,
}

impl SessionContext {
    pub fn remote(address: impl Into<String>) -> Self {
        SessionContext::Remote(address.into())
    }

    pub fn local(save_root: impl AsRef<Path>) -> Self {
        SessionContext::Local(save_root.as_ref().to_path_buf())
    }
}

/// Resolved on-disk locations for one session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionPaths {
    /// Directory holding the session's files.
    pub dir: PathBuf,

    /// Record file.
    pub records: PathBuf,

    /// Config overlay file, next to the records.
    pub config: PathBuf,
}

/// Replace `:` and anything outside `[a-zA-Z0-9._-]` with `_`.
pub fn sanitize_address(address: &str) -> String {
    address
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Decides where a session's files live.
#[derive(Clone, Debug)]
pub struct StorePathResolver {
    config: StoreConfig,
}

impl StorePathResolver {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Per-application directory, `<app_root>/<data_dir_name>`.
    pub fn app_dir(&self) -> PathBuf {
        self.config.app_root.join(&self.config.data_dir_name)
    }

    /// Compute the session directory without touching the filesystem.
    pub fn session_dir(&self, context: &SessionContext) -> PathBuf {
        match context {
            SessionContext::Remote(address) if !address.trim().is_empty() => {
                self.app_dir().join(sanitize_address(address.trim()))
            }
            SessionContext::Local(save_root) => save_root.join("data"),
            _ => self.app_dir().join(DEFAULT_SESSION_DIR),
        }
    }

    /// Resolve the session paths and create the directory.
    ///
    /// A directory that cannot be created is logged and the paths are still
    /// returned; later loads and saves against them simply fail.
    pub fn resolve(&self, context: &SessionContext) -> SessionPaths {
        let dir = self.session_dir(context);
        match fs::create_dir_all(&dir) {
            Ok(()) => debug!(dir = %dir.display(), "session directory ready"),
            Err(e) => warn!(dir = %dir.display(), error = %e, "failed to create session directory"),
        }

        SessionPaths {
            records: dir.join(&self.config.records_file_name),
            config: dir.join(&self.config.config_file_name),
            dir,
        }
    }
}
