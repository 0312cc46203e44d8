//! Session-scoped record store.

use crate::error::Result;
use crate::records::RecordFile;
use crate::session::{SessionContext, SessionPaths, StorePathResolver};
use crate::types::{BlockPos, Record, Timestamp};
use parking_lot::Mutex;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Store configuration.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    /// Application root (the game directory).
    pub app_root: PathBuf,

    /// Per-application directory under the root for server and fallback sessions.
    pub data_dir_name: String,

    /// File name of the record file inside a session directory.
    pub records_file_name: String,

    /// File name of the config overlay inside a session directory.
    pub config_file_name: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            app_root: PathBuf::from("."),
            data_dir_name: ".whereismyshulker".to_string(),
            records_file_name: "shulker_boxes.csv".to_string(),
            config_file_name: "whereismyshulker.json".to_string(),
        }
    }
}

/// Records of the active session plus where they are persisted.
#[derive(Default)]
struct SessionState {
    /// Insertion order, oldest first.
    records: Vec<Record>,

    /// None outside a session; saves are then skipped.
    file: Option<RecordFile>,
}

/// In-memory record store for one session at a time.
///
/// Every mutation rewrites the whole record file. A failed save is logged and
/// returned, but the in-memory change stays for the rest of the session.
pub struct RecordStore {
    resolver: StorePathResolver,

    /// One lock serializes memory and file updates.
    state: Mutex<SessionState>,
}

impl RecordStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            resolver: StorePathResolver::new(config),
            state: Mutex::new(SessionState::default()),
        }
    }

    pub fn resolver(&self) -> &StorePathResolver {
        &self.resolver
    }

    /// Resolve the session's paths and load its records.
    ///
    /// A missing or unreadable file starts the session empty.
    pub fn on_session_start(&self, context: &SessionContext) -> SessionPaths {
        let paths = self.resolver.resolve(context);
        let file = RecordFile::new(&paths.records);

        let records = match file.load() {
            Ok(records) => records,
            Err(e) => {
                warn!(path = %paths.records.display(), error = %e, "failed to load records");
                Vec::new()
            }
        };
        info!(path = %paths.records.display(), count = records.len(), "session started");

        let mut state = self.state.lock();
        state.records = records;
        state.file = Some(file);
        paths
    }

    /// Drop the in-memory records and forget the path. The file is untouched.
    pub fn on_session_end(&self) {
        let mut state = self.state.lock();
        state.records.clear();
        state.file = None;
        info!("session ended");
    }

    /// Path of the active session's record file.
    pub fn path(&self) -> Option<PathBuf> {
        self.state.lock().file.as_ref().map(|f| f.path().to_path_buf())
    }

    /// Track a newly placed box and persist.
    pub fn add(
        &self,
        position: BlockPos,
        dimension: &str,
        color: &str,
        timestamp: Timestamp,
        custom_name: &str,
    ) -> Result<()> {
        let mut state = self.state.lock();
        state
            .records
            .push(Record::new(position, dimension, color, timestamp, custom_name));
        debug!(?position, dimension, color, "record added");
        Self::persist(&state)
    }

    /// Remove every record at `position` and persist.
    pub fn remove_at(&self, position: BlockPos) -> Result<usize> {
        let mut state = self.state.lock();
        let before = state.records.len();
        state.records.retain(|r| r.position != position);
        let removed = before - state.records.len();
        debug!(?position, removed, "records removed");
        Self::persist(&state)?;
        Ok(removed)
    }

    /// Clear all records, or only the undyed ones when `all` is false.
    pub fn reset(&self, all: bool) -> Result<usize> {
        let mut state = self.state.lock();
        let before = state.records.len();
        if all {
            state.records.clear();
        } else {
            state.records.retain(|r| !r.is_default_color());
        }
        let removed = before - state.records.len();
        info!(all, removed, "records reset");
        Self::persist(&state)?;
        Ok(removed)
    }

    /// All records, most recently added first.
    pub fn list(&self) -> Vec<Record> {
        self.state.lock().records.iter().rev().cloned().collect()
    }

    pub fn count(&self) -> usize {
        self.state.lock().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    fn persist(state: &SessionState) -> Result<()> {
        let Some(file) = &state.file else {
            debug!("no active session, skipping save");
            return Ok(());
        };
        file.save(&state.records).map_err(|e| {
            warn!(path = %file.path().display(), error = %e, "failed to save records");
            e
        })
    }
}

impl std::fmt::Debug for RecordStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("RecordStore")
            .field("path", &state.file.as_ref().map(|f| f.path().display().to_string()))
            .field("count", &state.records.len())
            .finish()
    }
}
