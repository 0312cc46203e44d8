//! Composition root wiring game events to the stores.

use crate::command::{config_command, list_command, CommandOutcome};
use crate::config::ConfigStore;
use crate::error::Result;
use crate::placement::{color_label, is_container};
use crate::session::{SessionContext, SessionPaths};
use crate::store::{RecordStore, StoreConfig};
use crate::types::{BlockPos, Observer, Record, Timestamp};
use tracing::debug;

/// Owns the record and config stores for the current session.
///
/// The host calls the `on_*` hooks from its event dispatch and routes chat
/// commands to [`ShulkerTracker::list`] and [`ShulkerTracker::configure`].
#[derive(Debug)]
pub struct ShulkerTracker {
    records: RecordStore,
    config: ConfigStore,
}

impl ShulkerTracker {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            records: RecordStore::new(config),
            config: ConfigStore::new(),
        }
    }

    pub fn records(&self) -> &RecordStore {
        &self.records
    }

    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    /// World joined or server connected.
    pub fn on_session_start(&self, context: &SessionContext) -> SessionPaths {
        let paths = self.records.on_session_start(context);
        self.config.on_session_start(&paths.config);
        paths
    }

    /// World left or disconnected. Files stay on disk.
    pub fn on_session_end(&self) {
        self.records.on_session_end();
        self.config.on_session_end();
    }

    /// A block was placed. Returns `Ok(true)` if it was a shulker box and got
    /// tracked; a save error still leaves the box tracked in memory.
    pub fn on_block_placed(
        &self,
        position: BlockPos,
        block_id: &str,
        dimension: &str,
        custom_name: &str,
        timestamp: Timestamp,
    ) -> Result<bool> {
        if !is_container(block_id) {
            return Ok(false);
        }
        let color = color_label(block_id);
        debug!(block_id, ?position, "shulker box placed");
        self.records
            .add(position, dimension, &color, timestamp, custom_name)?;
        Ok(true)
    }

    /// A shulker box at `position` was broken.
    pub fn on_block_broken(&self, position: BlockPos) -> Result<usize> {
        self.records.remove_at(position)
    }

    pub fn list_records(&self) -> Vec<Record> {
        self.records.list()
    }

    /// `/shulker [arg]`.
    pub fn list(&self, observer: &Observer, arg: Option<&str>) -> CommandOutcome {
        list_command(&self.records, &self.config, observer, arg)
    }

    /// `/shulkerconfig ...`.
    pub fn configure(&self, args: &[&str]) -> CommandOutcome {
        config_command(&self.config, args)
    }
}
