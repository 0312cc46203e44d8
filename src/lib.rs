//! # Shulker Tracker
//!
//! Remembers where shulker boxes were placed, per world or per server, and
//! shows them as a paginated list with distance and direction from the player.
//!
//! ## Core Concepts
//!
//! - **Records**: One line per placed box in a comma-delimited file
//! - **Sessions**: A world or server connection; each has its own file
//! - **Config**: Small key/value overlay stored next to the records
//! - **Views**: Pages of eight rows with bearing, distance and map links
//!
//! ## Example
//!
//! ```ignore
//! use shulker_tracker::{
//!     BlockPos, Observer, SessionContext, ShulkerTracker, StoreConfig, Timestamp,
//! };
//!
//! let tracker = ShulkerTracker::new(StoreConfig {
//!     app_root: "/home/steve/.minecraft".into(),
//!     ..Default::default()
//! });
//! tracker.on_session_start(&SessionContext::remote("play.example.org:25565"));
//!
//! tracker.on_block_placed(
//!     BlockPos::new(10, 64, -5),
//!     "minecraft:red_shulker_box",
//!     "minecraft:overworld",
//!     "",
//!     Timestamp::now(),
//! )?;
//!
//! let observer = Observer::new(BlockPos::new(0, 64, 0), "minecraft:overworld");
//! for line in tracker.list(&observer, None).lines {
//!     println!("{line}");
//! }
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod placement;
pub mod query;
pub mod records;
pub mod session;
pub mod store;
pub mod tracker;
pub mod types;

// Re-exports
pub use command::{config_command, list_command, CommandOutcome, ListView, FAILURE, SUCCESS};
pub use config::{ConfigStore, MAP_BASE_URL_KEY, MAP_WORLD_KEY_PREFIX};
pub use error::{Result, TrackerError};
pub use placement::{color_label, is_container};
pub use query::{
    ColorCategory, Direction, ListArgument, ListRow, Location, MapLinkBuilder, Page, PAGE_SIZE,
};
pub use records::RecordFile;
pub use session::{sanitize_address, SessionContext, SessionPaths, StorePathResolver};
pub use store::{RecordStore, StoreConfig};
pub use tracker::ShulkerTracker;
pub use types::*;
