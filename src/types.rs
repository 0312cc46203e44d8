//! Core types for the shulker tracker.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Integer block position in the world.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Debug for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockPos({}, {}, {})", self.x, self.y, self.z)
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.x, self.y, self.z)
    }
}

/// Milliseconds since Unix epoch.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Current time.
    pub fn now() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or_default();
        Timestamp(millis)
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({})", self.0)
    }
}

/// One tracked shulker box.
///
/// Records are immutable once created; the store only adds and removes them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Where the box was placed.
    pub position: BlockPos,

    /// Dimension identifier, e.g. `minecraft:overworld`.
    pub dimension: String,

    /// Capitalized color name, or empty for the undyed box.
    pub color: String,

    /// When the box was placed.
    pub timestamp: Timestamp,

    /// Item name at placement time, empty if never renamed.
    pub custom_name: String,
}

impl Record {
    pub fn new(
        position: BlockPos,
        dimension: impl Into<String>,
        color: impl Into<String>,
        timestamp: Timestamp,
        custom_name: impl Into<String>,
    ) -> Self {
        Self {
            position,
            dimension: dimension.into(),
            color: color.into(),
            timestamp,
            custom_name: custom_name.into(),
        }
    }

    pub fn has_custom_name(&self) -> bool {
        !self.custom_name.is_empty()
    }

    /// True for the undyed (default) variant.
    pub fn is_default_color(&self) -> bool {
        self.color.is_empty()
    }

    /// Name shown to the player: the custom name, else `<color> Shulker Box`.
    pub fn display_name(&self) -> String {
        if self.has_custom_name() {
            self.custom_name.trim().to_string()
        } else {
            format!("{} Shulker Box", self.color).trim().to_string()
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} Shulker Box at {}",
            self.dimension, self.color, self.position
        )?;
        if self.has_custom_name() {
            write!(f, " named '{}'", self.custom_name)?;
        }
        Ok(())
    }
}

/// Where the player viewing the list currently stands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Observer {
    pub position: BlockPos,
    pub dimension: String,
}

impl Observer {
    pub fn new(position: BlockPos, dimension: impl Into<String>) -> Self {
        Self {
            position,
            dimension: dimension.into(),
        }
    }
}
