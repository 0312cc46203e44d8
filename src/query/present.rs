//! Per-record presentation relative to an observer.

use super::bearing::{direction, horizontal_distance, Direction, VerticalOffset};
use crate::config::{ConfigStore, MAP_BASE_URL_KEY, MAP_WORLD_KEY_PREFIX};
use crate::types::{BlockPos, Observer, Record};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Text color a row's name is rendered in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorCategory {
    White,
    Gold,
    LightPurple,
    Aqua,
    Yellow,
    Green,
    DarkGray,
    Gray,
    DarkAqua,
    DarkPurple,
    Blue,
    DarkGreen,
    Red,
    Black,
}

impl ColorCategory {
    /// Display color for a box color name. Unknown and undyed names get
    /// [`ColorCategory::LightPurple`].
    pub fn for_color(color: &str) -> Self {
        match color.to_lowercase().as_str() {
            "white" => ColorCategory::White,
            "orange" => ColorCategory::Gold,
            "magenta" => ColorCategory::LightPurple,
            "light blue" => ColorCategory::Aqua,
            "yellow" => ColorCategory::Yellow,
            "lime" => ColorCategory::Green,
            "pink" => ColorCategory::LightPurple,
            "gray" => ColorCategory::DarkGray,
            "light gray" => ColorCategory::Gray,
            "cyan" => ColorCategory::DarkAqua,
            "purple" => ColorCategory::DarkPurple,
            "blue" => ColorCategory::Blue,
            "brown" => ColorCategory::Gold,
            "green" => ColorCategory::DarkGreen,
            "red" => ColorCategory::Red,
            "black" => ColorCategory::Black,
            _ => ColorCategory::LightPurple,
        }
    }
}

/// Friendly name for a dimension identifier; unknown ids pass through.
pub fn dimension_label(dimension: &str) -> String {
    if dimension.contains("overworld") {
        "Overworld".to_string()
    } else if dimension.contains("the_nether") {
        "Nether".to_string()
    } else if dimension.contains("the_end") {
        "End".to_string()
    } else {
        dimension.to_string()
    }
}

/// World identifier the map viewer uses for a dimension.
pub fn default_map_world(dimension: &str) -> String {
    if dimension.contains("overworld") {
        "world".to_string()
    } else if dimension.contains("the_nether") {
        "world_nether".to_string()
    } else if dimension.contains("the_end") {
        "world_the_end".to_string()
    } else {
        dimension
            .rsplit(':')
            .next()
            .unwrap_or(dimension)
            .to_string()
    }
}

/// Builds links into an external web map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapLinkBuilder {
    /// Base URL, or a template with `{world}`, `{x}`, `{y}`, `{z}`.
    pub base: String,

    /// Dimension id → world name overrides.
    pub worlds: BTreeMap<String, String>,
}

impl MapLinkBuilder {
    /// Fragment appended to bases without placeholders.
    const DEFAULT_FRAGMENT: &'static str = "/#{world}:{x}:{y}:{z}:50:0:0:0:0:perspective";

    /// Vertical offset so the camera targets the middle of the box.
    const Y_OFFSET: i32 = 2;

    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            worlds: BTreeMap::new(),
        }
    }

    /// Builder from config; None when no base URL is set.
    pub fn from_config(config: &ConfigStore) -> Option<Self> {
        let all = config.get_all();
        let base = all.get(MAP_BASE_URL_KEY).filter(|b| !b.trim().is_empty())?;
        let worlds = all
            .iter()
            .filter_map(|(key, value)| {
                key.strip_prefix(MAP_WORLD_KEY_PREFIX)
                    .map(|dimension| (dimension.to_string(), value.clone()))
            })
            .collect();
        Some(Self {
            base: base.trim().to_string(),
            worlds,
        })
    }

    pub fn world_for(&self, dimension: &str) -> String {
        self.worlds
            .get(dimension)
            .cloned()
            .unwrap_or_else(|| default_map_world(dimension))
    }

    pub fn link(&self, position: BlockPos, dimension: &str) -> String {
        let template = if self.base.contains('{') {
            self.base.clone()
        } else {
            format!("{}{}", self.base.trim_end_matches('/'), Self::DEFAULT_FRAGMENT)
        };
        template
            .replace("{world}", &self.world_for(dimension))
            .replace("{x}", &position.x.to_string())
            .replace("{y}", &(position.y.saturating_add(Self::Y_OFFSET)).to_string())
            .replace("{z}", &position.z.to_string())
    }
}

/// Where a record is, seen from the observer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Location {
    /// Same dimension as the observer.
    Nearby {
        horizontal: f64,
        direction: Direction,
        vertical: VerticalOffset,
    },

    /// Another dimension; only its label is shown.
    OtherDimension { label: String },
}

/// Everything a UI needs to render one list entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListRow {
    /// 1-based position in the full list.
    pub index: usize,
    pub display_name: String,
    pub color: ColorCategory,
    pub position: BlockPos,
    pub location: Location,
    /// Suggested command to teleport to the box.
    pub teleport_command: String,
    pub map_link: Option<String>,
}

impl ListRow {
    pub fn new(
        index: usize,
        record: &Record,
        observer: &Observer,
        map: Option<&MapLinkBuilder>,
    ) -> Self {
        let location = if record.dimension == observer.dimension {
            Location::Nearby {
                horizontal: horizontal_distance(observer.position, record.position),
                direction: direction(observer.position, record.position),
                vertical: VerticalOffset::between(observer.position, record.position),
            }
        } else {
            Location::OtherDimension {
                label: dimension_label(&record.dimension),
            }
        };

        let pos = record.position;
        Self {
            index,
            display_name: record.display_name(),
            color: ColorCategory::for_color(&record.color),
            position: pos,
            location,
            teleport_command: format!("/tp @s {} {} {}", pos.x, pos.y, pos.z),
            map_link: map.map(|m| m.link(pos, &record.dimension)),
        }
    }
}

impl fmt::Display for ListRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {} ({}) ", self.index, self.display_name, self.position)?;
        match &self.location {
            Location::Nearby {
                horizontal,
                direction,
                vertical,
            } => write!(
                f,
                " [{} {}, {} {}]",
                horizontal.trunc() as i64,
                direction,
                vertical.distance,
                vertical.marker()
            ),
            Location::OtherDimension { label } => write!(f, "({})", label),
        }
    }
}

/// Rows for a slice of records; `start_index` is the slice's offset in the full list.
pub fn present(
    records: &[Record],
    start_index: usize,
    observer: &Observer,
    map: Option<&MapLinkBuilder>,
) -> Vec<ListRow> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| ListRow::new(start_index + i + 1, record, observer, map))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Timestamp;

    fn observer() -> Observer {
        Observer::new(BlockPos::new(0, 64, 0), "minecraft:overworld")
    }

    #[test]
    fn test_color_categories() {
        assert_eq!(ColorCategory::for_color("Red"), ColorCategory::Red);
        assert_eq!(ColorCategory::for_color("Light Blue"), ColorCategory::Aqua);
        assert_eq!(ColorCategory::for_color("Brown"), ColorCategory::Gold);
        assert_eq!(ColorCategory::for_color(""), ColorCategory::LightPurple);
        assert_eq!(ColorCategory::for_color("Unknown"), ColorCategory::LightPurple);
    }

    #[test]
    fn test_dimension_labels() {
        assert_eq!(dimension_label("minecraft:overworld"), "Overworld");
        assert_eq!(dimension_label("minecraft:the_nether"), "Nether");
        assert_eq!(dimension_label("minecraft:the_end"), "End");
        assert_eq!(dimension_label("mymod:mining"), "mymod:mining");
    }

    #[test]
    fn test_same_dimension_row() {
        let record = Record::new(
            BlockPos::new(10, 64, -5),
            "minecraft:overworld",
            "Red",
            Timestamp(1),
            "",
        );
        let row = ListRow::new(1, &record, &observer(), None);

        assert_eq!(row.display_name, "Red Shulker Box");
        assert_eq!(row.color, ColorCategory::Red);
        assert_eq!(row.teleport_command, "/tp @s 10 64 -5");
        assert!(row.map_link.is_none());
        assert!(matches!(
            row.location,
            Location::Nearby { direction: Direction::NE, .. }
        ));
        assert_eq!(
            row.to_string(),
            "1. Red Shulker Box (10, 64, -5)  [11 NE, 0 ^]"
        );
    }

    #[test]
    fn test_other_dimension_row() {
        let record = Record::new(
            BlockPos::new(1, 2, 3),
            "minecraft:the_nether",
            "",
            Timestamp(1),
            "Spare",
        );
        let row = ListRow::new(4, &record, &observer(), None);

        assert_eq!(
            row.location,
            Location::OtherDimension {
                label: "Nether".to_string()
            }
        );
        assert_eq!(row.to_string(), "4. Spare (1, 2, 3) (Nether)");
    }

    #[test]
    fn test_map_link_default_fragment() {
        let map = MapLinkBuilder::new("http://map.example.org:8100/");
        assert_eq!(
            map.link(BlockPos::new(10, 64, -5), "minecraft:the_nether"),
            "http://map.example.org:8100/#world_nether:10:66:-5:50:0:0:0:0:perspective"
        );
    }

    #[test]
    fn test_map_link_template_and_override() {
        let mut map = MapLinkBuilder::new("https://m/?w={world}&x={x}&y={y}&z={z}");
        map.worlds.insert("minecraft:overworld".into(), "survival".into());
        assert_eq!(
            map.link(BlockPos::new(1, 2, 3), "minecraft:overworld"),
            "https://m/?w=survival&x=1&y=4&z=3"
        );
        assert_eq!(map.world_for("mymod:mining"), "mining");
    }

    #[test]
    fn test_present_numbers_from_offset() {
        let records: Vec<Record> = (0..3)
            .map(|i| {
                let pos = BlockPos::new(i, 64, 0);
                Record::new(pos, "minecraft:overworld", "Blue", Timestamp(1), "")
            })
            .collect();
        let rows = present(&records, 8, &observer(), None);
        assert_eq!(rows.iter().map(|r| r.index).collect::<Vec<_>>(), vec![9, 10, 11]);
    }
}
