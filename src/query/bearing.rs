//! Compass bearing and distances between block positions.
//!
//! Bearings follow the game's yaw convention: 0° faces south (+z) and the
//! angle grows clockwise through west (90°), north and east.

use crate::types::BlockPos;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the eight 45° compass sectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    S,
    SW,
    W,
    NW,
    N,
    NE,
    E,
    SE,
}

impl Direction {
    /// Sectors in bearing order, starting at 0°.
    const SECTORS: [Direction; 8] = [
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
    ];

    /// Sector for a bearing in degrees. Sectors are centered on their
    /// direction, so S covers `[337.5, 360) ∪ [0, 22.5)`.
    pub fn from_bearing(degrees: f64) -> Self {
        let shifted = (degrees + 22.5).rem_euclid(360.0);
        let sector = ((shifted / 45.0) as usize).min(7);
        Self::SECTORS[sector]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::S => "S",
            Direction::SW => "SW",
            Direction::W => "W",
            Direction::NW => "NW",
            Direction::N => "N",
            Direction::NE => "NE",
            Direction::E => "E",
            Direction::SE => "SE",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bearing from `from` to `to` in degrees, normalized to `[0, 360)`.
pub fn bearing(from: BlockPos, to: BlockPos) -> f64 {
    let dx = f64::from(to.x) - f64::from(from.x);
    let dz = f64::from(to.z) - f64::from(from.z);
    let angle = (-dx).atan2(dz).to_degrees();
    if angle < 0.0 {
        angle + 360.0
    } else {
        angle
    }
}

/// Compass sector from `from` to `to`.
pub fn direction(from: BlockPos, to: BlockPos) -> Direction {
    Direction::from_bearing(bearing(from, to))
}

/// Euclidean distance over x and z.
pub fn horizontal_distance(from: BlockPos, to: BlockPos) -> f64 {
    let dx = f64::from(to.x) - f64::from(from.x);
    let dz = f64::from(to.z) - f64::from(from.z);
    dx.hypot(dz)
}

/// Height difference between observer and target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerticalOffset {
    /// Absolute difference in y.
    pub distance: u32,

    /// Target is strictly below the observer.
    pub below: bool,
}

impl VerticalOffset {
    pub fn between(from: BlockPos, to: BlockPos) -> Self {
        Self {
            distance: from.y.abs_diff(to.y),
            below: to.y < from.y,
        }
    }

    /// `v` for below, `^` otherwise.
    pub fn marker(&self) -> &'static str {
        if self.below {
            "v"
        } else {
            "^"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ORIGIN: BlockPos = BlockPos::new(0, 0, 0);

    #[test]
    fn test_cardinal_directions() {
        assert_eq!(bearing(ORIGIN, BlockPos::new(0, 0, 10)), 0.0);
        assert_eq!(direction(ORIGIN, BlockPos::new(0, 0, 10)), Direction::S);

        assert_eq!(bearing(ORIGIN, BlockPos::new(10, 0, 0)), 270.0);
        assert_eq!(direction(ORIGIN, BlockPos::new(10, 0, 0)), Direction::E);

        assert_eq!(direction(ORIGIN, BlockPos::new(-10, 0, 0)), Direction::W);
        assert_eq!(direction(ORIGIN, BlockPos::new(0, 0, -10)), Direction::N);
    }

    #[test]
    fn test_intercardinal_directions() {
        assert_eq!(direction(ORIGIN, BlockPos::new(-5, 0, 5)), Direction::SW);
        assert_eq!(direction(ORIGIN, BlockPos::new(-5, 0, -5)), Direction::NW);
        assert_eq!(direction(ORIGIN, BlockPos::new(5, 0, -5)), Direction::NE);
        assert_eq!(direction(ORIGIN, BlockPos::new(5, 0, 5)), Direction::SE);
    }

    #[test]
    fn test_sector_boundaries() {
        assert_eq!(Direction::from_bearing(0.0), Direction::S);
        assert_eq!(Direction::from_bearing(22.4999), Direction::S);
        assert_eq!(Direction::from_bearing(22.5), Direction::SW);
        assert_eq!(Direction::from_bearing(157.5), Direction::N);
        assert_eq!(Direction::from_bearing(202.4999), Direction::N);
        assert_eq!(Direction::from_bearing(292.5), Direction::SE);
        assert_eq!(Direction::from_bearing(337.5), Direction::S);
        assert_eq!(Direction::from_bearing(359.9999), Direction::S);
    }

    #[test]
    fn test_same_position_faces_south() {
        assert_eq!(direction(ORIGIN, ORIGIN), Direction::S);
    }

    #[test]
    fn test_distances() {
        assert_eq!(horizontal_distance(ORIGIN, BlockPos::new(3, 100, 4)), 5.0);

        let up = VerticalOffset::between(BlockPos::new(0, 60, 0), BlockPos::new(0, 70, 0));
        assert_eq!(up.distance, 10);
        assert_eq!(up.marker(), "^");

        let down = VerticalOffset::between(BlockPos::new(0, 60, 0), BlockPos::new(0, -4, 0));
        assert_eq!(down.distance, 64);
        assert_eq!(down.marker(), "v");

        assert_eq!(VerticalOffset::between(ORIGIN, ORIGIN).marker(), "^");
    }

    proptest! {
        #[test]
        fn prop_bearing_in_range(x in -30_000_000i32..30_000_000, z in -30_000_000i32..30_000_000) {
            let b = bearing(ORIGIN, BlockPos::new(x, 0, z));
            prop_assert!((0.0..=360.0).contains(&b));
        }
    }
}
