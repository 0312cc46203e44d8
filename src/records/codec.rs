//! Line codec for records.
//!
//! `x,y,z,dimension,color,timestamp[,customName]`. Fields are not escaped,
//! so a comma inside a name splits it and the line no longer decodes.

use crate::error::{Result, TrackerError};
use crate::types::{BlockPos, Record, Timestamp};

/// Field count of the legacy form without a custom name.
const LEGACY_FIELDS: usize = 6;

/// Field count of the current form.
const CURRENT_FIELDS: usize = 7;

/// Encode a record as a single line (no trailing newline).
pub fn encode(record: &Record) -> String {
    format!(
        "{},{},{},{},{},{},{}",
        record.position.x,
        record.position.y,
        record.position.z,
        record.dimension,
        record.color,
        record.timestamp.0,
        record.custom_name
    )
}

/// Decode one line into a record.
pub fn decode(line: &str) -> Result<Record> {
    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() != LEGACY_FIELDS && parts.len() != CURRENT_FIELDS {
        return Err(TrackerError::MalformedLine {
            reason: format!(
                "expected {} or {} fields, got {}",
                LEGACY_FIELDS,
                CURRENT_FIELDS,
                parts.len()
            ),
        });
    }

    let position = BlockPos::new(
        parse_int(parts[0], "x")?,
        parse_int(parts[1], "y")?,
        parse_int(parts[2], "z")?,
    );
    let timestamp = parts[5]
        .parse::<i64>()
        .map_err(|e| malformed("timestamp", parts[5], e))?;
    let custom_name = parts.get(6).copied().unwrap_or_default();

    Ok(Record::new(
        position,
        parts[3],
        parts[4],
        Timestamp(timestamp),
        custom_name,
    ))
}

fn parse_int(field: &str, name: &str) -> Result<i32> {
    field.parse::<i32>().map_err(|e| malformed(name, field, e))
}

fn malformed(name: &str, value: &str, err: std::num::ParseIntError) -> TrackerError {
    TrackerError::MalformedLine {
        reason: format!("{} '{}': {}", name, value, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn red_box() -> Record {
        Record::new(
            BlockPos::new(10, 64, -5),
            "minecraft:overworld",
            "Red",
            Timestamp(1_700_000_000_000),
            "Loot",
        )
    }

    #[test]
    fn test_encode_layout() {
        assert_eq!(
            encode(&red_box()),
            "10,64,-5,minecraft:overworld,Red,1700000000000,Loot"
        );
    }

    #[test]
    fn test_encode_empty_fields() {
        let record = Record::new(BlockPos::new(1, 2, 3), "minecraft:the_end", "", Timestamp(7), "");
        assert_eq!(encode(&record), "1,2,3,minecraft:the_end,,7,");
        assert_eq!(decode(&encode(&record)).unwrap(), record);
    }

    #[test]
    fn test_decode_legacy_six_fields() {
        let record = decode("4,70,-12,minecraft:the_nether,Lime,123").unwrap();
        assert_eq!(record.position, BlockPos::new(4, 70, -12));
        assert_eq!(record.color, "Lime");
        assert_eq!(record.timestamp, Timestamp(123));
        assert!(record.custom_name.is_empty());
    }

    #[test]
    fn test_decode_rejects_wrong_field_count() {
        assert!(decode("").is_err());
        assert!(decode("1,2,3,overworld,Red").is_err());
        assert!(decode("1,2,3,overworld,Red,5,Name,extra").is_err());
    }

    #[test]
    fn test_decode_rejects_non_integer_fields() {
        assert!(matches!(
            decode("x,2,3,overworld,Red,5"),
            Err(TrackerError::MalformedLine { .. })
        ));
        assert!(decode("1,2.5,3,overworld,Red,5").is_err());
        assert!(decode("1,2,3,overworld,Red,soon").is_err());
        assert!(decode("1,2,99999999999,overworld,Red,5").is_err());
    }

    #[test]
    fn test_name_with_comma_does_not_decode() {
        let record = Record::new(BlockPos::new(0, 0, 0), "overworld", "Red", Timestamp(1), "a,b");
        assert!(decode(&encode(&record)).is_err());
    }

    proptest! {
        #[test]
        fn prop_roundtrip_comma_free(
            x in any::<i32>(),
            y in any::<i32>(),
            z in any::<i32>(),
            dimension in "[a-z_:]{0,24}",
            color in "[A-Za-z ]{0,12}",
            timestamp in any::<i64>(),
            name in "[^,\r\n]{0,16}",
        ) {
            let record =
                Record::new(BlockPos::new(x, y, z), dimension, color, Timestamp(timestamp), name);
            prop_assert_eq!(decode(&encode(&record)).unwrap(), record);
        }
    }
}
