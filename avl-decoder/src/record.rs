//! AVL record decoding
//!
//! Record layout (big-endian):
//!
//! | Field            | Bytes |
//! |------------------|-------|
//! | timestamp (ms)   | 8     |
//! | priority         | 1     |
//! | longitude        | 4     |
//! | latitude         | 4     |
//! | altitude         | 2     |
//! | angle            | 2     |
//! | satellites       | 1     |
//! | speed            | 2     |
//! | event id         | 2     |
//! | properties count | 2     |
//! | IO section       | 10+   |

use crate::cursor::ByteCursor;
use crate::io_element::IoElementDecoder;
use crate::metadata::IoMetadataTable;
use crate::types::{AvlRecord, DecoderError, GpsFix, Result};
use chrono::{DateTime, Utc};

/// Divisor turning raw coordinates into decimal degrees
pub const GPS_PRECISION: f64 = 10_000_000.0;

/// Smallest possible record: fixed header plus five empty IO groups
pub const MIN_RECORD_SIZE: usize = 38;

const COORDINATE_SIGN_BIT: u32 = 0x8000_0000;

/// Convert a raw coordinate field into decimal degrees.
///
/// The most significant bit is a sign flag where 0 means negative; the
/// remaining 31 bits are the magnitude in units of 1e-7 degrees.
pub fn coordinate_from_raw(raw: u32) -> f64 {
    let magnitude = i64::from(raw & !COORDINATE_SIGN_BIT);
    let signed = if raw & COORDINATE_SIGN_BIT == 0 {
        -magnitude
    } else {
        magnitude
    };
    signed as f64 / GPS_PRECISION
}

/// AVL record decoder - reads one record header and its IO section
pub struct AvlRecordDecoder;

impl AvlRecordDecoder {
    /// Decode one record starting at the cursor.
    ///
    /// On success the cursor sits right after the record's last IO group.
    pub fn decode(
        cursor: &mut ByteCursor<'_>,
        metadata: Option<&IoMetadataTable>,
    ) -> Result<AvlRecord> {
        let start = cursor.position();

        let timestamp_ms = cursor.read_u64()?;
        let timestamp = i64::try_from(timestamp_ms)
            .ok()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .ok_or(DecoderError::TimestampOutOfRange(timestamp_ms))?;
        let priority = cursor.read_u8()?;

        let gps = GpsFix {
            longitude: coordinate_from_raw(cursor.read_u32()?),
            latitude: coordinate_from_raw(cursor.read_u32()?),
            altitude: cursor.read_i16()?,
            angle: cursor.read_i16()?,
            satellites: cursor.read_u8()?,
            speed: cursor.read_i16()?,
        };

        let event_id = cursor.read_u16()?;
        let properties_count = cursor.read_u16()?;
        let io_elements = IoElementDecoder::decode(cursor, metadata)?;

        log::trace!(
            "Decoded record at offset {} ({} bytes, {} IO elements, event {})",
            start,
            cursor.position() - start,
            io_elements.len(),
            event_id
        );

        Ok(AvlRecord {
            timestamp,
            timestamp_ms,
            priority,
            gps,
            event_id,
            properties_count,
            io_elements,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::IoValue;

    fn header(timestamp_ms: u64, longitude: u32, latitude: u32) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(&timestamp_ms.to_be_bytes());
        data.push(1); // priority
        data.extend_from_slice(&longitude.to_be_bytes());
        data.extend_from_slice(&latitude.to_be_bytes());
        data.extend_from_slice(&120i16.to_be_bytes()); // altitude
        data.extend_from_slice(&270i16.to_be_bytes()); // angle
        data.push(9); // satellites
        data.extend_from_slice(&57i16.to_be_bytes()); // speed
        data.extend_from_slice(&239u16.to_be_bytes()); // event id
        data.extend_from_slice(&1u16.to_be_bytes()); // properties count
        data
    }

    fn empty_io() -> Vec<u8> {
        vec![0u8; 10]
    }

    #[test]
    fn test_coordinate_sign_flag() {
        assert_eq!(coordinate_from_raw(0x8000_0001), 0.000_000_1);
        assert_eq!(coordinate_from_raw(0x0000_0001), -0.000_000_1);
        assert_eq!(coordinate_from_raw(0x8000_0000), 0.0);
        assert_eq!(coordinate_from_raw(0).to_bits(), 0.0f64.to_bits());
    }

    #[test]
    fn test_coordinate_scale() {
        // 25.3012345 degrees with the sign flag set
        assert_eq!(coordinate_from_raw(0x8000_0000 | 253_012_345), 25.301_234_5);
        assert_eq!(coordinate_from_raw(253_012_345), -25.301_234_5);
    }

    #[test]
    fn test_decode_header() {
        let mut data = header(1_560_161_086_000, 0x8000_0001, 0x0000_0001);
        data.extend_from_slice(&[0x00, 0x01, 0x00, 0xEF, 0x01]);
        data.extend_from_slice(&[0u8; 8]);
        let mut cursor = ByteCursor::new(&data);

        let record = AvlRecordDecoder::decode(&mut cursor, Some(IoMetadataTable::builtin())).unwrap();
        assert_eq!(record.timestamp_ms, 1_560_161_086_000);
        assert_eq!(record.timestamp.timestamp_millis(), 1_560_161_086_000);
        assert_eq!(record.priority, 1);
        assert_eq!(record.gps.longitude, 0.000_000_1);
        assert_eq!(record.gps.latitude, -0.000_000_1);
        assert_eq!(record.gps.altitude, 120);
        assert_eq!(record.gps.angle, 270);
        assert_eq!(record.gps.satellites, 9);
        assert_eq!(record.gps.speed, 57);
        assert_eq!(record.event_id, 239);
        assert_eq!(record.properties_count, 1);
        assert_eq!(record.io_elements.len(), 1);
        assert_eq!(record.io_elements[0].value, IoValue::Integer(1));
        assert_eq!(record.io_elements[0].value_human, "Yes");
        assert_eq!(cursor.position(), data.len());
    }

    #[test]
    fn test_minimum_record_size() {
        let mut data = header(0, 0, 0);
        data.extend(empty_io());
        assert_eq!(data.len(), MIN_RECORD_SIZE);

        let mut cursor = ByteCursor::new(&data);
        let record = AvlRecordDecoder::decode(&mut cursor, None).unwrap();
        assert!(record.io_elements.is_empty());
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_timestamp_out_of_range() {
        let mut data = header(u64::MAX, 0, 0);
        data.extend(empty_io());
        let mut cursor = ByteCursor::new(&data);

        let result = AvlRecordDecoder::decode(&mut cursor, None);
        assert!(matches!(result, Err(DecoderError::TimestampOutOfRange(u64::MAX))));
    }

    #[test]
    fn test_truncated_header() {
        let data = header(0, 0, 0);
        for len in [0, 7, 12, 20, data.len()] {
            let mut cursor = ByteCursor::new(&data[..len]);
            let result = AvlRecordDecoder::decode(&mut cursor, None);
            assert!(
                matches!(result, Err(DecoderError::TruncatedInput { .. })),
                "length {} should be truncated",
                len
            );
        }
    }
}
