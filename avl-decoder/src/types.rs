//! Core types for the AVL record decoder library
//!
//! This module defines the records the decoder emits when processing an AVL
//! data block. The decoder is stateless: every type here is plain data handed
//! back to the caller, who owns its lifecycle from then on.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Timestamp type used throughout the decoder
pub type Timestamp = DateTime<Utc>;

/// Result type for decoder operations
pub type Result<T> = std::result::Result<T, DecoderError>;

/// Errors that can occur during decoding
///
/// Every variant is fatal to the batch being decoded. An unknown IO property id
/// is not an error; it simply produces an element with empty annotations.
#[derive(Debug, thiserror::Error)]
pub enum DecoderError {
    #[error("Truncated input at offset {offset}: needed {needed} bytes, {remaining} remaining")]
    TruncatedInput {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    #[error("Malformed variable length for IO property {property_id}: declared {declared} bytes, {remaining} remaining")]
    MalformedVariableLength {
        property_id: u16,
        declared: usize,
        remaining: usize,
    },

    #[error("Timestamp out of range: {0} ms since epoch")]
    TimestampOutOfRange(u64),

    #[error("Failed to parse IO metadata table: {0}")]
    MetadataParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// GPS element of an AVL record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GpsFix {
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Altitude in meters
    pub altitude: i16,
    /// Heading in degrees
    pub angle: i16,
    /// Number of visible satellites
    pub satellites: u8,
    /// Speed in km/h
    pub speed: i16,
}

/// Raw value of an IO element, typed by the group it was read from
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum IoValue {
    /// 1, 2 and 4 byte groups
    Integer(i64),
    /// 8 byte group (IEEE 754 double)
    Float(f64),
    /// Variable length group, lowercase hex of the raw bytes
    Hex(String),
}

impl IoValue {
    /// Key used to look this value up in a metadata enumeration.
    ///
    /// Enumeration keys are decimal numerals, so the value is rendered with its
    /// `Display` form: integers in decimal, doubles in shortest form (`1.0`
    /// becomes `"1"`), hex values as their hex string. Negative zero uses the
    /// key of zero.
    pub fn lookup_key(&self) -> String {
        match self {
            IoValue::Float(v) if *v == 0.0 => IoValue::Float(0.0).to_string(),
            other => other.to_string(),
        }
    }

    /// Integer view of the value, if it has one
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            IoValue::Integer(v) => Some(*v),
            IoValue::Float(v) if v.fract() == 0.0 => Some(*v as i64),
            _ => None,
        }
    }
}

impl fmt::Display for IoValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IoValue::Integer(v) => write!(f, "{}", v),
            IoValue::Float(v) => write!(f, "{}", v),
            IoValue::Hex(v) => f.write_str(v),
        }
    }
}

/// A decoded IO element with its metadata annotations
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IoElement {
    /// IO property id
    pub id: u16,
    /// Value exactly as decoded from the wire
    pub value: IoValue,
    /// Property label ("" if the id is unknown)
    pub label: String,
    /// Physical dimension ("" if not applicable)
    pub dimension: String,
    /// Enumerated meaning of the value ("" if none)
    pub value_human: String,
}

/// Trip boundary carried by a trip event record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TripEvent {
    Started,
    Ended,
}

impl fmt::Display for TripEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TripEvent::Started => write!(f, "Trip started"),
            TripEvent::Ended => write!(f, "Trip ended"),
        }
    }
}

/// One decoded AVL record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvlRecord {
    /// Absolute device time
    pub timestamp: Timestamp,
    /// Device time as sent, in milliseconds since the Unix epoch
    pub timestamp_ms: u64,
    pub priority: u8,
    pub gps: GpsFix,
    /// IO property that triggered the record (0 for periodic records)
    pub event_id: u16,
    /// Element count declared by the device. Advisory only.
    pub properties_count: u16,
    /// All IO elements in wire order
    pub io_elements: Vec<IoElement>,
}

impl AvlRecord {
    /// Event id marking a trip boundary
    pub const TRIP_EVENT_ID: u16 = 250;
    /// Trip event value for a trip start
    pub const TRIP_EVENT_START: i64 = 1;
    /// Trip event value for a trip end
    pub const TRIP_EVENT_END: i64 = 0;
    /// IO property carrying the total odometer
    pub const ODOMETER_PROPERTY_ID: u16 = 16;

    /// Find the first IO element with the given property id
    pub fn io_element(&self, id: u16) -> Option<&IoElement> {
        self.io_elements.iter().find(|element| element.id == id)
    }

    /// Trip boundary signalled by this record, if any
    pub fn trip_event(&self) -> Option<TripEvent> {
        if self.event_id != Self::TRIP_EVENT_ID {
            return None;
        }

        match self.io_element(Self::TRIP_EVENT_ID)?.value.as_i64()? {
            Self::TRIP_EVENT_START => Some(TripEvent::Started),
            Self::TRIP_EVENT_END => Some(TripEvent::Ended),
            _ => None,
        }
    }

    /// Total odometer reading, if the record carries one
    pub fn odometer(&self) -> Option<i64> {
        self.io_element(Self::ODOMETER_PROPERTY_ID)?.value.as_i64()
    }

    /// Whether the declared properties count agrees with the decoded elements
    pub fn declared_count_matches(&self) -> bool {
        usize::from(self.properties_count) == self.io_elements.len()
    }
}

/// Ordered sequence of records decoded from one data block
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DecodedBatch {
    pub records: Vec<AvlRecord>,
}

impl DecodedBatch {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AvlRecord> {
        self.records.iter()
    }

    /// Total number of IO elements across all records
    pub fn io_element_count(&self) -> usize {
        self.records.iter().map(|r| r.io_elements.len()).sum()
    }
}

impl IntoIterator for DecodedBatch {
    type Item = AvlRecord;
    type IntoIter = std::vec::IntoIter<AvlRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a DecodedBatch {
    type Item = &'a AvlRecord;
    type IntoIter = std::slice::Iter<'a, AvlRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(id: u16, value: IoValue) -> IoElement {
        IoElement {
            id,
            value,
            label: String::new(),
            dimension: String::new(),
            value_human: String::new(),
        }
    }

    fn record(event_id: u16, elements: Vec<IoElement>) -> AvlRecord {
        AvlRecord {
            timestamp: DateTime::from_timestamp_millis(0).unwrap(),
            timestamp_ms: 0,
            priority: 0,
            gps: GpsFix {
                longitude: 0.0,
                latitude: 0.0,
                altitude: 0,
                angle: 0,
                satellites: 0,
                speed: 0,
            },
            event_id,
            properties_count: elements.len() as u16,
            io_elements: elements,
        }
    }

    #[test]
    fn test_io_value_lookup_key() {
        assert_eq!(IoValue::Integer(1).lookup_key(), "1");
        assert_eq!(IoValue::Integer(-12).lookup_key(), "-12");
        assert_eq!(IoValue::Float(1.0).lookup_key(), "1");
        assert_eq!(IoValue::Float(2.5).lookup_key(), "2.5");
        assert_eq!(IoValue::Float(-0.0).lookup_key(), "0");
        assert_eq!(IoValue::Float(-1.0).lookup_key(), "-1");
        assert_eq!(IoValue::Hex("01abff".into()).lookup_key(), "01abff");
    }

    #[test]
    fn test_io_value_as_i64() {
        assert_eq!(IoValue::Integer(42).as_i64(), Some(42));
        assert_eq!(IoValue::Float(3.0).as_i64(), Some(3));
        assert_eq!(IoValue::Float(3.5).as_i64(), None);
        assert_eq!(IoValue::Hex("ff".into()).as_i64(), None);
    }

    #[test]
    fn test_io_value_serializes_untagged() {
        assert_eq!(serde_json::to_string(&IoValue::Integer(7)).unwrap(), "7");
        assert_eq!(serde_json::to_string(&IoValue::Float(1.5)).unwrap(), "1.5");
        assert_eq!(serde_json::to_string(&IoValue::Hex("0a".into())).unwrap(), "\"0a\"");
    }

    #[test]
    fn test_trip_event_start_and_end() {
        let start = record(250, vec![element(250, IoValue::Integer(1))]);
        assert_eq!(start.trip_event(), Some(TripEvent::Started));

        let end = record(250, vec![element(250, IoValue::Integer(0))]);
        assert_eq!(end.trip_event(), Some(TripEvent::Ended));

        let status = record(250, vec![element(250, IoValue::Integer(2))]);
        assert_eq!(status.trip_event(), None);
    }

    #[test]
    fn test_trip_event_requires_event_id() {
        let periodic = record(0, vec![element(250, IoValue::Integer(1))]);
        assert_eq!(periodic.trip_event(), None);

        let missing = record(250, vec![element(239, IoValue::Integer(1))]);
        assert_eq!(missing.trip_event(), None);
    }

    #[test]
    fn test_odometer_and_count_check() {
        let mut rec = record(0, vec![element(16, IoValue::Integer(123_456))]);
        assert_eq!(rec.odometer(), Some(123_456));
        assert!(rec.declared_count_matches());

        rec.properties_count = 5;
        assert!(!rec.declared_count_matches());
    }
}
