//! JSON metadata table loader
//!
//! Reads custom property tables in the same shape as the builtin one:
//!
//! ```json
//! {
//!   "239": { "label": "Ignition", "values": { "0": "No", "1": "Yes" } },
//!   "66":  { "label": "Ext Voltage", "dimension": "mV" }
//! }
//! ```
//!
//! Property keys must be decimal numerals. Enumeration keys that are integers
//! are canonicalised to plain decimal (`"01"` becomes `"1"`) so they match
//! [`IoValue::lookup_key`](crate::IoValue::lookup_key); other keys are kept
//! verbatim so hex values can be enumerated too.

use super::{IoMetadataTable, IoProperty};
use crate::types::{DecoderError, Result};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RawProperty {
    label: String,
    #[serde(default)]
    dimension: Option<String>,
    #[serde(default)]
    values: Option<BTreeMap<String, String>>,
}

/// Load a metadata table from a JSON file
pub fn load_table_file(path: &Path) -> Result<IoMetadataTable> {
    log::info!("Loading IO metadata table: {:?}", path);

    let content = std::fs::read_to_string(path).map_err(|e| {
        DecoderError::MetadataParseError(format!("Failed to read file {:?}: {}", path, e))
    })?;

    let table = parse_table(&content)?;

    log::info!("Loaded {} IO properties from {:?}", table.len(), path);
    Ok(table)
}

/// Parse a metadata table from JSON text
pub fn parse_table(content: &str) -> Result<IoMetadataTable> {
    let raw: BTreeMap<String, RawProperty> = serde_json::from_str(content)
        .map_err(|e| DecoderError::MetadataParseError(e.to_string()))?;

    raw.into_iter()
        .map(|(key, property)| -> Result<(u16, IoProperty)> {
            let id = key.trim().parse::<u16>().map_err(|_| {
                DecoderError::MetadataParseError(format!("Invalid property id: {:?}", key))
            })?;
            Ok((id, convert_property(property)))
        })
        .collect()
}

fn convert_property(raw: RawProperty) -> IoProperty {
    IoProperty {
        label: raw.label,
        dimension: raw.dimension,
        values: raw.values.map(|values| {
            values
                .into_iter()
                .map(|(key, meaning)| (canonical_key(&key), meaning))
                .collect::<HashMap<_, _>>()
        }),
    }
}

fn canonical_key(key: &str) -> String {
    match key.trim().parse::<i64>() {
        Ok(n) => n.to_string(),
        Err(_) => key.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::IoValue;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "239": { "label": "Ignition", "values": { "0": "No", "1": "Yes" } },
        "66": { "label": "Ext Voltage", "dimension": "mV" },
        "900": { "label": "Door", "values": { "01": "Open", "ff": "Jammed" } }
    }"#;

    #[test]
    fn test_parse_table() {
        let table = parse_table(SAMPLE).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(66).unwrap().dimension.as_deref(), Some("mV"));
        assert_eq!(table.describe(239, &IoValue::Integer(1)).value_human, "Yes");
    }

    #[test]
    fn test_enumeration_keys_canonicalised() {
        let table = parse_table(SAMPLE).unwrap();
        assert_eq!(table.describe(900, &IoValue::Integer(1)).value_human, "Open");
        assert_eq!(table.describe(900, &IoValue::Hex("ff".into())).value_human, "Jammed");
    }

    #[test]
    fn test_invalid_property_id() {
        let err = parse_table(r#"{ "ignition": { "label": "Ignition" } }"#).unwrap_err();
        assert!(matches!(err, DecoderError::MetadataParseError(_)));

        let err = parse_table(r#"{ "70000": { "label": "Too big" } }"#).unwrap_err();
        assert!(matches!(err, DecoderError::MetadataParseError(_)));
    }

    #[test]
    fn test_missing_label_rejected() {
        assert!(parse_table(r#"{ "1": { "dimension": "mV" } }"#).is_err());
    }

    #[test]
    fn test_load_table_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let table = load_table_file(file.path()).unwrap();
        assert_eq!(table.stats().num_enumerated, 2);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_table_file(Path::new("does/not/exist.json"));
        assert!(matches!(result, Err(DecoderError::MetadataParseError(_))));
    }
}
