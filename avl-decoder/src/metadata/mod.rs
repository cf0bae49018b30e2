//! IO property metadata
//!
//! Maps IO property ids to a human-readable label, an optional physical
//! dimension and an optional enumeration of raw value to meaning. A table is
//! never mutated once built, so the builtin one is shared by reference across
//! every decoder and thread.

mod builtin;
pub mod json;

use crate::types::IoValue;
use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

static BUILTIN_TABLE: LazyLock<IoMetadataTable> = LazyLock::new(|| {
    builtin::PROPERTIES
        .iter()
        .map(|entry| {
            let values = (!entry.values.is_empty()).then(|| {
                entry
                    .values
                    .iter()
                    .map(|(raw, meaning)| (raw.to_string(), meaning.to_string()))
                    .collect()
            });

            (
                entry.id,
                IoProperty {
                    label: entry.label.to_string(),
                    dimension: entry.dimension.map(str::to_string),
                    values,
                },
            )
        })
        .collect()
});

/// Metadata for one IO property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IoProperty {
    /// Human-readable property name
    pub label: String,
    /// Physical dimension (e.g., "mV", "km/h")
    pub dimension: Option<String>,
    /// Enumeration keyed by decimal value (e.g., "1" -> "Yes")
    pub values: Option<HashMap<String, String>>,
}

impl IoProperty {
    /// Meaning of a raw value, if the property enumerates it
    pub fn meaning(&self, value: &IoValue) -> Option<&str> {
        self.values
            .as_ref()
            .and_then(|values| values.get(&value.lookup_key()))
            .map(String::as_str)
    }
}

/// Annotation attached to a decoded IO element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotation {
    pub label: String,
    pub dimension: String,
    pub value_human: String,
}

/// Read-only lookup from IO property id to metadata
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IoMetadataTable {
    properties: HashMap<u16, IoProperty>,
}

impl IoMetadataTable {
    /// The table compiled into the library
    pub fn builtin() -> &'static IoMetadataTable {
        &BUILTIN_TABLE
    }

    /// Parse a table from JSON text (see [`json`] for the format)
    pub fn from_json_str(content: &str) -> crate::Result<Self> {
        json::parse_table(content)
    }

    /// Load a table from a JSON file
    pub fn load_json(path: &Path) -> crate::Result<Self> {
        json::load_table_file(path)
    }

    /// Get the metadata for a property id
    pub fn get(&self, id: u16) -> Option<&IoProperty> {
        self.properties.get(&id)
    }

    /// Annotate a raw value of the given property.
    ///
    /// Unknown ids yield an all-empty annotation.
    pub fn describe(&self, id: u16, value: &IoValue) -> Annotation {
        match self.get(id) {
            Some(property) => Annotation {
                label: property.label.clone(),
                dimension: property.dimension.clone().unwrap_or_default(),
                value_human: property.meaning(value).unwrap_or_default().to_string(),
            },
            None => {
                log::trace!("No metadata for IO property {}", id);
                Annotation::default()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// All known property ids, sorted
    pub fn ids(&self) -> Vec<u16> {
        let mut ids: Vec<u16> = self.properties.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Get table statistics
    pub fn stats(&self) -> MetadataStats {
        MetadataStats {
            num_properties: self.properties.len(),
            num_enumerated: self.properties.values().filter(|p| p.values.is_some()).count(),
            num_with_dimension: self
                .properties
                .values()
                .filter(|p| p.dimension.is_some())
                .count(),
        }
    }
}

impl FromIterator<(u16, IoProperty)> for IoMetadataTable {
    fn from_iter<I: IntoIterator<Item = (u16, IoProperty)>>(iter: I) -> Self {
        Self {
            properties: iter.into_iter().collect(),
        }
    }
}

/// Metadata table statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetadataStats {
    /// Number of known property ids
    pub num_properties: usize,
    /// Properties carrying a value enumeration
    pub num_enumerated: usize,
    /// Properties carrying a physical dimension
    pub num_with_dimension: usize,
}
