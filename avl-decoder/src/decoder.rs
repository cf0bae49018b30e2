//! Main decoder API
//!
//! This module provides the primary interface for the decoder library.
//! The Decoder struct holds the IO metadata table and configuration, and
//! decodes blocks of AVL records from a byte cursor.

use crate::config::DecoderConfig;
use crate::cursor::ByteCursor;
use crate::metadata::{IoMetadataTable, MetadataStats};
use crate::record::{AvlRecordDecoder, MIN_RECORD_SIZE};
use crate::types::{DecodedBatch, Result};
use std::borrow::Cow;
use std::path::Path;

/// The main decoder struct - entry point for all decoding operations
#[derive(Debug, Clone)]
pub struct Decoder {
    /// IO property metadata (the builtin table unless replaced)
    metadata: Cow<'static, IoMetadataTable>,
    config: DecoderConfig,
}

impl Decoder {
    /// Create a decoder using the builtin metadata table
    pub fn new() -> Self {
        Self {
            metadata: Cow::Borrowed(IoMetadataTable::builtin()),
            config: DecoderConfig::default(),
        }
    }

    /// Builder method: replace the configuration
    pub fn with_config(mut self, config: DecoderConfig) -> Self {
        self.config = config;
        self
    }

    /// Builder method: replace the metadata table
    pub fn with_metadata(mut self, table: IoMetadataTable) -> Self {
        self.metadata = Cow::Owned(table);
        self
    }

    /// Load a JSON metadata table and use it instead of the current one
    ///
    /// # Example
    /// ```no_run
    /// use avl_decoder::Decoder;
    /// use std::path::Path;
    ///
    /// let mut decoder = Decoder::new();
    /// decoder.load_metadata(Path::new("io_elements.json")).unwrap();
    /// ```
    pub fn load_metadata(&mut self, path: &Path) -> Result<()> {
        let table = IoMetadataTable::load_json(path)?;
        self.metadata = Cow::Owned(table);
        Ok(())
    }

    pub fn metadata(&self) -> &IoMetadataTable {
        &self.metadata
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Get statistics about the metadata table in use
    pub fn metadata_stats(&self) -> MetadataStats {
        self.metadata.stats()
    }

    /// Decode exactly `count` consecutive records.
    ///
    /// Records are decoded in order, each starting where the previous one
    /// ended. The first error aborts the whole batch; no partial result is
    /// returned. With `count == 0` the cursor is not touched.
    ///
    /// # Example
    /// ```no_run
    /// use avl_decoder::{ByteCursor, Decoder};
    ///
    /// let data: Vec<u8> = std::fs::read("records.bin").unwrap();
    /// let mut cursor = ByteCursor::new(&data);
    /// let batch = Decoder::new().decode_records(&mut cursor, 2).unwrap();
    /// assert_eq!(batch.len(), 2);
    /// ```
    pub fn decode_records(&self, cursor: &mut ByteCursor<'_>, count: usize) -> Result<DecodedBatch> {
        if count == 0 {
            return Ok(DecodedBatch::default());
        }

        log::debug!(
            "Decoding {} AVL records from offset {} ({} bytes available)",
            count,
            cursor.position(),
            cursor.remaining()
        );

        let metadata = self.config.annotate.then_some(&*self.metadata);

        // Never reserve more than the buffer could hold
        let mut records = Vec::with_capacity(count.min(cursor.remaining() / MIN_RECORD_SIZE));
        for index in 0..count {
            let record = AvlRecordDecoder::decode(cursor, metadata).map_err(|e| {
                log::debug!("Record {} of {} failed: {}", index + 1, count, e);
                e
            })?;

            if self.config.log_count_mismatch && !record.declared_count_matches() {
                log::debug!(
                    "Record {} declares {} IO elements but carries {}",
                    index + 1,
                    record.properties_count,
                    record.io_elements.len()
                );
            }

            records.push(record);
        }

        Ok(DecodedBatch { records })
    }

    /// Decode `count` records from the start of `data`
    pub fn decode_bytes(&self, data: &[u8], count: usize) -> Result<DecodedBatch> {
        let mut cursor = ByteCursor::new(data);
        self.decode_records(&mut cursor, count)
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoder_creation() {
        let decoder = Decoder::new();
        let stats = decoder.metadata_stats();
        assert_eq!(stats.num_properties, 344);
        assert!(decoder.config().annotate);
    }

    #[test]
    fn test_zero_records_leaves_cursor() {
        let decoder = Decoder::new();
        let data = [0xFFu8; 3];
        let mut cursor = ByteCursor::at(&data, 1).unwrap();

        let batch = decoder.decode_records(&mut cursor, 0).unwrap();
        assert!(batch.is_empty());
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_huge_count_on_short_buffer() {
        let decoder = Decoder::new();
        let result = decoder.decode_bytes(&[0u8; 16], usize::MAX);
        assert!(result.is_err());
    }

    #[test]
    fn test_custom_metadata() {
        let table = IoMetadataTable::from_json_str(r#"{ "1": { "label": "Door" } }"#).unwrap();
        let decoder = Decoder::new().with_metadata(table);
        assert_eq!(decoder.metadata().len(), 1);
        assert_eq!(decoder.metadata().get(1).unwrap().label, "Door");
    }
}
