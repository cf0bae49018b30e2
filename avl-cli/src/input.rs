//! Input loading
//!
//! Inputs are record blocks stored either as raw bytes or as hex text. Hex
//! text may contain whitespace and line breaks anywhere.

use crate::config::{InputConfig, InputEncoding};
use anyhow::{Context, Result};
use avl_decoder::{ByteCursor, DecodedBatch, Decoder};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Errors in hex-encoded input
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum InputError {
    /// Position is counted over the digits only, whitespace excluded
    #[error("Invalid hex input: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// Decoded records of one input
#[derive(Debug, Serialize)]
pub struct InputReport {
    pub source: String,
    pub records: DecodedBatch,
}

/// Parse hex text, ignoring whitespace
pub fn parse_hex(text: &str) -> std::result::Result<Vec<u8>, InputError> {
    let digits: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    Ok(hex::decode(digits)?)
}

/// Read an input file according to its encoding
pub fn read_input(path: &Path, encoding: InputEncoding) -> Result<Vec<u8>> {
    match encoding.resolve(path) {
        InputEncoding::Hex => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {:?}", path))?;
            parse_hex(&text).with_context(|| format!("Invalid hex in {:?}", path))
        }
        _ => fs::read(path).with_context(|| format!("Failed to read input file: {:?}", path)),
    }
}

/// Load and decode one configured input
pub fn decode_input(decoder: &Decoder, input: &InputConfig) -> Result<InputReport> {
    log::info!("Decoding {} records from {:?}", input.records, input.file);

    let data = read_input(&input.file, input.encoding)?;
    let mut cursor = ByteCursor::at(&data, input.offset)
        .with_context(|| format!("Offset {} is past the end of {:?}", input.offset, input.file))?;

    let records = decoder
        .decode_records(&mut cursor, input.records)
        .with_context(|| format!("Failed to decode {:?}", input.file))?;

    if !cursor.is_empty() {
        log::warn!(
            "{} trailing bytes after the last record in {:?}",
            cursor.remaining(),
            input.file
        );
    }

    Ok(InputReport {
        source: input.file.display().to_string(),
        records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("01abFF").unwrap(), vec![0x01, 0xAB, 0xFF]);
        assert_eq!(parse_hex(" 01 ab\nff \n").unwrap(), vec![0x01, 0xAB, 0xFF]);
        assert_eq!(parse_hex("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_parse_hex_errors() {
        assert_eq!(
            parse_hex("ab c"),
            Err(InputError::InvalidHex(hex::FromHexError::OddLength))
        );
        assert_eq!(
            parse_hex("0 g"),
            Err(InputError::InvalidHex(hex::FromHexError::InvalidHexCharacter {
                c: 'g',
                index: 1
            }))
        );
    }

    #[test]
    fn test_decode_input_hex_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("record.hex");
        // Minimal record: fixed header plus five empty IO groups
        fs::write(&path, "ff".repeat(2) + &"00".repeat(38)).unwrap();

        let input = InputConfig {
            file: path,
            records: 1,
            offset: 2,
            encoding: InputEncoding::Auto,
        };
        let report = decode_input(&Decoder::new(), &input).unwrap();
        assert_eq!(report.records.len(), 1);
        assert!(report.source.ends_with("record.hex"));
    }

    #[test]
    fn test_decode_input_offset_past_end() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("record.bin");
        fs::write(&path, [0u8; 4]).unwrap();

        let input = InputConfig {
            file: path,
            records: 1,
            offset: 10,
            encoding: InputEncoding::Binary,
        };
        assert!(decode_input(&Decoder::new(), &input).is_err());
    }
}
