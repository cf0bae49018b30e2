//! Decoder configuration types
//!
//! The decoder needs very little configuration: the record layout is fixed, so
//! the only knobs concern annotation and diagnostics.

use serde::{Deserialize, Serialize};

/// Configuration for the decoder library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoderConfig {
    /// Whether to annotate IO elements from the metadata table
    #[serde(default = "default_true")]
    pub annotate: bool,

    /// Log records whose declared properties count differs from the decoded one
    #[serde(default = "default_true")]
    pub log_count_mismatch: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            annotate: true,
            log_count_mismatch: true,
        }
    }
}

impl DecoderConfig {
    /// Create a new decoder configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: enable or disable metadata annotation
    pub fn with_annotation(mut self, enabled: bool) -> Self {
        self.annotate = enabled;
        self
    }

    /// Builder method: enable or disable count mismatch logging
    pub fn with_count_mismatch_logging(mut self, enabled: bool) -> Self {
        self.log_count_mismatch = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoder_config_builder() {
        let config = DecoderConfig::new()
            .with_annotation(false)
            .with_count_mismatch_logging(false);

        assert!(!config.annotate);
        assert!(!config.log_count_mismatch);
    }

    #[test]
    fn test_defaults_enable_everything() {
        let config = DecoderConfig::default();
        assert!(config.annotate);
        assert!(config.log_count_mismatch);

        let parsed: DecoderConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, config);
    }
}
