//! Configuration loading and parsing

use anyhow::{bail, Context, Result};
use avl_decoder::DecoderConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main application configuration (loaded from config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub inputs: Vec<InputConfig>,
    #[serde(default)]
    pub metadata: MetadataConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// One record block to decode
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InputConfig {
    pub file: PathBuf,
    /// Number of records in the block
    pub records: usize,
    /// Byte offset of the first record within the file
    #[serde(default)]
    pub offset: usize,
    #[serde(default)]
    pub encoding: InputEncoding,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputEncoding {
    /// Hex for `.hex`/`.txt` files, binary otherwise
    #[default]
    Auto,
    Binary,
    Hex,
}

impl InputEncoding {
    /// Resolve `Auto` against the file extension
    pub fn resolve(self, path: &Path) -> InputEncoding {
        match self {
            InputEncoding::Auto => {
                let extension = path
                    .extension()
                    .and_then(|s| s.to_str())
                    .map(|s| s.to_lowercase());
                match extension.as_deref() {
                    Some("hex") | Some("txt") => InputEncoding::Hex,
                    _ => InputEncoding::Binary,
                }
            }
            other => other,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MetadataConfig {
    /// Custom IO metadata table (JSON) replacing the builtin one
    pub table: Option<PathBuf>,
    #[serde(default = "default_true")]
    pub annotate: bool,
    #[serde(default = "default_true")]
    pub log_count_mismatch: bool,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            table: None,
            annotate: true,
            log_count_mismatch: true,
        }
    }
}

impl MetadataConfig {
    pub fn decoder_config(&self) -> DecoderConfig {
        DecoderConfig::new()
            .with_annotation(self.annotate)
            .with_count_mismatch_logging(self.log_count_mismatch)
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Output file (default: stdout)
    pub file: Option<PathBuf>,
    /// Pretty-print JSON output
    #[serde(default)]
    pub pretty: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Load configuration from a TOML file
///
/// Relative paths inside the file are resolved against the file's directory.
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let mut config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    if let Some(base) = path.parent() {
        config.resolve_paths(base);
    }

    config.validate()?;
    Ok(config)
}

impl AppConfig {
    fn resolve_paths(&mut self, base: &Path) {
        for input in &mut self.inputs {
            input.file = resolve(base, &input.file);
        }
        self.metadata.table = self.metadata.table.as_deref().map(|t| resolve(base, t));
        self.output.file = self.output.file.as_deref().map(|f| resolve(base, f));
    }

    /// Check that every configured input exists
    pub fn validate(&self) -> Result<()> {
        for input in &self.inputs {
            if !input.file.exists() {
                bail!("Input file not found: {:?}", input.file);
            }
        }
        if let Some(table) = &self.metadata.table {
            if !table.exists() {
                bail!("Metadata table not found: {:?}", table);
            }
        }
        Ok(())
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_relative() {
        base.join(path)
    } else {
        path.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let toml_content = r#"
            [[inputs]]
            file = "records.hex"
            records = 2

            [[inputs]]
            file = "frame.bin"
            records = 1
            offset = 10
            encoding = "binary"

            [metadata]
            annotate = false

            [output]
            format = "json"
            pretty = true
        "#;

        let config: AppConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.inputs.len(), 2);
        assert_eq!(config.inputs[0].offset, 0);
        assert_eq!(config.inputs[0].encoding, InputEncoding::Auto);
        assert_eq!(config.inputs[1].offset, 10);
        assert_eq!(config.inputs[1].encoding, InputEncoding::Binary);
        assert!(!config.metadata.annotate);
        assert!(config.metadata.log_count_mismatch);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.pretty);
    }

    #[test]
    fn test_empty_config_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert!(config.inputs.is_empty());
        assert!(config.metadata.annotate);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.metadata.decoder_config().annotate);
    }

    #[test]
    fn test_encoding_resolution() {
        assert_eq!(InputEncoding::Auto.resolve(Path::new("a.hex")), InputEncoding::Hex);
        assert_eq!(InputEncoding::Auto.resolve(Path::new("a.TXT")), InputEncoding::Hex);
        assert_eq!(InputEncoding::Auto.resolve(Path::new("a.bin")), InputEncoding::Binary);
        assert_eq!(InputEncoding::Binary.resolve(Path::new("a.hex")), InputEncoding::Binary);
    }

    #[test]
    fn test_load_config_resolves_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("records.hex"), "00").unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(
            &config_path,
            "[[inputs]]\nfile = \"records.hex\"\nrecords = 1\n",
        )
        .unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.inputs[0].file, dir.path().join("records.hex"));
    }

    #[test]
    fn test_load_config_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "[[inputs]]\nfile = \"gone.bin\"\nrecords = 1\n").unwrap();

        assert!(load_config(&config_path).is_err());
    }
}
