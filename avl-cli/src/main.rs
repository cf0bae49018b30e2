//! AVL Decoder CLI Application
//!
//! This is the command-line interface for the AVL record decoder.
//! It uses the avl-decoder library and adds:
//! - Loading record blocks from binary or hex files
//! - TOML configuration for batches of inputs (decoded in parallel)
//! - Text and JSON reports

use anyhow::{bail, Result};
use avl_decoder::Decoder;
use clap::Parser;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

mod config;
mod input;
mod report;

use config::{AppConfig, InputConfig, InputEncoding, OutputFormat};

/// AVL Decoder - Decode tracking device AVL record blocks
#[derive(Parser, Debug)]
#[command(name = "avl-decode")]
#[command(about = "Decode AVL record blocks (Codec 8 Extended)", long_about = None)]
#[command(version)]
struct Args {
    /// Record block to decode (binary, or hex for .hex/.txt files)
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Treat the input file as hex text regardless of extension
    #[arg(long)]
    hex: bool,

    /// Number of records in the block
    #[arg(short = 'n', long, value_name = "COUNT")]
    records: Option<usize>,

    /// Byte offset of the first record in the input
    #[arg(long, value_name = "BYTES", default_value_t = 0)]
    offset: usize,

    /// Custom IO metadata table (JSON) replacing the builtin one
    #[arg(long, value_name = "FILE")]
    io_table: Option<PathBuf>,

    /// Skip label/dimension/value annotation of IO elements
    #[arg(long)]
    no_annotate: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Path to configuration file (config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the IO metadata table and exit
    #[arg(long)]
    list_properties: bool,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("AVL Decoder CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using decoder library v{}", avl_decoder::VERSION);

    let config = build_config(&args)?;
    let decoder = build_decoder(&config)?;

    if args.list_properties {
        return list_properties(&decoder);
    }

    if config.inputs.is_empty() {
        // No inputs - show help
        println!("AVL Decoder - No input specified");
        println!("\nQuick Start:");
        println!("  avl-decode --input records.hex --records 2");
        println!("  avl-decode --input packet.bin --offset 10 --records 1 --format json");
        println!("\nFor batches of inputs:");
        println!("  avl-decode --config config.toml");
        println!("\nUse --help for more options");
        return Ok(());
    }

    decode_mode(&config, &decoder)
}

/// Merge the config file (if any) with command line overrides
fn build_config(args: &Args) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            config::load_config(path)?
        }
        None => AppConfig::default(),
    };

    if let Some(file) = &args.input {
        let Some(records) = args.records else {
            bail!("--records is required with --input");
        };
        config.inputs = vec![InputConfig {
            file: file.clone(),
            records,
            offset: args.offset,
            encoding: if args.hex {
                InputEncoding::Hex
            } else {
                InputEncoding::Auto
            },
        }];
    }

    if let Some(table) = &args.io_table {
        config.metadata.table = Some(table.clone());
    }
    if args.no_annotate {
        config.metadata.annotate = false;
    }
    if let Some(format) = args.format {
        config.output.format = format;
    }
    if args.pretty {
        config.output.pretty = true;
    }
    if let Some(output) = &args.output {
        config.output.file = Some(output.clone());
    }

    Ok(config)
}

fn build_decoder(config: &AppConfig) -> Result<Decoder> {
    let mut decoder = Decoder::new().with_config(config.metadata.decoder_config());

    if let Some(table) = &config.metadata.table {
        decoder.load_metadata(table)?;
    }

    let stats = decoder.metadata_stats();
    log::debug!(
        "IO metadata: {} properties ({} enumerated, {} with dimension)",
        stats.num_properties,
        stats.num_enumerated,
        stats.num_with_dimension
    );
    Ok(decoder)
}

/// Decode every configured input and write the report
fn decode_mode(config: &AppConfig, decoder: &Decoder) -> Result<()> {
    // Each input gets its own cursor; the decoder is shared read-only
    let reports = config
        .inputs
        .par_iter()
        .map(|input| input::decode_input(decoder, input))
        .collect::<Result<Vec<_>>>()?;

    let total: usize = reports.iter().map(|r| r.records.len()).sum();
    log::info!("Decoded {} records from {} inputs", total, reports.len());

    let output = &config.output;
    match &output.file {
        Some(path) => {
            let file = File::create(path)?;
            let mut out = BufWriter::new(file);
            report::write_reports(&reports, output.format, output.pretty, &mut out)?;
            log::info!("Report written to {:?}", path);
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            report::write_reports(&reports, output.format, output.pretty, &mut out)?;
        }
    }

    Ok(())
}

fn list_properties(decoder: &Decoder) -> Result<()> {
    let table = decoder.metadata();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for id in table.ids() {
        let Some(property) = table.get(id) else {
            continue;
        };
        write!(out, "{:>5}  {}", id, property.label)?;
        if let Some(dimension) = &property.dimension {
            write!(out, " [{}]", dimension)?;
        }
        if let Some(values) = &property.values {
            let mut entries: Vec<_> = values.iter().collect();
            entries.sort_by_key(|(key, _)| key.parse::<i64>().unwrap_or(i64::MAX));
            let rendered: Vec<String> = entries
                .iter()
                .map(|(key, meaning)| format!("{}={}", key, meaning))
                .collect();
            write!(out, "  {{{}}}", rendered.join(", "))?;
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from([
            "avl-decode",
            "--input",
            "records.hex",
            "-n",
            "3",
            "--format",
            "json",
            "--no-annotate",
        ])
        .unwrap();

        let config = build_config(&args).unwrap();
        assert_eq!(config.inputs.len(), 1);
        assert_eq!(config.inputs[0].records, 3);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.metadata.annotate);
    }

    #[test]
    fn test_input_requires_record_count() {
        let args = Args::try_parse_from(["avl-decode", "--input", "records.hex"]).unwrap();
        assert!(build_config(&args).is_err());
    }

    #[test]
    fn test_hex_flag_forces_encoding() {
        let args =
            Args::try_parse_from(["avl-decode", "-i", "dump.bin", "-n", "1", "--hex"]).unwrap();
        let config = build_config(&args).unwrap();
        assert_eq!(config.inputs[0].encoding, InputEncoding::Hex);
    }
}
