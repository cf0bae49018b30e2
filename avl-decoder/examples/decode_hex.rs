//! Decode an AVL record block given as a hex string
//!
//! Usage:
//!   cargo run --example decode_hex -- <hex> <record_count>
//!
//! The hex string must start at the first record (after codec id and count).

use avl_decoder::{Decoder, IoValue};
use std::env;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <hex> <record_count>", args[0]);
        std::process::exit(1);
    }

    let data = match hex::decode(args[1].trim()) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Input is not valid hex: {}", e);
            std::process::exit(1);
        }
    };
    let count: usize = match args[2].parse() {
        Ok(n) => n,
        Err(e) => {
            eprintln!("Invalid record count: {}", e);
            std::process::exit(1);
        }
    };

    let decoder = Decoder::new();
    let batch = match decoder.decode_bytes(&data, count) {
        Ok(batch) => batch,
        Err(e) => {
            eprintln!("Decode error: {}", e);
            std::process::exit(2);
        }
    };

    for (i, record) in batch.iter().enumerate() {
        println!(
            "#{} {} priority={} lat={:.7} lon={:.7} speed={} event={}",
            i + 1,
            record.timestamp,
            record.priority,
            record.gps.latitude,
            record.gps.longitude,
            record.gps.speed,
            record.event_id
        );
        if let Some(trip) = record.trip_event() {
            println!("   {}", trip);
        }
        for element in &record.io_elements {
            let value = match &element.value {
                IoValue::Hex(hex) => format!("0x{}", hex),
                other => other.to_string(),
            };
            println!(
                "   [{:>4}] {:<32} {} {} {}",
                element.id,
                if element.label.is_empty() { "?" } else { &element.label },
                value,
                element.dimension,
                element.value_human
            );
        }
    }
}
