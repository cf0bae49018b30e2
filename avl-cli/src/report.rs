//! Report generation
//!
//! Renders decoded inputs as a plain text listing or as JSON.

use crate::config::OutputFormat;
use crate::input::InputReport;
use anyhow::Result;
use avl_decoder::{AvlRecord, IoElement, IoValue};
use chrono::SecondsFormat;
use std::io::Write;

/// Write all reports in the requested format
pub fn write_reports<W: Write>(
    reports: &[InputReport],
    format: OutputFormat,
    pretty: bool,
    out: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(reports, out)?,
        OutputFormat::Json => {
            if pretty {
                serde_json::to_writer_pretty(&mut *out, reports)?;
            } else {
                serde_json::to_writer(&mut *out, reports)?;
            }
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn write_text<W: Write>(reports: &[InputReport], out: &mut W) -> std::io::Result<()> {
    for report in reports {
        writeln!(
            out,
            "== {} ({} records, {} IO elements)",
            report.source,
            report.records.len(),
            report.records.io_element_count()
        )?;

        for (i, record) in report.records.iter().enumerate() {
            write_record(i + 1, record, out)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn write_record<W: Write>(number: usize, record: &AvlRecord, out: &mut W) -> std::io::Result<()> {
    writeln!(
        out,
        "#{} {}  priority {}  event {}",
        number,
        record.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        record.priority,
        record.event_id
    )?;

    let gps = &record.gps;
    writeln!(
        out,
        "   GPS  lat {:.7}  lon {:.7}  alt {} m  angle {}  sats {}  speed {} km/h",
        gps.latitude, gps.longitude, gps.altitude, gps.angle, gps.satellites, gps.speed
    )?;

    if let Some(trip) = record.trip_event() {
        writeln!(out, "   {}", trip)?;
    }

    if record.declared_count_matches() {
        writeln!(out, "   IO   {} elements", record.io_elements.len())?;
    } else {
        writeln!(
            out,
            "   IO   {} elements (declared {})",
            record.io_elements.len(),
            record.properties_count
        )?;
    }

    for element in &record.io_elements {
        writeln!(out, "   {}", format_element(element))?;
    }
    Ok(())
}

/// One-line rendering of an IO element
pub fn format_element(element: &IoElement) -> String {
    let label = if element.label.is_empty() {
        "(unknown)"
    } else {
        element.label.as_str()
    };

    let mut line = format!("[{:>4}] {:<36} {}", element.id, label, format_value(&element.value));
    if !element.dimension.is_empty() {
        line.push(' ');
        line.push_str(&element.dimension);
    }
    if !element.value_human.is_empty() {
        line.push_str(&format!(" \"{}\"", element.value_human));
    }
    line
}

fn format_value(value: &IoValue) -> String {
    match value {
        IoValue::Integer(v) => v.to_string(),
        IoValue::Float(v) => format!("{}", v),
        IoValue::Hex(v) => format!("0x{}", v),
    }
}
