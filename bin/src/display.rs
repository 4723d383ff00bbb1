//! Display utilities and output formatting for the pepeng CLI.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::ValueEnum;
use pepeng_lib::prelude::*;
use std::io::{BufWriter, Write};

/// Alert shown when required fields are missing.
pub(crate) const INCOMPLETE_FORM_ALERT: &str = "Harap lengkapi semua data terlebih dahulu.";

/// Application title.
pub(crate) const TITLE: &str = "Pepeng Express";

/// Output format for the shipment list.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Card,
    Csv,
    Json,
    Ndjson,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Card => Self::Card,
            Format::Csv => Self::Csv,
            Format::Json => Self::Json,
            Format::Ndjson => Self::Ndjson,
        }
    }
}

/// Write shipment records in the specified format.
pub(crate) fn write_records<W: Write + Send>(
    records: &[ShipmentRecord],
    format: Format,
    writer: W,
) -> Result<()> {
    match OutputFormat::from(format) {
        OutputFormat::Card => CardFormatter::new().write_records(records, writer)?,
        OutputFormat::Csv => CsvFormatter::new().write_records(records, writer)?,
        OutputFormat::Json => JsonFormatter::new()
            .with_pretty(true)
            .write_records(records, writer)?,
        OutputFormat::Ndjson => JsonFormatter::ndjson().write_records(records, writer)?,
    }
    Ok(())
}

/// Print shipment records to stdout.
pub(crate) fn print_records(records: &[ShipmentRecord], format: Format) -> Result<()> {
    let mut writer = BufWriter::new(std::io::stdout());
    write_records(records, format, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Render a rejected submit the way the form's alert does.
pub(crate) fn alert_message(err: &PepengError) -> String {
    if err.is_missing_field() {
        format!("{INCOMPLETE_FORM_ALERT} ({err})")
    } else {
        err.to_string()
    }
}

/// Parse a YYYY-MM-DD date argument.
pub(crate) fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").with_context(|| format!("Invalid date: {s}"))
}
