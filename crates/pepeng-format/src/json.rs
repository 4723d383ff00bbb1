//! JSON export of the shipment list.

use pepeng_types::ShipmentRecord;
use std::io::Write;

use crate::{FormatError, Formatter};

/// Layout of the JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// The whole list as one array.
    #[default]
    Array,
    /// One record object per line.
    Ndjson,
}

/// Writes records using their serde representation (ISO dates, courier codes).
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    style: JsonStyle,
    pretty: bool,
}

impl JsonFormatter {
    /// Array output, compact.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_layout(JsonStyle::Array)
    }

    /// One record per line.
    #[must_use]
    pub const fn ndjson() -> Self {
        Self::with_layout(JsonStyle::Ndjson)
    }

    const fn with_layout(style: JsonStyle) -> Self {
        Self {
            style,
            pretty: false,
        }
    }

    /// Indents array output. NDJSON lines stay compact regardless.
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Switches the layout.
    #[must_use]
    pub const fn with_style(mut self, style: JsonStyle) -> Self {
        self.style = style;
        self
    }

    fn write_array<W: Write>(
        &self,
        records: &[ShipmentRecord],
        writer: &mut W,
    ) -> Result<(), FormatError> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, records)?;
        } else {
            serde_json::to_writer(&mut *writer, records)?;
        }
        writeln!(writer)?;
        Ok(())
    }

    fn write_lines<W: Write>(
        records: &[ShipmentRecord],
        writer: &mut W,
    ) -> Result<(), FormatError> {
        for record in records {
            serde_json::to_writer(&mut *writer, record)?;
            writeln!(writer)?;
        }
        Ok(())
    }
}

impl Formatter for JsonFormatter {
    fn write_records<W: Write + Send>(
        &self,
        records: &[ShipmentRecord],
        mut writer: W,
    ) -> Result<(), FormatError> {
        match self.style {
            JsonStyle::Array => self.write_array(records, &mut writer),
            JsonStyle::Ndjson => Self::write_lines(records, &mut writer),
        }
    }

    fn extension(&self) -> &str {
        match self.style {
            JsonStyle::Array => "json",
            JsonStyle::Ndjson => "ndjson",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pepeng_types::{Courier, Quantity, ShipmentId};

    fn pos_record(id: u64) -> ShipmentRecord {
        ShipmentRecord::new(
            ShipmentId::from(id),
            "Box",
            "Ana",
            "Budi",
            "Jl. Merdeka",
            "",
            Courier::Pos,
            Quantity::MIN,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 6).unwrap(),
        )
    }

    fn render(formatter: &JsonFormatter, records: &[ShipmentRecord]) -> String {
        let mut out = Vec::new();
        formatter.write_records(records, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_array_uses_courier_code_and_iso_dates() {
        let out = render(&JsonFormatter::new(), &[pos_record(1)]);

        assert!(out.starts_with("[{"));
        assert!(out.contains("\"courier\":\"POS\""));
        assert!(out.contains("\"estimated_arrival\":\"2024-03-06\""));
    }

    #[test]
    fn test_ndjson_one_line_per_shipment() {
        let formatter = JsonFormatter::ndjson().with_pretty(true);
        let out = render(&formatter, &[pos_record(1), pos_record(2)]);

        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("{\"id\":2"));
        assert_eq!(formatter.extension(), "ndjson");
    }

    #[test]
    fn test_pretty_array_is_indented() {
        let out = render(&JsonFormatter::new().with_pretty(true), &[pos_record(1)]);
        assert!(out.contains("\n  {"));
    }

    #[test]
    fn test_no_shipments_is_empty_array() {
        assert_eq!(render(&JsonFormatter::new(), &[]), "[]\n");
        assert_eq!(render(&JsonFormatter::ndjson(), &[]), "");
    }
}
