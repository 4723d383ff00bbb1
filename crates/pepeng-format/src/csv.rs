//! Delimited-text export of the shipment list.

use pepeng_types::ShipmentRecord;
use std::borrow::Cow;
use std::io::Write;

use crate::{FormatError, Formatter};

/// One header row, then one row per shipment with ISO dates.
#[derive(Debug, Clone, Default)]
pub struct CsvFormatter {
    delimiter: char,
    include_header: bool,
}

impl CsvFormatter {
    /// Comma-separated, with a header row.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Uses `delimiter` between fields. Free text containing it gets quoted.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Turns the column-name row on or off.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Tab-separated, with a header row.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: '\t',
            include_header: true,
        }
    }

    /// Quotes a free-text field when it contains the delimiter, a quote or a line break.
    fn quote<'a>(&self, field: &'a str) -> Cow<'a, str> {
        let needs_quotes = field
            .chars()
            .any(|c| c == self.delimiter || c == '"' || c == '\n' || c == '\r');
        if needs_quotes {
            Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
        } else {
            Cow::Borrowed(field)
        }
    }
}

impl Formatter for CsvFormatter {
    fn write_records<W: Write + Send>(
        &self,
        records: &[ShipmentRecord],
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(
                writer,
                "id{d}item_name{d}sender_name{d}recipient_name{d}address{d}message{d}courier{d}quantity{d}ship_date{d}estimated_arrival"
            )?;
        }

        for record in records {
            writeln!(
                writer,
                "{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}",
                record.id(),
                self.quote(record.item_name()),
                self.quote(record.sender_name()),
                self.quote(record.recipient_name()),
                self.quote(record.address()),
                self.quote(record.message_to_recipient()),
                record.courier(),
                record.quantity(),
                record.ship_date().format("%Y-%m-%d"),
                record.estimated_arrival().format("%Y-%m-%d"),
            )?;
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        if self.delimiter == '\t' { "tsv" } else { "csv" }
    }
}
