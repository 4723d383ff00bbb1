//! Card (labelled text block) output format.

use chrono::NaiveDate;
use pepeng_types::ShipmentRecord;
use std::io::Write;

use crate::{FormatError, Formatter};

/// Heading printed above the list.
const LIST_HEADING: &str = "Data Terkirim:";

/// Formats a date the way the app's list shows it (e.g., "Fri Mar 01 2024").
#[must_use]
pub fn display_date(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}

/// Card formatter.
#[derive(Debug, Clone, Default)]
pub struct CardFormatter {
    /// Whether to print the list heading.
    include_heading: bool,
}

impl CardFormatter {
    /// Creates a new card formatter with the list heading enabled.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            include_heading: true,
        }
    }

    /// Sets whether to print the list heading.
    #[must_use]
    pub const fn with_heading(mut self, include: bool) -> Self {
        self.include_heading = include;
        self
    }

    /// Writes a single card.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_card<W: Write>(
        &self,
        record: &ShipmentRecord,
        mut writer: W,
    ) -> Result<(), FormatError> {
        let lines = [
            ("ID", record.id().to_string()),
            ("Nama", record.item_name().to_string()),
            ("Pengirim", record.sender_name().to_string()),
            ("Alamat", record.address().to_string()),
            ("Kurir", record.courier().to_string()),
            ("Banyak", record.quantity().to_string()),
            ("Tanggal Kirim", display_date(record.ship_date())),
            ("Estimasi Tiba", display_date(record.estimated_arrival())),
            ("Penerima", record.recipient_name().to_string()),
            ("Pesan", record.message_to_recipient().to_string()),
        ];

        for (label, value) in lines {
            if value.is_empty() {
                writeln!(writer, "{label}:")?;
            } else {
                writeln!(writer, "{label}: {value}")?;
            }
        }
        Ok(())
    }
}

impl Formatter for CardFormatter {
    fn write_records<W: Write + Send>(
        &self,
        records: &[ShipmentRecord],
        mut writer: W,
    ) -> Result<(), FormatError> {
        if self.include_heading {
            writeln!(writer, "{LIST_HEADING}")?;
        }

        for (index, record) in records.iter().enumerate() {
            if index > 0 || self.include_heading {
                writeln!(writer)?;
            }
            self.write_card(record, &mut writer)?;
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        "txt"
    }
}
