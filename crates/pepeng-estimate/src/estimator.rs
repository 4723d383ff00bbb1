//! Arrival date estimation logic.

use chrono::{Days, NaiveDate};
use pepeng_types::{Courier, PepengError, Result};

use crate::transit::{FALLBACK_TRANSIT_DAYS, TransitTable};

/// Where the transit days of an estimate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitBasis {
    /// The courier was found in the transit table.
    Table,
    /// The courier code was unknown and the fallback was used.
    Fallback,
}

impl TransitBasis {
    /// Returns the basis as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Fallback => "fallback",
        }
    }

    /// Returns true if the fallback transit days were used.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback)
    }
}

impl std::fmt::Display for TransitBasis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Estimated arrival for one shipment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrivalEstimate {
    /// Courier code the estimate was made for.
    pub courier: String,
    /// Ship date.
    pub ship_date: NaiveDate,
    /// Calendar days in transit.
    pub transit_days: u32,
    /// Estimated arrival date (ship date + transit days).
    pub arrival: NaiveDate,
    /// Whether the transit days came from the table or the fallback.
    pub basis: TransitBasis,
}

impl std::fmt::Display for ArrivalEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} + {} = {}",
            self.courier,
            self.ship_date,
            ArrivalEstimator::format_transit(self.transit_days),
            self.arrival
        )
    }
}

/// Arrival date estimator backed by the fixed transit table.
#[derive(Debug, Clone, Copy)]
pub struct ArrivalEstimator {
    table: &'static TransitTable,
}

impl ArrivalEstimator {
    /// Creates an estimator over the shared transit table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: TransitTable::global(),
        }
    }

    /// Returns the transit table this estimator reads.
    #[must_use]
    pub const fn table(&self) -> &TransitTable {
        self.table
    }

    /// Estimates the arrival of a shipment sent with a known courier.
    ///
    /// # Errors
    ///
    /// Returns [`PepengError::ArrivalOutOfRange`] if the arrival date would be
    /// past the end of the supported calendar.
    pub fn estimate(&self, courier: Courier, ship_date: NaiveDate) -> Result<ArrivalEstimate> {
        let transit_days = self.table.days(courier);
        let arrival = Self::add_days(ship_date, transit_days)?;

        Ok(ArrivalEstimate {
            courier: courier.as_str().to_string(),
            ship_date,
            transit_days,
            arrival,
            basis: TransitBasis::Table,
        })
    }

    /// Estimates the arrival for a courier given by code.
    ///
    /// The code must match a table code exactly. Anything else, including
    /// lowercase or padded codes, is not an error: it uses
    /// [`FALLBACK_TRANSIT_DAYS`] and reports [`TransitBasis::Fallback`].
    ///
    /// # Errors
    ///
    /// Returns [`PepengError::ArrivalOutOfRange`] if the arrival date would be
    /// past the end of the supported calendar.
    pub fn estimate_code(&self, code: &str, ship_date: NaiveDate) -> Result<ArrivalEstimate> {
        let (transit_days, basis) = self.table.get(code).map_or_else(
            || {
                tracing::debug!(
                    courier = code,
                    days = FALLBACK_TRANSIT_DAYS,
                    "unknown courier, using fallback transit days"
                );
                (FALLBACK_TRANSIT_DAYS, TransitBasis::Fallback)
            },
            |days| (days, TransitBasis::Table),
        );
        let arrival = Self::add_days(ship_date, transit_days)?;

        Ok(ArrivalEstimate {
            courier: code.to_string(),
            ship_date,
            transit_days,
            arrival,
            basis,
        })
    }

    /// Returns only the arrival date for a known courier.
    ///
    /// # Errors
    ///
    /// Returns [`PepengError::ArrivalOutOfRange`] on calendar overflow.
    pub fn arrival_date(&self, courier: Courier, ship_date: NaiveDate) -> Result<NaiveDate> {
        self.estimate(courier, ship_date).map(|est| est.arrival)
    }

    fn add_days(ship_date: NaiveDate, transit_days: u32) -> Result<NaiveDate> {
        ship_date
            .checked_add_days(Days::new(u64::from(transit_days)))
            .ok_or(PepengError::ArrivalOutOfRange {
                ship_date,
                transit_days,
            })
    }

    /// Formats transit days in human-readable form (e.g., "1 day", "3 days").
    #[must_use]
    pub fn format_transit(days: u32) -> String {
        if days == 1 {
            "1 day".to_string()
        } else {
            format!("{days} days")
        }
    }
}

impl Default for ArrivalEstimator {
    fn default() -> Self {
        Self::new()
    }
}
