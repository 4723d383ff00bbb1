//! Error types for pepeng.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for pepeng operations.
pub type Result<T> = std::result::Result<T, PepengError>;

/// Errors that can occur while validating or recording a shipment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PepengError {
    /// One or more required form fields were left empty.
    #[error("Missing required fields: {}", RequiredField::join(.fields))]
    MissingRequiredField {
        /// The empty fields, in check order.
        fields: Vec<RequiredField>,
    },

    /// Courier code outside the supported set.
    #[error("Unknown courier: {0}")]
    InvalidCourier(String),

    /// Quantity outside the accepted range.
    #[error("Quantity {0} out of range (expected 1..=10)")]
    QuantityOutOfRange(u32),

    /// Shipment id that is not a decimal integer.
    #[error("Invalid shipment id: {0:?}")]
    InvalidShipmentId(String),

    /// Arrival date past the end of the supported calendar.
    #[error("Arrival date out of range: {ship_date} + {transit_days} days")]
    ArrivalOutOfRange {
        /// The ship date.
        ship_date: NaiveDate,
        /// The transit days that overflowed.
        transit_days: u32,
    },
}

impl PepengError {
    /// Returns true if this error is a missing-field validation failure.
    #[must_use]
    pub const fn is_missing_field(&self) -> bool {
        matches!(self, Self::MissingRequiredField { .. })
    }
}

impl From<crate::CourierParseError> for PepengError {
    fn from(err: crate::CourierParseError) -> Self {
        Self::InvalidCourier(err.input().to_string())
    }
}

/// Form fields that must be filled before a submit succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredField {
    /// Shipment id.
    Id,
    /// Item name.
    ItemName,
    /// Destination address.
    Address,
    /// Recipient name.
    RecipientName,
    /// Sender name.
    SenderName,
}

impl RequiredField {
    /// Returns the field label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::ItemName => "item name",
            Self::Address => "address",
            Self::RecipientName => "recipient name",
            Self::SenderName => "sender name",
        }
    }

    /// Returns all required fields in check order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Id,
            Self::ItemName,
            Self::Address,
            Self::RecipientName,
            Self::SenderName,
        ]
    }

    fn join(fields: &[Self]) -> String {
        fields
            .iter()
            .map(Self::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for RequiredField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
