//! Shipment record definitions.

use chrono::NaiveDate;
use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::{Courier, PepengError, Quantity};

/// User-supplied shipment identifier.
///
/// Ids are not required to be unique.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    From,
    Into,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct ShipmentId(u64);

impl ShipmentId {
    /// Parses an id from its decimal text form.
    ///
    /// Leading zeros are accepted (`"007"` is id 7).
    ///
    /// # Errors
    ///
    /// Returns [`PepengError::InvalidShipmentId`] if `text` is empty, contains
    /// anything other than ASCII digits, or does not fit in 64 bits.
    pub fn parse(text: &str) -> Result<Self, PepengError> {
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PepengError::InvalidShipmentId(text.to_string()));
        }
        text.parse::<u64>()
            .map(Self)
            .map_err(|_| PepengError::InvalidShipmentId(text.to_string()))
    }

    /// Returns the id as a plain integer.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl FromStr for ShipmentId {
    type Err = PepengError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// One logged shipment.
///
/// Records are immutable: every accessor borrows, and nothing in the
/// workspace hands out a mutable record once it has been stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShipmentRecord {
    id: ShipmentId,
    item_name: String,
    sender_name: String,
    recipient_name: String,
    address: String,
    message_to_recipient: String,
    courier: Courier,
    quantity: Quantity,
    ship_date: NaiveDate,
    estimated_arrival: NaiveDate,
}

impl ShipmentRecord {
    /// Creates a new record from already validated values.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: ShipmentId,
        item_name: impl Into<String>,
        sender_name: impl Into<String>,
        recipient_name: impl Into<String>,
        address: impl Into<String>,
        message_to_recipient: impl Into<String>,
        courier: Courier,
        quantity: Quantity,
        ship_date: NaiveDate,
        estimated_arrival: NaiveDate,
    ) -> Self {
        Self {
            id,
            item_name: item_name.into(),
            sender_name: sender_name.into(),
            recipient_name: recipient_name.into(),
            address: address.into(),
            message_to_recipient: message_to_recipient.into(),
            courier,
            quantity,
            ship_date,
            estimated_arrival,
        }
    }

    /// Returns the shipment id.
    #[must_use]
    pub const fn id(&self) -> ShipmentId {
        self.id
    }

    /// Returns the item name.
    #[must_use]
    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    /// Returns the sender name.
    #[must_use]
    pub fn sender_name(&self) -> &str {
        &self.sender_name
    }

    /// Returns the recipient name.
    #[must_use]
    pub fn recipient_name(&self) -> &str {
        &self.recipient_name
    }

    /// Returns the destination address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the message for the recipient, possibly empty.
    #[must_use]
    pub fn message_to_recipient(&self) -> &str {
        &self.message_to_recipient
    }

    /// Returns the courier.
    #[must_use]
    pub const fn courier(&self) -> Courier {
        self.courier
    }

    /// Returns the item quantity.
    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Returns the ship date.
    #[must_use]
    pub const fn ship_date(&self) -> NaiveDate {
        self.ship_date
    }

    /// Returns the estimated arrival date.
    #[must_use]
    pub const fn estimated_arrival(&self) -> NaiveDate {
        self.estimated_arrival
    }

    /// Returns true if a message for the recipient was given.
    #[must_use]
    pub fn has_message(&self) -> bool {
        !self.message_to_recipient.is_empty()
    }
}

impl std::fmt::Display for ShipmentRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{} {} x{} via {} ({} -> {})",
            self.id, self.item_name, self.quantity, self.courier, self.ship_date, self.estimated_arrival
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_shipment_id_parse() {
        assert_eq!(ShipmentId::parse("1").unwrap().get(), 1);
        assert_eq!(ShipmentId::parse("007").unwrap().get(), 7);
        assert_eq!("42".parse::<ShipmentId>().unwrap(), ShipmentId::from(42));
        assert!(ShipmentId::parse("").is_err());
        assert!(ShipmentId::parse("12a").is_err());
        assert!(ShipmentId::parse("-1").is_err());
        assert!(ShipmentId::parse(" 1").is_err());
        assert!(ShipmentId::parse("99999999999999999999999").is_err());
    }

    #[test]
    fn test_record_accessors() {
        let record = ShipmentRecord::new(
            ShipmentId::from(1),
            "Box",
            "Ana",
            "Budi",
            "Jl. Merdeka",
            "",
            Courier::Tiki,
            Quantity::new(2).unwrap(),
            date(2024, 3, 1),
            date(2024, 3, 3),
        );

        assert_eq!(record.id().get(), 1);
        assert_eq!(record.item_name(), "Box");
        assert_eq!(record.sender_name(), "Ana");
        assert_eq!(record.recipient_name(), "Budi");
        assert_eq!(record.address(), "Jl. Merdeka");
        assert!(!record.has_message());
        assert_eq!(record.courier(), Courier::Tiki);
        assert_eq!(record.quantity().get(), 2);
        assert_eq!(record.estimated_arrival(), date(2024, 3, 3));
        assert_eq!(
            record.to_string(),
            "#1 Box x2 via TIKI (2024-03-01 -> 2024-03-03)"
        );
    }

    #[test]
    fn test_record_serializes_dates_as_iso() {
        let record = ShipmentRecord::new(
            ShipmentId::from(9),
            "Lamp",
            "Sari",
            "Dewi",
            "Jl. Sudirman 1",
            "Hati-hati",
            Courier::Pos,
            Quantity::MAX,
            date(2024, 12, 30),
            date(2025, 1, 4),
        );

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], 9);
        assert_eq!(json["courier"], "POS");
        assert_eq!(json["quantity"], 10);
        assert_eq!(json["ship_date"], "2024-12-30");
        assert_eq!(json["estimated_arrival"], "2025-01-04");
    }
}
