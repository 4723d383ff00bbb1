//! Submit-time validation.

use chrono::NaiveDate;
use pepeng_types::{
    Courier, PepengError, Quantity, Result, ShipmentId, ShipmentRecord,
};

use crate::FormInput;

/// Form input that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedShipment {
    /// Parsed shipment id.
    pub id: ShipmentId,
    /// Item name.
    pub item_name: String,
    /// Sender name.
    pub sender_name: String,
    /// Recipient name.
    pub recipient_name: String,
    /// Destination address.
    pub address: String,
    /// Message for the recipient, possibly empty.
    pub message: String,
    /// Courier.
    pub courier: Courier,
    /// Quantity within 1..=10.
    pub quantity: Quantity,
    /// Ship date.
    pub ship_date: NaiveDate,
}

impl ValidatedShipment {
    /// Turns the validated input into a record with the given arrival date.
    #[must_use]
    pub fn into_record(self, estimated_arrival: NaiveDate) -> ShipmentRecord {
        ShipmentRecord::new(
            self.id,
            self.item_name,
            self.sender_name,
            self.recipient_name,
            self.address,
            self.message,
            self.courier,
            self.quantity,
            self.ship_date,
            estimated_arrival,
        )
    }
}

/// Validates form input without touching it.
///
/// Required fields are checked first and every empty one is reported at
/// once. The id must then parse as a decimal integer and the quantity must
/// be within 1..=10.
///
/// # Errors
///
/// Returns [`PepengError::MissingRequiredField`], [`PepengError::InvalidShipmentId`]
/// or [`PepengError::QuantityOutOfRange`].
pub fn validate(input: &FormInput) -> Result<ValidatedShipment> {
    let missing = input.missing_fields();
    if !missing.is_empty() {
        return Err(PepengError::MissingRequiredField { fields: missing });
    }

    let id = ShipmentId::parse(&input.id)?;
    let quantity = Quantity::new(input.quantity)?;

    Ok(ValidatedShipment {
        id,
        item_name: input.item_name.clone(),
        sender_name: input.sender_name.clone(),
        recipient_name: input.recipient_name.clone(),
        address: input.address.clone(),
        message: input.message.clone(),
        courier: input.courier,
        quantity,
        ship_date: input.ship_date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pepeng_types::RequiredField;

    fn filled_input() -> FormInput {
        let mut input = FormInput::new(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        input.id = "1".into();
        input.item_name = "Box".into();
        input.sender_name = "Ana".into();
        input.address = "Jl. Merdeka".into();
        input.recipient_name = "Budi".into();
        input
    }

    #[test]
    fn test_valid_input() {
        let validated = validate(&filled_input()).unwrap();
        assert_eq!(validated.id.get(), 1);
        assert_eq!(validated.quantity.get(), 1);
        assert!(validated.message.is_empty());
    }

    #[test]
    fn test_missing_fields_reported_together() {
        let mut input = filled_input();
        input.item_name.clear();
        input.sender_name.clear();

        assert_eq!(
            validate(&input),
            Err(PepengError::MissingRequiredField {
                fields: vec![RequiredField::ItemName, RequiredField::SenderName],
            })
        );
    }

    #[test]
    fn test_missing_fields_take_precedence() {
        let mut input = filled_input();
        input.item_name.clear();
        input.quantity = 0;
        input.id = "x".into();

        assert!(validate(&input).unwrap_err().is_missing_field());
    }

    #[test]
    fn test_message_is_optional() {
        let mut input = filled_input();
        input.message = "Titip salam".into();
        assert_eq!(validate(&input).unwrap().message, "Titip salam");
    }

    #[test]
    fn test_quantity_out_of_range() {
        let mut input = filled_input();
        input.quantity = 11;
        assert_eq!(validate(&input), Err(PepengError::QuantityOutOfRange(11)));

        input.quantity = 0;
        assert_eq!(validate(&input), Err(PepengError::QuantityOutOfRange(0)));
    }

    #[test]
    fn test_non_numeric_id() {
        let mut input = filled_input();
        input.id = "12b".into();
        assert_eq!(
            validate(&input),
            Err(PepengError::InvalidShipmentId("12b".to_string()))
        );
    }

    #[test]
    fn test_into_record() {
        let arrival = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let record = validate(&filled_input()).unwrap().into_record(arrival);

        assert_eq!(record.item_name(), "Box");
        assert_eq!(record.estimated_arrival(), arrival);
    }
}
