//! Form input state.

use chrono::NaiveDate;
use pepeng_types::{Courier, Quantity, RequiredField, Result};

/// Current values of every field on the shipment form.
///
/// Text fields hold exactly what was typed; nothing is trimmed. The quantity
/// is kept as a raw integer so that programmatic callers can be rejected at
/// submit time instead of being clamped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInput {
    /// Shipment id as typed (digits only when set through [`Self::set_id_text`]).
    pub id: String,
    /// Item name.
    pub item_name: String,
    /// Sender name.
    pub sender_name: String,
    /// Optional message for the recipient.
    pub message: String,
    /// Destination address.
    pub address: String,
    /// Selected courier.
    pub courier: Courier,
    /// Item quantity, expected within 1..=10.
    pub quantity: u32,
    /// Ship date.
    pub ship_date: NaiveDate,
    /// Recipient name.
    pub recipient_name: String,
}

impl FormInput {
    /// Creates a blank form whose ship date is `today`.
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self {
            id: String::new(),
            item_name: String::new(),
            sender_name: String::new(),
            message: String::new(),
            address: String::new(),
            courier: Courier::default(),
            quantity: u32::from(Quantity::default().get()),
            ship_date: today,
            recipient_name: String::new(),
        }
    }

    /// Restores every field to its default.
    pub fn reset(&mut self, today: NaiveDate) {
        *self = Self::new(today);
    }

    /// Returns true if every field holds its default for `today`.
    #[must_use]
    pub fn is_blank(&self, today: NaiveDate) -> bool {
        *self == Self::new(today)
    }

    /// Sets the id from free text, keeping only ASCII digits.
    pub fn set_id_text(&mut self, text: &str) {
        self.id = text.chars().filter(char::is_ascii_digit).collect();
    }

    /// Sets the courier from its code.
    ///
    /// # Errors
    ///
    /// Returns [`pepeng_types::PepengError::InvalidCourier`] for an unknown
    /// code; the current selection is kept.
    pub fn set_courier_code(&mut self, code: &str) -> Result<()> {
        self.courier = code.parse::<Courier>()?;
        Ok(())
    }

    /// Returns the required fields that are still empty, in check order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<RequiredField> {
        RequiredField::all()
            .iter()
            .copied()
            .filter(|field| self.field(*field).is_empty())
            .collect()
    }

    /// Returns the current text of a required field.
    #[must_use]
    pub fn field(&self, field: RequiredField) -> &str {
        match field {
            RequiredField::Id => &self.id,
            RequiredField::ItemName => &self.item_name,
            RequiredField::Address => &self.address,
            RequiredField::RecipientName => &self.recipient_name,
            RequiredField::SenderName => &self.sender_name,
        }
    }
}
