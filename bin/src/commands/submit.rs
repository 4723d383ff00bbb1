//! Submit command implementation.
//!
//! This module records a single shipment from command-line arguments and
//! prints the resulting list.

use crate::display::{Format, alert_message, parse_date, print_records};
use anyhow::{Result, bail};
use clap::Args;
use pepeng_lib::prelude::*;

/// Form fields given on the command line.
///
/// Omitted text fields are submitted empty, so the required-field check
/// behaves exactly as on the form.
#[derive(Args, Debug, Clone)]
pub(crate) struct ShipmentArgs {
    /// Shipment id (digits)
    #[arg(long, default_value = "")]
    pub(crate) id: String,

    /// Item name
    #[arg(long, default_value = "")]
    pub(crate) item: String,

    /// Sender name
    #[arg(long, default_value = "")]
    pub(crate) sender: String,

    /// Destination address
    #[arg(long, default_value = "")]
    pub(crate) address: String,

    /// Recipient name
    #[arg(long, default_value = "")]
    pub(crate) recipient: String,

    /// Message for the recipient
    #[arg(long, default_value = "")]
    pub(crate) message: String,

    /// Courier (JNE, TIKI, POS)
    #[arg(short, long, default_value = "JNE")]
    pub(crate) courier: String,

    /// Number of items (1-10)
    #[arg(short = 'n', long, default_value = "1")]
    pub(crate) quantity: u32,

    /// Ship date (YYYY-MM-DD). Defaults to today.
    #[arg(short, long)]
    pub(crate) date: Option<String>,
}

impl ShipmentArgs {
    /// Copy the arguments into the form input.
    pub(crate) fn apply(&self, input: &mut FormInput) -> Result<()> {
        input.id.clone_from(&self.id);
        input.item_name.clone_from(&self.item);
        input.sender_name.clone_from(&self.sender);
        input.address.clone_from(&self.address);
        input.recipient_name.clone_from(&self.recipient);
        input.message.clone_from(&self.message);
        input.set_courier_code(&self.courier)?;
        input.quantity = self.quantity;
        if let Some(date) = &self.date {
            input.ship_date = parse_date(date)?;
        }
        Ok(())
    }
}

/// Record one shipment and print the list.
pub(crate) fn submit(args: &ShipmentArgs, format: Format, clock: Box<dyn Clock>) -> Result<()> {
    let mut form = ShipmentForm::new(clock);
    args.apply(form.input_mut())?;

    if let Err(err) = form.submit() {
        bail!("{}", alert_message(&err));
    }

    print_records(form.records(), format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn args() -> ShipmentArgs {
        ShipmentArgs {
            id: "1".into(),
            item: "Box".into(),
            sender: "Ana".into(),
            address: "Jl. Merdeka".into(),
            recipient: "Budi".into(),
            message: String::new(),
            courier: "TIKI".into(),
            quantity: 2,
            date: Some("2024-03-01".into()),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
    }

    #[test]
    fn test_apply_fills_input() {
        let mut input = FormInput::new(today());
        args().apply(&mut input).unwrap();

        assert_eq!(input.id, "1");
        assert_eq!(input.courier, Courier::Tiki);
        assert_eq!(input.quantity, 2);
        assert_eq!(input.ship_date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert!(input.missing_fields().is_empty());
    }

    #[test]
    fn test_apply_without_date_keeps_today() {
        let mut input = FormInput::new(today());
        let mut args = args();
        args.date = None;
        args.apply(&mut input).unwrap();

        assert_eq!(input.ship_date, today());
    }

    #[test]
    fn test_apply_rejects_unknown_courier() {
        let mut input = FormInput::new(today());
        let mut args = args();
        args.courier = "DHL".into();

        let err = args.apply(&mut input).unwrap_err();
        assert_eq!(err.to_string(), "Unknown courier: DHL");
    }

    #[test]
    fn test_submit_missing_item_fails() {
        let mut args = args();
        args.item.clear();

        let err = submit(&args, Format::Json, Box::new(FixedClock::new(today()))).unwrap_err();
        assert!(err.to_string().starts_with("Harap lengkapi"));
        assert!(err.to_string().contains("item name"));
    }
}
