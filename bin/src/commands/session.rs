//! Session command implementation.
//!
//! This module runs the interactive form: fields are prompted one by one,
//! submitted, and the growing shipment list is printed after each entry.

use crate::display::{Format, TITLE, alert_message, print_records};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use inquire::validator::Validation;
use inquire::{Confirm, CustomType, CustomUserError, InquireError, Select, Text};
use pepeng_lib::prelude::*;

/// Prompt every form field, starting from the current values.
///
/// A rejected submit leaves the input untouched, so the next round
/// shows what was typed before.
fn prompt_input(input: &mut FormInput) -> Result<(), InquireError> {
    let id = Text::new("ID Barang:")
        .with_initial_value(&input.id)
        .with_help_message("digits only")
        .prompt()?;
    input.set_id_text(&id);

    input.item_name = Text::new("Nama Barang:")
        .with_initial_value(&input.item_name)
        .prompt()?;
    input.sender_name = Text::new("Nama Pengirim:")
        .with_initial_value(&input.sender_name)
        .prompt()?;
    input.address = Text::new("Alamat:")
        .with_initial_value(&input.address)
        .prompt()?;

    let couriers = Courier::all();
    let labels: Vec<&str> = couriers.iter().map(Courier::label).collect();
    let cursor = couriers
        .iter()
        .position(|c| *c == input.courier)
        .unwrap_or_default();
    let choice = Select::new("Metode Pengiriman:", labels)
        .with_starting_cursor(cursor)
        .raw_prompt()?;
    input.courier = couriers[choice.index];

    input.quantity = CustomType::<u32>::new("Banyak Barang:")
        .with_default(input.quantity)
        .with_help_message("1-10")
        .with_error_message("Please type a whole number")
        .with_validator(|value: &u32| -> Result<Validation, CustomUserError> {
            Ok(match Quantity::new(*value) {
                Ok(_) => Validation::Valid,
                Err(err) => Validation::Invalid(err.to_string().into()),
            })
        })
        .prompt()?;

    input.ship_date = CustomType::<NaiveDate>::new("Tanggal Kirim:")
        .with_default(input.ship_date)
        .with_help_message("YYYY-MM-DD")
        .with_error_message("Please type a date as YYYY-MM-DD")
        .prompt()?;

    input.recipient_name = Text::new("Nama Penerima:")
        .with_initial_value(&input.recipient_name)
        .prompt()?;
    input.message = Text::new("Pesan untuk Penerima:")
        .with_initial_value(&input.message)
        .prompt()?;

    Ok(())
}

/// Maps Esc and Ctrl-C to `None` so the session ends cleanly.
fn unless_cancelled<T>(result: Result<T, InquireError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(err) => Err(err).context("Prompt failed"),
    }
}

/// Run the interactive form until the user stops.
pub(crate) fn run_session(format: Format, clock: Box<dyn Clock>) -> Result<()> {
    let mut form = ShipmentForm::new(clock);
    println!("{TITLE}\n");

    loop {
        if unless_cancelled(prompt_input(form.input_mut()))?.is_none() {
            break;
        }

        match form.submit() {
            Ok(record) => println!("\nSaved {record}\n"),
            Err(err) => println!("\n{}\n", alert_message(&err)),
        }

        if !form.records().is_empty() {
            print_records(form.records(), format)?;
        }

        let again = Confirm::new("Add another shipment?")
            .with_default(true)
            .prompt();
        if unless_cancelled(again)? != Some(true) {
            break;
        }
    }

    tracing::info!(records = form.records().len(), "Session finished");
    println!("\n{} shipment(s) recorded.", form.records().len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_ends_session() {
        let cancelled: Result<(), InquireError> = Err(InquireError::OperationCanceled);
        assert!(unless_cancelled(cancelled).unwrap().is_none());

        let interrupted: Result<(), InquireError> = Err(InquireError::OperationInterrupted);
        assert!(unless_cancelled(interrupted).unwrap().is_none());
    }

    #[test]
    fn test_other_prompt_errors_propagate() {
        let failed: Result<(), InquireError> = Err(InquireError::NotTTY);
        assert!(unless_cancelled(failed).is_err());
        assert_eq!(unless_cancelled(Ok(3)).unwrap(), Some(3));
    }
}
