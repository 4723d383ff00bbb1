//! Shipment form state, validation and record store for Pepeng Express.
//!
//! This crate provides the single-screen shipment form as plain owned state:
//!
//! - [`FormInput`] - Current values of every input field
//! - [`ValidatedShipment`] - Input that passed validation, ready to record
//! - [`RecordStore`] - Append-only, order-preserving list of records
//! - [`ShipmentForm`] - Controller owning input, store, estimator and clock
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use pepeng_form::ShipmentForm;
//! use pepeng_types::{Courier, FixedClock};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//! let mut form = ShipmentForm::new(FixedClock::new(today));
//!
//! let input = form.input_mut();
//! input.id = "1".into();
//! input.item_name = "Box".into();
//! input.sender_name = "Ana".into();
//! input.address = "Jl. Merdeka".into();
//! input.recipient_name = "Budi".into();
//! input.courier = Courier::Tiki;
//! input.quantity = 2;
//!
//! let record = form.submit().unwrap();
//! assert_eq!(record.estimated_arrival(), NaiveDate::from_ymd_opt(2024, 3, 3).unwrap());
//! assert_eq!(form.records().len(), 1);
//! assert!(form.input().item_name.is_empty());
//! ```

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod form;
mod input;
mod store;
mod validate;

pub use form::ShipmentForm;
pub use input::FormInput;
pub use store::RecordStore;
pub use validate::{ValidatedShipment, validate};
