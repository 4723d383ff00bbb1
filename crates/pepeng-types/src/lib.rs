//! Core types for the Pepeng Express shipment log.
//!
//! This crate provides the fundamental data structures used throughout pepeng:
//!
//! - [`Courier`] - Shipping carrier from the closed JNE / TIKI / POS set
//! - [`Quantity`] - Number of items in a shipment, bounded to 1..=10
//! - [`ShipmentId`] - User-supplied numeric shipment identifier
//! - [`ShipmentRecord`] - One logged shipment with its estimated arrival
//! - [`Clock`] - Source of "today" for ship date defaults
//! - [`PepengError`] - Validation and estimation errors

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod clock;
mod courier;
mod error;
mod quantity;
mod shipment;

pub use clock::{Clock, FixedClock, SystemClock};
pub use courier::{Courier, CourierParseError};
pub use error::{PepengError, RequiredField, Result};
pub use quantity::Quantity;
pub use shipment::{ShipmentId, ShipmentRecord};
