//! Shipment logging core for Pepeng Express.
//!
//! This is a facade crate that re-exports functionality from the pepeng
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use pepeng_lib::prelude::*;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//! let mut form = ShipmentForm::new(FixedClock::new(today));
//!
//! // Nothing filled in yet: the submit is rejected and nothing is stored.
//! assert!(form.submit().unwrap_err().is_missing_field());
//!
//! let input = form.input_mut();
//! input.set_id_text("1");
//! input.item_name = "Box".into();
//! input.sender_name = "Ana".into();
//! input.address = "Jl. Merdeka".into();
//! input.recipient_name = "Budi".into();
//! input.set_courier_code("TIKI")?;
//! input.quantity = 2;
//!
//! let record = form.submit()?;
//! assert_eq!(record.estimated_arrival(), NaiveDate::from_ymd_opt(2024, 3, 3).unwrap());
//! assert_eq!(form.records().len(), 1);
//! # Ok::<(), PepengError>(())
//! ```

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use pepeng_types::*;

// Re-export estimation
pub use pepeng_estimate::{
    ArrivalEstimate, ArrivalEstimator, FALLBACK_TRANSIT_DAYS, TransitBasis, TransitTable,
};

// Re-export the form
pub use pepeng_form::{FormInput, RecordStore, ShipmentForm, ValidatedShipment, validate};

// Re-export formatters
#[cfg(feature = "format")]
pub use pepeng_format::{CardFormatter, FormatError, Formatter, OutputFormat, display_date};

#[cfg(feature = "csv")]
pub use pepeng_format::CsvFormatter;

#[cfg(feature = "json")]
pub use pepeng_format::{JsonFormatter, JsonStyle};

/// Prelude module for convenient imports.
///
/// ```
/// use pepeng_lib::prelude::*;
/// ```
pub mod prelude {
    pub use pepeng_types::{
        Clock, Courier, FixedClock, PepengError, Quantity, RequiredField, Result, ShipmentId,
        ShipmentRecord, SystemClock,
    };

    pub use pepeng_estimate::{ArrivalEstimate, ArrivalEstimator, TransitBasis, TransitTable};

    pub use pepeng_form::{FormInput, RecordStore, ShipmentForm};

    #[cfg(feature = "format")]
    pub use pepeng_format::{CardFormatter, Formatter, OutputFormat};

    #[cfg(feature = "csv")]
    pub use pepeng_format::CsvFormatter;

    #[cfg(feature = "json")]
    pub use pepeng_format::JsonFormatter;
}
