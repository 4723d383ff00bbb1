//! Arrival date estimation for the Pepeng Express shipment log.
//!
//! This crate provides the transit table and the estimator built on it:
//!
//! - [`TransitTable`] - Fixed transit days per courier with a fallback
//! - [`ArrivalEstimator`] - Computes arrival dates from ship dates
//! - [`ArrivalEstimate`] - Estimated arrival with the inputs that produced it
//! - [`TransitBasis`] - Whether the table or the fallback was used
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use pepeng_estimate::ArrivalEstimator;
//! use pepeng_types::Courier;
//!
//! let shipped = NaiveDate::from_ymd_opt(2024, 1, 30).unwrap();
//! let estimate = ArrivalEstimator::new().estimate(Courier::Jne, shipped).unwrap();
//! assert_eq!(estimate.arrival, NaiveDate::from_ymd_opt(2024, 2, 2).unwrap());
//! ```

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod estimator;
mod transit;

pub use estimator::{ArrivalEstimate, ArrivalEstimator, TransitBasis};
pub use transit::{FALLBACK_TRANSIT_DAYS, TransitTable};
