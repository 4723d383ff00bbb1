//! Estimate command implementation.
//!
//! This module prints the estimated arrival date for a courier and ship date.

use crate::display::{TITLE, parse_date};
use anyhow::Result;
use pepeng_lib::display_date;
use pepeng_lib::prelude::*;

/// Show the estimated arrival for a courier code and ship date.
pub(crate) fn show_estimate(courier: &str, date: Option<&str>, clock: &dyn Clock) -> Result<()> {
    let ship_date = match date {
        Some(s) => parse_date(s)?,
        None => clock.today(),
    };

    let estimate = ArrivalEstimator::new().estimate_code(courier, ship_date)?;

    println!("{TITLE}");
    println!("Courier:        {}", estimate.courier);
    println!("Ship date:      {}", display_date(estimate.ship_date));
    println!(
        "Transit:        {}",
        ArrivalEstimator::format_transit(estimate.transit_days)
    );
    println!("Estimated:      {}", display_date(estimate.arrival));

    if estimate.basis.is_fallback() {
        println!("\nNote: '{courier}' is not a known courier; the default transit time was used.");
    }

    Ok(())
}
