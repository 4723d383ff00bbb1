//! Couriers command implementation.
//!
//! This module lists the supported couriers with their fixed transit times.

use anyhow::Result;
use pepeng_lib::FALLBACK_TRANSIT_DAYS;
use pepeng_lib::prelude::*;

/// List couriers and their transit days.
pub(crate) fn list_couriers() -> Result<()> {
    let table = TransitTable::global();

    println!("{:<8} {:<16} {:>8}", "CODE", "NAME", "TRANSIT");
    println!("{}", "-".repeat(34));

    for (courier, days) in table.entries() {
        println!(
            "{:<8} {:<16} {:>8}",
            courier.as_str(),
            courier.label(),
            ArrivalEstimator::format_transit(days)
        );
    }

    println!(
        "\nOther courier codes are estimated at {}.",
        ArrivalEstimator::format_transit(FALLBACK_TRANSIT_DAYS)
    );
    Ok(())
}
