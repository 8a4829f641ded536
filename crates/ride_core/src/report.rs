//! Console reports: walk an agent's ride handles and render each ride's
//! detail block in insertion order. No filtering, no aggregation.

use std::fmt::{self, Write};

use crate::agents::{Driver, Rider};
use crate::registry::RideRegistry;

/// Write the rider report: header, identity lines, then every requested ride.
pub fn write_rider_report<W: Write>(
    out: &mut W,
    rider: &Rider,
    rides: &RideRegistry,
) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "--- Rider Details ---")?;
    writeln!(out, "Rider ID: {}", rider.id)?;
    writeln!(out, "Name: {}", rider.name)?;
    writeln!(out, "Requested Rides:")?;
    for handle in rider.requested_rides() {
        if let Some(ride) = rides.get(*handle) {
            ride.write_details(out)?;
        }
    }
    Ok(())
}

/// Write the driver report: header, identity and rating lines, then every
/// assigned ride.
pub fn write_driver_report<W: Write>(
    out: &mut W,
    driver: &Driver,
    rides: &RideRegistry,
) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "--- Driver Details ---")?;
    writeln!(out, "Driver ID: {}", driver.id)?;
    writeln!(out, "Name: {}", driver.name)?;
    writeln!(out, "Rating: {}", driver.rating)?;
    writeln!(out, "Completed Rides:")?;
    for handle in driver.assigned_rides() {
        if let Some(ride) = rides.get(*handle) {
            ride.write_details(out)?;
        }
    }
    Ok(())
}

/// The rider report as a `String`.
pub fn rider_report(rider: &Rider, rides: &RideRegistry) -> String {
    let mut out = String::new();
    write_rider_report(&mut out, rider, rides).expect("write to String");
    out
}

/// The driver report as a `String`.
pub fn driver_report(driver: &Driver, rides: &RideRegistry) -> String {
    let mut out = String::new();
    write_driver_report(&mut out, driver, rides).expect("write to String");
    out
}
