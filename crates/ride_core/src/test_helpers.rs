//! Shared fixtures for unit and integration tests.

use crate::agents::{Driver, Rider};
use crate::registry::{RideHandle, RideRegistry};
use crate::ride::{Ride, RideClass};

/// Standard sample ride: Downtown to Uptown, 5 miles.
pub fn sample_standard_ride() -> Ride {
    Ride::new(1, "Downtown", "Uptown", 5.0, RideClass::Standard)
}

/// Premium sample ride: Airport to Hotel, 10 miles.
pub fn sample_premium_ride() -> Ride {
    Ride::new(2, "Airport", "Hotel", 10.0, RideClass::Premium)
}

/// Registry preloaded with the two sample rides.
pub fn sample_registry() -> (RideRegistry, RideHandle, RideHandle) {
    let mut rides = RideRegistry::new();
    let standard = rides.insert(sample_standard_ride());
    let premium = rides.insert(sample_premium_ride());
    (rides, standard, premium)
}

/// The sample rider with no rides requested yet.
pub fn sample_rider() -> Rider {
    Rider::new(1, "Alice")
}

/// The sample driver with no rides assigned yet.
pub fn sample_driver() -> Driver {
    Driver::new(101, "Bob", 4.8)
}
