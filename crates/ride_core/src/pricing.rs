//! Fare calculation for the ride classes.

use crate::ride::RideClass;

/// Per-mile rate for standard rides, in currency units.
pub const STANDARD_RATE_PER_MILE: f64 = 2.0;

/// Per-mile rate for premium rides, in currency units.
pub const PREMIUM_RATE_PER_MILE: f64 = 3.5;

/// Per-mile rate for the given ride class.
pub fn rate_per_mile(class: RideClass) -> f64 {
    match class {
        RideClass::Standard => STANDARD_RATE_PER_MILE,
        RideClass::Premium => PREMIUM_RATE_PER_MILE,
    }
}

/// Fare for a ride of `class` covering `distance_miles`.
///
/// Formula: `fare = rate_per_mile(class) * distance_miles`
///
/// Distances are taken as given; nothing rejects a negative value.
pub fn fare(class: RideClass, distance_miles: f64) -> f64 {
    rate_per_mile(class) * distance_miles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fare_scales_with_class_rate() {
        assert_eq!(fare(RideClass::Standard, 5.0), 10.0);
        assert_eq!(fare(RideClass::Premium, 10.0), 35.0);
    }

    #[test]
    fn class_rates_match_the_published_constants() {
        assert_eq!(RideClass::Standard.rate_per_mile(), STANDARD_RATE_PER_MILE);
        assert_eq!(RideClass::Premium.rate_per_mile(), PREMIUM_RATE_PER_MILE);
    }

    #[test]
    fn zero_distance_fare_is_zero() {
        assert_eq!(fare(RideClass::Standard, 0.0), 0.0);
        assert_eq!(fare(RideClass::Premium, 0.0), 0.0);
    }
}
