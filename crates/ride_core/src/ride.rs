use std::fmt::{self, Write};

use serde::{Deserialize, Serialize};

use crate::pricing;

/// Service class of a ride. Each class carries its own per-mile rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RideClass {
    Standard,
    Premium,
}

impl RideClass {
    /// Label used in ride detail blocks ("Standard" / "Premium").
    pub fn label(self) -> &'static str {
        match self {
            RideClass::Standard => "Standard",
            RideClass::Premium => "Premium",
        }
    }

    /// Per-mile rate in currency units.
    pub fn rate_per_mile(self) -> f64 {
        pricing::rate_per_mile(self)
    }
}

/// One ride: trip data plus the class that decides its fare. Immutable after
/// construction; shared via [crate::registry::RideHandle], never by value.
#[derive(Debug, Clone, PartialEq)]
pub struct Ride {
    pub id: u64,
    pub pickup: String,
    pub dropoff: String,
    pub distance_miles: f64,
    pub class: RideClass,
}

impl Ride {
    pub fn new(
        id: u64,
        pickup: impl Into<String>,
        dropoff: impl Into<String>,
        distance_miles: f64,
        class: RideClass,
    ) -> Self {
        Self {
            id,
            pickup: pickup.into(),
            dropoff: dropoff.into(),
            distance_miles,
            class,
        }
    }

    /// Fare for this ride: the class per-mile rate times the distance.
    pub fn fare(&self) -> f64 {
        pricing::fare(self.class, self.distance_miles)
    }

    /// Write the fields shared by every class: id, pickup, dropoff, distance.
    pub fn write_base_details<W: Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "Ride ID: {}", self.id)?;
        writeln!(out, "Pickup: {}", self.pickup)?;
        writeln!(out, "Dropoff: {}", self.dropoff)?;
        writeln!(out, "Distance: {} miles", self.distance_miles)
    }

    /// Write the class-specific suffix: ride type and computed fare.
    pub fn write_class_details<W: Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "Ride Type: {}", self.class.label())?;
        writeln!(out, "Fare: ${}", self.fare())
    }

    /// Write the full detail block. Base fields always precede the type and
    /// fare lines.
    pub fn write_details<W: Write>(&self, out: &mut W) -> fmt::Result {
        self.write_base_details(out)?;
        self.write_class_details(out)
    }

    /// The detail block as a `String`.
    pub fn details(&self) -> String {
        let mut out = String::new();
        self.write_details(&mut out).expect("write to String");
        out
    }
}
