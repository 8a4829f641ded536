#![allow(dead_code)]

use ride_core::registry::{RideHandle, RideRegistry};
use ride_core::ride::{Ride, RideClass};

/// Builder for ride fixtures; defaults to the standard sample ride.
#[derive(Clone, Debug)]
pub struct RideBuilder {
    id: u64,
    pickup: String,
    dropoff: String,
    distance_miles: f64,
    class: RideClass,
}

impl Default for RideBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            pickup: "Downtown".to_string(),
            dropoff: "Uptown".to_string(),
            distance_miles: 5.0,
            class: RideClass::Standard,
        }
    }
}

impl RideBuilder {
    pub fn id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    pub fn route(mut self, pickup: &str, dropoff: &str) -> Self {
        self.pickup = pickup.to_string();
        self.dropoff = dropoff.to_string();
        self
    }

    pub fn distance_miles(mut self, distance_miles: f64) -> Self {
        self.distance_miles = distance_miles;
        self
    }

    pub fn class(mut self, class: RideClass) -> Self {
        self.class = class;
        self
    }

    pub fn build(self) -> Ride {
        Ride::new(
            self.id,
            self.pickup,
            self.dropoff,
            self.distance_miles,
            self.class,
        )
    }

    pub fn insert_into(self, rides: &mut RideRegistry) -> RideHandle {
        rides.insert(self.build())
    }
}
