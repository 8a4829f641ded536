//! Scenario setup: declarative params for one rider, one driver, and the
//! rides they share, assembled into a registry-backed scenario.
//!
//! `ScenarioParams::default()` is the canonical sample run; params can also be
//! loaded from JSON for config-driven runs.

use serde::{Deserialize, Serialize};

use crate::agents::{Driver, Rider};
use crate::registry::RideRegistry;
use crate::ride::{Ride, RideClass};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiderParams {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverParams {
    pub id: u64,
    pub name: String,
    pub rating: f64,
}

/// One ride to create; it is requested by the rider and assigned to the
/// driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RideParams {
    pub id: u64,
    pub pickup: String,
    pub dropoff: String,
    pub distance_miles: f64,
    pub class: RideClass,
}

/// Parameters for building a scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioParams {
    pub rider: RiderParams,
    pub driver: DriverParams,
    /// Rides in creation order; registration with the rider and the driver
    /// preserves this order.
    pub rides: Vec<RideParams>,
}

impl Default for ScenarioParams {
    /// The sample run: Alice requests a standard and a premium ride, Bob is
    /// assigned both.
    fn default() -> Self {
        Self {
            rider: RiderParams {
                id: 1,
                name: "Alice".to_string(),
            },
            driver: DriverParams {
                id: 101,
                name: "Bob".to_string(),
                rating: 4.8,
            },
            rides: vec![
                RideParams {
                    id: 1,
                    pickup: "Downtown".to_string(),
                    dropoff: "Uptown".to_string(),
                    distance_miles: 5.0,
                    class: RideClass::Standard,
                },
                RideParams {
                    id: 2,
                    pickup: "Airport".to_string(),
                    dropoff: "Hotel".to_string(),
                    distance_miles: 10.0,
                    class: RideClass::Premium,
                },
            ],
        }
    }
}

impl ScenarioParams {
    /// Replace the ride list.
    pub fn with_rides(mut self, rides: Vec<RideParams>) -> Self {
        self.rides = rides;
        self
    }

    /// Set the driver's rating.
    pub fn with_driver_rating(mut self, rating: f64) -> Self {
        self.driver.rating = rating;
        self
    }

    /// Load params from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// An assembled scenario: the owning ride store plus the agents holding
/// handles into it.
#[derive(Debug)]
pub struct Scenario {
    pub rides: RideRegistry,
    pub rider: Rider,
    pub driver: Driver,
}

/// Create the rides and register each with both the rider and the driver, in
/// params order.
pub fn build_scenario(params: ScenarioParams) -> Scenario {
    let mut rides = RideRegistry::new();
    let mut rider = Rider::new(params.rider.id, params.rider.name);
    let mut driver = Driver::new(params.driver.id, params.driver.name, params.driver.rating);

    for ride in params.rides {
        let handle = rides.insert(Ride::new(
            ride.id,
            ride.pickup,
            ride.dropoff,
            ride.distance_miles,
            ride.class,
        ));
        rider.request_ride(handle);
        driver.assign_ride(handle);
    }

    Scenario {
        rides,
        rider,
        driver,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_scenario_registers_every_ride_with_both_agents() {
        let scenario = build_scenario(ScenarioParams::default());

        assert_eq!(scenario.rides.len(), 2);
        assert_eq!(
            scenario.rider.requested_rides(),
            scenario.driver.assigned_rides(),
            "rider and driver hold the same handles in the same order"
        );
    }

    #[test]
    fn default_params_are_the_sample_run() {
        let params = ScenarioParams::default();

        assert_eq!(params.rider.name, "Alice");
        assert_eq!(params.driver.id, 101);
        assert_eq!(params.rides.len(), 2);
        assert_eq!(params.rides[0].class, RideClass::Standard);
        assert_eq!(params.rides[1].class, RideClass::Premium);
    }

    #[test]
    fn params_load_from_json() {
        let json = r#"{
            "rider": { "id": 1, "name": "Alice" },
            "driver": { "id": 101, "name": "Bob", "rating": 4.8 },
            "rides": [
                {
                    "id": 1,
                    "pickup": "Downtown",
                    "dropoff": "Uptown",
                    "distance_miles": 5.0,
                    "class": "standard"
                }
            ]
        }"#;

        let params = ScenarioParams::from_json(json).expect("valid params document");
        assert_eq!(params.rides[0].class, RideClass::Standard);

        let scenario = build_scenario(params);
        assert_eq!(scenario.rides.len(), 1);
    }
}
