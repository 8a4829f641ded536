//! Build the sample scenario and print the rider and driver reports.
//!
//! Run with: cargo run -p ride_core --example scenario_run

use ride_core::report::{driver_report, rider_report};
use ride_core::scenario::{build_scenario, ScenarioParams};

fn main() {
    let scenario = build_scenario(ScenarioParams::default());

    print!("{}", rider_report(&scenario.rider, &scenario.rides));
    print!("{}", driver_report(&scenario.driver, &scenario.rides));
}
