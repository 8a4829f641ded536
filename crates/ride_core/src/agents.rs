use crate::registry::RideHandle;

/// A rider and the rides they have requested, in request order.
#[derive(Debug, Clone, PartialEq)]
pub struct Rider {
    pub id: u64,
    pub name: String,
    requested: Vec<RideHandle>,
}

impl Rider {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            requested: Vec::new(),
        }
    }

    /// Append a ride to the request list. No deduplication; requesting the
    /// same handle twice lists it twice.
    pub fn request_ride(&mut self, ride: RideHandle) {
        self.requested.push(ride);
    }

    /// Requested rides in request order.
    pub fn requested_rides(&self) -> &[RideHandle] {
        &self.requested
    }
}

/// A driver and the rides assigned to them, in assignment order.
#[derive(Debug, Clone, PartialEq)]
pub struct Driver {
    pub id: u64,
    pub name: String,
    /// Not range-checked; callers may store any value.
    pub rating: f64,
    assigned: Vec<RideHandle>,
}

impl Driver {
    pub fn new(id: u64, name: impl Into<String>, rating: f64) -> Self {
        Self {
            id,
            name: name.into(),
            rating,
            assigned: Vec::new(),
        }
    }

    /// Append a ride to the assignment list. Same policy as
    /// [Rider::request_ride]: no deduplication, no cross-checks against other
    /// drivers.
    pub fn assign_ride(&mut self, ride: RideHandle) {
        self.assigned.push(ride);
    }

    /// Assigned rides in assignment order.
    pub fn assigned_rides(&self) -> &[RideHandle] {
        &self.assigned
    }
}
