//! Owning store for rides. Riders and drivers hold copyable handles into the
//! registry, so a ride shared by both always resolves to the same data and
//! stays valid for as long as the registry lives.

use crate::ride::Ride;

/// Handle to a ride in a [RideRegistry]. Handles are only minted by
/// [RideRegistry::insert] and rides are never removed, so a handle stays valid
/// for the registry's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RideHandle(usize);

/// Append-only arena owning every ride in a run.
#[derive(Debug, Default)]
pub struct RideRegistry {
    rides: Vec<Ride>,
}

impl RideRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a ride and return the handle that resolves to it.
    pub fn insert(&mut self, ride: Ride) -> RideHandle {
        let handle = RideHandle(self.rides.len());
        self.rides.push(ride);
        handle
    }

    pub fn get(&self, handle: RideHandle) -> Option<&Ride> {
        self.rides.get(handle.0)
    }

    pub fn len(&self) -> usize {
        self.rides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rides.is_empty()
    }

    /// Iterate rides with their handles, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (RideHandle, &Ride)> {
        self.rides
            .iter()
            .enumerate()
            .map(|(index, ride)| (RideHandle(index), ride))
    }
}
