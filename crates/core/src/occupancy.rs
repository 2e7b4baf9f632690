// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Where a flight's already-occupied seats come from.

use airseat_domain::{FlightNumber, Outcome};
use std::collections::{BTreeSet, HashMap};
use std::sync::{PoisonError, RwLock};
use tracing::debug;

/// Supplies the seats already assigned to tickets for a flight.
///
/// Consulted once, when the flight is opened in a
/// [`SeatInventory`](crate::SeatInventory).
pub trait OccupancySource: Send + Sync {
    /// Returns the occupied seat numbers for `flight_number`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn occupied_seats(&self, flight_number: &FlightNumber) -> Outcome<Vec<String>>;
}

/// An occupancy source backed by an in-process map.
#[derive(Debug, Default)]
pub struct InMemoryOccupancy {
    seats: RwLock<HashMap<FlightNumber, BTreeSet<String>>>,
}

impl InMemoryOccupancy {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `seat` as occupied on `flight_number`.
    ///
    /// Returns `false` if it was already recorded.
    pub fn record(&self, flight_number: &FlightNumber, seat: &str) -> bool {
        let inserted: bool = self
            .seats
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(flight_number.clone())
            .or_default()
            .insert(seat.to_string());
        debug!(flight = %flight_number, seat, inserted, "Recorded occupied seat");
        inserted
    }

    /// Removes `seat` from `flight_number`.
    ///
    /// Returns `false` if it was not recorded.
    pub fn cancel(&self, flight_number: &FlightNumber, seat: &str) -> bool {
        self.seats
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_mut(flight_number)
            .is_some_and(|seats| seats.remove(seat))
    }
}

impl OccupancySource for InMemoryOccupancy {
    fn occupied_seats(&self, flight_number: &FlightNumber) -> Outcome<Vec<String>> {
        let seats = self.seats.read().unwrap_or_else(PoisonError::into_inner);
        Ok(seats
            .get(flight_number)
            .map_or_else(Vec::new, |seats| seats.iter().cloned().collect()))
    }
}
