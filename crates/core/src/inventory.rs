// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-flight seat availability.
//!
//! A [`FlightSeats`] owns the occupied set of one flight behind its own
//! mutex, so every reserve or release is a single check-and-update step and
//! concurrent requests for the same seat have exactly one winner. The
//! [`SeatInventory`] holds one handle per open flight; its map lock is only
//! taken to look up or insert a handle. Closing a flight also closes its
//! handle, so callers still holding one can read it but not change it.

use crate::error::SeatStateError;
use crate::occupancy::OccupancySource;
use crate::state::{FlightSnapshot, SeatState};
use airseat_domain::{
    Diagnostics, ErrorCode, FlightNumber, Outcome, SeatLayout, validate_seat_number,
};
use std::collections::{BTreeSet, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};
use tracing::{debug, info, warn};

/// Seat availability for a single flight.
#[derive(Debug)]
pub struct FlightSeats {
    flight_number: FlightNumber,
    layout: SeatLayout,
    occupied: Mutex<BTreeSet<String>>,
    // Only written with `occupied` held
    closed: AtomicBool,
}

impl FlightSeats {
    /// Creates the seat map for a flight.
    ///
    /// Seeded seats that are not valid for `layout` are dropped with a warning.
    #[must_use]
    pub fn new<I>(flight_number: FlightNumber, layout: SeatLayout, occupied: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut seats: BTreeSet<String> = BTreeSet::new();
        for seat in occupied {
            if layout.is_valid_seat_number(&seat) {
                seats.insert(seat);
            } else {
                warn!(flight = %flight_number, seat = %seat, "Dropping seeded seat not in layout");
            }
        }

        Self {
            flight_number,
            layout,
            occupied: Mutex::new(seats),
            closed: AtomicBool::new(false),
        }
    }

    /// Returns the flight number.
    #[must_use]
    pub const fn flight_number(&self) -> &FlightNumber {
        &self.flight_number
    }

    /// Returns the seat layout.
    #[must_use]
    pub const fn layout(&self) -> &SeatLayout {
        &self.layout
    }

    // Every critical section leaves the set consistent, so a poisoned lock is still usable
    fn lock(&self) -> MutexGuard<'_, BTreeSet<String>> {
        self.occupied.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check_seat(&self, seat: &str) -> Outcome<()> {
        let diagnostics: Diagnostics = validate_seat_number(seat, &self.layout);
        if diagnostics.is_valid() {
            return Ok(());
        }
        Err(SeatStateError::InvalidSeatNumber {
            seat: seat.to_string(),
            reason: diagnostics.messages(),
        }
        .to_core_error())
    }

    fn check_open(&self, seat: &str) -> Outcome<()> {
        if !self.is_closed() {
            return Ok(());
        }
        warn!(flight = %self.flight_number, seat, "Rejected seat change on closed flight");
        Err(SeatStateError::FlightClosed {
            flight: self.flight_number.to_string(),
        }
        .to_core_error())
    }

    /// Returns whether the flight has been closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Closes the flight and returns its final state.
    ///
    /// Later reserve and release calls fail with `FLIGHT_CLOSED`. Closing an
    /// already closed flight just returns the snapshot again.
    #[must_use]
    pub fn close(&self) -> FlightSnapshot {
        let occupied = self.lock();
        self.closed.store(true, Ordering::Release);
        self.snapshot_of(&occupied)
    }

    fn state_in(occupied: &BTreeSet<String>, seat: &str) -> SeatState {
        if occupied.contains(seat) {
            SeatState::Occupied
        } else {
            SeatState::Available
        }
    }

    /// Returns the free seats of the class with code `code`, in ascending order.
    ///
    /// A class the layout does not contain yields an empty list.
    #[must_use]
    pub fn available_seats(&self, code: &str) -> Vec<String> {
        let occupied = self.lock();
        self.layout
            .generate_seats(code)
            .into_iter()
            .filter(|seat| !occupied.contains(seat))
            .collect()
    }

    /// Returns the current state of `seat`.
    ///
    /// # Errors
    ///
    /// Returns `INVALID_SEAT_NUMBER` if `seat` is not a seat of this flight.
    pub fn seat_state(&self, seat: &str) -> Outcome<SeatState> {
        self.check_seat(seat)?;
        Ok(Self::state_in(&self.lock(), seat))
    }

    /// Returns whether `seat` can be reserved.
    ///
    /// # Errors
    ///
    /// Returns `INVALID_SEAT_NUMBER` if `seat` is not a seat of this flight.
    pub fn is_seat_available(&self, seat: &str) -> Outcome<bool> {
        Ok(self.seat_state(seat)? == SeatState::Available)
    }

    /// Marks `seat` as occupied.
    ///
    /// # Errors
    ///
    /// Returns `INVALID_SEAT_NUMBER` if `seat` is not a seat of this flight,
    /// `FLIGHT_CLOSED` if the flight has been closed, or `SEAT_NOT_AVAILABLE`
    /// if it is already occupied.
    pub fn reserve_seat(&self, seat: &str) -> Outcome<()> {
        self.check_seat(seat)?;

        let mut occupied = self.lock();
        self.check_open(seat)?;
        let current: SeatState = Self::state_in(&occupied, seat);
        if !current.can_transition_to(SeatState::Occupied) {
            warn!(flight = %self.flight_number, seat, state = %current, "Rejected seat reservation");
            return Err(SeatStateError::SeatNotAvailable {
                seat: seat.to_string(),
            }
            .to_core_error());
        }

        occupied.insert(seat.to_string());
        drop(occupied);
        debug!(flight = %self.flight_number, seat, "Reserved seat");
        Ok(())
    }

    /// Marks `seat` as available again.
    ///
    /// # Errors
    ///
    /// Returns `INVALID_SEAT_NUMBER` if `seat` is not a seat of this flight,
    /// `FLIGHT_CLOSED` if the flight has been closed, or `SEAT_NOT_RESERVED`
    /// if it is not occupied.
    pub fn release_seat(&self, seat: &str) -> Outcome<()> {
        self.check_seat(seat)?;

        let mut occupied = self.lock();
        self.check_open(seat)?;
        let current: SeatState = Self::state_in(&occupied, seat);
        if !current.can_transition_to(SeatState::Available) {
            warn!(flight = %self.flight_number, seat, state = %current, "Rejected seat release");
            return Err(SeatStateError::SeatNotReserved {
                seat: seat.to_string(),
            }
            .to_core_error());
        }

        occupied.remove(seat);
        drop(occupied);
        debug!(flight = %self.flight_number, seat, "Released seat");
        Ok(())
    }

    fn remaining_in(&self, occupied: &BTreeSet<String>) -> u64 {
        let taken: u64 = u64::try_from(occupied.len()).unwrap_or(u64::MAX);
        self.layout.total_seats().saturating_sub(taken)
    }

    /// Returns the number of seats still available.
    #[must_use]
    pub fn remaining_capacity(&self) -> u64 {
        self.remaining_in(&self.lock())
    }

    /// Returns whether every seat is occupied.
    #[must_use]
    pub fn is_flight_full(&self) -> bool {
        self.remaining_capacity() == 0
    }

    /// Returns the occupied seats in ascending order.
    #[must_use]
    pub fn occupied_seats(&self) -> Vec<String> {
        self.lock().iter().cloned().collect()
    }

    /// Captures the flight's current seat state.
    #[must_use]
    pub fn snapshot(&self) -> FlightSnapshot {
        self.snapshot_of(&self.lock())
    }

    fn snapshot_of(&self, occupied: &BTreeSet<String>) -> FlightSnapshot {
        let remaining_capacity: u64 = self.remaining_in(occupied);
        FlightSnapshot {
            flight_number: self.flight_number.clone(),
            layout: self.layout.clone(),
            total_seats: self.layout.total_seats(),
            occupied_seats: occupied.iter().cloned().collect(),
            remaining_capacity,
            is_full: remaining_capacity == 0,
        }
    }
}

/// Seat availability across every open flight.
pub struct SeatInventory {
    source: Arc<dyn OccupancySource>,
    flights: RwLock<HashMap<FlightNumber, Arc<FlightSeats>>>,
}

impl SeatInventory {
    /// Creates an inventory that seeds new flights from `source`.
    #[must_use]
    pub fn new(source: Arc<dyn OccupancySource>) -> Self {
        Self {
            source,
            flights: RwLock::new(HashMap::new()),
        }
    }

    /// Opens a flight, seeding its occupied seats from the occupancy source.
    ///
    /// Opening a flight that is already open returns the existing handle and
    /// ignores `layout`.
    ///
    /// # Arguments
    ///
    /// * `flight_number` - The flight to open
    /// * `layout` - The seat layout used when the flight is not open yet
    ///
    /// # Returns
    ///
    /// A shared handle to the flight's seats.
    ///
    /// # Errors
    ///
    /// Returns the occupancy source's error if it cannot be read.
    pub fn open_flight(
        &self,
        flight_number: &FlightNumber,
        layout: SeatLayout,
    ) -> Outcome<Arc<FlightSeats>> {
        let existing: Option<Arc<FlightSeats>> = self
            .flights
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(flight_number)
            .cloned();
        if let Some(existing) = existing {
            return Ok(existing);
        }

        let seeded: Vec<String> = self.source.occupied_seats(flight_number)?;
        let seats: Arc<FlightSeats> =
            Arc::new(FlightSeats::new(flight_number.clone(), layout, seeded));

        let mut flights = self.flights.write().unwrap_or_else(PoisonError::into_inner);
        // Another caller may have opened the flight while the source was read
        let handle: Arc<FlightSeats> = Arc::clone(
            flights
                .entry(flight_number.clone())
                .or_insert_with(|| Arc::clone(&seats)),
        );
        drop(flights);

        info!(
            flight = %flight_number,
            layout = %handle.layout(),
            occupied = handle.occupied_seats().len(),
            "Opened flight"
        );
        Ok(handle)
    }

    /// Returns the handle of an open flight.
    ///
    /// # Errors
    ///
    /// Returns `FLIGHT_NOT_FOUND` if the flight has not been opened.
    pub fn flight(&self, flight_number: &FlightNumber) -> Outcome<Arc<FlightSeats>> {
        self.flights
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(flight_number)
            .cloned()
            .ok_or_else(|| {
                SeatStateError::FlightNotFound {
                    flight: flight_number.to_string(),
                }
                .to_core_error()
            })
    }

    /// Closes a flight and returns its final state.
    ///
    /// The flight is removed from the inventory and its handle is closed, so
    /// handles obtained earlier reject further reservations and releases.
    ///
    /// # Arguments
    ///
    /// * `flight_number` - The flight to close
    ///
    /// # Returns
    ///
    /// The occupancy at the moment the flight closed.
    ///
    /// # Errors
    ///
    /// Returns `FLIGHT_NOT_FOUND` if the flight has not been opened.
    pub fn close_flight(&self, flight_number: &FlightNumber) -> Outcome<FlightSnapshot> {
        let removed: Option<Arc<FlightSeats>> = self
            .flights
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(flight_number);
        let seats: Arc<FlightSeats> = removed.ok_or_else(|| {
            SeatStateError::FlightNotFound {
                flight: flight_number.to_string(),
            }
            .to_core_error()
        })?;
        let snapshot: FlightSnapshot = seats.close();
        info!(
            flight = %flight_number,
            occupied = snapshot.occupied_seats.len(),
            "Closed flight"
        );
        Ok(snapshot)
    }

    /// Returns the numbers of all open flights, sorted.
    #[must_use]
    pub fn flight_numbers(&self) -> Vec<FlightNumber> {
        let mut numbers: Vec<FlightNumber> = self
            .flights
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        numbers.sort();
        numbers
    }

    /// Reserves `seat` on an open flight.
    ///
    /// # Errors
    ///
    /// Returns `FLIGHT_NOT_FOUND`, or any error of [`FlightSeats::reserve_seat`].
    pub fn reserve_seat(&self, flight_number: &FlightNumber, seat: &str) -> Outcome<()> {
        self.flight(flight_number)?.reserve_seat(seat)
    }

    /// Releases `seat` on an open flight.
    ///
    /// # Errors
    ///
    /// Returns `FLIGHT_NOT_FOUND`, or any error of [`FlightSeats::release_seat`].
    pub fn release_seat(&self, flight_number: &FlightNumber, seat: &str) -> Outcome<()> {
        self.flight(flight_number)?.release_seat(seat)
    }

    /// Returns whether `seat` is free on an open flight.
    ///
    /// # Errors
    ///
    /// Returns `FLIGHT_NOT_FOUND` or `INVALID_SEAT_NUMBER`.
    pub fn is_seat_available(&self, flight_number: &FlightNumber, seat: &str) -> Outcome<bool> {
        self.flight(flight_number)?.is_seat_available(seat)
    }

    /// Returns the free seats of one class on an open flight.
    ///
    /// # Errors
    ///
    /// Returns `FLIGHT_NOT_FOUND` if the flight has not been opened.
    pub fn available_seats(&self, flight_number: &FlightNumber, code: &str) -> Outcome<Vec<String>> {
        Ok(self.flight(flight_number)?.available_seats(code))
    }

    /// Returns the remaining capacity of an open flight.
    ///
    /// # Errors
    ///
    /// Returns `FLIGHT_NOT_FOUND` if the flight has not been opened.
    pub fn remaining_capacity(&self, flight_number: &FlightNumber) -> Outcome<u64> {
        Ok(self.flight(flight_number)?.remaining_capacity())
    }

    /// Returns whether an open flight is full.
    ///
    /// # Errors
    ///
    /// Returns `FLIGHT_NOT_FOUND` if the flight has not been opened.
    pub fn is_flight_full(&self, flight_number: &FlightNumber) -> Outcome<bool> {
        Ok(self.flight(flight_number)?.is_flight_full())
    }
}

impl std::fmt::Debug for SeatInventory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeatInventory")
            .field("flights", &self.flight_numbers())
            .finish_non_exhaustive()
    }
}
