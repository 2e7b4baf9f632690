// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the multi-flight seat inventory.

use airseat_domain::{CoreError, FlightNumber, Outcome};
use std::sync::Arc;

use super::helpers::{create_test_flight_number, create_test_layout};
use crate::{FlightSeats, FlightSnapshot, InMemoryOccupancy, OccupancySource, SeatInventory};

struct FailingOccupancy;

impl OccupancySource for FailingOccupancy {
    fn occupied_seats(&self, _flight_number: &FlightNumber) -> Outcome<Vec<String>> {
        Err(CoreError::new("SOURCE_UNAVAILABLE", "Occupancy store is offline"))
    }
}

fn create_inventory() -> (Arc<InMemoryOccupancy>, SeatInventory) {
    let source: Arc<InMemoryOccupancy> = Arc::new(InMemoryOccupancy::new());
    let inventory: SeatInventory = SeatInventory::new(source.clone());
    (source, inventory)
}

#[test]
fn test_open_flight_seeds_from_source() {
    let (source, inventory) = create_inventory();
    let number: FlightNumber = create_test_flight_number("VN123");
    assert!(source.record(&number, "E02"));
    assert!(source.record(&number, "B1"));
    assert!(!source.record(&number, "B1"));

    let flight: Arc<FlightSeats> = inventory
        .open_flight(&number, create_test_layout("E:10,B:5,F:2"))
        .unwrap();
    assert_eq!(flight.occupied_seats(), vec!["B1", "E02"]);
    assert_eq!(inventory.remaining_capacity(&number).unwrap(), 15);
}

#[test]
fn test_open_flight_twice_returns_same_handle() {
    let (_source, inventory) = create_inventory();
    let number: FlightNumber = create_test_flight_number("VN123");

    let first: Arc<FlightSeats> = inventory
        .open_flight(&number, create_test_layout("E:10"))
        .unwrap();
    first.reserve_seat("E01").unwrap();

    let second: Arc<FlightSeats> = inventory
        .open_flight(&number, create_test_layout("F:2"))
        .unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(second.layout().to_string(), "ECONOMY:10");
    assert!(!second.is_seat_available("E01").unwrap());
}

#[test]
fn test_unknown_flight_is_not_found() {
    let (_source, inventory) = create_inventory();
    let number: FlightNumber = create_test_flight_number("VN999");

    let err: CoreError = inventory.flight(&number).unwrap_err();
    assert_eq!(err.code(), "FLIGHT_NOT_FOUND");
    assert_eq!(err.message(), "Flight VN999 not found");

    assert_eq!(
        inventory.reserve_seat(&number, "E01").unwrap_err().code(),
        "FLIGHT_NOT_FOUND"
    );
    assert_eq!(
        inventory.available_seats(&number, "E").unwrap_err().code(),
        "FLIGHT_NOT_FOUND"
    );
    assert_eq!(
        inventory.is_flight_full(&number).unwrap_err().code(),
        "FLIGHT_NOT_FOUND"
    );
}

#[test]
fn test_source_failure_propagates() {
    let inventory: SeatInventory = SeatInventory::new(Arc::new(FailingOccupancy));
    let number: FlightNumber = create_test_flight_number("VN123");

    let err: CoreError = inventory
        .open_flight(&number, create_test_layout("E:10"))
        .unwrap_err();
    assert_eq!(err.code(), "SOURCE_UNAVAILABLE");
    assert!(inventory.flight_numbers().is_empty());
}

#[test]
fn test_delegating_helpers() {
    let (_source, inventory) = create_inventory();
    let number: FlightNumber = create_test_flight_number("VN123");
    inventory
        .open_flight(&number, create_test_layout("E:10,B:5,F:2"))
        .unwrap();

    inventory.reserve_seat(&number, "E01").unwrap();
    assert_eq!(inventory.available_seats(&number, "E").unwrap().len(), 9);
    assert!(!inventory.is_seat_available(&number, "E01").unwrap());
    assert!(!inventory.is_flight_full(&number).unwrap());

    inventory.release_seat(&number, "E01").unwrap();
    assert_eq!(inventory.available_seats(&number, "E").unwrap().len(), 10);
    assert_eq!(
        inventory.release_seat(&number, "E01").unwrap_err().code(),
        "SEAT_NOT_RESERVED"
    );
}

#[test]
fn test_flights_are_independent() {
    let (_source, inventory) = create_inventory();
    let first: FlightNumber = create_test_flight_number("VN123");
    let second: FlightNumber = create_test_flight_number("AB45");
    inventory.open_flight(&first, create_test_layout("F:2")).unwrap();
    inventory.open_flight(&second, create_test_layout("F:2")).unwrap();

    inventory.reserve_seat(&first, "F1").unwrap();
    assert!(inventory.is_seat_available(&second, "F1").unwrap());
    assert_eq!(inventory.flight_numbers(), vec![second, first]);
}

#[test]
fn test_close_flight_returns_final_snapshot() {
    let (_source, inventory) = create_inventory();
    let number: FlightNumber = create_test_flight_number("VN123");
    inventory.open_flight(&number, create_test_layout("F:2")).unwrap();
    inventory.reserve_seat(&number, "F1").unwrap();
    inventory.reserve_seat(&number, "F2").unwrap();

    let snapshot: FlightSnapshot = inventory.close_flight(&number).unwrap();
    assert!(snapshot.is_full);
    assert_eq!(snapshot.occupied_seats, vec!["F1", "F2"]);

    assert_eq!(
        inventory.close_flight(&number).unwrap_err().code(),
        "FLIGHT_NOT_FOUND"
    );
    assert!(inventory.flight(&number).is_err());
}

#[test]
fn test_close_flight_closes_outstanding_handles() {
    let (_source, inventory) = create_inventory();
    let number: FlightNumber = create_test_flight_number("VN123");
    let handle: Arc<FlightSeats> = inventory
        .open_flight(&number, create_test_layout("E:10"))
        .unwrap();
    handle.reserve_seat("E01").unwrap();

    let snapshot: FlightSnapshot = inventory.close_flight(&number).unwrap();
    assert!(handle.is_closed());

    let err: CoreError = handle.reserve_seat("E02").unwrap_err();
    assert_eq!(err.code(), "FLIGHT_CLOSED");
    assert!(err.message().contains("VN123"));
    assert_eq!(handle.release_seat("E01").unwrap_err().code(), "FLIGHT_CLOSED");
    assert_eq!(handle.snapshot(), snapshot);

    // Reopening creates a fresh, open handle
    let reopened: Arc<FlightSeats> = inventory
        .open_flight(&number, create_test_layout("E:10"))
        .unwrap();
    assert!(!Arc::ptr_eq(&handle, &reopened));
    assert!(!reopened.is_closed());
    reopened.reserve_seat("E02").unwrap();
}

#[test]
fn test_in_memory_occupancy_cancel() {
    let source: InMemoryOccupancy = InMemoryOccupancy::new();
    let number: FlightNumber = create_test_flight_number("VN123");

    assert!(!source.cancel(&number, "E01"));
    source.record(&number, "E01");
    assert!(source.cancel(&number, "E01"));
    assert!(source.occupied_seats(&number).unwrap().is_empty());
}
