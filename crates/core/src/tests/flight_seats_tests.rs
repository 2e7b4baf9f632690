// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for single-flight seat availability.

use airseat_domain::CoreError;

use super::helpers::{create_test_flight, create_test_flight_number, create_test_layout};
use crate::{FlightSeats, FlightSnapshot, SeatState};

#[test]
fn test_available_seats_for_mixed_layout() {
    let flight: FlightSeats = create_test_flight("E:10,B:5,F:2");

    let economy: Vec<String> = flight.available_seats("E");
    let expected: Vec<String> = (1..=10).map(|index| format!("E{index:02}")).collect();
    assert_eq!(economy, expected);
    assert_eq!(flight.available_seats("B"), vec!["B1", "B2", "B3", "B4", "B5"]);
    assert_eq!(flight.available_seats("F"), vec!["F1", "F2"]);
    assert_eq!(flight.remaining_capacity(), 17);
}

#[test]
fn test_reserve_and_release_restore_availability() {
    let flight: FlightSeats = create_test_flight("E:10,B:5,F:2");

    flight.reserve_seat("E01").unwrap();
    assert_eq!(flight.available_seats("E").len(), 9);
    assert!(!flight.available_seats("E").contains(&String::from("E01")));
    assert!(!flight.is_seat_available("E01").unwrap());
    assert_eq!(flight.remaining_capacity(), 16);

    flight.release_seat("E01").unwrap();
    assert_eq!(flight.available_seats("E").len(), 10);
    assert!(flight.is_seat_available("E01").unwrap());
    assert_eq!(flight.remaining_capacity(), 17);
}

#[test]
fn test_reserving_occupied_seat_fails() {
    let flight: FlightSeats = create_test_flight("E:10");
    flight.reserve_seat("E05").unwrap();

    let err: CoreError = flight.reserve_seat("E05").unwrap_err();
    assert_eq!(err.code(), "SEAT_NOT_AVAILABLE");
    assert_eq!(err.message(), "Seat E05 is not available");
    assert_eq!(flight.occupied_seats(), vec!["E05"]);
}

#[test]
fn test_releasing_free_seat_fails() {
    let flight: FlightSeats = create_test_flight("E:10");

    let err: CoreError = flight.release_seat("E05").unwrap_err();
    assert_eq!(err.code(), "SEAT_NOT_RESERVED");
    assert!(flight.occupied_seats().is_empty());
}

#[test]
fn test_invalid_seat_numbers_are_rejected() {
    let flight: FlightSeats = create_test_flight("E:10,B:5");

    for seat in ["E1", "E11", "F1", "", "e01"] {
        let err: CoreError = flight.reserve_seat(seat).unwrap_err();
        assert_eq!(err.code(), "INVALID_SEAT_NUMBER", "{seat}");

        let err: CoreError = flight.release_seat(seat).unwrap_err();
        assert_eq!(err.code(), "INVALID_SEAT_NUMBER", "{seat}");

        let err: CoreError = flight.is_seat_available(seat).unwrap_err();
        assert_eq!(err.code(), "INVALID_SEAT_NUMBER", "{seat}");
    }
    assert_eq!(flight.remaining_capacity(), 15);
}

#[test]
fn test_invalid_seat_number_message_carries_reason() {
    let flight: FlightSeats = create_test_flight("E:10");
    let err: CoreError = flight.reserve_seat("E1").unwrap_err();
    assert_eq!(
        err.message(),
        "Seat number 'E1' is not valid for this flight: seat_number: Invalid sequence number"
    );
}

#[test]
fn test_unknown_class_has_no_available_seats() {
    let flight: FlightSeats = create_test_flight("E:10");
    assert!(flight.available_seats("B").is_empty());
    assert!(flight.available_seats("e").is_empty());
}

#[test]
fn test_flight_becomes_full() {
    let flight: FlightSeats = create_test_flight("F:2");
    assert!(!flight.is_flight_full());

    flight.reserve_seat("F1").unwrap();
    flight.reserve_seat("F2").unwrap();
    assert!(flight.is_flight_full());
    assert_eq!(flight.remaining_capacity(), 0);
    assert!(flight.available_seats("F").is_empty());

    flight.release_seat("F2").unwrap();
    assert!(!flight.is_flight_full());
}

#[test]
fn test_every_seat_of_a_multi_class_layout_fills_the_flight() {
    let flight: FlightSeats = create_test_flight("ECONOMY:2,BUSINESS:3");
    let layout_seats: Vec<String> = flight.layout().seat_universe();
    assert_eq!(layout_seats, vec!["B1", "B2", "B3", "E1", "E2"]);

    for seat in &layout_seats {
        flight.reserve_seat(seat).unwrap();
    }
    assert_eq!(flight.remaining_capacity(), 0);
    assert!(flight.is_flight_full());
    assert!(flight.available_seats("B").is_empty());
    assert!(flight.available_seats("E").is_empty());

    let err: CoreError = flight.reserve_seat("E3").unwrap_err();
    assert_eq!(err.code(), "INVALID_SEAT_NUMBER");
}

#[test]
fn test_closed_flight_rejects_seat_changes() {
    let flight: FlightSeats = create_test_flight("E:10");
    flight.reserve_seat("E01").unwrap();
    assert!(!flight.is_closed());

    let snapshot: FlightSnapshot = flight.close();
    assert!(flight.is_closed());
    assert_eq!(snapshot.occupied_seats, vec!["E01"]);

    let err: CoreError = flight.reserve_seat("E02").unwrap_err();
    assert_eq!(err.code(), "FLIGHT_CLOSED");
    let err: CoreError = flight.release_seat("E01").unwrap_err();
    assert_eq!(err.code(), "FLIGHT_CLOSED");

    // Reads still work and the state is unchanged
    assert!(flight.is_seat_available("E02").unwrap());
    assert_eq!(flight.occupied_seats(), vec!["E01"]);
    assert_eq!(flight.close(), snapshot);
}

#[test]
fn test_seat_state_reports_current_state() {
    let flight: FlightSeats = create_test_flight("B:5");
    assert_eq!(flight.seat_state("B3").unwrap(), SeatState::Available);
    flight.reserve_seat("B3").unwrap();
    assert_eq!(flight.seat_state("B3").unwrap(), SeatState::Occupied);
}

#[test]
fn test_seeded_seats_outside_layout_are_dropped() {
    let flight: FlightSeats = FlightSeats::new(
        create_test_flight_number("VN123"),
        create_test_layout("E:10,F:2"),
        vec![
            String::from("E03"),
            String::from("E3"),
            String::from("F2"),
            String::from("B1"),
            String::from("E03"),
        ],
    );

    assert_eq!(flight.occupied_seats(), vec!["E03", "F2"]);
    assert_eq!(flight.remaining_capacity(), 10);
    assert!(!flight.is_seat_available("E03").unwrap());
}

#[test]
fn test_snapshot_describes_flight() {
    let flight: FlightSeats = create_test_flight("E:10,F:2");
    flight.reserve_seat("F1").unwrap();
    flight.reserve_seat("E10").unwrap();

    let snapshot: FlightSnapshot = flight.snapshot();
    assert_eq!(snapshot.flight_number.value(), "VN123");
    assert_eq!(snapshot.total_seats, 12);
    assert_eq!(snapshot.occupied_seats, vec!["E10", "F1"]);
    assert_eq!(snapshot.remaining_capacity, 10);
    assert!(!snapshot.is_full);

    let json: serde_json::Value = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["flight_number"], "VN123");
    assert_eq!(json["layout"], "ECONOMY:10,FIRST:2");
    assert_eq!(json["remaining_capacity"], 10);
}
