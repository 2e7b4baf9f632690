// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Aircraft, AircraftSerial, ContactFields, ContactInfo, CoreError, FlightNumber,
    ParserRegistry, SeatClassRegistry, SeatLayout, SeatNumber, contact_parsers,
};
use std::sync::Arc;

fn sample_layout() -> SeatLayout {
    let classes: Arc<SeatClassRegistry> = Arc::new(SeatClassRegistry::new());
    SeatLayout::parse("ECONOMY:100,BUSINESS:20,FIRST:9", &classes).unwrap()
}

#[test]
fn test_aircraft_serial_construction() {
    let serial: AircraftSerial = AircraftSerial::new("VN123").unwrap();
    assert_eq!(serial.value(), "VN123");
    assert_eq!(serial.to_string(), "VN123");

    let err: CoreError = AircraftSerial::new("vn123").unwrap_err();
    assert_eq!(err.code(), "INVALID_FORMAT");

    let err: CoreError = AircraftSerial::new("").unwrap_err();
    assert_eq!(err.code(), "EMPTY");
    assert_eq!(err.message(), "aircraft_serial: Aircraft serial cannot be empty");
}

#[test]
fn test_aircraft_serial_from_str_and_serde() {
    let serial: AircraftSerial = "AB1234".parse().unwrap();
    let json: String = serde_json::to_string(&serial).unwrap();
    assert_eq!(json, "\"AB1234\"");

    let back: AircraftSerial = serde_json::from_str(&json).unwrap();
    assert_eq!(back, serial);
    assert!(serde_json::from_str::<AircraftSerial>("\"ab1\"").is_err());
}

#[test]
fn test_flight_number_construction() {
    let number: FlightNumber = FlightNumber::new("VN123").unwrap();
    assert_eq!(number.value(), "VN123");

    let err: CoreError = FlightNumber::new("VN0123").unwrap_err();
    assert_eq!(err.code(), "INVALID_FORMAT");

    let err: CoreError = "V1".parse::<FlightNumber>().unwrap_err();
    assert_eq!(err.code(), "INVALID_LENGTH");
}

#[test]
fn test_flight_numbers_order_by_value() {
    let mut numbers: Vec<FlightNumber> = ["VN300", "AB12", "VN123"]
        .iter()
        .map(|value| FlightNumber::new(value).unwrap())
        .collect();
    numbers.sort();
    let values: Vec<&str> = numbers.iter().map(FlightNumber::value).collect();
    assert_eq!(values, vec!["AB12", "VN123", "VN300"]);
}

#[test]
fn test_contact_info_construction() {
    let contact: ContactInfo = ContactInfo::new("user@example.com", "+84123456789", "123 Street")
        .unwrap();
    assert_eq!(contact.email(), "user@example.com");
    assert_eq!(contact.phone(), "+84123456789");
    assert_eq!(contact.address(), "123 Street");
}

#[test]
fn test_contact_info_aggregates_errors() {
    let err: CoreError = ContactInfo::new("invalid-email", "abc123", "123 Street!").unwrap_err();
    assert_eq!(
        err.code(),
        "INVALID_EMAIL_FORMAT;INVALID_PHONE_FORMAT;INVALID_ADDRESS_FORMAT"
    );
    assert_eq!(
        err.message(),
        "email: Invalid email format; phone: Invalid phone number format; \
         address: Invalid address format"
    );
    assert_eq!(err.codes().count(), 3);
}

#[test]
fn test_contact_info_round_trips_through_string() {
    let original: &str = "user@example.com|+84123456789|123 Street";
    let contact: ContactInfo = ContactInfo::parse(original).unwrap();
    assert_eq!(contact.to_string(), original);

    let reparsed: ContactInfo = contact.to_string().parse().unwrap();
    assert_eq!(reparsed, contact);
}

#[test]
fn test_contact_info_with_empty_address_keeps_separator() {
    let contact: ContactInfo = ContactInfo::new("user@example.com", "0123456789", "").unwrap();
    assert_eq!(contact.to_string(), "user@example.com|0123456789|");
    assert_eq!(ContactInfo::parse(&contact.to_string()).unwrap(), contact);
}

#[test]
fn test_contact_info_parse_error() {
    let err: CoreError = ContactInfo::parse("user@example.com").unwrap_err();
    assert_eq!(err.code(), "PARSE_ERROR");
    assert_eq!(
        err.message(),
        "contact_info: Contact info must be in format 'EMAIL|PHONE|ADDRESS'"
    );
}

#[test]
fn test_contact_info_format_with_separator() {
    let contact: ContactInfo = ContactInfo::new("user@example.com", "0123456789", "Hanoi").unwrap();
    assert_eq!(contact.format_with(" / "), "user@example.com / 0123456789 / Hanoi");
}

#[test]
fn test_contact_info_parse_with_named_strategy() {
    let parsers: ParserRegistry<ContactFields> = contact_parsers();
    parsers.register("lines", |input: &str| -> Option<ContactFields> {
        let mut lines = input.lines();
        Some(ContactFields::new(lines.next()?, lines.next()?, lines.next().unwrap_or("")))
    });

    let contact: ContactInfo =
        ContactInfo::parse_with("user@example.com\n0123456789", &parsers, "lines").unwrap();
    assert_eq!(contact.to_string(), "user@example.com|0123456789|");

    let err: CoreError = ContactInfo::parse_with("user@example.com", &parsers, "lines").unwrap_err();
    assert_eq!(err.code(), "PARSE_ERROR");
}

#[test]
fn test_contact_info_deserializes_from_canonical_string() {
    let contact: ContactInfo =
        serde_json::from_str("\"user@example.com|0123456789|Hanoi\"").unwrap();
    assert_eq!(contact.address(), "Hanoi");
    assert!(serde_json::from_str::<ContactInfo>("\"bad|bad|\"").is_err());
}

#[test]
fn test_seat_number_construction() {
    let layout: SeatLayout = sample_layout();

    let seat: SeatNumber = SeatNumber::new("E042", &layout).unwrap();
    assert_eq!(seat.value(), "E042");
    assert_eq!(seat.class_code(), "E");
    assert_eq!(seat.sequence(), 42);

    let err: CoreError = SeatNumber::new("E42", &layout).unwrap_err();
    assert_eq!(err.code(), "INVALID_SEQUENCE_NUMBER");

    let err: CoreError = SeatNumber::new("P01", &layout).unwrap_err();
    assert_eq!(err.code(), "INVALID_SEAT_CLASS");
}

#[test]
fn test_aircraft_construction() {
    let serial: AircraftSerial = AircraftSerial::new("VN123").unwrap();
    let aircraft: Aircraft = Aircraft::new(serial, "  A321neo ", sample_layout()).unwrap();

    assert_eq!(aircraft.serial().value(), "VN123");
    assert_eq!(aircraft.model(), "A321neo");
    assert_eq!(aircraft.available_seat_classes(), vec!["B", "E", "F"]);
    assert_eq!(aircraft.layout().total_seats(), 129);
    assert!(aircraft.has_seat("B07"));
    assert!(!aircraft.has_seat("B7"));
}

#[test]
fn test_aircraft_requires_model() {
    let serial: AircraftSerial = AircraftSerial::new("VN123").unwrap();
    let err: CoreError = Aircraft::new(serial, "   ", sample_layout()).unwrap_err();
    assert_eq!(err.code(), "EMPTY_MODEL");
}
