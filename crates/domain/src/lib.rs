// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod diagnostics;
mod documents;
mod error;
mod outcome;
mod parsing;
mod seat_class;
mod seat_layout;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use diagnostics::{Diagnostics, ValidationError};
pub use documents::{
    DEFAULT_ISSUING_COUNTRIES, IssuingCountryRegistry, PassportNumber, TicketNumber,
};
pub use error::{
    AircraftError, AircraftSerialError, ContactInfoError, ErrorCode, FlightNumberError,
    PassportNumberError, SeatClassError, SeatLayoutError, SeatNumberError, TicketNumberError,
};
pub use outcome::{CoreError, Outcome, failure, success};
pub use parsing::{
    CONTACT_SEPARATOR, ContactFields, PASSPORT_DISPLAY_STRATEGY, ParseStrategy, ParserRegistry,
    PassportFields, STANDARD_STRATEGY, SeatCounts, StandardSeatLayoutParser, contact_parsers,
    parse_contact, parse_passport, parse_passport_display, passport_parsers, seat_layout_parsers,
};
pub use seat_class::{DEFAULT_SEAT_CLASSES, SeatClass, SeatClassRegistry};
pub use seat_layout::{SeatLayout, format_seat_number, seat_number_width};
pub use types::{Aircraft, AircraftSerial, ContactInfo, FlightNumber, SeatNumber};
pub use validation::{
    MAX_ADDRESS_LENGTH, MAX_EMAIL_LENGTH, MAX_PHONE_DIGITS, validate_aircraft_serial,
    validate_contact, validate_contact_fields, validate_flight_number, validate_passport_fields,
    validate_passport_number, validate_seat_counts, validate_seat_layout, validate_seat_number,
    validate_ticket_number,
};
