// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Value-object validators.
//!
//! Every validator is a pure function from a candidate representation to a
//! [`Diagnostics`] collector. Identifier validators stop at the first failing
//! rule; composite validators check each part independently and report every
//! failure.

use crate::diagnostics::Diagnostics;
use crate::error::{
    AircraftSerialError, ContactInfoError, FlightNumberError, PassportNumberError,
    SeatLayoutError, SeatNumberError, TicketNumberError,
};
use crate::parsing::{ContactFields, PassportFields, SeatCounts, parse_contact};
use crate::seat_class::SeatClassRegistry;
use crate::seat_layout::SeatLayout;
use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum email length (RFC 5321).
pub const MAX_EMAIL_LENGTH: usize = 254;
/// Maximum number of phone digits, excluding a leading `+` (E.164).
pub const MAX_PHONE_DIGITS: usize = 15;
/// Maximum address length.
pub const MAX_ADDRESS_LENGTH: usize = 100;

#[allow(clippy::expect_used)]
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("pattern is a valid constant regex")
}

static AIRCRAFT_SERIAL_PATTERN: Lazy<Regex> = Lazy::new(|| compile(r"^[A-Z]{2,3}[0-9]{1,7}$"));
static FLIGHT_NUMBER_PATTERN: Lazy<Regex> = Lazy::new(|| compile(r"^[A-Z]{2}[1-9][0-9]{0,3}$"));
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"^[a-zA-Z0-9](\.?[a-zA-Z0-9_\-+%])*@[a-zA-Z0-9]([a-zA-Z0-9\-]*[a-zA-Z0-9])?(\.[a-zA-Z]{2,})+$",
    )
});
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| compile(r"^\+?[0-9]{10,15}$"));
static ADDRESS_PATTERN: Lazy<Regex> = Lazy::new(|| compile(r"^[a-zA-Z0-9\s,.\-]{0,100}$"));
// The count may carry a minus sign so that negatives reach the count check.
static SEAT_LAYOUT_PATTERN: Lazy<Regex> =
    Lazy::new(|| compile(r"^[A-Za-z0-9]+:-?[0-9]+(,[A-Za-z0-9]+:-?[0-9]+)*$"));
static SEAT_NUMBER_PATTERN: Lazy<Regex> = Lazy::new(|| compile(r"^[A-Z]+[0-9]+$"));
static PASSPORT_PATTERN: Lazy<Regex> = Lazy::new(|| compile(r"^[A-Za-z0-9]+:[0-9]+$"));
static ISSUING_COUNTRY_PATTERN: Lazy<Regex> = Lazy::new(|| compile(r"^[A-Za-z]{2}$"));
static PASSPORT_DIGITS_PATTERN: Lazy<Regex> = Lazy::new(|| compile(r"^[0-9]{6,9}$"));
static TICKET_NUMBER_PATTERN: Lazy<Regex> =
    Lazy::new(|| compile(r"^[A-Z]{2}[0-9]{1,4}-[0-9]{8}-[0-9]{4}$"));

/// Validates an aircraft serial.
///
/// Rules are checked in order and only the first failure is reported:
/// - `EMPTY`: the serial is empty
/// - `INVALID_LENGTH`: fewer than 3 or more than 10 characters
/// - `INVALID_FORMAT`: not 2-3 uppercase letters followed by 1-7 digits
#[must_use]
pub fn validate_aircraft_serial(value: &str) -> Diagnostics {
    let mut diagnostics: Diagnostics = Diagnostics::new();
    let length: usize = value.chars().count();

    if value.is_empty() {
        diagnostics.add(&AircraftSerialError::Empty);
    } else if !(3..=10).contains(&length) {
        diagnostics.add(&AircraftSerialError::InvalidLength);
    } else if !AIRCRAFT_SERIAL_PATTERN.is_match(value) {
        diagnostics.add(&AircraftSerialError::InvalidFormat);
    }

    diagnostics
}

/// Validates a flight number.
///
/// Same short-circuit shape as [`validate_aircraft_serial`], with a length of
/// 3-6 and a grammar of 2 uppercase letters followed by 1-4 digits with no
/// leading zero.
#[must_use]
pub fn validate_flight_number(value: &str) -> Diagnostics {
    let mut diagnostics: Diagnostics = Diagnostics::new();
    let length: usize = value.chars().count();

    if value.is_empty() {
        diagnostics.add(&FlightNumberError::Empty);
    } else if !(3..=6).contains(&length) {
        diagnostics.add(&FlightNumberError::InvalidLength);
    } else if !FLIGHT_NUMBER_PATTERN.is_match(value) {
        diagnostics.add(&FlightNumberError::InvalidFormat);
    }

    diagnostics
}

fn validate_email(email: &str, diagnostics: &mut Diagnostics) {
    if email.is_empty() {
        diagnostics.add(&ContactInfoError::EmptyEmail);
    } else if email.chars().count() > MAX_EMAIL_LENGTH {
        diagnostics.add(&ContactInfoError::EmailTooLong);
    } else if !EMAIL_PATTERN.is_match(email) {
        diagnostics.add(&ContactInfoError::InvalidEmailFormat);
    }
}

fn validate_phone(phone: &str, diagnostics: &mut Diagnostics) {
    let digits: &str = phone.strip_prefix('+').unwrap_or(phone);

    if phone.is_empty() {
        diagnostics.add(&ContactInfoError::EmptyPhone);
    } else if digits.chars().count() > MAX_PHONE_DIGITS {
        diagnostics.add(&ContactInfoError::PhoneTooLong);
    } else if !PHONE_PATTERN.is_match(phone) {
        diagnostics.add(&ContactInfoError::InvalidPhoneFormat);
    }
}

fn validate_address(address: &str, diagnostics: &mut Diagnostics) {
    // Address is optional
    if address.is_empty() {
        return;
    }
    if address.chars().count() > MAX_ADDRESS_LENGTH {
        diagnostics.add(&ContactInfoError::AddressTooLong);
    } else if !ADDRESS_PATTERN.is_match(address) {
        diagnostics.add(&ContactInfoError::InvalidAddressFormat);
    }
}

/// Validates already-split contact fields.
///
/// Email, phone and address are checked independently; every failing field
/// contributes one diagnostic.
#[must_use]
pub fn validate_contact_fields(fields: &ContactFields) -> Diagnostics {
    let mut diagnostics: Diagnostics = Diagnostics::new();
    validate_email(&fields.email, &mut diagnostics);
    validate_phone(&fields.phone, &mut diagnostics);
    validate_address(&fields.address, &mut diagnostics);
    diagnostics
}

/// Validates a canonical `email|phone|address` string.
///
/// A string that cannot be split yields a single `PARSE_ERROR` diagnostic
/// and no field-level checks are run.
#[must_use]
pub fn validate_contact(value: &str) -> Diagnostics {
    parse_contact(value).map_or_else(
        || {
            let mut diagnostics: Diagnostics = Diagnostics::new();
            diagnostics.add(&ContactInfoError::ParseError);
            diagnostics
        },
        |fields| validate_contact_fields(&fields),
    )
}

fn validate_passport_parts(country: &str, number: &str, diagnostics: &mut Diagnostics) {
    if !ISSUING_COUNTRY_PATTERN.is_match(country) {
        diagnostics.add(&PassportNumberError::InvalidIssuingCountry);
    }
    if !PASSPORT_DIGITS_PATTERN.is_match(number) {
        diagnostics.add(&PassportNumberError::InvalidNumberLength);
    }
}

/// Validates a `COUNTRY:NUMBER` passport number.
///
/// # Arguments
///
/// * `value` - The combined passport string, e.g. `US:123456`
///
/// # Returns
///
/// `EMPTY_PASSPORT_NUMBER` or `INVALID_FORMAT` on their own when the string
/// is empty or not two colon-separated parts with a numeric tail. Otherwise
/// `INVALID_ISSUING_COUNTRY` (not 2 letters) and `INVALID_NUMBER_LENGTH`
/// (not 6-9 digits) are reported independently.
#[must_use]
pub fn validate_passport_number(value: &str) -> Diagnostics {
    let mut diagnostics: Diagnostics = Diagnostics::new();

    if value.is_empty() {
        diagnostics.add(&PassportNumberError::Empty);
        return diagnostics;
    }

    let parts: Option<(&str, &str)> = PASSPORT_PATTERN
        .is_match(value)
        .then(|| value.split_once(':'))
        .flatten();
    match parts {
        Some((country, number)) => validate_passport_parts(country, number, &mut diagnostics),
        None => diagnostics.add(&PassportNumberError::InvalidFormat),
    }

    diagnostics
}

/// Validates an already-split issuing country and number.
///
/// Either part being empty yields a single `EMPTY_PASSPORT_NUMBER`.
#[must_use]
pub fn validate_passport_fields(fields: &PassportFields) -> Diagnostics {
    let mut diagnostics: Diagnostics = Diagnostics::new();
    if fields.issuing_country.is_empty() || fields.number.is_empty() {
        diagnostics.add(&PassportNumberError::Empty);
    } else {
        validate_passport_parts(&fields.issuing_country, &fields.number, &mut diagnostics);
    }
    diagnostics
}

/// Validates a `FLIGHT-YYYYMMDD-SEQUENCE` ticket number.
///
/// - `EMPTY_TICKET_NUMBER`: the value is empty
/// - `INVALID_FORMAT`: not 2 uppercase letters and 1-4 digits, an 8-digit
///   date and a 4-digit sequence joined by hyphens
#[must_use]
pub fn validate_ticket_number(value: &str) -> Diagnostics {
    let mut diagnostics: Diagnostics = Diagnostics::new();
    if value.is_empty() {
        diagnostics.add(&TicketNumberError::Empty);
    } else if !TICKET_NUMBER_PATTERN.is_match(value) {
        diagnostics.add(&TicketNumberError::InvalidFormat);
    }
    diagnostics
}

fn is_mixed_case(token: &str) -> bool {
    token.chars().any(|c| c.is_ascii_uppercase()) && token.chars().any(|c| c.is_ascii_lowercase())
}

fn validate_layout_entry(entry: &str, classes: &SeatClassRegistry, diagnostics: &mut Diagnostics) {
    let Some((token, count)) = entry.split_once(':') else {
        return;
    };

    if is_mixed_case(token) {
        diagnostics.add(&SeatLayoutError::InvalidCaseMixing);
        return;
    }

    if classes.resolve(&token.to_ascii_uppercase()).is_none() {
        diagnostics.add(&SeatLayoutError::InvalidSeatType);
    }

    // Counts that overflow a seat count are reported the same way as non-positive ones
    let positive: bool = count
        .parse::<i64>()
        .is_ok_and(|count| count > 0 && u32::try_from(count).is_ok());
    if !positive {
        diagnostics.add(&SeatLayoutError::InvalidSeatCount);
    }
}

/// Validates a `CLASS:COUNT,CLASS:COUNT` layout string.
///
/// # Arguments
///
/// * `value` - The layout string
/// * `classes` - The registry class tokens are resolved against
///
/// - `EMPTY_SEAT_CLASS_MAP`: the string is empty
/// - `INVALID_FORMAT`: the string is not a comma-separated list of
///   `token:integer` pairs (the integer may be negative)
///
/// Past the grammar check every entry is examined and all failures are kept:
/// - `INVALID_CASE_MIXING`: the class token mixes upper and lower case
/// - `INVALID_SEAT_TYPE`: the class token names no registered class
/// - `INVALID_SEAT_COUNT`: the count is not a positive seat count
#[must_use]
pub fn validate_seat_layout(value: &str, classes: &SeatClassRegistry) -> Diagnostics {
    let mut diagnostics: Diagnostics = Diagnostics::new();

    if value.is_empty() {
        diagnostics.add(&SeatLayoutError::Empty);
        return diagnostics;
    }

    if !SEAT_LAYOUT_PATTERN.is_match(value) {
        diagnostics.add(&SeatLayoutError::InvalidFormat);
        return diagnostics;
    }

    for entry in value.split(',') {
        validate_layout_entry(entry, classes, &mut diagnostics);
    }

    diagnostics
}

/// Validates a class-to-count map.
///
/// Reports `EMPTY_SEAT_CLASS_MAP` for an empty map, then per entry
/// `INVALID_SEAT_TYPE` for classes the registry does not know and
/// `INVALID_SEAT_COUNT` for counts that are not positive seat counts.
#[must_use]
pub fn validate_seat_counts(counts: &SeatCounts, classes: &SeatClassRegistry) -> Diagnostics {
    let mut diagnostics: Diagnostics = Diagnostics::new();

    if counts.is_empty() {
        diagnostics.add(&SeatLayoutError::Empty);
        return diagnostics;
    }

    for (class, count) in counts {
        if classes.get_by_name(class.name()).is_none() {
            diagnostics.add(&SeatLayoutError::InvalidSeatType);
        }
        if *count <= 0 || u32::try_from(*count).is_err() {
            diagnostics.add(&SeatLayoutError::InvalidSeatCount);
        }
    }

    diagnostics
}

/// Validates a seat number against a layout.
///
/// Rules are checked in order and only the first failure is reported:
/// - `EMPTY_SEAT_NUMBER`: the seat number is empty
/// - `INVALID_FORMAT`: not uppercase letters followed by digits
/// - `INVALID_SEAT_CLASS`: no class in the layout has this code
/// - `INVALID_SEQUENCE_NUMBER`: the digits are padded to the wrong width or
///   fall outside `[1, count]`
///
/// # Arguments
///
/// * `value` - The seat number, e.g. `E007`
/// * `layout` - The layout the seat must belong to
///
/// # Returns
///
/// A collector with at most one error.
#[must_use]
pub fn validate_seat_number(value: &str, layout: &SeatLayout) -> Diagnostics {
    let mut diagnostics: Diagnostics = Diagnostics::new();

    if value.is_empty() {
        diagnostics.add(&SeatNumberError::Empty);
    } else if !SEAT_NUMBER_PATTERN.is_match(value) {
        diagnostics.add(&SeatNumberError::InvalidFormat);
    } else if layout.class_for_seat(value).is_none() {
        diagnostics.add(&SeatNumberError::InvalidSeatClass);
    } else if layout.locate_seat(value).is_none() {
        diagnostics.add(&SeatNumberError::InvalidSequenceNumber);
    }

    diagnostics
}
