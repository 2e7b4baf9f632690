// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::{AircraftError, ContactInfoError, ErrorCode, SeatNumberError};
use crate::outcome::{CoreError, Outcome};
use crate::parsing::{CONTACT_SEPARATOR, ContactFields, ParserRegistry, parse_contact};
use crate::seat_layout::SeatLayout;
use crate::validation::{
    validate_aircraft_serial, validate_contact_fields, validate_flight_number,
    validate_seat_number,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// An aircraft serial, e.g. `VN123`.
///
/// Only constructible through [`AircraftSerial::new`], which validates it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AircraftSerial {
    value: String,
}

impl AircraftSerial {
    /// Creates a validated aircraft serial.
    ///
    /// # Errors
    ///
    /// Returns `EMPTY`, `INVALID_LENGTH` or `INVALID_FORMAT` (first failing rule only).
    pub fn new(value: &str) -> Outcome<Self> {
        validate_aircraft_serial(value).into_outcome(|| Self {
            value: value.to_string(),
        })
    }

    /// Returns the serial value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for AircraftSerial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl FromStr for AircraftSerial {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for AircraftSerial {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<AircraftSerial> for String {
    fn from(serial: AircraftSerial) -> Self {
        serial.value
    }
}

/// A flight number, e.g. `VN123`.
///
/// Flight numbers key flights in the seat inventory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FlightNumber {
    value: String,
}

impl FlightNumber {
    /// Creates a validated flight number.
    ///
    /// # Errors
    ///
    /// Returns `EMPTY`, `INVALID_LENGTH` or `INVALID_FORMAT` (first failing rule only).
    pub fn new(value: &str) -> Outcome<Self> {
        validate_flight_number(value).into_outcome(|| Self {
            value: value.to_string(),
        })
    }

    /// Returns the flight number value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for FlightNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl FromStr for FlightNumber {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for FlightNumber {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<FlightNumber> for String {
    fn from(number: FlightNumber) -> Self {
        number.value
    }
}

/// An immutable contact record.
///
/// The canonical string form is `email|phone|address`; an empty address
/// keeps the trailing separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContactInfo {
    email: String,
    phone: String,
    address: String,
}

impl ContactInfo {
    /// Creates a contact record from separate fields.
    ///
    /// # Errors
    ///
    /// Returns every failing field check at once, with messages joined by `; `
    /// and codes joined by `;`.
    pub fn new(email: &str, phone: &str, address: &str) -> Outcome<Self> {
        Self::from_fields(ContactFields::new(email, phone, address))
    }

    /// Creates a contact record from already-split fields.
    ///
    /// # Errors
    ///
    /// See [`ContactInfo::new`].
    pub fn from_fields(fields: ContactFields) -> Outcome<Self> {
        validate_contact_fields(&fields).into_outcome(|| Self {
            email: fields.email,
            phone: fields.phone,
            address: fields.address,
        })
    }

    /// Parses a canonical `email|phone|address` string.
    ///
    /// # Errors
    ///
    /// Returns `PARSE_ERROR` if the string cannot be split, otherwise the
    /// field diagnostics of [`ContactInfo::new`].
    pub fn parse(value: &str) -> Outcome<Self> {
        let fields: ContactFields =
            parse_contact(value).ok_or_else(|| ContactInfoError::ParseError.to_core_error())?;
        Self::from_fields(fields)
    }

    /// Parses a contact string with a named strategy from `parsers`.
    ///
    /// # Errors
    ///
    /// Returns `PARSE_ERROR` if the strategy rejects the input, otherwise the
    /// field diagnostics of [`ContactInfo::new`].
    pub fn parse_with(
        value: &str,
        parsers: &ParserRegistry<ContactFields>,
        strategy: &str,
    ) -> Outcome<Self> {
        let fields: ContactFields = parsers
            .parse(strategy, value)
            .ok_or_else(|| ContactInfoError::ParseError.to_core_error())?;
        Self::from_fields(fields)
    }

    /// Returns the email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the phone number.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Returns the address, possibly empty.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Formats the record with a custom separator.
    #[must_use]
    pub fn format_with(&self, separator: &str) -> String {
        [self.email.as_str(), self.phone.as_str(), self.address.as_str()].join(separator)
    }
}

impl std::fmt::Display for ContactInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{CONTACT_SEPARATOR}{}{CONTACT_SEPARATOR}{}",
            self.email, self.phone, self.address
        )
    }
}

impl FromStr for ContactInfo {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ContactInfo {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ContactInfo> for String {
    fn from(contact: ContactInfo) -> Self {
        contact.to_string()
    }
}

/// A seat number validated against a particular layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "String")]
pub struct SeatNumber {
    value: String,
    class_code: String,
    sequence: u32,
}

impl SeatNumber {
    /// Creates a seat number that is valid for `layout`.
    ///
    /// # Errors
    ///
    /// Returns `EMPTY_SEAT_NUMBER`, `INVALID_FORMAT`, `INVALID_SEAT_CLASS` or
    /// `INVALID_SEQUENCE_NUMBER` (first failing rule only).
    pub fn new(value: &str, layout: &SeatLayout) -> Outcome<Self> {
        validate_seat_number(value, layout).into_outcome(|| ())?;
        let (class, sequence) = layout
            .locate_seat(value)
            .ok_or_else(|| SeatNumberError::InvalidSequenceNumber.to_core_error())?;
        Ok(Self {
            value: value.to_string(),
            class_code: class.code().to_string(),
            sequence,
        })
    }

    /// Returns the full seat number, e.g. `E001`.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the class code prefix, e.g. `E`.
    #[must_use]
    pub fn class_code(&self) -> &str {
        &self.class_code
    }

    /// Returns the 1-based index within the class.
    #[must_use]
    pub const fn sequence(&self) -> u32 {
        self.sequence
    }
}

impl std::fmt::Display for SeatNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<SeatNumber> for String {
    fn from(seat: SeatNumber) -> Self {
        seat.value
    }
}

/// An aircraft: its serial, model and seat layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Aircraft {
    serial: AircraftSerial,
    model: String,
    layout: SeatLayout,
}

impl Aircraft {
    /// Creates an aircraft.
    ///
    /// # Errors
    ///
    /// Returns `EMPTY_MODEL` if the model is blank.
    pub fn new(serial: AircraftSerial, model: &str, layout: SeatLayout) -> Outcome<Self> {
        let model: &str = model.trim();
        if model.is_empty() {
            return Err(AircraftError::EmptyModel.to_core_error());
        }
        Ok(Self {
            serial,
            model: model.to_string(),
            layout,
        })
    }

    /// Returns the serial.
    #[must_use]
    pub const fn serial(&self) -> &AircraftSerial {
        &self.serial
    }

    /// Returns the model.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the seat layout.
    #[must_use]
    pub const fn layout(&self) -> &SeatLayout {
        &self.layout
    }

    /// Returns the codes of the layout's classes, ordered by class name.
    #[must_use]
    pub fn available_seat_classes(&self) -> Vec<String> {
        self.layout
            .seat_classes()
            .map(|(class, _)| class.code().to_string())
            .collect()
    }

    /// Returns whether `seat_number` is a seat of this aircraft.
    #[must_use]
    pub fn has_seat(&self, seat_number: &str) -> bool {
        self.layout.is_valid_seat_number(seat_number)
    }
}
