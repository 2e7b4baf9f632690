// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::outcome::CoreError;
use thiserror::Error;

/// A typed error that maps onto a stable code and the field it concerns.
///
/// The `Display` text of the implementor is the human-readable message.
pub trait ErrorCode: std::error::Error {
    /// The machine-readable code, e.g. `INVALID_FORMAT`.
    fn code(&self) -> &'static str;

    /// The field the error is scoped to.
    fn field(&self) -> &'static str;

    /// Converts this error into a standalone [`CoreError`].
    fn to_core_error(&self) -> CoreError {
        CoreError::new(self.code(), self.to_string())
    }
}

/// Errors produced while validating an aircraft serial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AircraftSerialError {
    /// The serial is empty.
    #[error("Aircraft serial cannot be empty")]
    Empty,
    /// The serial is shorter than 3 or longer than 10 characters.
    #[error("Aircraft serial must be between 3 and 10 characters")]
    InvalidLength,
    /// The serial does not match the letters-then-digits grammar.
    #[error("Aircraft serial must start with 2-3 uppercase letters followed by 1-7 digits")]
    InvalidFormat,
}

impl ErrorCode for AircraftSerialError {
    fn code(&self) -> &'static str {
        match self {
            Self::Empty => "EMPTY",
            Self::InvalidLength => "INVALID_LENGTH",
            Self::InvalidFormat => "INVALID_FORMAT",
        }
    }

    fn field(&self) -> &'static str {
        "aircraft_serial"
    }
}

/// Errors produced while validating a flight number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FlightNumberError {
    /// The flight number is empty.
    #[error("Flight number cannot be empty")]
    Empty,
    /// The flight number is shorter than 3 or longer than 6 characters.
    #[error("Flight number must be between 3 and 6 characters")]
    InvalidLength,
    /// The flight number does not match the carrier-then-digits grammar.
    #[error("Flight number must be 2 uppercase letters followed by 1-4 digits without a leading zero")]
    InvalidFormat,
}

impl ErrorCode for FlightNumberError {
    fn code(&self) -> &'static str {
        match self {
            Self::Empty => "EMPTY",
            Self::InvalidLength => "INVALID_LENGTH",
            Self::InvalidFormat => "INVALID_FORMAT",
        }
    }

    fn field(&self) -> &'static str {
        "flight_number"
    }
}

/// Errors produced while validating a contact record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactInfoError {
    /// The joined string could not be split into email, phone and address.
    #[error("Contact info must be in format 'EMAIL|PHONE|ADDRESS'")]
    ParseError,
    /// The email is empty.
    #[error("Email cannot be empty")]
    EmptyEmail,
    /// The email exceeds 254 characters.
    #[error("Email must not exceed 254 characters")]
    EmailTooLong,
    /// The email is not shaped like an address.
    #[error("Invalid email format")]
    InvalidEmailFormat,
    /// The phone number is empty.
    #[error("Phone number cannot be empty")]
    EmptyPhone,
    /// The phone number has more than 15 digits.
    #[error("Phone number must not exceed 15 digits")]
    PhoneTooLong,
    /// The phone number is not an optional `+` followed by 10-15 digits.
    #[error("Invalid phone number format")]
    InvalidPhoneFormat,
    /// The address exceeds 100 characters.
    #[error("Address must not exceed 100 characters")]
    AddressTooLong,
    /// The address contains characters outside the permitted set.
    #[error("Invalid address format")]
    InvalidAddressFormat,
}

impl ErrorCode for ContactInfoError {
    fn code(&self) -> &'static str {
        match self {
            Self::ParseError => "PARSE_ERROR",
            Self::EmptyEmail => "EMPTY_EMAIL",
            Self::EmailTooLong => "EMAIL_TOO_LONG",
            Self::InvalidEmailFormat => "INVALID_EMAIL_FORMAT",
            Self::EmptyPhone => "EMPTY_PHONE",
            Self::PhoneTooLong => "PHONE_TOO_LONG",
            Self::InvalidPhoneFormat => "INVALID_PHONE_FORMAT",
            Self::AddressTooLong => "ADDRESS_TOO_LONG",
            Self::InvalidAddressFormat => "INVALID_ADDRESS_FORMAT",
        }
    }

    fn field(&self) -> &'static str {
        match self {
            Self::ParseError => "contact_info",
            Self::EmptyEmail | Self::EmailTooLong | Self::InvalidEmailFormat => "email",
            Self::EmptyPhone | Self::PhoneTooLong | Self::InvalidPhoneFormat => "phone",
            Self::AddressTooLong | Self::InvalidAddressFormat => "address",
        }
    }
}

/// Errors produced while validating a seat layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeatLayoutError {
    /// The layout string or map is empty.
    #[error("Seat class map cannot be empty")]
    Empty,
    /// The layout string is not a list of `CLASS:COUNT` pairs.
    #[error("Seat class map must be in format 'CLASS_NAME:SEAT_COUNT,CLASS_NAME:SEAT_COUNT,...'")]
    InvalidFormat,
    /// A class token mixes upper and lower case letters.
    #[error("Seat class name must be all uppercase or all lowercase")]
    InvalidCaseMixing,
    /// A class token names no registered seat class.
    #[error("Seat type must be a registered seat class name or code")]
    InvalidSeatType,
    /// A seat count is not a positive integer.
    #[error("Seat count must be a positive number")]
    InvalidSeatCount,
    /// Two different classes in the layout share a seat number prefix.
    #[error("Seat classes in a layout must have distinct codes")]
    DuplicateSeatClassCode,
}

impl ErrorCode for SeatLayoutError {
    fn code(&self) -> &'static str {
        match self {
            Self::Empty => "EMPTY_SEAT_CLASS_MAP",
            Self::InvalidFormat => "INVALID_FORMAT",
            Self::InvalidCaseMixing => "INVALID_CASE_MIXING",
            Self::InvalidSeatType => "INVALID_SEAT_TYPE",
            Self::InvalidSeatCount => "INVALID_SEAT_COUNT",
            Self::DuplicateSeatClassCode => "DUPLICATE_SEAT_CLASS_CODE",
        }
    }

    fn field(&self) -> &'static str {
        "seat_class_map"
    }
}

/// Errors produced while validating a seat number against a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeatNumberError {
    /// The seat number is empty.
    #[error("Seat number cannot be empty")]
    Empty,
    /// The seat number is not a class code followed by digits.
    #[error("Seat number must be in format 'CLASS_CODE[SEQUENCE_NUMBER]'")]
    InvalidFormat,
    /// The class code is not part of the layout.
    #[error("Seat class not found in aircraft layout")]
    InvalidSeatClass,
    /// The sequence number is out of range or padded to the wrong width.
    #[error("Invalid sequence number")]
    InvalidSequenceNumber,
}

impl ErrorCode for SeatNumberError {
    fn code(&self) -> &'static str {
        match self {
            Self::Empty => "EMPTY_SEAT_NUMBER",
            Self::InvalidFormat => "INVALID_FORMAT",
            Self::InvalidSeatClass => "INVALID_SEAT_CLASS",
            Self::InvalidSequenceNumber => "INVALID_SEQUENCE_NUMBER",
        }
    }

    fn field(&self) -> &'static str {
        "seat_number"
    }
}

/// Errors produced while registering a seat class.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeatClassError {
    /// The class name is empty or not alphanumeric.
    #[error("Seat class name must be non-empty and alphanumeric, got '{0}'")]
    InvalidName(String),
    /// The class code is empty or not alphabetic.
    #[error("Seat class code must be non-empty and alphabetic, got '{0}'")]
    InvalidCode(String),
    /// The code already belongs to a class with another name.
    #[error("Seat class code '{code}' is already used by {existing}")]
    DuplicateCode {
        /// The requested code.
        code: String,
        /// Name of the class that holds the code.
        existing: String,
    },
}

impl ErrorCode for SeatClassError {
    fn code(&self) -> &'static str {
        match self {
            Self::InvalidName(_) | Self::InvalidCode(_) => "INVALID_SEAT_CLASS",
            Self::DuplicateCode { .. } => "DUPLICATE_SEAT_CLASS_CODE",
        }
    }

    fn field(&self) -> &'static str {
        "seat_class"
    }
}

/// Errors produced while assembling an aircraft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AircraftError {
    /// The aircraft model is empty.
    #[error("Aircraft model cannot be empty")]
    EmptyModel,
}

impl ErrorCode for AircraftError {
    fn code(&self) -> &'static str {
        match self {
            Self::EmptyModel => "EMPTY_MODEL",
        }
    }

    fn field(&self) -> &'static str {
        "model"
    }
}

/// Errors produced while validating a passport number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PassportNumberError {
    /// The passport number, or one of its parts, is empty.
    #[error("Passport number cannot be empty")]
    Empty,
    /// The value is not `COUNTRY:NUMBER`.
    #[error("Passport number must be in format 'COUNTRY:NUMBER'")]
    InvalidFormat,
    /// The issuing country is not a 2-letter code.
    #[error("Issuing country must be a valid 2-letter country code")]
    InvalidIssuingCountry,
    /// The number part is not 6 to 9 digits.
    #[error("Passport number must be between 6-9 digits")]
    InvalidNumberLength,
}

impl ErrorCode for PassportNumberError {
    fn code(&self) -> &'static str {
        match self {
            Self::Empty => "EMPTY_PASSPORT_NUMBER",
            Self::InvalidFormat => "INVALID_FORMAT",
            Self::InvalidIssuingCountry => "INVALID_ISSUING_COUNTRY",
            Self::InvalidNumberLength => "INVALID_NUMBER_LENGTH",
        }
    }

    fn field(&self) -> &'static str {
        "passport_number"
    }
}

/// Errors produced while validating a ticket number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TicketNumberError {
    /// The ticket number is empty.
    #[error("Ticket number cannot be empty")]
    Empty,
    /// The value is not `FLIGHT-YYYYMMDD-SEQUENCE`.
    #[error("Ticket number must be in format 'MCB-YYYYMMDD-XXXX'")]
    InvalidFormat,
}

impl ErrorCode for TicketNumberError {
    fn code(&self) -> &'static str {
        match self {
            Self::Empty => "EMPTY_TICKET_NUMBER",
            Self::InvalidFormat => "INVALID_FORMAT",
        }
    }

    fn field(&self) -> &'static str {
        "ticket_number"
    }
}
