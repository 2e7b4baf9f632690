// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use airseat_domain::ErrorCode;
use thiserror::Error;

/// Errors raised by seat transitions and flight lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeatStateError {
    /// The seat number is not a seat of the flight's layout.
    #[error("Seat number '{seat}' is not valid for this flight: {reason}")]
    InvalidSeatNumber {
        /// The rejected seat number.
        seat: String,
        /// The aggregated validation messages.
        reason: String,
    },
    /// The seat is already occupied.
    #[error("Seat {seat} is not available")]
    SeatNotAvailable {
        /// The seat that could not be reserved.
        seat: String,
    },
    /// The seat is not occupied, so there is nothing to release.
    #[error("Seat {seat} is not reserved")]
    SeatNotReserved {
        /// The seat that could not be released.
        seat: String,
    },
    /// No flight with this number has been opened.
    #[error("Flight {flight} not found")]
    FlightNotFound {
        /// The unknown flight number.
        flight: String,
    },
    /// The flight has been closed and no longer accepts seat changes.
    #[error("Flight {flight} is closed")]
    FlightClosed {
        /// The closed flight number.
        flight: String,
    },
}

impl ErrorCode for SeatStateError {
    fn code(&self) -> &'static str {
        match self {
            Self::InvalidSeatNumber { .. } => "INVALID_SEAT_NUMBER",
            Self::SeatNotAvailable { .. } => "SEAT_NOT_AVAILABLE",
            Self::SeatNotReserved { .. } => "SEAT_NOT_RESERVED",
            Self::FlightNotFound { .. } => "FLIGHT_NOT_FOUND",
            Self::FlightClosed { .. } => "FLIGHT_CLOSED",
        }
    }

    fn field(&self) -> &'static str {
        match self {
            Self::FlightNotFound { .. } | Self::FlightClosed { .. } => "flight_number",
            Self::InvalidSeatNumber { .. }
            | Self::SeatNotAvailable { .. }
            | Self::SeatNotReserved { .. } => "seat_number",
        }
    }
}
