// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use airseat_domain::{FlightNumber, SeatLayout};
use serde::{Deserialize, Serialize};

/// The state of a single seat on a flight.
///
/// Seats move `Available -> Occupied -> Available`. No other transition
/// is permitted, including a transition to the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatState {
    /// The seat can be reserved.
    Available,
    /// The seat is assigned to a ticket.
    Occupied,
}

impl SeatState {
    /// Returns the string representation of the state.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "AVAILABLE",
            Self::Occupied => "OCCUPIED",
        }
    }

    /// Returns whether moving from this state to `next` is permitted.
    #[must_use]
    pub const fn can_transition_to(&self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Available, Self::Occupied) | (Self::Occupied, Self::Available)
        )
    }
}

impl std::fmt::Display for SeatState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A point-in-time view of one flight's seats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlightSnapshot {
    /// The flight this snapshot describes.
    pub flight_number: FlightNumber,
    /// The flight's seat layout in canonical form.
    pub layout: SeatLayout,
    /// Total seats in the layout.
    pub total_seats: u64,
    /// Occupied seat numbers in ascending order.
    pub occupied_seats: Vec<String>,
    /// Seats still available.
    pub remaining_capacity: u64,
    /// Whether no seat is available.
    pub is_full: bool,
}
