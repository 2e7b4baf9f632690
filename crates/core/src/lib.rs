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

mod error;
mod inventory;
mod occupancy;
mod state;

#[cfg(test)]
mod tests;

pub use error::SeatStateError;
pub use inventory::{FlightSeats, SeatInventory};
pub use occupancy::{InMemoryOccupancy, OccupancySource};
pub use state::{FlightSnapshot, SeatState};
