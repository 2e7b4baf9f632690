// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use airseat_domain::{FlightNumber, SeatClassRegistry, SeatLayout};
use std::sync::Arc;

use crate::FlightSeats;

/// Parses a layout against the default seat classes.
pub fn create_test_layout(value: &str) -> SeatLayout {
    let classes: Arc<SeatClassRegistry> = Arc::new(SeatClassRegistry::new());
    SeatLayout::parse(value, &classes).unwrap()
}

pub fn create_test_flight_number(value: &str) -> FlightNumber {
    FlightNumber::new(value).unwrap()
}

/// A flight with no seeded seats.
pub fn create_test_flight(layout: &str) -> FlightSeats {
    FlightSeats::new(
        create_test_flight_number("VN123"),
        create_test_layout(layout),
        Vec::new(),
    )
}
