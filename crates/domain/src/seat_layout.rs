// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Seat layouts and seat-number generation.
//!
//! A layout maps seat classes to positive seat counts. Seat numbers are the
//! class code followed by a 1-based index zero-padded to the number of
//! decimal digits in the class total: 100 economy seats produce `E001` to
//! `E100`, 9 produce `E1` to `E9`. Each class is padded independently.

use crate::error::{ErrorCode, SeatLayoutError};
use crate::outcome::Outcome;
use crate::parsing::{ParseStrategy, ParserRegistry, SeatCounts, StandardSeatLayoutParser};
use crate::seat_class::{SeatClass, SeatClassRegistry};
use crate::validation::{validate_seat_counts, validate_seat_layout};
use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use tracing::debug;

/// Number of decimal digits used to pad seat indexes for a class of `count` seats.
#[must_use]
pub fn seat_number_width(count: u32) -> usize {
    count.to_string().len()
}

/// Formats the seat number for `index` in a class with `code` and `count` seats.
#[must_use]
pub fn format_seat_number(code: &str, index: u32, count: u32) -> String {
    let width: usize = seat_number_width(count);
    format!("{code}{index:0width$}")
}

// The registry can change between validation and lookup
fn codes_collide(seats: &BTreeMap<SeatClass, u32>) -> bool {
    let codes: BTreeSet<&str> = seats.keys().map(SeatClass::code).collect();
    codes.len() != seats.len()
}

/// A validated mapping from seat class to seat count.
///
/// Every class in a layout has a distinct code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatLayout {
    seats: BTreeMap<SeatClass, u32>,
}

impl SeatLayout {
    /// Builds a layout from a class-to-count map.
    ///
    /// Each key is replaced by the registry's entry of the same name, so the
    /// layout always carries the registered code.
    ///
    /// # Arguments
    ///
    /// * `counts` - Seat counts keyed by class
    /// * `classes` - The registry the classes must belong to
    ///
    /// # Errors
    ///
    /// Returns the aggregated diagnostics of [`validate_seat_counts`] if the
    /// map is empty, names unregistered classes, or holds non-positive counts.
    /// Returns `DUPLICATE_SEAT_CLASS_CODE` if the registry changed while the
    /// layout was built and two of its classes now share a code.
    pub fn from_counts(counts: &SeatCounts, classes: &SeatClassRegistry) -> Outcome<Self> {
        validate_seat_counts(counts, classes).into_outcome(|| ())?;

        let mut seats: BTreeMap<SeatClass, u32> = BTreeMap::new();
        for (class, count) in counts {
            let registered: SeatClass = classes
                .get_by_name(class.name())
                .ok_or_else(|| SeatLayoutError::InvalidSeatType.to_core_error())?;
            let count: u32 =
                u32::try_from(*count).map_err(|_| SeatLayoutError::InvalidSeatCount.to_core_error())?;
            seats.insert(registered, count);
        }
        if codes_collide(&seats) {
            return Err(SeatLayoutError::DuplicateSeatClassCode.to_core_error());
        }

        let layout: Self = Self { seats };
        debug!(layout = %layout, total = layout.total_seats(), "Built seat layout");
        Ok(layout)
    }

    /// Parses and validates a canonical `CLASS:COUNT,...` string.
    ///
    /// The string is validated first, so callers get the full set of
    /// grammar and per-entry diagnostics.
    ///
    /// # Errors
    ///
    /// Returns the aggregated diagnostics of [`validate_seat_layout`].
    pub fn parse(value: &str, classes: &Arc<SeatClassRegistry>) -> Outcome<Self> {
        validate_seat_layout(value, classes).into_outcome(|| ())?;

        let parser: StandardSeatLayoutParser = StandardSeatLayoutParser::new(Arc::clone(classes));
        let counts: SeatCounts = parser
            .parse(value)
            .ok_or_else(|| SeatLayoutError::InvalidFormat.to_core_error())?;
        Self::from_counts(&counts, classes)
    }

    /// Parses a layout with a named strategy and validates the result.
    ///
    /// Strategies may accept formats other than the canonical one, so only
    /// the parsed map is validated. A strategy that rejects the input, or
    /// drops every entry, yields `EMPTY_SEAT_CLASS_MAP`.
    ///
    /// # Errors
    ///
    /// Returns the aggregated diagnostics of [`validate_seat_counts`].
    pub fn parse_with(
        value: &str,
        parsers: &ParserRegistry<SeatCounts>,
        strategy: &str,
        classes: &SeatClassRegistry,
    ) -> Outcome<Self> {
        let counts: SeatCounts = parsers.parse(strategy, value).unwrap_or_default();
        Self::from_counts(&counts, classes)
    }

    /// Returns the classes and their counts, ordered by class name.
    pub fn seat_classes(&self) -> impl Iterator<Item = (&SeatClass, u32)> {
        self.seats.iter().map(|(class, count)| (class, *count))
    }

    /// Returns the layout class whose code is `code`.
    #[must_use]
    pub fn class_by_code(&self, code: &str) -> Option<&SeatClass> {
        self.seats.keys().find(|class| class.code() == code)
    }

    /// Returns whether the layout contains a class with code `code`.
    #[must_use]
    pub fn has_seat_class(&self, code: &str) -> bool {
        self.class_by_code(code).is_some()
    }

    /// Returns the seat count of the class with code `code`, or 0.
    #[must_use]
    pub fn get_seat_count(&self, code: &str) -> u32 {
        self.class_by_code(code)
            .and_then(|class| self.seats.get(class).copied())
            .unwrap_or(0)
    }

    /// Returns the total number of seats across all classes.
    #[must_use]
    pub fn total_seats(&self) -> u64 {
        self.seats.values().map(|count| u64::from(*count)).sum()
    }

    /// Generates every seat number of the class with code `code`, in order.
    ///
    /// Returns an empty list if the layout has no such class.
    #[must_use]
    pub fn generate_seats(&self, code: &str) -> Vec<String> {
        let count: u32 = self.get_seat_count(code);
        (1..=count)
            .map(|index| format_seat_number(code, index, count))
            .collect()
    }

    /// Generates every seat number in the layout, class by class in name order.
    #[must_use]
    pub fn seat_universe(&self) -> Vec<String> {
        self.seats
            .keys()
            .flat_map(|class| self.generate_seats(class.code()))
            .collect()
    }

    /// Finds the layout class a seat number's prefix refers to.
    ///
    /// The prefix must be followed by at least one digit and nothing else.
    /// When several codes match, the longest wins.
    #[must_use]
    pub fn class_for_seat(&self, seat_number: &str) -> Option<(&SeatClass, u32)> {
        self.seat_classes()
            .filter(|(class, _)| {
                seat_number.strip_prefix(class.code()).is_some_and(|digits| {
                    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
                })
            })
            .max_by_key(|(class, _)| class.code().len())
    }

    /// Resolves a seat number to its class and 1-based sequence number.
    ///
    /// The numeric suffix must be padded to the width implied by the class's
    /// own count and lie in `[1, count]`.
    #[must_use]
    pub fn locate_seat(&self, seat_number: &str) -> Option<(&SeatClass, u32)> {
        let (class, count) = self.class_for_seat(seat_number)?;
        let digits: &str = seat_number.strip_prefix(class.code())?;
        if digits.len() != seat_number_width(count) {
            return None;
        }
        let sequence: u32 = digits.parse().ok()?;
        (1..=count).contains(&sequence).then_some((class, sequence))
    }

    /// Returns whether `seat_number` names a seat of this layout.
    #[must_use]
    pub fn is_valid_seat_number(&self, seat_number: &str) -> bool {
        self.locate_seat(seat_number).is_some()
    }
}

impl std::fmt::Display for SeatLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts: Vec<String> = self
            .seats
            .iter()
            .map(|(class, count)| format!("{}:{count}", class.name()))
            .collect();
        parts.sort();
        write!(f, "{}", parts.join(","))
    }
}

impl Serialize for SeatLayout {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
