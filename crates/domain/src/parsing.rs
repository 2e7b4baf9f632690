// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Parsing strategies and the registry that selects them by name.
//!
//! Parsing is lenient: a strategy decomposes a string as best it can and
//! leaves acceptance to the validators. The seat layout strategy, for
//! example, silently drops tokens that name no registered class.

use crate::seat_class::{SeatClass, SeatClassRegistry};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, PoisonError, RwLock};

/// Name of the strategy every registry is guaranteed to hold.
pub const STANDARD_STRATEGY: &str = "standard";

/// Separator between the fields of a canonical contact string.
pub const CONTACT_SEPARATOR: char = '|';

/// Name of the passport strategy that reads `NUMBER (COUNTRY)` or `NUMBER,COUNTRY`.
pub const PASSPORT_DISPLAY_STRATEGY: &str = "display";

/// Seat counts keyed by class, as produced by layout parsing.
///
/// Counts are signed so that validation can reject non-positive values.
pub type SeatCounts = BTreeMap<SeatClass, i64>;

/// The three already-split fields of a contact record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Postal address, possibly empty.
    pub address: String,
}

impl ContactFields {
    /// Creates contact fields from their parts.
    #[must_use]
    pub fn new(email: &str, phone: &str, address: &str) -> Self {
        Self {
            email: email.to_string(),
            phone: phone.to_string(),
            address: address.to_string(),
        }
    }
}

impl From<(String, String, String)> for ContactFields {
    fn from((email, phone, address): (String, String, String)) -> Self {
        Self {
            email,
            phone,
            address,
        }
    }
}

/// The issuing country and number of a passport, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportFields {
    /// Issuing country code, e.g. `US`.
    pub issuing_country: String,
    /// Passport number digits.
    pub number: String,
}

impl PassportFields {
    /// Creates passport fields from their parts.
    #[must_use]
    pub fn new(issuing_country: &str, number: &str) -> Self {
        Self {
            issuing_country: issuing_country.to_string(),
            number: number.to_string(),
        }
    }
}

/// Turns a string into a structured intermediate.
///
/// Returns `None` when the input cannot be decomposed at all.
pub trait ParseStrategy<T>: Send + Sync {
    /// Parses `input`.
    fn parse(&self, input: &str) -> Option<T>;
}

impl<T, F> ParseStrategy<T> for F
where
    F: Fn(&str) -> Option<T> + Send + Sync,
{
    fn parse(&self, input: &str) -> Option<T> {
        self(input)
    }
}

/// Maps strategy names to parsing strategies.
///
/// The `standard` strategy always exists and is returned for any name that
/// has not been registered.
pub struct ParserRegistry<T> {
    strategies: RwLock<HashMap<String, Arc<dyn ParseStrategy<T>>>>,
}

impl<T: 'static> ParserRegistry<T> {
    /// Creates a registry whose `standard` strategy is `standard`.
    #[must_use]
    pub fn new<S>(standard: S) -> Self
    where
        S: ParseStrategy<T> + 'static,
    {
        let mut strategies: HashMap<String, Arc<dyn ParseStrategy<T>>> = HashMap::new();
        strategies.insert(STANDARD_STRATEGY.to_string(), Arc::new(standard));
        Self {
            strategies: RwLock::new(strategies),
        }
    }

    /// Registers `strategy` under `name`, replacing any previous entry.
    ///
    /// Registering under `standard` replaces the fallback strategy.
    pub fn register<S>(&self, name: &str, strategy: S)
    where
        S: ParseStrategy<T> + 'static,
    {
        self.strategies
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.to_string(), Arc::new(strategy));
    }

    /// Returns whether a strategy is registered under exactly `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.strategies
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(name)
    }

    /// Returns the strategy registered under `name`, or the standard one.
    #[must_use]
    pub fn get(&self, name: &str) -> Arc<dyn ParseStrategy<T>> {
        let strategies = self.strategies.read().unwrap_or_else(PoisonError::into_inner);
        strategies
            .get(name)
            .or_else(|| strategies.get(STANDARD_STRATEGY))
            .map_or_else(
                || -> Arc<dyn ParseStrategy<T>> { Arc::new(|_: &str| -> Option<T> { None }) },
                Arc::clone,
            )
    }

    /// Parses `input` with the strategy selected by `name`.
    #[must_use]
    pub fn parse(&self, name: &str, input: &str) -> Option<T> {
        self.get(name).parse(input)
    }

    /// Returns the registered strategy names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .strategies
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }
}

impl<T: 'static> std::fmt::Debug for ParserRegistry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParserRegistry")
            .field("strategies", &self.names())
            .finish()
    }
}

/// Splits `email|phone|address`.
///
/// Email and phone must be non-empty; the address is everything after the
/// second separator and may be empty.
#[must_use]
pub fn parse_contact(input: &str) -> Option<ContactFields> {
    let (email, rest) = input.split_once(CONTACT_SEPARATOR)?;
    let (phone, address) = rest.split_once(CONTACT_SEPARATOR)?;
    if email.is_empty() || phone.is_empty() {
        return None;
    }
    Some(ContactFields::new(email, phone, address))
}

/// Creates a contact parser registry holding [`parse_contact`] as `standard`.
#[must_use]
pub fn contact_parsers() -> ParserRegistry<ContactFields> {
    ParserRegistry::new(parse_contact)
}

/// Splits `COUNTRY:NUMBER` at the first colon.
#[must_use]
pub fn parse_passport(input: &str) -> Option<PassportFields> {
    let (country, number) = input.split_once(':')?;
    Some(PassportFields::new(country, number))
}

/// Reads the display form `NUMBER (COUNTRY)` or the pair `NUMBER,COUNTRY`.
///
/// Whitespace around the separator is ignored.
#[must_use]
pub fn parse_passport_display(input: &str) -> Option<PassportFields> {
    let (number, country) = match input.strip_suffix(')') {
        Some(inner) => inner.split_once('(')?,
        None => input.split_once(',')?,
    };
    let (number, country) = (number.trim_end(), country.trim_start());
    if number.is_empty() || country.is_empty() {
        return None;
    }
    Some(PassportFields::new(country, number))
}

/// Creates a passport parser registry.
///
/// [`parse_passport`] is the `standard` strategy and
/// [`parse_passport_display`] is registered as `display`.
#[must_use]
pub fn passport_parsers() -> ParserRegistry<PassportFields> {
    let parsers: ParserRegistry<PassportFields> = ParserRegistry::new(parse_passport);
    parsers.register(PASSPORT_DISPLAY_STRATEGY, parse_passport_display);
    parsers
}

/// The standard `CLASS:COUNT,CLASS:COUNT` layout strategy.
///
/// Class tokens are upper-cased and resolved through the registry by name,
/// then by code. Entries without a colon, with an unknown class, or with a
/// count that is not an integer are skipped. A later entry for the same
/// class replaces an earlier one.
#[derive(Debug, Clone)]
pub struct StandardSeatLayoutParser {
    classes: Arc<SeatClassRegistry>,
}

impl StandardSeatLayoutParser {
    /// Creates the strategy over a shared class registry.
    #[must_use]
    pub const fn new(classes: Arc<SeatClassRegistry>) -> Self {
        Self { classes }
    }
}

impl ParseStrategy<SeatCounts> for StandardSeatLayoutParser {
    fn parse(&self, input: &str) -> Option<SeatCounts> {
        let mut counts: SeatCounts = SeatCounts::new();
        for entry in input.split(',') {
            let Some((token, count)) = entry.split_once(':') else {
                continue;
            };
            let Some(class) = self.classes.resolve(&token.to_ascii_uppercase()) else {
                continue;
            };
            let Ok(count) = count.trim().parse::<i64>() else {
                continue;
            };
            counts.insert(class, count);
        }
        Some(counts)
    }
}

/// Creates a layout parser registry holding [`StandardSeatLayoutParser`] as `standard`.
#[must_use]
pub fn seat_layout_parsers(classes: Arc<SeatClassRegistry>) -> ParserRegistry<SeatCounts> {
    ParserRegistry::new(StandardSeatLayoutParser::new(classes))
}
