// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Passenger travel documents: passport numbers and ticket numbers.

use crate::error::{ErrorCode, PassportNumberError};
use crate::outcome::{CoreError, Outcome};
use crate::parsing::{ParserRegistry, PassportFields, parse_passport};
use crate::types::FlightNumber;
use crate::validation::{
    validate_passport_fields, validate_passport_number, validate_ticket_number,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::{PoisonError, RwLock};
use tracing::debug;

/// The issuing countries every registry starts with.
pub const DEFAULT_ISSUING_COUNTRIES: [(&str, &str); 3] = [
    ("GB", "United Kingdom"),
    ("US", "United States"),
    ("VN", "Vietnam"),
];

fn is_country_code(code: &str) -> bool {
    code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic())
}

/// Names of the countries that issue passports, keyed by 2-letter code.
///
/// Passport validation only checks the code's shape; the registry is used
/// to describe a passport, not to accept it.
#[derive(Debug)]
pub struct IssuingCountryRegistry {
    countries: RwLock<BTreeMap<String, String>>,
}

impl IssuingCountryRegistry {
    /// Creates a registry seeded with [`DEFAULT_ISSUING_COUNTRIES`].
    #[must_use]
    pub fn new() -> Self {
        let countries: BTreeMap<String, String> = DEFAULT_ISSUING_COUNTRIES
            .iter()
            .map(|(code, name)| ((*code).to_string(), (*name).to_string()))
            .collect();
        Self {
            countries: RwLock::new(countries),
        }
    }

    /// Registers or renames an issuing country.
    ///
    /// # Errors
    ///
    /// Returns `INVALID_ISSUING_COUNTRY` if `code` is not two letters or
    /// `name` is blank.
    pub fn register_issuing_country(&self, code: &str, name: &str) -> Outcome<()> {
        let name: &str = name.trim();
        if !is_country_code(code) || name.is_empty() {
            return Err(PassportNumberError::InvalidIssuingCountry.to_core_error());
        }
        let code: String = code.to_ascii_uppercase();
        let replaced: Option<String> = self
            .countries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(code.clone(), name.to_string());
        debug!(code = %code, name, replaced = replaced.is_some(), "Registered issuing country");
        Ok(())
    }

    /// Returns the name of the country with (case-insensitive) `code`.
    #[must_use]
    pub fn country_name(&self, code: &str) -> Option<String> {
        self.countries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&code.to_ascii_uppercase())
            .cloned()
    }

    /// Returns whether `code` is registered.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.country_name(code).is_some()
    }

    /// Returns the registered codes, sorted.
    #[must_use]
    pub fn codes(&self) -> Vec<String> {
        self.countries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }

    /// Returns the number of registered countries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.countries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns whether no countries are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for IssuingCountryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// A passport number with its issuing country, e.g. `US:123456`.
///
/// The country code is stored upper-cased, so `us:123456` and `US:123456`
/// are the same passport.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PassportNumber {
    issuing_country: String,
    number: String,
}

impl PassportNumber {
    fn from_valid(fields: &PassportFields) -> Self {
        Self {
            issuing_country: fields.issuing_country.to_ascii_uppercase(),
            number: fields.number.clone(),
        }
    }

    /// Creates a passport number from its canonical `COUNTRY:NUMBER` form.
    ///
    /// # Arguments
    ///
    /// * `value` - The combined string, e.g. `US:123456`
    ///
    /// # Errors
    ///
    /// Returns the aggregated diagnostics of [`validate_passport_number`].
    pub fn new(value: &str) -> Outcome<Self> {
        validate_passport_number(value).into_outcome(|| ())?;
        let fields: PassportFields = parse_passport(value)
            .ok_or_else(|| PassportNumberError::InvalidFormat.to_core_error())?;
        Ok(Self::from_valid(&fields))
    }

    /// Creates a passport number from a separate country code and number.
    ///
    /// # Errors
    ///
    /// Returns `EMPTY_PASSPORT_NUMBER` if either part is empty, otherwise
    /// any of `INVALID_ISSUING_COUNTRY` and `INVALID_NUMBER_LENGTH`.
    pub fn from_parts(issuing_country: &str, number: &str) -> Outcome<Self> {
        Self::from_fields(&PassportFields::new(issuing_country, number))
    }

    /// Creates a passport number from parsed fields.
    ///
    /// # Errors
    ///
    /// Same as [`PassportNumber::from_parts`].
    pub fn from_fields(fields: &PassportFields) -> Outcome<Self> {
        validate_passport_fields(fields).into_outcome(|| Self::from_valid(fields))
    }

    /// Parses a passport number with a named strategy, then validates it.
    ///
    /// # Errors
    ///
    /// Returns `INVALID_FORMAT` if the strategy cannot split `value`,
    /// otherwise the errors of [`PassportNumber::from_fields`].
    pub fn parse_with(
        value: &str,
        parsers: &ParserRegistry<PassportFields>,
        strategy: &str,
    ) -> Outcome<Self> {
        let fields: PassportFields = parsers
            .parse(strategy, value)
            .ok_or_else(|| PassportNumberError::InvalidFormat.to_core_error())?;
        Self::from_fields(&fields)
    }

    /// Returns the upper-case issuing country code.
    #[must_use]
    pub fn issuing_country(&self) -> &str {
        &self.issuing_country
    }

    /// Returns the passport number digits.
    #[must_use]
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Looks up the issuing country's name.
    #[must_use]
    pub fn issuing_country_name(&self, countries: &IssuingCountryRegistry) -> Option<String> {
        countries.country_name(&self.issuing_country)
    }

    /// Formats as `NUMBER{separator}COUNTRY`.
    #[must_use]
    pub fn format_with(&self, separator: &str) -> String {
        format!("{}{separator}{}", self.number, self.issuing_country)
    }

    /// Formats as `NUMBER (COUNTRY)`, the form read by the `display` strategy.
    #[must_use]
    pub fn display_form(&self) -> String {
        format!("{} ({})", self.number, self.issuing_country)
    }
}

impl std::fmt::Display for PassportNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.issuing_country, self.number)
    }
}

impl FromStr for PassportNumber {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for PassportNumber {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<PassportNumber> for String {
    fn from(passport: PassportNumber) -> Self {
        passport.to_string()
    }
}

/// A ticket number, e.g. `VN123-20240320-0001`.
///
/// The three hyphen-separated parts are the issuing flight code, the issue
/// date as `YYYYMMDD` and a 4-digit sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TicketNumber {
    value: String,
}

impl TicketNumber {
    /// Creates a validated ticket number.
    ///
    /// # Errors
    ///
    /// Returns `EMPTY_TICKET_NUMBER` or `INVALID_FORMAT`.
    pub fn new(value: &str) -> Outcome<Self> {
        validate_ticket_number(value).into_outcome(|| Self {
            value: value.to_string(),
        })
    }

    /// Builds the ticket number for `sequence` on `flight` issued on `issue_date`.
    ///
    /// # Arguments
    ///
    /// * `flight` - The flight the ticket is issued for
    /// * `issue_date` - The issue date as `YYYYMMDD`
    /// * `sequence` - The ticket's sequence for that flight and day, 0-9999
    ///
    /// # Errors
    ///
    /// Returns `INVALID_FORMAT` if the date is not 8 digits or the sequence
    /// needs more than 4 digits.
    pub fn issue(flight: &FlightNumber, issue_date: &str, sequence: u16) -> Outcome<Self> {
        Self::new(&format!("{flight}-{issue_date}-{sequence:04}"))
    }

    /// Returns the ticket number value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    fn part(&self, index: usize) -> &str {
        self.value.split('-').nth(index).unwrap_or_default()
    }

    /// Returns the flight code part, e.g. `VN123`.
    #[must_use]
    pub fn flight_code(&self) -> &str {
        self.part(0)
    }

    /// Returns the issue date part as `YYYYMMDD`.
    #[must_use]
    pub fn issue_date(&self) -> &str {
        self.part(1)
    }

    /// Returns the sequence number.
    #[must_use]
    pub fn sequence(&self) -> u16 {
        self.part(2).parse().unwrap_or_default()
    }
}

impl std::fmt::Display for TicketNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl FromStr for TicketNumber {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for TicketNumber {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<TicketNumber> for String {
    fn from(ticket: TicketNumber) -> Self {
        ticket.value
    }
}
