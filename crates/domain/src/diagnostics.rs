// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field-scoped validation diagnostics.
//!
//! A [`Diagnostics`] collector accumulates every error found while checking
//! one candidate value. A value is valid if and only if the collector is empty.

use crate::error::ErrorCode;
use crate::outcome::{CoreError, Outcome};
use serde::{Deserialize, Serialize};

/// A single validation failure for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// Human-readable description of the failure.
    pub message: String,
    /// Machine-readable error code.
    pub code: String,
}

impl ValidationError {
    /// Creates a new `ValidationError`.
    #[must_use]
    pub fn new(
        field: impl Into<String>,
        message: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code: code.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Ordered collection of validation errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Diagnostics {
    errors: Vec<ValidationError>,
}

impl Diagnostics {
    /// Creates an empty collector.
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Appends an error built from its parts.
    pub fn add_error(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
        code: impl Into<String>,
    ) {
        self.errors.push(ValidationError::new(field, message, code));
    }

    /// Appends a typed error, taking field, message and code from it.
    pub fn add<E: ErrorCode>(&mut self, error: &E) {
        self.add_error(error.field(), error.to_string(), error.code());
    }

    /// Moves every error from `other` onto the end of this collector.
    pub fn combine(&mut self, other: Self) {
        self.errors.extend(other.errors);
    }

    /// Returns whether no errors were recorded.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the recorded errors in insertion order.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Returns the number of recorded errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns whether no errors were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns whether any recorded error carries `code`.
    #[must_use]
    pub fn has_code(&self, code: &str) -> bool {
        self.errors.iter().any(|error| error.code == code)
    }

    /// Returns all `field: message` entries joined with `; `.
    #[must_use]
    pub fn messages(&self) -> String {
        self.errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<String>>()
            .join("; ")
    }

    /// Returns all codes joined with `;`.
    #[must_use]
    pub fn codes(&self) -> String {
        self.errors
            .iter()
            .map(|error| error.code.as_str())
            .collect::<Vec<&str>>()
            .join(";")
    }

    /// Collapses the collector into a single aggregate error.
    #[must_use]
    pub fn to_error(&self) -> CoreError {
        CoreError::new(self.codes(), self.messages())
    }

    /// Builds the value with `build` if valid, otherwise fails with the aggregate error.
    ///
    /// # Errors
    ///
    /// Returns the aggregate [`CoreError`] when any error was recorded.
    pub fn into_outcome<T, F>(self, build: F) -> Outcome<T>
    where
        F: FnOnce() -> T,
    {
        if self.is_valid() {
            Ok(build())
        } else {
            Err(self.to_error())
        }
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
