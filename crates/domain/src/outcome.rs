// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The success-or-error container returned by every public operation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The failure half of an [`Outcome`].
///
/// Carries a stable machine-readable `code` and a human-readable `message`.
/// Aggregated validation failures join several codes with `;`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[error("{message} ({code})")]
pub struct CoreError {
    /// Machine-readable error code, e.g. `INVALID_FORMAT`.
    code: String,
    /// Human-readable description.
    message: String,
}

impl CoreError {
    /// Creates a new `CoreError`.
    ///
    /// # Arguments
    ///
    /// * `code` - The machine-readable error code
    /// * `message` - The human-readable description
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Returns the error code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Iterates over the individual codes of an aggregated error.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.code.split(';').filter(|code| !code.is_empty())
    }

    /// Returns whether `code` is one of the codes carried by this error.
    #[must_use]
    pub fn has_code(&self, code: &str) -> bool {
        self.codes().any(|candidate| candidate == code)
    }
}

/// Either a value of type `T` or a [`CoreError`].
pub type Outcome<T> = Result<T, CoreError>;

/// Wraps `value` in a successful [`Outcome`].
///
/// # Errors
///
/// Never returns an error.
pub const fn success<T>(value: T) -> Outcome<T> {
    Ok(value)
}

/// Builds a failed [`Outcome`] from a code and a message.
///
/// # Errors
///
/// Always returns the constructed error.
pub fn failure<T>(code: impl Into<String>, message: impl Into<String>) -> Outcome<T> {
    Err(CoreError::new(code, message))
}
