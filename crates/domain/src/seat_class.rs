// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Seat classes and the registry that names them.
//!
//! The registry is the single extension point for new seat classes:
//! validators and layouts resolve class tokens through it and never
//! hard-code class names.

use crate::error::{ErrorCode, SeatClassError};
use crate::outcome::Outcome;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};
use tracing::debug;

/// The seat classes every registry starts with.
pub const DEFAULT_SEAT_CLASSES: [(&str, &str); 3] =
    [("ECONOMY", "E"), ("BUSINESS", "B"), ("FIRST", "F")];

/// A named category of seating with a short code.
///
/// Equality, hashing and ordering are defined on the name only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatClass {
    /// Upper-case class name, e.g. `ECONOMY`.
    name: String,
    /// Upper-case class code used as the seat number prefix, e.g. `E`.
    code: String,
}

impl PartialEq for SeatClass {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for SeatClass {}

impl std::hash::Hash for SeatClass {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialOrd for SeatClass {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SeatClass {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.name.cmp(&other.name)
    }
}

impl std::fmt::Display for SeatClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl SeatClass {
    /// Creates a seat class, normalizing both parts to upper case.
    ///
    /// # Errors
    ///
    /// Returns `INVALID_SEAT_CLASS` if the name is empty or not alphanumeric,
    /// or if the code is empty or not alphabetic. Codes may not contain digits
    /// because they prefix the numeric part of a seat number.
    pub fn new(name: &str, code: &str) -> Outcome<Self> {
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(SeatClassError::InvalidName(name.to_string()).to_core_error());
        }
        if code.is_empty() || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(SeatClassError::InvalidCode(code.to_string()).to_core_error());
        }
        Ok(Self {
            name: name.to_ascii_uppercase(),
            code: code.to_ascii_uppercase(),
        })
    }

    /// Returns the class name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the class code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }
}

/// Name-to-class table shared by validators, parsers and layouts.
///
/// Construct one at startup and hand it out by reference or `Arc`.
/// Lookups take a read lock; registration takes a write lock.
#[derive(Debug)]
pub struct SeatClassRegistry {
    classes: RwLock<BTreeMap<String, SeatClass>>,
}

impl SeatClassRegistry {
    /// Creates a registry seeded with ECONOMY/E, BUSINESS/B and FIRST/F.
    #[must_use]
    pub fn new() -> Self {
        let classes: BTreeMap<String, SeatClass> = DEFAULT_SEAT_CLASSES
            .iter()
            .map(|(name, code)| {
                (
                    (*name).to_string(),
                    SeatClass {
                        name: (*name).to_string(),
                        code: (*code).to_string(),
                    },
                )
            })
            .collect();
        Self {
            classes: RwLock::new(classes),
        }
    }

    /// Creates a registry with no classes at all.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            classes: RwLock::new(BTreeMap::new()),
        }
    }

    /// Looks up a class by its (case-insensitive) name.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<SeatClass> {
        let classes = self.classes.read().unwrap_or_else(PoisonError::into_inner);
        classes.get(&name.to_ascii_uppercase()).cloned()
    }

    /// Looks up a class by its (case-insensitive) code.
    ///
    /// Linear scan in name order. Codes are unique within a registry.
    #[must_use]
    pub fn get_by_code(&self, code: &str) -> Option<SeatClass> {
        let classes = self.classes.read().unwrap_or_else(PoisonError::into_inner);
        classes
            .values()
            .find(|class| class.code.eq_ignore_ascii_case(code))
            .cloned()
    }

    /// Resolves a layout token, trying the name first and then the code.
    #[must_use]
    pub fn resolve(&self, token: &str) -> Option<SeatClass> {
        self.get_by_name(token).or_else(|| self.get_by_code(token))
    }

    /// Returns every registered class, ordered by name.
    #[must_use]
    pub fn get_all(&self) -> Vec<SeatClass> {
        let classes = self.classes.read().unwrap_or_else(PoisonError::into_inner);
        classes.values().cloned().collect()
    }

    /// Returns the number of registered classes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns whether no classes are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Registers a seat class, replacing any existing class with the same name.
    ///
    /// # Arguments
    ///
    /// * `name` - The class name, e.g. `PREMIUM`
    /// * `code` - The seat number prefix, e.g. `P`
    ///
    /// # Returns
    ///
    /// The normalized class as stored in the registry.
    ///
    /// # Errors
    ///
    /// Returns `INVALID_SEAT_CLASS` if the name or code is malformed, or
    /// `DUPLICATE_SEAT_CLASS_CODE` if another class already uses the code.
    pub fn register_seat_class(&self, name: &str, code: &str) -> Outcome<SeatClass> {
        let class: SeatClass = SeatClass::new(name, code)?;
        let mut classes = self.classes.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = classes
            .values()
            .find(|other| other.code == class.code && other.name != class.name)
        {
            return Err(SeatClassError::DuplicateCode {
                code: class.code.clone(),
                existing: existing.name.clone(),
            }
            .to_core_error());
        }
        let replaced: Option<SeatClass> = classes.insert(class.name.clone(), class.clone());
        debug!(
            name = class.name(),
            code = class.code(),
            replaced = replaced.is_some(),
            "Registered seat class"
        );
        Ok(class)
    }
}

impl Default for SeatClassRegistry {
    fn default() -> Self {
        Self::new()
    }
}
