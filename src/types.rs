//! Core types for phone number opt-in operations.

use crate::utils::normalize::{SENTINEL, normalize_phone_number};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// PhoneNumber
// =============================================================================

/// Error when building a [`PhoneNumber`] from raw input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhoneNumberError {
    /// Input contained no digits, so normalization produced only the sentinel.
    #[error("phone number '{raw}' contains no digits")]
    NoDigits { raw: String },
}

/// Normalized phone number in the form SNS expects (e.g., "+15551234567").
///
/// A `PhoneNumber` is always `+` followed by at least one digit. The bare
/// sentinel `"+"` produced by [`normalize_phone_number`] for digit-less input
/// can never be represented by this type, so it cannot reach the remote
/// service by accident.
///
/// # Example
///
/// ```rust
/// use sns_optin::PhoneNumber;
///
/// let number = PhoneNumber::parse("555-123-4567").unwrap();
/// assert_eq!(number.as_str(), "+15551234567");
///
/// assert!(PhoneNumber::parse("abc").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Normalize raw input and reject the sentinel.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, PhoneNumberError> {
        let raw = raw.as_ref();
        let normalized = normalize_phone_number(raw);
        if normalized == SENTINEL {
            return Err(PhoneNumberError::NoDigits {
                raw: raw.to_string(),
            });
        }
        Ok(Self(normalized))
    }

    /// Get the number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the number, returning the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl FromStr for PhoneNumber {
    type Err = PhoneNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for PhoneNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for String {
    fn from(number: PhoneNumber) -> Self {
        number.0
    }
}

impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(d)?;
        PhoneNumber::parse(raw).map_err(de::Error::custom)
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.0)
    }
}

// =============================================================================
// Outcome
// =============================================================================

/// Classification of a single phone number after processing.
///
/// Created once per input number and folded into a [`BatchResult`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The number was opted out and the opt-in call succeeded.
    Success(PhoneNumber),
    /// The number could not be opted in.
    ///
    /// Holds the raw input when it had no digits, otherwise the normalized
    /// number.
    Failure(String),
}

impl Outcome {
    /// Returns true for [`Outcome::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

// =============================================================================
// BatchResult
// =============================================================================

/// Partitioned outcomes of one batch, each side in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchResult {
    /// Numbers that were opted in.
    pub successes: Vec<PhoneNumber>,
    /// Raw malformed inputs or normalized numbers that failed.
    pub failures: Vec<String>,
}

impl BatchResult {
    /// Fold one outcome into the result.
    pub fn push(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Success(number) => self.successes.push(number),
            Outcome::Failure(number) => self.failures.push(number),
        }
    }

    /// Total number of classified inputs.
    pub fn len(&self) -> usize {
        self.successes.len() + self.failures.len()
    }

    /// Returns true if nothing has been classified yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Extend<Outcome> for BatchResult {
    fn extend<I: IntoIterator<Item = Outcome>>(&mut self, iter: I) {
        for outcome in iter {
            self.push(outcome);
        }
    }
}

impl FromIterator<Outcome> for BatchResult {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        let mut result = Self::default();
        result.extend(iter);
        result
    }
}
