//! Inbound request body and validation.

use crate::errors::{OptInError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body carrying the phone numbers to opt in.
///
/// Only the `phone_numbers` field is read; anything else in the body is
/// ignored. Individual numbers are not validated here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptInRequest {
    /// Raw phone numbers exactly as supplied by the caller.
    #[serde(default)]
    pub phone_numbers: Option<Vec<String>>,
}

impl OptInRequest {
    /// Create a request from a list of raw numbers.
    pub fn new<I, S>(phone_numbers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phone_numbers: Some(phone_numbers.into_iter().map(Into::into).collect()),
        }
    }

    /// Parse a request from a JSON body value.
    pub fn from_value(body: Value) -> Result<Self> {
        serde_json::from_value(body).map_err(OptInError::InvalidBody)
    }

    /// Parse a request from JSON text.
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(OptInError::InvalidBody)
    }

    /// Extract the phone number list, rejecting a missing or empty one.
    pub fn into_phone_numbers(self) -> Result<Vec<String>> {
        match self.phone_numbers {
            Some(numbers) if !numbers.is_empty() => Ok(numbers),
            _ => Err(OptInError::MissingOrEmptyInput),
        }
    }
}
