//! Request-level error types.
//!
//! Only validation and envelope problems abort a request. Failures of
//! individual phone numbers are never errors at this level; they are
//! reported as [`Outcome::Failure`](crate::Outcome::Failure) entries in the
//! response instead.

use thiserror::Error;

/// Fixed message for a missing or empty `phone_numbers` list.
pub const PHONE_NUMBERS_MISSING_MESSAGE: &str =
    "phone_numbers parameter was not found in Request Body";

/// Errors that abort a whole opt-in request.
#[derive(Debug, Error)]
pub enum OptInError {
    /// `phone_numbers` is absent, `null` or an empty list.
    #[error("{}", PHONE_NUMBERS_MISSING_MESSAGE)]
    MissingOrEmptyInput,

    /// Request body is not valid JSON or has the wrong shape.
    #[error("Invalid request body: {0}")]
    InvalidBody(#[source] serde_json::Error),

    /// Failed to serialize the response body.
    #[error("Failed to serialize response: {0}")]
    SerializeResponse(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, OptInError>;

impl OptInError {
    /// HTTP-style status code for this error.
    ///
    /// Always distinct from the 200 returned for processed batches.
    pub fn status_code(&self) -> u16 {
        match self {
            OptInError::MissingOrEmptyInput | OptInError::InvalidBody(_) => 400,
            OptInError::SerializeResponse(_) => 500,
        }
    }
}
