//! Error types for the AWS SNS provider.

use aws_sdk_sns::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_sns::operation::check_if_phone_number_is_opted_out::CheckIfPhoneNumberIsOptedOutError;
use aws_sdk_sns::operation::opt_in_phone_number::OptInPhoneNumberError;
use thiserror::Error;

/// Main error type for SNS client operations.
#[derive(Debug, Error)]
pub enum SnsError {
    /// The opt-out status query failed.
    #[error("Failed to check opt-out status: {}", DisplayErrorContext(.0))]
    CheckOptOut(#[source] SdkError<CheckIfPhoneNumberIsOptedOutError>),

    /// The opt-in call failed.
    #[error("Failed to opt in phone number: {}", DisplayErrorContext(.0))]
    OptIn(#[source] SdkError<OptInPhoneNumberError>),
}

pub type Result<T> = std::result::Result<T, SnsError>;

impl SnsError {
    /// Error code returned by SNS, if the service answered at all.
    ///
    /// Examples: `Throttling`, `InvalidParameter`, `AuthorizationError`.
    pub fn code(&self) -> Option<&str> {
        match self {
            SnsError::CheckOptOut(err) => err.as_service_error().and_then(|e| e.code()),
            SnsError::OptIn(err) => err.as_service_error().and_then(|e| e.code()),
        }
    }

    /// Returns true if SNS rejected the call because of rate limits.
    ///
    /// SNS answers with either the modelled `Throttled` error or the generic
    /// `Throttling` query error code.
    pub fn is_throttled(&self) -> bool {
        let modelled = match self {
            SnsError::CheckOptOut(err) => err
                .as_service_error()
                .is_some_and(|e| e.is_throttled_exception()),
            SnsError::OptIn(err) => err
                .as_service_error()
                .is_some_and(|e| e.is_throttled_exception()),
        };
        modelled || self.code() == Some("Throttling")
    }
}
