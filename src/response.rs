//! Response body for a processed batch.

use crate::types::{BatchResult, PhoneNumber};
use serde::{Deserialize, Serialize};

/// Message when every number was opted in.
pub const ALL_OPTED_IN_MESSAGE: &str = "All phone numbers provided were opted-in successfully.";

/// Message when at least one number failed.
pub const PARTIAL_OPTED_IN_MESSAGE: &str =
    "Not all numbers were opted-in, verify logs to see more details.";

/// Explanation attached whenever the failure list is non-empty.
pub const FAILED_MESSAGE: &str = "Failed opted-in phone numbers could be due to the following: \
non-existing or incorrectly formatted phone numbers or phone number does not exist, \
phone number is not subscribed to AWS SNS, \
phone number was never opted-out from AWS SNS, \
phone number last opt-in was implemented in less than 30 days \
(AWS SNS does not allow to opt-in until 30 days have passed).";

/// Result object returned for every request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptInResponse {
    pub message: String,
    #[serde(rename = "SUCCESS")]
    pub success: Vec<PhoneNumber>,
    #[serde(rename = "FAILED")]
    pub failed: Vec<String>,
    #[serde(
        rename = "FAILED_MESSAGE",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub failed_message: Option<String>,
}

impl OptInResponse {
    /// Build the response from a finished batch.
    pub fn compose(result: BatchResult) -> Self {
        let BatchResult {
            successes,
            failures,
        } = result;

        if failures.is_empty() {
            Self {
                message: ALL_OPTED_IN_MESSAGE.to_string(),
                success: successes,
                failed: failures,
                failed_message: None,
            }
        } else {
            Self {
                message: PARTIAL_OPTED_IN_MESSAGE.to_string(),
                success: successes,
                failed: failures,
                failed_message: Some(FAILED_MESSAGE.to_string()),
            }
        }
    }

    /// Returns true if every number was opted in.
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

impl From<BatchResult> for OptInResponse {
    fn from(result: BatchResult) -> Self {
        Self::compose(result)
    }
}
