//! AWS SNS provider implementation.

use super::client::SnsClient;
use super::errors::{Result, SnsError};
use crate::providers::traits::OptInProvider;
use crate::types::PhoneNumber;

/// AWS SNS provider implementation.
///
/// This wraps the [`SnsClient`] and implements the generic [`OptInProvider`]
/// trait so it can be injected into an
/// [`OptInService`](crate::OptInService).
///
/// # Example
///
/// ```rust,ignore
/// use sns_optin::sns::{SnsClient, SnsProvider};
/// use sns_optin::{OptInRequest, OptInService, OptInServiceTrait};
///
/// let client = SnsClient::builder().region("us-east-1").build().await;
/// let service = OptInService::with_provider(SnsProvider::new(client));
///
/// let response = service
///     .opt_in(OptInRequest::new(["555-123-4567"]))
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct SnsProvider {
    client: SnsClient,
}

impl SnsProvider {
    /// Create a new SNS provider.
    pub fn new(client: SnsClient) -> Self {
        Self { client }
    }

    /// Create a provider for the given region using the default credential chain.
    pub async fn from_region(region: Option<String>) -> Self {
        let client = SnsClient::builder().maybe_region(region).build().await;
        Self::new(client)
    }

    /// Get reference to the inner client.
    pub fn client(&self) -> &SnsClient {
        &self.client
    }
}

impl OptInProvider for SnsProvider {
    type Error = SnsError;

    async fn check_if_opted_out(&self, number: &PhoneNumber) -> Result<bool> {
        self.client.check_if_phone_number_is_opted_out(number).await
    }

    async fn opt_in(&self, number: &PhoneNumber) -> Result<()> {
        self.client.opt_in_phone_number(number).await
    }

    fn name(&self) -> &'static str {
        "sns"
    }
}
