//! Main service implementation.

use super::batch;
use super::config::{OptInServiceConfig, OptInServiceConfigBuilder};
use super::traits::OptInServiceTrait;
use crate::errors::OptInError;
use crate::providers::traits::OptInProvider;
use crate::request::OptInRequest;
use crate::response::OptInResponse;
use crate::types::BatchResult;

#[cfg(feature = "tracing")]
use tracing::{debug, info, warn};

/// Generic opt-in service that works with any [`OptInProvider`].
///
/// This service runs the whole request pipeline:
/// - Validating that the request carries phone numbers
/// - Normalizing and classifying each number through the provider
/// - Composing the partitioned response
///
/// The provider is injected and owned by the service; there is no global
/// client.
///
/// # Example
///
/// ```rust,ignore
/// use sns_optin::{OptInRequest, OptInService, OptInServiceConfig, OptInServiceTrait};
/// use sns_optin::sns::{SnsClient, SnsProvider};
///
/// let client = SnsClient::builder().region("us-east-1").build().await;
/// let service = OptInService::new(SnsProvider::new(client), OptInServiceConfig::default());
///
/// let response = service
///     .opt_in(OptInRequest::new(["555-123-4567", "abc"]))
///     .await?;
/// println!("{}: {:?} / {:?}", response.message, response.success, response.failed);
/// ```
#[derive(Debug, Clone)]
pub struct OptInService<P: OptInProvider> {
    provider: P,
    config: OptInServiceConfig,
}

impl<P: OptInProvider> OptInService<P> {
    /// Create a new service with a custom provider and configuration.
    pub fn new(provider: P, config: OptInServiceConfig) -> Self {
        Self { provider, config }
    }

    /// Create a new service with default configuration.
    pub fn with_provider(provider: P) -> Self {
        Self::new(provider, OptInServiceConfig::default())
    }

    /// Create a new builder for OptInService.
    pub fn builder(provider: P) -> OptInServiceBuilder<P> {
        OptInServiceBuilder::new(provider)
    }

    /// Get reference to the underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Get reference to the service configuration.
    pub fn config(&self) -> &OptInServiceConfig {
        &self.config
    }
}

impl<P: OptInProvider> OptInServiceTrait for OptInService<P> {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "sns_optin.opt_in", skip_all)
    )]
    async fn opt_in(&self, request: OptInRequest) -> Result<OptInResponse, OptInError> {
        let raw_numbers = request.into_phone_numbers().inspect_err(|_e| {
            #[cfg(feature = "tracing")]
            warn!(error = %_e, "Rejecting request");
        })?;

        let result = self.process_batch(raw_numbers).await;

        #[cfg(feature = "tracing")]
        info!(
            succeeded = result.successes.len(),
            failed = result.failures.len(),
            "Opt-in batch finished"
        );

        Ok(OptInResponse::compose(result))
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "sns_optin.process_batch",
            skip_all,
            fields(count = raw_numbers.len())
        )
    )]
    async fn process_batch(&self, raw_numbers: Vec<String>) -> BatchResult {
        #[cfg(feature = "tracing")]
        debug!(
            max_concurrency = self.config.max_concurrency,
            "Processing phone numbers"
        );

        batch::process_batch(&self.provider, raw_numbers, self.config.max_concurrency).await
    }
}

/// Builder for OptInService.
///
/// # Example
///
/// ```rust,ignore
/// let service = OptInService::builder(provider)
///     .max_concurrency(8)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct OptInServiceBuilder<P: OptInProvider> {
    provider: P,
    config_builder: OptInServiceConfigBuilder,
}

impl<P: OptInProvider> OptInServiceBuilder<P> {
    /// Create a new builder with the given provider.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            config_builder: OptInServiceConfigBuilder::default(),
        }
    }

    /// Set the AWS region recorded in the configuration.
    ///
    /// The provider is already built, so this does not change which endpoint
    /// it calls. Configure the region on the provider, e.g. with
    /// `SnsClientBuilder::region`.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.region(region);
        self
    }

    /// Set the concurrency limit.
    ///
    /// Default: 1 (sequential)
    pub fn max_concurrency(mut self, n: usize) -> Self {
        self.config_builder = self.config_builder.max_concurrency(n);
        self
    }

    /// Set the full configuration.
    pub fn config(mut self, config: OptInServiceConfig) -> Self {
        self.config_builder = OptInServiceConfigBuilder {
            region: config.region,
            max_concurrency: config.max_concurrency,
        };
        self
    }

    /// Build the OptInService.
    pub fn build(self) -> OptInService<P> {
        OptInService::new(self.provider, self.config_builder.build())
    }
}
