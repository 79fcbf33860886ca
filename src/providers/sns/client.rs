//! AWS SNS client wrapper.

use super::errors::{Result, SnsError};
use crate::types::PhoneNumber;
use aws_config::retry::RetryConfig;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_sns::Client;

#[cfg(feature = "tracing")]
use opentelemetry::trace::Status;
#[cfg(feature = "tracing")]
use tracing::{Span, debug, warn};
#[cfg(feature = "tracing")]
use tracing_opentelemetry::OpenTelemetrySpanExt;

/// AWS SNS client for the SMS opt-out list.
///
/// Wraps the SDK client and exposes only the two calls the opt-in flow
/// uses. Clients built through [`SnsClientBuilder`] have the SDK retry layer
/// disabled, so every method maps to exactly one HTTP request.
///
/// # Example
///
/// ```rust,ignore
/// use sns_optin::sns::SnsClient;
/// use sns_optin::PhoneNumber;
///
/// let client = SnsClient::builder().region("us-east-1").build().await;
///
/// let number = PhoneNumber::parse("555-123-4567")?;
/// if client.check_if_phone_number_is_opted_out(&number).await? {
///     client.opt_in_phone_number(&number).await?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SnsClient {
    inner: Client,
}

/// Builder for configuring a [`SnsClient`].
#[derive(Debug, Default)]
pub struct SnsClientBuilder {
    region: Option<String>,
    endpoint_url: Option<String>,
    sdk_config: Option<SdkConfig>,
}

impl SnsClientBuilder {
    /// Create a new builder that uses the default AWS credential chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the AWS region. Without it the SDK default chain decides.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set the AWS region if one is given.
    ///
    /// `None` keeps any region set earlier.
    pub fn maybe_region(mut self, region: Option<String>) -> Self {
        if let Some(region) = region {
            self.region = Some(region);
        }
        self
    }

    /// Override the SNS endpoint (e.g., a local emulator).
    pub fn endpoint_url(mut self, url: impl Into<String>) -> Self {
        self.endpoint_url = Some(url.into());
        self
    }

    /// Use an already loaded SDK configuration.
    ///
    /// Region and endpoint set on this builder still take precedence.
    pub fn sdk_config(mut self, config: SdkConfig) -> Self {
        self.sdk_config = Some(config);
        self
    }

    /// Build the [`SnsClient`], loading credentials if needed.
    pub async fn build(self) -> SnsClient {
        let shared = match self.sdk_config {
            Some(config) => config,
            None => {
                aws_config::defaults(BehaviorVersion::latest())
                    .load()
                    .await
            }
        };

        let mut config = aws_sdk_sns::config::Builder::from(&shared)
            .retry_config(RetryConfig::disabled());
        if let Some(region) = self.region {
            config = config.region(Region::new(region));
        }
        if let Some(url) = self.endpoint_url {
            config = config.endpoint_url(url);
        }

        SnsClient {
            inner: Client::from_conf(config.build()),
        }
    }
}

impl SnsClient {
    /// Create a builder for configuring the client.
    pub fn builder() -> SnsClientBuilder {
        SnsClientBuilder::new()
    }

    /// Create a client from a fully specified SDK service config.
    ///
    /// The config is used as-is, including its retry settings.
    pub fn from_conf(config: aws_sdk_sns::Config) -> Self {
        Self {
            inner: Client::from_conf(config),
        }
    }

    /// Get reference to the inner SDK client.
    pub fn inner(&self) -> &Client {
        &self.inner
    }

    /// Check whether SNS has the number on its SMS opt-out list.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "SnsClient::check_if_phone_number_is_opted_out",
            skip_all,
            fields(phone_number = %number, is_opted_out = tracing::field::Empty)
        )
    )]
    pub async fn check_if_phone_number_is_opted_out(&self, number: &PhoneNumber) -> Result<bool> {
        let output = self
            .inner
            .check_if_phone_number_is_opted_out()
            .phone_number(number.as_str())
            .send()
            .await
            .map_err(|e| {
                let err = SnsError::CheckOptOut(e);
                #[cfg(feature = "tracing")]
                {
                    warn!(
                        code = ?err.code(),
                        throttled = err.is_throttled(),
                        error = %err,
                        "SNS opt-out status query failed"
                    );
                    Span::current().set_status(Status::error("opt-out status query failed"));
                }
                err
            })?;

        let is_opted_out = output.is_opted_out();

        #[cfg(feature = "tracing")]
        {
            debug!(is_opted_out, "Opt-out status received");
            Span::current()
                .record("is_opted_out", is_opted_out)
                .set_status(Status::Ok);
        }

        Ok(is_opted_out)
    }

    /// Opt the number back in to receiving SMS messages.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "SnsClient::opt_in_phone_number",
            skip_all,
            fields(phone_number = %number)
        )
    )]
    pub async fn opt_in_phone_number(&self, number: &PhoneNumber) -> Result<()> {
        self.inner
            .opt_in_phone_number()
            .phone_number(number.as_str())
            .send()
            .await
            .map_err(|e| {
                let err = SnsError::OptIn(e);
                #[cfg(feature = "tracing")]
                {
                    warn!(
                        code = ?err.code(),
                        throttled = err.is_throttled(),
                        error = %err,
                        "SNS opt-in failed"
                    );
                    Span::current().set_status(Status::error("opt-in failed"));
                }
                err
            })?;

        #[cfg(feature = "tracing")]
        Span::current().set_status(Status::Ok);

        Ok(())
    }
}
