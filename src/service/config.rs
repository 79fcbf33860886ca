//! Service configuration types.

use figment::Figment;
use figment::providers::{Env, Serialized};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Prefix for crate-specific environment overrides.
pub const ENV_PREFIX: &str = "SNS_OPTIN_";

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment values could not be extracted.
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    /// Concurrency must allow at least one in-flight number.
    #[error("max_concurrency must be at least 1")]
    ZeroConcurrency,
}

/// Configuration for the opt-in service.
///
/// `region` selects the SNS endpoint; `max_concurrency` bounds how many
/// numbers are processed at once. Responses keep input order regardless
/// of concurrency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptInServiceConfig {
    /// AWS region of the SNS endpoint. `None` defers to the SDK default chain.
    #[serde(default)]
    pub region: Option<String>,
    /// Maximum number of phone numbers in flight at once.
    pub max_concurrency: usize,
}

impl Default for OptInServiceConfig {
    fn default() -> Self {
        Self::sequential()
    }
}

impl OptInServiceConfig {
    /// One number at a time, in input order.
    pub fn sequential() -> Self {
        Self {
            region: None,
            max_concurrency: 1,
        }
    }

    /// Up to `n` numbers in flight at once.
    pub fn concurrent(n: usize) -> Self {
        Self {
            region: None,
            max_concurrency: n,
        }
    }

    /// Create a new builder for OptInServiceConfig.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sns_optin::OptInServiceConfig;
    ///
    /// let config = OptInServiceConfig::builder()
    ///     .region("us-east-1")
    ///     .max_concurrency(8)
    ///     .build();
    ///
    /// assert_eq!(config.region.as_deref(), Some("us-east-1"));
    /// assert_eq!(config.max_concurrency, 8);
    /// ```
    pub fn builder() -> OptInServiceConfigBuilder {
        OptInServiceConfigBuilder::default()
    }

    /// Set the region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set the concurrency limit.
    pub fn with_max_concurrency(mut self, n: usize) -> Self {
        self.max_concurrency = n;
        self
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_concurrency == 0 {
            return Err(ConfigError::ZeroConcurrency);
        }
        Ok(())
    }

    /// Layered configuration source: defaults, then `AWS_REGION`, then
    /// `SNS_OPTIN_*` overrides.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Env::raw().only(&["AWS_REGION"]).map(|_| "region".into()))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Load and validate configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract().map_err(Box::new)?;
        config.validate()?;
        Ok(config)
    }
}

/// Builder for OptInServiceConfig.
#[derive(Debug, Clone)]
pub struct OptInServiceConfigBuilder {
    pub(crate) region: Option<String>,
    pub(crate) max_concurrency: usize,
}

impl Default for OptInServiceConfigBuilder {
    fn default() -> Self {
        let defaults = OptInServiceConfig::default();
        Self {
            region: defaults.region,
            max_concurrency: defaults.max_concurrency,
        }
    }
}

impl OptInServiceConfigBuilder {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the AWS region.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set the concurrency limit.
    ///
    /// Default: 1 (sequential)
    pub fn max_concurrency(mut self, n: usize) -> Self {
        self.max_concurrency = n;
        self
    }

    /// Build the OptInServiceConfig.
    pub fn build(self) -> OptInServiceConfig {
        OptInServiceConfig {
            region: self.region,
            max_concurrency: self.max_concurrency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_config_default() {
        let config = OptInServiceConfig::default();
        assert_eq!(config.region, None);
        assert_eq!(config.max_concurrency, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = OptInServiceConfig::builder()
            .region("eu-west-1")
            .max_concurrency(4)
            .build();

        assert_eq!(config.region.as_deref(), Some("eu-west-1"));
        assert_eq!(config.max_concurrency, 4);
    }

    #[test]
    fn test_config_with_methods() {
        let config = OptInServiceConfig::concurrent(2)
            .with_region("ap-southeast-2")
            .with_max_concurrency(3);

        assert_eq!(config.region.as_deref(), Some("ap-southeast-2"));
        assert_eq!(config.max_concurrency, 3);
    }

    #[test]
    fn test_validate_zero_concurrency() {
        let config = OptInServiceConfig::concurrent(0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroConcurrency)
        ));
    }

    #[test]
    fn test_from_env_reads_aws_region() {
        Jail::expect_with(|jail| {
            jail.set_env("AWS_REGION", "us-west-2");
            jail.set_env("SNS_OPTIN_MAX_CONCURRENCY", "4");

            let config = OptInServiceConfig::from_env().expect("config loads");
            assert_eq!(config.region.as_deref(), Some("us-west-2"));
            assert_eq!(config.max_concurrency, 4);
            Ok(())
        });
    }

    #[test]
    fn test_from_env_prefixed_region_wins() {
        Jail::expect_with(|jail| {
            jail.set_env("AWS_REGION", "us-west-2");
            jail.set_env("SNS_OPTIN_REGION", "eu-central-1");

            let config = OptInServiceConfig::from_env().expect("config loads");
            assert_eq!(config.region.as_deref(), Some("eu-central-1"));
            Ok(())
        });
    }

    #[test]
    fn test_from_env_rejects_zero_concurrency() {
        Jail::expect_with(|jail| {
            jail.set_env("SNS_OPTIN_MAX_CONCURRENCY", "0");

            assert!(matches!(
                OptInServiceConfig::from_env(),
                Err(ConfigError::ZeroConcurrency)
            ));
            Ok(())
        });
    }
}
