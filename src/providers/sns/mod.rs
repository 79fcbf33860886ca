//! AWS SNS provider implementation.
//!
//! This module provides integration with the AWS SNS SMS opt-out list
//! through the official AWS SDK.
//!
//! # Example
//!
//! ```rust,ignore
//! use sns_optin::sns::{SnsClient, SnsProvider};
//! use sns_optin::{OptInRequest, OptInService, OptInServiceConfig, OptInServiceTrait};
//!
//! let config = OptInServiceConfig::from_env()?;
//!
//! // Create client and provider for the configured region
//! let client = SnsClient::builder()
//!     .maybe_region(config.region.clone())
//!     .build()
//!     .await;
//! let provider = SnsProvider::new(client);
//!
//! // Create service
//! let service = OptInService::new(provider, config);
//!
//! let response = service
//!     .opt_in(OptInRequest::new(["555-123-4567", "(555) 987-6543"]))
//!     .await?;
//! println!("Opted in: {:?}", response.success);
//! ```

pub mod client;
pub mod errors;
pub mod provider;

// Re-export commonly used types
pub use client::{SnsClient, SnsClientBuilder};
pub use errors::SnsError;
pub use provider::SnsProvider;
