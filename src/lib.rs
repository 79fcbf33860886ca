//! # SNS Opt-In
//!
//! Batch opt-in of phone numbers with a notification service, with a
//! provider abstraction and an AWS SNS implementation.
//!
//! Given a list of raw phone numbers, the service normalizes each one,
//! asks the provider whether it is opted out, opts eligible numbers back in
//! and returns a single response partitioning successes and failures.
//!
//! ## Supported Providers
//!
//! | Provider | Feature | Website |
//! |----------|---------|---------|
//! | AWS SNS | `sns` (default) | <https://aws.amazon.com/sns/> |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sns_optin::sns::{SnsClient, SnsProvider};
//! use sns_optin::{OptInRequest, OptInService, OptInServiceConfig, OptInServiceTrait};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Region and concurrency from AWS_REGION / SNS_OPTIN_*
//!     let config = OptInServiceConfig::from_env()?;
//!
//!     let client = SnsClient::builder()
//!         .maybe_region(config.region.clone())
//!         .build()
//!         .await;
//!     let service = OptInService::new(SnsProvider::new(client), config);
//!
//!     let response = service
//!         .opt_in(OptInRequest::new(["555-123-4567", "abc"]))
//!         .await?;
//!
//!     println!("{}", serde_json::to_string_pretty(&response)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! handle_event / OptInService::opt_in
//!         │  validate request
//!         ▼
//! process_batch            (normalize, skip numbers without digits)
//!         │
//!         ▼
//! opt_in_number            (status query, then at most one opt-in)
//!         │
//!         ▼
//!   OptInProvider          (trait: SnsProvider, etc.)
//! ```
//!
//! ## Features
//!
//! - `sns` - AWS SNS provider support (enabled by default)
//! - `tracing` - OpenTelemetry tracing instrumentation (enabled by default)

pub mod errors;
pub mod handler;
pub mod providers;
pub mod request;
pub mod response;
pub mod service;
pub mod types;
pub mod utils;

// Re-export commonly used types at the crate root
pub use errors::{OptInError, PHONE_NUMBERS_MISSING_MESSAGE};
pub use handler::{HandlerResponse, handle_event};
pub use providers::OptInProvider;
#[cfg(feature = "sns")]
pub use providers::sns;
pub use request::OptInRequest;
pub use response::OptInResponse;
pub use service::{
    ConfigError, OptInService, OptInServiceBuilder, OptInServiceConfig, OptInServiceTrait,
};
pub use types::{BatchResult, Outcome, PhoneNumber, PhoneNumberError};
pub use utils::normalize::normalize_phone_number;
