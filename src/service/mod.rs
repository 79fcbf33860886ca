//! Opt-in service: per-number opt-in, batch processing and configuration.

pub mod batch;
pub(crate) mod config;
pub mod opt_in;
pub(crate) mod structure;
pub(crate) mod traits;

pub use config::{ConfigError, OptInServiceConfig, OptInServiceConfigBuilder};
pub use structure::{OptInService, OptInServiceBuilder};
pub use traits::OptInServiceTrait;
