//! Opt-in provider implementations.

pub(crate) mod traits;

#[cfg(feature = "sns")]
pub mod sns;

#[cfg(test)]
pub(crate) mod fake;

pub use traits::OptInProvider;
