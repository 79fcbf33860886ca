//! Provider trait definition.

use crate::types::PhoneNumber;
use std::error::Error as StdError;
use std::future::Future;

/// Remote operations the opt-in flow needs from a notification service.
///
/// The service is treated as two opaque calls: an opt-out status query and
/// an opt-in request. Implementations must not retry internally; each
/// number gets exactly one status query and at most one opt-in call.
///
/// # Note on async methods
///
/// All async methods in this trait return `Send` futures, making them
/// compatible with multi-threaded executors.
///
/// # Example
///
/// ```rust,ignore
/// use sns_optin::{OptInProvider, PhoneNumber};
///
/// #[derive(Clone)]
/// struct MyProvider { /* ... */ }
///
/// impl OptInProvider for MyProvider {
///     type Error = MyError;
///
///     async fn check_if_opted_out(&self, number: &PhoneNumber) -> Result<bool, Self::Error> {
///         // Ask the service whether the number is on its opt-out list
///     }
///
///     async fn opt_in(&self, number: &PhoneNumber) -> Result<(), Self::Error> {
///         // Remove the number from the opt-out list
///     }
/// }
/// ```
pub trait OptInProvider: Send + Sync + Clone {
    /// Error type returned by provider operations.
    type Error: StdError + Send + Sync + 'static;

    /// Query whether the number is currently opted out.
    fn check_if_opted_out(
        &self,
        number: &PhoneNumber,
    ) -> impl Future<Output = Result<bool, Self::Error>> + Send;

    /// Opt the number back in.
    ///
    /// Services may reject this for numbers that were opted in recently.
    fn opt_in(&self, number: &PhoneNumber) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Short name used in logs.
    fn name(&self) -> &'static str {
        "provider"
    }
}
