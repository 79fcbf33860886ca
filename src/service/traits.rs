//! Service trait definition.

use crate::errors::OptInError;
use crate::request::OptInRequest;
use crate::response::OptInResponse;
use crate::types::BatchResult;

/// Trait for opt-in service implementations.
///
/// This trait abstracts the service interface so request envelopes such as
/// [`handle_event`](crate::handle_event) do not depend on a concrete
/// provider.
#[allow(async_fn_in_trait)]
pub trait OptInServiceTrait: Send + Sync {
    /// Validate the request, process every number and compose the response.
    ///
    /// # Errors
    ///
    /// Returns [`OptInError::MissingOrEmptyInput`] before any remote call
    /// when the request has no phone numbers. Per-number failures are part
    /// of the returned response, not errors.
    async fn opt_in(&self, request: OptInRequest) -> Result<OptInResponse, OptInError>;

    /// Classify already validated raw numbers.
    async fn process_batch(&self, raw_numbers: Vec<String>) -> BatchResult;
}
