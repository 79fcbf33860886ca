//! Single-number opt-in against a provider.

use crate::providers::traits::OptInProvider;
use crate::types::{Outcome, PhoneNumber};

#[cfg(feature = "tracing")]
use tracing::{debug, info, warn};

/// Opt in one normalized number.
///
/// Only numbers the provider reports as opted out are eligible; anything
/// else is a [`Outcome::Failure`] without an opt-in attempt. A failing
/// status query or opt-in call is also a failure, never an error, so one
/// number cannot abort the batch. No call is retried.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "sns_optin.opt_in_number",
        skip_all,
        fields(phone_number = %number, provider = provider.name())
    )
)]
pub async fn opt_in_number<P: OptInProvider>(provider: &P, number: PhoneNumber) -> Outcome {
    match provider.check_if_opted_out(&number).await {
        Ok(true) => {}
        Ok(false) => {
            #[cfg(feature = "tracing")]
            warn!("Phone number is not opted out, skipping opt-in");
            return Outcome::Failure(number.into_inner());
        }
        Err(_e) => {
            #[cfg(feature = "tracing")]
            warn!(error = %_e, "Failed to query opt-out status");
            return Outcome::Failure(number.into_inner());
        }
    }

    #[cfg(feature = "tracing")]
    debug!("Phone number is opted out, requesting opt-in");

    match provider.opt_in(&number).await {
        Ok(()) => {
            #[cfg(feature = "tracing")]
            info!("Phone number opted in");
            Outcome::Success(number)
        }
        Err(_e) => {
            #[cfg(feature = "tracing")]
            warn!(error = %_e, "Opt-in rejected");
            Outcome::Failure(number.into_inner())
        }
    }
}
