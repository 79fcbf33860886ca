//! Batch processing of raw phone numbers.

use super::opt_in::opt_in_number;
use crate::providers::traits::OptInProvider;
use crate::types::{BatchResult, Outcome, PhoneNumber};
use futures::StreamExt;
use futures::stream;

#[cfg(feature = "tracing")]
use tracing::warn;

/// Classify one raw number.
///
/// Input without digits fails with the raw text and never reaches the
/// provider.
pub async fn classify<P: OptInProvider>(provider: &P, raw: String) -> Outcome {
    match PhoneNumber::parse(&raw) {
        Ok(number) => opt_in_number(provider, number).await,
        Err(_e) => {
            #[cfg(feature = "tracing")]
            warn!(error = %_e, "Skipping phone number without digits");
            Outcome::Failure(raw)
        }
    }
}

/// Classify every raw number and partition the outcomes.
///
/// Up to `max_concurrency` numbers are in flight at once (`0` is treated as
/// `1`). Both sides of the result keep input order whatever the
/// concurrency, and every input is classified exactly once.
pub async fn process_batch<P: OptInProvider>(
    provider: &P,
    raw_numbers: Vec<String>,
    max_concurrency: usize,
) -> BatchResult {
    stream::iter(raw_numbers)
        .map(|raw| classify(provider, raw))
        .buffered(max_concurrency.max(1))
        .collect::<BatchResult>()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::fake::{Call, FakeProvider};

    fn raw(numbers: &[&str]) -> Vec<String> {
        numbers.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_sentinel_never_reaches_provider() {
        let provider = FakeProvider::new();

        let result = process_batch(&provider, raw(&["abc", "", "--"]), 1).await;

        assert!(result.successes.is_empty());
        assert_eq!(result.failures, vec!["abc", "", "--"]);
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn test_mixed_batch_keeps_input_order() {
        let provider = FakeProvider::new()
            .opted_out("+15550000001")
            .opted_out("+15550000003")
            .opted_out("+15550000004")
            .rejecting("+15550000004");

        let result = process_batch(
            &provider,
            raw(&["555-000-0001", "555-000-0002", "n/a", "555-000-0003", "555-000-0004"]),
            1,
        )
        .await;

        assert_eq!(result.len(), 5);
        assert_eq!(
            result.successes,
            vec![
                PhoneNumber::parse("5550000001").unwrap(),
                PhoneNumber::parse("5550000003").unwrap(),
            ]
        );
        assert_eq!(result.failures, vec!["+15550000002", "n/a", "+15550000004"]);
    }

    #[tokio::test]
    async fn test_sequential_calls_follow_input_order() {
        let provider = FakeProvider::new().opted_out("+15550000001");

        process_batch(&provider, raw(&["5550000001", "5550000002"]), 1).await;

        assert_eq!(
            provider.calls(),
            vec![
                Call::CheckOptOut("+15550000001".to_string()),
                Call::OptIn("+15550000001".to_string()),
                Call::CheckOptOut("+15550000002".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_concurrent_matches_sequential() {
        let provider = FakeProvider::new()
            .opted_out("+15550000002")
            .opted_out("+15550000005");
        let numbers = raw(&[
            "5550000001",
            "5550000002",
            "x",
            "5550000004",
            "5550000005",
            "5550000006",
        ]);

        let sequential = process_batch(&provider, numbers.clone(), 1).await;
        let concurrent = process_batch(&provider, numbers, 4).await;

        assert_eq!(sequential, concurrent);
    }

    #[tokio::test]
    async fn test_zero_concurrency_still_processes() {
        let provider = FakeProvider::new().opted_out("+15550000001");

        let result = process_batch(&provider, raw(&["5550000001"]), 0).await;

        assert_eq!(result.successes.len(), 1);
    }
}
