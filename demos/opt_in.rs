//! Opt in phone numbers from a request body.
//!
//! Reads a request body (`{"phone_numbers": [...]}`) from the first
//! argument or stdin, runs it through SNS and prints the envelope.
//!
//! # Running
//!
//! ```bash
//! AWS_REGION=us-east-1 RUST_LOG=sns_optin=debug \
//!     cargo run --example opt_in -- '{"phone_numbers": ["555-123-4567"]}'
//! ```

use serde_json::{Value, json};
use sns_optin::sns::SnsProvider;
use sns_optin::{HandlerResponse, OptInService, OptInServiceConfig, handle_event};
use std::env;
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let body = match env::args().nth(1) {
        Some(arg) => arg,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let body: Value = serde_json::from_str(&body)?;

    // AWS_REGION selects the SNS endpoint; SNS_OPTIN_MAX_CONCURRENCY is optional
    let config = OptInServiceConfig::from_env()?;
    let provider = SnsProvider::from_region(config.region.clone()).await;
    let service = OptInService::new(provider, config);

    let event = json!({ "body": body });
    let response = match handle_event(&service, &event).await {
        Ok(response) => response,
        Err(e) => HandlerResponse::from_error(&e),
    };

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
