//! Fetches every endpoint once and logs what came back.
//!
//! Run with tracing enabled:
//! ```sh
//! RUST_LOG=info,coinmarketcap_client=debug,hyper_util=off,reqwest=off cargo run --example market --features tracing
//! ```
//!
//! Optionally log to a file:
//! ```sh
//! LOG_FILE=market.log RUST_LOG=info cargo run --example market --features tracing
//! ```

use std::fs::File;

use coinmarketcap_client::Client;
use coinmarketcap_client::types::{GlobalRequest, SpecificTickerRequest, TickerRequest};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

fn main() -> anyhow::Result<()> {
    if let Ok(path) = std::env::var("LOG_FILE") {
        let file = File::create(path)?;
        tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(file)
                    .with_ansi(false),
            )
            .init();
    } else {
        tracing_subscriber::fmt::init();
    }

    let client = Client::default();

    match client.listings() {
        Ok(body) => info!(endpoint = "listings", bytes = body.len()),
        Err(e) => debug!(endpoint = "listings", error = %e),
    }

    let request = TickerRequest::builder().limit(10).convert("USD").build();
    match client.ticker(&request) {
        Ok(body) => info!(endpoint = "ticker", bytes = body.len()),
        Err(e) => debug!(endpoint = "ticker", error = %e),
    }

    let request = SpecificTickerRequest::builder()
        .id("1027")
        .convert("ETH")
        .build();
    match client.specific_ticker(&request) {
        Ok(body) => info!(endpoint = "specific_ticker", body = %body),
        Err(e) => debug!(endpoint = "specific_ticker", error = %e),
    }

    match client.global(&GlobalRequest::default()) {
        Ok(body) => info!(endpoint = "global", body = %body),
        Err(e) => debug!(endpoint = "global", error = %e),
    }

    Ok(())
}
