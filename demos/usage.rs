//! Reads the monthly usage quota. The request behind it is free.
//!
//! Run with tracing enabled:
//! ```sh
//! ODDS_API_KEY=... RUST_LOG=info,hyper_util=off,hyper=off,reqwest=off,h2=off,rustls=off cargo run --example usage
//! ```

use odds_api_client::API_KEY_VAR;
use odds_api_client::odds::{Client, Config};
use tracing::{debug, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let api_key = std::env::var(API_KEY_VAR)?;
    let config = Config::builder().user_agent("odds-usage-demo").build();
    let client = Client::with_config(odds_api_client::DEFAULT_HOST, &api_key, config)?;

    match client.usage().await {
        Ok(Some(usage)) => info!(
            endpoint = "usage",
            remaining = usage.remaining,
            used = usage.used,
            last = ?usage.last
        ),
        Ok(None) => warn!(endpoint = "usage", "no result, check the API key"),
        Err(e) => debug!(endpoint = "usage", error = %e),
    }

    Ok(())
}
