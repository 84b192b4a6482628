//! Lists the bookmakers covered in a region, `all` by default.
//!
//! No API key is needed. Run with tracing enabled:
//! ```sh
//! RUST_LOG=info,hyper_util=off,hyper=off,reqwest=off,h2=off,rustls=off cargo run --example bookmakers -- uk
//! ```

use odds_api_client::bookmakers::{BookmakerRegion, Bookmakers};
use tracing::{debug, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let region = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => BookmakerRegion::All,
    };

    let bookmakers: Bookmakers = Bookmakers::default();
    match bookmakers.list(region).await {
        Ok(listings) => {
            info!(endpoint = "bookmakers", %region, count = listings.len());
            for listing in &listings {
                info!(
                    endpoint = "bookmakers",
                    region = %listing.region,
                    key = %listing.key,
                    title = %listing.title
                );
            }
        }
        Err(e) => debug!(endpoint = "bookmakers", error = %e),
    }

    Ok(())
}
