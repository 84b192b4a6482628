//! Prints the static market catalogue. Makes no network calls.
//!
//! ```sh
//! RUST_LOG=info cargo run --example markets -- nba
//! ```

use odds_api_client::markets;
use tracing::{info, warn};

fn main() {
    tracing_subscriber::fmt::init();

    for market in markets::featured_betting_markets() {
        info!(kind = "featured", key = market.key, name = market.name);
    }
    for market in markets::additional_markets() {
        info!(kind = "additional", key = market.key, name = market.name);
    }

    let sport = std::env::args().nth(1).unwrap_or_else(|| "NFL".to_owned());
    match markets::player_props(&sport) {
        Some(props) => {
            for market in props {
                info!(kind = "player_props", %sport, key = market.key, name = market.name);
            }
        }
        None => warn!(%sport, "no player prop catalogue for sport"),
    }
}
