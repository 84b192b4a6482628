//! Odds API example walking through sports, odds, scores and single-event odds.
//!
//! Every call except `sports` counts against the monthly quota.
//!
//! Run with tracing enabled:
//! ```sh
//! ODDS_API_KEY=... RUST_LOG=info,hyper_util=off,hyper=off,reqwest=off,h2=off,rustls=off cargo run --example odds
//! ```
//!
//! Optionally log to a file:
//! ```sh
//! LOG_FILE=odds.log ODDS_API_KEY=... RUST_LOG=info,hyper_util=off,hyper=off,reqwest=off,h2=off,rustls=off cargo run --example odds
//! ```

use std::fs::File;

use odds_api_client::API_KEY_VAR;
use odds_api_client::odds::Client;
use odds_api_client::odds::types::request::{
    EventOddsRequest, OddsRequest, ScoresRequest, SportsRequest,
};
use odds_api_client::odds::types::{OddsFormat, Region};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

const SPORT: &str = "basketball_nba";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
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

    let api_key = std::env::var(API_KEY_VAR)?;
    let client = Client::new(&api_key)?;

    match client.sports(&SportsRequest::default()).await {
        Ok(Some(sports)) => {
            info!(endpoint = "sports", count = sports.len());
            for sport in sports.iter().filter(|s| s.active).take(5) {
                info!(endpoint = "sports", key = %sport.key, title = %sport.title, group = %sport.group);
            }
        }
        Ok(None) => warn!(endpoint = "sports", "no result, check the API key"),
        Err(e) => debug!(endpoint = "sports", error = %e),
    }

    let request = OddsRequest::builder()
        .sport(SPORT)
        .regions(vec![Region::Us])
        .markets(vec!["h2h".to_owned()])
        .bookmakers(vec!["fanduel".to_owned()])
        .odds_format(OddsFormat::American)
        .build();

    let first_event = match client.odds(&request).await {
        Ok(Some(events)) => {
            info!(endpoint = "odds", count = events.len());
            for event in &events {
                info!(
                    endpoint = "odds",
                    id = %event.id,
                    home = ?event.home_team,
                    away = ?event.away_team,
                    commence_time = %event.commence_time,
                    bookmakers = event.bookmakers.len()
                );
            }
            events.into_iter().next()
        }
        Ok(None) => {
            warn!(endpoint = "odds", "no result");
            None
        }
        Err(e) => {
            debug!(endpoint = "odds", error = %e);
            None
        }
    };

    if let Some(event) = first_event {
        let request = EventOddsRequest::builder()
            .sport(event.sport_key)
            .event_id(event.id)
            .regions(vec![Region::Us])
            .markets(vec!["h2h".to_owned()])
            .bookmakers(vec!["fanduel".to_owned()])
            .build();

        match client.event_odds(&request).await {
            Ok(Some(event)) => {
                for bookmaker in &event.bookmakers {
                    for market in &bookmaker.markets {
                        for outcome in &market.outcomes {
                            info!(
                                endpoint = "event_odds",
                                bookmaker = %bookmaker.key,
                                market = %market.key,
                                name = %outcome.name,
                                price = %outcome.price
                            );
                        }
                    }
                }
            }
            Ok(None) => warn!(endpoint = "event_odds", "no result"),
            Err(e) => debug!(endpoint = "event_odds", error = %e),
        }
    }

    let request = ScoresRequest::builder().sport(SPORT).days_from(1).build();

    match client.scores(&request).await {
        Ok(Some(games)) => {
            for game in &games {
                info!(
                    endpoint = "scores",
                    id = %game.id,
                    completed = game.completed,
                    scores = ?game.scores
                );
            }
        }
        Ok(None) => warn!(endpoint = "scores", "no result"),
        Err(e) => debug!(endpoint = "scores", error = %e),
    }

    Ok(())
}
