//! The Odds API v4 client and types.
//!
//! This module provides a client for the JSON endpoints of The Odds API: the list of
//! sports, current and historical odds, scores, single-event odds and the usage quota.
//!
//! # Overview
//!
//! Every request is a `GET` with all parameters, including the API key, passed in the
//! query string. Each call maps to exactly one HTTP request, and so to exactly one
//! unit of quota where the endpoint is billable.
//!
//! ## Available Endpoints
//!
//! | Endpoint | Description |
//! |----------|-------------|
//! | `/v4/sports/` | In-season sports (all sports with `all=true`). Free. |
//! | `/v4/sports/{sport}/odds` | Upcoming and live games with bookmaker odds |
//! | `/v4/sports/{sport}/scores/` | Upcoming, live and recently completed games |
//! | `/v4/sports/{sport}/odds-history/` | Snapshot of odds at a past point in time |
//! | `/v4/sports/{sport}/events/{eventId}/odds/` | Odds for one event, any market |
//!
//! The usage quota is read from the `x-requests-remaining` and `x-requests-used`
//! headers of a `/v4/sports/` call.
//!
//! # Failure contract
//!
//! Every endpoint returns `Result<Option<T>>`:
//! - `Ok(Some(body))` when the provider answered `200 OK`;
//! - `Ok(None)` for any other status, and when no HTTP answer could be obtained (DNS,
//!   connect, timeout), after logging method, path, status code or error, and body;
//! - `Err(_)` only when a `200` body could not be decoded or the usage headers are
//!   unreadable.
//!
//! # Example
//!
//! ```no_run
//! use odds_api_client::odds::{Client, types::Region, types::request::OddsRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new("your-api-key")?;
//!
//! let request = OddsRequest::builder()
//!     .sport("basketball_nba")
//!     .regions(vec![Region::Us])
//!     .markets(vec!["h2h".to_owned()])
//!     .build();
//!
//! match client.odds(&request).await? {
//!     Some(events) => {
//!         for event in events {
//!             println!("{:?} @ {:?}", event.away_team, event.home_team);
//!         }
//!     }
//!     None => println!("request was rejected, see logs"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # API Base URL
//!
//! The default API endpoint is `https://api.the-odds-api.com`.

pub mod client;
pub mod types;

pub use client::{Client, Config};
