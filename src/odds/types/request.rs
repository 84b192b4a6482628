//! Request types for The Odds API.
//!
//! One builder-pattern struct per endpoint, each listing exactly the query parameters
//! that endpoint recognises. Path parameters (`sport`, `event_id`) are part of the
//! struct but never serialized into the query string. The API key is appended by
//! [`Client`](crate::odds::Client) and cannot be set here.
//!
//! All request types use the [`bon`](https://docs.rs/bon) crate for the builder pattern.

#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use bon::Builder;
use serde::Serialize;
use serde_with::{StringWithSeparator, formats::CommaSeparator, serde_as, skip_serializing_none};

use super::{DateFormat, OddsFormat, Region};
use crate::types::{DateTime, Utc};

/// Request parameters for the `/v4/sports/` endpoint.
///
/// This endpoint does not count against the usage quota.
///
/// # Example
///
/// ```
/// use odds_api_client::odds::types::request::SportsRequest;
///
/// // In-season sports only
/// let request = SportsRequest::default();
///
/// // Every sport, including out-of-season ones
/// let request = SportsRequest::builder().all(true).build();
/// ```
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Builder, Serialize)]
#[non_exhaustive]
pub struct SportsRequest {
    /// Include out-of-season sports (default: false).
    pub all: Option<bool>,
}

/// Request parameters for the `/v4/sports/{sport}/odds` endpoint.
///
/// # Required Parameters
///
/// - `sport`: Sport key, e.g. `basketball_nba`, or `upcoming` for the next games across sports.
/// - `regions`: Regions whose bookmakers are returned.
/// - `markets`: Market keys, e.g. `h2h`, `spreads`, `totals`.
///
/// # Optional Parameters
///
/// - `event_ids`: Only return these games.
/// - `bookmakers`: Only return these bookmakers. Takes priority over `regions` on the
///   provider side; every group of 10 bookmakers counts as one region.
/// - `odds_format`: `decimal` (default) or `american`.
/// - `date_format`: `iso` (default) or `unix`.
/// - `commence_time_from` / `commence_time_to`: Filter games by start time.
///
/// # Example
///
/// ```
/// use odds_api_client::odds::types::{OddsFormat, Region, request::OddsRequest};
///
/// let request = OddsRequest::builder()
///     .sport("basketball_nba")
///     .regions(vec![Region::Us])
///     .markets(vec!["h2h".to_owned(), "spreads".to_owned()])
///     .bookmakers(vec!["fanduel".to_owned()])
///     .odds_format(OddsFormat::American)
///     .build();
/// ```
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct OddsRequest {
    /// Sport key (path parameter).
    #[builder(into)]
    #[serde(skip)]
    pub sport: String,
    /// Regions whose bookmakers are returned.
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, Region>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub regions: Vec<Region>,
    /// Market keys to return.
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub markets: Vec<String>,
    /// Only return these game ids.
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")]
    #[builder(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub event_ids: Vec<String>,
    /// Only return these bookmaker keys.
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")]
    #[builder(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bookmakers: Vec<String>,
    /// Price format (default: decimal).
    pub odds_format: Option<OddsFormat>,
    /// Timestamp format (default: iso).
    pub date_format: Option<DateFormat>,
    /// Only games starting at or after this time.
    pub commence_time_from: Option<DateTime<Utc>>,
    /// Only games starting at or before this time.
    pub commence_time_to: Option<DateTime<Utc>>,
}

/// Request parameters for the `/v4/sports/{sport}/scores/` endpoint.
///
/// Live scores update approximately every 30 seconds. Without `days_from` only live
/// and upcoming games are returned.
///
/// # Example
///
/// ```
/// use odds_api_client::odds::types::{DateFormat, request::ScoresRequest};
///
/// let request = ScoresRequest::builder()
///     .sport("basketball_nba")
///     .days_from(3)
///     .date_format(DateFormat::Iso)
///     .build();
/// ```
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ScoresRequest {
    /// Sport key (path parameter).
    #[builder(into)]
    #[serde(skip)]
    pub sport: String,
    /// Days in the past from which to return completed games. The provider accepts 1 to
    /// 3 and answers anything else with an error status.
    pub days_from: Option<u8>,
    /// Timestamp format (default: iso).
    pub date_format: Option<DateFormat>,
    /// Only return these game ids.
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")]
    #[builder(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub event_ids: Vec<String>,
}

/// Request parameters for the `/v4/sports/{sport}/odds-history/` endpoint.
///
/// Returns the closest snapshot at or before `date`.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone as _, Utc};
/// use odds_api_client::odds::types::{Region, request::HistoricalOddsRequest};
///
/// let request = HistoricalOddsRequest::builder()
///     .sport("basketball_nba")
///     .regions(vec![Region::Us])
///     .markets(vec!["h2h".to_owned()])
///     .date(Utc.with_ymd_and_hms(2023, 2, 15, 12, 0, 0).unwrap())
///     .build();
/// ```
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct HistoricalOddsRequest {
    /// Sport key (path parameter).
    #[builder(into)]
    #[serde(skip)]
    pub sport: String,
    /// Regions whose bookmakers are returned.
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, Region>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub regions: Vec<Region>,
    /// Market keys to return.
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub markets: Vec<String>,
    /// Point in time of the requested snapshot.
    pub date: DateTime<Utc>,
    /// Only return these game ids.
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")]
    #[builder(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub event_ids: Vec<String>,
    /// Only return these bookmaker keys.
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")]
    #[builder(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bookmakers: Vec<String>,
    /// Price format (default: decimal).
    pub odds_format: Option<OddsFormat>,
    /// Timestamp format (default: iso).
    pub date_format: Option<DateFormat>,
}

/// Request parameters for the `/v4/sports/{sport}/events/{eventId}/odds/` endpoint.
///
/// Accepts any market key, including the additional markets and player props listed
/// in [`crate::markets`].
///
/// # Example
///
/// ```
/// use odds_api_client::odds::types::{Region, request::EventOddsRequest};
///
/// let request = EventOddsRequest::builder()
///     .sport("basketball_nba")
///     .event_id("4afb8f0ba6e00d9e44b4240d1ba5493c")
///     .regions(vec![Region::Us])
///     .markets(vec!["player_points".to_owned()])
///     .bookmakers(vec!["fanduel".to_owned()])
///     .build();
/// ```
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct EventOddsRequest {
    /// Sport key (path parameter).
    #[builder(into)]
    #[serde(skip)]
    pub sport: String,
    /// Event id (path parameter).
    #[builder(into)]
    #[serde(skip)]
    pub event_id: String,
    /// Regions whose bookmakers are returned.
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, Region>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub regions: Vec<Region>,
    /// Market keys to return.
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub markets: Vec<String>,
    /// Only return these bookmaker keys.
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")]
    #[builder(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bookmakers: Vec<String>,
    /// Price format (default: decimal).
    pub odds_format: Option<OddsFormat>,
    /// Timestamp format (default: iso).
    pub date_format: Option<DateFormat>,
}
