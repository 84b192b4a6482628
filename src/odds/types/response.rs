//! Response types for The Odds API.
//!
//! Records mirror the provider's JSON. Optional fields tolerate being absent, and
//! timestamps accept both `dateFormat=iso` and `dateFormat=unix`. Prices and points
//! are kept as [`Decimal`] exactly as sent.

use bon::Builder;
use serde::Deserialize;
use serde_with::serde_as;

use crate::serde_helpers::{DateTimeFromAny, StringFromAny};
use crate::types::{DateTime, Decimal, Utc};

/// A sport or league offered by the provider.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Builder)]
#[builder(on(String, into))]
pub struct Sport {
    /// Sport key used in every other endpoint, e.g. `basketball_nba`.
    pub key: String,
    /// Group the sport belongs to, e.g. `Basketball`.
    pub group: String,
    /// Display title, e.g. `NBA`.
    pub title: String,
    /// Longer description, e.g. `US Basketball`.
    #[builder(default)]
    #[serde(default)]
    pub description: String,
    /// Whether the sport is in season.
    pub active: bool,
    /// Whether the sport only offers outright (futures) markets.
    #[builder(default)]
    #[serde(default)]
    pub has_outrights: bool,
}

/// A game together with the odds of every bookmaker that matched the request.
///
/// Returned as a list by the odds endpoints and as a single record by the
/// event-odds endpoint.
#[serde_as]
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
#[builder(on(String, into))]
pub struct Event {
    /// Event id, usable with the event-odds endpoint.
    pub id: String,
    /// Sport key.
    pub sport_key: String,
    /// Sport display title.
    pub sport_title: Option<String>,
    /// Scheduled start time.
    #[serde_as(as = "DateTimeFromAny")]
    pub commence_time: DateTime<Utc>,
    /// Home team, absent for outright markets.
    pub home_team: Option<String>,
    /// Away team, absent for outright markets.
    pub away_team: Option<String>,
    /// Bookmakers with at least one of the requested markets.
    #[builder(default)]
    #[serde(default)]
    pub bookmakers: Vec<Bookmaker>,
}

/// One bookmaker's markets for an event.
#[serde_as]
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
#[builder(on(String, into))]
pub struct Bookmaker {
    /// Bookmaker key, e.g. `fanduel`.
    pub key: String,
    /// Display title, e.g. `FanDuel`.
    pub title: String,
    /// When this bookmaker's odds last changed.
    #[serde_as(as = "Option<DateTimeFromAny>")]
    pub last_update: Option<DateTime<Utc>>,
    #[builder(default)]
    #[serde(default)]
    pub markets: Vec<Market>,
}

/// A betting market offered by a bookmaker, e.g. `h2h`.
#[serde_as]
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
#[builder(on(String, into))]
pub struct Market {
    pub key: String,
    #[serde_as(as = "Option<DateTimeFromAny>")]
    pub last_update: Option<DateTime<Utc>>,
    #[builder(default)]
    #[serde(default)]
    pub outcomes: Vec<Outcome>,
}

/// A priced outcome within a market.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
#[builder(on(String, into))]
pub struct Outcome {
    /// Team, player or `Over`/`Under`.
    pub name: String,
    /// Price in the requested odds format.
    pub price: Decimal,
    /// Handicap or total line for spreads, totals and player props.
    pub point: Option<Decimal>,
    /// Player name for player prop markets.
    pub description: Option<String>,
}

/// A game as returned by the scores endpoint.
#[serde_as]
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
#[builder(on(String, into))]
pub struct ScoreEvent {
    pub id: String,
    pub sport_key: String,
    pub sport_title: Option<String>,
    #[serde_as(as = "DateTimeFromAny")]
    pub commence_time: DateTime<Utc>,
    /// Whether the game has finished.
    #[builder(default)]
    #[serde(default)]
    pub completed: bool,
    pub home_team: Option<String>,
    pub away_team: Option<String>,
    /// Per-team scores, absent for games that have not started.
    pub scores: Option<Vec<TeamScore>>,
    /// When the scores last changed.
    #[serde_as(as = "Option<DateTimeFromAny>")]
    pub last_update: Option<DateTime<Utc>>,
}

/// The running or final score of one team.
#[serde_as]
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Builder)]
#[builder(on(String, into))]
pub struct TeamScore {
    pub name: String,
    #[serde_as(as = "StringFromAny")]
    pub score: String,
}

/// A historical odds snapshot with links to its neighbours.
#[serde_as]
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
pub struct HistoricalSnapshot {
    /// Time of this snapshot, at or before the requested date.
    #[serde_as(as = "DateTimeFromAny")]
    pub timestamp: DateTime<Utc>,
    /// Time of the preceding snapshot, if any.
    #[serde_as(as = "Option<DateTimeFromAny>")]
    pub previous_timestamp: Option<DateTime<Utc>>,
    /// Time of the following snapshot, if any.
    #[serde_as(as = "Option<DateTimeFromAny>")]
    pub next_timestamp: Option<DateTime<Utc>>,
    #[builder(default)]
    #[serde(default)]
    pub data: Vec<Event>,
}

/// Usage quota for the current month, read from response headers.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder)]
pub struct Usage {
    /// `x-requests-remaining`
    pub remaining: u64,
    /// `x-requests-used`
    pub used: u64,
    /// `x-requests-last`: cost of the request that carried these headers.
    pub last: Option<u64>,
}
