//! Catalogue of market keys known to The Odds API.
//!
//! These are fixed lookup tables; nothing here touches the network. Use the keys in the
//! `markets` field of the odds requests. Additional markets and player props are only
//! served one event at a time through
//! [`Client::event_odds`](crate::odds::Client::event_odds).
//!
//! # Example
//!
//! ```
//! use odds_api_client::markets;
//!
//! let keys: Vec<_> = markets::featured_betting_markets().iter().map(|m| m.key).collect();
//! assert_eq!(keys, ["h2h", "spreads", "totals", "outrights", "h2h_lay", "outrights_lay"]);
//!
//! let nba = markets::player_props("NBA").expect("NBA has player props");
//! assert!(nba.iter().any(|m| m.key == "player_points"));
//! ```

use phf::phf_map;

/// A market key with its human readable name.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketInfo {
    /// Value to pass in the `markets` query parameter.
    pub key: &'static str,
    /// Name as shown on bookmaker sites; terminology varies by country and sport.
    pub name: &'static str,
    pub description: Option<&'static str>,
}

impl MarketInfo {
    const fn new(key: &'static str, name: &'static str, description: &'static str) -> Self {
        Self {
            key,
            name,
            description: Some(description),
        }
    }

    const fn prop(key: &'static str, name: &'static str) -> Self {
        Self {
            key,
            name,
            description: None,
        }
    }
}

static FEATURED: [MarketInfo; 6] = [
    MarketInfo::new(
        "h2h",
        "Head to head, Moneyline",
        "Bet on the winning team or player of a game (includes the draw for soccer)",
    ),
    MarketInfo::new(
        "spreads",
        "Points spread, Handicap",
        "The spreads market as featured by a bookmaker. Bet on the winning team after a points handicap has been applied to each team",
    ),
    MarketInfo::new(
        "totals",
        "Total points/goals, Over/Under",
        "The totals market as featured by a bookmaker. Bet on the total score of the game being above or below a threshold",
    ),
    MarketInfo::new(
        "outrights",
        "Outrights, Futures",
        "Bet on a final outcome of a tournament or competition",
    ),
    MarketInfo::new(
        "h2h_lay",
        "Head to head, Moneyline",
        "Bet against a h2h outcome. This market is only applicable to betting exchanges",
    ),
    MarketInfo::new(
        "outrights_lay",
        "Outrights, Futures",
        "Bet against an outrights outcome. This market is only applicable to betting exchanges",
    ),
];

static ADDITIONAL: [MarketInfo; 5] = [
    MarketInfo::new(
        "alternate_spreads",
        "Alternate Spreads (handicap)",
        "All available point spread outcomes for each team",
    ),
    MarketInfo::new(
        "alternate_totals",
        "Alternate Totals (Over/Under)",
        "All available over/under outcomes",
    ),
    MarketInfo::new(
        "btts",
        "Both Teams to Score",
        "Odds that both teams will score during the game. Outcomes are \"Yes\" or \"No\". Available for soccer.",
    ),
    MarketInfo::new(
        "draw_no_bet",
        "Draw No Bet",
        "Odds for the match winner, excluding the draw outcome. A draw will result in a returned bet. Available for soccer",
    ),
    MarketInfo::new(
        "h2h_3_way",
        "Head to head / Moneyline 3 way",
        "Match winner including draw",
    ),
];

static NFL_PROPS: [MarketInfo; 12] = [
    MarketInfo::prop("player_pass_tds", "Pass Touchdowns (Over/Under)"),
    MarketInfo::prop("player_pass_yds", "Pass Yards (Over/Under)"),
    MarketInfo::prop("player_pass_completions", "Pass Completions (Over/Under)"),
    MarketInfo::prop("player_pass_attempts", "Pass Attempts (Over/Under)"),
    MarketInfo::prop("player_pass_interceptions", "Pass Intercepts (Over/Under)"),
    MarketInfo::prop(
        "player_pass_longest_completion",
        "Pass Longest Completion (Over/Under)",
    ),
    MarketInfo::prop("player_rush_yds", "Rush Yards (Over/Under)"),
    MarketInfo::prop("player_rush_attempts", "Rush Attempts (Over/Under)"),
    MarketInfo::prop("player_rush_longest", "Longest Rush (Over/Under)"),
    MarketInfo::prop("player_receptions", "Receptions (Over/Under)"),
    MarketInfo::prop("player_reception_yds", "Reception Yards (Over/Under)"),
    MarketInfo::prop("player_reception_longest", "Longest Reception (Over/Under)"),
];

static NBA_PROPS: [MarketInfo; 8] = [
    MarketInfo::prop("player_points", "Points (Over/Under)"),
    MarketInfo::prop("player_rebounds", "Rebounds (Over/Under)"),
    MarketInfo::prop("player_assists", "Assists (Over/Under)"),
    MarketInfo::prop("player_threes", "Threes (Over/Under)"),
    MarketInfo::prop("player_double_double", "Double Double (Yes/No)"),
    MarketInfo::prop("player_blocks", "Blocks (Over/Under)"),
    MarketInfo::prop("player_steals", "Steals (Over/Under)"),
    MarketInfo::prop("player_turnovers", "Turnovers (Over/Under)"),
];

static NHL_PROPS: [MarketInfo; 6] = [
    MarketInfo::prop("player_points", "Points (Over/Under)"),
    MarketInfo::prop("player_power_play_points", "Power Play Points (Over/Under)"),
    MarketInfo::prop("player_assists", "Assists (Over/Under)"),
    MarketInfo::prop("player_blocked_shots", "Blocked Shots (Over/Under)"),
    MarketInfo::prop("player_shots_on_goal", "Shots on Goal (Over/Under)"),
    MarketInfo::prop("player_total_saves", "Total Saves (Over/Under)"),
];

// Keys are upper-cased league names and provider sport keys
static PLAYER_PROPS: phf::Map<&'static str, &'static [MarketInfo]> = phf_map! {
    "NFL" => &NFL_PROPS,
    "AMERICANFOOTBALL_NFL" => &NFL_PROPS,
    "NBA" => &NBA_PROPS,
    "BASKETBALL_NBA" => &NBA_PROPS,
    "NHL" => &NHL_PROPS,
    "ICEHOCKEY_NHL" => &NHL_PROPS,
};

/// The most common markets, featured by most bookmakers.
///
/// Always exactly six records: `h2h`, `spreads`, `totals`, `outrights`, `h2h_lay` and
/// `outrights_lay`, in that order.
#[must_use]
pub fn featured_betting_markets() -> &'static [MarketInfo] {
    &FEATURED
}

/// Markets limited to selected sports and bookmakers, updated at five minute intervals.
#[must_use]
pub fn additional_markets() -> &'static [MarketInfo] {
    &ADDITIONAL
}

/// Player prop markets for a league.
///
/// Accepts a league name (`NFL`, `NBA`, `NHL`) or the matching provider sport key
/// (`americanfootball_nfl`, ...), case-insensitively. Returns `None` for sports
/// without a known prop catalogue.
#[must_use]
pub fn player_props(sport: &str) -> Option<&'static [MarketInfo]> {
    PLAYER_PROPS
        .get(sport.trim().to_ascii_uppercase().as_str())
        .copied()
}
