use std::fmt;

use serde::{Serialize, Serializer};

pub mod request;
pub mod response;

/// Region whose bookmakers appear in an odds response.
///
/// Every region requested counts towards quota usage. Regions the provider adds later
/// (e.g. `us_ex`, `fr`, `se`) are sent verbatim through [`Region::Other`], and
/// `Region::from("uk")` maps known names onto their variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Region {
    /// United States.
    Us,
    /// United States, secondary bookmakers.
    Us2,
    /// United Kingdom.
    Uk,
    /// Europe.
    Eu,
    /// Australia.
    Au,
    /// Any other provider region key.
    Other(String),
}

impl Region {
    /// Region key as sent in the `regions` query parameter.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Region::Us => "us",
            Region::Us2 => "us2",
            Region::Uk => "uk",
            Region::Eu => "eu",
            Region::Au => "au",
            Region::Other(key) => key,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Region {
    fn from(key: &str) -> Self {
        match key {
            "us" => Region::Us,
            "us2" => Region::Us2,
            "uk" => Region::Uk,
            "eu" => Region::Eu,
            "au" => Region::Au,
            other => Region::Other(other.to_owned()),
        }
    }
}

impl From<String> for Region {
    fn from(key: String) -> Self {
        Region::from(key.as_str())
    }
}

impl Serialize for Region {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Format of returned prices.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[non_exhaustive]
pub enum OddsFormat {
    /// Decimal odds, e.g. `1.91` (provider default).
    #[default]
    Decimal,
    /// American odds, e.g. `-110`.
    American,
}

/// Format of returned timestamps.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[non_exhaustive]
pub enum DateFormat {
    /// ISO 8601 strings (provider default).
    #[default]
    Iso,
    /// Unix timestamps in seconds.
    Unix,
}
