use std::str::FromStr;

use bon::Builder;
use serde::Serialize;

use crate::error::Error;

/// Region filter for the bookmaker directory.
///
/// `All` is not a table on the page; it stands for every other region in
/// [`BookmakerRegion::TABLES`] order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[non_exhaustive]
pub enum BookmakerRegion {
    #[default]
    All,
    Us,
    Uk,
    Eu,
    Au,
}

impl BookmakerRegion {
    /// Regions in the order their tables appear on the page.
    pub const TABLES: [BookmakerRegion; 4] = [
        BookmakerRegion::Us,
        BookmakerRegion::Uk,
        BookmakerRegion::Eu,
        BookmakerRegion::Au,
    ];

    /// Accepted spellings, in the order they are listed in error messages.
    pub const NAMES: [&'static str; 5] = ["all", "us", "uk", "eu", "au"];

    /// Position of this region's table on the page, `None` for [`BookmakerRegion::All`].
    #[must_use]
    pub const fn table_index(self) -> Option<usize> {
        match self {
            BookmakerRegion::All => None,
            BookmakerRegion::Us => Some(0),
            BookmakerRegion::Uk => Some(1),
            BookmakerRegion::Eu => Some(2),
            BookmakerRegion::Au => Some(3),
        }
    }

    /// Inverse of [`BookmakerRegion::table_index`].
    #[must_use]
    pub fn from_table_index(index: usize) -> Option<Self> {
        Self::TABLES.get(index).copied()
    }
}

impl FromStr for BookmakerRegion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(BookmakerRegion::All),
            "us" => Ok(BookmakerRegion::Us),
            "uk" => Ok(BookmakerRegion::Uk),
            "eu" => Ok(BookmakerRegion::Eu),
            "au" => Ok(BookmakerRegion::Au),
            _ => Err(Error::validation(format!(
                "unknown bookmaker region {s:?}, expected one of [{}]",
                Self::NAMES.join(", ")
            ))),
        }
    }
}

/// A bookmaker row from the directory page.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Builder)]
#[builder(on(String, into))]
pub struct BookmakerListing {
    /// Region of the table the row was read from.
    pub region: BookmakerRegion,
    /// Key to use in the `bookmakers` request parameter, e.g. `fanduel`.
    pub key: String,
    /// Display name, e.g. `FanDuel`.
    pub title: String,
}
