//! Directory of bookmakers covered by The Odds API, grouped by region.
//!
//! **Feature flag:** `bookmakers` (enabled by default)
//!
//! The provider has no endpoint for this, so the list is scraped from its public
//! documentation page, which holds one `<table>` per region:
//!
//! | Table index | Region |
//! |-------------|--------|
//! | 0 | `us` |
//! | 1 | `uk` |
//! | 2 | `eu` |
//! | 3 | `au` |
//!
//! [`BookmakerRegion::All`] is the concatenation of the four tables in that order.
//! No API key is sent and no quota is used.
//!
//! Fetching sits behind the [`TableSource`] trait so callers and tests can replace the
//! page with their own data. Unlike the API endpoints, a non-`200` page is returned as a
//! [`Kind::Status`](crate::error::Kind::Status) error.

pub mod client;
mod page;
pub mod types;

pub use client::{BOOKMAKER_PAGE, Bookmakers, PageSource, TableSource};
pub use types::{BookmakerListing, BookmakerRegion};
