//! HTML parsing of the bookmaker directory page.
//!
//! [`Html`] is not `Send`, so everything here is synchronous and runs after the page
//! body has been fetched.

use scraper::{ElementRef, Html, Selector};

use super::types::{BookmakerListing, BookmakerRegion};
use crate::Result;
use crate::error::Error;

/// Column positions of the key and title cells within a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Columns {
    key: usize,
    title: usize,
}

impl Columns {
    const POSITIONAL: Columns = Columns { key: 0, title: 1 };

    /// Finds the columns by header text, e.g. `Region key | Bookmaker key | Bookmaker`.
    fn detect(headers: &[String]) -> Columns {
        let headers: Vec<String> = headers.iter().map(|h| h.to_lowercase()).collect();

        let key = headers
            .iter()
            .position(|h| h.contains("key") && !h.contains("region"));
        let title = headers.iter().position(|h| {
            !h.contains("key")
                && ["bookmaker", "title", "name"]
                    .iter()
                    .any(|word| h.contains(word))
        });

        match (key, title) {
            (Some(key), Some(title)) => Columns { key, title },
            _ => Columns::POSITIONAL,
        }
    }
}

fn selector(css: &'static str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::malformed_page(format!("selector {css}: {e}")))
}

/// Text content with whitespace runs collapsed to single spaces.
fn text(element: ElementRef<'_>) -> String {
    element.text().flat_map(str::split_whitespace).collect::<Vec<_>>().join(" ")
}

/// Reads the `index`-th `<table>` of `html` as a list of bookmakers in `region`.
pub(crate) fn parse_bookmaker_table(
    html: &str,
    index: usize,
    region: BookmakerRegion,
) -> Result<Vec<BookmakerListing>> {
    let document = Html::parse_document(html);
    let table = nth_table(&document, index)?;

    table_listings(table, region)
}

/// Reads every regional table of `html` from a single parse, in [`BookmakerRegion::TABLES`]
/// order.
pub(crate) fn parse_all_bookmaker_tables(html: &str) -> Result<Vec<BookmakerListing>> {
    let document = Html::parse_document(html);
    let tables: Vec<ElementRef<'_>> = document.select(&selector("table")?).collect();

    let mut listings = Vec::new();
    for (index, region) in BookmakerRegion::TABLES.into_iter().enumerate() {
        let table = tables
            .get(index)
            .copied()
            .ok_or_else(|| missing_table(index))?;
        listings.extend(table_listings(table, region)?);
    }

    Ok(listings)
}

fn missing_table(index: usize) -> Error {
    Error::malformed_page(format!("no bookmaker table at index {index}"))
}

fn nth_table(document: &Html, index: usize) -> Result<ElementRef<'_>> {
    document
        .select(&selector("table")?)
        .nth(index)
        .ok_or_else(|| missing_table(index))
}

fn table_listings(table: ElementRef<'_>, region: BookmakerRegion) -> Result<Vec<BookmakerListing>> {
    let headers: Vec<String> = table.select(&selector("th")?).map(text).collect();
    let columns = Columns::detect(&headers);

    let cell = selector("td")?;
    let mut listings = Vec::new();
    for row in table.select(&selector("tr")?) {
        let cells: Vec<String> = row.select(&cell).map(text).collect();
        if cells.is_empty() {
            continue;
        }

        let (Some(key), Some(title)) = (cells.get(columns.key), cells.get(columns.title)) else {
            tracing::warn!(%region, cells = cells.len(), "skipping short bookmaker row");
            continue;
        };
        if key.is_empty() {
            continue;
        }

        listings.push(BookmakerListing {
            region,
            key: key.clone(),
            title: title.clone(),
        });
    }

    Ok(listings)
}
