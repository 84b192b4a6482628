use reqwest::{Client as ReqwestClient, Method};
use url::Url;

use super::page::{parse_all_bookmaker_tables, parse_bookmaker_table};
use super::types::{BookmakerListing, BookmakerRegion};
use crate::Result;
use crate::error::Error;
use crate::odds::Config;

/// Public page listing the bookmakers covered by The Odds API, one table per region.
pub const BOOKMAKER_PAGE: &str = "https://the-odds-api.com/sports-odds-data/bookmaker-apis.html";

/// Supplies the bookmaker table for one region.
///
/// `region_index` follows [`BookmakerRegion::TABLES`]: `0` is `us`, `1` is `uk`, `2` is
/// `eu` and `3` is `au`.
pub trait TableSource: Sync {
    fn fetch_bookmaker_table(
        &self,
        region_index: usize,
    ) -> impl Future<Output = Result<Vec<BookmakerListing>>> + Send;

    /// Every table in [`BookmakerRegion::TABLES`] order, concatenated.
    ///
    /// Defaults to one [`fetch_bookmaker_table`](TableSource::fetch_bookmaker_table) per
    /// region. Sources that can read all tables at once should override it.
    fn fetch_all_tables(&self) -> impl Future<Output = Result<Vec<BookmakerListing>>> + Send {
        async move {
            let mut listings = Vec::new();
            for index in 0..BookmakerRegion::TABLES.len() {
                listings.extend(self.fetch_bookmaker_table(index).await?);
            }
            Ok(listings)
        }
    }
}

/// [`TableSource`] that downloads and parses the public bookmaker page.
///
/// The page is fetched without the API key, once per [`Bookmakers::list`] call, including
/// for [`BookmakerRegion::All`].
#[derive(Clone, Debug)]
pub struct PageSource {
    page: Url,
    client: ReqwestClient,
}

impl Default for PageSource {
    fn default() -> Self {
        PageSource::new(BOOKMAKER_PAGE).expect("PageSource with default page should succeed")
    }
}

impl PageSource {
    /// Creates a source for a custom page URL with the default [`Config`].
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client cannot be created.
    pub fn new(page: &str) -> Result<PageSource> {
        PageSource::with_config(page, &Config::default())
    }

    /// Creates a source for a custom page URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client cannot be created.
    pub fn with_config(page: &str, config: &Config) -> Result<PageSource> {
        Ok(Self {
            page: Url::parse(page)?,
            client: config.http_client("text/html")?,
        })
    }

    /// Returns the URL of the scraped page.
    #[must_use]
    pub fn page(&self) -> &Url {
        &self.page
    }

    async fn fetch_page(&self) -> Result<String> {
        let request = self
            .client
            .request(Method::GET, self.page.clone())
            .build()?;

        crate::fetch_text(&self.client, request).await
    }
}

impl TableSource for PageSource {
    #[tracing::instrument(level = "debug", skip(self), fields(page = %self.page))]
    async fn fetch_bookmaker_table(&self, region_index: usize) -> Result<Vec<BookmakerListing>> {
        let region = BookmakerRegion::from_table_index(region_index).ok_or_else(|| {
            Error::validation(format!("no bookmaker region for table index {region_index}"))
        })?;

        let html = self.fetch_page().await?;

        parse_bookmaker_table(&html, region_index, region)
    }

    #[tracing::instrument(level = "debug", skip(self), fields(page = %self.page))]
    async fn fetch_all_tables(&self) -> Result<Vec<BookmakerListing>> {
        let html = self.fetch_page().await?;

        parse_all_bookmaker_tables(&html)
    }
}

/// Lists the bookmakers covered in each region.
///
/// `Bookmakers::default()` reads the public [`BOOKMAKER_PAGE`].
///
/// # Example
///
/// ```no_run
/// use odds_api_client::bookmakers::{BookmakerRegion, Bookmakers};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let bookmakers: Bookmakers = Bookmakers::default();
///
/// for listing in bookmakers.list("uk".parse()?).await? {
///     println!("{}: {}", listing.key, listing.title);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct Bookmakers<S = PageSource> {
    source: S,
}

impl<S: TableSource> Bookmakers<S> {
    /// Uses `source` instead of the public page, e.g. a fixture in tests.
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// Returns the source the tables are read from.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Lists the bookmakers of `region`.
    ///
    /// [`BookmakerRegion::All`] reads every table in [`BookmakerRegion::TABLES`] order
    /// through [`TableSource::fetch_all_tables`] and concatenates the rows.
    ///
    /// # Errors
    ///
    /// Returns a [`Kind::Status`](crate::error::Kind::Status) error if the page does not
    /// answer `200 OK`, and [`Kind::Internal`](crate::error::Kind::Internal) if it cannot be
    /// fetched or no longer has the expected tables.
    pub async fn list(&self, region: BookmakerRegion) -> Result<Vec<BookmakerListing>> {
        match region.table_index() {
            Some(index) => self.source.fetch_bookmaker_table(index).await,
            None => self.source.fetch_all_tables().await,
        }
    }
}
