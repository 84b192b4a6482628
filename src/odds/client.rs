use std::str::FromStr as _;
use std::time::Duration;

use bon::Builder;
use reqwest::header::HeaderMap;
use reqwest::{
    Client as ReqwestClient, Method,
    header::{HeaderValue, USER_AGENT},
};
use rust_decimal::prelude::ToPrimitive as _;
use secrecy::{ExposeSecret as _, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use super::types::request::{
    EventOddsRequest, HistoricalOddsRequest, OddsRequest, ScoresRequest, SportsRequest,
};
use super::types::response::{Event, HistoricalSnapshot, ScoreEvent, Sport, Usage};
use crate::error::Error;
use crate::types::Decimal;
use crate::{DEFAULT_HOST, Result, ToQueryParams as _};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_USER_AGENT: &str = "odds_api_client";

const REQUESTS_REMAINING: &str = "x-requests-remaining";
const REQUESTS_USED: &str = "x-requests-used";
const REQUESTS_LAST: &str = "x-requests-last";

/// Settings applied to every request made by a [`Client`].
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use odds_api_client::odds::Config;
///
/// let config = Config::builder()
///     .timeout(Duration::from_secs(10))
///     .user_agent("my-odds-dashboard/1.0")
///     .build();
/// ```
#[non_exhaustive]
#[derive(Clone, Debug, Builder)]
pub struct Config {
    /// Upper bound on a single request, connect included. Defaults to thirty (30) seconds.
    #[builder(default = DEFAULT_TIMEOUT)]
    timeout: Duration,
    /// Value of the `User-Agent` header.
    #[builder(into, default = DEFAULT_USER_AGENT.to_owned())]
    user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Config::builder().build()
    }
}

impl Config {
    pub(crate) fn http_client(&self, accept: &'static str) -> Result<ReqwestClient> {
        let mut headers = HeaderMap::new();

        let user_agent = HeaderValue::from_str(&self.user_agent).map_err(|e| {
            Error::validation(format!("invalid user agent {:?}: {e}", self.user_agent))
        })?;

        headers.insert(USER_AGENT, user_agent);
        headers.insert("Accept", HeaderValue::from_static(accept));

        Ok(ReqwestClient::builder()
            .default_headers(headers)
            .timeout(self.timeout)
            .build()?)
    }
}

/// HTTP client for The Odds API.
///
/// Holds the API key and host; both are fixed at construction. Cloning is cheap and
/// clones share the underlying connection pool. The API key is only ever sent as the
/// `apiKey` query parameter and is redacted from `Debug` output.
///
/// # Example
///
/// ```no_run
/// use odds_api_client::odds::{Client, types::request::SportsRequest};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::new("your-api-key")?;
///
/// if let Some(sports) = client.sports(&SportsRequest::default()).await? {
///     for sport in sports {
///         println!("{}: {}", sport.key, sport.title);
///     }
/// }
///
/// if let Some(remaining) = client.requests_remaining().await? {
///     println!("{remaining} requests left this month");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    host: Url,
    api_key: SecretString,
    client: ReqwestClient,
}

impl Client {
    /// Creates a client for the production host with the default [`Config`].
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(api_key: &str) -> Result<Client> {
        Client::with_config(DEFAULT_HOST, api_key, Config::default())
    }

    /// Creates a client for a custom host, e.g. a mock server in tests.
    ///
    /// # Errors
    ///
    /// Returns an error if the host URL is invalid or the HTTP client cannot be created.
    pub fn with_config(host: &str, api_key: &str, config: Config) -> Result<Client> {
        Ok(Self {
            host: Url::parse(host)?,
            api_key: SecretString::from(api_key),
            client: config.http_client("application/json")?,
        })
    }

    /// Returns the base URL of the API.
    #[must_use]
    pub fn host(&self) -> &Url {
        &self.host
    }

    /// Builds `host/segments...?query&apiKey=...`.
    ///
    /// Segments are percent-encoded individually, so sport keys and event ids cannot
    /// alter the path. An empty trailing segment produces a trailing slash.
    fn url<Req: Serialize>(&self, segments: &[&str], req: &Req) -> Result<Url> {
        let mut url = self.host.clone();
        url.path_segments_mut()
            .map_err(|()| Error::validation(format!("host {} cannot be a base URL", self.host)))?
            .pop_if_empty()
            .extend(segments);

        let query = req.query_params()?;
        if !query.is_empty() {
            url.set_query(Some(&query));
        }
        url.query_pairs_mut()
            .append_pair("apiKey", self.api_key.expose_secret());

        Ok(url)
    }

    async fn get<Req: Serialize, Res: DeserializeOwned>(
        &self,
        segments: &[&str],
        req: &Req,
    ) -> Result<Option<Res>> {
        let request = self
            .client
            .request(Method::GET, self.url(segments, req)?)
            .build()?;

        crate::request(&self.client, request).await
    }

    /// Lists in-season sports, or every sport when `all` is set.
    ///
    /// Does not count against the usage quota.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use odds_api_client::odds::{Client, types::request::SportsRequest};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::new("your-api-key")?;
    /// let request = SportsRequest::builder().all(true).build();
    ///
    /// let sports = client.sports(&request).await?.unwrap_or_default();
    /// println!("{} sports", sports.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn sports(&self, request: &SportsRequest) -> Result<Option<Vec<Sport>>> {
        self.get(&["v4", "sports", ""], request).await
    }

    /// Lists upcoming and live games with the latest odds for the requested regions and
    /// markets.
    ///
    /// Quota cost is the number of markets times the number of regions.
    pub async fn odds(&self, request: &OddsRequest) -> Result<Option<Vec<Event>>> {
        self.get(&["v4", "sports", request.sport.as_str(), "odds"], request)
            .await
    }

    /// Lists upcoming, live and recently completed games with their scores.
    pub async fn scores(&self, request: &ScoresRequest) -> Result<Option<Vec<ScoreEvent>>> {
        self.get(&["v4", "sports", request.sport.as_str(), "scores", ""], request)
            .await
    }

    /// Returns the odds snapshot closest to, and not after, the requested date.
    pub async fn historical_odds(
        &self,
        request: &HistoricalOddsRequest,
    ) -> Result<Option<HistoricalSnapshot>> {
        self.get(
            &["v4", "sports", request.sport.as_str(), "odds-history", ""],
            request,
        )
        .await
    }

    /// Returns the odds of a single event. Accepts any market key, including
    /// additional markets and player props.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use odds_api_client::odds::{Client, types::Region, types::request::EventOddsRequest};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::new("your-api-key")?;
    /// let request = EventOddsRequest::builder()
    ///     .sport("basketball_nba")
    ///     .event_id("4afb8f0ba6e00d9e44b4240d1ba5493c")
    ///     .regions(vec![Region::Us])
    ///     .markets(vec!["h2h".to_owned()])
    ///     .bookmakers(vec!["fanduel".to_owned()])
    ///     .build();
    ///
    /// if let Some(event) = client.event_odds(&request).await? {
    ///     println!("{} bookmakers", event.bookmakers.len());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn event_odds(&self, request: &EventOddsRequest) -> Result<Option<Event>> {
        self.get(
            &[
                "v4",
                "sports",
                request.sport.as_str(),
                "events",
                request.event_id.as_str(),
                "odds",
                "",
            ],
            request,
        )
        .await
    }

    /// Reads the usage quota from the headers of a single, free `/v4/sports/` call.
    ///
    /// # Errors
    ///
    /// Returns an error if a `200 OK` response lacks the usage headers or they are not
    /// non-negative numbers.
    pub async fn usage(&self) -> Result<Option<Usage>> {
        let request = self
            .client
            .request(
                Method::GET,
                self.url(&["v4", "sports", ""], &SportsRequest::default())?,
            )
            .build()?;

        let Some(response) = crate::send(&self.client, request).await else {
            return Ok(None);
        };

        let headers = response.headers();
        let last = match headers.get(REQUESTS_LAST) {
            Some(_) => Some(usage_header(headers, REQUESTS_LAST)?),
            None => None,
        };

        Ok(Some(Usage {
            remaining: usage_header(headers, REQUESTS_REMAINING)?,
            used: usage_header(headers, REQUESTS_USED)?,
            last,
        }))
    }

    /// Number of requests remaining for the current month.
    pub async fn requests_remaining(&self) -> Result<Option<u64>> {
        Ok(self.usage().await?.map(|usage| usage.remaining))
    }

    /// Number of requests used in the current month.
    pub async fn requests_used(&self) -> Result<Option<u64>> {
        Ok(self.usage().await?.map(|usage| usage.used))
    }
}

/// Parses a usage header as a non-negative integer.
///
/// The provider sometimes formats these as floats (`"14527.0"`); the fractional part
/// is dropped.
fn usage_header(headers: &HeaderMap, name: &'static str) -> Result<u64> {
    let raw = headers
        .get(name)
        .ok_or_else(|| Error::invalid_header(name, None))?;

    raw.to_str()
        .ok()
        .and_then(|text| Decimal::from_str(text.trim()).ok())
        .filter(|value| !value.is_sign_negative())
        .and_then(|value| value.trunc().to_u64())
        .ok_or_else(|| {
            let text = String::from_utf8_lossy(raw.as_bytes()).into_owned();
            Error::invalid_header(name, Some(text))
        })
}
