#![cfg_attr(doc, doc = include_str!("../README.md"))]

#[cfg(feature = "bookmakers")]
pub mod bookmakers;
pub mod error;
pub mod markets;
pub mod odds;
pub(crate) mod serde_helpers;
pub mod types;

use reqwest::{Request, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{Error, Status};

pub type Result<T> = std::result::Result<T, Error>;

/// Production host of The Odds API.
pub const DEFAULT_HOST: &str = "https://api.the-odds-api.com";

/// Environment variable the demos read the API key from.
///
/// The library never reads the environment itself; resolving credentials is up
/// to the embedding application.
pub const API_KEY_VAR: &str = "ODDS_API_KEY";

/// Trait for converting request types to URL query parameters.
///
/// This trait is automatically implemented for all types that implement [`Serialize`].
/// It uses [`serde_html_form`] to serialize the struct fields into a query string.
/// Unset optional fields are skipped, so an empty string means "no parameters".
pub trait ToQueryParams: Serialize {
    /// Converts the request to a URL-encoded query string without the leading `?`.
    fn query_params(&self) -> Result<String> {
        Ok(serde_html_form::to_string(self)?)
    }
}

impl<T: Serialize> ToQueryParams for T {}

/// Executes a single request and keeps the raw response when the status is `200 OK`.
///
/// A response with any other status, and a request that never got a response (DNS,
/// connect, timeout), is reported through `tracing::warn!` and mapped to `None`. The
/// report carries method, path, status code and body, never the query string with
/// the API key. Nothing is retried.
#[tracing::instrument(
    level = "debug",
    skip(client, request),
    fields(
        method = %request.method(),
        path = request.url().path(),
        status_code
    )
)]
async fn send(client: &reqwest::Client, request: Request) -> Option<Response> {
    let method = request.method().clone();
    let path = request.url().path().to_owned();

    let response = match client.execute(request).await {
        Ok(response) => response,
        Err(e) => {
            let error = e.without_url();
            tracing::warn!(
                method = %method,
                path = %path,
                error = %error,
                "API request could not be sent"
            );
            return None;
        }
    };

    let status_code = response.status();
    tracing::Span::current().record("status_code", status_code.as_u16());

    if status_code != StatusCode::OK {
        let status = Status {
            status_code,
            method,
            path,
            message: response.text().await.unwrap_or_default(),
        };

        tracing::warn!(
            status = %status.status_code,
            method = %status.method,
            path = %status.path,
            message = %status.message,
            "API request failed"
        );
        return None;
    }

    Some(response)
}

/// Executes a request and decodes its JSON body, see [`send`] for the failure contract.
///
/// A `200 OK` whose body is not the expected JSON is an error.
async fn request<Res: DeserializeOwned>(
    client: &reqwest::Client,
    request: Request,
) -> Result<Option<Res>> {
    let Some(response) = send(client, request).await else {
        return Ok(None);
    };

    let json_value = response.json::<serde_json::Value>().await?;
    serde_helpers::deserialize_with_warnings(json_value).map(Some)
}

/// Fetches a page that is not part of the JSON API, failing on anything but `200 OK`.
#[cfg(feature = "bookmakers")]
async fn fetch_text(client: &reqwest::Client, request: Request) -> Result<String> {
    let method = request.method().clone();
    let path = request.url().path().to_owned();

    let response = client.execute(request).await?;
    let status_code = response.status();
    if status_code != StatusCode::OK {
        let message = response.text().await.unwrap_or_default();
        return Err(Error::status(status_code, method, path, message));
    }

    Ok(response.text().await?)
}
