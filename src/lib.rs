#![cfg_attr(doc, doc = include_str!("../README.md"))]

pub mod client;
pub mod error;
pub mod types;

use std::fmt::Write as _;
use std::time::Duration;

pub use client::{Client, Config};
use url::Url;

use crate::error::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Base URL of the public CoinMarketCap v2 API.
pub const BASE_URL: &str = "https://api.coinmarketcap.com/v2/";

/// `User-Agent` header sent with every request unless overridden in [`Config`].
pub const USER_AGENT: &str = "rs_cmc_client";

/// Upper bound on a whole request, from connect to the last body byte.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(180);

/// Upper bound on establishing the connection, TLS included.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Number of redirects followed before the request fails.
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Trait for converting request types to a URL query string.
///
/// Implementors list their parameters in the order they must appear on the
/// wire. Keys and values are emitted verbatim: no percent-encoding is applied,
/// so a value containing `&`, `=`, `#` or a space yields a malformed query.
pub trait ToQueryParams {
    /// Ordered `(name, value)` pairs for this request.
    fn query_pairs(&self) -> Vec<(&'static str, String)>;

    /// Converts the request to a URL query string.
    ///
    /// Returns an empty string if there are no parameters, otherwise a string
    /// starting with `?` with each following pair joined by `&`.
    fn query_params(&self) -> String {
        let mut params = String::new();

        for (i, (key, value)) in self.query_pairs().iter().enumerate() {
            let separator = if i == 0 { '?' } else { '&' };
            let _ = write!(params, "{separator}{key}={value}");
        }

        params
    }
}

/// Concatenates `host`, `path` and an already formatted `query`.
///
/// `host` always ends in `/`, see [`Client::new`].
pub(crate) fn build_url(host: &Url, path: &str, query: &str) -> String {
    format!("{host}{path}{query}")
}

/// Performs a GET on `url` and returns the body unmodified.
///
/// The status code is not checked: a non-2xx response with a body is returned
/// as `Ok`. Only a failure to complete the exchange is an error.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "debug", skip(client), fields(status_code))
)]
fn request(client: &reqwest::blocking::Client, url: &str) -> Result<String> {
    let response = client
        .get(url)
        .send()
        .map_err(|e| transport_error(url, e))?;

    #[cfg(feature = "tracing")]
    {
        let status_code = response.status();
        tracing::Span::current().record("status_code", status_code.as_u16());

        if !status_code.is_success() {
            tracing::warn!(status = %status_code, url = %url, "API returned non-success status");
        }
    }

    response.text().map_err(|e| transport_error(url, e))
}

fn transport_error(url: &str, e: reqwest::Error) -> Error {
    #[cfg(feature = "tracing")]
    tracing::error!(url = %url, error = %e, "Request error");

    Error::transport(url.to_owned(), e)
}
