//! Blocking client for the CoinMarketCap v2 API.
//!
//! # Example
//!
//! ```no_run
//! use coinmarketcap_client::Client;
//! use coinmarketcap_client::types::TickerRequest;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::default();
//!
//! // Second page of 50, priced in EUR
//! let request = TickerRequest::builder().start(51).limit(50).convert("EUR").build();
//! let body = client.ticker(&request)?;
//! println!("{body}");
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use bon::Builder;
use reqwest::blocking::Client as ReqwestClient;
use reqwest::redirect::Policy;
use url::Url;

use crate::error::Error;
use crate::types::{Endpoint, GlobalRequest, SpecificTickerRequest, TickerRequest};
use crate::{
    BASE_URL, DEFAULT_CONNECT_TIMEOUT, DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT, Result,
    ToQueryParams as _, USER_AGENT,
};

/// Transport settings for a [`Client`]. Fixed once the client is built.
///
/// ```
/// use std::time::Duration;
/// use coinmarketcap_client::Config;
///
/// let config = Config::builder()
///     .user_agent("my-dashboard/1.0")
///     .timeout(Duration::from_secs(20))
///     .build();
/// assert_eq!(config.connect_timeout(), Duration::from_secs(30));
/// ```
#[non_exhaustive]
#[derive(Clone, Debug, Builder)]
pub struct Config {
    /// Value of the `User-Agent` header. Defaults to [`USER_AGENT`].
    #[builder(into, default = USER_AGENT.to_owned())]
    user_agent: String,
    /// Bound on the whole request. Defaults to three (3) minutes.
    #[builder(default = DEFAULT_TIMEOUT)]
    timeout: Duration,
    /// Bound on connection setup. Defaults to thirty (30) seconds.
    #[builder(default = DEFAULT_CONNECT_TIMEOUT)]
    connect_timeout: Duration,
    /// Redirects followed before the request fails with a redirect error.
    #[builder(default = DEFAULT_MAX_REDIRECTS)]
    max_redirects: usize,
    /// Skip TLS peer certificate verification.
    ///
    /// Any certificate is trusted when this is set, including expired and
    /// self-signed ones, which exposes every response to tampering. Only use
    /// it against hosts you control.
    #[builder(default)]
    danger_accept_invalid_certs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config::builder().build()
    }
}

impl Config {
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    #[must_use]
    pub fn max_redirects(&self) -> usize {
        self.max_redirects
    }

    #[must_use]
    pub fn danger_accept_invalid_certs(&self) -> bool {
        self.danger_accept_invalid_certs
    }
}

/// HTTP client for the CoinMarketCap v2 API.
///
/// Every endpoint method issues one blocking GET and returns the raw response
/// body. Bodies are returned whatever the status code; only a request that
/// could not complete is an [`Error`] of kind
/// [`Transport`](crate::error::Kind::Transport).
///
/// The client holds no per-call state and can be cloned or shared between
/// threads. It must not be used from inside an async runtime.
///
/// # API Base URL
///
/// The default API endpoint is `https://api.coinmarketcap.com/v2/`.
#[derive(Clone, Debug)]
pub struct Client {
    host: Url,
    config: Config,
    client: ReqwestClient,
}

impl Default for Client {
    fn default() -> Self {
        Client::new(BASE_URL, Config::default())
            .expect("Client with default endpoint should succeed")
    }
}

impl Client {
    /// Creates a new client against `host` with the given [`Config`].
    ///
    /// A trailing `/` is added to the path of `host` if missing, so that
    /// `https://example.com/v2` and `https://example.com/v2/` are equivalent.
    ///
    /// # Errors
    ///
    /// Returns an error if `host` is not an absolute `http` or `https` URL,
    /// or if the HTTP client cannot be built.
    pub fn new(host: &str, config: Config) -> Result<Client> {
        let host = normalize_host(host)?;

        let client = ReqwestClient::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .redirect(Policy::limited(config.max_redirects))
            .danger_accept_invalid_certs(config.danger_accept_invalid_certs)
            .build()?;

        #[cfg(feature = "tracing")]
        if config.danger_accept_invalid_certs {
            tracing::warn!(host = %host, "TLS certificate verification is disabled");
        }

        Ok(Self {
            host,
            config,
            client,
        })
    }

    /// Returns the base URL for the client.
    #[must_use]
    pub fn host(&self) -> &Url {
        &self.host
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn url(&self, endpoint: Endpoint<'_>, query: &str) -> String {
        crate::build_url(&self.host, &endpoint.path(), query)
    }

    /// URL requested by [`Client::listings`].
    #[must_use]
    pub fn listings_url(&self) -> String {
        self.url(Endpoint::Listings, "")
    }

    /// URL requested by [`Client::ticker`].
    #[must_use]
    pub fn ticker_url(&self, request: &TickerRequest) -> String {
        self.url(Endpoint::Ticker, &request.query_params())
    }

    /// URL requested by [`Client::specific_ticker`].
    #[must_use]
    pub fn specific_ticker_url(&self, request: &SpecificTickerRequest) -> String {
        self.url(
            Endpoint::SpecificTicker(&request.id),
            &request.query_params(),
        )
    }

    /// URL requested by [`Client::global`].
    #[must_use]
    pub fn global_url(&self, request: &GlobalRequest) -> String {
        self.url(Endpoint::Global, &request.query_params())
    }

    /// All active cryptocurrency listings in one call.
    ///
    /// Use the `id` field of a listing with [`Client::specific_ticker`].
    pub fn listings(&self) -> Result<String> {
        crate::request(&self.client, &self.listings_url())
    }

    /// Ticker data in order of rank.
    ///
    /// The API returns at most 100 results per call; page with
    /// [`TickerRequest::start`] and [`TickerRequest::limit`].
    pub fn ticker(&self, request: &TickerRequest) -> Result<String> {
        crate::request(&self.client, &self.ticker_url(request))
    }

    /// Ticker data for a single cryptocurrency.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use coinmarketcap_client::Client;
    /// use coinmarketcap_client::types::SpecificTickerRequest;
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::default();
    /// let request = SpecificTickerRequest::builder().id("1027").convert("ETH").build();
    ///
    /// let body = client.specific_ticker(&request)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn specific_ticker(&self, request: &SpecificTickerRequest) -> Result<String> {
        crate::request(&self.client, &self.specific_ticker_url(request))
    }

    /// The global market summary shown at the top of coinmarketcap.com.
    pub fn global(&self, request: &GlobalRequest) -> Result<String> {
        crate::request(&self.client, &self.global_url(request))
    }
}

fn normalize_host(host: &str) -> Result<Url> {
    let mut url = Url::parse(host)?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::validation(format!(
            "unsupported scheme `{}` in base url {host}",
            url.scheme()
        )));
    }
    if url.cannot_be_a_base() || url.query().is_some() || url.fragment().is_some() {
        return Err(Error::validation(format!(
            "base url {host} must be a plain path without query or fragment"
        )));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}
