use bon::Builder;

use crate::ToQueryParams;

/// Currency used for the `convert` parameter when none is given.
pub const DEFAULT_CONVERT: &str = "BTC";

/// Rank of the first ticker returned when none is given.
pub const DEFAULT_START: i64 = 1;

/// Page size when none is given. This is also the largest page the API will return.
pub const DEFAULT_LIMIT: i64 = 100;

/// Request for the paginated `/ticker/` endpoint.
///
/// `start` and `limit` are sent as given. The API documents `start >= 1` and
/// `1 <= limit <= 100`, but out-of-range values are not rejected here.
///
/// # Example
///
/// ```
/// use coinmarketcap_client::types::TickerRequest;
///
/// let request = TickerRequest::builder().start(101).limit(50).convert("EUR").build();
/// assert_eq!(request.start, 101);
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(on(String, into))]
pub struct TickerRequest {
    /// Return results from rank `start` and above.
    #[builder(default = DEFAULT_START)]
    pub start: i64,
    /// Return at most `limit` results.
    #[builder(default = DEFAULT_LIMIT)]
    pub limit: i64,
    /// Return pricing info in terms of this currency.
    #[builder(default = DEFAULT_CONVERT.to_owned())]
    pub convert: String,
}

impl Default for TickerRequest {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ToQueryParams for TickerRequest {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("start", self.start.to_string()),
            ("limit", self.limit.to_string()),
            ("convert", self.convert.clone()),
        ]
    }
}

/// Request for ticker data on a single asset, `/ticker/{id}/`.
///
/// `id` is the numeric identifier from the listings endpoint. It is placed in
/// the path verbatim.
///
/// # Example
///
/// ```
/// use coinmarketcap_client::types::SpecificTickerRequest;
///
/// let request = SpecificTickerRequest::builder().id("1027").convert("ETH").build();
/// assert_eq!(request.convert, "ETH");
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(on(String, into))]
pub struct SpecificTickerRequest {
    pub id: String,
    #[builder(default = DEFAULT_CONVERT.to_owned())]
    pub convert: String,
}

impl ToQueryParams for SpecificTickerRequest {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![("convert", self.convert.clone())]
    }
}

/// Request for the `/global/` market summary.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(on(String, into))]
pub struct GlobalRequest {
    #[builder(default = DEFAULT_CONVERT.to_owned())]
    pub convert: String,
}

impl Default for GlobalRequest {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ToQueryParams for GlobalRequest {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![("convert", self.convert.clone())]
    }
}
