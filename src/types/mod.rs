//! Request types and endpoint paths for the CoinMarketCap v2 API.

mod request;

use std::fmt;

pub use request::{
    DEFAULT_CONVERT, DEFAULT_LIMIT, DEFAULT_START, GlobalRequest, SpecificTickerRequest,
    TickerRequest,
};

/// One of the four read-only endpoints of the API.
///
/// | Endpoint | Path |
/// |----------|------|
/// | [`Endpoint::Listings`] | `listings/` |
/// | [`Endpoint::Ticker`] | `ticker/` |
/// | [`Endpoint::SpecificTicker`] | `ticker/{id}/` |
/// | [`Endpoint::Global`] | `global/` |
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'id> {
    /// All active cryptocurrency listings in one call.
    Listings,
    /// Ticker data in order of rank, paginated with `start` and `limit`.
    Ticker,
    /// Ticker data for the asset with the given listings `id`.
    SpecificTicker(&'id str),
    /// The global market summary.
    Global,
}

impl Endpoint<'_> {
    /// Path of this endpoint relative to the base URL, always ending in `/`.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Endpoint::Listings => "listings/".to_owned(),
            Endpoint::Ticker => "ticker/".to_owned(),
            Endpoint::SpecificTicker(id) => format!("ticker/{id}/"),
            Endpoint::Global => "global/".to_owned(),
        }
    }
}

impl fmt::Display for Endpoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_should_end_with_slash() {
        assert_eq!(Endpoint::Listings.path(), "listings/");
        assert_eq!(Endpoint::Ticker.path(), "ticker/");
        assert_eq!(Endpoint::SpecificTicker("1027").path(), "ticker/1027/");
        assert_eq!(Endpoint::Global.to_string(), "global/");
    }
}
