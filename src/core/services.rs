use std::future::Future;
use std::pin::Pin;

use crate::market::SymbolData;
use crate::series::Lookback;

/// A source of per-symbol market data.
///
/// This decouples the report assembler from the Yahoo client so a report can be
/// built from any source, including canned data in tests. It is implemented by
/// [`YfClient`](crate::core::YfClient).
///
/// Implementations never fail: every series in the returned [`SymbolData`] carries
/// its own [`Fetch`](crate::market::Fetch) outcome.
pub trait MarketDataService: Send + Sync {
    /// Fetches the statement rows, dividends and daily prices for `symbol`
    /// covering the years described by `lookback`.
    fn fetch_symbol<'a>(
        &'a self,
        symbol: &'a str,
        lookback: Lookback,
    ) -> Pin<Box<dyn Future<Output = SymbolData> + Send + 'a>>;
}
