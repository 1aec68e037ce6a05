//! Per-symbol market data with an explicit outcome for every series.

mod model;

pub use model::{Fetch, SymbolData};

use std::future::Future;
use std::pin::Pin;

use crate::core::{MarketDataService, YfClient, YfError};
use crate::history::{HistoryBuilder, PriceHistory};
use crate::series::Lookback;
use crate::statements::{self, StatementRows};

impl MarketDataService for YfClient {
    fn fetch_symbol<'a>(
        &'a self,
        symbol: &'a str,
        lookback: Lookback,
    ) -> Pin<Box<dyn Future<Output = SymbolData> + Send + 'a>> {
        Box::pin(fetch_symbol_data(self, symbol, lookback))
    }
}

/// Fetches the income rows, balance rows and price history of `symbol`, one
/// request after the other. Failures are logged and recorded, never returned.
pub async fn fetch_symbol_data(client: &YfClient, symbol: &str, lookback: Lookback) -> SymbolData {
    let since = lookback.start_year();

    let income = classify(
        symbol,
        "income statement",
        statements::income_statement(client, symbol, since).await,
        StatementRows::is_empty,
    );
    let balance = classify(
        symbol,
        "balance sheet",
        statements::balance_sheet(client, symbol, since).await,
        StatementRows::is_empty,
    );

    let (start, end) = lookback.period();
    let history = classify(
        symbol,
        "price history",
        HistoryBuilder::new(client, symbol)
            .between(start, end)
            .fetch()
            .await,
        |h: &PriceHistory| h.bars.is_empty() && h.dividends.is_empty(),
    );

    SymbolData {
        symbol: symbol.to_string(),
        income,
        balance,
        history,
    }
}

fn classify<T>(
    symbol: &str,
    what: &str,
    res: Result<T, YfError>,
    is_empty: impl FnOnce(&T) -> bool,
) -> Fetch<T> {
    match res {
        Ok(v) if is_empty(&v) => {
            tracing::debug!(symbol, what, "provider returned no data");
            Fetch::Empty
        }
        Ok(v) => Fetch::Data(v),
        Err(e) => {
            tracing::warn!(symbol, what, error = %e, "fetch failed");
            Fetch::Failed(e.to_string())
        }
    }
}
