//! Daily closes and dividend events from the chart endpoint.

mod assemble;
mod fetch;
mod model;
mod wire;

pub use model::{Bar, Dividend, HistoryMeta, PriceHistory};

use crate::core::{YfClient, YfError};
use crate::series::Lookback;
use assemble::{assemble_bars, extract_dividends};
use fetch::fetch_chart;

/// A builder for fetching the daily closes and dividends of a single symbol.
///
/// Without an explicit period the window of [`Lookback::current`] is requested.
#[derive(Clone)]
pub struct HistoryBuilder {
    client: YfClient,
    symbol: String,
    period: (i64, i64),
}

impl HistoryBuilder {
    /// Creates a new `HistoryBuilder` for a given symbol.
    pub fn new(client: &YfClient, symbol: impl Into<String>) -> Self {
        let (start, end) = Lookback::current().period();
        Self {
            client: client.clone(),
            symbol: symbol.into(),
            period: (start.timestamp(), end.timestamp()),
        }
    }

    /// Restricts the request to `[start, end)`.
    #[must_use]
    pub fn between(
        mut self,
        start: chrono::DateTime<chrono::Utc>,
        end: chrono::DateTime<chrono::Utc>,
    ) -> Self {
        self.period = (start.timestamp(), end.timestamp());
        self
    }

    /// Executes the request.
    ///
    /// # Errors
    ///
    /// Returns `YfError::InvalidDates` if the period is empty, or an error if the
    /// request fails or the payload reports an error.
    #[tracing::instrument(skip(self), fields(symbol = %self.symbol), err)]
    pub async fn fetch(self) -> Result<PriceHistory, YfError> {
        let raw = fetch_chart(&self.client, &self.symbol, self.period).await?;

        tracing::debug!(
            rows = raw.timestamps.len(),
            dividends = raw.dividends.len(),
            "chart decoded"
        );

        Ok(PriceHistory {
            bars: assemble_bars(&raw.timestamps, &raw.closes),
            dividends: extract_dividends(&raw.dividends),
            meta: raw.clock.map(|c| HistoryMeta {
                timezone: c.exchange_timezone_name,
                gmtoffset: c.gmtoffset,
            }),
        })
    }
}
