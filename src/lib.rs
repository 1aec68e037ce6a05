//! # fairvalue-rs
//!
//! Fundamentals ratios and a discounted-retained-earnings fair value estimate for
//! listed companies, computed from Yahoo Finance data and served over HTTP.
//!
//! The pipeline for one symbol:
//!
//! 1. [`YfClient`] fetches the annual statement rows and the daily price history
//!    into a [`SymbolData`], where each series is an explicit [`Fetch`] outcome.
//! 2. [`normalize`] projects the series onto descending year windows.
//! 3. [`fundamentals`] computes the twelve ratios of a [`FundamentalsResult`].
//!
//! [`build_report`] runs that pipeline for up to [`MAX_SYMBOLS`] symbols and
//! formats a [`ReportTable`] plus [`ChartData`]; [`router`] serves it.
//!
//! ## Quick start
//!
//! ```no_run
//! use fairvalue_rs::{Lookback, ReportRequest, SymbolEntry, YfClient, build_report};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = YfClient::builder().build()?;
//! let request = ReportRequest {
//!     shares: 100,
//!     real_discount_rate: 0.05,
//!     average_inflation: 0.02,
//!     entries: vec![SymbolEntry {
//!         symbol: "aapl".into(),
//!         price_years_ago: "120.50".into(),
//!     }],
//! };
//! let report = build_report(&client, &request, Lookback::current()).await?;
//! for row in &report.table.rows {
//!     println!("{} {:?}", row.symbol, row.cells);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod history;
pub mod market;
pub mod report;
pub mod series;
pub mod statements;
pub mod valuation;
pub mod web;

pub use config::{ConfigError, ServerConfig};
pub use crate::core::{MarketDataService, YfClient, YfClientBuilder, YfError};
pub use history::{Bar, Dividend, HistoryBuilder, HistoryMeta, PriceHistory};
pub use market::{Fetch, SymbolData, fetch_symbol_data};
pub use report::{
    COLUMN_HEADERS, ChartData, ChartSeries, MAX_SYMBOLS, Report, ReportRequest, ReportRow,
    ReportTable, RequestError, SymbolEntry, build_report,
};
pub use series::{Lookback, SeriesSet, SymbolSeries, YearlyMetric, normalize};
pub use statements::{LineItem, StatementPoint, StatementRows, balance_sheet, income_statement};
pub use valuation::{CalcError, FundamentalsResult, ValuationParams, compute, fundamentals};
pub use web::{AppState, router};
