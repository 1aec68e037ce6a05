use super::model::{
    CHART_YEARS, ChartData, ChartSeries, Report, ReportRequest, ReportRow, ReportTable,
    RequestError,
};
use crate::core::MarketDataService;
use crate::series::{Lookback, normalize};
use crate::valuation::{FundamentalsResult, ValuationParams, fundamentals};

/// Columns formatted without a `%` suffix, by index into [`FundamentalsResult::values`].
const PLAIN_COLUMNS: [usize; 2] = [0, 10];

/// Values every entry of `request`, one symbol after the other.
///
/// Symbols are trimmed and uppercased. Entries with a blank symbol or an
/// unparseable price are skipped; symbols without enough data get an all-zero row.
///
/// # Errors
///
/// Returns an error only if the request itself is invalid.
#[tracing::instrument(skip_all, fields(entries = request.entries.len()))]
pub async fn build_report(
    source: &dyn MarketDataService,
    request: &ReportRequest,
    lookback: Lookback,
) -> Result<Report, RequestError> {
    request.validate()?;

    let mut table = ReportTable::default();
    let mut chart = ChartData {
        labels: (0..CHART_YEARS).map(|k| lookback.as_of_year - k).collect(),
        series: Vec::new(),
    };

    for entry in &request.entries {
        let symbol = entry.symbol.trim().to_uppercase();
        if symbol.is_empty() {
            continue;
        }
        let price_years_ago = match entry.price_years_ago.trim().parse::<f64>() {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!(
                    %symbol,
                    price = %entry.price_years_ago,
                    error = %e,
                    "skipping symbol with invalid price"
                );
                continue;
            }
        };

        let data = source.fetch_symbol(&symbol, lookback).await;
        let series = normalize(&data, &lookback);
        let params = ValuationParams {
            shares: request.shares,
            real_discount_rate: request.real_discount_rate,
            average_inflation: request.average_inflation,
            price_years_ago,
        };
        let result = fundamentals(&symbol, &series, &params);

        let row = format_row(&symbol, &result);
        if row.is_degenerate() {
            tracing::debug!(%symbol, "dropping row with non-finite cells");
            continue;
        }
        table.rows.push(row);

        if result.overpriced.is_finite() && result.overpriced > 0.0 {
            chart.series.push(ChartSeries {
                symbol,
                values: vec![result.overpriced; chart.labels.len()],
            });
        }
    }

    tracing::info!(rows = table.rows.len(), "report assembled");
    Ok(Report { table, chart })
}

/// Formats the twelve values with two decimals, with a `%` suffix on the ratios.
pub fn format_row(symbol: &str, result: &FundamentalsResult) -> ReportRow {
    let cells = result
        .values()
        .iter()
        .enumerate()
        .map(|(i, v)| {
            if PLAIN_COLUMNS.contains(&i) {
                format!("{v:.2}")
            } else {
                format!("{v:.2}%")
            }
        })
        .collect();
    ReportRow {
        symbol: symbol.to_string(),
        cells,
    }
}
