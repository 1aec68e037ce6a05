//! Serde shapes of the chart payload, reduced to closes and dividends.

use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Deserialize)]
pub(crate) struct ChartResponse {
    pub(crate) chart: ChartBody,
}

#[derive(Deserialize)]
pub(crate) struct ChartBody {
    #[serde(default)]
    pub(crate) result: Option<Vec<ChartSeriesNode>>,
    #[serde(default)]
    pub(crate) error: Option<ProviderError>,
}

#[derive(Deserialize)]
pub(crate) struct ProviderError {
    pub(crate) code: String,
    #[serde(default)]
    pub(crate) description: String,
}

#[derive(Deserialize)]
pub(crate) struct ChartSeriesNode {
    #[serde(default)]
    pub(crate) meta: Option<ExchangeClock>,
    #[serde(default, rename = "timestamp")]
    pub(crate) timestamps: Option<Vec<i64>>,
    pub(crate) indicators: IndicatorSet,
    #[serde(default)]
    pub(crate) events: Option<EventSet>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ExchangeClock {
    #[serde(default)]
    pub(crate) exchange_timezone_name: Option<String>,
    #[serde(default)]
    pub(crate) gmtoffset: Option<i64>,
}

#[derive(Deserialize)]
pub(crate) struct IndicatorSet {
    #[serde(default)]
    pub(crate) quote: Vec<CloseColumn>,
}

#[derive(Deserialize)]
pub(crate) struct CloseColumn {
    #[serde(default)]
    pub(crate) close: Vec<Option<f64>>,
}

/// Events are keyed by the event timestamp as a string.
#[derive(Deserialize)]
pub(crate) struct EventSet {
    #[serde(default)]
    pub(crate) dividends: Option<BTreeMap<String, DividendNode>>,
}

#[derive(Deserialize)]
pub(crate) struct DividendNode {
    pub(crate) amount: Option<f64>,
    pub(crate) date: Option<i64>,
}
