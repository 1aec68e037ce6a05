use serde::Deserialize;
use std::collections::BTreeMap;

/// Yahoo's `{ "raw": .., "fmt": .. }` number wrapper; only `raw` is kept.
#[derive(Deserialize)]
pub(crate) struct RawNum {
    pub(crate) raw: Option<f64>,
}

#[derive(Deserialize)]
pub(crate) struct TimeseriesResponse {
    pub(crate) timeseries: Option<TimeseriesBody>,
}

#[derive(Deserialize)]
pub(crate) struct TimeseriesBody {
    pub(crate) result: Option<Vec<TimeseriesEntry>>,
    #[serde(default)]
    pub(crate) error: Option<serde_json::Value>,
}

/// One entry per requested type; the values live under a key named after the type
/// (e.g. `annualDilutedEPS`), which is why they are collected through `flatten`.
/// `meta` lands in `values` as well and is skipped by the prefix match.
#[derive(Deserialize)]
pub(crate) struct TimeseriesEntry {
    #[serde(default)]
    pub(crate) timestamp: Option<Vec<i64>>,
    #[serde(flatten)]
    pub(crate) values: BTreeMap<String, serde_json::Value>,
}

#[derive(Deserialize)]
pub(crate) struct ReportedPoint {
    #[serde(rename = "asOfDate")]
    pub(crate) as_of_date: Option<String>,
    #[serde(rename = "reportedValue")]
    pub(crate) reported_value: Option<RawNum>,
}
