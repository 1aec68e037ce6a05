use std::collections::BTreeMap;

use url::Url;

use crate::core::{YfClient, YfError, net};
use crate::history::wire::{ChartResponse, DividendNode, ExchangeClock};

/// One decoded chart series, before nulls are dropped.
pub(super) struct RawChart {
    pub timestamps: Vec<i64>,
    pub closes: Vec<Option<f64>>,
    pub dividends: BTreeMap<String, DividendNode>,
    pub clock: Option<ExchangeClock>,
}

pub(super) async fn fetch_chart(
    client: &YfClient,
    symbol: &str,
    period: (i64, i64),
) -> Result<RawChart, YfError> {
    let url = chart_url(client.base_chart(), symbol, period)?;
    let resp = client.send(client.http().get(url)).await?;
    let body = net::read_body(resp, "history_chart", symbol).await?;
    decode_chart(&body)
}

/// Daily bars with dividend events over `[start, end)`.
fn chart_url(base: &Url, symbol: &str, (start, end): (i64, i64)) -> Result<Url, YfError> {
    if start >= end {
        return Err(YfError::InvalidDates);
    }
    let mut url = base.join(symbol)?;
    url.query_pairs_mut()
        .append_pair("period1", &start.to_string())
        .append_pair("period2", &end.to_string())
        .append_pair("interval", "1d")
        .append_pair("events", "div")
        .append_pair("includePrePost", "false");
    Ok(url)
}

fn decode_chart(body: &str) -> Result<RawChart, YfError> {
    let ChartResponse { chart } = serde_json::from_str(body)?;

    if let Some(err) = chart.error {
        return Err(YfError::Data(format!(
            "chart error {}: {}",
            err.code, err.description
        )));
    }

    let node = chart
        .result
        .unwrap_or_default()
        .into_iter()
        .next()
        .ok_or_else(|| YfError::Data("chart payload has no result".into()))?;

    // Symbols without trading history come back without a quote column.
    let closes = node
        .indicators
        .quote
        .into_iter()
        .next()
        .map(|q| q.close)
        .unwrap_or_default();

    Ok(RawChart {
        timestamps: node.timestamps.unwrap_or_default(),
        closes,
        dividends: node.events.and_then(|e| e.dividends).unwrap_or_default(),
        clock: node.meta,
    })
}
