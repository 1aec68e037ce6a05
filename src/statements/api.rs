use chrono::{DateTime, NaiveDate, Utc};

use super::model::{LineItem, StatementPoint, StatementRows};
use super::wire::{ReportedPoint, TimeseriesResponse};
use crate::core::{YfClient, YfError, net};

/// Fetches the annual rows for `items` from the /ws/fundamentals-timeseries endpoint.
///
/// The request window starts on 1 January of `since_year` and ends now.
pub(super) async fn fetch_rows(
    client: &YfClient,
    symbol: &str,
    items: &[LineItem],
    since_year: i32,
    endpoint_name: &str,
) -> Result<StatementRows, YfError> {
    let type_str = items
        .iter()
        .map(|item| format!("annual{}", item.timeseries_key()))
        .collect::<Vec<_>>()
        .join(",");

    let end_ts = Utc::now().timestamp();
    let start_ts = NaiveDate::from_ymd_opt(since_year, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map_or(0, |dt| dt.and_utc().timestamp());
    if start_ts >= end_ts {
        return Err(YfError::InvalidDates);
    }

    let mut url = client.base_timeseries().join(symbol)?;
    url.query_pairs_mut()
        .append_pair("symbol", symbol)
        .append_pair("type", &type_str)
        .append_pair("period1", &start_ts.to_string())
        .append_pair("period2", &end_ts.to_string());

    client.ensure_credentials().await?;
    if let Some(crumb) = client.crumb().await {
        url.query_pairs_mut().append_pair("crumb", &crumb);
    }

    let resp = client.send(client.http().get(url)).await?;
    let endpoint = format!("timeseries_{endpoint_name}_annual");
    let body = net::read_body(resp, &endpoint, symbol).await?;

    decode_rows(&body)
}

fn decode_rows(body: &str) -> Result<StatementRows, YfError> {
    let envelope: TimeseriesResponse = serde_json::from_str(body)?;
    let node = envelope
        .timeseries
        .ok_or_else(|| YfError::Data("missing timeseries".into()))?;

    if let Some(err) = node.error.filter(|e| !e.is_null()) {
        return Err(YfError::Data(format!("yahoo error: {err}")));
    }

    let mut rows = StatementRows::default();

    for data in node.result.unwrap_or_default() {
        let timestamps = data.timestamp.unwrap_or_default();

        for (key, values_json) in data.values {
            let Some(item) = key
                .strip_prefix("annual")
                .and_then(LineItem::from_timeseries_key)
            else {
                continue;
            };

            let values: Vec<Option<ReportedPoint>> = serde_json::from_value(values_json)?;
            let mut points: Vec<StatementPoint> = values
                .into_iter()
                .enumerate()
                .filter_map(|(i, v)| to_point(v?, timestamps.get(i).copied()))
                .collect();
            points.sort_by_key(|p| p.period_end);

            tracing::debug!(
                item = item.display_name(),
                points = points.len(),
                "statement row decoded"
            );
            rows.insert(item, points);
        }
    }

    Ok(rows)
}

fn to_point(v: ReportedPoint, ts: Option<i64>) -> Option<StatementPoint> {
    let value = v.reported_value?.raw.filter(|x| x.is_finite())?;
    let period_end = v
        .as_of_date
        .as_deref()
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        .or_else(|| {
            ts.and_then(|t| DateTime::<Utc>::from_timestamp(t, 0))
                .map(|dt| dt.date_naive())
        })?;
    Some(StatementPoint { period_end, value })
}
