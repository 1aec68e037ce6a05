#![allow(dead_code)]

use chrono::{NaiveDate, TimeZone, Utc};
use fairvalue_rs::YfClient;
use httpmock::{Method::GET, Mock, MockServer};
use serde_json::{Value, json};
use url::Url;

pub const TIMESERIES_PATH: &str = "/ws/fundamentals-timeseries/v1/finance/timeseries/";
pub const CHART_PATH: &str = "/v8/finance/chart/";
pub const CRUMB: &str = "crumb-value";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn mock_cookie_crumb(server: &'_ MockServer) -> (Mock<'_>, Mock<'_>) {
    let cookie_mock = server.mock(|when, then| {
        when.method(GET).path("/consent");
        then.status(200).header(
            "set-cookie",
            "A=B; Max-Age=315360000; Domain=.yahoo.com; Path=/; Secure; SameSite=None",
        );
    });
    let crumb_mock = server.mock(|when, then| {
        when.method(GET).path("/v1/test/getcrumb");
        then.status(200).body(CRUMB);
    });
    (cookie_mock, crumb_mock)
}

/// A client whose every endpoint points at `server`.
pub fn client_for(server: &MockServer) -> YfClient {
    YfClient::builder()
        .base_chart(Url::parse(&format!("{}{CHART_PATH}", server.base_url())).unwrap())
        .base_timeseries(Url::parse(&format!("{}{TIMESERIES_PATH}", server.base_url())).unwrap())
        .cookie_url(Url::parse(&server.url("/consent")).unwrap())
        .crumb_url(Url::parse(&server.url("/v1/test/getcrumb")).unwrap())
        .build()
        .unwrap()
}

/// A fundamentals-timeseries payload with one result per `(key, [(asOfDate, value)])`.
/// A `None` value is emitted as a `null` array element.
pub fn timeseries_body(rows: &[(&str, &[(&str, Option<f64>)])]) -> String {
    let result: Vec<Value> = rows
        .iter()
        .map(|(key, points)| {
            let annual = format!("annual{key}");
            let timestamps: Vec<i64> = points.iter().map(|(d, _)| date_ts(d)).collect();
            let values: Vec<Value> = points
                .iter()
                .map(|(d, v)| match v {
                    Some(v) => json!({
                        "asOfDate": d,
                        "periodType": "12M",
                        "currencyCode": "USD",
                        "reportedValue": { "raw": v, "fmt": format!("{v}") }
                    }),
                    None => Value::Null,
                })
                .collect();
            let mut entry = serde_json::Map::new();
            entry.insert(
                "meta".into(),
                json!({ "symbol": ["TEST"], "type": [annual.clone()] }),
            );
            entry.insert("timestamp".into(), json!(timestamps));
            entry.insert(annual, Value::Array(values));
            Value::Object(entry)
        })
        .collect();
    json!({ "timeseries": { "result": result, "error": null } }).to_string()
}

/// A chart payload with daily closes and dividend events on an exchange clock.
pub fn chart_body(
    closes: &[(i64, Option<f64>)],
    dividends: &[(i64, f64)],
    timezone: &str,
) -> String {
    let timestamps: Vec<i64> = closes.iter().map(|(t, _)| *t).collect();
    let close: Vec<Value> = closes
        .iter()
        .map(|(_, c)| c.map_or(Value::Null, |c| json!(c)))
        .collect();
    let divs: serde_json::Map<String, Value> = dividends
        .iter()
        .map(|(t, a)| (t.to_string(), json!({ "amount": a, "date": t })))
        .collect();
    json!({
        "chart": {
            "result": [{
                "meta": {
                    "currency": "USD",
                    "symbol": "TEST",
                    "exchangeTimezoneName": timezone,
                    "gmtoffset": -18000
                },
                "timestamp": timestamps,
                "events": { "dividends": divs },
                "indicators": { "quote": [{ "close": close }] }
            }],
            "error": null
        }
    })
    .to_string()
}

/// Unix timestamp of `YYYY-MM-DD` at midnight UTC.
pub fn date_ts(date: &str) -> i64 {
    let d = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
    d.and_hms_opt(0, 0, 0).unwrap().and_utc().timestamp()
}

/// Unix timestamp of a UTC instant.
pub fn utc_ts(y: i32, m: u32, d: u32, h: u32, min: u32) -> i64 {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap().timestamp()
}

pub fn mock_timeseries<'a>(
    server: &'a MockServer,
    symbol: &str,
    types: &str,
    body: String,
) -> Mock<'a> {
    let path = format!("{TIMESERIES_PATH}{symbol}");
    let types = types.to_string();
    server.mock(move |when, then| {
        when.method(GET)
            .path(path.clone())
            .query_param("type", types.clone())
            .query_param("crumb", CRUMB);
        then.status(200)
            .header("content-type", "application/json")
            .body(body.clone());
    })
}

pub fn mock_chart<'a>(server: &'a MockServer, symbol: &str, body: String) -> Mock<'a> {
    let path = format!("{CHART_PATH}{symbol}");
    server.mock(move |when, then| {
        when.method(GET)
            .path(path.clone())
            .query_param("interval", "1d")
            .query_param("events", "div");
        then.status(200)
            .header("content-type", "application/json")
            .body(body.clone());
    })
}

pub const INCOME_TYPES: &str = "annualDilutedEPS,annualNetIncome";
pub const BALANCE_TYPES: &str = "annualCurrentLiabilities,annualCashCashEquivalentsAndShortTermInvestments,annualTotalLiabilitiesNetMinorityInterest,annualTotalAssets";

/// Statement rows with one point per `(fiscal year, value)`, each ending on 30 September.
pub fn rows(items: &[(fairvalue_rs::LineItem, &[(i32, f64)])]) -> fairvalue_rs::StatementRows {
    let mut out = fairvalue_rs::StatementRows::default();
    for (item, points) in items {
        let mut points: Vec<fairvalue_rs::StatementPoint> = points
            .iter()
            .map(|(year, value)| fairvalue_rs::StatementPoint {
                period_end: NaiveDate::from_ymd_opt(*year, 9, 30).unwrap(),
                value: *value,
            })
            .collect();
        points.sort_by_key(|p| p.period_end);
        out.insert(*item, points);
    }
    out
}

/// Daily closes on the last trading day of each listed year plus dividends, on New York time.
pub fn history(
    closes: &[(i64, f64)],
    dividends: &[(i64, f64)],
) -> fairvalue_rs::PriceHistory {
    fairvalue_rs::PriceHistory {
        bars: closes
            .iter()
            .map(|(ts, close)| fairvalue_rs::Bar { ts: *ts, close: *close })
            .collect(),
        dividends: dividends
            .iter()
            .map(|(ts, amount)| fairvalue_rs::Dividend { ts: *ts, amount: *amount })
            .collect(),
        meta: Some(fairvalue_rs::HistoryMeta {
            timezone: Some("America/New_York".into()),
            gmtoffset: Some(-18000),
        }),
    }
}

/// A series anchored at `anchor` where every value is reported.
pub fn reported(anchor: i32, values: &[rust_decimal::Decimal]) -> fairvalue_rs::SymbolSeries {
    fairvalue_rs::SymbolSeries::new(anchor, values.iter().copied().map(Some))
}

/// `values` followed by placeholders up to `len` years.
pub fn padded(
    anchor: i32,
    values: &[rust_decimal::Decimal],
    len: usize,
) -> fairvalue_rs::SymbolSeries {
    let mut all: Vec<Option<rust_decimal::Decimal>> = values.iter().copied().map(Some).collect();
    all.resize(len.max(values.len()), None);
    fairvalue_rs::SymbolSeries::new(anchor, all)
}

/// Four years of EPS 3.00..1.50, no dividends, net income 100..70 M, price 150.
pub fn sample_series() -> fairvalue_rs::SeriesSet {
    use rust_decimal_macros::dec;
    fairvalue_rs::SeriesSet {
        eps: padded(2025, &[dec!(3.00), dec!(2.50), dec!(2.00), dec!(1.50)], 10),
        dividends: reported(2026, &[dec!(0); 10]),
        net_income: padded(
            2026,
            &[dec!(100000000), dec!(90000000), dec!(80000000), dec!(70000000)],
            10,
        ),
        price: padded(2026, &[dec!(150.00)], 5),
        ..Default::default()
    }
}

/// A market-data source serving canned records and recording every lookup.
#[derive(Default)]
pub struct StubSource {
    pub data: std::collections::HashMap<String, fairvalue_rs::SymbolData>,
    pub calls: std::sync::Mutex<Vec<String>>,
}

impl StubSource {
    pub fn with(records: impl IntoIterator<Item = fairvalue_rs::SymbolData>) -> Self {
        Self {
            data: records.into_iter().map(|d| (d.symbol.clone(), d)).collect(),
            calls: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl fairvalue_rs::MarketDataService for StubSource {
    fn fetch_symbol<'a>(
        &'a self,
        symbol: &'a str,
        _lookback: fairvalue_rs::Lookback,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = fairvalue_rs::SymbolData> + Send + 'a>>
    {
        use fairvalue_rs::Fetch;
        self.calls.lock().unwrap().push(symbol.to_string());
        let data = self
            .data
            .get(symbol)
            .cloned()
            .unwrap_or_else(|| fairvalue_rs::SymbolData {
                symbol: symbol.to_string(),
                income: Fetch::Empty,
                balance: Fetch::Empty,
                history: Fetch::Failed("unknown symbol".into()),
            });
        Box::pin(async move { data })
    }
}

/// Provider data for `symbol` that values like [`sample_series`] when the report
/// is anchored at 2026.
pub fn sample_symbol_data(symbol: &str) -> fairvalue_rs::SymbolData {
    use fairvalue_rs::{Fetch, LineItem};
    fairvalue_rs::SymbolData {
        symbol: symbol.to_string(),
        income: Fetch::Data(rows(&[
            (
                LineItem::DilutedEps,
                &[(2022, 1.50), (2023, 2.00), (2024, 2.50), (2025, 3.00)],
            ),
            (
                LineItem::NetIncome,
                &[(2023, 70e6), (2024, 80e6), (2025, 90e6), (2026, 100e6)],
            ),
        ])),
        balance: Fetch::Empty,
        history: Fetch::Data(history(
            &[
                (utc_ts(2025, 12, 31, 21, 0), 140.0),
                (utc_ts(2026, 6, 1, 20, 0), 145.0),
                (utc_ts(2026, 12, 30, 21, 0), 150.0),
            ],
            &[],
        )),
    }
}

pub const SAMPLE_CELLS: [&str; 12] = [
    "50.00", "0.00%", "13.33%", "0.00%", "28.57%", "11.81%", "50.00%", "22.50%", "100.00%",
    "100.00%", "0.00", "25.44%",
];
