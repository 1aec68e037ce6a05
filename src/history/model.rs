use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;

/// A daily closing price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bar {
    /// Seconds since Unix epoch (UTC) as returned by the endpoint.
    pub ts: i64,
    pub close: f64,
}

/// A cash dividend paid on `ts`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dividend {
    pub ts: i64,
    pub amount: f64,
}

/// Where the exchange keeps its clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryMeta {
    /// IANA name of the exchange timezone (e.g. `America/New_York`).
    pub timezone: Option<String>,
    /// Offset from UTC in seconds, used when the timezone name is unknown.
    pub gmtoffset: Option<i64>,
}

impl HistoryMeta {
    /// Converts a Unix timestamp into the exchange's wall-clock time with the offset removed.
    pub fn local_naive(&self, ts: i64) -> Option<NaiveDateTime> {
        let utc = DateTime::<Utc>::from_timestamp(ts, 0)?;
        if let Some(tz) = self.timezone.as_deref().and_then(|n| n.parse::<Tz>().ok()) {
            return Some(utc.with_timezone(&tz).naive_local());
        }
        if let Some(offset) = self
            .gmtoffset
            .and_then(|s| i32::try_from(s).ok())
            .and_then(FixedOffset::east_opt)
        {
            return Some(utc.with_timezone(&offset).naive_local());
        }
        Some(utc.naive_utc())
    }
}

/// Daily closes plus the dividends paid over the same period.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PriceHistory {
    /// Bars sorted by timestamp.
    pub bars: Vec<Bar>,
    /// Dividends sorted by timestamp.
    pub dividends: Vec<Dividend>,
    pub meta: Option<HistoryMeta>,
}

impl PriceHistory {
    /// Exchange-local, offset-free time of `ts`; UTC when the exchange clock is unknown.
    pub fn local_naive(&self, ts: i64) -> Option<NaiveDateTime> {
        match &self.meta {
            Some(meta) => meta.local_naive(ts),
            None => DateTime::<Utc>::from_timestamp(ts, 0).map(|dt| dt.naive_utc()),
        }
    }
}
