use chrono::{Datelike, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// One fact for one symbol in one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearlyMetric {
    pub year: i32,
    pub value: Decimal,
    /// `false` marks a placeholder filled in for a year the provider did not report.
    pub reported: bool,
}

impl YearlyMetric {
    pub(crate) const fn placeholder(year: i32) -> Self {
        Self {
            year,
            value: Decimal::ZERO,
            reported: false,
        }
    }
}

/// A contiguous run of years for one metric, most recent year first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SymbolSeries {
    points: Vec<YearlyMetric>,
}

impl SymbolSeries {
    /// Builds the series `anchor, anchor - 1, ...` of length `years`, taking values
    /// from `lookup` and falling back to placeholders.
    pub(crate) fn window(
        anchor: i32,
        years: u16,
        mut lookup: impl FnMut(i32) -> Option<YearlyMetric>,
    ) -> Self {
        let points = (0..i32::from(years))
            .map(|k| anchor - k)
            .map(|year| lookup(year).unwrap_or(YearlyMetric::placeholder(year)))
            .collect();
        Self { points }
    }

    /// Builds a series starting at `anchor` and counting down one year per value.
    /// `None` marks a year without a reported value.
    pub fn new(anchor: i32, values: impl IntoIterator<Item = Option<Decimal>>) -> Self {
        let points = values
            .into_iter()
            .zip(0..)
            .map(|(value, k)| {
                let year = anchor - k;
                value.map_or(YearlyMetric::placeholder(year), |value| YearlyMetric {
                    year,
                    value,
                    reported: true,
                })
            })
            .collect();
        Self { points }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[YearlyMetric] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&YearlyMetric> {
        self.points.get(i)
    }

    /// The value at index `i` as `f64`; 0 past the end of the series.
    pub fn value(&self, i: usize) -> f64 {
        self.points
            .get(i)
            .and_then(|p| p.value.to_f64())
            .unwrap_or(0.0)
    }

    /// Whether index `i` holds a reported value.
    pub fn is_reported(&self, i: usize) -> bool {
        self.points.get(i).is_some_and(|p| p.reported)
    }

    pub fn reported_count(&self) -> usize {
        self.points.iter().filter(|p| p.reported).count()
    }

    /// Years from index 0 down to the oldest reported one, inclusive; 0 when
    /// nothing was reported.
    pub fn span(&self) -> usize {
        self.points
            .iter()
            .rposition(|p| p.reported)
            .map_or(0, |i| i + 1)
    }

    /// The most recent reported point.
    pub fn latest_reported(&self) -> Option<&YearlyMetric> {
        self.points.iter().find(|p| p.reported)
    }

    /// Sum of the first `n` values.
    pub fn sum_first(&self, n: usize) -> f64 {
        (0..n).map(|i| self.value(i)).sum()
    }
}

/// The normalized series of one symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeriesSet {
    pub eps: SymbolSeries,
    pub dividends: SymbolSeries,
    pub net_income: SymbolSeries,
    pub current_liabilities: SymbolSeries,
    pub cash: SymbolSeries,
    pub total_liabilities: SymbolSeries,
    pub total_assets: SymbolSeries,
    /// Year-end closing price.
    pub price: SymbolSeries,
}

/// The year windows a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lookback {
    /// The year index 0 of the calendar-anchored series refers to.
    pub as_of_year: i32,
    /// Window length of statement metrics and dividends.
    pub statement_years: u16,
    /// Window length of the year-end price series.
    pub price_years: u16,
}

impl Lookback {
    pub const STATEMENT_YEARS: u16 = 10;
    pub const PRICE_YEARS: u16 = 5;

    /// The default windows anchored at `year`.
    pub const fn for_year(year: i32) -> Self {
        Self {
            as_of_year: year,
            statement_years: Self::STATEMENT_YEARS,
            price_years: Self::PRICE_YEARS,
        }
    }

    /// The default windows anchored at the current calendar year.
    pub fn current() -> Self {
        Self::for_year(Utc::now().year())
    }

    /// First year requested from the provider. One year more than the window so a
    /// fiscal-year-anchored series still fills up.
    pub fn start_year(&self) -> i32 {
        self.as_of_year - i32::from(self.statement_years)
    }

    /// The absolute period covering every window, as Unix timestamps.
    ///
    /// Ends at the start of the year after `as_of_year`, or now if that is earlier.
    pub fn period(&self) -> (chrono::DateTime<Utc>, chrono::DateTime<Utc>) {
        let jan1 = |year: i32| {
            NaiveDate::from_ymd_opt(year, 1, 1)
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|dt| Utc.from_utc_datetime(&dt))
        };
        let now = Utc::now();
        let start = jan1(self.start_year()).unwrap_or_default();
        let end = jan1(self.as_of_year + 1).map_or(now, |e| e.min(now));
        (start, end)
    }
}

impl Default for Lookback {
    fn default() -> Self {
        Self::current()
    }
}
