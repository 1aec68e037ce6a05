use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Most symbols a single report may ask for.
pub const MAX_SYMBOLS: usize = 6;

/// Number of year labels on the chart.
pub const CHART_YEARS: i32 = 6;

pub const COLUMN_HEADERS: [&str; 13] = [
    "Stock",
    "P/E",
    "RORE 5y",
    "RORE 3y",
    "CAGR 5y",
    "NI Growth 5y",
    "NI Avg",
    "EPS Growth 5y",
    "EPS Avg",
    "Curr Liab/Cash %",
    "Tot Liab/Assets %",
    "Div 5y",
    "Overpriced %",
];

/// One symbol to value, with its share price at the start of the horizon.
///
/// The price is kept as entered; an entry whose price does not parse is skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolEntry {
    pub symbol: String,
    pub price_years_ago: String,
}

/// A report request: shared valuation inputs and up to [`MAX_SYMBOLS`] entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRequest {
    pub shares: u64,
    pub real_discount_rate: f64,
    pub average_inflation: f64,
    #[serde(default)]
    pub entries: Vec<SymbolEntry>,
}

impl ReportRequest {
    /// Checks the shared inputs and the number of entries.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::TooManySymbols`] for more than [`MAX_SYMBOLS`]
    /// entries and [`RequestError::InvalidField`] for a non-finite rate.
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.entries.len() > MAX_SYMBOLS {
            return Err(RequestError::TooManySymbols {
                count: self.entries.len(),
                max: MAX_SYMBOLS,
            });
        }
        for (field, value) in [
            ("real_discount_rate", self.real_discount_rate),
            ("average_inflation", self.average_inflation),
        ] {
            if !value.is_finite() {
                return Err(RequestError::InvalidField {
                    field,
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// A rejected report request.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("too many symbols: {count} given, at most {max} allowed")]
    TooManySymbols { count: usize, max: usize },

    #[error("invalid value for {field}: {value:?}")]
    InvalidField { field: &'static str, value: String },
}

/// A formatted table row: the symbol followed by twelve metric cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub symbol: String,
    pub cells: Vec<String>,
}

impl ReportRow {
    /// Whether any metric cell is a formatted `NaN` or infinity.
    pub fn is_degenerate(&self) -> bool {
        self.cells.iter().any(|cell| {
            let cell = cell.to_ascii_lowercase();
            cell.starts_with("nan") || cell.contains("inf")
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTable {
    pub headers: Vec<String>,
    pub rows: Vec<ReportRow>,
}

impl Default for ReportTable {
    fn default() -> Self {
        Self {
            headers: COLUMN_HEADERS.iter().map(ToString::to_string).collect(),
            rows: Vec::new(),
        }
    }
}

/// A flat series of one symbol's overpriced percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub symbol: String,
    /// One value per label.
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    /// Years, most recent first.
    pub labels: Vec<i32>,
    pub series: Vec<ChartSeries>,
}

impl ChartData {
    /// The chart as a data table: a header row `["Year", sym...]` followed by one
    /// `[year, value...]` row per label.
    pub fn to_rows(&self) -> Vec<Value> {
        let mut header = vec![json!("Year")];
        header.extend(self.series.iter().map(|s| json!(s.symbol)));

        let mut rows = vec![Value::Array(header)];
        for (i, year) in self.labels.iter().enumerate() {
            let mut row = vec![json!(year)];
            row.extend(
                self.series
                    .iter()
                    .map(|s| s.values.get(i).map_or(Value::Null, |v| json!(v))),
            );
            rows.push(Value::Array(row));
        }
        rows
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub table: ReportTable,
    pub chart: ChartData,
}
