//! Turns a report request into a formatted table and chart payload.

mod assemble;
mod model;

pub use assemble::{build_report, format_row};
pub use model::{
    CHART_YEARS, COLUMN_HEADERS, ChartData, ChartSeries, MAX_SYMBOLS, Report, ReportRequest,
    ReportRow, ReportTable, RequestError, SymbolEntry,
};
