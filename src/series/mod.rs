//! Projection of provider series onto descending, contiguous year windows.
//!
//! Statement metrics other than EPS and the dividend and price series are anchored
//! at [`Lookback::as_of_year`]. EPS is anchored at the most recent fiscal year the
//! provider reported, so index 0 always holds the latest reported EPS.

mod model;
mod normalize;

pub use model::{Lookback, SeriesSet, SymbolSeries, YearlyMetric};
pub use normalize::normalize;
