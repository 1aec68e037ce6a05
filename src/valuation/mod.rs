//! Valuation ratios and the discounted-retained-earnings fair value.

mod calc;
mod finance;
mod model;

pub use calc::{MIN_HISTORY_YEARS, compute, fundamentals};
pub use model::{CalcError, FundamentalsResult, ValuationParams};
