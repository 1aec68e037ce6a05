use serde::{Deserialize, Serialize};

/// Inputs shared by every symbol of a report, plus the symbol's own past price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuationParams {
    /// Number of shares the investment is sized for.
    pub shares: u64,
    /// Real discount rate as a fraction (0.05 = 5%).
    pub real_discount_rate: f64,
    /// Average inflation as a fraction.
    pub average_inflation: f64,
    /// Share price at the start of the five-year horizon.
    pub price_years_ago: f64,
}

/// The twelve ratios computed for one symbol, each rounded to two decimals.
///
/// Percentages are stored as percent values (13.33 means 13.33%).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FundamentalsResult {
    pub pe: f64,
    pub rore_5y: f64,
    pub rore_3y: f64,
    pub cagr_5y: f64,
    pub ni_growth: f64,
    pub ni_avg_growth: f64,
    pub eps_growth: f64,
    pub eps_avg_growth: f64,
    pub current_liabilities_to_cash: f64,
    pub total_liabilities_to_assets: f64,
    pub dividends_paid: f64,
    pub overpriced: f64,
}

impl FundamentalsResult {
    /// The all-zero result reported when a symbol cannot be valued.
    pub const fn zero() -> Self {
        Self {
            pe: 0.0,
            rore_5y: 0.0,
            rore_3y: 0.0,
            cagr_5y: 0.0,
            ni_growth: 0.0,
            ni_avg_growth: 0.0,
            eps_growth: 0.0,
            eps_avg_growth: 0.0,
            current_liabilities_to_cash: 0.0,
            total_liabilities_to_assets: 0.0,
            dividends_paid: 0.0,
            overpriced: 0.0,
        }
    }

    /// The fields in table column order.
    pub const fn values(&self) -> [f64; 12] {
        [
            self.pe,
            self.rore_5y,
            self.rore_3y,
            self.cagr_5y,
            self.ni_growth,
            self.ni_avg_growth,
            self.eps_growth,
            self.eps_avg_growth,
            self.current_liabilities_to_cash,
            self.total_liabilities_to_assets,
            self.dividends_paid,
            self.overpriced,
        ]
    }

    pub fn is_zero(&self) -> bool {
        self.values().iter().all(|v| *v == 0.0)
    }
}

/// Why a symbol could not be valued.
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum CalcError {
    /// Too few years of history to compute the growth ratios.
    #[error(
        "insufficient history: {eps} EPS years, {net_income} net income years, {dividends} dividend years, {prices} price years"
    )]
    InsufficientHistory {
        eps: usize,
        net_income: usize,
        dividends: usize,
        prices: usize,
    },

    #[error("division by zero in {0}")]
    DivisionByZero(&'static str),

    /// A fractional power of a negative base.
    #[error("no real result for {0}")]
    NonReal(&'static str),
}
