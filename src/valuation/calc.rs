use rust_decimal::prelude::ToPrimitive;

use super::finance::{cagr, future_value, growth, mean, npv, percent_or_zero, round2};
use super::model::{CalcError, FundamentalsResult, ValuationParams};
use crate::series::{SeriesSet, SymbolSeries};

/// Minimum reported EPS years, and minimum net income and dividend windows.
pub const MIN_HISTORY_YEARS: usize = 4;

/// Years the retained earnings and the initial investment are compounded over.
const HORIZON_YEARS: i32 = 5;

/// Computes the ratios of one symbol.
///
/// Index 0 of every series is its most recent year.
///
/// # Errors
///
/// Returns [`CalcError::InsufficientHistory`] when fewer than
/// [`MIN_HISTORY_YEARS`] EPS years are reported, the net income window down to its
/// oldest reported year or the dividend window is shorter than that, or there is
/// no price year. A zero denominator in a growth formula or a negative CAGR base
/// is also an error.
///
/// Arithmetic that overflows or cancels out is not an error: the affected
/// fields come back as `NaN` or infinite.
pub fn compute(
    series: &SeriesSet,
    params: &ValuationParams,
) -> Result<FundamentalsResult, CalcError> {
    let eps = &series.eps;
    let ni = &series.net_income;
    let div = &series.dividends;
    let price = &series.price;

    if eps.reported_count() < MIN_HISTORY_YEARS
        || ni.span() < MIN_HISTORY_YEARS
        || div.len() < MIN_HISTORY_YEARS
        || price.is_empty()
    {
        return Err(CalcError::InsufficientHistory {
            eps: eps.reported_count(),
            net_income: ni.span(),
            dividends: div.len(),
            prices: price.len(),
        });
    }

    let rore_5y = if (0..5).all(|i| eps.is_reported(i)) {
        percent_or_zero(
            eps.value(0) - eps.value(4),
            eps.sum_first(5) - div.sum_first(5),
        )
    } else {
        0.0
    };
    let rore_3y = percent_or_zero(
        eps.value(0) - eps.value(2),
        eps.sum_first(3) - div.sum_first(3),
    );

    let cagr_5y = if ni.is_reported(5) && ni.value(5) != 0.0 {
        cagr("CAGR 5y", ni.value(1), ni.value(5), 5.0)?
    } else {
        0.0
    };

    let ni_growth = growth("net income growth", ni.value(1), ni.value(3))?;
    let ni_avg_growth = mean(&[
        growth("net income average growth", ni.value(0), ni.value(1))?,
        growth("net income average growth", ni.value(1), ni.value(2))?,
    ]);
    let eps_growth = growth("EPS growth", eps.value(0), eps.value(2))?;
    let eps_avg_growth = mean(&[
        growth("EPS average growth", eps.value(0), eps.value(1))?,
        growth("EPS average growth", eps.value(1), eps.value(2))?,
    ]);

    let current_liabilities_to_cash = percent_or_zero(
        latest(&series.current_liabilities),
        latest(&series.cash),
    );
    let total_liabilities_to_assets = percent_or_zero(
        latest(&series.total_liabilities),
        latest(&series.total_assets),
    );

    let price_now = price.value(0);
    let eps_now = eps.value(0);
    let pe = if eps_now == 0.0 { 0.0 } else { price_now / eps_now };

    let estimated = estimated_price(eps, div, params);
    let overpriced = if estimated == 0.0 {
        0.0
    } else {
        (price_now / estimated - 1.0) * 100.0
    };

    Ok(FundamentalsResult {
        pe: round2(pe),
        rore_5y: round2(rore_5y),
        rore_3y: round2(rore_3y),
        cagr_5y: round2(cagr_5y),
        ni_growth: round2(ni_growth),
        ni_avg_growth: round2(ni_avg_growth),
        eps_growth: round2(eps_growth),
        eps_avg_growth: round2(eps_avg_growth),
        current_liabilities_to_cash: round2(current_liabilities_to_cash),
        total_liabilities_to_assets: round2(total_liabilities_to_assets),
        dividends_paid: round2(div.sum_first(3)),
        overpriced: round2(overpriced),
    })
}

/// Like [`compute`], but logs the failure and reports zeros instead.
pub fn fundamentals(
    symbol: &str,
    series: &SeriesSet,
    params: &ValuationParams,
) -> FundamentalsResult {
    match compute(series, params) {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!(symbol, error = %e, "valuation failed, reporting zeros");
            FundamentalsResult::zero()
        }
    }
}

/// Present value of the retained earnings of the last five reported years plus
/// the initial investment, both compounded over the horizon, per share.
fn estimated_price(eps: &SymbolSeries, div: &SymbolSeries, params: &ValuationParams) -> f64 {
    if params.shares == 0 {
        return 0.0;
    }
    let shares = params.shares as f64;

    let retained: Vec<f64> = (0..5)
        .filter(|&i| eps.is_reported(i))
        .map(|i| shares * (eps.value(i) - div.value(i)))
        .collect();

    let nominal = params.real_discount_rate + params.average_inflation;
    let present = npv(nominal, &retained);

    let total = future_value(present, params.average_inflation, HORIZON_YEARS)
        + future_value(
            shares * params.price_years_ago,
            params.average_inflation,
            HORIZON_YEARS,
        );
    total / shares
}

/// The most recent reported value; 1 for a missing row, 0 when nothing was reported.
fn latest(series: &SymbolSeries) -> f64 {
    if series.is_empty() {
        return 1.0;
    }
    series
        .latest_reported()
        .and_then(|p| p.value.to_f64())
        .unwrap_or(0.0)
}
