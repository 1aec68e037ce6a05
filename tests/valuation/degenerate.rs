use crate::common::{padded, sample_series};
use fairvalue_rs::{CalcError, FundamentalsResult, ValuationParams, compute, fundamentals};
use rust_decimal_macros::dec;

const PARAMS: ValuationParams = ValuationParams {
    shares: 10,
    real_discount_rate: 0.05,
    average_inflation: 0.02,
    price_years_ago: 100.0,
};

#[test]
fn three_years_of_eps_is_not_enough() {
    let mut set = sample_series();
    set.eps = padded(2025, &[dec!(3.00), dec!(2.50), dec!(2.00)], 10);

    let err = compute(&set, &PARAMS).unwrap_err();
    assert!(matches!(
        err,
        CalcError::InsufficientHistory { eps: 3, net_income: 4, .. }
    ));
    assert!(fundamentals("TEST", &set, &PARAMS).is_zero());
}

#[test]
fn short_dividend_window_or_missing_price_is_not_enough() {
    let mut set = sample_series();
    set.dividends = padded(2026, &[dec!(0); 3], 3);
    assert!(matches!(
        compute(&set, &PARAMS),
        Err(CalcError::InsufficientHistory { dividends: 3, .. })
    ));

    let mut set = sample_series();
    set.price = fairvalue_rs::SymbolSeries::empty();
    assert!(matches!(
        compute(&set, &PARAMS),
        Err(CalcError::InsufficientHistory { prices: 0, .. })
    ));
}

#[test]
fn zero_growth_base_zeroes_everything() {
    let mut set = sample_series();
    set.net_income = fairvalue_rs::SymbolSeries::new(
        2026,
        [
            Some(dec!(100)),
            Some(dec!(90)),
            Some(dec!(80)),
            None,
            Some(dec!(60)),
        ],
    );

    assert_eq!(
        compute(&set, &PARAMS),
        Err(CalcError::DivisionByZero("net income growth"))
    );
    assert_eq!(fundamentals("TEST", &set, &PARAMS), FundamentalsResult::zero());
}

#[test]
fn negative_cagr_base_has_no_real_root() {
    let mut set = sample_series();
    set.net_income = padded(
        2026,
        &[dec!(100), dec!(90), dec!(80), dec!(70), dec!(60), dec!(-50)],
        10,
    );

    assert_eq!(compute(&set, &PARAMS), Err(CalcError::NonReal("CAGR 5y")));
    assert!(fundamentals("TEST", &set, &PARAMS).is_zero());
}

#[test]
fn minus_one_nominal_rate_yields_nan_not_zeros() {
    let mut set = sample_series();
    // retained earnings of opposite signs discounted by zero
    set.dividends = padded(2026, &[dec!(0), dec!(5)], 10);
    let params = ValuationParams {
        real_discount_rate: -1.02,
        ..PARAMS
    };

    let result = compute(&set, &params).unwrap();
    assert!(result.overpriced.is_nan());
    assert_eq!(result.pe, 50.0);
    assert_eq!(result.dividends_paid, 5.0);
    assert_eq!(fundamentals("TEST", &set, &params).pe, 50.0);
}

#[test]
fn net_income_window_counts_back_from_the_report_year() {
    let mut set = sample_series();
    // nothing reported yet for the report year itself
    set.net_income = fairvalue_rs::SymbolSeries::new(
        2026,
        [None, Some(dec!(90)), Some(dec!(80)), Some(dec!(70))],
    );

    let result = compute(&set, &PARAMS).unwrap();
    assert_eq!(result.ni_growth, 28.57);

    set.net_income =
        fairvalue_rs::SymbolSeries::new(2026, [None, Some(dec!(90)), Some(dec!(80))]);
    assert!(matches!(
        compute(&set, &PARAMS),
        Err(CalcError::InsufficientHistory { net_income: 3, .. })
    ));
}
