use super::model::CalcError;

pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// `(new - old) / old` in percent.
pub(crate) fn growth(what: &'static str, new: f64, old: f64) -> Result<f64, CalcError> {
    if old == 0.0 {
        return Err(CalcError::DivisionByZero(what));
    }
    Ok((new - old) / old * 100.0)
}

/// Compound annual growth from `start` to `end` over `years`, in percent.
pub(crate) fn cagr(what: &'static str, end: f64, start: f64, years: f64) -> Result<f64, CalcError> {
    if start == 0.0 {
        return Err(CalcError::DivisionByZero(what));
    }
    let ratio = end / start;
    if ratio < 0.0 {
        return Err(CalcError::NonReal(what));
    }
    Ok((ratio.powf(1.0 / years) - 1.0) * 100.0)
}

/// Net present value of `flows`, the first discounted by `(1 + rate)^0`.
pub(crate) fn npv(rate: f64, flows: &[f64]) -> f64 {
    flows
        .iter()
        .zip(0..)
        .map(|(v, t)| v / (1.0 + rate).powi(t))
        .sum()
}

/// `amount` compounded for `years` at `rate`.
pub(crate) fn future_value(amount: f64, rate: f64, years: i32) -> f64 {
    amount * (1.0 + rate).powi(years)
}

pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// `num / den` in percent, 0 when `den` is 0.
pub(crate) fn percent_or_zero(num: f64, den: f64) -> f64 {
    if den == 0.0 { 0.0 } else { num / den * 100.0 }
}
