use std::collections::HashMap;
use std::str::FromStr;

use crate::report::{MAX_SYMBOLS, ReportRequest, RequestError, SymbolEntry};

pub const FIELD_SHARES: &str = "Number_Shares";
pub const FIELD_REAL_DISCOUNT_RATE: &str = "RealDiscountRate";
pub const FIELD_AVERAGE_INFLATION: &str = "AverageInflation";

pub fn symbol_field(slot: usize) -> String {
    format!("Stock_symbol{slot}")
}

pub fn price_field(slot: usize) -> String {
    format!("price_5_years_ago{slot}")
}

/// Reads the submitted form into a [`ReportRequest`].
///
/// Slots are numbered from 1. A slot with a blank symbol is left out; its price
/// is not looked at.
///
/// # Errors
///
/// Returns [`RequestError::InvalidField`] if a shared field is missing or does not parse.
pub fn parse_form(form: &HashMap<String, String>) -> Result<ReportRequest, RequestError> {
    let shares = shared_field(form, FIELD_SHARES)?;
    let real_discount_rate = shared_field(form, FIELD_REAL_DISCOUNT_RATE)?;
    let average_inflation = shared_field(form, FIELD_AVERAGE_INFLATION)?;

    let entries = (1..=MAX_SYMBOLS)
        .filter_map(|slot| {
            let symbol = form.get(&symbol_field(slot))?;
            if symbol.trim().is_empty() {
                return None;
            }
            Some(SymbolEntry {
                symbol: symbol.clone(),
                price_years_ago: form.get(&price_field(slot)).cloned().unwrap_or_default(),
            })
        })
        .collect();

    Ok(ReportRequest {
        shares,
        real_discount_rate,
        average_inflation,
        entries,
    })
}

fn shared_field<T: FromStr>(
    form: &HashMap<String, String>,
    field: &'static str,
) -> Result<T, RequestError> {
    let raw = form.get(field).map(String::as_str).unwrap_or_default();
    raw.trim().parse().map_err(|_| RequestError::InvalidField {
        field,
        value: raw.to_string(),
    })
}
