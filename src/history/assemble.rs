use std::collections::BTreeMap;

use crate::history::model::{Bar, Dividend};
use crate::history::wire::DividendNode;

/// Pairs timestamps with closes, dropping rows whose close is missing or not finite.
pub(super) fn assemble_bars(timestamps: &[i64], closes: &[Option<f64>]) -> Vec<Bar> {
    let mut bars: Vec<Bar> = timestamps
        .iter()
        .zip(closes)
        .filter_map(|(&ts, close)| {
            let close = close.filter(|c| c.is_finite())?;
            Some(Bar { ts, close })
        })
        .collect();
    bars.sort_by_key(|b| b.ts);
    bars
}

/// Dividends sorted by timestamp. The map key is the event time; `date` is the fallback.
pub(super) fn extract_dividends(events: &BTreeMap<String, DividendNode>) -> Vec<Dividend> {
    let mut out: Vec<Dividend> = events
        .iter()
        .filter_map(|(key, node)| {
            let ts = key.parse::<i64>().ok().or(node.date)?;
            let amount = node.amount.filter(|a| a.is_finite())?;
            Some(Dividend { ts, amount })
        })
        .collect();
    out.sort_by_key(|d| d.ts);
    out
}
