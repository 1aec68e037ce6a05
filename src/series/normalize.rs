use chrono::Datelike;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use super::model::{Lookback, SeriesSet, SymbolSeries, YearlyMetric};
use crate::history::PriceHistory;
use crate::market::{Fetch, SymbolData};
use crate::statements::{LineItem, StatementPoint};

/// Projects everything fetched for one symbol onto the year windows of `lookback`.
pub fn normalize(data: &SymbolData, lookback: &Lookback) -> SeriesSet {
    let years = lookback.statement_years;
    let anchor = lookback.as_of_year;

    let eps = match data.row(LineItem::DilutedEps) {
        Fetch::Data(points) => {
            let by_year = by_year(points, 2);
            match by_year.keys().next_back().copied() {
                Some(latest) => SymbolSeries::window(latest, years, |y| by_year.get(&y).copied()),
                None => SymbolSeries::empty(),
            }
        }
        Fetch::Empty | Fetch::Failed(_) => SymbolSeries::empty(),
    };

    let statement = |item: LineItem| match data.row(item) {
        Fetch::Data(points) => {
            let by_year = by_year(points, 0);
            SymbolSeries::window(anchor, years, |y| by_year.get(&y).copied())
        }
        Fetch::Empty | Fetch::Failed(_) => SymbolSeries::empty(),
    };

    let history = data.history.data();

    SeriesSet {
        eps,
        dividends: dividend_series(history, anchor, years),
        net_income: statement(LineItem::NetIncome),
        current_liabilities: statement(LineItem::CurrentLiabilities),
        cash: statement(LineItem::CashAndShortTermInvestments),
        total_liabilities: statement(LineItem::TotalLiabilities),
        total_assets: statement(LineItem::TotalAssets),
        price: price_series(history, anchor, lookback.price_years),
    }
}

/// Keys reported points by fiscal year. Later points win when a year repeats.
fn by_year(points: &[StatementPoint], dp: u32) -> BTreeMap<i32, YearlyMetric> {
    points
        .iter()
        .filter_map(|p| {
            let year = p.period_end.year();
            let value = to_decimal(p.value, dp)?;
            Some((
                year,
                YearlyMetric {
                    year,
                    value,
                    reported: true,
                },
            ))
        })
        .collect()
}

/// Dividends summed per exchange-local year. Without any dividend history the
/// window is all zeros.
fn dividend_series(history: Option<&PriceHistory>, anchor: i32, years: u16) -> SymbolSeries {
    let mut totals: BTreeMap<i32, f64> = BTreeMap::new();
    if let Some(h) = history {
        for d in &h.dividends {
            if let Some(local) = h.local_naive(d.ts) {
                *totals.entry(local.year()).or_default() += d.amount;
            }
        }
    }

    SymbolSeries::window(anchor, years, |year| {
        let total = totals.get(&year)?;
        Some(YearlyMetric {
            year,
            value: to_decimal(*total, 2)?,
            reported: true,
        })
    })
}

/// The last December close of each year; bars are sorted so the last one seen wins.
/// A year that has not traded in December yet stays a placeholder.
fn price_series(history: Option<&PriceHistory>, anchor: i32, years: u16) -> SymbolSeries {
    let mut closes: BTreeMap<i32, f64> = BTreeMap::new();
    if let Some(h) = history {
        for bar in &h.bars {
            if let Some(local) = h.local_naive(bar.ts).filter(|t| t.month() == 12) {
                closes.insert(local.year(), bar.close);
            }
        }
    }

    SymbolSeries::window(anchor, years, |year| {
        let close = closes.get(&year)?;
        Some(YearlyMetric {
            year,
            value: to_decimal(*close, 2)?,
            reported: true,
        })
    })
}

fn to_decimal(v: f64, dp: u32) -> Option<Decimal> {
    Decimal::try_from(v).ok().map(|d| d.round_dp(dp))
}
