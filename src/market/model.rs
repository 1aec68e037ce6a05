use serde::Serialize;

use crate::history::{Dividend, PriceHistory};
use crate::statements::{LineItem, StatementPoint, StatementRows};

/// The outcome of fetching one series from the provider.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Fetch<T> {
    /// The provider returned at least one value.
    Data(T),
    /// The request succeeded but the series is absent.
    Empty,
    /// The request failed; carries the reason.
    Failed(String),
}

impl<T> Fetch<T> {
    /// Returns the data, if any.
    pub fn data(&self) -> Option<&T> {
        match self {
            Fetch::Data(v) => Some(v),
            Fetch::Empty | Fetch::Failed(_) => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Fetch::Failed(_))
    }

    pub fn as_ref(&self) -> Fetch<&T> {
        match self {
            Fetch::Data(v) => Fetch::Data(v),
            Fetch::Empty => Fetch::Empty,
            Fetch::Failed(r) => Fetch::Failed(r.clone()),
        }
    }

    /// Maps the data, turning `None` into [`Fetch::Empty`].
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Option<U>) -> Fetch<U> {
        match self {
            Fetch::Data(v) => f(v).map_or(Fetch::Empty, Fetch::Data),
            Fetch::Empty => Fetch::Empty,
            Fetch::Failed(r) => Fetch::Failed(r),
        }
    }
}

/// Everything the provider returned for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymbolData {
    pub symbol: String,
    /// Diluted EPS and net income rows.
    pub income: Fetch<StatementRows>,
    /// Liquidity and leverage rows.
    pub balance: Fetch<StatementRows>,
    /// Daily closes and dividends.
    pub history: Fetch<PriceHistory>,
}

impl SymbolData {
    /// The reported points of `item`, oldest first.
    pub fn row(&self, item: LineItem) -> Fetch<&[StatementPoint]> {
        let rows = if item.is_income() {
            &self.income
        } else {
            &self.balance
        };
        rows.as_ref().and_then(|r| r.row(item).filter(|p| !p.is_empty()))
    }

    /// Dividend events, oldest first.
    pub fn dividends(&self) -> Fetch<&[Dividend]> {
        self.history
            .as_ref()
            .and_then(|h| Some(h.dividends.as_slice()).filter(|d| !d.is_empty()))
    }
}
