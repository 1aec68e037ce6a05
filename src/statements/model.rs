use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// The annual statement rows this crate requests from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum LineItem {
    /// Income statement: diluted earnings per share.
    DilutedEps,
    /// Income statement: net income.
    NetIncome,
    /// Balance sheet: current liabilities.
    CurrentLiabilities,
    /// Balance sheet: cash, cash equivalents and short-term investments.
    CashAndShortTermInvestments,
    /// Balance sheet: total liabilities net of minority interest.
    TotalLiabilities,
    /// Balance sheet: total assets.
    TotalAssets,
}

/// Rows fetched from the income statement.
pub const INCOME_ITEMS: [LineItem; 2] = [LineItem::DilutedEps, LineItem::NetIncome];

/// Rows fetched from the balance sheet.
pub const BALANCE_ITEMS: [LineItem; 4] = [
    LineItem::CurrentLiabilities,
    LineItem::CashAndShortTermInvestments,
    LineItem::TotalLiabilities,
    LineItem::TotalAssets,
];

impl LineItem {
    /// The row label as it appears in a rendered financial statement.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::DilutedEps => "Diluted EPS",
            Self::NetIncome => "Net Income",
            Self::CurrentLiabilities => "Current Liabilities",
            Self::CashAndShortTermInvestments => "Cash Cash Equivalents And Short Term Investments",
            Self::TotalLiabilities => "Total Liabilities Net Minority Interest",
            Self::TotalAssets => "Total Assets",
        }
    }

    /// The fundamentals-timeseries key, without the `annual`/`quarterly` prefix.
    pub(crate) const fn timeseries_key(self) -> &'static str {
        match self {
            Self::DilutedEps => "DilutedEPS",
            Self::NetIncome => "NetIncome",
            Self::CurrentLiabilities => "CurrentLiabilities",
            Self::CashAndShortTermInvestments => "CashCashEquivalentsAndShortTermInvestments",
            Self::TotalLiabilities => "TotalLiabilitiesNetMinorityInterest",
            Self::TotalAssets => "TotalAssets",
        }
    }

    /// Whether the row lives on the income statement rather than the balance sheet.
    pub const fn is_income(self) -> bool {
        matches!(self, Self::DilutedEps | Self::NetIncome)
    }

    pub(crate) fn from_timeseries_key(key: &str) -> Option<Self> {
        INCOME_ITEMS
            .iter()
            .chain(BALANCE_ITEMS.iter())
            .copied()
            .find(|item| item.timeseries_key() == key)
    }
}

/// One reported value of a statement row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatementPoint {
    /// End of the fiscal period the value belongs to.
    pub period_end: NaiveDate,
    pub value: f64,
}

/// Statement rows keyed by line item. A missing key means the provider has no such row.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StatementRows {
    rows: BTreeMap<LineItem, Vec<StatementPoint>>,
}

impl StatementRows {
    pub fn insert(&mut self, item: LineItem, points: Vec<StatementPoint>) {
        self.rows.insert(item, points);
    }

    /// The reported points of `item`, oldest first, or `None` if the row is absent.
    pub fn row(&self, item: LineItem) -> Option<&[StatementPoint]> {
        self.rows.get(&item).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.values().all(Vec::is_empty)
    }
}
