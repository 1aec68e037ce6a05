//! Annual financial-statement rows from the fundamentals-timeseries endpoint.

mod api;
mod model;
mod wire;

pub use model::{BALANCE_ITEMS, INCOME_ITEMS, LineItem, StatementPoint, StatementRows};

use crate::{YfClient, YfError};

/// Fetches the diluted EPS and net income rows reported since 1 January of `since_year`.
///
/// # Errors
///
/// Returns an error if the credential handshake or the request fails, or the
/// response cannot be parsed.
#[tracing::instrument(skip(client), err)]
pub async fn income_statement(
    client: &YfClient,
    symbol: &str,
    since_year: i32,
) -> Result<StatementRows, YfError> {
    api::fetch_rows(client, symbol, &INCOME_ITEMS, since_year, "income").await
}

/// Fetches the liquidity and leverage rows of the balance sheet reported since
/// 1 January of `since_year`.
///
/// # Errors
///
/// Returns an error if the credential handshake or the request fails, or the
/// response cannot be parsed.
#[tracing::instrument(skip(client), err)]
pub async fn balance_sheet(
    client: &YfClient,
    symbol: &str,
    since_year: i32,
) -> Result<StatementRows, YfError> {
    api::fetch_rows(client, symbol, &BALANCE_ITEMS, since_year, "balance_sheet").await
}
