use crate::chart::{BarSeries, ChartResult};
use crate::domain::Table;
use crate::{SheetError, Ticker};

use super::quote::with_headers;

pub const BAR_HEADERS: [&str; 6] = ["Timestamp", "Open", "High", "Low", "Close", "Volume"];

/// Most recent bar as a single row.
pub fn project_latest_bar(
    result: &ChartResult,
    ticker: &Ticker,
    include_headers: bool,
) -> Result<Table, SheetError> {
    let series = require_series(result, ticker)?;
    let row = series.row(series.len() - 1);
    Ok(with_headers(&BAR_HEADERS, include_headers, vec![row]))
}

/// Bars newest first, capped at `limit` when it is positive.
pub fn project_history(
    result: &ChartResult,
    ticker: &Ticker,
    include_headers: bool,
    limit: Option<i64>,
) -> Result<Table, SheetError> {
    let series = require_series(result, ticker)?;
    let len = series.len();
    let max_rows = match limit {
        Some(limit) if limit > 0 => usize::try_from(limit).map_or(len, |limit| limit.min(len)),
        _ => len,
    };

    let rows = (len - max_rows..len).rev().map(|index| series.row(index)).collect();
    Ok(with_headers(&BAR_HEADERS, include_headers, rows))
}

fn require_series<'a>(result: &'a ChartResult, ticker: &Ticker) -> Result<BarSeries<'a>, SheetError> {
    result.bar_series().ok_or_else(|| {
        SheetError::not_found(format!("No price data available for ticker {ticker}"))
    })
}
