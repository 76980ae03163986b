use crate::chart::ChartResult;
use crate::{SheetError, Ticker};

/// `regularMarketPrice`, provided it is present and non-zero.
pub fn project_price(result: &ChartResult, ticker: &Ticker) -> Result<f64, SheetError> {
    result
        .meta
        .regular_market_price
        .filter(|price| *price != 0.0 && !price.is_nan())
        .ok_or_else(|| SheetError::not_found(format!("Price not found for ticker {ticker}")))
}
