//! Spreadsheet entry points.
//!
//! | Entry point | Returns |
//! |-------------|---------|
//! | [`Sheet::price`] | scalar price |
//! | [`Sheet::quote`] | 1–2 rows × 13 columns |
//! | [`Sheet::latest_bar`] | 1–2 rows × 6 columns |
//! | [`Sheet::history`] | N rows × 6 columns, newest first |
//! | [`Sheet::meta_field`] | single cell |
//!
//! Each call fetches exactly one chart from its [`ChartSource`] and then
//! projects it. Nothing is cached between calls.

mod bars;
mod meta_field;
mod price;
mod quote;

pub use bars::{project_history, project_latest_bar, BAR_HEADERS};
pub use meta_field::project_meta_field;
pub use price::project_price;
pub use quote::{project_quote, QUOTE_HEADERS};

use tracing::debug;

use crate::domain::{Cell, Table};
use crate::fetcher::{ChartRequest, ChartSource, YahooChartSource};
use crate::{ChartConfig, SheetError, ValidationError};

/// Arguments of [`Sheet::history`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryRequest {
    pub ticker: String,
    pub include_headers: bool,
    pub limit: Option<i64>,
    pub range: Option<String>,
    pub interval: Option<String>,
}

impl HistoryRequest {
    pub fn new(ticker: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            ..Self::default()
        }
    }

    pub fn with_headers(mut self, include_headers: bool) -> Self {
        self.include_headers = include_headers;
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_range(mut self, range: impl Into<String>) -> Self {
        self.range = Some(range.into());
        self
    }

    pub fn with_interval(mut self, interval: impl Into<String>) -> Self {
        self.interval = Some(interval.into());
        self
    }
}

/// The five spreadsheet functions over one chart source.
#[derive(Debug, Clone)]
pub struct Sheet<S> {
    source: S,
}

impl Sheet<YahooChartSource> {
    /// Live Yahoo Finance source with default settings.
    pub fn yahoo() -> Self {
        Self::with_source(YahooChartSource::default())
    }

    pub fn yahoo_with_config(config: ChartConfig) -> Self {
        Self::with_source(YahooChartSource::from_config(config))
    }
}

impl<S: ChartSource> Sheet<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    pub async fn price(&self, ticker: &str) -> Result<f64, SheetError> {
        let request = ChartRequest::latest(ticker)?;
        let ticker = request.ticker.clone();
        let result = self.source.chart(request).await?;
        project_price(&result, &ticker)
    }

    pub async fn quote(&self, ticker: &str, include_headers: bool) -> Result<Table, SheetError> {
        let request = ChartRequest::latest(ticker)?;
        let result = self.source.chart(request).await?;
        Ok(project_quote(&result, include_headers))
    }

    pub async fn latest_bar(
        &self,
        ticker: &str,
        include_headers: bool,
    ) -> Result<Table, SheetError> {
        let request = ChartRequest::latest(ticker)?;
        let ticker = request.ticker.clone();
        let result = self.source.chart(request).await?;
        project_latest_bar(&result, &ticker, include_headers)
    }

    pub async fn history(&self, req: HistoryRequest) -> Result<Table, SheetError> {
        let request = ChartRequest::new(&req.ticker, req.range.as_deref(), req.interval.as_deref())?;
        debug!(
            ticker = %request.ticker,
            range = %request.range,
            interval = %request.interval,
            limit = ?req.limit,
            "projecting history"
        );
        let ticker = request.ticker.clone();
        let result = self.source.chart(request).await?;
        project_history(&result, &ticker, req.include_headers, req.limit)
    }

    pub async fn meta_field(&self, ticker: &str, field: &str) -> Result<Cell, SheetError> {
        if field.trim().is_empty() {
            return Err(ValidationError::EmptyField.into());
        }
        let request = ChartRequest::latest(ticker)?;
        let ticker = request.ticker.clone();
        let result = self.source.chart(request).await?;
        project_meta_field(&result, &ticker, field)
    }
}
