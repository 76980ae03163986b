//! # Tickersheet Core
//!
//! Fetches a ticker's chart from Yahoo Finance and reshapes it into
//! spreadsheet rows.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`chart`] | Chart payload, typed metadata and bar series |
//! | [`config`] | Endpoint, timeout and user-agent settings |
//! | [`domain`] | Ticker, timestamp and cell types |
//! | [`error`] | Validation and sheet errors |
//! | [`fetcher`] | `ChartSource` trait and the Yahoo implementation |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`meta_fields`] | Metadata alias table |
//! | [`params`] | Range and interval allow-lists |
//! | [`projectors`] | Price, quote, latest bar, history and field lookup |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tickersheet_core::{HistoryRequest, Sheet};
//!
//! #[tokio::main]
//! async fn main() {
//!     let sheet = Sheet::yahoo();
//!
//!     match sheet.price("AAPL").await {
//!         Ok(price) => println!("AAPL {price}"),
//!         Err(error) => println!("{error}"),
//!     }
//!
//!     let rows = sheet
//!         .history(HistoryRequest::new("^GSPC").with_headers(true).with_limit(5))
//!         .await;
//! }
//! ```
//!
//! ## Error Handling
//!
//! Entry points never panic. Every failure comes back as a [`SheetError`]
//! whose message starts with `Error: ` and can be shown in a cell as-is:
//!
//! ```rust
//! use tickersheet_core::{SheetError, SheetErrorKind};
//!
//! fn describe(error: &SheetError) -> &'static str {
//!     match error.kind() {
//!         SheetErrorKind::InvalidInput => "fix the formula arguments",
//!         SheetErrorKind::UpstreamApi => "the provider rejected the symbol",
//!         SheetErrorKind::NotFound => "nothing to show",
//!         SheetErrorKind::Transport => "network or parse failure",
//!     }
//! }
//! ```

pub mod chart;
pub mod config;
pub mod domain;
pub mod error;
pub mod fetcher;
pub mod http_client;
pub mod meta_fields;
pub mod params;
pub mod projectors;

pub use chart::{BarSeries, ChartMeta, ChartResult, QuoteSeries};
pub use config::ChartConfig;
pub use domain::{encode_ticker, Cell, Row, Table, Ticker, UtcDateTime};
pub use error::{SheetError, SheetErrorKind, ValidationError};
pub use fetcher::{parse_chart_body, ChartRequest, ChartSource, YahooChartSource};
pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient, StaticHttpClient,
};
pub use meta_fields::{normalize_field, MetaField};
pub use params::{ChartInterval, ChartRange};
pub use projectors::{HistoryRequest, Sheet, BAR_HEADERS, QUOTE_HEADERS};
