//! CLI argument definitions for tickersheet.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `price` | Current regular-market price |
//! | `quote` | 13-column quote row |
//! | `latest-bar` | Most recent one-minute bar |
//! | `history` | Historical bars, newest first |
//! | `meta-field` | Single metadata attribute by alias |
//!
//! # Examples
//!
//! ```bash
//! tickersheet price AAPL
//! tickersheet quote OIH --headers --format table
//! tickersheet history ^GSPC --range 1mo --interval 1d --limit 10 --headers
//! tickersheet meta-field AAPL 52WeekHigh
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Spreadsheet-shaped market data from Yahoo Finance charts.
#[derive(Debug, Parser)]
#[command(
    name = "tickersheet",
    author,
    version,
    about = "Spreadsheet-shaped market data from Yahoo Finance charts"
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Reject unknown --range/--interval values instead of falling back to defaults.
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    /// Chart endpoint host.
    #[arg(long, global = true, default_value = tickersheet_core::config::DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Request timeout budget in milliseconds.
    #[arg(long, global = true, default_value_t = tickersheet_core::config::DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// User-Agent header sent with every chart request.
    #[arg(long, global = true, default_value = tickersheet_core::config::DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log requests and responses to stderr.
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Single JSON value (scalar or array of rows).
    Json,
    /// One JSON row per line.
    Ndjson,
    /// Tab-separated rows.
    Table,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Current regular-market price.
    Price(TickerArgs),

    /// Symbol, name, currency, exchange, prices, volume and market time.
    Quote(RowArgs),

    /// Most recent one-minute bar of the current day.
    LatestBar(RowArgs),

    /// Historical OHLCV bars, most recent first.
    History(HistoryArgs),

    /// One metadata attribute, looked up by case-insensitive alias.
    MetaField(MetaFieldArgs),
}

#[derive(Debug, Args)]
pub struct TickerArgs {
    /// Ticker symbol (e.g. AAPL, ^GSPC, EURUSD=X).
    pub ticker: String,
}

#[derive(Debug, Args)]
pub struct RowArgs {
    /// Ticker symbol.
    pub ticker: String,

    /// Prepend a header row.
    #[arg(long, default_value_t = false)]
    pub headers: bool,
}

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Ticker symbol.
    pub ticker: String,

    /// Prepend a header row.
    #[arg(long, default_value_t = false)]
    pub headers: bool,

    /// Maximum number of bars; zero or negative returns every bar.
    #[arg(long, allow_negative_numbers = true)]
    pub limit: Option<i64>,

    /// Span of history: 1d, 5d, 1mo, 3mo, 6mo, 1y, 2y, 5y, 10y, ytd, max.
    #[arg(long)]
    pub range: Option<String>,

    /// Bar size: 1m, 2m, 5m, 15m, 30m, 60m, 90m, 1h, 1d, 5d, 1wk, 1mo, 3mo.
    #[arg(long)]
    pub interval: Option<String>,
}

#[derive(Debug, Args)]
pub struct MetaFieldArgs {
    /// Ticker symbol.
    pub ticker: String,

    /// Field name or alias (e.g. price, 52WeekHigh, first_trade_date).
    pub field: String,
}
