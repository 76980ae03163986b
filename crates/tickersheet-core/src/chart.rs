//! Chart endpoint payload.
//!
//! The wire structs mirror `{ chart: { result: [...], error: {...} } }`. A
//! result is turned into [`ChartResult`], which keeps a typed view of `meta`
//! for the row projectors and the raw `meta` object for name lookups.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::{Cell, Row};

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ChartEnvelope {
    #[serde(default)]
    pub chart: Option<ChartBody>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ChartBody {
    #[serde(default)]
    pub result: Option<Vec<RawChartResult>>,
    #[serde(default)]
    pub error: Option<ChartApiError>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ChartApiError {
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RawChartResult {
    #[serde(default)]
    meta: Option<Map<String, Value>>,
    #[serde(default)]
    timestamp: Option<Vec<i64>>,
    #[serde(default)]
    indicators: Option<ChartIndicators>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ChartIndicators {
    #[serde(default)]
    quote: Option<Vec<QuoteSeries>>,
}

/// Parallel OHLCV arrays. Any array may be missing and any entry may be `null`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QuoteSeries {
    #[serde(default)]
    pub open: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub high: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub low: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub close: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub volume: Option<Vec<Option<f64>>>,
}

/// Typed view of the instrument metadata block.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartMeta {
    pub symbol: Option<String>,
    pub long_name: Option<String>,
    pub short_name: Option<String>,
    pub currency: Option<String>,
    pub exchange_name: Option<String>,
    pub full_exchange_name: Option<String>,
    pub instrument_type: Option<String>,
    pub regular_market_price: Option<f64>,
    pub previous_close: Option<f64>,
    pub chart_previous_close: Option<f64>,
    pub regular_market_day_high: Option<f64>,
    pub regular_market_day_low: Option<f64>,
    pub regular_market_volume: Option<f64>,
    pub fifty_two_week_high: Option<f64>,
    pub fifty_two_week_low: Option<f64>,
    pub regular_market_time: Option<i64>,
    pub first_trade_date: Option<i64>,
    pub timezone: Option<String>,
    pub exchange_timezone_name: Option<String>,
    pub gmtoffset: Option<i64>,
    pub price_hint: Option<i64>,
    pub data_granularity: Option<String>,
    pub range: Option<String>,
}

impl ChartMeta {
    /// `longName`, falling back to `shortName`.
    pub fn display_name(&self) -> Option<&str> {
        non_blank(&self.long_name).or_else(|| non_blank(&self.short_name))
    }

    /// `fullExchangeName`, falling back to `exchangeName`.
    pub fn display_exchange(&self) -> Option<&str> {
        non_blank(&self.full_exchange_name).or_else(|| non_blank(&self.exchange_name))
    }

    /// `previousClose`, falling back to `chartPreviousClose`.
    pub fn display_previous_close(&self) -> Option<f64> {
        self.previous_close.or(self.chart_previous_close)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.is_empty())
}

/// First result of a chart response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartResult {
    pub meta: ChartMeta,
    pub raw_meta: Map<String, Value>,
    pub timestamp: Option<Vec<i64>>,
    pub quotes: Vec<QuoteSeries>,
}

impl ChartResult {
    /// Timestamps plus the first quote series, when both are non-empty.
    pub fn bar_series(&self) -> Option<BarSeries<'_>> {
        let timestamps = self.timestamp.as_deref().filter(|ts| !ts.is_empty())?;
        let quote = self.quotes.first()?;
        Some(BarSeries { timestamps, quote })
    }

    pub(crate) fn from_raw(raw: RawChartResult) -> Result<Self, serde_json::Error> {
        let raw_meta = raw.meta.unwrap_or_default();
        let meta = ChartMeta::deserialize(Value::Object(raw_meta.clone()))?;
        let quotes = raw
            .indicators
            .and_then(|indicators| indicators.quote)
            .unwrap_or_default();

        Ok(Self {
            meta,
            raw_meta,
            timestamp: raw.timestamp,
            quotes,
        })
    }
}

/// Borrowed, index-aligned view over the bar arrays of a [`ChartResult`].
#[derive(Debug, Clone, Copy)]
pub struct BarSeries<'a> {
    timestamps: &'a [i64],
    quote: &'a QuoteSeries,
}

impl<'a> BarSeries<'a> {
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Timestamp, Open, High, Low, Close, Volume for one index.
    pub fn row(&self, index: usize) -> Row {
        vec![
            Cell::from_optional_epoch(self.timestamps.get(index).copied()),
            Cell::from_optional_number(value_at(&self.quote.open, index)),
            Cell::from_optional_number(value_at(&self.quote.high, index)),
            Cell::from_optional_number(value_at(&self.quote.low, index)),
            Cell::from_optional_number(value_at(&self.quote.close, index)),
            Cell::from_optional_number(value_at(&self.quote.volume, index)),
        ]
    }
}

fn value_at(values: &Option<Vec<Option<f64>>>, index: usize) -> Option<f64> {
    values.as_ref()?.get(index).copied().flatten()
}
