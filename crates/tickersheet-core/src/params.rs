//! Chart request parameters.
//!
//! Both parameters come from closed allow-lists. [`ChartRange::resolve`] and
//! [`ChartInterval::resolve`] never fail: anything absent, empty or unknown
//! silently becomes the default (`1d` range, `1m` interval). The strict
//! [`FromStr`] implementations exist for callers that want typos reported.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Span of history requested from the chart endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartRange {
    #[default]
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "5d")]
    FiveDays,
    #[serde(rename = "1mo")]
    OneMonth,
    #[serde(rename = "3mo")]
    ThreeMonths,
    #[serde(rename = "6mo")]
    SixMonths,
    #[serde(rename = "1y")]
    OneYear,
    #[serde(rename = "2y")]
    TwoYears,
    #[serde(rename = "5y")]
    FiveYears,
    #[serde(rename = "10y")]
    TenYears,
    #[serde(rename = "ytd")]
    YearToDate,
    #[serde(rename = "max")]
    Max,
}

impl ChartRange {
    pub const ALL: [Self; 11] = [
        Self::OneDay,
        Self::FiveDays,
        Self::OneMonth,
        Self::ThreeMonths,
        Self::SixMonths,
        Self::OneYear,
        Self::TwoYears,
        Self::FiveYears,
        Self::TenYears,
        Self::YearToDate,
        Self::Max,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneDay => "1d",
            Self::FiveDays => "5d",
            Self::OneMonth => "1mo",
            Self::ThreeMonths => "3mo",
            Self::SixMonths => "6mo",
            Self::OneYear => "1y",
            Self::TwoYears => "2y",
            Self::FiveYears => "5y",
            Self::TenYears => "10y",
            Self::YearToDate => "ytd",
            Self::Max => "max",
        }
    }

    /// Exact allow-list match, or the default range.
    pub fn resolve(candidate: Option<&str>) -> Self {
        candidate
            .and_then(|value| Self::ALL.into_iter().find(|range| range.as_str() == value))
            .unwrap_or_default()
    }
}

impl Display for ChartRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartRange {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|range| range.as_str() == value)
            .ok_or_else(|| ValidationError::InvalidRange {
                value: value.to_owned(),
            })
    }
}

/// Bar granularity requested from the chart endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartInterval {
    #[default]
    #[serde(rename = "1m")]
    OneMinute,
    #[serde(rename = "2m")]
    TwoMinutes,
    #[serde(rename = "5m")]
    FiveMinutes,
    #[serde(rename = "15m")]
    FifteenMinutes,
    #[serde(rename = "30m")]
    ThirtyMinutes,
    #[serde(rename = "60m")]
    SixtyMinutes,
    #[serde(rename = "90m")]
    NinetyMinutes,
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "5d")]
    FiveDays,
    #[serde(rename = "1wk")]
    OneWeek,
    #[serde(rename = "1mo")]
    OneMonth,
    #[serde(rename = "3mo")]
    ThreeMonths,
}

impl ChartInterval {
    pub const ALL: [Self; 13] = [
        Self::OneMinute,
        Self::TwoMinutes,
        Self::FiveMinutes,
        Self::FifteenMinutes,
        Self::ThirtyMinutes,
        Self::SixtyMinutes,
        Self::NinetyMinutes,
        Self::OneHour,
        Self::OneDay,
        Self::FiveDays,
        Self::OneWeek,
        Self::OneMonth,
        Self::ThreeMonths,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneMinute => "1m",
            Self::TwoMinutes => "2m",
            Self::FiveMinutes => "5m",
            Self::FifteenMinutes => "15m",
            Self::ThirtyMinutes => "30m",
            Self::SixtyMinutes => "60m",
            Self::NinetyMinutes => "90m",
            Self::OneHour => "1h",
            Self::OneDay => "1d",
            Self::FiveDays => "5d",
            Self::OneWeek => "1wk",
            Self::OneMonth => "1mo",
            Self::ThreeMonths => "3mo",
        }
    }

    /// Exact allow-list match, or the default interval.
    pub fn resolve(candidate: Option<&str>) -> Self {
        candidate
            .and_then(|value| {
                Self::ALL
                    .into_iter()
                    .find(|interval| interval.as_str() == value)
            })
            .unwrap_or_default()
    }
}

impl Display for ChartInterval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartInterval {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|interval| interval.as_str() == value)
            .ok_or_else(|| ValidationError::InvalidInterval {
                value: value.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_or_unknown_range_defaults_to_one_day() {
        for candidate in [None, Some(""), Some("2d"), Some("1D"), Some(" 1mo"), Some("forever")] {
            assert_eq!(ChartRange::resolve(candidate).as_str(), "1d", "{candidate:?}");
        }
    }

    #[test]
    fn absent_or_unknown_interval_defaults_to_one_minute() {
        for candidate in [None, Some(""), Some("3m"), Some("1H"), Some("1w"), Some("tick")] {
            assert_eq!(
                ChartInterval::resolve(candidate).as_str(),
                "1m",
                "{candidate:?}"
            );
        }
    }

    #[test]
    fn allow_listed_values_resolve_unchanged() {
        for range in ChartRange::ALL {
            assert_eq!(ChartRange::resolve(Some(range.as_str())), range);
        }
        for interval in ChartInterval::ALL {
            assert_eq!(ChartInterval::resolve(Some(interval.as_str())), interval);
        }
    }

    #[test]
    fn strict_parse_reports_typos() {
        let err = ChartRange::from_str("1yr").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidRange { .. }));

        let err = ChartInterval::from_str("1hr").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidInterval { .. }));

        assert_eq!(
            ChartInterval::from_str("1wk").expect("must parse"),
            ChartInterval::OneWeek
        );
    }
}
