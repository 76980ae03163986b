//! Metadata field aliases.
//!
//! Lookups are case-, underscore- and whitespace-insensitive: the caller's
//! field name is passed through [`normalize_field`] and then matched against a
//! fixed alias table.

use serde_json::{Map, Value};

use crate::domain::Cell;

/// Metadata attribute reachable through an alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaField {
    Symbol,
    LongName,
    ShortName,
    Currency,
    ExchangeName,
    FullExchangeName,
    InstrumentType,
    RegularMarketPrice,
    PreviousClose,
    ChartPreviousClose,
    RegularMarketDayHigh,
    RegularMarketDayLow,
    RegularMarketVolume,
    FiftyTwoWeekHigh,
    FiftyTwoWeekLow,
    RegularMarketTime,
    FirstTradeDate,
    Timezone,
    ExchangeTimezoneName,
    GmtOffset,
    PriceHint,
    DataGranularity,
    Range,
}

impl MetaField {
    /// Resolve an already-normalized alias.
    pub fn from_alias(normalized: &str) -> Option<Self> {
        let field = match normalized {
            "symbol" | "ticker" => Self::Symbol,
            "name" | "longname" => Self::LongName,
            "shortname" => Self::ShortName,
            "currency" => Self::Currency,
            "exchange" | "exchangename" => Self::ExchangeName,
            "fullexchangename" => Self::FullExchangeName,
            "type" | "instrumenttype" | "quotetype" => Self::InstrumentType,
            "price" | "regularmarketprice" | "currentprice" => Self::RegularMarketPrice,
            "previousclose" | "prevclose" => Self::PreviousClose,
            "chartpreviousclose" => Self::ChartPreviousClose,
            "dayhigh" | "high" | "regularmarketdayhigh" => Self::RegularMarketDayHigh,
            "daylow" | "low" | "regularmarketdaylow" => Self::RegularMarketDayLow,
            "volume" | "regularmarketvolume" => Self::RegularMarketVolume,
            "52weekhigh" | "52whigh" | "fiftytwoweekhigh" => Self::FiftyTwoWeekHigh,
            "52weeklow" | "52wlow" | "fiftytwoweeklow" => Self::FiftyTwoWeekLow,
            "markettime" | "regularmarkettime" | "time" => Self::RegularMarketTime,
            "firsttradedate" | "firsttrade" => Self::FirstTradeDate,
            "timezone" | "tz" => Self::Timezone,
            "exchangetimezone" | "exchangetimezonename" => Self::ExchangeTimezoneName,
            "gmtoffset" => Self::GmtOffset,
            "pricehint" => Self::PriceHint,
            "datagranularity" | "granularity" => Self::DataGranularity,
            "range" => Self::Range,
            _ => return None,
        };
        Some(field)
    }

    /// Key of the attribute in the provider's `meta` object.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Symbol => "symbol",
            Self::LongName => "longName",
            Self::ShortName => "shortName",
            Self::Currency => "currency",
            Self::ExchangeName => "exchangeName",
            Self::FullExchangeName => "fullExchangeName",
            Self::InstrumentType => "instrumentType",
            Self::RegularMarketPrice => "regularMarketPrice",
            Self::PreviousClose => "previousClose",
            Self::ChartPreviousClose => "chartPreviousClose",
            Self::RegularMarketDayHigh => "regularMarketDayHigh",
            Self::RegularMarketDayLow => "regularMarketDayLow",
            Self::RegularMarketVolume => "regularMarketVolume",
            Self::FiftyTwoWeekHigh => "fiftyTwoWeekHigh",
            Self::FiftyTwoWeekLow => "fiftyTwoWeekLow",
            Self::RegularMarketTime => "regularMarketTime",
            Self::FirstTradeDate => "firstTradeDate",
            Self::Timezone => "timezone",
            Self::ExchangeTimezoneName => "exchangeTimezoneName",
            Self::GmtOffset => "gmtoffset",
            Self::PriceHint => "priceHint",
            Self::DataGranularity => "dataGranularity",
            Self::Range => "range",
        }
    }

    pub const fn is_date(self) -> bool {
        matches!(self, Self::RegularMarketTime | Self::FirstTradeDate)
    }

    /// Read this attribute from a raw `meta` object. Absent values are `Empty`.
    pub fn read(self, meta: &Map<String, Value>) -> Cell {
        match meta.get(self.key()) {
            None => Cell::Empty,
            Some(value) if self.is_date() => Cell::from_optional_epoch(value.as_i64()),
            Some(value) => Cell::from_json(value),
        }
    }
}

/// Lower-case and drop underscores and whitespace.
pub fn normalize_field(field: &str) -> String {
    field
        .chars()
        .filter(|ch| *ch != '_' && !ch.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalization_ignores_case_and_separators() {
        assert_eq!(normalize_field("52WeekHigh"), "52weekhigh");
        assert_eq!(normalize_field("fifty_two_week_high"), "fiftytwoweekhigh");
        assert_eq!(normalize_field(" Regular Market_Price "), "regularmarketprice");
    }

    #[test]
    fn fifty_two_week_aliases_share_a_field() {
        for alias in ["52weekhigh", "52whigh", "fiftytwoweekhigh"] {
            assert_eq!(MetaField::from_alias(alias), Some(MetaField::FiftyTwoWeekHigh));
        }
        assert_eq!(MetaField::from_alias("52WeekHigh"), None);
    }

    #[test]
    fn every_alias_target_round_trips_through_its_key() {
        let fields = [
            MetaField::Symbol,
            MetaField::LongName,
            MetaField::ShortName,
            MetaField::Currency,
            MetaField::ExchangeName,
            MetaField::FullExchangeName,
            MetaField::InstrumentType,
            MetaField::RegularMarketPrice,
            MetaField::PreviousClose,
            MetaField::ChartPreviousClose,
            MetaField::RegularMarketDayHigh,
            MetaField::RegularMarketDayLow,
            MetaField::RegularMarketVolume,
            MetaField::FiftyTwoWeekHigh,
            MetaField::FiftyTwoWeekLow,
            MetaField::RegularMarketTime,
            MetaField::FirstTradeDate,
            MetaField::Timezone,
            MetaField::ExchangeTimezoneName,
            MetaField::GmtOffset,
            MetaField::PriceHint,
            MetaField::DataGranularity,
            MetaField::Range,
        ];
        for field in fields {
            assert_eq!(
                MetaField::from_alias(&normalize_field(field.key())),
                Some(field),
                "{}",
                field.key()
            );
        }
    }

    #[test]
    fn date_fields_convert_epoch_seconds() {
        let meta = json!({ "firstTradeDate": 345_479_400, "regularMarketTime": null });
        let meta = meta.as_object().expect("object");

        assert_eq!(
            MetaField::FirstTradeDate.read(meta).to_string(),
            "1980-12-12T14:30:00Z"
        );
        assert!(MetaField::RegularMarketTime.read(meta).is_empty());
        assert!(MetaField::Currency.read(meta).is_empty());
    }
}
