use crate::chart::ChartResult;
use crate::domain::Cell;
use crate::meta_fields::{normalize_field, MetaField};
use crate::{SheetError, Ticker};

/// Look a metadata attribute up by alias, then by its raw key.
///
/// A known alias whose value is absent yields `Cell::Empty`; only a name that
/// is neither an alias nor a raw key is an error.
pub fn project_meta_field(
    result: &ChartResult,
    ticker: &Ticker,
    field: &str,
) -> Result<Cell, SheetError> {
    if let Some(known) = MetaField::from_alias(&normalize_field(field)) {
        return Ok(known.read(&result.raw_meta));
    }

    result
        .raw_meta
        .get(field)
        .map(Cell::from_json)
        .ok_or_else(|| {
            SheetError::not_found(format!("Field '{field}' not found for ticker {ticker}"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SheetErrorKind;
    use serde_json::json;

    fn result() -> ChartResult {
        let raw_meta = json!({
            "symbol": "AAPL",
            "fiftyTwoWeekHigh": 260.1,
            "hasPrePostMarketData": true,
            "validRanges": ["1d", "5d"]
        });
        ChartResult {
            raw_meta: raw_meta.as_object().cloned().expect("object"),
            ..ChartResult::default()
        }
    }

    fn ticker() -> Ticker {
        Ticker::parse("AAPL").expect("ticker")
    }

    #[test]
    fn aliases_are_case_and_separator_insensitive() {
        let result = result();
        for field in ["52WeekHigh", "52weekhigh", "fifty_two_week_high", "52W High"] {
            let cell = project_meta_field(&result, &ticker(), field).expect("cell");
            assert_eq!(cell, Cell::Number(260.1), "{field}");
        }
    }

    #[test]
    fn known_alias_without_value_is_empty() {
        let cell = project_meta_field(&result(), &ticker(), "firstTradeDate").expect("cell");
        assert!(cell.is_empty());
    }

    #[test]
    fn unknown_alias_falls_back_to_raw_key() {
        let cell = project_meta_field(&result(), &ticker(), "hasPrePostMarketData").expect("cell");
        assert_eq!(cell, Cell::text("true"));

        let error = project_meta_field(&result(), &ticker(), "haspremarketdata").expect_err("miss");
        assert_eq!(error.kind(), SheetErrorKind::NotFound);
        assert_eq!(
            error.message(),
            "Error: Field 'haspremarketdata' not found for ticker AAPL"
        );
    }

    #[test]
    fn raw_lookup_is_case_sensitive() {
        assert!(project_meta_field(&result(), &ticker(), "validRanges").is_ok());
        assert!(project_meta_field(&result(), &ticker(), "ValidRanges").is_err());
    }
}
