use crate::chart::ChartResult;
use crate::domain::{Cell, Row, Table};

pub const QUOTE_HEADERS: [&str; 13] = [
    "Symbol",
    "Name",
    "Currency",
    "Exchange",
    "Type",
    "Price",
    "Previous Close",
    "Day High",
    "Day Low",
    "Volume",
    "52-Week High",
    "52-Week Low",
    "Market Time",
];

/// One 13-column quote row, optionally preceded by the header row.
pub fn project_quote(result: &ChartResult, include_headers: bool) -> Table {
    let meta = &result.meta;

    let row: Row = vec![
        Cell::from_optional_text(meta.symbol.as_deref()),
        Cell::from_optional_text(meta.display_name()),
        Cell::from_optional_text(meta.currency.as_deref()),
        Cell::from_optional_text(meta.display_exchange()),
        Cell::from_optional_text(meta.instrument_type.as_deref()),
        Cell::from_optional_number(meta.regular_market_price),
        Cell::from_optional_number(meta.display_previous_close()),
        Cell::from_optional_number(meta.regular_market_day_high),
        Cell::from_optional_number(meta.regular_market_day_low),
        Cell::from_optional_number(meta.regular_market_volume),
        Cell::from_optional_number(meta.fifty_two_week_high),
        Cell::from_optional_number(meta.fifty_two_week_low),
        Cell::from_optional_epoch(meta.regular_market_time),
    ];

    with_headers(&QUOTE_HEADERS, include_headers, vec![row])
}

pub(crate) fn with_headers(headers: &[&str], include_headers: bool, rows: Table) -> Table {
    if !include_headers {
        return rows;
    }
    let mut table = Vec::with_capacity(rows.len() + 1);
    table.push(headers.iter().copied().map(Cell::text).collect());
    table.extend(rows);
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartMeta;

    #[test]
    fn sparse_meta_keeps_thirteen_empty_columns() {
        let table = project_quote(&ChartResult::default(), false);

        assert_eq!(table.len(), 1);
        assert_eq!(table[0].len(), 13);
        assert!(table[0][0].is_empty());
        assert!(table[0].iter().all(Cell::is_empty));
    }

    #[test]
    fn names_and_exchanges_fall_back() {
        let result = ChartResult {
            meta: ChartMeta {
                symbol: Some(String::from("OIH")),
                short_name: Some(String::from("VanEck Oil")),
                exchange_name: Some(String::from("PCX")),
                regular_market_volume: Some(0.0),
                ..ChartMeta::default()
            },
            ..ChartResult::default()
        };

        let table = project_quote(&result, true);
        assert_eq!(table.len(), 2);
        assert_eq!(table[0][12], Cell::text("Market Time"));
        assert_eq!(table[1][1], Cell::text("VanEck Oil"));
        assert_eq!(table[1][3], Cell::text("PCX"));
        assert_eq!(table[1][9], Cell::Number(0.0));
    }
}
