use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::UtcDateTime;

/// One spreadsheet value.
///
/// `Empty` stands in for any missing field so every row of a projector keeps
/// the same column count; it renders and serializes as `""`.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    DateTime(UtcDateTime),
    Empty,
}

pub type Row = Vec<Cell>;
pub type Table = Vec<Row>;

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn from_optional_text(value: Option<&str>) -> Self {
        value.map_or(Self::Empty, Self::text)
    }

    pub fn from_optional_number(value: Option<f64>) -> Self {
        value.map_or(Self::Empty, Self::Number)
    }

    /// Epoch seconds to a date cell; out-of-range epochs degrade to `Empty`.
    pub fn from_optional_epoch(value: Option<i64>) -> Self {
        value
            .and_then(|seconds| UtcDateTime::from_unix_seconds(seconds).ok())
            .map_or(Self::Empty, Self::DateTime)
    }

    /// Map a raw JSON value from the provider onto a cell.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => Self::Empty,
            Value::String(text) => Self::Text(text.clone()),
            Value::Number(number) => number.as_f64().map_or(Self::Empty, Self::Number),
            Value::Bool(flag) => Self::Text(flag.to_string()),
            other => Self::Text(other.to_string()),
        }
    }

    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn as_date_time(&self) -> Option<UtcDateTime> {
        match self {
            Self::DateTime(value) => Some(*value),
            _ => None,
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Number(value) => write!(f, "{value}"),
            Self::DateTime(value) => write!(f, "{value}"),
            Self::Empty => Ok(()),
        }
    }
}

impl Serialize for Cell {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Text(value) => serializer.serialize_str(value),
            Self::Number(value) => serializer.serialize_f64(*value),
            Self::DateTime(value) => value.serialize(serializer),
            Self::Empty => serializer.serialize_str(""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_cells_render_as_empty_string() {
        assert_eq!(Cell::Empty.to_string(), "");
        assert_eq!(
            serde_json::to_value(Cell::Empty).expect("serializable"),
            json!("")
        );
    }

    #[test]
    fn numbers_render_in_shortest_form() {
        assert_eq!(Cell::Number(150.0).to_string(), "150");
        assert_eq!(Cell::Number(227.5).to_string(), "227.5");
    }

    #[test]
    fn json_values_map_onto_cells() {
        assert_eq!(Cell::from_json(&json!("NYSE")), Cell::text("NYSE"));
        assert_eq!(Cell::from_json(&json!(-18000)), Cell::Number(-18000.0));
        assert_eq!(Cell::from_json(&json!(true)), Cell::text("true"));
        assert_eq!(Cell::from_json(&Value::Null), Cell::Empty);
        assert_eq!(
            Cell::from_json(&json!(["1d", "5d"])),
            Cell::text(r#"["1d","5d"]"#)
        );
    }

    #[test]
    fn epochs_become_dates() {
        let cell = Cell::from_optional_epoch(Some(1_704_067_200));
        assert_eq!(cell.to_string(), "2024-01-01T00:00:00Z");
        assert!(Cell::from_optional_epoch(None).is_empty());
    }
}
