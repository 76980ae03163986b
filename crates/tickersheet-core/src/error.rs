use std::fmt::{Display, Formatter};

use thiserror::Error;

/// Validation errors raised while parsing domain inputs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("ticker cannot be empty")]
    EmptyTicker,

    #[error("field name cannot be empty")]
    EmptyField,

    #[error("invalid range '{value}', expected one of 1d, 5d, 1mo, 3mo, 6mo, 1y, 2y, 5y, 10y, ytd, max")]
    InvalidRange { value: String },
    #[error("invalid interval '{value}', expected one of 1m, 2m, 5m, 15m, 30m, 60m, 90m, 1h, 1d, 5d, 1wk, 1mo, 3mo")]
    InvalidInterval { value: String },

    #[error("unix timestamp {value} is out of range")]
    TimestampOutOfRange { value: i64 },
}

/// Failure classification shared by every projector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetErrorKind {
    InvalidInput,
    UpstreamApi,
    NotFound,
    Transport,
}

/// Human-readable failure returned in place of a cell, row set or scalar.
///
/// The message always starts with `Error: ` so it can be dropped straight into
/// a spreadsheet cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetError {
    kind: SheetErrorKind,
    message: String,
}

impl SheetError {
    fn new(kind: SheetErrorKind, detail: impl Display) -> Self {
        Self {
            kind,
            message: format!("Error: {detail}"),
        }
    }

    pub fn invalid_input(detail: impl Display) -> Self {
        Self::new(SheetErrorKind::InvalidInput, detail)
    }

    pub fn upstream_api(description: Option<&str>) -> Self {
        match description.map(str::trim).filter(|value| !value.is_empty()) {
            Some(description) => Self::new(SheetErrorKind::UpstreamApi, description),
            None => Self::new(SheetErrorKind::UpstreamApi, "Unknown API error"),
        }
    }

    pub fn not_found(detail: impl Display) -> Self {
        Self::new(SheetErrorKind::NotFound, detail)
    }

    pub fn transport(detail: impl Display) -> Self {
        Self::new(SheetErrorKind::Transport, detail)
    }

    pub const fn kind(&self) -> SheetErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            SheetErrorKind::InvalidInput => "sheet.invalid_input",
            SheetErrorKind::UpstreamApi => "sheet.upstream_api",
            SheetErrorKind::NotFound => "sheet.not_found",
            SheetErrorKind::Transport => "sheet.transport",
        }
    }
}

impl Display for SheetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for SheetError {}

impl From<ValidationError> for SheetError {
    fn from(error: ValidationError) -> Self {
        match error {
            ValidationError::EmptyTicker => Self::invalid_input("Invalid ticker symbol"),
            ValidationError::EmptyField => Self::invalid_input("Field name is required"),
            other => Self::invalid_input(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_error_falls_back_to_unknown_message() {
        assert_eq!(
            SheetError::upstream_api(None).message(),
            "Error: Unknown API error"
        );
        assert_eq!(
            SheetError::upstream_api(Some("  ")).message(),
            "Error: Unknown API error"
        );
    }

    #[test]
    fn upstream_error_carries_description_verbatim() {
        let error = SheetError::upstream_api(Some("No data found, symbol may be delisted"));
        assert_eq!(error.kind(), SheetErrorKind::UpstreamApi);
        assert_eq!(
            error.to_string(),
            "Error: No data found, symbol may be delisted"
        );
        assert_eq!(error.code(), "sheet.upstream_api");
    }

    #[test]
    fn validation_errors_map_to_invalid_input() {
        let error = SheetError::from(ValidationError::EmptyField);
        assert_eq!(error.kind(), SheetErrorKind::InvalidInput);
        assert_eq!(error.message(), "Error: Field name is required");
    }
}
