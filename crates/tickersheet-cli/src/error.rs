use thiserror::Error;

use tickersheet_core::{SheetError, SheetErrorKind};

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] tickersheet_core::ValidationError),

    #[error(transparent)]
    Sheet(#[from] SheetError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Sheet(error) => match error.kind() {
                SheetErrorKind::InvalidInput => 2,
                SheetErrorKind::NotFound => 3,
                SheetErrorKind::UpstreamApi => 4,
                SheetErrorKind::Transport => 5,
            },
            Self::Serialization(_) => 6,
            Self::Io(_) => 10,
        }
    }
}
