//! # Domain Models
//!
//! Request-scoped value types shared by the fetcher and the projectors.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Ticker`] | Trimmed, non-empty instrument symbol |
//! | [`UtcDateTime`] | UTC instant decoded from epoch seconds |
//! | [`Cell`] | One spreadsheet value (text, number, date or empty) |
//! | [`Table`] | Rows of cells, header row first when requested |

mod cell;
mod ticker;
mod timestamp;

pub use cell::{Cell, Row, Table};
pub use ticker::{encode_ticker, Ticker};
pub use timestamp::UtcDateTime;
