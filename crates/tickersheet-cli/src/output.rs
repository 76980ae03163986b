use std::io::Write;

use tickersheet_core::{Cell, Table};

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Result of one command.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Scalar(Cell),
    Table(Table),
}

pub fn render(
    writer: &mut impl Write,
    output: &Output,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = match output {
                Output::Scalar(cell) => to_json(cell, pretty)?,
                Output::Table(table) => to_json(table, pretty)?,
            };
            writeln!(writer, "{payload}")?;
        }
        OutputFormat::Ndjson => match output {
            Output::Scalar(cell) => writeln!(writer, "{}", serde_json::to_string(cell)?)?,
            Output::Table(table) => {
                for row in table {
                    writeln!(writer, "{}", serde_json::to_string(row)?)?;
                }
            }
        },
        OutputFormat::Table => match output {
            Output::Scalar(cell) => writeln!(writer, "{cell}")?,
            Output::Table(table) => {
                for row in table {
                    let line = row
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join("\t");
                    writeln!(writer, "{line}")?;
                }
            }
        },
    }

    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
