use tickersheet_core::{Cell, ChartSource, Sheet};

use crate::cli::TickerArgs;
use crate::error::CliError;
use crate::output::Output;

pub async fn run<S: ChartSource>(args: &TickerArgs, sheet: &Sheet<S>) -> Result<Output, CliError> {
    let price = sheet.price(&args.ticker).await?;
    Ok(Output::Scalar(Cell::Number(price)))
}
