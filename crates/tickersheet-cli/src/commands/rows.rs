use tickersheet_core::{ChartSource, Sheet};

use crate::cli::RowArgs;
use crate::error::CliError;
use crate::output::Output;

pub async fn quote<S: ChartSource>(args: &RowArgs, sheet: &Sheet<S>) -> Result<Output, CliError> {
    let table = sheet.quote(&args.ticker, args.headers).await?;
    Ok(Output::Table(table))
}

pub async fn latest_bar<S: ChartSource>(
    args: &RowArgs,
    sheet: &Sheet<S>,
) -> Result<Output, CliError> {
    let table = sheet.latest_bar(&args.ticker, args.headers).await?;
    Ok(Output::Table(table))
}
