use tickersheet_core::{ChartSource, Sheet};

use crate::cli::MetaFieldArgs;
use crate::error::CliError;
use crate::output::Output;

pub async fn run<S: ChartSource>(
    args: &MetaFieldArgs,
    sheet: &Sheet<S>,
) -> Result<Output, CliError> {
    let cell = sheet.meta_field(&args.ticker, &args.field).await?;
    Ok(Output::Scalar(cell))
}
