use std::str::FromStr;

use tickersheet_core::{ChartInterval, ChartRange, ChartSource, HistoryRequest, Sheet};

use crate::cli::HistoryArgs;
use crate::error::CliError;
use crate::output::Output;

pub async fn run<S: ChartSource>(
    args: &HistoryArgs,
    strict: bool,
    sheet: &Sheet<S>,
) -> Result<Output, CliError> {
    let table = sheet.history(build_request(args, strict)?).await?;
    Ok(Output::Table(table))
}

/// Unknown range/interval values fall back to defaults unless `strict` is set.
fn build_request(args: &HistoryArgs, strict: bool) -> Result<HistoryRequest, CliError> {
    if strict {
        if let Some(range) = &args.range {
            ChartRange::from_str(range)?;
        }
        if let Some(interval) = &args.interval {
            ChartInterval::from_str(interval)?;
        }
    }

    Ok(HistoryRequest {
        ticker: args.ticker.clone(),
        include_headers: args.headers,
        limit: args.limit,
        range: args.range.clone(),
        interval: args.interval.clone(),
    })
}
