mod history;
mod meta_field;
mod price;
mod rows;

use tickersheet_core::{ChartConfig, Sheet};
use tracing::debug;

use crate::cli::{Cli, Command};
use crate::error::CliError;
use crate::output::Output;

pub async fn run(cli: &Cli) -> Result<Output, CliError> {
    let config = chart_config(cli);
    debug!(
        base_url = %config.base_url,
        timeout_ms = config.timeout_ms,
        user_agent = %config.user_agent,
        "building chart source"
    );
    let sheet = Sheet::yahoo_with_config(config);

    match &cli.command {
        Command::Price(args) => price::run(args, &sheet).await,
        Command::Quote(args) => rows::quote(args, &sheet).await,
        Command::LatestBar(args) => rows::latest_bar(args, &sheet).await,
        Command::History(args) => history::run(args, cli.strict, &sheet).await,
        Command::MetaField(args) => meta_field::run(args, &sheet).await,
    }
}

fn chart_config(cli: &Cli) -> ChartConfig {
    ChartConfig::default()
        .with_base_url(cli.base_url.as_str())
        .with_timeout_ms(cli.timeout_ms)
        .with_user_agent(cli.user_agent.as_str())
}
