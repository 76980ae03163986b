//! Chart fetcher.
//!
//! [`ChartSource`] is the seam the projectors depend on. [`YahooChartSource`]
//! is the production implementation: one GET per call, the body parsed no
//! matter what status came back, and every failure folded into a
//! [`SheetError`].

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::chart::{ChartEnvelope, ChartResult};
use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient};
use crate::{ChartConfig, ChartInterval, ChartRange, SheetError, Ticker};

/// Validated input for one chart call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartRequest {
    pub ticker: Ticker,
    pub range: ChartRange,
    pub interval: ChartInterval,
}

impl ChartRequest {
    /// Validate the ticker and resolve range/interval against the allow-lists.
    pub fn new(
        ticker: &str,
        range: Option<&str>,
        interval: Option<&str>,
    ) -> Result<Self, SheetError> {
        Ok(Self {
            ticker: Ticker::parse(ticker)?,
            range: ChartRange::resolve(range),
            interval: ChartInterval::resolve(interval),
        })
    }

    /// Default range and interval: the current day at one-minute bars.
    pub fn latest(ticker: &str) -> Result<Self, SheetError> {
        Self::new(ticker, None, None)
    }
}

/// Source of chart results for the projectors.
pub trait ChartSource: Send + Sync {
    fn chart<'a>(
        &'a self,
        req: ChartRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ChartResult, SheetError>> + Send + 'a>>;
}

impl<S: ChartSource + ?Sized> ChartSource for Arc<S> {
    fn chart<'a>(
        &'a self,
        req: ChartRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ChartResult, SheetError>> + Send + 'a>> {
        (**self).chart(req)
    }
}

/// Yahoo Finance `v8/finance/chart` fetcher.
#[derive(Clone)]
pub struct YahooChartSource {
    http_client: Arc<dyn HttpClient>,
    config: ChartConfig,
}

impl Default for YahooChartSource {
    fn default() -> Self {
        Self::from_config(ChartConfig::default())
    }
}

impl YahooChartSource {
    /// Reqwest transport configured from `config`.
    pub fn from_config(config: ChartConfig) -> Self {
        Self {
            http_client: Arc::new(ReqwestHttpClient::new(&config.user_agent)),
            config,
        }
    }

    pub fn with_http_client(http_client: Arc<dyn HttpClient>, config: ChartConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    async fn fetch(&self, req: &ChartRequest) -> Result<ChartResult, SheetError> {
        let url = self.config.chart_url(
            &req.ticker.encoded(),
            req.range.as_str(),
            req.interval.as_str(),
        );
        debug!(%url, "requesting chart");

        let request = HttpRequest::get(url)
            .with_header("referer", "https://finance.yahoo.com/")
            .with_timeout_ms(self.config.timeout_ms);

        let response = self.http_client.execute(request).await.map_err(|error| {
            warn!(ticker = %req.ticker, error = %error, "chart transport failed");
            SheetError::transport(error)
        })?;

        if !response.is_success() {
            debug!(status = response.status, "chart returned non-success status, parsing body anyway");
        }

        parse_chart_body(&response.body, &req.ticker)
    }
}

impl ChartSource for YahooChartSource {
    fn chart<'a>(
        &'a self,
        req: ChartRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ChartResult, SheetError>> + Send + 'a>> {
        Box::pin(async move { self.fetch(&req).await })
    }
}

/// Interpret a chart response body.
///
/// A non-empty `chart.result` wins; otherwise `chart.error` is reported;
/// otherwise the ticker is reported as unretrievable.
pub fn parse_chart_body(body: &str, ticker: &Ticker) -> Result<ChartResult, SheetError> {
    let envelope: ChartEnvelope = serde_json::from_str(body).map_err(|error| {
        warn!(%ticker, %error, "chart body is not valid JSON");
        SheetError::transport(error)
    })?;
    let chart = envelope.chart.unwrap_or_default();

    if let Some(first) = chart.result.and_then(|results| results.into_iter().next()) {
        return ChartResult::from_raw(first).map_err(SheetError::transport);
    }

    if let Some(error) = chart.error {
        warn!(%ticker, description = ?error.description, "chart API reported an error");
        return Err(SheetError::upstream_api(error.description.as_deref()));
    }

    Err(SheetError::not_found(format!(
        "Unable to retrieve data for ticker {ticker}"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SheetErrorKind;

    fn ticker(raw: &str) -> Ticker {
        Ticker::parse(raw).expect("valid ticker")
    }

    #[test]
    fn first_result_wins_over_error() {
        let body = r#"{"chart":{"result":[{"meta":{"symbol":"A"}},{"meta":{"symbol":"B"}}],
                       "error":{"description":"ignored"}}}"#;
        let result = parse_chart_body(body, &ticker("A")).expect("result");
        assert_eq!(result.meta.symbol.as_deref(), Some("A"));
    }

    #[test]
    fn empty_result_falls_through_to_error_description() {
        let body = r#"{"chart":{"result":[],"error":{"code":"Not Found","description":"No data found, symbol may be delisted"}}}"#;
        let error = parse_chart_body(body, &ticker("ZZZZ")).expect_err("error");
        assert_eq!(error.kind(), SheetErrorKind::UpstreamApi);
        assert_eq!(error.message(), "Error: No data found, symbol may be delisted");
    }

    #[test]
    fn error_without_description_is_unknown() {
        let body = r#"{"chart":{"result":null,"error":{"code":"Bad Request"}}}"#;
        let error = parse_chart_body(body, &ticker("X")).expect_err("error");
        assert_eq!(error.message(), "Error: Unknown API error");
    }

    #[test]
    fn missing_chart_reports_ticker() {
        let error = parse_chart_body("{}", &ticker("MSFT")).expect_err("error");
        assert_eq!(error.kind(), SheetErrorKind::NotFound);
        assert_eq!(error.message(), "Error: Unable to retrieve data for ticker MSFT");
    }

    #[test]
    fn invalid_json_is_a_transport_error() {
        let error = parse_chart_body("<html>503</html>", &ticker("MSFT")).expect_err("error");
        assert_eq!(error.kind(), SheetErrorKind::Transport);
        assert!(error.message().starts_with("Error: "));
    }

    #[test]
    fn request_defaults_invalid_parameters() {
        let request = ChartRequest::new(" ^GSPC ", Some("1week"), Some("")).expect("valid");
        assert_eq!(request.ticker.as_str(), "^GSPC");
        assert_eq!(request.range, ChartRange::OneDay);
        assert_eq!(request.interval, ChartInterval::OneMinute);
    }

    #[test]
    fn request_rejects_blank_ticker() {
        let error = ChartRequest::latest("  ").expect_err("blank ticker");
        assert_eq!(error.kind(), SheetErrorKind::InvalidInput);
    }
}
