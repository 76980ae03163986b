/// Default chart endpoint host.
pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";
/// Default request timeout budget.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_USER_AGENT: &str = concat!("tickersheet/", env!("CARGO_PKG_VERSION"));

/// Settings for the chart fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartConfig {
    pub base_url: String,
    pub timeout_ms: u64,
    pub user_agent: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: String::from(DEFAULT_USER_AGENT),
        }
    }
}

impl ChartConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub(crate) fn chart_url(&self, encoded_ticker: &str, range: &str, interval: &str) -> String {
        format!(
            "{}/v8/finance/chart/{encoded_ticker}?range={range}&interval={interval}",
            self.base_url
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_drops_trailing_slash() {
        let config = ChartConfig::default().with_base_url("http://127.0.0.1:8080/");
        assert_eq!(
            config.chart_url("%5EGSPC", "1d", "1m"),
            "http://127.0.0.1:8080/v8/finance/chart/%5EGSPC?range=1d&interval=1m"
        );
    }

    #[test]
    fn defaults_point_at_yahoo() {
        let config = ChartConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_ms, 10_000);
        assert!(config.user_agent.starts_with("tickersheet/"));
    }
}
