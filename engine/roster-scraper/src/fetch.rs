//! Page fetching

use crate::config::ScraperConfig;
use crate::error::{Result, ScrapeError};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, REFERER};
use reqwest::Client;
use tracing::{debug, info};

/// Source of page bodies, one blocking request at a time
#[async_trait::async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch `url` and return its body; non-success statuses are errors
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// HTTP fetcher sending browser-like headers
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a new HTTP fetcher
    pub fn new(config: &ScraperConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, header_value("Accept", &config.accept)?);
        headers.insert(ACCEPT_LANGUAGE, header_value("Accept-Language", &config.accept_language)?);
        if !config.referer.is_empty() {
            headers.insert(REFERER, header_value("Referer", &config.referer)?);
        }

        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| ScrapeError::config(format!("Invalid {name} header {value:?}: {e}")))
}

#[async_trait::async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        debug!("Fetching {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status { url: url.to_string(), status: status.as_u16() });
        }

        let html = response.text().await?;
        info!("Fetched {} ({} bytes)", url, html.len());

        Ok(html)
    }
}
