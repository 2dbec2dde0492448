use crate::fetcher::traits::Scraper;
use crate::model::{ScrapeRequest, ScraperError};

use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Single-attempt HTTP GET; no retries.
pub struct ScraperImpl {
    client: Client,
}

impl ScraperImpl {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl Scraper for ScraperImpl {
    async fn fetch(&self, req: &ScrapeRequest) -> Result<String, ScraperError> {
        debug!("GET {}", req.url);
        let mut builder = self.client.get(&req.url);
        for (name, value) in &req.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::InvalidResponse(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}
