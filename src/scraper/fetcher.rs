use crate::config::FetcherConfig;
use crate::model::{FetchError, Page};
use crate::scraper::traits::Fetcher;

use reqwest::blocking::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &FetcherConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| FetchError::Http(e.to_string()))?;

        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn get_page_content(&self, url: &str) -> Result<Page, FetchError> {
        let parsed = Url::parse(url).map_err(|_| FetchError::InvalidUrl(url.to_string()))?;

        let response = self.client.get(parsed)
            .send()
            .map_err(map_reqwest_error)?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        // Redirects may have moved us; relative links resolve against the final URL.
        let final_url = response.url().clone();
        let body = response.text().map_err(map_reqwest_error)?;
        debug!("Fetched {} bytes from {}", body.len(), final_url);

        Ok(Page::parse(final_url, &body))
    }
}

fn map_reqwest_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Http(e.to_string())
    }
}
