use crate::scraper::ScraperError;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;

/// Where page bodies come from. The pagination loop only ever asks for one
/// page at a time.
pub trait PageSource {
    fn fetch_html(&self, url: &str) -> Result<String, ScraperError>;
}

pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        Ok(Self { client })
    }
}

impl PageSource for HttpSource {
    fn fetch_html(&self, url: &str) -> Result<String, ScraperError> {
        let resp = self.client.get(url).send()?;
        check_status(resp.status(), url)?;

        Ok(resp.text()?)
    }
}

/// 403 and 429 mean the site is refusing us; any other non-2xx is a plain
/// network failure.
pub fn check_status(status: StatusCode, url: &str) -> Result<(), ScraperError> {
    if status == StatusCode::FORBIDDEN || status == StatusCode::TOO_MANY_REQUESTS {
        return Err(ScraperError::Blocked(format!("HTTP {status} for {url}")));
    }
    if !status.is_success() {
        return Err(ScraperError::Network(format!("HTTP {status} for {url}")));
    }
    Ok(())
}
