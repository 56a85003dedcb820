use std::time::Duration;

use reqwest::Client;

use crate::network::errors::FetchError;

// * The HTTP engine for detail page fetches. Built once per run and shared
// * read-only across workers; connection reuse is reqwest's concern.
pub struct PageClient {
    inner: Client,
    timeout_secs: u64,
}

impl PageClient {
    // * Initializes the client with a desktop browser identity. Some catalog
    // * hosts reject the default library user agent outright.
    pub fn new(user_agent: &str, timeout_secs: u64) -> Result<Self, FetchError> {
        let inner = Client::builder()
            .user_agent(user_agent)
            .cookie_store(true)
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            inner,
            timeout_secs,
        })
    }

    // * Fetches a detail page and returns the raw body on a 2xx response.
    // * One GET per URL, no retries, no caching.
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let resp = self
            .inner
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = resp.text().await.map_err(|e| self.classify(e))?;
        Ok(body)
    }

    fn classify(&self, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout(self.timeout_secs)
        } else {
            FetchError::Transport(err)
        }
    }
}
