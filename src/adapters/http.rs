use crate::domain::ports::Transport;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

/// reqwest-backed [`Transport`]. Non-2xx statuses and body decode failures
/// surface as errors; timeout policy comes from the underlying `Client`.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Wrap a preconfigured client (custom timeouts, proxies, headers).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<Value> {
        tracing::debug!("Making API request to: GET {}", url);
        let response = self.client.get(url).send().await?;
        tracing::debug!("API response status: {}", response.status());
        let response = response.error_for_status()?;
        Ok(response.json().await?)
    }

    async fn post(&self, url: &str, body: &Value) -> Result<Value> {
        tracing::debug!("Making API request to: POST {}", url);
        let response = self.client.post(url).json(body).send().await?;
        tracing::debug!("API response status: {}", response.status());
        let response = response.error_for_status()?;
        Ok(response.json().await?)
    }
}
