use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Minimal HTTP transport the client is built on.
///
/// Implementations return the decoded JSON body; a non-2xx status or a
/// decode failure is an error. Timeouts and cancellation belong to the
/// implementation, not to the callers.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<Value>;
    async fn post(&self, url: &str, body: &Value) -> Result<Value>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_api_url(&self) -> &str;
}
