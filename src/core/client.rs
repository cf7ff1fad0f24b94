use crate::domain::model::{IdSelector, Measurable};
use crate::domain::ports::Transport;
use crate::utils::error::Result;
use crate::utils::validation::check_is_id_selector;

/// Client for the measurable endpoints of the remote service.
///
/// Thin façade: every operation maps onto exactly one HTTP request under
/// `{base_api_url}/measurable` and resolves to the decoded body. No caching,
/// no retries; calls are independent and may run concurrently.
pub struct MeasurableClient<T: Transport> {
    transport: T,
    base_url: String,
}

impl<T: Transport> MeasurableClient<T> {
    pub fn new(transport: T, base_api_url: &str) -> Self {
        Self {
            transport,
            base_url: format!("{}/measurable", base_api_url.trim_end_matches('/')),
        }
    }

    pub async fn find_all(&self) -> Result<Vec<Measurable>> {
        let body = self.transport.get(&format!("{}/all", self.base_url)).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Resolves to `None` when the server answers with a JSON `null` body.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Measurable>> {
        let body = self
            .transport
            .get(&format!("{}/id/{}", self.base_url, id))
            .await?;
        if body.is_null() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_value(body)?))
    }

    pub async fn find_by_external_id(&self, ext_id: &str) -> Result<Vec<Measurable>> {
        let body = self
            .transport
            .get(&format!("{}/external-id/{}", self.base_url, ext_id))
            .await?;
        Ok(serde_json::from_value(body)?)
    }

    pub async fn find_measurables_by_selector(
        &self,
        options: &IdSelector,
    ) -> Result<Vec<Measurable>> {
        self.post_selector("measurable-selector", options).await
    }

    /// Hierarchy of directly related measurables for the selector.
    pub async fn find_hierarchy_for_direct_selector(
        &self,
        options: &IdSelector,
    ) -> Result<Vec<Measurable>> {
        self.post_selector("hierarchy/direct-selector", options).await
    }

    /// Hierarchy of measurables related via applications for the selector.
    pub async fn find_hierarchy_for_indirect_selector(
        &self,
        options: &IdSelector,
    ) -> Result<Vec<Measurable>> {
        self.post_selector("hierarchy/indirect-selector", options).await
    }

    /// Server-side relevance search. The query is embedded in the path
    /// verbatim; any percent-encoding is the caller's responsibility.
    pub async fn search(&self, query: &str) -> Result<Vec<Measurable>> {
        let body = self
            .transport
            .get(&format!("{}/search/{}", self.base_url, query))
            .await?;
        Ok(serde_json::from_value(body)?)
    }

    async fn post_selector(&self, path: &str, options: &IdSelector) -> Result<Vec<Measurable>> {
        check_is_id_selector(options)?;
        let body = serde_json::to_value(options)?;
        let response = self
            .transport
            .post(&format!("{}/{}", self.base_url, path), &body)
            .await?;
        Ok(serde_json::from_value(response)?)
    }
}
