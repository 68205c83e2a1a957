//! HTTP client for network-based seat server calls

use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use shared::client::{CancelRequest, FaceUploadResponse, UpdateTableRequest, UsageCheckResponse};
use shared::models::TableSnapshot;

use crate::{ClientConfig, ClientError, ClientResult, SeatRepository};

/// Seat repository backed by the seat server's HTTP services
#[derive(Debug, Clone)]
pub struct HttpSeatRepository {
    client: Client,
    config: ClientConfig,
}

impl HttpSeatRepository {
    /// Create a new client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fail on a non-success status, otherwise return the body text.
    async fn checked_text(response: reqwest::Response) -> ClientResult<String> {
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), body = %text, "Seat server rejected request");
            return Err(ClientError::from_status(status.as_u16(), text));
        }
        Ok(text)
    }

    async fn handle_json<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let text = Self::checked_text(response).await?;
        serde_json::from_str(&text)
            .map_err(|e| ClientError::InvalidResponse(format!("JSON parse error: {e}")))
    }

    async fn post_json<B: serde::Serialize + Sync>(&self, url: String, body: &B) -> ClientResult<()> {
        let response = self.client.post(&url).json(body).send().await?;
        Self::checked_text(response).await.map(|_| ())
    }
}

#[async_trait]
impl SeatRepository for HttpSeatRepository {
    async fn fetch_tables(&self) -> ClientResult<Vec<TableSnapshot>> {
        let url = format!("{}/all_tables", self.config.tables_url);
        let response = self.client.get(&url).send().await?;
        let text = Self::checked_text(response).await?;
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        // A non-object element is dropped rather than failing the whole list.
        let items: Option<Vec<serde_json::Value>> = serde_json::from_str(&text)
            .map_err(|e| ClientError::InvalidResponse(format!("table list: {e}")))?;
        let tables: Vec<TableSnapshot> = items
            .unwrap_or_default()
            .into_iter()
            .filter_map(|v| serde_json::from_value(v).ok())
            .collect();
        tracing::debug!(count = tables.len(), "Fetched tables");
        Ok(tables)
    }

    async fn update_table(&self, request: &UpdateTableRequest) -> ClientResult<()> {
        let url = format!("{}/updateTable", self.config.update_url);
        self.post_json(url, request).await?;
        tracing::info!(table_id = request.table_id, "Table updated");
        Ok(())
    }

    async fn check_usage(&self, user_id: &str) -> ClientResult<UsageCheckResponse> {
        let url = format!("{}/checkUserUsage", self.config.usage_url);
        let response = self
            .client
            .get(&url)
            .query(&[("user_id", user_id)])
            .send()
            .await?;
        Self::handle_json(response).await
    }

    async fn cancel(&self, request: &CancelRequest) -> ClientResult<()> {
        let url = format!("{}/{}", self.config.usage_url, request.path());
        self.post_json(url, request).await?;
        tracing::info!(path = request.path(), table_id = request.table_id(), "Cancellation accepted");
        Ok(())
    }

    async fn upload_face(&self, jpeg: Vec<u8>) -> ClientResult<FaceUploadResponse> {
        let url = format!("{}/uploadFace", self.config.face_url);
        let part = Part::bytes(jpeg)
            .file_name("face.jpg")
            .mime_str("image/jpeg")?;
        let form = Form::new().part("faceImage", part);
        let response = self.client.post(&url).multipart(form).send().await?;
        Self::handle_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let repo = HttpSeatRepository::new(&ClientConfig::default()).unwrap();
        assert_eq!(repo.config().tables_url, "http://127.0.0.1:5002");
    }
}
