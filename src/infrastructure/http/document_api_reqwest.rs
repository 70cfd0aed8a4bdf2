use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::ports::document_endpoint::DocumentEndpoint;
use crate::application::ports::version_store::document_cache_key;
use crate::domain::documents::document::Document;

#[derive(Debug, Serialize)]
struct RestoreRequestBody {
    timestamp: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct DocumentPayload {
    id: Uuid,
    title: String,
    content: String,
    created_at: DateTime<Utc>,
}

impl From<DocumentPayload> for Document {
    fn from(p: DocumentPayload) -> Self {
        Document {
            id: p.id,
            title: p.title,
            content: p.content,
            created_at: p.created_at,
        }
    }
}

/// Restore adapter for the document endpoint: a partial update addressed by
/// document id via query parameter, carrying the target timestamp.
pub struct ReqwestDocumentApi {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestDocumentApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn restore_url(&self, document_id: Uuid) -> String {
        // The cache key is the endpoint path of the same resource.
        format!("{}{}", self.base_url, document_cache_key(document_id))
    }
}

#[async_trait]
impl DocumentEndpoint for ReqwestDocumentApi {
    async fn restore(
        &self,
        document_id: Uuid,
        timestamp: DateTime<Utc>,
    ) -> anyhow::Result<Vec<Document>> {
        let resp = self
            .client
            .patch(self.restore_url(document_id))
            .json(&RestoreRequestBody { timestamp })
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("request failed: {e}"))?;
        if !resp.status().is_success() {
            anyhow::bail!("document endpoint returned status {}", resp.status());
        }
        let payload: Vec<DocumentPayload> = resp
            .json()
            .await
            .map_err(|e| anyhow::anyhow!("failed to decode body: {e}"))?;
        Ok(payload.into_iter().map(Document::from).collect())
    }
}
