use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::documents::document::Document;

#[async_trait]
pub trait DocumentEndpoint: Send + Sync {
    /// Requests that the document's current state be reset to the snapshot
    /// taken at `timestamp`. Returns the updated version list.
    async fn restore(
        &self,
        document_id: Uuid,
        timestamp: DateTime<Utc>,
    ) -> anyhow::Result<Vec<Document>>;
}
