use async_trait::async_trait;
use futures_util::future::BoxFuture;
use uuid::Uuid;

use crate::domain::documents::document::Document;

/// Pending server result a mutation reconciles against.
pub type PendingVersions = BoxFuture<'static, anyhow::Result<Vec<Document>>>;

/// External cache holding document version lists, keyed by the
/// document-by-id endpoint address. Passed into the footer explicitly so the
/// restore path stays testable in isolation.
#[async_trait]
pub trait VersionStore: Send + Sync {
    /// Applies `optimistic` under `key` immediately, awaits `pending`, then
    /// commits the resolved value and marks the entry stale so readers
    /// revalidate. On failure the prior value is restored and the error
    /// propagated.
    async fn mutate(
        &self,
        key: &str,
        pending: PendingVersions,
        optimistic: Vec<Document>,
    ) -> anyhow::Result<Vec<Document>>;

    async fn read(&self, key: &str) -> Option<Vec<Document>>;
}

/// Cache key for a document's version list. Doubles as the endpoint path of
/// the document-by-id resource.
pub fn document_cache_key(document_id: Uuid) -> String {
    format!(
        "/api/document?id={}",
        urlencoding::encode(&document_id.to_string())
    )
}
