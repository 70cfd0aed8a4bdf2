use std::sync::Arc;

use uuid::Uuid;

use crate::application::ports::document_endpoint::DocumentEndpoint;
use crate::application::ports::version_store::{self, VersionStore};
use crate::domain::documents::document::{self, Document};

/// Issues the optimistic restore mutation for one viewed snapshot.
///
/// Holds its ports as `Arc` because the pending endpoint call is handed to
/// the store as a `'static` future.
#[derive(Clone)]
pub struct RestoreVersion {
    store: Arc<dyn VersionStore>,
    endpoint: Arc<dyn DocumentEndpoint>,
}

impl RestoreVersion {
    pub fn new(store: Arc<dyn VersionStore>, endpoint: Arc<dyn DocumentEndpoint>) -> Self {
        Self { store, endpoint }
    }

    /// Requests that the snapshot at `current_version_index` become current.
    /// The store sees the strictly-newer subsequence as the predicted
    /// interim value while the endpoint call is in flight.
    pub async fn execute(
        &self,
        document_id: Uuid,
        documents: Vec<Document>,
        current_version_index: usize,
    ) -> anyhow::Result<Vec<Document>> {
        let target = document::timestamp_at(&documents, current_version_index).ok_or_else(|| {
            anyhow::anyhow!("no snapshot at version index {current_version_index}")
        })?;
        let optimistic = document::versions_newer_than(&documents, target);
        let key = version_store::document_cache_key(document_id);

        tracing::debug!(
            %document_id,
            timestamp = %target,
            predicted = optimistic.len(),
            "issuing_restore_mutation"
        );

        let endpoint = self.endpoint.clone();
        let pending = Box::pin(async move { endpoint.restore(document_id, target).await });
        self.store.mutate(&key, pending, optimistic).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use chrono::{DateTime, TimeZone, Utc};

    use super::*;
    use crate::application::ports::version_store::PendingVersions;

    struct RecordingStore {
        seen: Mutex<Vec<(String, Vec<Document>)>>,
    }

    #[async_trait]
    impl VersionStore for RecordingStore {
        async fn mutate(
            &self,
            key: &str,
            pending: PendingVersions,
            optimistic: Vec<Document>,
        ) -> anyhow::Result<Vec<Document>> {
            self.seen
                .lock()
                .unwrap()
                .push((key.to_string(), optimistic));
            pending.await
        }

        async fn read(&self, _key: &str) -> Option<Vec<Document>> {
            None
        }
    }

    struct RecordingEndpoint {
        calls: AtomicUsize,
        last_target: Mutex<Option<DateTime<Utc>>>,
    }

    #[async_trait]
    impl DocumentEndpoint for RecordingEndpoint {
        async fn restore(
            &self,
            _document_id: Uuid,
            timestamp: DateTime<Utc>,
        ) -> anyhow::Result<Vec<Document>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_target.lock().unwrap() = Some(timestamp);
            Ok(Vec::new())
        }
    }

    fn history(id: Uuid, len: usize) -> Vec<Document> {
        (0..len as i64)
            .map(|i| Document {
                id,
                title: "note".into(),
                content: format!("rev {i}"),
                created_at: Utc.timestamp_opt(i * 60, 0).unwrap(),
            })
            .collect()
    }

    #[tokio::test]
    async fn predicts_strictly_newer_subsequence_under_document_key() {
        let store = Arc::new(RecordingStore {
            seen: Mutex::new(Vec::new()),
        });
        let endpoint = Arc::new(RecordingEndpoint {
            calls: AtomicUsize::new(0),
            last_target: Mutex::new(None),
        });
        let uc = RestoreVersion::new(store.clone(), endpoint.clone());

        let id = Uuid::new_v4();
        let docs = history(id, 4);
        uc.execute(id, docs.clone(), 1).await.unwrap();

        let seen = store.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, format!("/api/document?id={id}"));
        assert_eq!(seen[0].1, vec![docs[2].clone(), docs[3].clone()]);

        assert_eq!(endpoint.calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            *endpoint.last_target.lock().unwrap(),
            Some(docs[1].created_at)
        );
    }

    #[tokio::test]
    async fn restoring_the_newest_snapshot_predicts_an_empty_list() {
        let store = Arc::new(RecordingStore {
            seen: Mutex::new(Vec::new()),
        });
        let endpoint = Arc::new(RecordingEndpoint {
            calls: AtomicUsize::new(0),
            last_target: Mutex::new(None),
        });
        let uc = RestoreVersion::new(store.clone(), endpoint);

        let id = Uuid::new_v4();
        let docs = history(id, 3);
        uc.execute(id, docs, 2).await.unwrap();

        let seen = store.seen.lock().unwrap();
        assert!(seen[0].1.is_empty());
    }

    #[tokio::test]
    async fn out_of_range_index_fails_before_any_request() {
        let store = Arc::new(RecordingStore {
            seen: Mutex::new(Vec::new()),
        });
        let endpoint = Arc::new(RecordingEndpoint {
            calls: AtomicUsize::new(0),
            last_target: Mutex::new(None),
        });
        let uc = RestoreVersion::new(store.clone(), endpoint.clone());

        let id = Uuid::new_v4();
        let docs = history(id, 2);
        let err = uc.execute(id, docs, 5).await.unwrap_err();

        assert!(err.to_string().contains("version index 5"));
        assert!(store.seen.lock().unwrap().is_empty());
        assert_eq!(endpoint.calls.load(Ordering::SeqCst), 0);
    }
}
