use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::version_store::{PendingVersions, VersionStore};
use crate::domain::documents::document::Document;

#[derive(Debug, Clone)]
struct CacheEntry {
    versions: Vec<Document>,
    stale: bool,
}

/// In-memory optimistic cache for document version lists.
///
/// `mutate` swaps the predicted value in right away, then reconciles with
/// the server result: commit and mark stale on success, roll back to the
/// previous value on failure.
#[derive(Default)]
pub struct MemoryVersionStore {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl MemoryVersionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a key the way the surrounding editor does after fetching the
    /// version list.
    pub async fn seed(&self, key: &str, versions: Vec<Document>) {
        self.entries.write().await.insert(
            key.to_string(),
            CacheEntry {
                versions,
                stale: false,
            },
        );
    }

    /// Whether the entry awaits revalidation by its next reader.
    pub async fn is_stale(&self, key: &str) -> bool {
        self.entries
            .read()
            .await
            .get(key)
            .map(|e| e.stale)
            .unwrap_or(false)
    }
}

#[async_trait]
impl VersionStore for MemoryVersionStore {
    async fn mutate(
        &self,
        key: &str,
        pending: PendingVersions,
        optimistic: Vec<Document>,
    ) -> anyhow::Result<Vec<Document>> {
        let previous = self.entries.write().await.insert(
            key.to_string(),
            CacheEntry {
                versions: optimistic,
                stale: false,
            },
        );

        match pending.await {
            Ok(resolved) => {
                self.entries.write().await.insert(
                    key.to_string(),
                    CacheEntry {
                        versions: resolved.clone(),
                        stale: true,
                    },
                );
                Ok(resolved)
            }
            Err(err) => {
                let mut entries = self.entries.write().await;
                match previous {
                    Some(entry) => {
                        entries.insert(key.to_string(), entry);
                    }
                    None => {
                        entries.remove(key);
                    }
                }
                Err(err)
            }
        }
    }

    async fn read(&self, key: &str) -> Option<Vec<Document>> {
        self.entries
            .read()
            .await
            .get(key)
            .map(|e| e.versions.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};
    use tokio::sync::oneshot;
    use uuid::Uuid;

    use super::*;

    fn history(len: usize) -> Vec<Document> {
        let id = Uuid::new_v4();
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
    async fn optimistic_value_is_visible_while_pending() {
        let store = Arc::new(MemoryVersionStore::new());
        let docs = history(4);
        store.seed("k", docs.clone()).await;

        let (release, gate) = oneshot::channel::<()>();
        let resolved = vec![docs[2].clone(), docs[3].clone()];
        let server_value = resolved.clone();
        let pending: PendingVersions = Box::pin(async move {
            gate.await.ok();
            Ok(server_value)
        });

        let mutating = {
            let store = store.clone();
            let optimistic = resolved.clone();
            tokio::spawn(async move { store.mutate("k", pending, optimistic).await })
        };
        // Let the mutation apply its prediction before the gate opens.
        tokio::task::yield_now().await;

        assert_eq!(store.read("k").await, Some(resolved.clone()));
        assert!(!store.is_stale("k").await);

        release.send(()).unwrap();
        let committed = mutating.await.unwrap().unwrap();

        assert_eq!(committed, resolved);
        assert_eq!(store.read("k").await, Some(resolved));
        assert!(store.is_stale("k").await);
    }

    #[tokio::test]
    async fn failed_mutation_rolls_back_to_previous_value() {
        let store = MemoryVersionStore::new();
        let docs = history(3);
        store.seed("k", docs.clone()).await;

        let pending: PendingVersions =
            Box::pin(async move { Err(anyhow::anyhow!("upstream returned status 500")) });
        let err = store
            .mutate("k", pending, vec![docs[2].clone()])
            .await
            .unwrap_err();

        assert!(err.to_string().contains("500"));
        assert_eq!(store.read("k").await, Some(docs));
        assert!(!store.is_stale("k").await);
    }

    #[tokio::test]
    async fn failed_mutation_on_an_unseeded_key_leaves_no_entry() {
        let store = MemoryVersionStore::new();
        let pending: PendingVersions = Box::pin(async move { Err(anyhow::anyhow!("boom")) });

        store.mutate("k", pending, history(1)).await.unwrap_err();

        assert_eq!(store.read("k").await, None);
    }
}
