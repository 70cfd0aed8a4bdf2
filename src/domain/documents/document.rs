use chrono::{DateTime, Utc};
use uuid::Uuid;

/// One timestamped snapshot of editable content. Snapshots sharing an `id`
/// form the version history of a single logical document, ordered oldest to
/// newest by `created_at` (external-store convention).
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Creation timestamp of the snapshot at `index`, if there is one.
pub fn timestamp_at(documents: &[Document], index: usize) -> Option<DateTime<Utc>> {
    documents.get(index).map(|d| d.created_at)
}

/// Subsequence of snapshots created strictly after `target`.
///
/// This is the optimistic shape of the version list after a restore to
/// `target`: everything newer than the restored snapshot is assumed
/// superseded, the restored one and older ones remain current history.
pub fn versions_newer_than(documents: &[Document], target: DateTime<Utc>) -> Vec<Document> {
    documents
        .iter()
        .filter(|d| d.created_at > target)
        .cloned()
        .collect()
}
