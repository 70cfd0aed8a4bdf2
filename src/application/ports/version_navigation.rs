use std::sync::Arc;

/// Intent sent to the version-history navigation owned by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionChange {
    Next,
    Prev,
    Toggle,
    Latest,
}

/// Caller-supplied navigation callback. The footer only ever sends
/// [`VersionChange::Latest`].
pub type VersionChangeHandler = Arc<dyn Fn(VersionChange) + Send + Sync>;
