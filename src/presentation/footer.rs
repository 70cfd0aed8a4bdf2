use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::application::ports::version_navigation::VersionChangeHandler;
use crate::application::use_cases::versions::back_to_latest::BackToLatest;
use crate::application::use_cases::versions::restore_version::RestoreVersion;
use crate::domain::documents::document::{self, Document};
use crate::presentation::motion::SlideTransition;
use crate::presentation::viewport::Viewport;

/// Editable-unit descriptor the footer is rendered for.
#[derive(Debug, Clone)]
pub struct UiBlock {
    pub document_id: Uuid,
    pub title: String,
}

/// Render state of one footer control.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonView {
    pub label: &'static str,
    pub disabled: bool,
    pub busy: bool,
}

/// What the footer asks the renderer to draw. Absent documents produce no
/// view at all.
#[derive(Debug, Clone, PartialEq)]
pub struct FooterView {
    pub heading: &'static str,
    pub subheading: &'static str,
    pub restore: ButtonView,
    pub back: ButtonView,
    pub stacked: bool,
    pub offset_y: f32,
}

/// Bottom-overlay footer shown while a historical version is on screen.
///
/// Owns nothing but the in-flight latch: the version list and index belong
/// to the store/navigation layer and arrive as props.
pub struct VersionFooter {
    block: UiBlock,
    handle_version_change: VersionChangeHandler,
    documents: Option<Vec<Document>>,
    current_version_index: usize,
    restore_version: RestoreVersion,
    restoring: Arc<AtomicBool>,
}

impl VersionFooter {
    pub fn new(
        block: UiBlock,
        handle_version_change: VersionChangeHandler,
        documents: Option<Vec<Document>>,
        current_version_index: usize,
        restore_version: RestoreVersion,
    ) -> Self {
        Self {
            block,
            handle_version_change,
            documents,
            current_version_index,
            restore_version,
            restoring: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_restoring(&self) -> bool {
        self.restoring.load(Ordering::SeqCst)
    }

    /// Starts the restore mutation for the viewed snapshot and returns the
    /// spawned reconciliation task. Returns `None` when nothing starts:
    /// missing documents, a restore already in flight, or no snapshot at the
    /// current index.
    ///
    /// The latch is released by the task itself, on success and on failure,
    /// so the control re-enables without waiting for a parent re-render.
    pub fn restore(&self) -> Option<JoinHandle<()>> {
        let documents = self.documents.as_ref()?;
        if document::timestamp_at(documents, self.current_version_index).is_none() {
            tracing::warn!(
                document_id = %self.block.document_id,
                index = self.current_version_index,
                "restore_skipped_no_snapshot_at_index"
            );
            return None;
        }
        if self.restoring.swap(true, Ordering::SeqCst) {
            return None;
        }

        let restore = self.restore_version.clone();
        let restoring = self.restoring.clone();
        let document_id = self.block.document_id;
        let documents = documents.clone();
        let index = self.current_version_index;
        Some(tokio::spawn(async move {
            if let Err(err) = restore.execute(document_id, documents, index).await {
                tracing::error!(error = ?err, %document_id, "restore_version_failed");
            }
            restoring.store(false, Ordering::SeqCst);
        }))
    }

    /// Hands control back to the navigation layer. No network, no state.
    pub fn back_to_latest(&self) {
        BackToLatest {
            handler: &self.handle_version_change,
        }
        .execute();
    }

    pub fn render(&self, viewport: Viewport, transition: &SlideTransition) -> Option<FooterView> {
        self.documents.as_ref()?;
        let restoring = self.is_restoring();
        let compact = viewport.is_compact();
        Some(FooterView {
            heading: "You are viewing a previous version",
            subheading: "Restore this version to make edits",
            restore: ButtonView {
                label: "Restore this version",
                disabled: restoring,
                busy: restoring,
            },
            back: ButtonView {
                label: "Back to latest version",
                disabled: false,
                busy: false,
            },
            stacked: compact,
            offset_y: transition.offset_y(compact),
        })
    }
}
