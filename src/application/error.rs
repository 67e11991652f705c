use thiserror::Error;

use crate::application::stores::StoreError;

/// Failures along the submit sequence, labelled by the step that raised them.
///
/// All variants are caught at the single boundary in
/// [`PostEditor::submit`](crate::application::editor::PostEditor::submit),
/// logged, and swallowed; none abort the form session.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("featured image upload failed")]
    Upload(#[source] StoreError),
    #[error("stale featured image cleanup failed")]
    Cleanup(#[source] StoreError),
    #[error("post persistence failed")]
    Persist(#[source] StoreError),
}

impl SubmitError {
    /// The submit step this error belongs to, for structured log fields.
    pub fn step(&self) -> &'static str {
        match self {
            SubmitError::Upload(_) => "upload",
            SubmitError::Cleanup(_) => "cleanup",
            SubmitError::Persist(_) => "persist",
        }
    }
}
