//! Domain entities mirrored from the remote backend.

use serde::Serialize;
use time::OffsetDateTime;

use crate::domain::types::PostStatus;

/// A post as stored by the backend. Read-only to the editor except through
/// the update contract; identifiers are opaque strings assigned remotely.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostRecord {
    pub id: String,
    pub title: String,
    pub content: String,
    pub status: PostStatus,
    pub featured_image: Option<String>,
    pub user_id: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// The authenticated user on whose behalf a post is created.
///
/// Passed explicitly into the submit path; the editor never reads ambient
/// session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentUser {
    pub id: String,
}

impl CurrentUser {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Handle returned by the file storage service after an upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredFile {
    pub id: String,
}
