//! Contracts describing the remote backend collaborators.
//!
//! The editor is a pure client of these traits; hosts implement them over
//! their backend SDK. All methods surface failures as [`StoreError`] so the
//! submit orchestrator can funnel them to its single error boundary.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use url::Url;

use crate::domain::entities::{PostRecord, StoredFile};
use crate::domain::types::PostStatus;
use crate::domain::uploads::ImageFile;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("backend error: {0}")]
    Backend(String),
    #[error("resource not found")]
    NotFound,
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}

impl StoreError {
    pub fn from_backend(err: impl std::fmt::Display) -> Self {
        Self::Backend(err.to_string())
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatePostParams {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub status: PostStatus,
    pub featured_image: Option<String>,
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdatePostParams {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub status: PostStatus,
    pub featured_image: Option<String>,
}

/// File hosting contract for featured images.
#[async_trait]
pub trait FileStore: Send + Sync {
    async fn upload_file(&self, file: &ImageFile) -> Result<StoredFile, StoreError>;

    async fn delete_file(&self, id: &str) -> Result<(), StoreError>;

    /// Build a browser-renderable preview URL for a stored file. Pure URL
    /// construction; no request is made.
    fn file_preview_url(&self, id: &str) -> Url;
}

/// Persistence contract for posts.
///
/// A `None` result means the backend did not produce a navigable post; the
/// orchestrator treats that as "stay on the form", not as an error.
#[async_trait]
pub trait PostStore: Send + Sync {
    async fn create_post(&self, params: CreatePostParams)
    -> Result<Option<PostRecord>, StoreError>;

    async fn update_post(
        &self,
        id: &str,
        params: UpdatePostParams,
    ) -> Result<Option<PostRecord>, StoreError>;
}

/// Route change requested after a successful persist.
pub trait Navigator: Send + Sync {
    fn go_to(&self, path: &str);
}
