//! The post editor: owns the draft form and orchestrates submit.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, error, warn};

use crate::application::error::SubmitError;
use crate::application::form::{DraftForm, DraftValues, FormSubscription};
use crate::application::stores::{
    CreatePostParams, FileStore, Navigator, PostStore, UpdatePostParams,
};
use crate::config::EditorConfig;
use crate::domain::entities::{CurrentUser, PostRecord};
use crate::presentation::views::PostFormView;

/// One post-editing session: a draft form bound to the backend contracts.
///
/// Construct with `Some(record)` to edit an existing post or `None` to
/// create one. The title-to-slug binding is installed for the editor's
/// lifetime and torn down when the editor drops.
pub struct PostEditor {
    files: Arc<dyn FileStore>,
    posts: Arc<dyn PostStore>,
    navigator: Arc<dyn Navigator>,
    config: EditorConfig,
    existing: Option<PostRecord>,
    form: Mutex<DraftForm>,
    in_flight: AtomicBool,
    _slug_binding: FormSubscription,
}

impl PostEditor {
    pub fn new(
        files: Arc<dyn FileStore>,
        posts: Arc<dyn PostStore>,
        navigator: Arc<dyn Navigator>,
        config: EditorConfig,
        existing: Option<PostRecord>,
    ) -> Self {
        let form = DraftForm::new(existing.as_ref());
        let slug_binding = form.bind_derived_slug();
        Self {
            files,
            posts,
            navigator,
            config,
            existing,
            form: Mutex::new(form),
            in_flight: AtomicBool::new(false),
            _slug_binding: slug_binding,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.existing.is_some()
    }

    pub fn existing(&self) -> Option<&PostRecord> {
        self.existing.as_ref()
    }

    /// Mutate the draft form (keystrokes, selections).
    pub fn update_form<R>(&self, update: impl FnOnce(&mut DraftForm) -> R) -> R {
        let mut form = self.form.lock().unwrap_or_else(PoisonError::into_inner);
        update(&mut form)
    }

    /// Snapshot the current draft values.
    pub fn draft(&self) -> DraftValues {
        self.form
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
    }

    /// Build the renderable view of the form in its current state.
    pub fn view(&self) -> PostFormView {
        let form = self.form.lock().unwrap_or_else(PoisonError::into_inner);
        PostFormView::new(&form, self.existing.as_ref(), self.files.as_ref())
    }

    /// Persist the draft. This is the single error boundary of the submit
    /// sequence: every failure is logged here and swallowed, leaving the form
    /// usable. Success is observable only through the navigation request.
    ///
    /// While a submission is in flight, further calls are rejected with a
    /// warning (configurable through
    /// [`EditorConfig::guard_duplicate_submits`]).
    pub async fn submit(&self, user: &CurrentUser) {
        if self.config.guard_duplicate_submits
            && self
                .in_flight
                .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
                .is_err()
        {
            warn!("a submission is already in flight; ignoring duplicate submit");
            return;
        }

        let outcome = self.try_submit(user).await;
        self.in_flight.store(false, Ordering::SeqCst);

        match outcome {
            Ok(Some(id)) => debug!(post_id = %id, "post persisted; navigation requested"),
            Ok(None) => debug!("store returned no post; staying on the form"),
            Err(err) => {
                let cause = std::error::Error::source(&err)
                    .map(ToString::to_string)
                    .unwrap_or_default();
                error!(
                    step = err.step(),
                    error = %err,
                    cause = %cause,
                    "submit failed; form remains editable"
                );
            }
        }
    }

    /// The submit sequence proper: optional upload, optional stale-image
    /// cleanup, create-or-update, then navigation. Steps run strictly one
    /// after another; the first failure aborts the rest.
    ///
    /// Returns the persisted post id when the store produced a navigable
    /// post. An uploaded file is not removed when a later step fails; the
    /// backend owns orphan cleanup.
    pub async fn try_submit(&self, user: &CurrentUser) -> Result<Option<String>, SubmitError> {
        let values = self.draft();

        let mut uploaded: Option<String> = None;
        if let Some(image) = values.image.as_ref() {
            let stored = self
                .files
                .upload_file(image)
                .await
                .map_err(SubmitError::Upload)?;
            debug!(file_id = %stored.id, filename = %image.filename, "featured image uploaded");
            uploaded = Some(stored.id);

            if let Some(previous) = self
                .existing
                .as_ref()
                .and_then(|post| post.featured_image.as_deref())
            {
                self.files
                    .delete_file(previous)
                    .await
                    .map_err(SubmitError::Cleanup)?;
                debug!(file_id = %previous, "stale featured image deleted");
            }
        }

        let persisted = match self.existing.as_ref() {
            Some(post) => {
                let featured_image = uploaded.or_else(|| post.featured_image.clone());
                self.posts
                    .update_post(
                        &post.id,
                        UpdatePostParams {
                            title: values.title,
                            slug: values.slug,
                            content: values.content,
                            status: values.status,
                            featured_image,
                        },
                    )
                    .await
                    .map_err(SubmitError::Persist)?
            }
            None => self
                .posts
                .create_post(CreatePostParams {
                    title: values.title,
                    slug: values.slug,
                    content: values.content,
                    status: values.status,
                    featured_image: uploaded,
                    user_id: user.id.clone(),
                })
                .await
                .map_err(SubmitError::Persist)?,
        };

        Ok(persisted.map(|post| {
            self.navigator.go_to(&self.config.detail_path(&post.id));
            post.id
        }))
    }
}
