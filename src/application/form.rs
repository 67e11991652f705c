//! Draft form state: field values, registration, validation, and the
//! reactive binding that keeps the slug derived from the title.
//!
//! Every mutation goes through a validating write so field-level validation
//! state is refreshed on each keystroke. Watchers observe direct writes and
//! may answer with a follow-up write; follow-ups run through the same
//! validating path but do not notify watchers again, which keeps the
//! title-to-slug derivation a single deterministic hop.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, Weak};

use tracing::debug;

use crate::domain::entities::PostRecord;
use crate::domain::slug::slug_from_optional;
use crate::domain::types::PostStatus;
use crate::domain::uploads::ImageFile;

/// Form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Slug,
    Content,
    Status,
    Image,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Title,
        Field::Slug,
        Field::Content,
        Field::Status,
        Field::Image,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Slug => "slug",
            Field::Content => "content",
            Field::Status => "status",
            Field::Image => "image",
        }
    }
}

/// Registration and validation state for a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldState {
    pub required: bool,
    pub valid: bool,
}

/// A direct field write observed by watchers. `text` carries the new value
/// for text-like fields; image selections expose no text.
#[derive(Debug, Clone)]
pub struct FieldChange {
    pub field: Field,
    pub text: Option<String>,
}

/// A value write addressed to one field.
#[derive(Debug, Clone)]
pub enum FieldWrite {
    Title(String),
    Slug(String),
    Content(String),
    Status(PostStatus),
    Image(Option<ImageFile>),
}

impl FieldWrite {
    pub fn field(&self) -> Field {
        match self {
            FieldWrite::Title(_) => Field::Title,
            FieldWrite::Slug(_) => Field::Slug,
            FieldWrite::Content(_) => Field::Content,
            FieldWrite::Status(_) => Field::Status,
            FieldWrite::Image(_) => Field::Image,
        }
    }
}

type Watcher = Box<dyn FnMut(&FieldChange) -> Option<FieldWrite> + Send>;

#[derive(Default)]
struct WatcherRegistry {
    next_id: u64,
    entries: Vec<(u64, Watcher)>,
}

/// Detaches its watcher from the form when dropped.
///
/// Holding the subscription scopes the binding to the owning component's
/// lifetime; dropping it is the deterministic teardown, after which further
/// field writes no longer reach the watcher.
pub struct FormSubscription {
    id: u64,
    registry: Weak<Mutex<WatcherRegistry>>,
}

impl Drop for FormSubscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade()
            && let Ok(mut registry) = registry.lock()
        {
            registry.entries.retain(|(id, _)| *id != self.id);
        }
    }
}

/// Snapshot of the current field values, taken at submit time.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftValues {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub status: PostStatus,
    pub image: Option<ImageFile>,
}

/// In-memory, unsaved form state for a post.
pub struct DraftForm {
    title: String,
    slug: String,
    content: String,
    status: PostStatus,
    image: Option<ImageFile>,
    fields: HashMap<Field, FieldState>,
    watchers: Arc<Mutex<WatcherRegistry>>,
}

impl DraftForm {
    /// Seed a draft from an existing record (edit) or defaults (create).
    ///
    /// When editing, the slug field seeds from the record identifier, which
    /// the backend assigned from the slug at creation time. The image field
    /// is required only when creating; an edited post may already carry a
    /// stored featured image.
    pub fn new(existing: Option<&PostRecord>) -> Self {
        let mut form = Self {
            title: existing.map(|post| post.title.clone()).unwrap_or_default(),
            slug: existing.map(|post| post.id.clone()).unwrap_or_default(),
            content: existing.map(|post| post.content.clone()).unwrap_or_default(),
            status: existing.map(|post| post.status).unwrap_or_default(),
            image: None,
            fields: HashMap::new(),
            watchers: Arc::new(Mutex::new(WatcherRegistry::default())),
        };

        form.register(Field::Title, true);
        form.register(Field::Slug, true);
        form.register(Field::Content, false);
        form.register(Field::Status, true);
        form.register(Field::Image, existing.is_none());

        form
    }

    fn register(&mut self, field: Field, required: bool) {
        self.fields.insert(
            field,
            FieldState {
                required,
                valid: true,
            },
        );
        self.revalidate(field);
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn status(&self) -> PostStatus {
        self.status
    }

    pub fn image(&self) -> Option<&ImageFile> {
        self.image.as_ref()
    }

    pub fn field_state(&self, field: Field) -> FieldState {
        self.fields.get(&field).copied().unwrap_or(FieldState {
            required: false,
            valid: true,
        })
    }

    pub fn is_valid(&self) -> bool {
        Field::ALL.iter().all(|field| self.field_state(*field).valid)
    }

    /// Snapshot the current values for the submit path.
    pub fn values(&self) -> DraftValues {
        DraftValues {
            title: self.title.clone(),
            slug: self.slug.clone(),
            content: self.content.clone(),
            status: self.status,
            image: self.image.clone(),
        }
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.apply(FieldWrite::Title(value.into()), true);
    }

    pub fn set_slug(&mut self, value: impl Into<String>) {
        self.apply(FieldWrite::Slug(value.into()), true);
    }

    pub fn set_content(&mut self, value: impl Into<String>) {
        self.apply(FieldWrite::Content(value.into()), true);
    }

    pub fn set_status(&mut self, status: PostStatus) {
        self.apply(FieldWrite::Status(status), true);
    }

    pub fn set_image(&mut self, image: Option<ImageFile>) {
        self.apply(FieldWrite::Image(image), true);
    }

    /// Register a watcher over direct field writes.
    ///
    /// The watcher may answer a change with a follow-up write, which is
    /// applied through the validating path without re-notifying watchers.
    pub fn watch(&self, watcher: Watcher) -> FormSubscription {
        let id = match self.watchers.lock() {
            Ok(mut registry) => {
                let id = registry.next_id;
                registry.next_id += 1;
                registry.entries.push((id, watcher));
                id
            }
            // A watcher panicked mid-notify; leave the registry alone.
            Err(_) => u64::MAX,
        };
        FormSubscription {
            id,
            registry: Arc::downgrade(&self.watchers),
        }
    }

    /// Install the title-to-slug derivation binding.
    ///
    /// Every title write re-derives the slug; no other field feeds it. The
    /// returned subscription scopes the binding to the caller's lifetime.
    pub fn bind_derived_slug(&self) -> FormSubscription {
        self.watch(Box::new(|change| {
            if change.field == Field::Title {
                Some(FieldWrite::Slug(slug_from_optional(change.text.as_deref())))
            } else {
                None
            }
        }))
    }

    fn apply(&mut self, write: FieldWrite, notify: bool) {
        let field = write.field();
        match write {
            FieldWrite::Title(value) => self.title = value,
            FieldWrite::Slug(value) => self.slug = value,
            FieldWrite::Content(value) => self.content = value,
            FieldWrite::Status(status) => self.status = status,
            FieldWrite::Image(image) => self.image = image,
        }
        self.revalidate(field);

        if notify {
            self.notify(field);
        }
    }

    fn notify(&mut self, field: Field) {
        let change = FieldChange {
            field,
            text: self.text_of(field),
        };

        let follow_ups: Vec<FieldWrite> = match self.watchers.lock() {
            Ok(mut registry) => registry
                .entries
                .iter_mut()
                .filter_map(|(_, watcher)| watcher(&change))
                .collect(),
            Err(_) => Vec::new(),
        };

        for write in follow_ups {
            debug!(
                changed = field.as_str(),
                derived = write.field().as_str(),
                "applying derived field write"
            );
            self.apply(write, false);
        }
    }

    fn text_of(&self, field: Field) -> Option<String> {
        match field {
            Field::Title => Some(self.title.clone()),
            Field::Slug => Some(self.slug.clone()),
            Field::Content => Some(self.content.clone()),
            Field::Status => Some(self.status.as_str().to_string()),
            Field::Image => None,
        }
    }

    fn revalidate(&mut self, field: Field) {
        let Some(state) = self.fields.get(&field).copied() else {
            return;
        };
        let valid = if !state.required {
            true
        } else {
            match field {
                Field::Title => !self.title.trim().is_empty(),
                Field::Slug => !self.slug.trim().is_empty(),
                Field::Content => !self.content.trim().is_empty(),
                Field::Status => true,
                Field::Image => self.image.is_some(),
            }
        };
        if let Some(entry) = self.fields.get_mut(&field) {
            entry.valid = valid;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use bytes::Bytes;
    use time::macros::datetime;

    use super::*;

    fn sample_post() -> PostRecord {
        PostRecord {
            id: "getting-started".to_string(),
            title: "Getting Started".to_string(),
            content: "Welcome aboard.".to_string(),
            status: PostStatus::Active,
            featured_image: Some("file-1".to_string()),
            user_id: "user-1".to_string(),
            created_at: datetime!(2025-01-01 00:00 UTC),
            updated_at: datetime!(2025-01-02 00:00 UTC),
        }
    }

    #[test]
    fn create_mode_requires_title_slug_status_and_image() {
        let form = DraftForm::new(None);
        assert!(form.field_state(Field::Title).required);
        assert!(form.field_state(Field::Slug).required);
        assert!(form.field_state(Field::Status).required);
        assert!(form.field_state(Field::Image).required);
        assert!(!form.field_state(Field::Content).required);

        assert!(!form.field_state(Field::Title).valid);
        assert!(!form.field_state(Field::Image).valid);
        assert!(!form.is_valid());
    }

    #[test]
    fn edit_mode_seeds_from_record_and_relaxes_image() {
        let post = sample_post();
        let form = DraftForm::new(Some(&post));

        assert_eq!(form.title(), "Getting Started");
        assert_eq!(form.slug(), "getting-started");
        assert_eq!(form.content(), "Welcome aboard.");
        assert_eq!(form.status(), PostStatus::Active);
        assert!(form.image().is_none());

        assert!(!form.field_state(Field::Image).required);
        assert!(form.is_valid());
    }

    #[test]
    fn title_writes_derive_the_slug_through_validation() {
        let mut form = DraftForm::new(None);
        let _binding = form.bind_derived_slug();

        form.set_title("Hello World!");
        assert_eq!(form.slug(), "hello-world");
        assert!(form.field_state(Field::Slug).valid);

        form.set_title("");
        assert_eq!(form.slug(), "");
        assert!(!form.field_state(Field::Slug).valid);
    }

    #[test]
    fn slug_is_never_derived_from_content_or_status() {
        let mut form = DraftForm::new(None);
        let _binding = form.bind_derived_slug();

        form.set_title("First Title");
        form.set_content("Some Body Text");
        form.set_status(PostStatus::Inactive);
        assert_eq!(form.slug(), "first-title");
    }

    #[test]
    fn dropping_the_subscription_detaches_the_binding() {
        let mut form = DraftForm::new(None);
        let binding = form.bind_derived_slug();

        form.set_title("Before Teardown");
        assert_eq!(form.slug(), "before-teardown");

        drop(binding);
        form.set_title("After Teardown");
        assert_eq!(form.slug(), "before-teardown");
    }

    #[test]
    fn derived_writes_do_not_renotify_watchers() {
        let mut form = DraftForm::new(None);
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        let _probe = form.watch(Box::new(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
            None
        }));
        let _binding = form.bind_derived_slug();

        form.set_title("One Write");
        // The probe observes the direct title write only, not the derived
        // slug write.
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn selecting_an_image_satisfies_the_create_requirement() {
        let mut form = DraftForm::new(None);
        assert!(!form.field_state(Field::Image).valid);

        form.set_image(Some(ImageFile::new("cover.png", Bytes::from_static(b"x"))));
        assert!(form.field_state(Field::Image).valid);

        form.set_image(None);
        assert!(!form.field_state(Field::Image).valid);
    }
}
