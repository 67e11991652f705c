//! View structs and template for the post form.

use askama::Template;

use crate::application::form::{DraftForm, Field};
use crate::application::stores::FileStore;
use crate::domain::entities::PostRecord;
use crate::domain::types::PostStatus;
use crate::domain::uploads::accept_attribute;

#[derive(Debug, Clone)]
pub struct TextFieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: String,
    pub required: bool,
}

#[derive(Debug, Clone)]
pub struct StatusOptionView {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone)]
pub struct StatusFieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub options: Vec<StatusOptionView>,
}

#[derive(Debug, Clone)]
pub struct ImageFieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub accept: String,
}

#[derive(Debug, Clone)]
pub struct PreviewImageView {
    pub url: String,
    pub alt: String,
}

/// Renderable state of the whole form.
#[derive(Debug, Clone)]
pub struct PostFormView {
    pub heading: &'static str,
    pub submit_label: &'static str,
    pub title: TextFieldView,
    pub slug: TextFieldView,
    pub content: TextFieldView,
    pub status: StatusFieldView,
    pub image: ImageFieldView,
    pub preview: Option<PreviewImageView>,
}

impl PostFormView {
    /// Project the current form state into view structs. The preview image
    /// appears only when editing a post that already has a stored featured
    /// image; its URL comes from the file storage contract.
    pub fn new(form: &DraftForm, existing: Option<&PostRecord>, files: &dyn FileStore) -> Self {
        let editing = existing.is_some();

        let preview = existing.and_then(|post| {
            post.featured_image.as_deref().map(|id| PreviewImageView {
                url: files.file_preview_url(id).to_string(),
                alt: post.title.clone(),
            })
        });

        let status_options = PostStatus::ALL
            .iter()
            .map(|status| StatusOptionView {
                value: status.as_str(),
                label: status.label(),
                selected: *status == form.status(),
            })
            .collect();

        Self {
            heading: if editing { "Edit post" } else { "New post" },
            submit_label: if editing { "Update" } else { "Submit" },
            title: TextFieldView {
                name: Field::Title.as_str(),
                label: "Title :",
                placeholder: "Title",
                value: form.title().to_string(),
                required: form.field_state(Field::Title).required,
            },
            slug: TextFieldView {
                name: Field::Slug.as_str(),
                label: "Slug :",
                placeholder: "Slug",
                value: form.slug().to_string(),
                required: form.field_state(Field::Slug).required,
            },
            content: TextFieldView {
                name: Field::Content.as_str(),
                label: "Content :",
                placeholder: "",
                value: form.content().to_string(),
                required: form.field_state(Field::Content).required,
            },
            status: StatusFieldView {
                name: Field::Status.as_str(),
                label: "Status",
                required: form.field_state(Field::Status).required,
                options: status_options,
            },
            image: ImageFieldView {
                name: Field::Image.as_str(),
                label: "Featured Image :",
                required: form.field_state(Field::Image).required,
                accept: accept_attribute(),
            },
            preview,
        }
    }
}

#[derive(Template)]
#[template(path = "post_form.html")]
pub struct PostFormTemplate {
    pub view: PostFormView,
}
