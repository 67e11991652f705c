//! Upload-specific helpers and invariants.

use bytes::Bytes;

/// MIME types the featured-image picker accepts. `image/jpg` is not a
/// registered type but browsers emit it for some JPEG sources, so it stays on
/// the list.
pub const ACCEPTED_IMAGE_TYPES: &[&str] =
    &["image/png", "image/jpg", "image/jpeg", "image/gif"];

/// Render the picker's `accept` attribute value.
pub fn accept_attribute() -> String {
    ACCEPTED_IMAGE_TYPES.join(", ")
}

/// Whether the provided MIME type is an acceptable featured image.
pub fn is_accepted_image_type(content_type: &str) -> bool {
    ACCEPTED_IMAGE_TYPES.contains(&content_type)
}

/// An image selected in the form but not yet uploaded.
///
/// Held fully in memory for the lifetime of the draft; the payload is handed
/// to the file storage contract verbatim on submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub filename: String,
    pub content_type: String,
    pub bytes: Bytes,
}

impl ImageFile {
    /// Wrap a selected file, guessing the MIME type from the filename.
    /// Unrecognized extensions fall back to `application/octet-stream`.
    pub fn new(filename: impl Into<String>, bytes: Bytes) -> Self {
        let filename = filename.into();
        let content_type = mime_guess::from_path(&filename)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        Self {
            filename,
            content_type,
            bytes,
        }
    }

    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_accepted_image(&self) -> bool {
        is_accepted_image_type(&self.content_type)
    }
}
