//! Bozza: form state and submit orchestration for a post editor backed by
//! remote storage services.
//!
//! The crate models the lifetime of a single post draft: seed it from an
//! existing record (edit) or defaults (create), mutate fields through
//! validating writes while a reactive binding keeps the slug derived from the
//! title, then hand the draft to the submit orchestrator, which sequences the
//! optional image upload, stale-image cleanup, and the create-or-update call
//! against the configured backend contracts before navigating to the stored
//! post.
//!
//! Persistence, file hosting, and navigation are expressed as trait contracts
//! in [`application::stores`]; hosts wire in their backend SDK of choice.

pub mod application;
pub mod config;
pub mod domain;
pub mod presentation;
pub mod telemetry;
