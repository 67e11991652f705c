//! Application services layer: the draft form and the submit orchestrator.

pub mod editor;
pub mod error;
pub mod form;
pub mod stores;
