//! Presentation layer: renderable views of the editor form.

pub mod views;
