//! Domain layer types and invariants.

pub mod entities;
pub mod slug;
pub mod types;
pub mod uploads;
