//! Shared domain enumerations aligned with the persisted backend enums.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostStatus {
    Active,
    Inactive,
}

impl PostStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PostStatus::Active => "active",
            PostStatus::Inactive => "inactive",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PostStatus::Active => "Active",
            PostStatus::Inactive => "Inactive",
        }
    }

    /// All statuses, in the order they appear in the status selector.
    pub const ALL: [PostStatus; 2] = [PostStatus::Active, PostStatus::Inactive];
}

impl Default for PostStatus {
    fn default() -> Self {
        PostStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&PostStatus::Inactive).expect("serialize");
        assert_eq!(json, "\"inactive\"");
    }

    #[test]
    fn status_round_trips_through_as_str() {
        for status in PostStatus::ALL {
            let json = serde_json::to_string(&status).expect("serialize");
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }
}
