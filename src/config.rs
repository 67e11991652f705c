//! Editor configuration.

use serde::Deserialize;

const DEFAULT_DETAIL_ROUTE_PREFIX: &str = "/post";

/// Host-facing knobs for an embedded post editor.
///
/// Overlapping submissions are rejected by default; hosts can disable the
/// guard to allow them.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Route prefix for the post detail view navigated to after persist.
    pub detail_route_prefix: String,
    /// Reject a submit while another is still in flight.
    pub guard_duplicate_submits: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            detail_route_prefix: DEFAULT_DETAIL_ROUTE_PREFIX.to_string(),
            guard_duplicate_submits: true,
        }
    }
}

impl EditorConfig {
    /// Build the detail route for a persisted post id.
    pub fn detail_path(&self, id: &str) -> String {
        format!("{}/{id}", self.detail_route_prefix.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_path_joins_prefix_and_id() {
        let config = EditorConfig::default();
        assert_eq!(config.detail_path("abc-123"), "/post/abc-123");
    }

    #[test]
    fn trailing_slash_on_prefix_does_not_double_up() {
        let config = EditorConfig {
            detail_route_prefix: "/posts/".to_string(),
            ..EditorConfig::default()
        };
        assert_eq!(config.detail_path("abc"), "/posts/abc");
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: EditorConfig = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(config.detail_route_prefix, "/post");
        assert!(config.guard_duplicate_submits);
    }
}
