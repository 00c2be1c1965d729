/// Default bound on the depth of the node being expanded.
pub const DEFAULT_MAX_SEARCH_DISTANCE: usize = 500;

/// Tuning knobs for [`AStarPathFinder`](crate::AStarPathFinder).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct FinderConfig {
    /// The search gives up once it expands a node this many steps away from
    /// the start. Zero disables searching altogether.
    pub max_search_distance: usize,
    /// Whether the eight diagonal neighbours are considered, not just the
    /// four orthogonal ones.
    pub allow_diagonal: bool,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            max_search_distance: DEFAULT_MAX_SEARCH_DISTANCE,
            allow_diagonal: false,
        }
    }
}

impl FinderConfig {
    pub fn with_max_search_distance(mut self, max_search_distance: usize) -> Self {
        self.max_search_distance = max_search_distance;
        self
    }

    pub fn with_diagonal(mut self, allow_diagonal: bool) -> Self {
        self.allow_diagonal = allow_diagonal;
        self
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let c: FinderConfig = serde_json::from_str(r#"{"allow_diagonal": true}"#).unwrap();
        assert_eq!(c.max_search_distance, DEFAULT_MAX_SEARCH_DISTANCE);
        assert!(c.allow_diagonal);
    }

    #[test]
    fn config_round_trip() {
        let c = FinderConfig::default().with_max_search_distance(40);
        let json = serde_json::to_string(&c).unwrap();
        let back: FinderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
