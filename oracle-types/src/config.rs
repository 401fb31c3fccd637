//! Configuration for the search interaction controller.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Placeholder shown while the query is empty.
pub const DEFAULT_PLACEHOLDER: &str = "Search stocks... (e.g., AAPL, Apple)";

/// Tunables for a search bar.
///
/// The defaults are the values the product ships with: a 300 ms quiescence
/// window before a search is requested, a 200 ms grace period between blur and
/// hiding the suggestion list, and a two-character minimum query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchBarConfig {
    /// Text shown when the query is empty.
    pub placeholder: String,
    /// Quiescence window for search emission.
    pub debounce: Duration,
    /// Delay between losing focus and hiding suggestions.
    pub blur_delay: Duration,
    /// Minimum query length (in characters) that shows suggestions and triggers a search.
    pub min_query_len: usize,
}

impl Default for SearchBarConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            debounce: Duration::from_millis(300),
            blur_delay: Duration::from_millis(200),
            min_query_len: 2,
        }
    }
}

impl SearchBarConfig {
    /// Whether `query` is long enough to search for.
    #[must_use]
    pub fn accepts(&self, query: &str) -> bool {
        query.chars().count() >= self.min_query_len
    }
}
