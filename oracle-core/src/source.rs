use async_trait::async_trait;
use oracle_types::{OracleError, Stock};

/// Something that can turn a query into suggestion records.
///
/// The presentation layer never searches on its own; an embedding page supplies
/// a source (a backend client, a fixture table) and the search bar only
/// forwards debounced queries to it. Results are rendered in the order returned.
#[async_trait]
pub trait SuggestionSource: Send + Sync {
    /// Short name used to tag errors and log lines.
    fn name(&self) -> &'static str;

    /// Produce suggestions for `query`.
    ///
    /// # Errors
    /// Implementations return `OracleError::Source` (or a more specific variant) on failure.
    async fn suggest(&self, query: &str) -> Result<Vec<Stock>, OracleError>;
}
