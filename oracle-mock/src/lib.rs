//! Deterministic fixtures and a mock [`SuggestionSource`] for tests and demos.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use oracle_core::{OracleError, Stock, SuggestionSource};
use tokio::sync::Mutex;

pub mod fixtures;

/// Mock suggestion source backed by [`fixtures::stocks::universe`].
///
/// Matching is case-insensitive: a record matches when its ticker starts with
/// the query or its company name contains it. The query `FAIL` produces a
/// source error. Every query received is recorded and can be inspected via
/// [`MockSuggestionSource::requests`].
#[derive(Clone)]
pub struct MockSuggestionSource {
    universe: Arc<Vec<Stock>>,
    delay: Option<Duration>,
    limit: Option<usize>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl Default for MockSuggestionSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSuggestionSource {
    /// Source over the default fixture universe with no latency.
    #[must_use]
    pub fn new() -> Self {
        Self::with_universe(fixtures::stocks::universe())
    }

    /// Source over a caller-provided universe.
    #[must_use]
    pub fn with_universe(universe: Vec<Stock>) -> Self {
        Self {
            universe: Arc::new(universe),
            delay: None,
            limit: None,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Simulate lookup latency.
    #[must_use]
    pub const fn delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Cap the number of returned records.
    #[must_use]
    pub const fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Queries received so far, in arrival order.
    pub async fn requests(&self) -> Vec<String> {
        self.requests.lock().await.clone()
    }

    /// Synchronous match against the universe, without latency or request logging.
    #[must_use]
    pub fn lookup(&self, query: &str) -> Vec<Stock> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        let hits = self.universe.iter().filter(|s| {
            s.ticker.to_lowercase().starts_with(&needle)
                || s.company_name.to_lowercase().contains(&needle)
        });
        match self.limit {
            Some(n) => hits.take(n).cloned().collect(),
            None => hits.cloned().collect(),
        }
    }
}

#[async_trait]
impl SuggestionSource for MockSuggestionSource {
    fn name(&self) -> &'static str {
        "oracle-mock"
    }

    async fn suggest(&self, query: &str) -> Result<Vec<Stock>, OracleError> {
        self.requests.lock().await.push(query.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if query == "FAIL" {
            return Err(OracleError::source(self.name(), "forced failure: suggest"));
        }
        let hits = self.lookup(query);
        #[cfg(feature = "tracing")]
        tracing::trace!(query, hits = hits.len(), "mock suggestions");
        Ok(hits)
    }
}
