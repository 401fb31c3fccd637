//! StockOracle presentation logic.
//!
//! Overview
//! - `search`: a debounced search bar controller. It owns the input text, waits
//!   for typing to settle before asking for suggestions, renders the
//!   caller-supplied list and hands the picked record back.
//! - `insight`: the investor insight card view model.
//! - `dashboard`: the stock analysis dashboard view model.
//! - Formatting, classification and the domain types are re-exported from
//!   `oracle_core` so embedders need a single dependency.
//!
//! Key behaviors and trade-offs
//! - Search requests are only emitted for queries of at least `min_query_len`
//!   characters (2 by default) after `debounce` (300 ms) of quiet. Short queries
//!   still update visibility but never reach the suggestion source.
//! - Losing focus hides suggestions only after `blur_delay` (200 ms), so a click on
//!   a row can land first. Regaining focus within the delay keeps the list open.
//! - The controller never searches on its own; pair it with a
//!   [`SuggestionSource`] through [`search::wire_source`], or feed
//!   `set_suggestions`/`set_loading` yourself.
//! - Dropping the [`SearchBarHandle`] stops the controller; a pending search is
//!   cancelled rather than delivered to a consumer that went away.
//!
//! Examples
//! Driving a search bar by hand:
//! ```rust,ignore
//! use oracle::SearchBar;
//!
//! let (bar, mut events) = SearchBar::builder().spawn();
//! bar.focus().await?;
//! bar.input("APP").await?;
//! // ... 300 ms later
//! if let Some(oracle::SearchBarEvent::SearchRequested(q)) = events.recv().await {
//!     let view = bar.set_suggestions(lookup(&q)).await?;
//!     assert!(view.dropdown.is_visible());
//! }
//! bar.shutdown().await;
//! ```
//!
//! Rendering a dashboard:
//! ```rust,ignore
//! let view = oracle::AnalysisDashboard::render(&analysis);
//! println!("{} {}", view.price.price, view.recommendation.label);
//! ```
//!
//! See `oracle/examples/` for a runnable session against the mock source.
#![warn(missing_docs)]

/// Stock analysis dashboard view model.
pub mod dashboard;
/// Investor insight card view model.
pub mod insight;
pub mod search;
mod trend;

pub use dashboard::{AnalysisDashboard, DashboardView};
pub use insight::{InsightCard, InsightCardView};
pub use search::{
    Dropdown, LeadingIcon, SearchBar, SearchBarClient, SearchBarEvent, SearchBarHandle,
    SearchBarView, SuggestionRow, wire_source,
};
pub use trend::Direction;

// Re-export core types and helpers for convenience
pub use oracle_core::{
    Currency, OracleError, SearchBarConfig, Stock, SuggestionSource,
    // Domain records
    FinancialMetrics, InsightMatch, Investor, InvestorInsight, InvestorWithInsights, MatchType,
    Recommendation, RecommendationAction, RiskLevel, Sentiment, SentimentTone, SourceType,
    StockAnalysis, TechnicalIndicators,
    // Formatting & classification
    class_names, extract_tickers, format_currency, format_date, format_date_str,
    format_grouped, format_market_cap, format_percent, format_percent_default, format_price,
    format_volume, humanize_label, recommendation_text_class, sentiment_bg_class,
    sentiment_bg_class_for_label, sentiment_from_free_text, sentiment_icon,
    sentiment_text_class, sentiment_text_class_for_label,
};
