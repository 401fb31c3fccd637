//! oracle-core
//!
//! Formatting, classification, and timing primitives shared by the StockOracle
//! presentation layer.
//!
//! - `format`: currency, percent, market-cap, volume, price and date rendering.
//! - `classify`: sentiment and recommendation labels to CSS classes and glyphs.
//! - `text`: ticker extraction and label humanizing.
//! - `debounce`: the cancel-and-reschedule timer behind the search bar.
//! - `source`: the `SuggestionSource` trait implemented by data providers.
//!
//! Async runtime (Tokio)
//! ---------------------
//! `debounce::Debouncer` spawns onto the ambient Tokio runtime; code that
//! schedules debounced calls must run under a Tokio 1.x runtime. The formatting and classification functions are
//! plain synchronous code.
#![warn(missing_docs)]

/// Sentiment and recommendation classification.
pub mod classify;
/// ISO currency codes.
pub mod currency;
/// The debounce primitive.
pub mod debounce;
/// Display formatting.
pub mod format;
/// Suggestion source trait.
pub mod source;
/// Text helpers.
pub mod text;

pub use classify::{
    GAIN_CLASS, LOSS_CLASS, NEUTRAL_BG_CLASS, NEUTRAL_TEXT_CLASS, UNKNOWN_RECOMMENDATION_CLASS,
    change_class, class_names, recommendation_bg_class, recommendation_label,
    recommendation_text_class, sentiment_bg_class, sentiment_bg_class_for_label,
    sentiment_from_free_text, sentiment_icon, sentiment_text_class,
    sentiment_text_class_for_label,
};
pub use currency::Currency;
pub use debounce::Debouncer;
pub use format::{
    format_currency, format_date, format_date_str, format_fixed, format_grouped,
    format_market_cap, format_percent, format_percent_default, format_price, format_volume,
};
pub use source::SuggestionSource;
pub use text::{extract_tickers, humanize_label, initials};

pub use oracle_types::*;
