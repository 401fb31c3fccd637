//! Small text helpers used by the view models.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

// ASCII word boundaries: letters, digits and `_` are word characters.
static TICKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:\b)[A-Z]{1,5}(?-u:\b)").expect("ticker pattern compiles")
});

/// Unique ticker-like tokens in `text`, in first-seen order.
///
/// A token is a whole word of one to five ASCII uppercase letters, where word
/// characters are ASCII letters, digits and `_`. `AAPL` and `KO` qualify;
/// `GOOGLE`, `Apple` and `BRK_B` do not.
#[must_use]
pub fn extract_tickers(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    TICKER
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|t| seen.insert(*t))
        .map(str::to_string)
        .collect()
}

/// Replace the first underscore with a space: `competitive_advantage` → `competitive advantage`.
///
/// Only the first one is replaced, so `strongly_bullish_call` keeps its second underscore.
#[must_use]
pub fn humanize_label(label: &str) -> String {
    label.replacen('_', " ", 1)
}

/// First character of each space-separated word: `Warren Buffett` → `WB`.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split(' ').filter_map(|w| w.chars().next()).collect()
}
