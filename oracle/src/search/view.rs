use oracle_core::{Stock, format_percent, format_price};

use crate::trend::Direction;

/// Secondary line under the results list.
pub const RESULTS_FOOTER_HINT: &str = "Use ticker or company name";
/// Hint shown under the empty-results message.
pub const NO_RESULTS_HINT: &str = "Try a different ticker or company name";

/// Glyph at the start of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeadingIcon {
    /// Magnifier, shown when idle.
    Search,
    /// Spinner, shown while a lookup is in flight.
    Spinner,
}

/// One rendered suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionRow {
    /// Company name, the row title.
    pub company_name: String,
    /// `(TICKER)`.
    pub ticker_label: String,
    /// `sector • exchange`.
    pub detail: String,
    /// `$X.XX`.
    pub price: String,
    /// Absolute percent change with two decimals, e.g. `0.61%`.
    pub change: String,
    /// Up iff `change_percent >= 0`.
    pub direction: Direction,
    /// Gain/loss class for the change.
    pub change_class: &'static str,
    /// The record handed back on selection.
    pub stock: Stock,
}

impl SuggestionRow {
    /// Render a record into a row.
    #[must_use]
    pub fn from_stock(stock: &Stock) -> Self {
        let direction = Direction::from_gaining(stock.is_gaining());
        Self {
            company_name: stock.company_name.clone(),
            ticker_label: format!("({})", stock.ticker),
            detail: format!("{} • {}", stock.sector, stock.exchange),
            price: format_price(stock.current_price),
            change: format_percent(stock.change_percent.abs(), 2),
            direction,
            change_class: direction.class(),
            stock: stock.clone(),
        }
    }
}

/// What sits below the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dropdown {
    /// Nothing.
    Hidden,
    /// Every suggestion in caller order, then a footer.
    Results {
        /// Rows in caller order.
        rows: Vec<SuggestionRow>,
        /// `Showing {n} results • Use ticker or company name`.
        footer: String,
    },
    /// Empty-state panel.
    NoResults {
        /// `No stocks found for "{query}"`.
        message: String,
        /// Fixed hint line.
        hint: &'static str,
    },
}

impl Dropdown {
    /// Whether anything is rendered below the input.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// Rendered rows, empty unless [`Dropdown::Results`].
    #[must_use]
    pub fn rows(&self) -> &[SuggestionRow] {
        match self {
            Self::Results { rows, .. } => rows,
            _ => &[],
        }
    }
}

/// Snapshot of everything the search bar renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarView {
    /// Current input text.
    pub query: String,
    /// Placeholder, present only while the query is empty.
    pub placeholder: Option<String>,
    /// Spinner while loading, magnifier otherwise.
    pub leading_icon: LeadingIcon,
    /// Clear button shown iff the query is non-empty.
    pub show_clear: bool,
    /// Suggestions panel.
    pub dropdown: Dropdown,
}

pub(crate) fn results_footer(count: usize) -> String {
    format!("Showing {count} results • {RESULTS_FOOTER_HINT}")
}

pub(crate) fn no_results_message(query: &str) -> String {
    format!("No stocks found for \"{query}\"")
}
