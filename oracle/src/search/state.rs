//! Pure state machine behind the search bar.
//!
//! The driver in [`super::controller`] feeds [`Event`]s in and executes the
//! returned [`Action`]s; nothing here touches timers or channels.

use std::time::Duration;

use oracle_core::{SearchBarConfig, Stock};

use super::view::{
    Dropdown, LeadingIcon, NO_RESULTS_HINT, SearchBarView, SuggestionRow, no_results_message,
    results_footer,
};

/// Inputs to the state machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// The input text changed.
    TextChanged(String),
    /// A suggestion row was picked.
    Selected(Stock),
    /// The clear button was pressed.
    Cleared,
    /// The input gained focus.
    Focused,
    /// The input lost focus.
    Blurred,
    /// Enter was pressed.
    Submitted,
    /// The caller supplied a new suggestion list.
    SuggestionsReplaced(Vec<Stock>),
    /// The caller toggled the loading indicator.
    LoadingChanged(bool),
    /// The debounce window closed for the query scheduled under `generation`.
    DebounceElapsed {
        /// Generation the window was scheduled under.
        generation: u64,
        /// Query carried by the window.
        query: String,
    },
    /// The blur grace period ran out.
    BlurElapsed,
}

/// Side effects requested by the state machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// (Re)start the debounce window for `query`.
    ScheduleSearch {
        /// Generation the firing must match.
        generation: u64,
        /// Query carried by the firing.
        query: String,
    },
    /// Drop the pending debounce window.
    CancelSearch,
    /// Publish `SearchRequested`.
    EmitSearch(String),
    /// Publish `StockSelected`.
    EmitSelected(Stock),
    /// Arm the blur timer.
    ScheduleBlurHide {
        /// Grace period before hiding.
        delay: Duration,
    },
    /// Disarm the blur timer.
    CancelBlurHide,
}

/// Everything the search bar remembers between events.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchBarState {
    /// Tunables.
    pub config: SearchBarConfig,
    /// Input text, stored verbatim.
    pub query: String,
    /// Whether the suggestion panel may show.
    pub show_suggestions: bool,
    /// Caller-driven loading flag.
    pub loading: bool,
    /// Caller-supplied suggestions, in caller order.
    pub suggestions: Vec<Stock>,
    /// A blur hide is armed.
    pub blur_pending: bool,
    /// Bumped on every scheduled or cancelled search; stale firings are dropped.
    pub generation: u64,
}

impl SearchBarState {
    /// Initial state: empty query, panel hidden.
    #[must_use]
    pub const fn new(config: SearchBarConfig) -> Self {
        Self {
            config,
            query: String::new(),
            show_suggestions: false,
            loading: false,
            suggestions: Vec::new(),
            blur_pending: false,
            generation: 0,
        }
    }

    /// Apply one event, returning the next state and the side effects to run.
    #[must_use]
    pub fn handle(mut self, event: Event) -> (Self, Vec<Action>) {
        let actions = match event {
            Event::TextChanged(text) => {
                self.show_suggestions = self.config.accepts(&text);
                self.generation += 1;
                self.query.clone_from(&text);
                vec![Action::ScheduleSearch {
                    generation: self.generation,
                    query: text,
                }]
            }
            Event::DebounceElapsed { generation, query } => {
                if generation != self.generation {
                    Vec::new()
                } else if self.config.accepts(&query) {
                    vec![Action::EmitSearch(query)]
                } else {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(query = %query, min = self.config.min_query_len, "query too short; not searching");
                    Vec::new()
                }
            }
            Event::Selected(stock) => {
                self.query.clone_from(&stock.company_name);
                self.show_suggestions = false;
                let mut actions = self.take_blur();
                actions.push(Action::EmitSelected(stock));
                actions
            }
            Event::Cleared => {
                self.query.clear();
                self.show_suggestions = false;
                self.generation += 1;
                vec![Action::CancelSearch]
            }
            Event::Focused => {
                self.show_suggestions = self.config.accepts(&self.query);
                self.take_blur()
            }
            Event::Blurred => {
                self.blur_pending = true;
                vec![Action::ScheduleBlurHide {
                    delay: self.config.blur_delay,
                }]
            }
            Event::BlurElapsed => {
                if self.blur_pending {
                    self.blur_pending = false;
                    self.show_suggestions = false;
                }
                Vec::new()
            }
            Event::Submitted => {
                self.show_suggestions = false;
                Vec::new()
            }
            Event::SuggestionsReplaced(list) => {
                self.suggestions = list;
                Vec::new()
            }
            Event::LoadingChanged(loading) => {
                self.loading = loading;
                Vec::new()
            }
        };
        (self, actions)
    }

    fn take_blur(&mut self) -> Vec<Action> {
        if std::mem::take(&mut self.blur_pending) {
            vec![Action::CancelBlurHide]
        } else {
            Vec::new()
        }
    }

    /// Render the current state.
    #[must_use]
    pub fn view(&self) -> SearchBarView {
        let dropdown = if self.show_suggestions && !self.suggestions.is_empty() {
            Dropdown::Results {
                rows: self.suggestions.iter().map(SuggestionRow::from_stock).collect(),
                footer: results_footer(self.suggestions.len()),
            }
        } else if self.show_suggestions && self.config.accepts(&self.query) && !self.loading {
            Dropdown::NoResults {
                message: no_results_message(&self.query),
                hint: NO_RESULTS_HINT,
            }
        } else {
            Dropdown::Hidden
        };

        SearchBarView {
            placeholder: self
                .query
                .is_empty()
                .then(|| self.config.placeholder.clone()),
            leading_icon: if self.loading {
                LeadingIcon::Spinner
            } else {
                LeadingIcon::Search
            },
            show_clear: !self.query.is_empty(),
            query: self.query.clone(),
            dropdown,
        }
    }
}
