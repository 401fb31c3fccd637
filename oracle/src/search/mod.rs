//! Debounced stock search: state machine, async driver and view model.
//!
//! `SearchBar::builder().spawn()` starts one Tokio task per search bar. The task
//! owns a [`state::SearchBarState`], the debounce window and the blur timer, and
//! applies inputs one at a time in arrival order. Every input resolves to the
//! [`SearchBarView`] rendered right after it; outbound
//! [`SearchBarEvent`]s arrive on the receiver returned by `spawn`.

pub mod controller;
pub mod source;
pub mod state;
pub mod view;

pub use controller::{SearchBar, SearchBarClient, SearchBarEvent, SearchBarHandle};
pub use source::wire_source;
pub use view::{Dropdown, LeadingIcon, SearchBarView, SuggestionRow};
