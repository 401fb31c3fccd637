use std::ops::Deref;
use std::pin::Pin;
use std::time::Duration;

use oracle_core::debounce::Debouncer;
use oracle_core::{OracleError, SearchBarConfig, Stock};
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::Sleep;

use super::state::{Action, Event, SearchBarState};
use super::view::SearchBarView;

/// Outbound notifications from a running search bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchBarEvent {
    /// The debounce window closed on a query long enough to search for.
    SearchRequested(String),
    /// The user picked a suggestion; the record is passed through unmodified.
    StockSelected(Stock),
}

enum Command {
    Apply {
        event: Event,
        reply: oneshot::Sender<SearchBarView>,
    },
    View {
        reply: oneshot::Sender<SearchBarView>,
    },
}

/// Builder for a search bar controller.
#[derive(Debug, Clone, Default)]
pub struct SearchBar {
    config: SearchBarConfig,
}

impl SearchBar {
    /// Start from the shipped defaults.
    #[must_use]
    pub fn builder() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, config: SearchBarConfig) -> Self {
        self.config = config;
        self
    }

    /// Text shown while the query is empty.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.config.placeholder = placeholder.into();
        self
    }

    /// Quiescence window before a search is requested.
    ///
    /// Behavior and trade-offs:
    /// - Longer windows issue fewer lookups while typing but delay results.
    /// - Every keystroke restarts the window; only the last text of a burst is searched.
    #[must_use]
    pub const fn debounce(mut self, window: Duration) -> Self {
        self.config.debounce = window;
        self
    }

    /// Grace period between losing focus and hiding suggestions.
    ///
    /// Behavior and trade-offs:
    /// - Must outlast the pointer press on a suggestion row, or the row vanishes
    ///   before the selection lands.
    /// - Regaining focus inside the period keeps the list open.
    #[must_use]
    pub const fn blur_delay(mut self, delay: Duration) -> Self {
        self.config.blur_delay = delay;
        self
    }

    /// Minimum query length, in characters, that shows suggestions and searches.
    #[must_use]
    pub const fn min_query_len(mut self, len: usize) -> Self {
        self.config.min_query_len = len;
        self
    }

    /// Start the controller task.
    ///
    /// Returns the handle used to drive it and the receiver of outbound events.
    /// Must be called within a Tokio runtime.
    #[must_use]
    pub fn spawn(self) -> (SearchBarHandle, mpsc::UnboundedReceiver<SearchBarEvent>) {
        let state = SearchBarState::new(self.config);
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (view_tx, view_rx) = watch::channel(state.view());
        let (stop_tx, stop_rx) = oneshot::channel();

        let join = tokio::spawn(run(state, cmd_rx, event_tx, view_tx, stop_rx));

        let handle = SearchBarHandle {
            client: SearchBarClient { cmd_tx, view_rx },
            inner: Some(join),
            stop_tx: Some(stop_tx),
        };
        (handle, event_rx)
    }
}

async fn run(
    mut state: SearchBarState,
    mut cmd_rx: mpsc::UnboundedReceiver<Command>,
    event_tx: mpsc::UnboundedSender<SearchBarEvent>,
    view_tx: watch::Sender<SearchBarView>,
    mut stop_rx: oneshot::Receiver<()>,
) {
    let (fire_tx, mut fire_rx) = mpsc::unbounded_channel::<(u64, String)>();
    let mut debouncer = Debouncer::new(state.config.debounce, move |fired: (u64, String)| {
        let _ = fire_tx.send(fired);
    });
    let mut blur_timer: Option<Pin<Box<Sleep>>> = None;

    loop {
        let (event, reply) = tokio::select! {
            _ = &mut stop_rx => break,
            cmd = cmd_rx.recv() => match cmd {
                Some(Command::Apply { event, reply }) => (event, Some(reply)),
                Some(Command::View { reply }) => {
                    let _ = reply.send(state.view());
                    continue;
                }
                None => break,
            },
            Some((generation, query)) = fire_rx.recv() => (Event::DebounceElapsed { generation, query }, None),
            () = async {
                if let Some(timer) = blur_timer.as_mut() {
                    timer.await;
                }
            }, if blur_timer.is_some() => {
                blur_timer = None;
                (Event::BlurElapsed, None)
            }
        };

        let (next, actions) = state.handle(event);
        state = next;

        for action in actions {
            match action {
                Action::ScheduleSearch { generation, query } => debouncer.call((generation, query)),
                Action::CancelSearch => {
                    debouncer.cancel();
                }
                Action::EmitSearch(query) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(query = %query, "search requested");
                    let _ = event_tx.send(SearchBarEvent::SearchRequested(query));
                }
                Action::EmitSelected(stock) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(ticker = %stock.ticker, "stock selected");
                    let _ = event_tx.send(SearchBarEvent::StockSelected(stock));
                }
                Action::ScheduleBlurHide { delay } => {
                    blur_timer = Some(Box::pin(tokio::time::sleep(delay)));
                }
                Action::CancelBlurHide => blur_timer = None,
            }
        }

        let view = state.view();
        view_tx.send_if_modified(|current| {
            if *current == view {
                false
            } else {
                current.clone_from(&view);
                true
            }
        });
        if let Some(reply) = reply {
            let _ = reply.send(view);
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(query = %state.query, "search bar controller stopped");
}

/// Cloneable sender side of a running search bar.
///
/// Every operation applies one input and resolves to the view rendered right
/// after it. Operations fail with [`OracleError::ControllerClosed`] once the
/// controller has stopped.
#[derive(Debug, Clone)]
pub struct SearchBarClient {
    cmd_tx: mpsc::UnboundedSender<Command>,
    view_rx: watch::Receiver<SearchBarView>,
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Apply { event, .. } => f.debug_tuple("Apply").field(event).finish(),
            Self::View { .. } => f.write_str("View"),
        }
    }
}

impl SearchBarClient {
    async fn apply(&self, event: Event) -> Result<SearchBarView, OracleError> {
        let (reply, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::Apply { event, reply })
            .map_err(|_| OracleError::ControllerClosed)?;
        rx.await.map_err(|_| OracleError::ControllerClosed)
    }

    /// The input text changed.
    ///
    /// # Errors
    /// Returns `ControllerClosed` if the controller has stopped.
    pub async fn input(&self, text: impl Into<String>) -> Result<SearchBarView, OracleError> {
        self.apply(Event::TextChanged(text.into())).await
    }

    /// A suggestion was picked.
    ///
    /// # Errors
    /// Returns `ControllerClosed` if the controller has stopped.
    pub async fn select(&self, stock: Stock) -> Result<SearchBarView, OracleError> {
        self.apply(Event::Selected(stock)).await
    }

    /// The clear button was pressed. Any pending search is dropped.
    ///
    /// # Errors
    /// Returns `ControllerClosed` if the controller has stopped.
    pub async fn clear(&self) -> Result<SearchBarView, OracleError> {
        self.apply(Event::Cleared).await
    }

    /// The input gained focus.
    ///
    /// # Errors
    /// Returns `ControllerClosed` if the controller has stopped.
    pub async fn focus(&self) -> Result<SearchBarView, OracleError> {
        self.apply(Event::Focused).await
    }

    /// The input lost focus; suggestions hide after the blur delay.
    ///
    /// # Errors
    /// Returns `ControllerClosed` if the controller has stopped.
    pub async fn blur(&self) -> Result<SearchBarView, OracleError> {
        self.apply(Event::Blurred).await
    }

    /// Enter was pressed; suggestions hide immediately.
    ///
    /// # Errors
    /// Returns `ControllerClosed` if the controller has stopped.
    pub async fn submit(&self) -> Result<SearchBarView, OracleError> {
        self.apply(Event::Submitted).await
    }

    /// Replace the suggestion list. Order is preserved as given.
    ///
    /// # Errors
    /// Returns `ControllerClosed` if the controller has stopped.
    pub async fn set_suggestions(&self, suggestions: Vec<Stock>) -> Result<SearchBarView, OracleError> {
        self.apply(Event::SuggestionsReplaced(suggestions)).await
    }

    /// Toggle the loading indicator.
    ///
    /// # Errors
    /// Returns `ControllerClosed` if the controller has stopped.
    pub async fn set_loading(&self, loading: bool) -> Result<SearchBarView, OracleError> {
        self.apply(Event::LoadingChanged(loading)).await
    }

    /// Render the current state without changing it.
    ///
    /// # Errors
    /// Returns `ControllerClosed` if the controller has stopped.
    pub async fn view(&self) -> Result<SearchBarView, OracleError> {
        let (reply, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::View { reply })
            .map_err(|_| OracleError::ControllerClosed)?;
        rx.await.map_err(|_| OracleError::ControllerClosed)
    }

    /// Last published view, without a round trip to the controller.
    #[must_use]
    pub fn latest(&self) -> SearchBarView {
        self.view_rx.borrow().clone()
    }

    /// Receiver that is notified whenever the rendered view changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SearchBarView> {
        self.view_rx.clone()
    }

    /// Whether the controller has stopped.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.cmd_tx.is_closed()
    }
}

/// Owning handle to a running search bar.
///
/// Dereferences to [`SearchBarClient`] for all input operations. Dropping the
/// handle stops the controller and cancels any pending search or blur timer;
/// use [`SearchBarHandle::shutdown`] to wait for it to finish.
pub struct SearchBarHandle {
    client: SearchBarClient,
    inner: Option<JoinHandle<()>>,
    stop_tx: Option<oneshot::Sender<()>>,
}

impl SearchBarHandle {
    /// A cloneable client that does not keep the controller alive on its own.
    #[must_use]
    pub fn client(&self) -> SearchBarClient {
        self.client.clone()
    }

    /// Stop the controller and wait for its task to exit.
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        if let Some(join) = self.inner.take() {
            let _ = join.await;
        }
    }
}

impl Deref for SearchBarHandle {
    type Target = SearchBarClient;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

impl std::fmt::Debug for SearchBarHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchBarHandle")
            .field("closed", &self.client.is_closed())
            .finish_non_exhaustive()
    }
}

impl Drop for SearchBarHandle {
    fn drop(&mut self) {
        // Ask the actor to stop, then abort it in case it is parked on a reply.
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        if let Some(join) = self.inner.take()
            && !join.is_finished()
        {
            join.abort();
        }
    }
}
