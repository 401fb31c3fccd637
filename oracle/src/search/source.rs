use std::sync::Arc;

use oracle_core::{OracleError, SuggestionSource};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::controller::{SearchBarClient, SearchBarEvent};

/// Connect a search bar's requests to a [`SuggestionSource`].
///
/// Consumes the controller's event receiver. Every event is forwarded to the
/// returned receiver as soon as it arrives; each `SearchRequested` also starts a
/// lookup that raises the loading flag, asks `source`, installs the result and
/// lowers the flag. A failed lookup installs an empty list, so the bar falls
/// back to its no-results panel.
///
/// Lookups run in their own task, at most one at a time. A newer request aborts
/// the lookup still in flight, so a slow answer for an old query never
/// overwrites the latest one. Forwarding is never held up by a lookup.
///
/// The task ends when the controller stops.
pub fn wire_source(
    client: SearchBarClient,
    mut events: mpsc::UnboundedReceiver<SearchBarEvent>,
    source: Arc<dyn SuggestionSource>,
) -> (JoinHandle<()>, mpsc::UnboundedReceiver<SearchBarEvent>) {
    let (fwd_tx, fwd_rx) = mpsc::unbounded_channel();
    let join = tokio::spawn(async move {
        let mut inflight: Option<JoinHandle<Result<(), OracleError>>> = None;
        loop {
            tokio::select! {
                event = events.recv() => {
                    let Some(event) = event else { break };
                    let query = match &event {
                        SearchBarEvent::SearchRequested(q) => Some(q.clone()),
                        SearchBarEvent::StockSelected(_) => None,
                    };
                    let _ = fwd_tx.send(event);
                    if let Some(query) = query {
                        if let Some(stale) = inflight.take() {
                            stale.abort();
                            #[cfg(feature = "tracing")]
                            tracing::trace!("superseded lookup aborted");
                        }
                        let client = client.clone();
                        let source = Arc::clone(&source);
                        inflight = Some(tokio::spawn(async move {
                            lookup(&client, source.as_ref(), &query).await
                        }));
                    }
                }
                Some(done) = async {
                    match inflight.as_mut() {
                        Some(running) => Some(running.await),
                        None => None,
                    }
                } => {
                    inflight = None;
                    // The controller is gone once a client call fails.
                    if matches!(done, Ok(Err(_))) {
                        break;
                    }
                }
            }
        }
        if let Some(running) = inflight.take() {
            running.abort();
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(source = source.name(), "suggestion wiring stopped");
    });
    (join, fwd_rx)
}

#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "oracle::search::lookup",
        skip(client, source),
        fields(source = source.name()),
    )
)]
async fn lookup(
    client: &SearchBarClient,
    source: &dyn SuggestionSource,
    query: &str,
) -> Result<(), OracleError> {
    client.set_loading(true).await?;
    let suggestions = match source.suggest(query).await {
        Ok(list) => list,
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %_e, "suggestion lookup failed");
            Vec::new()
        }
    };
    client.set_suggestions(suggestions).await?;
    client.set_loading(false).await?;
    Ok(())
}
