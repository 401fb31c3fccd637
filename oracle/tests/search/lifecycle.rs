use std::time::Duration;

use oracle::{OracleError, SearchBar};
use tokio::time::sleep;

#[tokio::test(start_paused = true)]
async fn dropping_the_handle_before_the_window_emits_nothing() {
    let (bar, mut events) = SearchBar::builder().spawn();
    bar.input("APPLE").await.unwrap();
    sleep(Duration::from_millis(100)).await;
    drop(bar);

    sleep(Duration::from_secs(1)).await;
    assert_eq!(events.recv().await, None);
}

#[tokio::test(start_paused = true)]
async fn shutdown_closes_clients() {
    let (bar, mut events) = SearchBar::builder().spawn();
    let client = bar.client();
    bar.input("MSFT").await.unwrap();
    bar.shutdown().await;

    assert!(client.is_closed());
    assert_eq!(client.input("MSFT").await, Err(OracleError::ControllerClosed));
    assert_eq!(client.view().await, Err(OracleError::ControllerClosed));
    assert_eq!(events.recv().await, None);
}

#[tokio::test(start_paused = true)]
async fn clients_outliving_the_handle_fail_cleanly() {
    let (bar, _events) = SearchBar::builder().spawn();
    let client = bar.client();
    drop(bar);
    sleep(Duration::from_millis(1)).await;

    let err = client.set_loading(true).await.unwrap_err();
    assert_eq!(err, OracleError::ControllerClosed);
    // the last published view is still readable
    assert_eq!(client.latest().query, "");
}

#[tokio::test(start_paused = true)]
async fn builder_modifiers_reach_the_view() {
    let (bar, _events) = SearchBar::builder()
        .placeholder("Ticker")
        .min_query_len(1)
        .spawn();
    let view = bar.view().await.unwrap();
    assert_eq!(view.placeholder.as_deref(), Some("Ticker"));

    let view = bar.input("K").await.unwrap();
    assert!(view.dropdown.is_visible(), "one character is enough now");
}

#[tokio::test(flavor = "multi_thread")]
async fn controller_runs_on_a_multi_thread_runtime() {
    let (bar, mut events) = SearchBar::builder().debounce(Duration::from_millis(10)).spawn();
    bar.input("JPM").await.unwrap();
    let got = tokio::time::timeout(Duration::from_secs(2), events.recv())
        .await
        .expect("search not emitted in time");
    assert_eq!(got, Some(oracle::SearchBarEvent::SearchRequested("JPM".into())));
    bar.shutdown().await;
}
