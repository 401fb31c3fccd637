use std::time::Duration;

use oracle::{SearchBar, SearchBarEvent};
use tokio::sync::mpsc::error::TryRecvError;
use tokio::time::sleep;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[tokio::test(start_paused = true)]
async fn burst_emits_only_the_last_query_once() {
    let (bar, mut events) = SearchBar::builder().spawn();

    bar.input("A").await.unwrap();
    sleep(ms(100)).await;
    bar.input("AP").await.unwrap();
    sleep(ms(100)).await;
    bar.input("APP").await.unwrap();

    sleep(ms(299)).await;
    assert_eq!(events.try_recv(), Err(TryRecvError::Empty));

    sleep(ms(2)).await;
    assert_eq!(
        events.try_recv(),
        Ok(SearchBarEvent::SearchRequested("APP".into()))
    );

    sleep(ms(1_000)).await;
    assert_eq!(events.try_recv(), Err(TryRecvError::Empty));
}

#[tokio::test(start_paused = true)]
async fn short_queries_never_emit() {
    let (bar, mut events) = SearchBar::builder().spawn();

    bar.input("A").await.unwrap();
    sleep(ms(5_000)).await;
    bar.input("").await.unwrap();
    sleep(ms(5_000)).await;
    bar.input("Z").await.unwrap();
    sleep(ms(5_000)).await;

    assert_eq!(events.try_recv(), Err(TryRecvError::Empty));
}

#[tokio::test(start_paused = true)]
async fn shrinking_below_minimum_cancels_the_longer_query() {
    let (bar, mut events) = SearchBar::builder().spawn();

    bar.input("AP").await.unwrap();
    sleep(ms(100)).await;
    let view = bar.input("A").await.unwrap();
    assert!(!view.dropdown.is_visible());

    sleep(ms(1_000)).await;
    assert_eq!(events.try_recv(), Err(TryRecvError::Empty));
}

#[tokio::test(start_paused = true)]
async fn separate_pauses_emit_separately() {
    let (bar, mut events) = SearchBar::builder().spawn();

    bar.input("AA").await.unwrap();
    sleep(ms(400)).await;
    bar.input("AAP").await.unwrap();
    sleep(ms(400)).await;

    assert_eq!(events.recv().await, Some(SearchBarEvent::SearchRequested("AA".into())));
    assert_eq!(events.recv().await, Some(SearchBarEvent::SearchRequested("AAP".into())));
}

#[tokio::test(start_paused = true)]
async fn clear_cancels_the_pending_search() {
    let (bar, mut events) = SearchBar::builder().spawn();

    bar.input("AAPL").await.unwrap();
    sleep(ms(150)).await;
    let view = bar.clear().await.unwrap();
    assert_eq!(view.query, "");
    assert!(!view.show_clear);
    assert!(view.placeholder.is_some());

    sleep(ms(1_000)).await;
    assert_eq!(events.try_recv(), Err(TryRecvError::Empty));
}

#[tokio::test(start_paused = true)]
async fn custom_window_is_honoured() {
    let (bar, mut events) = SearchBar::builder().debounce(ms(50)).spawn();

    bar.input("KO").await.unwrap();
    sleep(ms(49)).await;
    assert_eq!(events.try_recv(), Err(TryRecvError::Empty));
    sleep(ms(2)).await;
    assert_eq!(
        events.try_recv(),
        Ok(SearchBarEvent::SearchRequested("KO".into()))
    );
}

#[tokio::test(start_paused = true)]
async fn emission_waits_for_the_window_even_when_polled_early() {
    let (bar, mut events) = SearchBar::builder().spawn();
    bar.input("NVDA").await.unwrap();

    let mut next = tokio_test::task::spawn(events.recv());
    tokio_test::assert_pending!(next.poll());
    sleep(ms(301)).await;
    assert!(next.is_woken());
    tokio_test::assert_ready_eq!(
        next.poll(),
        Some(SearchBarEvent::SearchRequested("NVDA".into()))
    );
}
