use std::time::Duration;

use oracle::{Dropdown, SearchBar, SearchBarEvent};
use oracle_mock::fixtures::stocks;
use tokio::sync::mpsc::error::TryRecvError;
use tokio::time::sleep;

#[tokio::test(start_paused = true)]
async fn selection_emits_record_and_fills_company_name() {
    let (bar, mut events) = SearchBar::builder().spawn();
    let apple = stocks::apple();

    bar.input("app").await.unwrap();
    bar.set_suggestions(vec![apple.clone()]).await.unwrap();
    let view = bar.select(apple.clone()).await.unwrap();

    assert_eq!(view.query, "Apple Inc.");
    assert_eq!(view.dropdown, Dropdown::Hidden);
    assert_eq!(events.try_recv(), Ok(SearchBarEvent::StockSelected(apple)));
}

#[tokio::test(start_paused = true)]
async fn repeated_selection_yields_the_same_view() {
    let (bar, mut events) = SearchBar::builder().spawn();
    let ko = stocks::universe()
        .into_iter()
        .find(|s| s.ticker == "KO")
        .unwrap();

    let first = bar.select(ko.clone()).await.unwrap();
    let second = bar.select(ko.clone()).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first.query, "The Coca-Cola Company");

    assert_eq!(events.try_recv(), Ok(SearchBarEvent::StockSelected(ko.clone())));
    assert_eq!(events.try_recv(), Ok(SearchBarEvent::StockSelected(ko)));
}

#[tokio::test(start_paused = true)]
async fn selection_inside_blur_delay_completes() {
    let (bar, mut events) = SearchBar::builder().spawn();
    let apple = stocks::apple();

    bar.input("AAPL").await.unwrap();
    bar.set_suggestions(vec![apple.clone()]).await.unwrap();
    bar.blur().await.unwrap();
    sleep(Duration::from_millis(120)).await;

    let view = bar.select(apple.clone()).await.unwrap();
    assert_eq!(view.query, "Apple Inc.");
    assert_eq!(events.try_recv(), Ok(SearchBarEvent::StockSelected(apple)));

    // the list can be reopened afterwards
    sleep(Duration::from_millis(150)).await;
    let view = bar.focus().await.unwrap();
    assert!(view.dropdown.is_visible());
}

#[tokio::test(start_paused = true)]
async fn selection_while_hidden_is_still_honoured() {
    let (bar, mut events) = SearchBar::builder().spawn();
    let apple = stocks::apple();
    bar.submit().await.unwrap();
    bar.select(apple.clone()).await.unwrap();
    assert_eq!(events.try_recv(), Ok(SearchBarEvent::StockSelected(apple)));
    assert_eq!(events.try_recv(), Err(TryRecvError::Empty));
}
