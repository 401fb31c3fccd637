use std::sync::Arc;
use std::time::Duration;

use oracle::{Dropdown, LeadingIcon, SearchBar, SearchBarEvent, wire_source};
use oracle_mock::MockSuggestionSource;
use tokio::time::sleep;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[tokio::test(start_paused = true)]
async fn requests_are_answered_and_forwarded() {
    let (bar, events) = SearchBar::builder().spawn();
    let source = MockSuggestionSource::new();
    let (_join, mut forwarded) = wire_source(bar.client(), events, Arc::new(source.clone()));

    bar.focus().await.unwrap();
    bar.input("aa").await.unwrap();
    sleep(ms(310)).await;

    assert_eq!(
        forwarded.try_recv(),
        Ok(SearchBarEvent::SearchRequested("aa".into()))
    );
    let view = bar.view().await.unwrap();
    assert_eq!(view.leading_icon, LeadingIcon::Search);
    let tickers: Vec<&str> = view.dropdown.rows().iter().map(|r| r.stock.ticker.as_str()).collect();
    assert_eq!(tickers, vec!["AAPL", "AAL"]);
    assert_eq!(source.requests().await, vec!["aa".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn selections_pass_through_untouched() {
    let (bar, events) = SearchBar::builder().spawn();
    let (_join, mut forwarded) =
        wire_source(bar.client(), events, Arc::new(MockSuggestionSource::new()));

    let apple = oracle_mock::fixtures::stocks::apple();
    bar.select(apple.clone()).await.unwrap();
    sleep(ms(1)).await;
    assert_eq!(forwarded.try_recv(), Ok(SearchBarEvent::StockSelected(apple)));
}

#[tokio::test(start_paused = true)]
async fn spinner_shows_while_the_lookup_runs() {
    let (bar, events) = SearchBar::builder().spawn();
    let source = MockSuggestionSource::new().delay(ms(500));
    let (_join, _forwarded) = wire_source(bar.client(), events, Arc::new(source));

    bar.input("ms").await.unwrap();
    sleep(ms(350)).await;
    let view = bar.view().await.unwrap();
    assert_eq!(view.leading_icon, LeadingIcon::Spinner);
    assert_eq!(view.dropdown, Dropdown::Hidden);

    sleep(ms(500)).await;
    let view = bar.view().await.unwrap();
    assert_eq!(view.leading_icon, LeadingIcon::Search);
    assert_eq!(view.dropdown.rows()[0].stock.ticker, "MSFT");
}

#[tokio::test(start_paused = true)]
async fn failed_lookup_falls_back_to_no_results() {
    let (bar, events) = SearchBar::builder().spawn();
    let (_join, _forwarded) =
        wire_source(bar.client(), events, Arc::new(MockSuggestionSource::new()));

    bar.input("AAPL").await.unwrap();
    sleep(ms(310)).await;
    assert_eq!(bar.view().await.unwrap().dropdown.rows().len(), 1);

    bar.input("FAIL").await.unwrap();
    sleep(ms(310)).await;
    let view = bar.view().await.unwrap();
    assert_eq!(
        view.dropdown,
        Dropdown::NoResults {
            message: "No stocks found for \"FAIL\"".into(),
            hint: oracle::search::view::NO_RESULTS_HINT,
        }
    );
    assert_eq!(view.leading_icon, LeadingIcon::Search);
}

#[tokio::test(start_paused = true)]
async fn wiring_stops_with_the_controller() {
    let (bar, events) = SearchBar::builder().spawn();
    let (join, mut forwarded) =
        wire_source(bar.client(), events, Arc::new(MockSuggestionSource::new()));
    bar.shutdown().await;

    join.await.unwrap();
    assert_eq!(forwarded.recv().await, None);
}

#[tokio::test(start_paused = true)]
async fn selections_are_forwarded_while_a_lookup_runs() {
    let (bar, events) = SearchBar::builder().spawn();
    let source = MockSuggestionSource::new().delay(ms(500));
    let (_join, mut forwarded) = wire_source(bar.client(), events, Arc::new(source));

    bar.input("ms").await.unwrap();
    sleep(ms(310)).await;
    assert_eq!(
        forwarded.try_recv(),
        Ok(SearchBarEvent::SearchRequested("ms".into()))
    );

    let apple = oracle_mock::fixtures::stocks::apple();
    bar.select(apple.clone()).await.unwrap();
    sleep(ms(1)).await;
    assert_eq!(forwarded.try_recv(), Ok(SearchBarEvent::StockSelected(apple)));
    assert_eq!(bar.view().await.unwrap().leading_icon, LeadingIcon::Spinner);
}

#[tokio::test(start_paused = true)]
async fn newer_requests_supersede_a_slow_lookup() {
    let (bar, events) = SearchBar::builder().spawn();
    let source = MockSuggestionSource::new().delay(ms(500));
    let (_join, _forwarded) = wire_source(bar.client(), events, Arc::new(source.clone()));

    bar.focus().await.unwrap();
    bar.input("aa").await.unwrap();
    sleep(ms(310)).await;
    bar.input("ms").await.unwrap();
    sleep(ms(310)).await;
    assert_eq!(source.requests().await, vec!["aa".to_string(), "ms".to_string()]);

    // The "aa" answer would have landed here had it not been aborted.
    sleep(ms(200)).await;
    let view = bar.view().await.unwrap();
    assert_eq!(view.leading_icon, LeadingIcon::Spinner);
    assert!(view.dropdown.rows().is_empty());

    sleep(ms(400)).await;
    let view = bar.view().await.unwrap();
    assert_eq!(view.leading_icon, LeadingIcon::Search);
    let tickers: Vec<&str> = view.dropdown.rows().iter().map(|r| r.stock.ticker.as_str()).collect();
    assert_eq!(tickers, vec!["MSFT"]);
}
