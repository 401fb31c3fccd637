use std::time::Duration;

use oracle::{Dropdown, SearchBar};
use oracle_mock::fixtures::stocks;
use tokio::time::sleep;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[tokio::test(start_paused = true)]
async fn blur_hides_only_after_the_delay() {
    let (bar, _events) = SearchBar::builder().spawn();
    bar.focus().await.unwrap();
    bar.input("AAPL").await.unwrap();
    bar.set_suggestions(vec![stocks::apple()]).await.unwrap();

    let view = bar.blur().await.unwrap();
    assert!(view.dropdown.is_visible(), "blur must not hide immediately");

    sleep(ms(199)).await;
    assert!(bar.view().await.unwrap().dropdown.is_visible());

    sleep(ms(2)).await;
    assert_eq!(bar.view().await.unwrap().dropdown, Dropdown::Hidden);
}

#[tokio::test(start_paused = true)]
async fn refocus_within_the_delay_keeps_the_list() {
    let (bar, _events) = SearchBar::builder().spawn();
    bar.input("AAPL").await.unwrap();
    bar.set_suggestions(vec![stocks::apple()]).await.unwrap();

    bar.blur().await.unwrap();
    sleep(ms(100)).await;
    bar.focus().await.unwrap();
    sleep(ms(500)).await;

    assert!(bar.view().await.unwrap().dropdown.is_visible());
}

#[tokio::test(start_paused = true)]
async fn focus_reopens_list_for_long_enough_query() {
    let (bar, _events) = SearchBar::builder().spawn();
    bar.input("AAPL").await.unwrap();
    bar.set_suggestions(vec![stocks::apple()]).await.unwrap();
    bar.blur().await.unwrap();
    sleep(ms(250)).await;
    assert!(!bar.view().await.unwrap().dropdown.is_visible());

    let view = bar.focus().await.unwrap();
    assert_eq!(view.dropdown.rows().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn watchers_see_the_deferred_hide() {
    let (bar, _events) = SearchBar::builder().blur_delay(ms(50)).spawn();
    let mut views = bar.subscribe();
    bar.input("AAPL").await.unwrap();
    bar.set_suggestions(vec![stocks::apple()]).await.unwrap();
    let _ = views.borrow_and_update();

    bar.blur().await.unwrap();
    views.changed().await.unwrap();
    assert_eq!(views.borrow_and_update().dropdown, Dropdown::Hidden);
    assert_eq!(bar.latest().dropdown, Dropdown::Hidden);
}
