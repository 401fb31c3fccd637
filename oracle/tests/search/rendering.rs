use oracle::search::state::{Event, SearchBarState};
use oracle::search::view::{NO_RESULTS_HINT, SuggestionRow};
use oracle::{Direction, Dropdown, LeadingIcon, SearchBarConfig};
use oracle_mock::fixtures::stocks;

fn state_with(events: Vec<Event>) -> SearchBarState {
    events
        .into_iter()
        .fold(SearchBarState::new(SearchBarConfig::default()), |s, e| s.handle(e).0)
}

fn pick(tickers: &[&str]) -> Vec<oracle::Stock> {
    stocks::universe()
        .into_iter()
        .filter(|s| tickers.contains(&s.ticker.as_str()))
        .collect()
}

#[test]
fn empty_bar_shows_placeholder_only() {
    let view = state_with(vec![]).view();
    assert_eq!(view.query, "");
    assert_eq!(view.placeholder.as_deref(), Some("Search stocks... (e.g., AAPL, Apple)"));
    assert!(!view.show_clear);
    assert_eq!(view.leading_icon, LeadingIcon::Search);
    assert_eq!(view.dropdown, Dropdown::Hidden);
}

#[test]
fn results_list_every_suggestion_in_caller_order() {
    let mut list = pick(&["MSFT", "AAPL"]);
    list.reverse();
    let view = state_with(vec![
        Event::TextChanged("a".into()),
        Event::TextChanged("ap".into()),
        Event::SuggestionsReplaced(list),
    ])
    .view();

    assert!(view.placeholder.is_none());
    assert!(view.show_clear);
    let Dropdown::Results { rows, footer } = &view.dropdown else {
        panic!("expected results, got {:?}", view.dropdown);
    };
    assert_eq!(footer, "Showing 2 results • Use ticker or company name");
    let tickers: Vec<&str> = rows.iter().map(|r| r.stock.ticker.as_str()).collect();
    assert_eq!(tickers, vec!["MSFT", "AAPL"]);
}

#[test]
fn whole_universe_is_rendered_without_pagination() {
    let all = stocks::universe();
    let view = state_with(vec![
        Event::TextChanged("co".into()),
        Event::SuggestionsReplaced(all.clone()),
    ])
    .view();
    assert_eq!(view.dropdown.rows().len(), all.len());
}

#[test]
fn short_query_hides_even_with_suggestions() {
    let view = state_with(vec![
        Event::TextChanged("A".into()),
        Event::SuggestionsReplaced(stocks::universe()),
    ])
    .view();
    assert_eq!(view.dropdown, Dropdown::Hidden);
    assert!(view.show_clear);
}

#[test]
fn empty_results_show_message_unless_loading() {
    let idle = state_with(vec![Event::TextChanged("ZZZ".into())]).view();
    assert_eq!(
        idle.dropdown,
        Dropdown::NoResults {
            message: "No stocks found for \"ZZZ\"".into(),
            hint: NO_RESULTS_HINT,
        }
    );

    let loading = state_with(vec![
        Event::TextChanged("ZZZ".into()),
        Event::LoadingChanged(true),
    ])
    .view();
    assert_eq!(loading.dropdown, Dropdown::Hidden);
    assert_eq!(loading.leading_icon, LeadingIcon::Spinner);
}

#[test]
fn loading_keeps_existing_results_visible() {
    let view = state_with(vec![
        Event::TextChanged("AA".into()),
        Event::SuggestionsReplaced(pick(&["AAPL"])),
        Event::LoadingChanged(true),
    ])
    .view();
    assert_eq!(view.leading_icon, LeadingIcon::Spinner);
    assert_eq!(view.dropdown.rows().len(), 1);
}

#[test]
fn submit_hides_immediately() {
    let view = state_with(vec![
        Event::TextChanged("AAPL".into()),
        Event::SuggestionsReplaced(pick(&["AAPL"])),
        Event::Submitted,
    ])
    .view();
    assert!(!view.dropdown.is_visible());
    assert_eq!(view.query, "AAPL");
}

#[test]
fn row_fields() {
    let msft = pick(&["MSFT"]).remove(0);
    let row = SuggestionRow::from_stock(&msft);
    assert_eq!(row.company_name, "Microsoft Corp.");
    assert_eq!(row.ticker_label, "(MSFT)");
    assert_eq!(row.detail, "Technology • NASDAQ");
    assert_eq!(row.price, "$510.20");
    assert_eq!(row.change, "0.61%");
    assert_eq!(row.direction, Direction::Down);
    assert_eq!(row.change_class, "text-danger-600");

    let apple = SuggestionRow::from_stock(&stocks::apple());
    assert_eq!(apple.price, "$273.67");
    assert_eq!(apple.change, "0.90%");
    assert_eq!(apple.direction, Direction::Up);
    assert_eq!(apple.change_class, "text-success-600");
}

#[test]
fn flat_move_counts_as_up() {
    let wfc = pick(&["WFC"]).remove(0);
    let row = SuggestionRow::from_stock(&wfc);
    assert_eq!(row.change, "0.00%");
    assert_eq!(row.direction, Direction::Up);
}
