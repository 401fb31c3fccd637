use std::sync::Arc;
use std::time::Duration;

use oracle::{AnalysisDashboard, InsightCard, SearchBar, SearchBarEvent, wire_source};
use oracle_mock::{MockSuggestionSource, fixtures};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Log controller activity; try RUST_LOG=oracle=trace.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("oracle=debug")))
        .init();

    // 2. Start a search bar and let the mock source answer its requests.
    let (bar, events) = SearchBar::builder().spawn();
    let source = MockSuggestionSource::new().delay(Duration::from_millis(80));
    let (wiring, mut events) = wire_source(bar.client(), events, Arc::new(source));

    // 3. Type "A", "Ap", "App" quickly; only "App" reaches the source.
    bar.focus().await?;
    for text in ["A", "Ap", "App"] {
        bar.input(text).await?;
        tokio::time::sleep(Duration::from_millis(60)).await;
    }

    let Some(SearchBarEvent::SearchRequested(query)) = events.recv().await else {
        return Err("controller stopped before searching".into());
    };
    println!("searched for {query:?}");

    // 4. Wait for the results to land and print the dropdown.
    let mut views = bar.subscribe();
    let view = views.wait_for(|v| !v.dropdown.rows().is_empty()).await?.clone();
    for row in view.dropdown.rows() {
        println!(
            "{:<28} {:<8} {:<28} {:>10} {:>7}",
            row.company_name, row.ticker_label, row.detail, row.price, row.change
        );
    }

    // 5. Pick the first row and render what the page would show for it.
    let picked = view.dropdown.rows()[0].stock.clone();
    bar.select(picked.clone()).await?;
    if let Some(SearchBarEvent::StockSelected(stock)) = events.recv().await {
        println!("\nselected {} ({})", stock.company_name, stock.ticker);
    }

    if let Some(analysis) = fixtures::analysis::by_ticker(&picked.ticker) {
        let dash = AnalysisDashboard::render(&analysis);
        println!(
            "{} {} | {} | {} {}",
            dash.price.price,
            dash.price.change,
            dash.price.market_cap,
            dash.recommendation.label,
            dash.recommendation.score
        );
        for tile in &dash.metrics {
            println!("  {:<15} {}", tile.label, tile.value);
        }
    }

    for entry in fixtures::investors::all() {
        for insight in &entry.insights {
            let card = InsightCard::new(insight, &entry.investor).compact(true).render();
            println!(
                "\n{} {} ({})\n  {}\n  {} · {}",
                card.badge.icon,
                entry.investor.name,
                card.confidence,
                card.quote,
                card.source_label,
                card.date
            );
        }
    }

    bar.shutdown().await;
    wiring.await?;
    Ok(())
}
