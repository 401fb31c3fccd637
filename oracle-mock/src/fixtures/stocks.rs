use oracle_core::Stock;
use rust_decimal::Decimal;

#[allow(clippy::too_many_arguments)]
fn s(
    ticker: &str,
    company_name: &str,
    exchange: &str,
    sector: &str,
    industry: &str,
    market_cap: u64,
    price_cents: i64,
    change_cents: i64,
    change_percent_bp: i64,
) -> Stock {
    Stock {
        ticker: ticker.to_string(),
        company_name: company_name.to_string(),
        exchange: exchange.to_string(),
        sector: sector.to_string(),
        industry: industry.to_string(),
        market_cap,
        current_price: Decimal::new(price_cents, 2),
        change: Decimal::new(change_cents, 2),
        change_percent: Decimal::new(change_percent_bp, 2),
    }
}

pub fn apple() -> Stock {
    s(
        "AAPL",
        "Apple Inc.",
        "NASDAQ",
        "Technology",
        "Consumer Electronics",
        4_100_000_000_000,
        27367,
        245,
        90,
    )
}

/// The suggestion universe, in the order a search would rank it.
pub fn universe() -> Vec<Stock> {
    vec![
        apple(),
        s("MSFT", "Microsoft Corp.", "NASDAQ", "Technology", "Software", 3_800_000_000_000, 51_020, -312, -61),
        s("GOOGL", "Alphabet Inc.", "NASDAQ", "Communication Services", "Internet Content", 2_300_000_000_000, 18_975, 141, 75),
        s("AMZN", "Amazon.com Inc.", "NASDAQ", "Consumer Cyclical", "Internet Retail", 2_400_000_000_000, 22_410, -88, -39),
        s("NVDA", "NVIDIA Corp.", "NASDAQ", "Technology", "Semiconductors", 4_400_000_000_000, 18_080, 512, 292),
        s("TSLA", "Tesla Inc.", "NASDAQ", "Consumer Cyclical", "Auto Manufacturers", 1_100_000_000_000, 34_215, -1_027, -291),
        s("KO", "The Coca-Cola Company", "NYSE", "Consumer Defensive", "Beverages", 300_000_000_000, 6_950, -20, -29),
        s("PEP", "PepsiCo Inc.", "NASDAQ", "Consumer Defensive", "Beverages", 205_000_000_000, 14_932, 57, 38),
        s("BAC", "Bank of America Corp.", "NYSE", "Financial Services", "Banks", 350_000_000_000, 4_612, 33, 72),
        s("WFC", "Wells Fargo & Co.", "NYSE", "Financial Services", "Banks", 260_000_000_000, 7_941, 0, 0),
        s("JPM", "JPMorgan Chase & Co.", "NYSE", "Financial Services", "Banks", 800_000_000_000, 29_105, 122, 42),
        s("AAL", "American Airlines Group Inc.", "NASDAQ", "Industrials", "Airlines", 8_900_000_000, 1_352, -41, -294),
    ]
}
