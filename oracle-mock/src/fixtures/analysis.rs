use oracle_core::{
    FinancialMetrics, InsightMatch, MatchType, Recommendation, RecommendationAction, RiskLevel,
    StockAnalysis, TechnicalIndicators,
};
use rust_decimal::Decimal;

use super::stocks;

fn d(num: i64, scale: u32) -> Decimal {
    Decimal::new(num, scale)
}

pub fn by_ticker(ticker: &str) -> Option<StockAnalysis> {
    match ticker {
        "AAPL" => Some(apple()),
        _ => None,
    }
}

pub fn apple() -> StockAnalysis {
    StockAnalysis {
        stock: stocks::apple(),
        financial_metrics: FinancialMetrics {
            pe_ratio: d(366, 1),
            pb_ratio: d(548, 1),
            dividend: d(96, 2),
            dividend_yield: d(35, 2),
            eps: d(748, 2),
            revenue: 383_285_000_000,
            net_income: 99_803_000_000,
            roe: d(1714, 1),
            debt_to_equity: d(1524, 1),
            current_ratio: d(104, 2),
            gross_margin: d(4596, 2),
        },
        investor_insights: vec![InsightMatch {
            insight_id: "buffett_001".to_string(),
            investor_id: "warren_buffett".to_string(),
            investor_name: "Warren Buffett".to_string(),
            match_type: MatchType::DirectMention,
            confidence_score: 0.95,
            match_reason: "Buffett has repeatedly praised Apple's sticky ecosystem and strong brand, calling it one of Berkshire's best investments".to_string(),
            sentiment: "strongly_bullish".to_string(),
            investment_themes: vec![
                "competitive_advantage".to_string(),
                "consumer_stickiness".to_string(),
            ],
        }],
        technical_indicators: TechnicalIndicators {
            ma50: d(26941, 2),
            ma200: d(22954, 2),
            rsi: d(652, 1),
            week52_high: d(28619, 2),
            week52_low: d(17183, 2),
            average_volume: 57_234_567,
            volatility: d(215, 1),
        },
        recommendation: Recommendation {
            action: RecommendationAction::Hold,
            score: 7,
            max_score: 10,
            reasoning: "While Apple remains a fundamentally strong company with Buffett's endorsement, current valuation (P/E 36.6) suggests waiting for a better entry point. Consider buying on 15-20% pullbacks.".to_string(),
            risk_level: RiskLevel::Medium,
            target_price: Some(d(29500, 2)),
        },
    }
}
