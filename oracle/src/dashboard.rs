//! Stock analysis dashboard view model.

use oracle_core::{
    InsightMatch, StockAnalysis, format_fixed, format_grouped, format_market_cap,
    format_percent_default, format_price, humanize_label, recommendation_bg_class,
    recommendation_label, sentiment_from_free_text, sentiment_icon,
};
use rust_decimal::Decimal;

use crate::insight::percent_of_one;
use crate::trend::Direction;

/// Fixed risk notice shown under every analysis.
pub const DISCLAIMER: &str = "This analysis is based on historical investor insights and should not be considered as financial advice. All investments carry risk. Past performance does not guarantee future results. Please consult with a qualified financial advisor before making investment decisions.";

/// Suggestion shown when no investor has said anything about the company.
pub const EMPTY_INSIGHTS_HINT: &str =
    "Try searching for companies like Apple (AAPL), Coca-Cola (KO), or Bank of America (BAC)";

/// Price block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceCard {
    /// `$X.XX`.
    pub price: String,
    /// `abs(change) (percent%)`, e.g. `2.45 (0.90%)`.
    pub change: String,
    /// Up iff `change >= 0`.
    pub direction: Direction,
    /// Gain/loss class.
    pub change_class: &'static str,
    /// Scaled market cap, e.g. `$4.1T`.
    pub market_cap: String,
    /// Average volume with thousands grouping.
    pub volume: String,
}

/// Recommendation block.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationCard {
    /// Badge text, e.g. `Hold`.
    pub label: &'static str,
    /// Badge and bar background class.
    pub bg_class: &'static str,
    /// `score/max`.
    pub score: String,
    /// Width of the score bar, 0..=100.
    pub bar_width_percent: f64,
    /// Free-text reasoning.
    pub reasoning: String,
    /// `$X.XX`, when a target was given.
    pub target_price: Option<String>,
}

/// One headline metric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricTile {
    /// Caption under the value.
    pub label: &'static str,
    /// Rendered value.
    pub value: String,
}

/// One investor match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRow {
    /// Investor display name.
    pub investor_name: String,
    /// Sentiment glyph.
    pub icon: &'static str,
    /// Humanized match type, e.g. `direct mention`.
    pub match_type: String,
    /// `"{n}% match"`.
    pub confidence: String,
    /// Match reason wrapped in double quotes.
    pub reason: String,
    /// Humanized themes.
    pub themes: Vec<String>,
}

/// Body of the insights section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsightsBody {
    /// At least one match.
    Matches(Vec<MatchRow>),
    /// No matches.
    Empty {
        /// Names the company.
        message: String,
        /// Fixed suggestion line.
        hint: &'static str,
    },
}

/// Insights section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightsSection {
    /// `What the Masters Think About {company}`.
    pub title: String,
    /// `{n} insights found`, absent when empty.
    pub count: Option<String>,
    /// Rows or the empty state.
    pub body: InsightsBody,
}

/// Everything the analysis dashboard renders.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    /// Company name heading.
    pub company_name: String,
    /// Ticker subheading.
    pub ticker: String,
    /// Price block.
    pub price: PriceCard,
    /// Recommendation block.
    pub recommendation: RecommendationCard,
    /// P/E, P/B, ROE and dividend yield, in that order.
    pub metrics: Vec<MetricTile>,
    /// Investor matches.
    pub insights: InsightsSection,
    /// Fixed risk notice.
    pub disclaimer: &'static str,
}

/// Renders a [`StockAnalysis`] into a [`DashboardView`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalysisDashboard;

impl AnalysisDashboard {
    /// Render the whole dashboard.
    #[must_use]
    pub fn render(analysis: &StockAnalysis) -> DashboardView {
        let stock = &analysis.stock;
        DashboardView {
            company_name: stock.company_name.clone(),
            ticker: stock.ticker.clone(),
            price: Self::price_card(analysis),
            recommendation: Self::recommendation_card(analysis),
            metrics: Self::metrics(analysis),
            insights: Self::insights(analysis),
            disclaimer: DISCLAIMER,
        }
    }

    fn price_card(analysis: &StockAnalysis) -> PriceCard {
        let stock = &analysis.stock;
        let direction = Direction::from_gaining(stock.change >= Decimal::ZERO);
        PriceCard {
            price: format_price(stock.current_price),
            change: format!(
                "{} ({})",
                format_fixed(stock.change.abs(), 2),
                format_percent_default(stock.change_percent)
            ),
            direction,
            change_class: direction.class(),
            market_cap: format_market_cap(stock.market_cap),
            volume: format_grouped(analysis.technical_indicators.average_volume),
        }
    }

    fn recommendation_card(analysis: &StockAnalysis) -> RecommendationCard {
        let rec = &analysis.recommendation;
        let bar_width_percent = if rec.max_score == 0 {
            0.0
        } else {
            (f64::from(rec.score) / f64::from(rec.max_score) * 100.0).clamp(0.0, 100.0)
        };
        RecommendationCard {
            label: recommendation_label(rec.action),
            bg_class: recommendation_bg_class(rec.action),
            score: format!("{}/{}", rec.score, rec.max_score),
            bar_width_percent,
            reasoning: rec.reasoning.clone(),
            target_price: rec.target_price.map(format_price),
        }
    }

    fn metrics(analysis: &StockAnalysis) -> Vec<MetricTile> {
        let m = &analysis.financial_metrics;
        vec![
            MetricTile {
                label: "P/E Ratio",
                value: format_fixed(m.pe_ratio, 1),
            },
            MetricTile {
                label: "P/B Ratio",
                value: format_fixed(m.pb_ratio, 1),
            },
            MetricTile {
                label: "ROE",
                value: format_percent_default(m.roe),
            },
            MetricTile {
                label: "Dividend Yield",
                value: format_percent_default(m.dividend_yield),
            },
        ]
    }

    fn insights(analysis: &StockAnalysis) -> InsightsSection {
        let company = &analysis.stock.company_name;
        let matches = &analysis.investor_insights;
        let body = if matches.is_empty() {
            InsightsBody::Empty {
                message: format!("No master investor insights available for {company}"),
                hint: EMPTY_INSIGHTS_HINT,
            }
        } else {
            InsightsBody::Matches(matches.iter().map(match_row).collect())
        };
        InsightsSection {
            title: format!("What the Masters Think About {company}"),
            count: (!matches.is_empty()).then(|| format!("{} insights found", matches.len())),
            body,
        }
    }
}

fn match_row(m: &InsightMatch) -> MatchRow {
    MatchRow {
        investor_name: m.investor_name.clone(),
        icon: sentiment_icon(sentiment_from_free_text(&m.sentiment)),
        match_type: humanize_label(m.match_type.as_str()),
        confidence: format!("{}% match", percent_of_one(m.confidence_score)),
        reason: format!("\"{}\"", m.match_reason),
        themes: m.investment_themes.iter().map(|t| humanize_label(t)).collect(),
    }
}
