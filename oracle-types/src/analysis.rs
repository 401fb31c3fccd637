//! Stock analysis payload rendered by the dashboard.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::OracleError;
use crate::stock::Stock;

/// Fundamental ratios and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialMetrics {
    pub pe_ratio: Decimal,
    pub pb_ratio: Decimal,
    pub dividend: Decimal,
    /// Percent value, e.g. `0.35` for 0.35%.
    pub dividend_yield: Decimal,
    pub eps: Decimal,
    pub revenue: u64,
    pub net_income: u64,
    /// Percent value.
    pub roe: Decimal,
    pub debt_to_equity: Decimal,
    pub current_ratio: Decimal,
    /// Percent value.
    pub gross_margin: Decimal,
}

/// How an insight was linked to a stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    /// The company is named in the insight.
    DirectMention,
    /// Linked by meaning.
    Semantic,
    /// Linked through a shared investment theme.
    ThemeBased,
}

impl MatchType {
    /// Wire label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DirectMention => "direct_mention",
            Self::Semantic => "semantic",
            Self::ThemeBased => "theme_based",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An insight matched against the analysed stock.
///
/// `sentiment` stays free text here: matches come from an upstream matcher that
/// does not guarantee labels from the seven-point scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightMatch {
    pub insight_id: String,
    pub investor_id: String,
    pub investor_name: String,
    pub match_type: MatchType,
    /// Match confidence in `[0, 1]`.
    pub confidence_score: f64,
    pub match_reason: String,
    pub sentiment: String,
    pub investment_themes: Vec<String>,
}

/// Price-derived indicators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalIndicators {
    pub ma50: Decimal,
    pub ma200: Decimal,
    pub rsi: Decimal,
    pub week52_high: Decimal,
    pub week52_low: Decimal,
    pub average_volume: u64,
    pub volatility: Decimal,
}

/// Recommended action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationAction {
    StrongBuy,
    Buy,
    Hold,
    Sell,
    StrongSell,
}

impl RecommendationAction {
    /// Every action, most to least positive.
    pub const ALL: [Self; 5] = [
        Self::StrongBuy,
        Self::Buy,
        Self::Hold,
        Self::Sell,
        Self::StrongSell,
    ];

    /// Wire label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StrongBuy => "strong_buy",
            Self::Buy => "buy",
            Self::Hold => "hold",
            Self::Sell => "sell",
            Self::StrongSell => "strong_sell",
        }
    }
}

impl fmt::Display for RecommendationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecommendationAction {
    type Err = OracleError;

    /// Case-insensitive parse of the wire label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == lower)
            .ok_or_else(|| OracleError::unknown_label("recommendation", s))
    }
}

/// Risk bucket attached to a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// The overall call on a stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub action: RecommendationAction,
    pub score: u32,
    pub max_score: u32,
    pub reasoning: String,
    pub risk_level: RiskLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_price: Option<Decimal>,
}

/// A stock together with everything the dashboard shows about it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockAnalysis {
    #[serde(flatten)]
    pub stock: Stock,
    pub financial_metrics: FinancialMetrics,
    pub investor_insights: Vec<InsightMatch>,
    pub technical_indicators: TechnicalIndicators,
    pub recommendation: Recommendation,
}
