//! StockOracle data model, configuration, and error types shared across the workspace.

mod analysis;
mod config;
mod error;
mod insight;
mod sentiment;
mod stock;

pub use analysis::{
    FinancialMetrics, InsightMatch, MatchType, Recommendation, RecommendationAction, RiskLevel,
    StockAnalysis, TechnicalIndicators,
};
pub use config::{DEFAULT_PLACEHOLDER, SearchBarConfig};
pub use error::OracleError;
pub use insight::{Investor, InvestorInsight, InvestorWithInsights, SourceType};
pub use sentiment::{Sentiment, SentimentTone};
pub use stock::Stock;
