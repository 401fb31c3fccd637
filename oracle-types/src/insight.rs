//! Investors and their curated insights.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OracleError;
use crate::sentiment::Sentiment;

/// A legendary investor whose statements are curated as insights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investor {
    /// Stable identifier, e.g. `warren_buffett`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// Role or title.
    pub title: String,
    /// Year of birth.
    pub birth_year: u16,
    /// Nationality.
    pub nationality: String,
    /// Free-form net worth description, e.g. `120+ Billion USD`.
    pub net_worth: String,
    /// One-line investment philosophy.
    pub investment_philosophy: String,
    /// Well-known quotes.
    pub famous_quotes: Vec<String>,
    /// Relative URL of the portrait.
    pub photo_url: String,
}

/// Where an insight was said or written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    /// Shareholder letter.
    AnnualLetter,
    /// Interview.
    Interview,
    /// Speech or meeting remarks.
    Speech,
    /// Book.
    Book,
    /// Memo.
    Memo,
    /// Tweet.
    Tweet,
}

impl SourceType {
    /// Every source type.
    pub const ALL: [Self; 6] = [
        Self::AnnualLetter,
        Self::Interview,
        Self::Speech,
        Self::Book,
        Self::Memo,
        Self::Tweet,
    ];

    /// Wire label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AnnualLetter => "annual_letter",
            Self::Interview => "interview",
            Self::Speech => "speech",
            Self::Book => "book",
            Self::Memo => "memo",
            Self::Tweet => "tweet",
        }
    }

    /// Human-readable label, e.g. `Annual Letter`.
    #[must_use]
    pub const fn display_label(self) -> &'static str {
        match self {
            Self::AnnualLetter => "Annual Letter",
            Self::Interview => "Interview",
            Self::Speech => "Speech",
            Self::Book => "Book",
            Self::Memo => "Memo",
            Self::Tweet => "Tweet",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceType {
    type Err = OracleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| OracleError::unknown_label("source type", s))
    }
}

/// A single curated statement by an investor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestorInsight {
    /// Insight identifier.
    pub id: String,
    /// Owning investor's id.
    pub investor_id: String,
    /// Verbatim quote.
    pub content: String,
    /// Where it was said.
    pub source: String,
    /// Kind of source.
    pub source_type: SourceType,
    /// Date string as supplied, usually `YYYY-MM-DD`.
    pub date_said: String,
    /// Context note.
    pub context: String,
    /// Company names mentioned.
    pub companies_mentioned: Vec<String>,
    /// Sentiment label.
    pub sentiment: Sentiment,
    /// Snake_case investment themes.
    pub investment_themes: Vec<String>,
    /// Curator confidence in `[0, 1]`.
    pub confidence_score: f64,
    /// Free-form tags.
    pub tags: Vec<String>,
}

/// An investor bundled with their insights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestorWithInsights {
    /// The investor profile.
    #[serde(flatten)]
    pub investor: Investor,
    /// Their insights, newest first as supplied.
    pub insights: Vec<InvestorInsight>,
}
