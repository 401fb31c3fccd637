//! Seven-point investor sentiment scale.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OracleError;

/// Categorical investor-opinion label, ordered from strongly bearish to strongly bullish.
///
/// Treated as an opaque classification key rather than a numeric scale; the
/// derived ordering only reflects the declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    /// Strongly bearish.
    StronglyBearish,
    /// Bearish.
    Bearish,
    /// Cautiously bearish.
    CautiouslyBearish,
    /// Neutral.
    Neutral,
    /// Cautiously bullish.
    CautiouslyBullish,
    /// Bullish.
    Bullish,
    /// Strongly bullish.
    StronglyBullish,
}

/// Coarse grouping of a [`Sentiment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentimentTone {
    /// Any label containing "bullish".
    Bullish,
    /// Any label containing "bearish".
    Bearish,
    /// The neutral label.
    Neutral,
}

impl Sentiment {
    /// Every label, bearish to bullish.
    pub const ALL: [Self; 7] = [
        Self::StronglyBearish,
        Self::Bearish,
        Self::CautiouslyBearish,
        Self::Neutral,
        Self::CautiouslyBullish,
        Self::Bullish,
        Self::StronglyBullish,
    ];

    /// The snake_case wire label, e.g. `cautiously_bullish`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::StronglyBearish => "strongly_bearish",
            Self::Bearish => "bearish",
            Self::CautiouslyBearish => "cautiously_bearish",
            Self::Neutral => "neutral",
            Self::CautiouslyBullish => "cautiously_bullish",
            Self::Bullish => "bullish",
            Self::StronglyBullish => "strongly_bullish",
        }
    }

    /// Coarse grouping by label substring.
    #[must_use]
    pub const fn tone(self) -> SentimentTone {
        match self {
            Self::StronglyBearish | Self::Bearish | Self::CautiouslyBearish => {
                SentimentTone::Bearish
            }
            Self::Neutral => SentimentTone::Neutral,
            Self::CautiouslyBullish | Self::Bullish | Self::StronglyBullish => {
                SentimentTone::Bullish
            }
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Sentiment {
    type Err = OracleError;

    /// Strict parse of the wire label. Free text goes through the lenient
    /// boundary conversion in `oracle-core` instead.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|s2| s2.label() == s)
            .ok_or_else(|| OracleError::UnknownSentiment(s.to_string()))
    }
}
