//! Mapping of sentiment and recommendation labels to CSS-class tokens and glyphs.
//!
//! The enumerated [`Sentiment`] is the canonical representation. Label-based
//! lookups degrade to neutral defaults instead of failing, and free text from
//! upstream matchers is converted once at the boundary via [`sentiment_from_free_text`].

use oracle_types::{RecommendationAction, Sentiment};

/// Text class for unrecognized sentiment labels.
pub const NEUTRAL_TEXT_CLASS: &str = "text-gray-500";
/// Background class for unrecognized sentiment labels.
pub const NEUTRAL_BG_CLASS: &str = "bg-gray-50 border-gray-200";
/// Text class for unrecognized recommendation labels.
pub const UNKNOWN_RECOMMENDATION_CLASS: &str = "text-gray-600";
/// Class for a non-negative price move.
pub const GAIN_CLASS: &str = "text-success-600";
/// Class for a negative price move.
pub const LOSS_CLASS: &str = "text-danger-600";

/// Text color class for a sentiment.
#[must_use]
pub const fn sentiment_text_class(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::StronglyBullish => "text-success-600",
        Sentiment::Bullish => "text-success-500",
        Sentiment::CautiouslyBullish => "text-success-400",
        Sentiment::Neutral => NEUTRAL_TEXT_CLASS,
        Sentiment::CautiouslyBearish => "text-danger-400",
        Sentiment::Bearish => "text-danger-500",
        Sentiment::StronglyBearish => "text-danger-600",
    }
}

/// Background and border classes for a sentiment.
#[must_use]
pub const fn sentiment_bg_class(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::StronglyBullish | Sentiment::Bullish => "bg-success-50 border-success-200",
        Sentiment::CautiouslyBullish => "bg-success-25 border-success-200",
        Sentiment::Neutral => NEUTRAL_BG_CLASS,
        Sentiment::CautiouslyBearish => "bg-danger-25 border-danger-200",
        Sentiment::Bearish | Sentiment::StronglyBearish => "bg-danger-50 border-danger-200",
    }
}

/// Emoji glyph for a sentiment.
#[must_use]
pub const fn sentiment_icon(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::StronglyBullish => "🚀",
        Sentiment::Bullish => "📈",
        Sentiment::CautiouslyBullish | Sentiment::Bearish => "📊",
        Sentiment::Neutral => "➡️",
        Sentiment::CautiouslyBearish => "📉",
        Sentiment::StronglyBearish => "🚨",
    }
}

/// [`sentiment_text_class`] for a raw label; unknown labels get [`NEUTRAL_TEXT_CLASS`].
#[must_use]
pub fn sentiment_text_class_for_label(label: &str) -> &'static str {
    label
        .parse::<Sentiment>()
        .map_or(NEUTRAL_TEXT_CLASS, sentiment_text_class)
}

/// [`sentiment_bg_class`] for a raw label; unknown labels get [`NEUTRAL_BG_CLASS`].
#[must_use]
pub fn sentiment_bg_class_for_label(label: &str) -> &'static str {
    label
        .parse::<Sentiment>()
        .map_or(NEUTRAL_BG_CLASS, sentiment_bg_class)
}

/// Convert arbitrary sentiment text to the canonical enum.
///
/// An exact wire label maps to itself. Otherwise text containing "bullish" maps
/// to [`Sentiment::Bullish`], text containing "bearish" to [`Sentiment::Bearish`],
/// and anything else to [`Sentiment::Neutral`]. The check is case-sensitive and
/// "bullish" wins when both words appear.
#[must_use]
pub fn sentiment_from_free_text(text: &str) -> Sentiment {
    if let Ok(exact) = text.parse::<Sentiment>() {
        return exact;
    }
    let coarse = if text.contains("bullish") {
        Sentiment::Bullish
    } else if text.contains("bearish") {
        Sentiment::Bearish
    } else {
        Sentiment::Neutral
    };
    #[cfg(feature = "tracing")]
    tracing::debug!(input = text, mapped = %coarse, "coerced free-text sentiment");
    coarse
}

/// Text class for a recommendation label, case-insensitive.
#[must_use]
pub fn recommendation_text_class(label: &str) -> &'static str {
    match label.parse::<RecommendationAction>() {
        Ok(RecommendationAction::StrongBuy | RecommendationAction::Buy) => "text-success-600",
        Ok(RecommendationAction::Hold) => "text-yellow-600",
        Ok(RecommendationAction::Sell | RecommendationAction::StrongSell) => "text-danger-600",
        Err(_) => UNKNOWN_RECOMMENDATION_CLASS,
    }
}

/// Badge label, e.g. `Strong Buy`.
#[must_use]
pub const fn recommendation_label(action: RecommendationAction) -> &'static str {
    match action {
        RecommendationAction::StrongBuy => "Strong Buy",
        RecommendationAction::Buy => "Buy",
        RecommendationAction::Hold => "Hold",
        RecommendationAction::Sell => "Sell",
        RecommendationAction::StrongSell => "Strong Sell",
    }
}

/// Badge and score-bar background class.
#[must_use]
pub const fn recommendation_bg_class(action: RecommendationAction) -> &'static str {
    match action {
        RecommendationAction::StrongBuy => "bg-success-500",
        RecommendationAction::Buy => "bg-success-400",
        RecommendationAction::Hold => "bg-warning-400",
        RecommendationAction::Sell => "bg-danger-400",
        RecommendationAction::StrongSell => "bg-danger-500",
    }
}

/// Gain/loss class for a signed move.
#[must_use]
pub const fn change_class(gaining: bool) -> &'static str {
    if gaining { GAIN_CLASS } else { LOSS_CLASS }
}

/// Join class tokens with single spaces, skipping empty ones.
pub fn class_names<I, S>(classes: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for class in classes {
        let class = class.as_ref();
        if class.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(class);
    }
    out
}
