//! Investor insight card view model.

use oracle_core::{
    Investor, InvestorInsight, SourceType, class_names, format_date_str, humanize_label,
    initials, sentiment_bg_class, sentiment_icon, sentiment_text_class,
};

const CARD_BASE_CLASS: &str = "card border-l-4 transition-all duration-300 hover:shadow-xl group";
const BADGE_BASE_CLASS: &str =
    "inline-flex items-center space-x-1 px-2 py-1 rounded-full text-xs font-medium";
const MAX_TAGS: usize = 5;

/// Header block naming the investor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvestorHeader {
    /// Avatar initials, e.g. `WB`.
    pub initials: String,
    /// Display name.
    pub name: String,
    /// Role or title.
    pub title: String,
}

/// Sentiment pill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentimentBadge {
    /// Glyph for the sentiment.
    pub icon: &'static str,
    /// Label with its first underscore replaced, e.g. `strongly bullish`.
    pub label: String,
    /// Full class list of the pill.
    pub class: String,
}

/// Everything an insight card renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightCardView {
    /// Container class list.
    pub class: String,
    /// Present unless the investor header is turned off.
    pub investor: Option<InvestorHeader>,
    /// Sentiment pill.
    pub badge: SentimentBadge,
    /// `"{n}% confidence"`.
    pub confidence: String,
    /// The statement, wrapped in double quotes.
    pub quote: String,
    /// `text-sm` when compact, `text-base` otherwise.
    pub quote_class: &'static str,
    /// Human label of the source type, e.g. `Annual Letter`.
    pub source_label: &'static str,
    /// Icon name of the source type.
    pub source_icon: &'static str,
    /// `Mon D, YYYY`, or the raw string when it does not parse as a date.
    pub date: String,
    /// Companies mentioned, comma separated; absent when there are none.
    pub companies: Option<String>,
    /// Humanized themes; empty when compact.
    pub themes: Vec<String>,
    /// Up to five `#tag` chips; empty when compact.
    pub tags: Vec<String>,
    /// `+N more` when tags were cut.
    pub more_tags: Option<String>,
}

/// Builder for an [`InsightCardView`].
#[derive(Debug, Clone)]
pub struct InsightCard<'a> {
    insight: &'a InvestorInsight,
    investor: &'a Investor,
    show_investor: bool,
    compact: bool,
    class_name: Option<String>,
}

impl<'a> InsightCard<'a> {
    /// Full-size card with the investor header shown.
    #[must_use]
    pub const fn new(insight: &'a InvestorInsight, investor: &'a Investor) -> Self {
        Self {
            insight,
            investor,
            show_investor: true,
            compact: false,
            class_name: None,
        }
    }

    /// Show or hide the investor header.
    #[must_use]
    pub const fn show_investor(mut self, show: bool) -> Self {
        self.show_investor = show;
        self
    }

    /// Compact cards drop themes and tags and use tighter padding.
    #[must_use]
    pub const fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    /// Extra classes appended to the container.
    #[must_use]
    pub fn class_name(mut self, class: impl Into<String>) -> Self {
        self.class_name = Some(class.into());
        self
    }

    /// Render the card.
    #[must_use]
    pub fn render(&self) -> InsightCardView {
        let insight = self.insight;
        let sentiment = insight.sentiment;
        let label = sentiment.label();

        let class = class_names([
            CARD_BASE_CLASS,
            sentiment_bg_class(sentiment),
            if label.contains("bullish") { "border-l-success-500" } else { "" },
            if label.contains("bearish") { "border-l-danger-500" } else { "" },
            if label == "neutral" { "border-l-gray-400" } else { "" },
            if self.compact { "p-4" } else { "p-6" },
            self.class_name.as_deref().unwrap_or_default(),
        ]);

        let badge = SentimentBadge {
            icon: sentiment_icon(sentiment),
            label: humanize_label(label),
            class: class_names([
                BADGE_BASE_CLASS,
                sentiment_bg_class(sentiment),
                sentiment_text_class(sentiment),
            ]),
        };

        let (tags, more_tags) = if self.compact {
            (Vec::new(), None)
        } else {
            let shown = insight
                .tags
                .iter()
                .take(MAX_TAGS)
                .map(|t| format!("#{t}"))
                .collect();
            let more = (insight.tags.len() > MAX_TAGS)
                .then(|| format!("+{} more", insight.tags.len() - MAX_TAGS));
            (shown, more)
        };

        InsightCardView {
            class,
            investor: self.show_investor.then(|| InvestorHeader {
                initials: initials(&self.investor.name),
                name: self.investor.name.clone(),
                title: self.investor.title.clone(),
            }),
            badge,
            confidence: format!("{}% confidence", percent_of_one(insight.confidence_score)),
            quote: format!("\"{}\"", insight.content),
            quote_class: if self.compact { "text-sm" } else { "text-base" },
            source_label: insight.source_type.display_label(),
            source_icon: source_icon(insight.source_type),
            date: display_date(&insight.date_said),
            companies: (!insight.companies_mentioned.is_empty())
                .then(|| insight.companies_mentioned.join(", ")),
            themes: if self.compact {
                Vec::new()
            } else {
                insight
                    .investment_themes
                    .iter()
                    .map(|t| humanize_label(t))
                    .collect()
            },
            tags,
            more_tags,
        }
    }
}

/// Icon name for a source type.
#[must_use]
pub const fn source_icon(source_type: SourceType) -> &'static str {
    match source_type {
        SourceType::AnnualLetter | SourceType::Memo => "file-text",
        SourceType::Interview | SourceType::Speech => "message-circle",
        SourceType::Book => "book",
        SourceType::Tweet => "twitter",
    }
}

/// A 0..=1 score as a whole percentage, rounded half away from zero.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn percent_of_one(score: f64) -> i64 {
    (score * 100.0).round() as i64
}

fn display_date(raw: &str) -> String {
    format_date_str(raw).unwrap_or_else(|_e| {
        #[cfg(feature = "tracing")]
        tracing::debug!(date = raw, error = %_e, "unparseable insight date; showing raw");
        raw.to_string()
    })
}
