use oracle_core::{Investor, InvestorInsight, InvestorWithInsights, Sentiment, SourceType};

fn investor(
    id: &str,
    name: &str,
    title: &str,
    birth_year: u16,
    net_worth: &str,
    investment_philosophy: &str,
    famous_quotes: &[&str],
) -> Investor {
    Investor {
        id: id.to_string(),
        name: name.to_string(),
        slug: id.to_string(),
        title: title.to_string(),
        birth_year,
        nationality: "American".to_string(),
        net_worth: net_worth.to_string(),
        investment_philosophy: investment_philosophy.to_string(),
        famous_quotes: famous_quotes.iter().map(|q| (*q).to_string()).collect(),
        photo_url: format!("/images/investors/{id}.jpg"),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

pub fn buffett_apple_insight() -> InvestorInsight {
    InvestorInsight {
        id: "buffett_001".to_string(),
        investor_id: "warren_buffett".to_string(),
        content: "Apple has a consumer product that is extraordinarily sticky. People love their iPhone. The whole ecosystem is incredible. And we own a good chunk of it.".to_string(),
        source: "2023 Berkshire Hathaway Annual Meeting".to_string(),
        source_type: SourceType::Speech,
        date_said: "2023-05-06".to_string(),
        context: "Discussing Berkshire's investment in Apple and its consumer moat".to_string(),
        companies_mentioned: strings(&["Apple"]),
        sentiment: Sentiment::StronglyBullish,
        investment_themes: strings(&["competitive_advantage", "consumer_stickiness"]),
        confidence_score: 0.95,
        tags: strings(&["Apple", "iPhone", "consumer_moat", "competitive_advantage"]),
    }
}

pub fn marks_cycle_insight() -> InvestorInsight {
    InvestorInsight {
        id: "marks_001".to_string(),
        investor_id: "howard_marks".to_string(),
        content: "You can't predict. You can prepare. Today's prices assume a lot of good news, so caution is warranted.".to_string(),
        source: "Oaktree memo: Taking the Temperature".to_string(),
        source_type: SourceType::Memo,
        date_said: "2024-01-11".to_string(),
        context: "Assessing where the market stands in its cycle".to_string(),
        companies_mentioned: Vec::new(),
        sentiment: Sentiment::CautiouslyBearish,
        investment_themes: strings(&["market_cycles", "risk_management"]),
        confidence_score: 0.8,
        tags: strings(&[
            "cycles",
            "risk",
            "valuation",
            "sentiment",
            "credit",
            "macro",
            "oaktree",
        ]),
    }
}

pub fn all() -> Vec<InvestorWithInsights> {
    vec![
        InvestorWithInsights {
            investor: investor(
                "warren_buffett",
                "Warren Buffett",
                "Chairman & CEO, Berkshire Hathaway",
                1930,
                "120+ Billion USD",
                "Value investing with focus on companies with strong competitive advantages",
                &[
                    "It's far better to buy a wonderful company at a fair price than a fair company at a wonderful price.",
                    "Rule No. 1: Never lose money. Rule No. 2: Never forget Rule No. 1.",
                ],
            ),
            insights: vec![buffett_apple_insight()],
        },
        InvestorWithInsights {
            investor: investor(
                "peter_lynch",
                "Peter Lynch",
                "Former Manager, Fidelity Magellan Fund",
                1944,
                "350+ Million USD",
                "Growth investing focused on buying what you know",
                &[
                    "Invest in what you know.",
                    "The key to making money in stocks is not to get scared out of them.",
                ],
            ),
            insights: Vec::new(),
        },
        InvestorWithInsights {
            investor: investor(
                "howard_marks",
                "Howard Marks",
                "Co-Chairman, Oaktree Capital",
                1946,
                "2+ Billion USD",
                "Cycle awareness and risk management",
                &["Being too far ahead of your time is indistinguishable from being wrong."],
            ),
            insights: vec![marks_cycle_insight()],
        },
    ]
}
