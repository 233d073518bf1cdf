use pinsight_core::{Insight, SiteBranding, SiteConfigSuggestion, SiteContent};

/// Project an insight into a branding/content suggestion. Pure and total.
#[must_use]
pub fn project(insight: &Insight) -> SiteConfigSuggestion {
    let hero_headline = insight
        .headline_ideas
        .first()
        .cloned()
        .unwrap_or_else(|| format!("Conheça {}", insight.username));

    SiteConfigSuggestion {
        branding: SiteBranding {
            palette: insight.palette.iter().map(|c| c.hex.clone()).collect(),
            tone_of_voice: insight.tone_of_voice.clone(),
        },
        content: SiteContent {
            hero_headline,
            hero_subheadline: insight.summary.clone(),
            ctas: insight.ctas.clone(),
            sections: insight
                .section_priority
                .iter()
                .map(ToString::to_string)
                .collect(),
        },
    }
}
