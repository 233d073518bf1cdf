//! Analysis outputs: per-stage insights, the canonical [`Insight`], and the
//! site-configuration view derived from it.

use serde::{Deserialize, Serialize};

/// Content sections a generated site may prioritise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionTag {
    Banner,
    Portfolio,
    Planos,
    Depoimentos,
    Blog,
    Instagram,
}

impl std::fmt::Display for SectionTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SectionTag::Banner => write!(f, "banner"),
            SectionTag::Portfolio => write!(f, "portfolio"),
            SectionTag::Planos => write!(f, "planos"),
            SectionTag::Depoimentos => write!(f, "depoimentos"),
            SectionTag::Blog => write!(f, "blog"),
            SectionTag::Instagram => write!(f, "instagram"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteColor {
    /// Canonical `#RRGGBB`.
    pub hex: String,
    pub name: String,
}

impl PaletteColor {
    #[must_use]
    pub fn new(hex: &str, name: &str) -> Self {
        Self {
            hex: hex.to_string(),
            name: name.to_string(),
        }
    }
}

/// Output of the rule-based caption scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeuristicInsights {
    pub section_priority: Vec<SectionTag>,
    pub ctas: Vec<String>,
    /// In `[0.0, 1.0]`.
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteInsights {
    pub colors: Vec<PaletteColor>,
    pub reference_post_ids: Vec<String>,
}

/// Which synthesis path produced a [`TextInsights`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSource {
    Generative,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextInsights {
    pub tone_of_voice: String,
    pub headline_ideas: Vec<String>,
    pub keywords: Vec<String>,
    pub summary: String,
    /// Only reported by the generative service.
    pub primary_cta: Option<String>,
    pub source: TextSource,
}

/// The validated, canonical pipeline output.
///
/// Built only through aggregation, which enforces every size and range
/// constraint documented on the fields below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    pub username: String,
    pub tone_of_voice: String,
    /// At least one entry.
    pub headline_ideas: Vec<String>,
    /// Between 3 and 6 entries.
    pub palette: Vec<PaletteColor>,
    /// At least two entries, no duplicates.
    pub section_priority: Vec<SectionTag>,
    /// At least one entry.
    pub ctas: Vec<String>,
    /// At least one entry.
    pub keywords: Vec<String>,
    pub confidence: f64,
    /// At most ten entries.
    pub reference_post_ids: Vec<String>,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteBranding {
    pub palette: Vec<String>,
    pub tone_of_voice: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub hero_headline: String,
    pub hero_subheadline: String,
    pub ctas: Vec<String>,
    pub sections: Vec<String>,
}

/// Minimal branding/content suggestion derived from an [`Insight`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfigSuggestion {
    pub branding: SiteBranding,
    pub content: SiteContent,
}
