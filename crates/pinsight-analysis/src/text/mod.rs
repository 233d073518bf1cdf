//! Tone, headline, keyword and summary synthesis.
//!
//! Two paths share one contract: when a credential is available the profile is
//! sent to a generative service; otherwise, or when that request fails in any
//! way, a deterministic heuristic path produces the same shape. Callers always
//! receive [`TextInsights`].

mod fallback;
mod generative;
pub(crate) mod keywords;
mod normalize;

use pinsight_core::{AppConfig, RawProfile, TextInsights, TextSource};
use serde::Serialize;

use crate::error::GenerativeError;
use fallback::synthesize_fallback;
use generative::{GenerativeClient, SYSTEM_PROMPT};
use keywords::{push_unique, top_terms};

pub use normalize::normalize;

const GENERATIVE_TERM_LIMIT: usize = 10;
const MAX_KEYWORDS: usize = 10;

/// Connection settings for the generative text service.
#[derive(Clone)]
pub struct GenerativeSettings {
    /// Key from process configuration; an explicit override takes precedence.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl GenerativeSettings {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            api_key: config.openai_api_key.clone(),
            model: config.openai_model.clone(),
            base_url: config.openai_base_url.clone(),
            timeout_secs: config.generative_timeout_secs,
        }
    }
}

impl std::fmt::Debug for GenerativeSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerativeSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Serialize)]
struct ProfileDigest<'a> {
    biography: &'a str,
    posts: Vec<PostDigest<'a>>,
}

#[derive(Serialize)]
struct PostDigest<'a> {
    caption: &'a str,
    keywords: &'a [String],
}

/// Produce text insights for a profile. Never fails.
///
/// `api_key_override` wins over `settings.api_key`. Without either, or when
/// the service request fails, the deterministic path is used and the failure
/// is only logged.
pub async fn synthesize(
    profile: &RawProfile,
    settings: &GenerativeSettings,
    api_key_override: Option<&str>,
) -> TextInsights {
    let api_key = api_key_override
        .filter(|key| !key.trim().is_empty())
        .or(settings.api_key.as_deref());

    let Some(api_key) = api_key else {
        tracing::debug!(
            username = %profile.username,
            "no generative credential; using deterministic synthesis"
        );
        return synthesize_fallback(profile);
    };

    match synthesize_generative(profile, settings, api_key).await {
        Ok(insights) => insights,
        Err(e) => {
            tracing::warn!(
                username = %profile.username,
                error = %e,
                "generative synthesis failed; using deterministic synthesis"
            );
            synthesize_fallback(profile)
        }
    }
}

async fn synthesize_generative(
    profile: &RawProfile,
    settings: &GenerativeSettings,
    api_key: &str,
) -> Result<TextInsights, GenerativeError> {
    let client = GenerativeClient::new(settings, api_key)?;
    let user_content = serde_json::to_string_pretty(&digest(profile))?;
    let reply = client.analyze(SYSTEM_PROMPT, &user_content).await?;

    let mut keywords = Vec::new();
    for theme in &reply.themes {
        push_unique(&mut keywords, theme);
    }
    for term in top_terms(&corpus(profile), GENERATIVE_TERM_LIMIT) {
        push_unique(&mut keywords, &term);
    }
    keywords.truncate(MAX_KEYWORDS);

    let summary = format!(
        "Conteúdo focado em {} com tom de voz {}.",
        reply.themes.join(", "),
        reply.tone_of_voice.to_lowercase()
    );

    tracing::debug!(
        username = %profile.username,
        themes = reply.themes.len(),
        "generative synthesis succeeded"
    );

    Ok(TextInsights {
        tone_of_voice: reply.tone_of_voice,
        headline_ideas: reply.headline_ideas,
        keywords,
        summary,
        primary_cta: Some(reply.primary_cta),
        source: TextSource::Generative,
    })
}

fn digest(profile: &RawProfile) -> ProfileDigest<'_> {
    ProfileDigest {
        biography: &profile.biography,
        posts: profile
            .posts
            .iter()
            .map(|post| PostDigest {
                caption: &post.caption,
                keywords: post.keyword_tags(),
            })
            .collect(),
    }
}

/// Normalized biography followed by every normalized caption.
fn corpus(profile: &RawProfile) -> Vec<String> {
    std::iter::once(&profile.biography)
        .chain(profile.posts.iter().map(|post| &post.caption))
        .map(|text| normalize(text))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{post, profile};

    fn offline_settings() -> GenerativeSettings {
        GenerativeSettings {
            api_key: None,
            model: "gpt-4o-mini".to_string(),
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 1,
        }
    }

    #[tokio::test]
    async fn no_credential_uses_fallback() {
        let p = profile("ana", "Ana", "Ilustradora freelancer");
        let insights = synthesize(&p, &offline_settings(), None).await;
        assert_eq!(insights.source, TextSource::Fallback);
        assert_eq!(insights.tone_of_voice, "Criativo e acolhedor");
    }

    #[tokio::test]
    async fn blank_override_does_not_count_as_credential() {
        let p = profile("ana", "Ana", "bio");
        let insights = synthesize(&p, &offline_settings(), Some("  ")).await;
        assert_eq!(insights.source, TextSource::Fallback);
    }

    #[tokio::test]
    async fn unreachable_service_falls_back() {
        let p = profile("ana", "Ana", "Ilustradora freelancer");
        let insights = synthesize(&p, &offline_settings(), Some("sk-test")).await;
        assert_eq!(insights.source, TextSource::Fallback);
        assert!(!insights.keywords.is_empty());
    }

    #[test]
    fn digest_carries_captions_and_keywords() {
        let mut p = profile("ana", "Ana", "bio");
        let mut first = post("p1", "caption");
        first.keywords = Some(vec!["tag".to_string()]);
        p.posts = vec![first];
        let value = serde_json::to_value(digest(&p)).unwrap();
        assert_eq!(value["biography"], "bio");
        assert_eq!(value["posts"][0]["caption"], "caption");
        assert_eq!(value["posts"][0]["keywords"][0], "tag");
    }
}
