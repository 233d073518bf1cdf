//! Insight pipeline orchestration.

use std::path::PathBuf;

use pinsight_core::{AppConfig, Insight, SiteConfigSuggestion};

use crate::aggregate::aggregate;
use crate::error::AnalysisError;
use crate::heuristics::score;
use crate::ingest::{resolve, ApiCredentials, ProfileSource};
use crate::palette::derive;
use crate::persist::{build_markdown_summary, write_json, write_markdown};
use crate::site_config::project;
use crate::text::{synthesize, GenerativeSettings};

/// Per-invocation options for [`analyze_profile`].
#[derive(Debug, Clone, Default)]
pub struct AnalyzeOptions {
    pub source: ProfileSource,
    /// Write `<username>-insight.json` and `<username>.md` to the output dir.
    pub persist: bool,
    /// Generative service key; overrides the configured one.
    pub api_key: Option<String>,
    pub credentials: ApiCredentials,
}

#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisOutcome {
    pub insight: Insight,
    pub site_config: SiteConfigSuggestion,
    /// Path of the persisted insight JSON, when persistence was requested.
    pub stored_at: Option<PathBuf>,
}

/// Run the full insight pipeline for one profile.
///
/// 1. Resolve the raw profile from the requested source.
/// 2. Run caption heuristics, palette derivation and text synthesis
///    concurrently over the same profile.
/// 3. Aggregate and validate the canonical insight.
/// 4. Project the site-configuration suggestion.
/// 5. Optionally persist JSON and markdown artifacts.
///
/// # Errors
///
/// Returns [`AnalysisError::Ingest`] if the profile cannot be resolved,
/// [`AnalysisError::Validation`] if the merged insight violates its schema, or
/// [`AnalysisError::Persist`] if requested artifacts cannot be written.
/// Generative service failures are never surfaced.
pub async fn analyze_profile(
    config: &AppConfig,
    username: &str,
    options: &AnalyzeOptions,
) -> Result<AnalysisOutcome, AnalysisError> {
    let (profile, provenance) =
        resolve(username, options.source, config, &options.credentials).await?;
    tracing::debug!(username, provenance = ?provenance, "profile resolved");

    let settings = GenerativeSettings::from_config(config);
    let (heuristics, palette, text) = tokio::join!(
        async { score(&profile) },
        async { derive(&profile.posts) },
        synthesize(&profile, &settings, options.api_key.as_deref()),
    );
    let text_source = text.source;

    let insight = aggregate(heuristics, palette, text, username)?;
    let site_config = project(&insight);

    let stored_at = if options.persist {
        let path = write_json(
            &config.output_dir,
            &format!("{}-insight", insight.username),
            &insight,
        )
        .await?;
        write_markdown(
            &config.output_dir,
            &insight.username,
            &build_markdown_summary(&insight),
        )
        .await?;
        Some(path)
    } else {
        None
    };

    tracing::info!(
        username,
        source = %options.source,
        text_source = ?text_source,
        confidence = insight.confidence,
        palette = insight.palette.len(),
        persisted = stored_at.is_some(),
        "profile analysis complete"
    );

    Ok(AnalysisOutcome {
        insight,
        site_config,
        stored_at,
    })
}
