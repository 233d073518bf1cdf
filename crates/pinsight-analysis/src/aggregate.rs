//! Merge of the three analysis outputs into a validated [`Insight`].

use std::collections::HashSet;

use pinsight_core::{HeuristicInsights, Insight, PaletteInsights, TextInsights};

use crate::error::ValidationError;
use crate::text::keywords::same_ignoring_case;

const MIN_PALETTE: usize = 3;
const MAX_PALETTE: usize = 6;
const MIN_SECTIONS: usize = 2;
const MAX_REFERENCE_POSTS: usize = 10;

/// Merge stage outputs into the canonical [`Insight`] and validate it.
///
/// Performs no analysis of its own. A generative primary CTA is appended to
/// the heuristic CTA list when it is not already present.
///
/// # Errors
///
/// Returns [`ValidationError`] naming the first field that violates the
/// insight schema. No partially valid insight is ever returned.
pub fn aggregate(
    heuristics: HeuristicInsights,
    palette: PaletteInsights,
    text: TextInsights,
    username: &str,
) -> Result<Insight, ValidationError> {
    let mut ctas = heuristics.ctas;
    if let Some(cta) = text.primary_cta {
        if !ctas.iter().any(|existing| same_ignoring_case(existing, &cta)) {
            ctas.push(cta);
        }
    }

    let insight = Insight {
        username: username.trim().to_string(),
        tone_of_voice: text.tone_of_voice,
        headline_ideas: text.headline_ideas,
        palette: palette.colors,
        section_priority: heuristics.section_priority,
        ctas,
        keywords: text.keywords,
        confidence: heuristics.confidence,
        reference_post_ids: palette.reference_post_ids,
        summary: text.summary,
    };

    validate(&insight)?;
    Ok(insight)
}

fn validate(insight: &Insight) -> Result<(), ValidationError> {
    if insight.username.is_empty() {
        return Err(ValidationError::new("username", "must be non-empty"));
    }
    if insight.tone_of_voice.trim().is_empty() {
        return Err(ValidationError::new("toneOfVoice", "must be non-empty"));
    }
    non_blank_list("headlineIdeas", &insight.headline_ideas)?;

    let palette_len = insight.palette.len();
    if !(MIN_PALETTE..=MAX_PALETTE).contains(&palette_len) {
        return Err(ValidationError::new(
            "palette",
            format!("must hold {MIN_PALETTE} to {MAX_PALETTE} colors, got {palette_len}"),
        ));
    }
    if let Some(bad) = insight.palette.iter().find(|c| !is_hex_color(&c.hex)) {
        return Err(ValidationError::new(
            "palette",
            format!("'{}' is not a #RRGGBB color", bad.hex),
        ));
    }

    if insight.section_priority.len() < MIN_SECTIONS {
        return Err(ValidationError::new(
            "sectionPriority",
            format!(
                "must hold at least {MIN_SECTIONS} sections, got {}",
                insight.section_priority.len()
            ),
        ));
    }
    let mut seen = HashSet::new();
    if let Some(dup) = insight.section_priority.iter().find(|s| !seen.insert(**s)) {
        return Err(ValidationError::new(
            "sectionPriority",
            format!("duplicate section '{dup}'"),
        ));
    }

    non_blank_list("ctas", &insight.ctas)?;
    non_blank_list("keywords", &insight.keywords)?;

    if !insight.confidence.is_finite() || !(0.0..=1.0).contains(&insight.confidence) {
        return Err(ValidationError::new(
            "confidence",
            format!("must be within [0, 1], got {}", insight.confidence),
        ));
    }

    if insight.reference_post_ids.len() > MAX_REFERENCE_POSTS {
        return Err(ValidationError::new(
            "referencePostIds",
            format!(
                "must hold at most {MAX_REFERENCE_POSTS} ids, got {}",
                insight.reference_post_ids.len()
            ),
        ));
    }

    if insight.summary.trim().is_empty() {
        return Err(ValidationError::new("summary", "must be non-empty"));
    }

    Ok(())
}

fn non_blank_list(field: &'static str, values: &[String]) -> Result<(), ValidationError> {
    if values.is_empty() {
        return Err(ValidationError::new(field, "must hold at least one entry"));
    }
    if values.iter().any(|v| v.trim().is_empty()) {
        return Err(ValidationError::new(field, "entries must be non-empty"));
    }
    Ok(())
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}
