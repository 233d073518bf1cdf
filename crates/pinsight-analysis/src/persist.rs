//! JSON and markdown artifacts for analysed profiles.

use std::path::{Path, PathBuf};

use pinsight_core::Insight;
use serde::Serialize;

use crate::error::PersistError;

/// Write `value` as pretty JSON to `<dir>/<stem>.json`, creating `dir`.
///
/// # Errors
///
/// Returns [`PersistError`] if serialization or any filesystem step fails.
pub async fn write_json<T: Serialize>(
    dir: &Path,
    stem: &str,
    value: &T,
) -> Result<PathBuf, PersistError> {
    let body = serde_json::to_string_pretty(value)?;
    write_artifact(dir, &format!("{stem}.json"), body).await
}

/// Write `markdown` to `<dir>/<stem>.md`, creating `dir`.
///
/// # Errors
///
/// Returns [`PersistError::Io`] if any filesystem step fails.
pub async fn write_markdown(
    dir: &Path,
    stem: &str,
    markdown: &str,
) -> Result<PathBuf, PersistError> {
    write_artifact(dir, &format!("{stem}.md"), markdown.to_string()).await
}

async fn write_artifact(dir: &Path, file_name: &str, body: String) -> Result<PathBuf, PersistError> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|source| PersistError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

    let path = dir.join(file_name);
    tokio::fs::write(&path, body)
        .await
        .map_err(|source| PersistError::Io {
            path: path.clone(),
            source,
        })?;

    tracing::debug!(path = %path.display(), "wrote artifact");
    Ok(path)
}

/// Render the markdown summary of an insight.
#[must_use]
pub fn build_markdown_summary(insight: &Insight) -> String {
    let palette = insight
        .palette
        .iter()
        .map(|color| format!("- `{}` — {}", color.hex, color.name))
        .collect::<Vec<_>>()
        .join("\n");
    let ctas = insight
        .ctas
        .iter()
        .map(|cta| format!("- {cta}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "# Insights para @{username}\n\n\
         ## Resumo\n\n{summary}\n\n\
         ## Paleta\n\n{palette}\n\n\
         ## CTAs\n\n{ctas}\n\n\
         ## Tom de voz\n\n{tone}\n",
        username = insight.username,
        summary = insight.summary,
        tone = insight.tone_of_voice,
    )
}
