//! Raw profile resolution from the fixture store or the live platform API.

use std::path::{Path, PathBuf};

use pinsight_core::{AppConfig, Provenance, RawProfile};

use crate::error::IngestError;

/// Where to obtain a raw profile from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileSource {
    #[default]
    Fixture,
    Api,
}

impl std::fmt::Display for ProfileSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileSource::Fixture => write!(f, "fixture"),
            ProfileSource::Api => write!(f, "api"),
        }
    }
}

/// Live-API credentials passed explicitly by the caller.
///
/// Any field left `None` is taken from [`AppConfig`].
#[derive(Default, Clone)]
pub struct ApiCredentials {
    pub access_token: Option<String>,
    pub account_id: Option<String>,
}

impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials")
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[redacted]"),
            )
            .field("account_id", &self.account_id)
            .finish()
    }
}

/// Resolve a raw profile for `username` from the requested source.
///
/// # Errors
///
/// - [`IngestError::NotFound`] if no fixture exists for `username`; the error
///   carries the path that was tried.
/// - [`IngestError::Io`] / [`IngestError::Parse`] if the fixture cannot be read
///   or is not a valid profile document.
/// - [`IngestError::Configuration`] if the API source lacks a credential.
/// - [`IngestError::NotImplemented`] for any API request that passes the
///   credential check.
pub async fn resolve(
    username: &str,
    source: ProfileSource,
    config: &AppConfig,
    credentials: &ApiCredentials,
) -> Result<(RawProfile, Provenance), IngestError> {
    match source {
        ProfileSource::Fixture => load_fixture(&config.fixtures_dir, username).await,
        ProfileSource::Api => fetch_live(username, config, credentials),
    }
}

fn fixture_path(fixtures_dir: &Path, username: &str) -> PathBuf {
    fixtures_dir.join(format!("{username}.json"))
}

async fn load_fixture(
    fixtures_dir: &Path,
    username: &str,
) -> Result<(RawProfile, Provenance), IngestError> {
    let path = fixture_path(fixtures_dir, username);

    // Lookups are keyed by bare username; anything that could walk out of the
    // fixture directory is simply not a fixture.
    if username.trim().is_empty() || username.contains(['/', '\\']) || username.starts_with('.')
    {
        return Err(IngestError::NotFound { path });
    }

    let content = match tokio::fs::read_to_string(&path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(IngestError::NotFound { path });
        }
        Err(source) => return Err(IngestError::Io { path, source }),
    };

    let profile: RawProfile = serde_json::from_str(&content).map_err(|source| {
        IngestError::Parse {
            path: path.clone(),
            source,
        }
    })?;

    tracing::debug!(
        username,
        path = %path.display(),
        posts = profile.posts.len(),
        "loaded profile fixture"
    );

    Ok((
        profile,
        Provenance::Fixture {
            loaded_from_path: path,
        },
    ))
}

fn fetch_live(
    username: &str,
    config: &AppConfig,
    credentials: &ApiCredentials,
) -> Result<(RawProfile, Provenance), IngestError> {
    let access_token = credentials
        .access_token
        .as_ref()
        .or(config.instagram_access_token.as_ref());
    let account_id = credentials
        .account_id
        .as_ref()
        .or(config.instagram_account_id.as_ref());

    let mut missing = Vec::new();
    if access_token.is_none() {
        missing.push("INSTAGRAM_ACCESS_TOKEN");
    }
    if account_id.is_none() {
        missing.push("INSTAGRAM_ACCOUNT_ID");
    }
    if !missing.is_empty() {
        return Err(IngestError::Configuration(format!(
            "live profile source requires credentials; missing: {}",
            missing.join(", ")
        )));
    }

    Err(IngestError::NotImplemented(format!(
        "live fetch for '{username}' needs a platform API integration that maps the \
         provider's profile and media responses onto RawProfile; use the fixture source"
    )))
}
