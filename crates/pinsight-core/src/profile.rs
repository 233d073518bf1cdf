use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A social profile snapshot as ingested, before any analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProfile {
    pub username: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub biography: String,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
    #[serde(default)]
    pub external_url: Option<String>,
    #[serde(default)]
    pub categories: Option<Vec<String>>,
    #[serde(default)]
    pub highlights: Option<Vec<String>>,
    #[serde(default)]
    pub posts: Vec<Post>,
}

impl RawProfile {
    /// Display name, falling back to the username when the profile has none.
    #[must_use]
    pub fn display_name(&self) -> &str {
        let name = self.full_name.trim();
        if name.is_empty() {
            &self.username
        } else {
            name
        }
    }

    /// Category tags, empty when the profile declares none.
    #[must_use]
    pub fn category_tags(&self) -> &[String] {
        self.categories.as_deref().unwrap_or_default()
    }

    /// Whether the profile links to a non-blank external site.
    #[must_use]
    pub fn has_external_url(&self) -> bool {
        self.external_url
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub comments: u64,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub dominant_colors: Option<Vec<String>>,
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
}

impl Post {
    #[must_use]
    pub fn colors(&self) -> &[String] {
        self.dominant_colors.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn keyword_tags(&self) -> &[String] {
        self.keywords.as_deref().unwrap_or_default()
    }
}

/// Where a [`RawProfile`] came from. Carried for traceability only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Provenance {
    #[serde(rename_all = "camelCase")]
    Fixture { loaded_from_path: PathBuf },
    #[serde(rename_all = "camelCase")]
    Api {
        fetched_at: DateTime<Utc>,
        request_id: Uuid,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_json() -> serde_json::Value {
        serde_json::json!({
            "username": "demo",
            "posts": [
                { "id": "p1", "timestamp": "2024-03-01T12:00:00Z" }
            ]
        })
    }

    #[test]
    fn deserializes_minimal_profile_with_defaults() {
        let profile: RawProfile = serde_json::from_value(minimal_json()).unwrap();
        assert_eq!(profile.username, "demo");
        assert_eq!(profile.biography, "");
        assert!(profile.external_url.is_none());
        assert_eq!(profile.posts.len(), 1);
        assert!(profile.posts[0].colors().is_empty());
        assert!(profile.posts[0].keyword_tags().is_empty());
    }

    #[test]
    fn display_name_falls_back_to_username() {
        let mut profile: RawProfile = serde_json::from_value(minimal_json()).unwrap();
        assert_eq!(profile.display_name(), "demo");
        profile.full_name = "  Demo Studio ".to_string();
        assert_eq!(profile.display_name(), "Demo Studio");
    }

    #[test]
    fn blank_external_url_is_not_a_link() {
        let mut profile: RawProfile = serde_json::from_value(minimal_json()).unwrap();
        profile.external_url = Some("  ".to_string());
        assert!(!profile.has_external_url());
        profile.external_url = Some("https://demo.example".to_string());
        assert!(profile.has_external_url());
    }

    #[test]
    fn provenance_serializes_with_kind_tag() {
        let fixture = Provenance::Fixture {
            loaded_from_path: PathBuf::from("fixtures/demo.json"),
        };
        let value = serde_json::to_value(&fixture).unwrap();
        assert_eq!(value["kind"], "fixture");
        assert_eq!(value["loadedFromPath"], "fixtures/demo.json");
    }
}
