//! Shared data model and configuration for the profile insight pipeline.

pub mod app_config;
pub mod config;
pub mod insight;
pub mod profile;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use insight::{
    HeuristicInsights, Insight, PaletteColor, PaletteInsights, SectionTag, SiteBranding,
    SiteConfigSuggestion, SiteContent, TextInsights, TextSource,
};
pub use profile::{Post, Provenance, RawProfile};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
