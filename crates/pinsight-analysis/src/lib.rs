//! Profile insight synthesis for site generation.
//!
//! Resolves a raw social profile, runs three independent analysis stages over
//! it (caption heuristics, color palette, text synthesis), and merges them into
//! a validated [`Insight`](pinsight_core::Insight). Text synthesis prefers an
//! OpenAI-compatible generative service and degrades to a fully deterministic
//! path whenever the service is unavailable or misbehaves.

pub mod aggregate;
pub mod error;
pub mod heuristics;
pub mod ingest;
pub mod palette;
pub mod persist;
pub mod pipeline;
pub mod site_config;
pub mod text;

pub use aggregate::aggregate;
pub use error::{AnalysisError, GenerativeError, IngestError, PersistError, ValidationError};
pub use heuristics::score;
pub use ingest::{resolve, ApiCredentials, ProfileSource};
pub use palette::derive;
pub use pipeline::{analyze_profile, AnalysisOutcome, AnalyzeOptions};
pub use site_config::project;
pub use text::{normalize, synthesize, GenerativeSettings};

#[cfg(test)]
mod test_support;
