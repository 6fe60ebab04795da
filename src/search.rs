//! Two-tier catalog search.
//!
//! The [`SearchOrchestrator`] runs a synonym-expanded boolean-mode full-text
//! query first and falls back to plain substring matching on the raw query
//! when full-text search is disabled, fails, or finds too little.

pub mod config;
pub mod merger;
pub mod orchestrator;

pub use config::{FallbackPolicy, SearchConfig};
pub use merger::{SearchHit, SearchTier, merge_tiers};
pub use orchestrator::{SearchOrchestrator, SearchResults};
