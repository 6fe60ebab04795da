//! Configuration for search orchestration.

use serde::{Deserialize, Serialize};

/// When the substring tier runs in addition to a successful full-text tier.
///
/// The substring tier always runs when full-text search is disabled or the
/// full-text query failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// Always run the substring tier.
    Always,
    /// Run it when the full-text tier returned fewer than this many records.
    WhenBelow(usize),
    /// Never run it after a successful full-text tier.
    Never,
}

impl Default for FallbackPolicy {
    fn default() -> Self {
        FallbackPolicy::WhenBelow(1)
    }
}

impl FallbackPolicy {
    /// Whether the substring tier should run after `full_text_hits` results.
    pub fn should_run(&self, full_text_hits: usize) -> bool {
        match self {
            FallbackPolicy::Always => true,
            FallbackPolicy::WhenBelow(threshold) => full_text_hits < *threshold,
            FallbackPolicy::Never => false,
        }
    }
}

/// Configuration for [`SearchOrchestrator`](super::SearchOrchestrator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum number of records returned by each tier and by the merge.
    pub limit: usize,

    /// Text fields searched by both tiers.
    pub text_fields: Vec<String>,

    /// Restrict results to active (sellable) records.
    pub active_only: bool,

    /// Substring fallback policy.
    pub fallback: FallbackPolicy,

    /// Strip boolean-mode reserved characters from expanded terms.
    pub sanitize: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            limit: 50,
            text_fields: vec!["name".to_string(), "description".to_string()],
            active_only: true,
            fallback: FallbackPolicy::default(),
            sanitize: false,
        }
    }
}

impl SearchConfig {
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn with_text_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.text_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_sanitize(mut self, sanitize: bool) -> Self {
        self.sanitize = sanitize;
        self
    }
}
