//! Engine configuration.
//!
//! ```json
//! {
//!   "synonyms": { "path": "synonyms.json" },
//!   "search": {
//!     "limit": 50,
//!     "text_fields": ["name", "description"],
//!     "active_only": true,
//!     "fallback": { "when_below": 1 },
//!     "sanitize": false
//!   }
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GlaiveError, Result};
use crate::search::SearchConfig;
use crate::synonym::SynonymStore;

/// Where the synonym dictionary is loaded from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynonymConfig {
    /// JSON synonym file. Without one the dictionary starts empty.
    pub path: Option<PathBuf>,
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub synonyms: SynonymConfig,
    pub search: SearchConfig,
}

impl EngineConfig {
    /// Load a configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            GlaiveError::config(format!(
                "Failed to read configuration '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| GlaiveError::config(format!("Invalid configuration: {e}")))
    }

    /// Create the synonym store described by this configuration.
    pub fn synonym_store(&self) -> SynonymStore {
        match &self.synonyms.path {
            Some(path) => SynonymStore::from_path(path),
            None => SynonymStore::empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::search::FallbackPolicy;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::from_json("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert!(config.synonyms.path.is_none());
        assert_eq!(config.search.limit, 50);
        assert!(config.synonym_store().is_empty());
    }

    #[test]
    fn test_load_with_synonym_file() {
        let mut synonyms = NamedTempFile::new().unwrap();
        write!(synonyms, r#"{{"capacete": ["elmo"]}}"#).unwrap();

        let mut config_file = NamedTempFile::new().unwrap();
        let json = serde_json::json!({
            "synonyms": { "path": synonyms.path() },
            "search": { "fallback": "always", "sanitize": true }
        });
        write!(config_file, "{json}").unwrap();

        let config = EngineConfig::load(config_file.path()).unwrap();
        assert_eq!(config.search.fallback, FallbackPolicy::Always);
        assert!(config.search.sanitize);
        assert!(config.synonym_store().contains("capacete"));
    }

    #[test]
    fn test_invalid_configuration() {
        assert!(matches!(
            EngineConfig::from_json(r#"{"search": {"limit": "many"}}"#),
            Err(GlaiveError::Config(_))
        ));
        assert!(matches!(
            EngineConfig::load("/no/such/glaive.json"),
            Err(GlaiveError::Config(_))
        ));
    }
}
