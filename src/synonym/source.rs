//! Configuration sources for synonym dictionaries.
//!
//! Two JSON layouts are accepted:
//!
//! ```json
//! { "capacete": ["elmo", "casco"], "azul": ["blue"] }
//! ```
//!
//! or a list of groups whose first member is the main term:
//!
//! ```json
//! [["capacete", "elmo", "casco"], ["azul", "blue"]]
//! ```

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{GlaiveError, Result};

use super::dictionary::{SynonymMap, collect_synonyms};

/// A source the synonym store can load its dictionary from.
pub trait SynonymSource: Send + Sync + Debug {
    /// Load the normalized main term -> synonyms mapping.
    ///
    /// A main term may map to an empty set when the source lists it without
    /// usable synonyms.
    fn load(&self) -> Result<SynonymMap>;

    /// Human readable description used in log messages.
    fn describe(&self) -> String;
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SynonymFile {
    Mapping(BTreeMap<String, Vec<String>>),
    Groups(Vec<Vec<String>>),
}

/// Parse a JSON synonym document in either supported layout.
pub fn parse_synonyms(content: &str) -> Result<SynonymMap> {
    let file: SynonymFile = serde_json::from_str(content).map_err(|e| {
        GlaiveError::config(format!("Failed to parse synonym JSON: {e}"))
    })?;

    let mut map = SynonymMap::new();
    match file {
        SynonymFile::Mapping(entries) => {
            for (main, synonyms) in entries {
                collect_synonyms(&mut map, &main, synonyms);
            }
        }
        SynonymFile::Groups(groups) => {
            for group in groups {
                if let Some((main, synonyms)) = group.split_first() {
                    collect_synonyms(&mut map, main, synonyms);
                }
            }
        }
    }
    Ok(map)
}

/// Synonyms stored in a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SynonymSource for JsonFileSource {
    fn load(&self) -> Result<SynonymMap> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            GlaiveError::config(format!(
                "Failed to read synonym file '{}': {}",
                self.path.display(),
                e
            ))
        })?;
        parse_synonyms(&content)
    }

    fn describe(&self) -> String {
        format!("file '{}'", self.path.display())
    }
}

/// Synonyms supplied in code.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    entries: SynonymMap,
}

impl StaticSource {
    pub fn new<I, K, V, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = SynonymMap::new();
        for (main, synonyms) in entries {
            collect_synonyms(&mut map, main.as_ref(), synonyms);
        }
        Self { entries: map }
    }
}

impl SynonymSource for StaticSource {
    fn load(&self) -> Result<SynonymMap> {
        Ok(self.entries.clone())
    }

    fn describe(&self) -> String {
        format!("static source ({} entries)", self.entries.len())
    }
}

/// No configured synonyms.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptySource;

impl SynonymSource for EmptySource {
    fn load(&self) -> Result<SynonymMap> {
        Ok(SynonymMap::new())
    }

    fn describe(&self) -> String {
        "empty source".to_string()
    }
}
