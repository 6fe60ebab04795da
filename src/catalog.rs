//! Contract of the catalog storage collaborator.
//!
//! The search orchestrator only ever talks to a [`Catalog`]: a full-text
//! capability taking one boolean-mode query string, and a substring
//! capability taking "contains" predicates. Both honor the same
//! active-record filter and result limit.

pub mod boolean_mode;
pub mod memory;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use boolean_mode::BooleanModeQuery;
pub use memory::MemoryCatalog;

/// A catalog record (a product) with its searchable text fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub id: u64,
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
    /// Whether the record is currently sellable.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl CatalogRecord {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            fields: BTreeMap::new(),
            active: true,
        }
    }

    pub fn with_field<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Values of the named fields, or of every field when `names` is empty.
    pub fn texts<'a>(&'a self, names: &'a [String]) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        if names.is_empty() {
            Box::new(self.fields.values().map(String::as_str))
        } else {
            Box::new(names.iter().filter_map(|name| self.field(name)))
        }
    }
}

/// A boolean-mode full-text request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullTextRequest {
    pub query: String,
    /// Fields covered by the full-text index. Empty means all fields.
    pub fields: Vec<String>,
    pub active_only: bool,
    pub limit: usize,
}

/// A substring request: every needle is tested against every field, ORed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainsRequest {
    pub needles: Vec<String>,
    /// Fields to test. Empty means all fields.
    pub fields: Vec<String>,
    pub active_only: bool,
    pub limit: usize,
}

/// A store able to answer full-text and substring catalog queries.
pub trait Catalog: Send + Sync {
    /// Run a boolean-mode full-text query.
    ///
    /// Implementations report queries their engine cannot parse with
    /// [`GlaiveError::QuerySyntax`](crate::error::GlaiveError::QuerySyntax).
    fn full_text_search(&self, request: &FullTextRequest) -> Result<Vec<CatalogRecord>>;

    /// Run a substring query.
    fn contains_search(&self, request: &ContainsRequest) -> Result<Vec<CatalogRecord>>;

    /// Get the name of this catalog for logging.
    fn name(&self) -> &str;
}
