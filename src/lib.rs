//! # Glaive
//!
//! Synonym-aware query expansion for catalog search.
//!
//! ## Features
//!
//! - Synonym dictionary with lazy loading and lock-free snapshot reads
//! - Symmetric term expansion through main terms and their synonyms
//! - Boolean-mode full-text query synthesis with pluggable syntax
//! - Two-tier search: full-text with synonyms, then substring fallback
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use glaive::catalog::{CatalogRecord, MemoryCatalog};
//! use glaive::search::{SearchConfig, SearchOrchestrator};
//! use glaive::synonym::SynonymStore;
//!
//! # fn main() -> glaive::error::Result<()> {
//! let store = Arc::new(SynonymStore::empty());
//! store.add("capacete", ["elmo", "casco"]);
//!
//! let catalog = Arc::new(MemoryCatalog::with_records(vec![
//!     CatalogRecord::new(1).with_field("name", "Elmo de aço"),
//! ]));
//!
//! let orchestrator = SearchOrchestrator::new(catalog, store, SearchConfig::default());
//! let results = orchestrator.search("capacete", true, true)?;
//! assert_eq!(results.ids(), vec![1]);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod expansion;
pub mod query;
pub mod search;
pub mod synonym;

pub mod prelude {
    pub use crate::catalog::{Catalog, CatalogRecord, MemoryCatalog};
    pub use crate::error::{GlaiveError, Result};
    pub use crate::expansion::{ExpandedTerms, PhraseExpander, SynonymTermExpander, TermExpander};
    pub use crate::query::BooleanQueryBuilder;
    pub use crate::search::{SearchConfig, SearchOrchestrator, SearchResults};
    pub use crate::synonym::SynonymStore;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
