//! Synonym dictionary, configuration sources and the shared synonym store.
//!
//! Terms are always compared in their normalized form: trimmed and lower-cased.
//! A [`SynonymDictionary`] is an immutable snapshot; the [`SynonymStore`]
//! owns the current snapshot and publishes a new one on every mutation.

pub mod dictionary;
pub mod source;
pub mod store;

pub use dictionary::{SynonymDictionary, SynonymMap};
pub use source::{EmptySource, JsonFileSource, StaticSource, SynonymSource};
pub use store::SynonymStore;

/// Normalize a term for dictionary keys and lookups.
pub fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}
