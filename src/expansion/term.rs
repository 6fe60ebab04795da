//! Single-term expansion.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::synonym::{SynonymStore, normalize_term};

/// The set of terms equivalent to one input term.
///
/// The normalized input term always comes first when iterating; the remaining
/// terms follow in lexical order. Membership is a set: no term appears twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandedTerms {
    original: String,
    variants: BTreeSet<String>,
}

impl ExpandedTerms {
    /// Start an expansion holding only `original`.
    pub fn new<S: Into<String>>(original: S) -> Self {
        Self {
            original: original.into(),
            variants: BTreeSet::new(),
        }
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn insert<S: Into<String>>(&mut self, term: S) -> bool {
        let term = term.into();
        if term == self.original {
            return false;
        }
        self.variants.insert(term)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.original == term || self.variants.contains(term)
    }

    /// Number of distinct terms, including the original.
    pub fn len(&self) -> usize {
        1 + self.variants.len()
    }

    /// Always false: an expansion holds at least the original term.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether anything beyond the original term was found.
    pub fn has_synonyms(&self) -> bool {
        !self.variants.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.original.as_str()).chain(self.variants.iter().map(String::as_str))
    }

    pub fn to_set(&self) -> BTreeSet<String> {
        self.iter().map(str::to_string).collect()
    }

    pub fn into_vec(self) -> Vec<String> {
        let mut terms = Vec::with_capacity(self.len());
        terms.push(self.original);
        terms.extend(self.variants);
        terms
    }
}

impl Extend<String> for ExpandedTerms {
    fn extend<T: IntoIterator<Item = String>>(&mut self, iter: T) {
        for term in iter {
            self.insert(term);
        }
    }
}

/// Term expansion strategy.
pub trait TermExpander: Send + Sync {
    /// Expand one term into its equivalent search terms.
    fn expand_term(&self, term: &str) -> ExpandedTerms;

    /// Get the name of this expander for debugging and logging.
    fn name(&self) -> &str;
}

/// Expands terms through the synonym store.
#[derive(Debug, Clone)]
pub struct SynonymTermExpander {
    store: Arc<SynonymStore>,
}

impl SynonymTermExpander {
    pub fn new(store: Arc<SynonymStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<SynonymStore> {
        &self.store
    }
}

impl TermExpander for SynonymTermExpander {
    fn expand_term(&self, term: &str) -> ExpandedTerms {
        self.store.snapshot().expand(term)
    }

    fn name(&self) -> &str {
        "synonym"
    }
}

/// Normalizes terms without adding synonyms.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralTermExpander;

impl TermExpander for LiteralTermExpander {
    fn expand_term(&self, term: &str) -> ExpandedTerms {
        ExpandedTerms::new(normalize_term(term))
    }

    fn name(&self) -> &str {
        "literal"
    }
}
