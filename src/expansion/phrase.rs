//! Keyword-bag expansion of whole phrases.

use std::collections::BTreeSet;
use std::sync::Arc;

use super::term::TermExpander;
use super::tokenize;

/// Expands every word of a phrase and flattens the result.
///
/// The output is meant for simple keyword-bag retrieval; word order is not
/// preserved.
#[derive(Clone)]
pub struct PhraseExpander {
    expander: Arc<dyn TermExpander>,
}

impl PhraseExpander {
    pub fn new(expander: Arc<dyn TermExpander>) -> Self {
        Self { expander }
    }

    /// Union of the expansions of every non-empty token.
    pub fn expand_phrase_terms(&self, phrase: &str) -> BTreeSet<String> {
        tokenize(phrase)
            .flat_map(|token| self.expander.expand_term(token).into_vec())
            .collect()
    }

    /// Space-joined expansion of `phrase`.
    pub fn expand_phrase(&self, phrase: &str) -> String {
        self.expand_phrase_terms(phrase)
            .into_iter()
            .collect::<Vec<_>>()
            .join(" ")
    }
}
