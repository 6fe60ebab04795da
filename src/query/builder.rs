//! Builds boolean-mode query strings from synonym-expanded phrases.

use std::sync::Arc;

use crate::expansion::{LiteralTermExpander, TermExpander, tokenize};

use super::syntax::{BooleanQuerySyntax, RequiredPrefixSyntax};

/// Builder for boolean-mode full-text query strings.
///
/// Each word of the input phrase becomes one group holding all of its
/// expansions. Groups keep the order of the words in the phrase.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use glaive::expansion::SynonymTermExpander;
/// use glaive::query::BooleanQueryBuilder;
/// use glaive::synonym::SynonymStore;
///
/// let store = Arc::new(SynonymStore::empty());
/// store.add("azul", ["blue"]);
///
/// let builder = BooleanQueryBuilder::new(Arc::new(SynonymTermExpander::new(store)));
/// assert_eq!(builder.build("capacete azul"), "(+capacete*) (+azul* +blue*)");
/// ```
#[derive(Clone)]
pub struct BooleanQueryBuilder {
    expander: Arc<dyn TermExpander>,
    syntax: Arc<dyn BooleanQuerySyntax>,
}

impl BooleanQueryBuilder {
    /// Create a builder rendering with [`RequiredPrefixSyntax`].
    pub fn new(expander: Arc<dyn TermExpander>) -> Self {
        Self {
            expander,
            syntax: Arc::new(RequiredPrefixSyntax),
        }
    }

    /// Use a different query syntax.
    pub fn with_syntax(mut self, syntax: Arc<dyn BooleanQuerySyntax>) -> Self {
        self.syntax = syntax;
        self
    }

    pub fn expander(&self) -> &Arc<dyn TermExpander> {
        &self.expander
    }

    /// One rendered group per non-empty token, in input order.
    pub fn build_groups(&self, phrase: &str) -> Vec<String> {
        tokenize(phrase)
            .map(|token| {
                let terms = self.expander.expand_term(token).into_vec();
                self.syntax.group(&terms)
            })
            .filter(|group| !group.is_empty())
            .collect()
    }

    /// Build the boolean-mode query for `phrase`.
    ///
    /// Empty or whitespace-only input yields an empty string.
    pub fn build(&self, phrase: &str) -> String {
        let groups = self.build_groups(phrase);
        let query = self.syntax.join(&groups);
        log::debug!(
            "Built boolean query with {} expander: {query}",
            self.expander.name()
        );
        query
    }

    /// Build a single unexpanded group holding every token of `phrase`.
    pub fn build_literal(&self, phrase: &str) -> String {
        let terms: Vec<String> = tokenize(phrase)
            .flat_map(|token| LiteralTermExpander.expand_term(token).into_vec())
            .fold(Vec::new(), |mut terms, term| {
                if !terms.contains(&term) {
                    terms.push(term);
                }
                terms
            });

        let group = self.syntax.group(&terms);
        if group.is_empty() {
            return String::new();
        }
        self.syntax.join(&[group])
    }
}
