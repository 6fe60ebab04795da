//! Term and phrase expansion.
//!
//! A [`TermExpander`] turns one word into the set of equivalent search terms.
//! The [`PhraseExpander`] applies it to every word of a phrase and flattens
//! the result into a keyword bag.

pub mod phrase;
pub mod term;

pub use phrase::PhraseExpander;
pub use term::{ExpandedTerms, LiteralTermExpander, SynonymTermExpander, TermExpander};

/// Split a phrase into its non-empty whitespace separated tokens.
pub fn tokenize(phrase: &str) -> impl Iterator<Item = &str> {
    phrase.split_whitespace()
}
