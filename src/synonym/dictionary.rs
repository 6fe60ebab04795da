//! Immutable synonym dictionary snapshot.

use std::collections::{BTreeMap, BTreeSet};

use ahash::AHashMap;

use crate::expansion::ExpandedTerms;

use super::normalize_term;

/// Main term -> synonym set, iterated in lexical order of main terms.
pub type SynonymMap = BTreeMap<String, BTreeSet<String>>;

/// An immutable synonym dictionary.
///
/// Besides the main-term mapping, the dictionary keeps a reverse index from
/// every synonym to the first main term (in iteration order) that lists it.
/// A term that appears in several groups is therefore only ever expanded
/// through the first one.
#[derive(Debug, Clone, Default)]
pub struct SynonymDictionary {
    entries: SynonymMap,
    reverse: AHashMap<String, String>,
}

impl SynonymDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from raw entries, normalizing every term.
    ///
    /// Main terms that collide after normalization are merged.
    pub fn from_entries<I, K, V, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = SynonymMap::new();
        for (main, synonyms) in entries {
            merge_synonyms(&mut map, main.as_ref(), synonyms);
        }
        Self::from_map(map)
    }

    /// Build a dictionary from an already normalized map.
    ///
    /// Main terms without synonyms are dropped.
    pub fn from_map(mut entries: SynonymMap) -> Self {
        entries.retain(|_, synonyms| !synonyms.is_empty());
        let mut reverse = AHashMap::new();
        for (main, synonyms) in &entries {
            for synonym in synonyms {
                reverse
                    .entry(synonym.clone())
                    .or_insert_with(|| main.clone());
            }
        }
        Self { entries, reverse }
    }

    /// Create a new dictionary by applying `f` to a copy of the entries.
    pub(crate) fn rebuild<F>(&self, f: F) -> Self
    where
        F: FnOnce(&mut SynonymMap),
    {
        let mut entries = self.entries.clone();
        f(&mut entries);
        Self::from_map(entries)
    }

    /// Synonyms stored for a main term.
    pub fn get(&self, main_term: &str) -> Option<&BTreeSet<String>> {
        self.entries.get(&normalize_term(main_term))
    }

    /// Whether `main_term` is a key of the dictionary.
    pub fn contains(&self, main_term: &str) -> bool {
        self.entries.contains_key(&normalize_term(main_term))
    }

    /// The main term whose group a synonym is resolved through.
    pub fn main_term_of(&self, synonym: &str) -> Option<&str> {
        self.reverse.get(&normalize_term(synonym)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &SynonymMap {
        &self.entries
    }

    pub fn into_entries(self) -> SynonymMap {
        self.entries
    }

    /// Expand a single term.
    ///
    /// The result holds the normalized term, its own synonyms when it is a
    /// main term, and the main term plus all synonyms of the first group that
    /// lists it as a synonym.
    pub fn expand(&self, term: &str) -> ExpandedTerms {
        let normalized = normalize_term(term);
        let mut expanded = ExpandedTerms::new(normalized.clone());

        if let Some(synonyms) = self.entries.get(&normalized) {
            expanded.extend(synonyms.iter().cloned());
        }

        if let Some(main) = self.reverse.get(&normalized) {
            expanded.insert(main.clone());
            if let Some(siblings) = self.entries.get(main) {
                expanded.extend(siblings.iter().cloned());
            }
        }

        expanded
    }
}

/// Normalize a synonym list for `main`, dropping empties and the main term itself.
pub(crate) fn normalize_synonyms<I, S>(main: &str, synonyms: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    synonyms
        .into_iter()
        .map(|s| normalize_term(s.as_ref()))
        .filter(|s| !s.is_empty() && s != main)
        .collect()
}

/// Merge synonyms into the entry for `main`, creating it when absent.
///
/// Returns `true` if the map changed. Nothing is created for an empty main
/// term or when no usable synonym remains after normalization.
pub(crate) fn merge_synonyms<I, S>(map: &mut SynonymMap, main: &str, synonyms: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let main = normalize_term(main);
    if main.is_empty() {
        return false;
    }
    let incoming = normalize_synonyms(&main, synonyms);
    if incoming.is_empty() {
        return false;
    }

    let entry = map.entry(main).or_default();
    let before = entry.len();
    entry.extend(incoming);
    entry.len() != before
}

/// Record the synonyms of `main` as read from a source.
///
/// Unlike [`merge_synonyms`] the main term is kept even when no usable
/// synonym remains, so an overlay can tell "clear this entry" apart from
/// "not mentioned".
pub(crate) fn collect_synonyms<I, S>(map: &mut SynonymMap, main: &str, synonyms: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let main = normalize_term(main);
    if main.is_empty() {
        return;
    }
    let incoming = normalize_synonyms(&main, synonyms);
    map.entry(main).or_default().extend(incoming);
}

/// Remove listed synonyms from `main`, dropping the entry once it is empty.
pub(crate) fn remove_synonyms<I, S>(map: &mut SynonymMap, main: &str, synonyms: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let main = normalize_term(main);
    let Some(entry) = map.get_mut(&main) else {
        return false;
    };

    let mut changed = false;
    for synonym in synonyms {
        changed |= entry.remove(&normalize_term(synonym.as_ref()));
    }
    if entry.is_empty() {
        map.remove(&main);
        changed = true;
    }
    changed
}
