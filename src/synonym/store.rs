//! The shared, versioned synonym store.

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use parking_lot::{Mutex, RwLock};

use crate::error::Result;

use super::dictionary::{SynonymDictionary, SynonymMap, merge_synonyms, remove_synonyms};
use super::source::{EmptySource, JsonFileSource, SynonymSource};

/// Owner of the synonym dictionary.
///
/// Readers take a cheap `Arc` snapshot and never observe a partially applied
/// mutation. Writers are serialized by an internal mutex, build a fresh
/// dictionary and publish it in one swap. The dictionary is loaded lazily
/// from the configured source on first use.
///
/// Runtime mutations live in memory only; use [`SynonymStore::save_to_file`]
/// to persist them explicitly.
#[derive(Debug)]
pub struct SynonymStore {
    source: Box<dyn SynonymSource>,
    current: RwLock<Arc<SynonymDictionary>>,
    writer: Mutex<()>,
    initialized: AtomicBool,
    version: AtomicU64,
}

impl SynonymStore {
    /// Create a store that loads its dictionary from `source` on first use.
    pub fn new<S: SynonymSource + 'static>(source: S) -> Self {
        Self {
            source: Box::new(source),
            current: RwLock::new(Arc::new(SynonymDictionary::new())),
            writer: Mutex::new(()),
            initialized: AtomicBool::new(false),
            version: AtomicU64::new(0),
        }
    }

    /// Create a store without configured synonyms.
    pub fn empty() -> Self {
        Self::new(EmptySource)
    }

    /// Create a store backed by a JSON synonym file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        Self::new(JsonFileSource::new(path))
    }

    /// Load the dictionary from the configured source.
    ///
    /// Only the first call does any work. A source that cannot be read or
    /// parsed leaves the store with an empty dictionary.
    pub fn initialize(&self) {
        if self.initialized.load(Ordering::Acquire) {
            return;
        }
        let _guard = self.writer.lock();
        self.initialize_locked();
    }

    fn initialize_locked(&self) {
        if self.initialized.load(Ordering::Acquire) {
            return;
        }

        let entries = match self.source.load() {
            Ok(entries) => {
                log::debug!(
                    "Loaded {} synonym entries from {}",
                    entries.len(),
                    self.source.describe()
                );
                entries
            }
            Err(e) => {
                log::warn!(
                    "Synonym configuration from {} unavailable, starting empty: {}",
                    self.source.describe(),
                    e
                );
                SynonymMap::new()
            }
        };

        self.publish(SynonymDictionary::from_map(entries));
        self.initialized.store(true, Ordering::Release);
    }

    fn publish(&self, dictionary: SynonymDictionary) {
        *self.current.write() = Arc::new(dictionary);
        self.version.fetch_add(1, Ordering::AcqRel);
    }

    /// Apply a read-modify-write to the dictionary under the writer lock.
    fn mutate<F>(&self, f: F) -> bool
    where
        F: FnOnce(&mut SynonymMap) -> bool,
    {
        let _guard = self.writer.lock();
        self.initialize_locked();

        let current = self.current.read().clone();
        let mut changed = false;
        let next = current.rebuild(|entries| changed = f(entries));
        if changed {
            self.publish(next);
        }
        changed
    }

    /// The current dictionary snapshot.
    pub fn snapshot(&self) -> Arc<SynonymDictionary> {
        self.initialize();
        self.current.read().clone()
    }

    /// A copy of the full mapping.
    pub fn get_all(&self) -> SynonymMap {
        self.snapshot().entries().clone()
    }

    /// Merge `synonyms` into the entry for `main_term`.
    ///
    /// The entry is created when absent, but only if at least one usable
    /// synonym remains after normalization: `add(main, [])` leaves the
    /// dictionary unchanged, as the store never holds empty entries.
    pub fn add<I, S>(&self, main_term: &str, synonyms: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if self.mutate(|entries| merge_synonyms(entries, main_term, synonyms)) {
            log::debug!("Added synonyms for '{}'", main_term.trim());
        }
    }

    /// Remove the listed synonyms, or the whole entry when `synonyms` is `None`.
    pub fn remove(&self, main_term: &str, synonyms: Option<&[&str]>) {
        match synonyms {
            Some(synonyms) => self.remove_synonyms(main_term, synonyms.iter().copied()),
            None => self.remove_entry(main_term),
        }
    }

    /// Delete the entry for `main_term`. No-op if absent.
    pub fn remove_entry(&self, main_term: &str) {
        let main = super::normalize_term(main_term);
        if self.mutate(|entries| entries.remove(&main).is_some()) {
            log::debug!("Removed synonym entry '{main}'");
        }
    }

    /// Remove individual synonyms from `main_term`.
    pub fn remove_synonyms<I, S>(&self, main_term: &str, synonyms: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.mutate(|entries| remove_synonyms(entries, main_term, synonyms));
    }

    /// Remove every entry.
    pub fn clear(&self) {
        self.mutate(|entries| {
            let changed = !entries.is_empty();
            entries.clear();
            changed
        });
    }

    /// Overlay the entries of a JSON synonym file.
    ///
    /// Incoming main terms replace existing entries wholesale; a main term
    /// listed without usable synonyms removes the existing entry. Returns the
    /// number of main terms applied; an unreadable file applies nothing.
    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> usize {
        self.load_from_source(&JsonFileSource::new(path))
    }

    /// Overlay the entries of any synonym source.
    pub fn load_from_source(&self, source: &dyn SynonymSource) -> usize {
        let incoming = match source.load() {
            Ok(incoming) => incoming,
            Err(e) => {
                log::warn!(
                    "Ignoring synonym overlay from {}: {}",
                    source.describe(),
                    e
                );
                return 0;
            }
        };

        let count = incoming.len();
        self.mutate(move |entries| {
            let mut changed = false;
            for (main, synonyms) in incoming {
                if synonyms.is_empty() {
                    changed |= entries.remove(&main).is_some();
                } else if entries.get(&main) != Some(&synonyms) {
                    entries.insert(main, synonyms);
                    changed = true;
                }
            }
            changed
        });
        log::debug!("Overlaid {count} synonym entries from {}", source.describe());
        count
    }

    /// Write the current mapping as a JSON object.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let snapshot = self.snapshot();
        let json = serde_json::to_string_pretty(snapshot.entries())?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Number of times a dictionary has been published.
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::Acquire)
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    pub fn contains(&self, main_term: &str) -> bool {
        self.snapshot().contains(main_term)
    }
}

impl Default for SynonymStore {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::synonym::StaticSource;

    fn set(terms: &[&str]) -> BTreeSet<String> {
        terms.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_lazy_initialize_from_source() {
        let store = SynonymStore::new(StaticSource::new([("azul", vec!["blue"])]));
        assert_eq!(store.version(), 0);

        let all = store.get_all();
        assert_eq!(all["azul"], set(&["blue"]));
        assert_eq!(store.version(), 1);

        store.initialize();
        assert_eq!(store.version(), 1);
    }

    #[test]
    fn test_missing_source_degrades_to_empty() {
        let store = SynonymStore::from_path("/no/such/dir/synonyms.json");
        assert!(store.is_empty());
        assert!(store.get_all().is_empty());
    }

    #[test]
    fn test_add_merges_and_normalizes() {
        let store = SynonymStore::empty();
        store.add(" Capacete ", ["Elmo"]);
        store.add("capacete", ["casco", "ELMO", "capacete"]);

        assert_eq!(store.get_all()["capacete"], set(&["elmo", "casco"]));
    }

    #[test]
    fn test_add_before_initialize_is_not_lost() {
        let store = SynonymStore::new(StaticSource::new([("azul", vec!["blue"])]));
        store.add("capacete", ["elmo"]);

        let all = store.get_all();
        assert!(all.contains_key("azul"));
        assert!(all.contains_key("capacete"));
    }

    #[test]
    fn test_remove_entry_and_synonyms() {
        let store = SynonymStore::empty();
        store.add("capacete", ["elmo", "casco"]);

        store.remove("capacete", Some(&["ELMO"]));
        assert_eq!(store.get_all()["capacete"], set(&["casco"]));

        store.remove("capacete", Some(&["casco"]));
        assert!(!store.contains("capacete"));

        store.add("capacete", ["elmo"]);
        store.remove("capacete", None);
        assert!(store.is_empty());

        // Absent entries are a no-op.
        store.remove("luva", None);
        store.remove("luva", Some(&["glove"]));
    }

    #[test]
    fn test_unchanged_mutation_does_not_publish() {
        let store = SynonymStore::empty();
        store.add("capacete", ["elmo"]);
        let version = store.version();

        store.add("capacete", ["elmo"]);
        store.remove("luva", None);
        assert_eq!(store.version(), version);
    }

    #[test]
    fn test_snapshot_is_stable_across_mutation() {
        let store = SynonymStore::empty();
        store.add("capacete", ["elmo"]);
        let before = store.snapshot();

        store.add("capacete", ["casco"]);
        assert_eq!(before.get("capacete"), Some(&set(&["elmo"])));
        assert_eq!(store.snapshot().get("capacete"), Some(&set(&["elmo", "casco"])));
    }

    #[test]
    fn test_load_from_file_overlays_whole_entries() {
        let store = SynonymStore::empty();
        store.add("capacete", ["elmo", "casco"]);
        store.add("azul", ["blue"]);

        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"capacete": ["helmet"], "luva": ["glove"]}}"#).unwrap();

        assert_eq!(store.load_from_file(file.path()), 2);
        let all = store.get_all();
        assert_eq!(all["capacete"], set(&["helmet"]));
        assert_eq!(all["luva"], set(&["glove"]));
        assert_eq!(all["azul"], set(&["blue"]));
    }

    #[test]
    fn test_load_from_file_clears_entries_listed_without_synonyms() {
        let store = SynonymStore::empty();
        store.add("capacete", ["elmo", "casco"]);
        store.add("azul", ["blue"]);

        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"capacete": [], "luva": ["luva"]}}"#).unwrap();

        assert_eq!(store.load_from_file(file.path()), 2);
        let all = store.get_all();
        assert!(!all.contains_key("capacete"));
        assert!(!all.contains_key("luva"));
        assert_eq!(all["azul"], set(&["blue"]));
        assert_eq!(store.snapshot().expand("capacete").to_set(), set(&["capacete"]));
    }

    #[test]
    fn test_load_from_group_file_clears_single_member_groups() {
        let store = SynonymStore::empty();
        store.add("capacete", ["elmo"]);

        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"[["Capacete"], ["bota", "botina"]]"#).unwrap();

        assert_eq!(store.load_from_file(file.path()), 2);
        let all = store.get_all();
        assert!(!all.contains_key("capacete"));
        assert_eq!(all["bota"], set(&["botina"]));
        assert_eq!(store.snapshot().expand("elmo").to_set(), set(&["elmo"]));
    }

    #[test]
    fn test_initialize_skips_main_terms_without_synonyms() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"capacete": [], "azul": ["blue"]}}"#).unwrap();

        let store = SynonymStore::from_path(file.path());
        assert_eq!(store.len(), 1);
        assert!(!store.contains("capacete"));
    }

    #[test]
    fn test_wrongly_shaped_source_degrades_to_empty() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"capacete": "elmo"}}"#).unwrap();

        let store = SynonymStore::from_path(file.path());
        assert!(store.is_empty());
        assert_eq!(store.version(), 1);

        store.add("capacete", ["elmo"]);
        assert_eq!(store.get_all()["capacete"], set(&["elmo"]));
    }

    #[test]
    fn test_add_without_usable_synonyms_creates_nothing() {
        let store = SynonymStore::empty();
        store.add("capacete", Vec::<String>::new());
        store.add("capacete", ["Capacete", " "]);
        assert!(!store.contains("capacete"));
    }

    #[test]
    fn test_load_from_bad_file_is_ignored() {
        let store = SynonymStore::empty();
        store.add("azul", ["blue"]);

        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[[[").unwrap();

        assert_eq!(store.load_from_file(file.path()), 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_save_to_file_round_trip() {
        let store = SynonymStore::empty();
        store.add("capacete", ["elmo", "casco"]);

        let file = NamedTempFile::new().unwrap();
        store.save_to_file(file.path()).unwrap();

        let reloaded = SynonymStore::from_path(file.path());
        assert_eq!(reloaded.get_all(), store.get_all());
    }

    #[test]
    fn test_clear() {
        let store = SynonymStore::empty();
        store.add("azul", ["blue"]);
        store.clear();
        assert!(store.is_empty());
    }
}
