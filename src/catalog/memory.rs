//! In-memory catalog for testing, benchmarking and the command line tool.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use parking_lot::RwLock;
use rayon::prelude::*;

use crate::error::{GlaiveError, Result};

use super::boolean_mode::{BooleanModeQuery, index_words};
use super::{Catalog, CatalogRecord, ContainsRequest, FullTextRequest};

/// A catalog held entirely in memory.
///
/// Full-text queries are evaluated with [`BooleanModeQuery`], so malformed
/// query strings are rejected the way a real full-text engine would.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    records: RwLock<Vec<CatalogRecord>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records<I: IntoIterator<Item = CatalogRecord>>(records: I) -> Self {
        let catalog = Self::new();
        catalog.extend(records);
        catalog
    }

    /// Load records from a JSON Lines file, one record per line.
    pub fn from_jsonl<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let catalog = Self::new();

        for (line_num, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let record: CatalogRecord = serde_json::from_str(&line).map_err(|e| {
                GlaiveError::catalog(format!(
                    "Invalid record on line {} of '{}': {}",
                    line_num + 1,
                    path.display(),
                    e
                ))
            })?;
            catalog.insert(record);
        }

        log::debug!("Loaded {} records from '{}'", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Insert a record, replacing any record with the same id.
    pub fn insert(&self, record: CatalogRecord) {
        let mut records = self.records.write();
        match records.iter_mut().find(|existing| existing.id == record.id) {
            Some(existing) => *existing = record,
            None => records.push(record),
        }
    }

    pub fn extend<I: IntoIterator<Item = CatalogRecord>>(&self, records: I) {
        for record in records {
            self.insert(record);
        }
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl Catalog for MemoryCatalog {
    fn full_text_search(&self, request: &FullTextRequest) -> Result<Vec<CatalogRecord>> {
        let query = BooleanModeQuery::parse(&request.query)?;
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let records = self.records.read();
        let mut scored: Vec<(usize, &CatalogRecord)> = records
            .par_iter()
            .filter(|record| record.active || !request.active_only)
            .filter_map(|record| {
                let words: Vec<String> = record
                    .texts(&request.fields)
                    .flat_map(index_words)
                    .collect();
                query.score(&words).map(|score| (score, record))
            })
            .collect();

        scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.id.cmp(&b.1.id)));
        Ok(scored
            .into_iter()
            .take(request.limit)
            .map(|(_, record)| record.clone())
            .collect())
    }

    fn contains_search(&self, request: &ContainsRequest) -> Result<Vec<CatalogRecord>> {
        let needles: Vec<String> = request
            .needles
            .iter()
            .map(|needle| needle.to_lowercase())
            .filter(|needle| !needle.is_empty())
            .collect();
        if needles.is_empty() {
            return Ok(Vec::new());
        }

        let records = self.records.read();
        let mut matches: Vec<&CatalogRecord> = records
            .par_iter()
            .filter(|record| record.active || !request.active_only)
            .filter(|record| {
                record.texts(&request.fields).any(|text| {
                    let text = text.to_lowercase();
                    needles.iter().any(|needle| text.contains(needle.as_str()))
                })
            })
            .collect();

        matches.sort_by_key(|record| record.id);
        Ok(matches.into_iter().take(request.limit).cloned().collect())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
