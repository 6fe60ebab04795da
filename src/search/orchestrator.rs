//! Two-tier search orchestration.

use std::sync::Arc;

use serde::Serialize;

use crate::catalog::{Catalog, CatalogRecord, ContainsRequest, FullTextRequest};
use crate::error::Result;
use crate::expansion::SynonymTermExpander;
use crate::query::{BooleanQueryBuilder, RequiredPrefixSyntax, SanitizingSyntax};
use crate::synonym::SynonymStore;

use super::config::SearchConfig;
use super::merger::{SearchHit, merge_tiers};

/// Outcome of a search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub hits: Vec<SearchHit>,
    /// Boolean-mode query sent to the full-text tier, if that tier ran.
    pub boolean_query: Option<String>,
    /// Error reported by the full-text tier before degrading to substring search.
    pub full_text_error: Option<String>,
    /// Whether the substring tier ran.
    pub fallback_used: bool,
}

impl SearchResults {
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn ids(&self) -> Vec<u64> {
        self.hits.iter().map(|hit| hit.record.id).collect()
    }
}

/// Runs searches against a catalog.
///
/// Each call is independent: the orchestrator holds no per-request state and
/// can be shared between threads.
pub struct SearchOrchestrator {
    catalog: Arc<dyn Catalog>,
    store: Arc<SynonymStore>,
    builder: BooleanQueryBuilder,
    config: SearchConfig,
}

impl SearchOrchestrator {
    pub fn new(catalog: Arc<dyn Catalog>, store: Arc<SynonymStore>, config: SearchConfig) -> Self {
        let mut builder =
            BooleanQueryBuilder::new(Arc::new(SynonymTermExpander::new(store.clone())));
        if config.sanitize {
            builder = builder.with_syntax(Arc::new(SanitizingSyntax::new(RequiredPrefixSyntax)));
        }

        Self {
            catalog,
            store,
            builder,
            config,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<SynonymStore> {
        &self.store
    }

    pub fn query_builder(&self) -> &BooleanQueryBuilder {
        &self.builder
    }

    /// Search the catalog for `raw_query`.
    ///
    /// With `use_synonyms` every word is expanded through the synonym store;
    /// otherwise the words are sent as one literal group. With `use_full_text`
    /// the boolean-mode query runs first, and a rejected or failing full-text
    /// query degrades to the substring tier instead of failing the search.
    /// An empty query returns no results without touching the catalog.
    pub fn search(
        &self,
        raw_query: &str,
        use_full_text: bool,
        use_synonyms: bool,
    ) -> Result<SearchResults> {
        let raw_query = raw_query.trim();
        let mut results = SearchResults::default();
        if raw_query.is_empty() {
            log::debug!("Empty query, skipping search");
            return Ok(results);
        }

        let mut full_text_hits = Vec::new();
        let mut full_text_failed = false;

        if use_full_text {
            let boolean_query = if use_synonyms {
                self.builder.build(raw_query)
            } else {
                self.builder.build_literal(raw_query)
            };

            if boolean_query.is_empty() {
                full_text_failed = true;
            } else {
                match self.run_full_text(&boolean_query) {
                    Ok(records) => full_text_hits = records,
                    Err(e) => {
                        log::warn!(
                            "Full-text search on {} failed for '{}', falling back to substring search: {}",
                            self.catalog.name(),
                            boolean_query,
                            e
                        );
                        results.full_text_error = Some(e.to_string());
                        full_text_failed = true;
                    }
                }
                results.boolean_query = Some(boolean_query);
            }
        }

        let run_fallback = !use_full_text
            || full_text_failed
            || self.config.fallback.should_run(full_text_hits.len());

        let mut substring_hits = Vec::new();
        if run_fallback {
            results.fallback_used = true;
            match self.run_substring(raw_query) {
                Ok(records) => substring_hits = records,
                Err(e) if !full_text_hits.is_empty() => {
                    log::warn!(
                        "Substring search on {} failed for '{}', keeping full-text results: {}",
                        self.catalog.name(),
                        raw_query,
                        e
                    );
                }
                Err(e) => return Err(e),
            }
        }

        log::debug!(
            "Search '{}': {} full-text hits, {} substring hits",
            raw_query,
            full_text_hits.len(),
            substring_hits.len()
        );
        results.hits = merge_tiers(full_text_hits, substring_hits, self.config.limit);
        Ok(results)
    }

    fn run_full_text(&self, boolean_query: &str) -> Result<Vec<CatalogRecord>> {
        self.catalog.full_text_search(&FullTextRequest {
            query: boolean_query.to_string(),
            fields: self.config.text_fields.clone(),
            active_only: self.config.active_only,
            limit: self.config.limit,
        })
    }

    fn run_substring(&self, raw_query: &str) -> Result<Vec<CatalogRecord>> {
        self.catalog.contains_search(&ContainsRequest {
            needles: vec![raw_query.to_string()],
            fields: self.config.text_fields.clone(),
            active_only: self.config.active_only,
            limit: self.config.limit,
        })
    }
}
