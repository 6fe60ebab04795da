//! Merging of full-text and substring tier results.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::catalog::CatalogRecord;

/// The tier a hit came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchTier {
    FullText,
    Substring,
}

/// A record in the final result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub record: CatalogRecord,
    pub tier: SearchTier,
}

/// Merge the two tiers.
///
/// Full-text records keep their order and come first; substring records not
/// already present are appended in their own order. Records are deduplicated
/// by id and the result is truncated to `limit`.
pub fn merge_tiers(
    full_text: Vec<CatalogRecord>,
    substring: Vec<CatalogRecord>,
    limit: usize,
) -> Vec<SearchHit> {
    let mut seen = AHashSet::with_capacity(full_text.len() + substring.len());
    let tiers = full_text
        .into_iter()
        .map(|record| (record, SearchTier::FullText))
        .chain(substring.into_iter().map(|record| (record, SearchTier::Substring)));

    tiers
        .filter(|(record, _)| seen.insert(record.id))
        .take(limit)
        .map(|(record, tier)| SearchHit { record, tier })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(ids: &[u64]) -> Vec<CatalogRecord> {
        ids.iter().map(|id| CatalogRecord::new(*id)).collect()
    }

    #[test]
    fn test_full_text_first_then_new_substring_hits() {
        let hits = merge_tiers(records(&[5, 2]), records(&[1, 2, 3]), 10);
        let summary: Vec<(u64, SearchTier)> =
            hits.iter().map(|h| (h.record.id, h.tier)).collect();
        assert_eq!(
            summary,
            vec![
                (5, SearchTier::FullText),
                (2, SearchTier::FullText),
                (1, SearchTier::Substring),
                (3, SearchTier::Substring),
            ]
        );
    }

    #[test]
    fn test_limit_and_empty_tiers() {
        assert_eq!(merge_tiers(records(&[1, 2]), records(&[3]), 2).len(), 2);
        assert!(merge_tiers(Vec::new(), Vec::new(), 10).is_empty());
        assert_eq!(merge_tiers(records(&[4, 4]), Vec::new(), 10).len(), 1);
    }
}
