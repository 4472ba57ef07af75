//! Normalized term-frequency table.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::types::Sentence;

/// Statistics for one distinct scoring token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermStats {
    pub term: String,
    pub count: usize,
    /// `count / max_count`, in `[0, 1]`.
    pub weight: f64,
    /// `(sentence position, token index)` of the first occurrence.
    pub first_seen: (usize, usize),
}

/// Mapping from scoring token to normalized weight.
///
/// Built once per document and read-only afterwards. Iteration follows first
/// appearance in the document.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    entries: Vec<TermStats>,
    index: HashMap<String, usize>,
    max_count: usize,
}

impl FrequencyTable {
    /// Count every scoring token across `sentences` and normalize by the maximum count.
    pub fn build(sentences: &[Sentence]) -> Self {
        let mut entries: Vec<TermStats> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for sentence in sentences {
            for (token_idx, token) in sentence.tokens.iter().enumerate() {
                if !token.scoring {
                    continue;
                }
                match index.get(&token.text) {
                    Some(&i) => entries[i].count += 1,
                    None => {
                        index.insert(token.text.clone(), entries.len());
                        entries.push(TermStats {
                            term: token.text.clone(),
                            count: 1,
                            weight: 0.0,
                            first_seen: (sentence.position, token_idx),
                        });
                    }
                }
            }
        }

        let max_count = entries.iter().map(|e| e.count).max().unwrap_or(0);
        for entry in &mut entries {
            entry.weight = entry.count as f64 / max_count as f64;
        }

        debug!(distinct_terms = entries.len(), max_count, "Frequency table built");

        Self {
            entries,
            index,
            max_count,
        }
    }

    pub fn get(&self, term: &str) -> Option<&TermStats> {
        self.index.get(term).map(|&i| &self.entries[i])
    }

    /// Weight of `term`, or 0.0 when it is not a scoring token of the document.
    pub fn weight(&self, term: &str) -> f64 {
        self.get(term).map_or(0.0, |e| e.weight)
    }

    pub fn max_count(&self) -> usize {
        self.max_count
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-appearance order.
    pub fn iter(&self) -> std::slice::Iter<'_, TermStats> {
        self.entries.iter()
    }

    /// Entries by weight descending, earliest first appearance winning ties.
    pub fn ranked(&self) -> Vec<&TermStats> {
        let mut ranked: Vec<&TermStats> = self.entries.iter().collect();
        ranked.sort_by(|a, b| by_weight_then_position(a, b));
        ranked
    }
}

/// Shared term ordering for keyword and distractor selection.
///
/// Weights share a denominator, so comparing raw counts is exact.
pub(crate) fn by_weight_then_position(a: &TermStats, b: &TermStats) -> Ordering {
    b.count
        .cmp(&a.count)
        .then_with(|| a.first_seen.cmp(&b.first_seen))
}
