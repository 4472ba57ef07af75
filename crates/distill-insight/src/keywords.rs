//! Selection of quiz subject terms.

use tracing::debug;

use crate::error::AnalysisError;
use crate::frequency::FrequencyTable;
use crate::types::{CandidateTerm, Sentence};

/// Picks the highest-weighted scoring tokens as quiz subjects.
pub struct KeywordExtractor;

impl KeywordExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Select exactly `n` candidate terms, heaviest first.
    ///
    /// Ties go to the term that appears earliest. Each term is paired with the
    /// first sentence in which it occurs as a scoring token. Fails with
    /// [`AnalysisError::InsufficientContent`] rather than returning fewer, and
    /// with [`AnalysisError::MismatchedSentences`] when `table` was built from
    /// other sentences.
    pub fn extract(
        &self,
        sentences: &[Sentence],
        table: &FrequencyTable,
        n: usize,
    ) -> Result<Vec<CandidateTerm>, AnalysisError> {
        if table.len() < n {
            return Err(AnalysisError::InsufficientContent {
                requested: n,
                available: table.len(),
            });
        }

        let candidates = table
            .ranked()
            .into_iter()
            .take(n)
            .map(|stats| {
                let (position, _) = stats.first_seen;
                let source = sentences.get(position).ok_or(AnalysisError::MismatchedSentences {
                    position,
                    available: sentences.len(),
                })?;
                Ok(CandidateTerm {
                    term: stats.term.clone(),
                    weight: stats.weight,
                    source: source.clone(),
                })
            })
            .collect::<Result<Vec<_>, AnalysisError>>()?;

        debug!(
            requested = n,
            available = table.len(),
            "Candidate terms extracted"
        );
        Ok(candidates)
    }
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}
