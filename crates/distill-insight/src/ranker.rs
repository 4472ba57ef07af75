//! Sentence scoring from term weights.

use crate::frequency::FrequencyTable;
use crate::types::{RankedSentence, Sentence};

/// Score every sentence by the mean weight of its scoring tokens.
///
/// Output keeps document order; use [`selection_order`] to pick the best.
pub fn rank_sentences(sentences: &[Sentence], table: &FrequencyTable) -> Vec<RankedSentence> {
    sentences
        .iter()
        .map(|sentence| RankedSentence {
            score: sentence_score(sentence, table),
            sentence: sentence.clone(),
        })
        .collect()
}

fn sentence_score(sentence: &Sentence, table: &FrequencyTable) -> f64 {
    let (sum, n) = sentence
        .scoring_tokens()
        .fold((0.0_f64, 0usize), |(sum, n), t| (sum + table.weight(t), n + 1));
    if n == 0 {
        0.0
    } else {
        sum / n as f64
    }
}

/// Ranked sentences by score descending, lower position winning ties.
pub(crate) fn selection_order(ranked: &[RankedSentence]) -> Vec<&RankedSentence> {
    let mut order: Vec<&RankedSentence> = ranked.iter().collect();
    order.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.position().cmp(&b.position()))
    });
    order
}
