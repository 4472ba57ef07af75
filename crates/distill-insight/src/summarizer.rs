//! Extractive summarization by length tier.

use distill_core::LengthTier;
use tracing::debug;

use crate::error::AnalysisError;
use crate::frequency::FrequencyTable;
use crate::ranker::{rank_sentences, selection_order};
use crate::tokenizer::Tokenizer;
use crate::types::{RankedSentence, SummaryResult};

/// Produces extractive summaries that always read in document order.
pub struct Summarizer {
    tokenizer: Tokenizer,
}

impl Summarizer {
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
        }
    }

    /// Summarize `text`, keeping the share of sentences `tier` asks for.
    ///
    /// A document whose sentences carry no scoring tokens still summarizes:
    /// every score is zero, so the earliest sentences win.
    pub fn summarize(&self, text: &str, tier: LengthTier) -> Result<SummaryResult, AnalysisError> {
        let sentences = self.tokenizer.tokenize(text)?;
        let table = FrequencyTable::build(&sentences);
        let ranked = rank_sentences(&sentences, &table);
        Ok(select_summary(&ranked, tier))
    }

    /// Like [`Summarizer::summarize`], but validates a free-form tier name first.
    pub fn summarize_named(&self, text: &str, tier: &str) -> Result<SummaryResult, AnalysisError> {
        let tier = LengthTier::parse(tier)
            .ok_or_else(|| AnalysisError::UnsupportedLengthTier(tier.to_string()))?;
        self.summarize(text, tier)
    }
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Take the top sentences for `tier`, then restore document order.
pub fn select_summary(ranked: &[RankedSentence], tier: LengthTier) -> SummaryResult {
    let keep = tier.sentence_count(ranked.len());

    let mut selected: Vec<&RankedSentence> =
        selection_order(ranked).into_iter().take(keep).collect();
    selected.sort_by_key(|r| r.position());

    debug!(
        tier = %tier,
        total = ranked.len(),
        selected = selected.len(),
        "Summary sentences selected"
    );

    SummaryResult {
        tier,
        sentences: selected.into_iter().map(|r| r.sentence.clone()).collect(),
    }
}
