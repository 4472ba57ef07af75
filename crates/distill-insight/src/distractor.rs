//! Wrong-answer generation and deterministic option shuffling.

pub use distill_core::config::{MAX_OPTION_COUNT, MIN_OPTION_COUNT};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::AnalysisError;
use crate::frequency::FrequencyTable;
use crate::types::{option_letter, CandidateTerm, QuizOption};

pub const DEFAULT_OPTION_COUNT: usize = 4;

/// Builds the option list for one question.
#[derive(Debug, Clone)]
pub struct DistractorGenerator {
    option_count: usize,
}

impl DistractorGenerator {
    /// Create a generator producing `option_count` options per question.
    pub fn new(option_count: usize) -> Result<Self, AnalysisError> {
        if !(MIN_OPTION_COUNT..=MAX_OPTION_COUNT).contains(&option_count) {
            return Err(AnalysisError::InvalidOptionCount(option_count));
        }
        Ok(Self { option_count })
    }

    pub fn option_count(&self) -> usize {
        self.option_count
    }

    /// Pick `option_count - 1` wrong answers for `answer`.
    ///
    /// Candidates are the other table terms by weight, earliest first on ties.
    /// Falls back to `none of the above #k` placeholders when the table runs dry.
    pub fn distractors(&self, answer: &CandidateTerm, table: &FrequencyTable) -> Vec<String> {
        let wanted = self.option_count - 1;
        let answer_lower = answer.term.to_lowercase();

        let mut picked: Vec<String> = table
            .ranked()
            .into_iter()
            .map(|stats| stats.term.as_str())
            .filter(|term| term.to_lowercase() != answer_lower)
            .take(wanted)
            .map(str::to_string)
            .collect();

        let mut k = 1;
        while picked.len() < wanted {
            picked.push(format!("none of the above #{}", k));
            k += 1;
        }
        picked
    }

    /// Combine the answer with its distractors in a reproducible shuffled order.
    ///
    /// Returns the lettered options and the index of the correct one.
    pub fn build_options(
        &self,
        answer: &CandidateTerm,
        table: &FrequencyTable,
        document_len: usize,
    ) -> (Vec<QuizOption>, usize) {
        let mut texts = self.distractors(answer, table);
        texts.push(answer.term.clone());
        let answer_slot = texts.len() - 1;

        // Shuffle slot numbers so the answer is tracked by index, not by text.
        let seed = shuffle_seed(document_len, answer.source.position, &answer.term);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut slots: Vec<usize> = (0..texts.len()).collect();
        slots.shuffle(&mut rng);

        let mut correct_index = answer_slot;
        let mut options = Vec::with_capacity(slots.len());
        for (i, slot) in slots.into_iter().enumerate() {
            if slot == answer_slot {
                correct_index = i;
            }
            options.push(QuizOption {
                letter: option_letter(i),
                text: std::mem::take(&mut texts[slot]),
            });
        }
        debug_assert_eq!(options[correct_index].text, answer.term);
        (options, correct_index)
    }
}

impl Default for DistractorGenerator {
    fn default() -> Self {
        Self {
            option_count: DEFAULT_OPTION_COUNT,
        }
    }
}

/// FNV-1a over the document length, sentence position and term bytes.
pub fn shuffle_seed(document_len: usize, position: usize, term: &str) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    let bytes = (document_len as u64)
        .to_le_bytes()
        .into_iter()
        .chain((position as u64).to_le_bytes())
        .chain(term.bytes());
    bytes.fold(OFFSET, |hash, b| (hash ^ u64::from(b)).wrapping_mul(PRIME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::KeywordExtractor;
    use crate::tokenizer::Tokenizer;
    use std::collections::HashSet;

    const DOC: &str = "Rust guarantees memory safety. Rust uses ownership rules. \
        Ownership prevents data races. Borrowing checks references. \
        Lifetimes describe references. Cargo builds crates.";

    fn setup(text: &str, n: usize) -> (FrequencyTable, Vec<CandidateTerm>) {
        let sentences = Tokenizer::new().tokenize(text).unwrap();
        let table = FrequencyTable::build(&sentences);
        let terms = KeywordExtractor::new().extract(&sentences, &table, n).unwrap();
        (table, terms)
    }

    #[test]
    fn test_new_rejects_out_of_range_counts() {
        assert_eq!(
            DistractorGenerator::new(1).unwrap_err(),
            AnalysisError::InvalidOptionCount(1)
        );
        assert!(DistractorGenerator::new(27).is_err());
        assert_eq!(DistractorGenerator::new(2).unwrap().option_count(), 2);
        assert_eq!(DistractorGenerator::default().option_count(), 4);
    }

    #[test]
    fn test_distractors_by_weight_excluding_answer() {
        let (table, terms) = setup(DOC, 1);
        assert_eq!(terms[0].term, "rust");
        let gen = DistractorGenerator::default();
        let distractors = gen.distractors(&terms[0], &table);
        // rust, ownership, references lead with 2; the rest tie at 1 by position.
        assert_eq!(distractors, vec!["ownership", "references", "guarantees"]);
    }

    #[test]
    fn test_distractors_pairwise_distinct_and_not_answer() {
        let (table, terms) = setup(DOC, 5);
        let gen = DistractorGenerator::new(6).unwrap();
        for term in &terms {
            let distractors = gen.distractors(term, &table);
            assert_eq!(distractors.len(), 5);
            let lowered: HashSet<String> = distractors.iter().map(|d| d.to_lowercase()).collect();
            assert_eq!(lowered.len(), distractors.len());
            assert!(!lowered.contains(&term.term.to_lowercase()));
        }
    }

    #[test]
    fn test_distractors_pad_with_placeholders() {
        let (table, terms) = setup("Apples and pears.", 1);
        let gen = DistractorGenerator::default();
        let distractors = gen.distractors(&terms[0], &table);
        assert_eq!(
            distractors,
            vec!["pears", "none of the above #1", "none of the above #2"]
        );
    }

    #[test]
    fn test_build_options_contains_answer_once_with_letters() {
        let (table, terms) = setup(DOC, 3);
        let gen = DistractorGenerator::default();
        for term in &terms {
            let (options, correct) = gen.build_options(term, &table, DOC.chars().count());
            assert_eq!(options.len(), 4);
            assert_eq!(options[correct].text, term.term);
            assert_eq!(options.iter().filter(|o| o.text == term.term).count(), 1);
            let letters: Vec<char> = options.iter().map(|o| o.letter).collect();
            assert_eq!(letters, vec!['A', 'B', 'C', 'D']);
        }
    }

    #[test]
    fn test_build_options_is_reproducible() {
        let (table, terms) = setup(DOC, 1);
        let gen = DistractorGenerator::default();
        let len = DOC.chars().count();
        let first = gen.build_options(&terms[0], &table, len);
        let second = gen.build_options(&terms[0], &table, len);
        assert_eq!(first, second);
    }

    #[test]
    fn test_build_options_exact_order() {
        let doc = "Alpha beta gamma delta epsilon.";
        let (table, terms) = setup(doc, 2);
        let gen = DistractorGenerator::default();
        let len = doc.chars().count();

        let (options, correct) = gen.build_options(&terms[0], &table, len);
        let texts: Vec<&str> = options.iter().map(|o| o.text.as_str()).collect();
        assert_eq!(texts, vec!["beta", "delta", "gamma", "alpha"]);
        assert_eq!(correct, 3);

        let (options, correct) = gen.build_options(&terms[1], &table, len);
        let texts: Vec<&str> = options.iter().map(|o| o.text.as_str()).collect();
        assert_eq!(texts, vec!["delta", "gamma", "alpha", "beta"]);
        assert_eq!(correct, 3);
    }

    #[test]
    fn test_build_options_tracks_answer_for_every_seed() {
        let (table, terms) = setup(DOC, 3);
        let gen = DistractorGenerator::new(5).unwrap();
        for term in &terms {
            for document_len in 0..64 {
                let (options, correct) = gen.build_options(term, &table, document_len);
                assert_eq!(options[correct].text, term.term);
                assert_eq!(options.iter().filter(|o| o.text == term.term).count(), 1);
            }
        }
    }

    #[test]
    fn test_build_options_same_set_for_any_seed() {
        let (table, terms) = setup(DOC, 1);
        let gen = DistractorGenerator::default();
        let mut a: Vec<String> = gen
            .build_options(&terms[0], &table, 10)
            .0
            .into_iter()
            .map(|o| o.text)
            .collect();
        let mut b: Vec<String> = gen
            .build_options(&terms[0], &table, 99_999)
            .0
            .into_iter()
            .map(|o| o.text)
            .collect();
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_seed_depends_on_every_input() {
        let base = shuffle_seed(100, 2, "rust");
        assert_eq!(base, shuffle_seed(100, 2, "rust"));
        assert_ne!(base, shuffle_seed(101, 2, "rust"));
        assert_ne!(base, shuffle_seed(100, 3, "rust"));
        assert_ne!(base, shuffle_seed(100, 2, "cargo"));
    }

    #[test]
    fn test_shuffle_seed_empty_input_is_fnv_of_zeroes() {
        // Sixteen zero bytes, no term bytes.
        let expected = (0..16).fold(0xcbf2_9ce4_8422_2325_u64, |h, _| {
            h.wrapping_mul(0x0000_0100_0000_01b3)
        });
        assert_eq!(shuffle_seed(0, 0, ""), expected);
    }
}
