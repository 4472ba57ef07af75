//! Multiple-choice quiz assembly.

use std::collections::HashMap;

use distill_core::config::QuizConfig;
use distill_core::QuestionCount;
use tracing::debug;

use crate::distractor::{DistractorGenerator, DEFAULT_OPTION_COUNT};
use crate::error::AnalysisError;
use crate::frequency::FrequencyTable;
use crate::keywords::KeywordExtractor;
use crate::ranker::rank_sentences;
use crate::tokenizer::Tokenizer;
use crate::types::{Question, Quiz};

pub const DEFAULT_BLANK_MARKER: &str = "____";

/// Tunables for quiz generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSettings {
    /// Options per question, correct answer included.
    pub option_count: usize,
    /// Replaces the answer term in each stem.
    pub blank_marker: String,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            option_count: DEFAULT_OPTION_COUNT,
            blank_marker: DEFAULT_BLANK_MARKER.to_string(),
        }
    }
}

impl From<&QuizConfig> for QuizSettings {
    fn from(config: &QuizConfig) -> Self {
        Self {
            option_count: config.option_count,
            blank_marker: config.blank_marker.clone(),
        }
    }
}

/// Turns a document into a fixed-size multiple-choice quiz.
pub struct QuizAssembler {
    tokenizer: Tokenizer,
    keywords: KeywordExtractor,
    distractors: DistractorGenerator,
    blank_marker: String,
}

impl QuizAssembler {
    /// Assembler with four options per question and `____` blanks.
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            keywords: KeywordExtractor::new(),
            distractors: DistractorGenerator::default(),
            blank_marker: DEFAULT_BLANK_MARKER.to_string(),
        }
    }

    /// Assembler with custom option count and blank marker.
    pub fn with_settings(settings: QuizSettings) -> Result<Self, AnalysisError> {
        Ok(Self {
            tokenizer: Tokenizer::new(),
            keywords: KeywordExtractor::new(),
            distractors: DistractorGenerator::new(settings.option_count)?,
            blank_marker: settings.blank_marker,
        })
    }

    /// Generate exactly `count` questions from `text`.
    ///
    /// Questions follow candidate-term order (heaviest term first). Fails with
    /// [`AnalysisError::InsufficientContent`] when the document has fewer
    /// distinct eligible terms than requested; the count is never reduced.
    pub fn generate(&self, text: &str, count: QuestionCount) -> Result<Quiz, AnalysisError> {
        let sentences = self.tokenizer.tokenize(text)?;
        let table = FrequencyTable::build(&sentences);
        let candidates = self
            .keywords
            .extract(&sentences, &table, count.cardinality())?;

        let relevance: HashMap<usize, f64> = rank_sentences(&sentences, &table)
            .into_iter()
            .map(|r| (r.position(), r.score))
            .collect();
        let document_len = text.chars().count();

        let questions: Vec<Question> = candidates
            .into_iter()
            .map(|candidate| {
                let stem = self
                    .tokenizer
                    .blank_first(&candidate.source.text, &candidate.term, &self.blank_marker)
                    .unwrap_or_else(|| candidate.source.text.clone());
                let (options, correct_index) =
                    self.distractors
                        .build_options(&candidate, &table, document_len);
                Question {
                    stem,
                    options,
                    correct_index,
                    relevance: relevance
                        .get(&candidate.source.position)
                        .copied()
                        .unwrap_or(0.0),
                    source: candidate.source,
                }
            })
            .collect();

        debug!(
            questions = questions.len(),
            options = self.distractors.option_count(),
            "Quiz assembled"
        );

        Ok(Quiz { count, questions })
    }

    /// Like [`QuizAssembler::generate`], for a count that has not been validated yet.
    pub fn generate_n(&self, text: &str, count: usize) -> Result<Quiz, AnalysisError> {
        let count = QuestionCount::from_cardinality(count)
            .ok_or(AnalysisError::UnsupportedQuestionCount(count))?;
        self.generate(text, count)
    }
}

impl Default for QuizAssembler {
    fn default() -> Self {
        Self::new()
    }
}
