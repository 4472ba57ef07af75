//! Distill Insight crate - local, deterministic text analysis.
//!
//! Provides the analysis pipeline shared by both toolkit features:
//! - Sentence and word tokenization with stopword filtering
//! - Normalized term-frequency scoring and sentence ranking
//! - Extractive summaries by length tier, always in document order
//! - Keyword selection, distractor generation and quiz assembly
//!
//! Every operation is a pure function of its input text.

pub mod distractor;
pub mod error;
pub mod frequency;
pub mod keywords;
pub mod quiz;
pub mod ranker;
pub mod summarizer;
pub mod tokenizer;
pub mod types;

pub use distill_core::{LengthTier, QuestionCount};
pub use distractor::DistractorGenerator;
pub use error::AnalysisError;
pub use frequency::{FrequencyTable, TermStats};
pub use keywords::KeywordExtractor;
pub use quiz::{QuizAssembler, QuizSettings};
pub use summarizer::Summarizer;
pub use tokenizer::{normalize_whitespace, Tokenizer};
pub use types::{
    CandidateTerm, Question, Quiz, QuizOption, RankedSentence, Sentence, SummaryResult, Token,
};

/// Extractive summary of `text` at the given length tier.
pub fn summarize(text: &str, tier: LengthTier) -> Result<SummaryResult, AnalysisError> {
    Summarizer::new().summarize(text, tier)
}

/// Extractive summary for a tier given by name (`short`, `medium`, `long`).
pub fn summarize_named(text: &str, tier: &str) -> Result<SummaryResult, AnalysisError> {
    Summarizer::new().summarize_named(text, tier)
}

/// Multiple-choice quiz of exactly `count` four-option questions.
pub fn generate_quiz(text: &str, count: QuestionCount) -> Result<Quiz, AnalysisError> {
    QuizAssembler::new().generate(text, count)
}
