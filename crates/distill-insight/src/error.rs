use thiserror::Error;

/// Errors that can occur in the analysis pipeline.
///
/// Every error is raised at the point of detection; no partial summary or
/// quiz is ever returned alongside one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("document contains no usable sentences")]
    EmptyDocument,
    #[error("insufficient content: {requested} distinct terms requested, document has {available}")]
    InsufficientContent { requested: usize, available: usize },
    #[error("unsupported length tier: {0:?} (expected short, medium or long)")]
    UnsupportedLengthTier(String),
    #[error("unsupported question count: {0} (expected 5, 10 or 20)")]
    UnsupportedQuestionCount(usize),
    #[error("invalid option count: {0} (expected 2 to 26)")]
    InvalidOptionCount(usize),
    #[error("frequency table refers to sentence {position}, but only {available} sentences were given")]
    MismatchedSentences { position: usize, available: usize },
}

impl AnalysisError {
    /// Stable machine-readable tag for rendering.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyDocument => "empty_document",
            Self::InsufficientContent { .. } => "insufficient_content",
            Self::UnsupportedLengthTier(_) => "unsupported_length_tier",
            Self::UnsupportedQuestionCount(_) => "unsupported_question_count",
            Self::InvalidOptionCount(_) => "invalid_option_count",
            Self::MismatchedSentences { .. } => "mismatched_sentences",
        }
    }
}
