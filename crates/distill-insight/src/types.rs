use distill_core::{LengthTier, QuestionCount};
use serde::{Deserialize, Serialize};

/// Normalized (lower-cased, punctuation-free) word form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    /// False for stopwords, words under three characters and pure numbers.
    pub scoring: bool,
}

/// One sentence of a document, in order of appearance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// 0-based position within the document.
    pub position: usize,
    /// Display text, punctuation preserved, whitespace collapsed.
    pub text: String,
    #[serde(skip)]
    pub tokens: Vec<Token>,
}

impl Sentence {
    /// Tokens that contribute to term weights.
    pub fn scoring_tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens
            .iter()
            .filter(|t| t.scoring)
            .map(|t| t.text.as_str())
    }
}

/// A sentence paired with its relevance score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedSentence {
    pub sentence: Sentence,
    /// Mean weight of the sentence's scoring tokens; 0.0 when it has none.
    pub score: f64,
}

impl RankedSentence {
    pub fn position(&self) -> usize {
        self.sentence.position
    }
}

/// Extractive summary, always in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub tier: LengthTier,
    pub sentences: Vec<Sentence>,
}

impl SummaryResult {
    /// Selected sentences joined with single spaces.
    pub fn text(&self) -> String {
        self.sentences
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// A term chosen as the subject of a quiz question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateTerm {
    pub term: String,
    pub weight: f64,
    /// Earliest sentence in which the term appears as a scoring token.
    pub source: Sentence,
}

/// One lettered answer choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub letter: char,
    pub text: String,
}

/// A multiple-choice question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Source sentence with the answer term blanked out.
    pub stem: String,
    pub options: Vec<QuizOption>,
    pub correct_index: usize,
    pub source: Sentence,
    /// Rank score of the source sentence.
    pub relevance: f64,
}

impl Question {
    pub fn correct_option(&self) -> &QuizOption {
        &self.options[self.correct_index]
    }

    pub fn correct_letter(&self) -> char {
        self.correct_option().letter
    }

    pub fn answer(&self) -> &str {
        &self.correct_option().text
    }
}

/// An ordered set of questions, exactly as many as requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quiz {
    pub count: QuestionCount,
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }
}

/// Letter for the option at `index` (0 -> 'A').
pub fn option_letter(index: usize) -> char {
    debug_assert!(index < 26);
    (b'A' + index as u8) as char
}
