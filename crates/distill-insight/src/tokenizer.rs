//! Sentence splitting and word normalization.

use std::collections::HashSet;
use std::ops::Range;

use regex::Regex;
use tracing::debug;

use crate::error::AnalysisError;
use crate::types::{Sentence, Token};

/// Common English function words excluded from scoring.
pub const STOPWORDS: &[&str] = &[
    "a", "about", "after", "all", "also", "an", "and", "any", "are", "as", "at", "be", "been",
    "but", "by", "can", "could", "did", "do", "does", "for", "from", "had", "has", "have", "he",
    "her", "his", "how", "i", "if", "in", "into", "is", "it", "its", "may", "more", "most", "not",
    "of", "on", "only", "or", "other", "our", "she", "should", "so", "some", "such", "than",
    "that", "the", "their", "them", "then", "there", "these", "they", "this", "those", "to",
    "too", "very", "was", "we", "were", "what", "when", "where", "which", "while", "who", "will",
    "with", "would", "you", "your",
];

/// Minimum character length of a scoring token.
pub const MIN_SCORING_LEN: usize = 3;

/// Splits documents into sentences and sentences into normalized tokens.
pub struct Tokenizer {
    boundary_regex: Regex,
    word_regex: Regex,
    stopwords: HashSet<&'static str>,
}

impl Tokenizer {
    /// Create a tokenizer with pre-compiled patterns and the default stopword set.
    pub fn new() -> Self {
        Self {
            boundary_regex: Regex::new(r"[.!?](?:\s+|$)").expect("boundary pattern is valid"),
            word_regex: Regex::new(r"[\p{Alphabetic}\p{N}]+").expect("word pattern is valid"),
            stopwords: STOPWORDS.iter().copied().collect(),
        }
    }

    /// Split a document into sentences with positions and tokens.
    ///
    /// Fails with [`AnalysisError::EmptyDocument`] when no fragment contains a word.
    pub fn tokenize(&self, text: &str) -> Result<Vec<Sentence>, AnalysisError> {
        let sentences: Vec<Sentence> = self
            .split_sentences(text)
            .into_iter()
            .enumerate()
            .map(|(position, fragment)| {
                let display = normalize_whitespace(fragment);
                let tokens = self.tokens(&display);
                Sentence {
                    position,
                    text: display,
                    tokens,
                }
            })
            .collect();

        if sentences.is_empty() {
            return Err(AnalysisError::EmptyDocument);
        }

        debug!(
            sentences = sentences.len(),
            chars = text.chars().count(),
            "Document tokenized"
        );
        Ok(sentences)
    }

    /// Split on `.`, `!` or `?` followed by whitespace or end of text.
    ///
    /// Fragments are trimmed; fragments without any letter or digit are dropped.
    pub fn split_sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut result = Vec::new();
        let mut start = 0;
        for m in self.boundary_regex.find_iter(text) {
            // Terminal punctuation is a single ASCII byte.
            let end = m.start() + 1;
            self.push_fragment(&text[start..end], &mut result);
            start = m.end();
        }
        if start < text.len() {
            self.push_fragment(&text[start..], &mut result);
        }
        result
    }

    fn push_fragment<'a>(&self, fragment: &'a str, out: &mut Vec<&'a str>) {
        let trimmed = fragment.trim();
        if self.word_regex.is_match(trimmed) {
            out.push(trimmed);
        }
    }

    /// Extract every word of `text` as a lower-cased token.
    pub fn tokens(&self, text: &str) -> Vec<Token> {
        self.word_regex
            .find_iter(text)
            .map(|m| {
                let word = m.as_str().to_lowercase();
                let scoring = self.is_scoring(&word);
                Token {
                    text: word,
                    scoring,
                }
            })
            .collect()
    }

    /// Byte ranges of every word in `text`.
    pub fn word_spans<'a>(&'a self, text: &'a str) -> impl Iterator<Item = Range<usize>> + 'a {
        self.word_regex.find_iter(text).map(|m| m.range())
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Whether an already lower-cased word contributes to term weights.
    pub fn is_scoring(&self, word: &str) -> bool {
        word.chars().count() >= MIN_SCORING_LEN
            && !word.chars().all(char::is_numeric)
            && !self.is_stopword(word)
    }

    /// Replace the first word of `text` equal to `term` (case-insensitive) with `marker`.
    ///
    /// Returns `None` when `term` does not occur as a whole word.
    pub fn blank_first(&self, text: &str, term: &str, marker: &str) -> Option<String> {
        let span = self
            .word_spans(text)
            .find(|span| text[span.clone()].to_lowercase() == term)?;
        let mut stem = String::with_capacity(text.len());
        stem.push_str(&text[..span.start]);
        stem.push_str(marker);
        stem.push_str(&text[span.end..]);
        Some(stem)
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Collapse whitespace runs into single spaces and trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
