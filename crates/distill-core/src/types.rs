use serde::{Deserialize, Serialize};

/// Summary length setting.
///
/// Each tier selects a fixed percentage of the document's sentences, rounded
/// up, never fewer than one and never more than the document holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthTier {
    Short,
    #[default]
    Medium,
    Long,
}

impl LengthTier {
    pub const ALL: [LengthTier; 3] = [Self::Short, Self::Medium, Self::Long];

    /// Share of the sentence count to keep, in percent.
    pub fn fraction_percent(&self) -> usize {
        match self {
            Self::Short => 20,
            Self::Medium => 40,
            Self::Long => 60,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "short" => Some(Self::Short),
            "medium" => Some(Self::Medium),
            "long" => Some(Self::Long),
            _ => None,
        }
    }

    /// Number of sentences this tier keeps out of `total`.
    ///
    /// `ceil(total * pct / 100)` clamped to `1..=total`; zero when `total` is zero.
    pub fn sentence_count(&self, total: usize) -> usize {
        if total == 0 {
            return 0;
        }
        let wanted = (total * self.fraction_percent()).div_ceil(100);
        wanted.clamp(1, total)
    }
}

impl std::fmt::Display for LengthTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of questions in a generated quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum QuestionCount {
    #[default]
    Five,
    Ten,
    Twenty,
}

impl QuestionCount {
    pub const ALL: [QuestionCount; 3] = [Self::Five, Self::Ten, Self::Twenty];

    pub fn cardinality(&self) -> usize {
        match self {
            Self::Five => 5,
            Self::Ten => 10,
            Self::Twenty => 20,
        }
    }

    pub fn from_cardinality(n: usize) -> Option<Self> {
        match n {
            5 => Some(Self::Five),
            10 => Some(Self::Ten),
            20 => Some(Self::Twenty),
            _ => None,
        }
    }
}

impl TryFrom<usize> for QuestionCount {
    type Error = String;

    fn try_from(n: usize) -> std::result::Result<Self, Self::Error> {
        Self::from_cardinality(n)
            .ok_or_else(|| format!("unsupported question count {} (expected 5, 10 or 20)", n))
    }
}

impl From<QuestionCount> for usize {
    fn from(count: QuestionCount) -> Self {
        count.cardinality()
    }
}

impl std::fmt::Display for QuestionCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.cardinality())
    }
}
