//! Mastermind data structures.
//!
//! A hidden sequence of four symbols in 1..=6 is scored against player
//! guesses until the player finds it or runs out of attempts.

use super::GuessParseError;
use crate::constants::{MAX_SYMBOL, MIN_SYMBOL, SEQUENCE_LENGTH};
use std::fmt;

/// A single symbol value in `MIN_SYMBOL..=MAX_SYMBOL`.
pub type Symbol = u8;

/// A fixed-length sequence of in-range symbols.
///
/// Used both for the hidden sequence and for guesses. The range is checked
/// on construction, so holders of a `Sequence` never re-validate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sequence(pub(super) [Symbol; SEQUENCE_LENGTH]);

impl Sequence {
    pub fn new(symbols: [Symbol; SEQUENCE_LENGTH]) -> Result<Self, GuessParseError> {
        if let Some(&bad) = symbols.iter().find(|s| !is_valid_symbol(**s)) {
            return Err(GuessParseError::OutOfRange {
                value: i64::from(bad),
            });
        }
        Ok(Self(symbols))
    }

    pub fn symbols(&self) -> &[Symbol; SEQUENCE_LENGTH] {
        &self.0
    }

    pub fn contains(&self, symbol: Symbol) -> bool {
        self.0.contains(&symbol)
    }

    /// Comma-separated rendering used when the hidden sequence is revealed.
    pub fn to_reveal_string(&self) -> String {
        self.0
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .0
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        f.write_str(&text)
    }
}

pub fn is_valid_symbol(symbol: Symbol) -> bool {
    (MIN_SYMBOL..=MAX_SYMBOL).contains(&symbol)
}

/// Feedback for a single guess position whose symbol occurs in the hidden sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackMark {
    /// Same symbol at the same position
    Exact,
    /// Symbol occurs in the hidden sequence, but not at this position
    Present,
}

impl FeedbackMark {
    pub fn symbol(&self) -> char {
        match self {
            Self::Exact => '+',
            Self::Present => '-',
        }
    }
}

/// Ordered marks for one guess: all `Exact` marks before all `Present` marks.
///
/// Positions whose symbol is absent from the hidden sequence get no mark,
/// so the length ranges from 0 to `SEQUENCE_LENGTH`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feedback(Vec<FeedbackMark>);

impl Feedback {
    /// Sorts the marks (stable) so `Exact` precedes `Present`.
    pub fn from_marks(mut marks: Vec<FeedbackMark>) -> Self {
        marks.sort_by_key(|m| match m {
            FeedbackMark::Exact => 0,
            FeedbackMark::Present => 1,
        });
        Self(marks)
    }

    pub fn marks(&self) -> &[FeedbackMark] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn exact_count(&self) -> usize {
        self.0.iter().filter(|m| **m == FeedbackMark::Exact).count()
    }

    pub fn present_count(&self) -> usize {
        self.0.iter().filter(|m| **m == FeedbackMark::Present).count()
    }

    /// Full length and every mark `Exact`.
    pub fn is_win(&self) -> bool {
        self.0.len() == SEQUENCE_LENGTH && self.exact_count() == SEQUENCE_LENGTH
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .0
            .iter()
            .map(|m| m.symbol().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        f.write_str(&text)
    }
}

/// A failed guess kept in the round's history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptRecord {
    /// 1-based attempt number
    pub index: usize,
    pub guess: Sequence,
    pub feedback: Feedback,
}

impl AttemptRecord {
    pub fn guess_text(&self) -> String {
        self.guess.to_string()
    }

    pub fn feedback_text(&self) -> String {
        self.feedback.to_string()
    }
}

impl fmt::Display for AttemptRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} -> {}", self.index, self.guess, self.feedback)
    }
}

/// Where a round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    InProgress,
    Won,
    Lost,
}

impl RoundState {
    pub fn is_finished(&self) -> bool {
        !matches!(self, Self::InProgress)
    }
}
