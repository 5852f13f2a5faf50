//! Error types for the round state machine and guess parsing.

use super::RoundState;
use derive_more::{Display, Error};

/// Fault raised by the round state machine on caller misuse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum RoundError {
    /// A guess was submitted after the round reached Won or Lost.
    #[display("round already finished ({state:?})")]
    RoundAlreadyFinished { state: RoundState },
}

/// Why a line of text could not be turned into a guess.
///
/// The display text is what the player sees.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GuessParseError {
    #[display("A PARSING ERROR HAS OCCURRED, PLEASE RE-ENTER YOUR GUESS ({token:?} IS NOT A NUMBER)")]
    NotANumber { token: String },
    #[display("INVALID NUMBER {value}: ONLY ONE THROUGH SIX ARE VALID")]
    OutOfRange { value: i64 },
    #[display("EXPECTED FOUR NUMBERS BUT GOT {count}")]
    WrongCount { count: usize },
}
