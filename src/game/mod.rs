//! Game core: hidden sequence scoring and the round state machine.

pub mod error;
pub mod oracle;
pub mod parse;
pub mod round;
pub mod types;

pub use error::{GuessParseError, RoundError};
pub use oracle::{calculate_feedback, SequenceOracle};
pub use parse::{parse_answer, parse_guess};
pub use round::RoundController;
pub use types::*;
