//! Text to guess conversion.
//!
//! Pure functions: they never panic and never print, the caller decides
//! what to show.

use super::{GuessParseError, Sequence};
use crate::constants::{MAX_SYMBOL, MIN_SYMBOL, SEQUENCE_LENGTH};

/// Parse a line such as `"1 2 3 4"` into a guess.
///
/// Checks run in order: every token must be an integer, every value must be
/// in range, and there must be exactly `SEQUENCE_LENGTH` values.
pub fn parse_guess(text: &str) -> Result<Sequence, GuessParseError> {
    let values = text
        .split_whitespace()
        .map(|token| {
            token.parse::<i64>().map_err(|_| GuessParseError::NotANumber {
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<i64>, _>>()?;

    if let Some(&value) = values
        .iter()
        .find(|v| !(i64::from(MIN_SYMBOL)..=i64::from(MAX_SYMBOL)).contains(*v))
    {
        return Err(GuessParseError::OutOfRange { value });
    }

    let symbols: [u8; SEQUENCE_LENGTH] = values
        .iter()
        .map(|&v| v as u8)
        .collect::<Vec<u8>>()
        .try_into()
        .map_err(|_| GuessParseError::WrongCount {
            count: values.len(),
        })?;

    Sequence::new(symbols)
}

/// `Some(true)` for y, `Some(false)` for n, `None` for anything else.
pub fn parse_answer(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "y" => Some(true),
        "n" => Some(false),
        _ => None,
    }
}
