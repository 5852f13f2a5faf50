//! Round state machine: attempt counting, failure history and termination.

use super::{AttemptRecord, Feedback, RoundError, RoundState, Sequence, SequenceOracle};
use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, info, instrument, warn};

/// Drives one round at a time against a single oracle.
///
/// Has no knowledge of rendering or text parsing; callers hand it
/// already-validated guesses.
#[derive(Debug, Clone)]
pub struct RoundController<R: Rng = StdRng> {
    oracle: SequenceOracle<R>,
    max_attempts: usize,
    attempts: usize,
    attempt_log: Vec<AttemptRecord>,
    state: RoundState,
}

impl<R: Rng> RoundController<R> {
    /// Wrap an oracle whose hidden sequence is already drawn.
    ///
    /// The round starts `InProgress` against that sequence. The limit is
    /// clamped to at least one; a zero limit is reported with `warn!` to
    /// whichever subscriber is installed at the time of the call, so it is
    /// lost if logging has not been set up yet.
    pub fn new(oracle: SequenceOracle<R>, max_attempts: usize) -> Self {
        if max_attempts == 0 {
            warn!("attempt limit of 0 raised to 1");
        }
        Self {
            oracle,
            max_attempts: max_attempts.max(1),
            attempts: 0,
            attempt_log: Vec::new(),
            state: RoundState::InProgress,
        }
    }

    /// Reset the counter and history, then draw a new hidden sequence.
    #[instrument(skip_all)]
    pub fn start_round(&mut self) {
        self.attempts = 0;
        self.attempt_log.clear();
        self.oracle.generate_sequence();
        self.state = RoundState::InProgress;
        info!(max_attempts = self.max_attempts, "round started");
    }

    /// Score a guess and advance the state machine.
    ///
    /// A winning guess is reported through the returned state and is not
    /// added to the attempt log. Fails without touching any state when the
    /// round is already finished.
    #[instrument(skip_all)]
    pub fn submit_guess(&mut self, guess: Sequence) -> Result<(Feedback, RoundState), RoundError> {
        if self.state.is_finished() {
            return Err(RoundError::RoundAlreadyFinished { state: self.state });
        }

        self.attempts += 1;

        let feedback = self.oracle.evaluate_guess(&guess);
        let won = feedback.is_win();
        debug!(attempt = self.attempts, %feedback, won, "guess evaluated");

        if !won {
            self.attempt_log.push(AttemptRecord {
                index: self.attempts,
                guess,
                feedback: feedback.clone(),
            });
        }

        self.state = if won {
            RoundState::Won
        } else if self.attempts >= self.max_attempts {
            RoundState::Lost
        } else {
            RoundState::InProgress
        };

        if self.state.is_finished() {
            info!(state = ?self.state, attempts = self.attempts, "round finished");
        }

        Ok((feedback, self.state))
    }

    pub fn attempts_remaining(&self) -> usize {
        self.max_attempts.saturating_sub(self.attempts)
    }

    /// Failed guesses in the order they were made.
    pub fn attempt_log(&self) -> &[AttemptRecord] {
        &self.attempt_log
    }

    pub fn reveal_sequence(&self) -> String {
        self.oracle.reveal_sequence()
    }

    pub fn attempts(&self) -> usize {
        self.attempts
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    pub fn state(&self) -> RoundState {
        self.state
    }
}
