//! Session flow around rounds: intro prompt, play, play-again, goodbye.
//!
//! UI-agnostic. The terminal frontend feeds complete lines in and renders
//! whatever `prompt()`, `message()` and the round expose.

use crate::constants::EXIT_SENTINEL;
use crate::game::{
    parse_answer, parse_guess, Feedback, RoundController, RoundError, RoundState,
};
use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, info};

pub const INTRO_PROMPT: &str = "SHALL WE PLAY A GAME? (Y/N)";
pub const GUESS_PROMPT: &str = "PLEASE ENTER FOUR NUMBERS SEPARATED BY SPACES";
pub const PLAY_AGAIN_PROMPT: &str = "WOULD YOU LIKE TO PLAY AGAIN? (Y/N)";
pub const INSTRUCTIONS: &str =
    "ENTER FOUR NUMBERS FROM ONE TO SIX SEPARATED BY SPACES, THEN PRESS ENTER. TYPE \"EXIT\" TO QUIT.";
pub const VICTORY_MESSAGE: &str = "YOU HAVE BEATEN ME";
pub const DECLINED_MESSAGE: &str = "PERHAPS ANOTHER TIME";
pub const FAREWELL_MESSAGE: &str = "THANK YOU FOR PLAYING I HOPE WE CAN PLAY AGAIN SOON!";
pub const ANSWER_REJECTED_MESSAGE: &str = "PLEASE ANSWER Y OR N";

/// Where the session is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Intro,
    Playing,
    /// Holds the finished round's outcome (`Won` or `Lost`).
    RoundOver(RoundState),
    Goodbye,
}

pub struct Session<R: Rng = StdRng> {
    round: RoundController<R>,
    phase: Phase,
    message: Option<String>,
    last_feedback: Option<Feedback>,
}

impl<R: Rng> Session<R> {
    /// Starts at the intro prompt. Accepting it starts a fresh round, so the
    /// controller's current state and hidden sequence are discarded.
    pub fn new(round: RoundController<R>) -> Self {
        Self {
            round,
            phase: Phase::Intro,
            message: None,
            last_feedback: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn round(&self) -> &RoundController<R> {
        &self.round
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Feedback for the most recent guess of the current round.
    pub fn last_feedback(&self) -> Option<&Feedback> {
        self.last_feedback.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Goodbye
    }

    pub fn prompt(&self) -> &'static str {
        match self.phase {
            Phase::Intro => INTRO_PROMPT,
            Phase::Playing => GUESS_PROMPT,
            Phase::RoundOver(_) => PLAY_AGAIN_PROMPT,
            Phase::Goodbye => "",
        }
    }

    /// Process one submitted line of text.
    ///
    /// Errors only when the round controller reports a fault, which means the
    /// session and round disagree about whether the round is over.
    pub fn handle_line(&mut self, line: &str) -> Result<(), RoundError> {
        match self.phase {
            Phase::Intro => {
                match parse_answer(line) {
                    Some(true) => {
                        info!("session started");
                        self.next_round();
                        self.message = Some(INSTRUCTIONS.to_string());
                    }
                    Some(false) => self.finish(DECLINED_MESSAGE),
                    None => self.message = Some(ANSWER_REJECTED_MESSAGE.to_string()),
                }
                Ok(())
            }
            Phase::Playing => self.handle_guess_line(line),
            Phase::RoundOver(_) => {
                match parse_answer(line) {
                    Some(true) => self.next_round(),
                    Some(false) => self.finish(FAREWELL_MESSAGE),
                    None => self.message = Some(ANSWER_REJECTED_MESSAGE.to_string()),
                }
                Ok(())
            }
            Phase::Goodbye => Ok(()),
        }
    }

    /// Leave the session immediately, as if the exit sentinel was typed.
    pub fn abandon(&mut self) {
        if self.phase == Phase::Intro {
            self.finish(DECLINED_MESSAGE);
        } else if self.phase != Phase::Goodbye {
            self.finish(FAREWELL_MESSAGE);
        }
    }

    fn handle_guess_line(&mut self, line: &str) -> Result<(), RoundError> {
        if line.trim().eq_ignore_ascii_case(EXIT_SENTINEL) {
            info!(attempts = self.round.attempts(), "round abandoned");
            self.finish(FAREWELL_MESSAGE);
            return Ok(());
        }

        let guess = match parse_guess(line) {
            Ok(guess) => guess,
            Err(err) => {
                debug!(%err, "guess rejected");
                self.message = Some(err.to_string());
                return Ok(());
            }
        };

        let (feedback, state) = self.round.submit_guess(guess)?;
        self.last_feedback = Some(feedback);
        self.message = match state {
            RoundState::InProgress => None,
            RoundState::Won => Some(VICTORY_MESSAGE.to_string()),
            RoundState::Lost => Some(format!(
                "You failed to guess my numbers...{}",
                self.round.reveal_sequence()
            )),
        };
        if state.is_finished() {
            self.phase = Phase::RoundOver(state);
        }
        Ok(())
    }

    fn next_round(&mut self) {
        self.round.start_round();
        self.last_feedback = None;
        self.message = None;
        self.phase = Phase::Playing;
    }

    fn finish(&mut self, message: &str) {
        self.phase = Phase::Goodbye;
        self.message = Some(message.to_string());
        info!("session ended");
    }
}
