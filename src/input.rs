//! Keyboard handling for the terminal frontend.
//!
//! Keys edit a one-line text buffer; Enter hands the finished line to the
//! session.

use crate::session::Session;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::Rng;

/// Maximum characters accepted on the prompt line.
const MAX_LINE_CHARS: usize = 32;

/// Single-line text buffer with a cursor.
#[derive(Debug, Clone, Default)]
pub struct LineInput {
    text: String,
    cursor: usize,
}

impl LineInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn handle_char_input(&mut self, c: char) {
        if c.is_control() || self.text.chars().count() >= MAX_LINE_CHARS {
            return;
        }
        let byte_idx = self.byte_index(self.cursor);
        self.text.insert(byte_idx, c);
        self.cursor += 1;
    }

    pub fn handle_backspace(&mut self) {
        if self.cursor > 0 {
            let byte_idx = self.byte_index(self.cursor - 1);
            self.text.remove(byte_idx);
            self.cursor -= 1;
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.chars().count() {
            self.cursor += 1;
        }
    }

    /// Take the buffered line, leaving the buffer empty.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}

/// Result of handling a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    /// The session has said goodbye and the key dismissed it.
    Quit,
}

/// Route a key press to the line buffer or the session.
pub fn handle_key<R: Rng>(
    key: KeyEvent,
    line: &mut LineInput,
    session: &mut Session<R>,
) -> Result<InputResult, crate::game::RoundError> {
    if key.kind == KeyEventKind::Release {
        return Ok(InputResult::Continue);
    }

    if session.is_finished() {
        return Ok(InputResult::Quit);
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            session.abandon();
        }
        KeyCode::Char(c) => line.handle_char_input(c),
        KeyCode::Backspace => line.handle_backspace(),
        KeyCode::Left => line.move_left(),
        KeyCode::Right => line.move_right(),
        KeyCode::Enter => {
            let text = line.take();
            session.handle_line(&text)?;
        }
        KeyCode::Esc => {
            line.take();
            session.abandon();
        }
        _ => {}
    }
    Ok(InputResult::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{RoundController, SequenceOracle};
    use crate::session::Phase;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn session() -> Session<ChaCha8Rng> {
        let oracle = SequenceOracle::new(ChaCha8Rng::seed_from_u64(42));
        Session::new(RoundController::new(oracle, 10))
    }

    fn type_line(text: &str, line: &mut LineInput, session: &mut Session<ChaCha8Rng>) {
        for c in text.chars() {
            handle_key(key(KeyCode::Char(c)), line, session).unwrap();
        }
        handle_key(key(KeyCode::Enter), line, session).unwrap();
    }

    #[test]
    fn test_line_editing() {
        let mut line = LineInput::new();
        for c in "1 3".chars() {
            line.handle_char_input(c);
        }
        line.move_left();
        line.handle_char_input('2');
        assert_eq!(line.text(), "1 23");
        line.handle_backspace();
        assert_eq!(line.text(), "1 3");
        assert_eq!(line.cursor(), 2);
        line.move_right();
        line.move_right();
        assert_eq!(line.cursor(), 3);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut line = LineInput::new();
        line.handle_backspace();
        assert_eq!(line.text(), "");
        assert_eq!(line.cursor(), 0);
    }

    #[test]
    fn test_line_length_capped() {
        let mut line = LineInput::new();
        for _ in 0..100 {
            line.handle_char_input('1');
        }
        assert_eq!(line.text().len(), MAX_LINE_CHARS);
    }

    #[test]
    fn test_take_clears_buffer() {
        let mut line = LineInput::new();
        line.handle_char_input('y');
        assert_eq!(line.take(), "y");
        assert_eq!(line.text(), "");
        assert_eq!(line.cursor(), 0);
    }

    #[test]
    fn test_enter_submits_line() {
        let mut line = LineInput::new();
        let mut session = session();
        type_line("y", &mut line, &mut session);
        assert_eq!(session.phase(), Phase::Playing);

        type_line("1 2 5 5", &mut line, &mut session);
        assert_eq!(session.round().attempts(), 1);
        assert_eq!(line.text(), "");
    }

    #[test]
    fn test_esc_abandons() {
        let mut line = LineInput::new();
        let mut session = session();
        type_line("y", &mut line, &mut session);
        handle_key(key(KeyCode::Esc), &mut line, &mut session).unwrap();
        assert!(session.is_finished());

        let result = handle_key(key(KeyCode::Char('x')), &mut line, &mut session).unwrap();
        assert_eq!(result, InputResult::Quit);
    }
}
