pub mod board_scene;

use crate::input::LineInput;
use crate::session::Session;
use rand::Rng;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

/// Main UI drawing function
pub fn draw_ui<R: Rng>(frame: &mut Frame, session: &Session<R>, line: &LineInput) {
    let size = frame.size();

    // Title bar on top, board below
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(size);

    let title = Paragraph::new("MASTERMIND")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(title, v_chunks[0]);

    board_scene::render_board(frame, v_chunks[1], session, line);
}
