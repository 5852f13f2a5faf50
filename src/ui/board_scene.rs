//! Mastermind board rendering.

use crate::constants::{MAX_SYMBOL, MIN_SYMBOL, SEQUENCE_LENGTH};
use crate::input::LineInput;
use crate::game::{FeedbackMark, RoundState};
use crate::session::{Phase, Session};
use rand::Rng;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the whole game screen.
pub fn render_board<R: Rng>(frame: &mut Frame, area: Rect, session: &Session<R>, line: &LineInput) {
    frame.render_widget(Clear, area);

    // Horizontal: board (left) + info panel (right)
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(24)])
        .split(area);

    // Left side: history (top) + prompt (3 lines) + status (3 lines)
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(h_chunks[0]);

    render_history(frame, v_chunks[0], session);
    render_prompt(frame, v_chunks[1], session, line);
    render_status(frame, v_chunks[2], session);
    render_info_panel(frame, h_chunks[1], session);
}

/// Render the failed attempts, oldest first.
fn render_history<R: Rng>(frame: &mut Frame, area: Rect, session: &Session<R>) {
    let block = Block::default()
        .title(" Failed Attempts ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let log = session.round().attempt_log();
    // Keep the newest records visible when the panel is short
    let skip = log.len().saturating_sub(inner.height as usize);

    let lines: Vec<Line> = log
        .iter()
        .skip(skip)
        .map(|record| {
            let mut spans = vec![
                Span::styled(
                    format!("{:>2} | ", record.index),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{}  ", record.guess_text()),
                    Style::default().fg(Color::White),
                ),
                Span::styled("-> ", Style::default().fg(Color::DarkGray)),
            ];
            spans.extend(record.feedback.marks().iter().map(mark_span));
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn mark_span(mark: &FeedbackMark) -> Span<'static> {
    let color = match mark {
        FeedbackMark::Exact => Color::Green,
        FeedbackMark::Present => Color::Yellow,
    };
    Span::styled(format!("{} ", mark.symbol()), Style::default().fg(color))
}

/// Render the prompt text and the line being typed.
fn render_prompt<R: Rng>(frame: &mut Frame, area: Rect, session: &Session<R>, line: &LineInput) {
    let block = Block::default()
        .title(format!(" {} ", session.prompt()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if session.is_finished() {
        return;
    }

    let chars: Vec<char> = line.text().chars().collect();
    let before: String = chars[..line.cursor()].iter().collect();
    let after: String = chars[line.cursor()..].iter().collect();

    let input = Line::from(vec![
        Span::styled("> ", Style::default().fg(Color::DarkGray)),
        Span::styled(before, Style::default().fg(Color::White)),
        Span::styled(
            "_",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::SLOW_BLINK),
        ),
        Span::styled(after, Style::default().fg(Color::White)),
    ]);
    frame.render_widget(Paragraph::new(input), inner);
}

/// Render the status message for the last action.
fn render_status<R: Rng>(frame: &mut Frame, area: Rect, session: &Session<R>) {
    let color = match session.phase() {
        Phase::RoundOver(RoundState::Won) => Color::Green,
        Phase::RoundOver(_) => Color::Red,
        Phase::Goodbye => Color::Yellow,
        _ => Color::LightRed,
    };

    let mut lines = Vec::new();
    if let Some(feedback) = session.last_feedback() {
        if session.phase() == Phase::Playing {
            let mut spans = vec![Span::styled(
                "Last: ",
                Style::default().fg(Color::DarkGray),
            )];
            if feedback.is_empty() {
                spans.push(Span::styled(
                    "no matches",
                    Style::default().fg(Color::DarkGray),
                ));
            }
            spans.extend(feedback.marks().iter().map(mark_span));
            lines.push(Line::from(spans));
        }
    }
    if let Some(message) = session.message() {
        lines.push(Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
    }
    if session.is_finished() {
        lines.push(Line::from(Span::styled(
            "[Any key to exit]",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let status = Paragraph::new(lines)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });
    frame.render_widget(status, area);
}

/// Render the info panel on the right side.
fn render_info_panel<R: Rng>(frame: &mut Frame, area: Rect, session: &Session<R>) {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let round = session.round();
    let remaining = round.attempts_remaining();

    let lines = vec![
        Line::from(vec![
            Span::styled("Symbols: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}-{}", MIN_SYMBOL, MAX_SYMBOL),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled("Length: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", SEQUENCE_LENGTH),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled("Guesses: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{} left", remaining),
                Style::default().fg(if remaining <= 2 {
                    Color::Red
                } else {
                    Color::White
                }),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Feedback:",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(" + ", Style::default().fg(Color::Green)),
            Span::styled("Right spot", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(" - ", Style::default().fg(Color::Yellow)),
            Span::styled("In code", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" [Enter]", Style::default().fg(Color::White)),
            Span::styled(" Submit", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(" [Esc]", Style::default().fg(Color::White)),
            Span::styled(" Quit", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
