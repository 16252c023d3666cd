//! Stateless board rendering.

use super::App;
use crate::game::{SessionState, Verdict};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Renders the full frame: title, board, status.
pub(crate) fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                           // Title
            Constraint::Min(app.max_attempts as u16 + 2),    // Board
            Constraint::Length(3),                           // Status
        ])
        .split(area);

    let title = Paragraph::new("wordgrid")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app);

    let status_style = if app.checking {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status = Paragraph::new(app.status.as_str())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = Vec::with_capacity(app.max_attempts);

    for result in &app.history {
        let spans: Vec<Span> = result
            .letters()
            .iter()
            .map(|s| {
                Span::styled(
                    format!(" {} ", s.letter.to_ascii_uppercase()),
                    verdict_style(s.verdict),
                )
            })
            .collect();
        lines.push(Line::from(spans));
    }

    let show_input = !app.state.is_terminal() && app.history.len() < app.max_attempts;
    if show_input {
        let mut spans: Vec<Span> = Vec::with_capacity(app.word_length);
        let typed: Vec<char> = app.input.chars().collect();
        for i in 0..app.word_length {
            let (text, style) = match typed.get(i) {
                Some(c) => (
                    format!(" {} ", c.to_ascii_uppercase()),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                None if i == typed.len() => (
                    " _ ".to_string(),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                ),
                None => ("   ".to_string(), Style::default().bg(Color::White)),
            };
            spans.push(Span::styled(text, style));
        }
        lines.push(Line::from(spans));
    }

    let filled = app.history.len() + usize::from(show_input);
    for _ in filled..app.max_attempts {
        lines.push(Line::from(Span::styled(
            "   ".repeat(app.word_length),
            Style::default().bg(Color::DarkGray),
        )));
    }

    if let Some(summary) = &app.summary {
        lines.push(Line::default());
        let header = match app.state {
            SessionState::Won => "Game summary",
            _ => "Better luck tomorrow",
        };
        lines.push(Line::from(Span::styled(
            header,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for row in summary.lines() {
            lines.push(Line::from(row.to_string()));
        }
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board, area);
}

fn verdict_style(verdict: Verdict) -> Style {
    let base = Style::default().fg(Color::Black).add_modifier(Modifier::BOLD);
    match verdict {
        Verdict::Exact => base.bg(Color::Green),
        Verdict::Present => base.bg(Color::Yellow),
        Verdict::Absent => base.bg(Color::Gray),
    }
}
