//! Top-level layout, header and status bar

use crate::app::App;
use crate::state::NoticeKind;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into header, form area and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Form
            Constraint::Length(1), // Status bar
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Draw the page header
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Create a store",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Add your basic store information and complete the setup",
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(header, area);
}

/// Draw the status bar: the current notice when present, key help otherwise
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let line = match &app.state.notice {
        Some(notice) => {
            let color = match notice.kind {
                NoticeKind::Success => Color::Green,
                NoticeKind::Error => Color::Red,
            };
            Line::from(Span::styled(
                format!(" {} ", notice.text),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
        }
        None => Line::from(vec![
            Span::styled("Tab", Style::default().fg(Color::Cyan)),
            Span::raw(": next field  "),
            Span::styled("←/→", Style::default().fg(Color::Cyan)),
            Span::raw(": change option  "),
            Span::styled("Ctrl+S", Style::default().fg(Color::Cyan)),
            Span::raw(": create  "),
            Span::styled("Esc", Style::default().fg(Color::Cyan)),
            Span::raw(": reset  "),
            Span::styled("Ctrl+C", Style::default().fg(Color::Cyan)),
            Span::raw(": quit"),
        ]),
    };
    frame.render_widget(
        Paragraph::new(line).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
