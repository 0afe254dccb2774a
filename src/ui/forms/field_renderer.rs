//! Field rendering utilities for forms

use crate::state::{DomainStatus, FieldValue, FormField};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one rendered field (bordered box plus error line)
pub const FIELD_HEIGHT: u16 = 4;

/// Draw a form field with its error line underneath
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    error: Option<&str>,
) {
    let (box_area, message_area) = split_field_area(area);
    let block = field_block(&field.label, is_active, error.is_some());
    let content = Paragraph::new(value_line(field, is_active));
    frame.render_widget(content.block(block), box_area);
    draw_error_line(frame, message_area, error);
}

/// Draw the subdomain field: value, fixed suffix and live check status
pub fn draw_domain_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    error: Option<&str>,
    suffix: &str,
    status: DomainStatus,
) {
    let (box_area, message_area) = split_field_area(area);
    let block = field_block(&field.label, is_active, error.is_some());

    let mut spans = vec![
        Span::styled(field.display_value(), value_style(is_active)),
        Span::styled(cursor(is_active), Style::default().fg(Color::Cyan)),
        Span::styled(format!(".{suffix}"), Style::default().fg(Color::DarkGray)),
    ];
    if let Some((symbol, color)) = status_indicator(status) {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(symbol, Style::default().fg(color)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), box_area);
    draw_error_line(frame, message_area, error);
}

fn split_field_area(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1])
}

fn field_block(label: &str, is_active: bool, has_error: bool) -> Block<'static> {
    let border_style = if has_error {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style)
}

fn value_line(field: &FormField, is_active: bool) -> Line<'static> {
    match &field.value {
        FieldValue::Choice { .. } => {
            let marker_style = if is_active {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(vec![
                Span::styled("◂ ", marker_style),
                Span::styled(field.display_value(), value_style(is_active)),
                Span::styled(" ▸", marker_style),
            ])
        }
        _ => Line::from(vec![
            Span::styled(field.display_value(), value_style(is_active)),
            Span::styled(cursor(is_active), Style::default().fg(Color::Cyan)),
        ]),
    }
}

fn value_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

fn cursor(is_active: bool) -> &'static str {
    if is_active {
        "▌"
    } else {
        ""
    }
}

fn draw_error_line(frame: &mut Frame, area: Rect, error: Option<&str>) {
    if let Some(message) = error {
        let line = Line::from(Span::styled(
            format!("✗ {message}"),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(line), area);
    }
}

fn status_indicator(status: DomainStatus) -> Option<(&'static str, Color)> {
    match status {
        DomainStatus::Idle => None,
        DomainStatus::Checking => Some(("⟳ checking", Color::Yellow)),
        DomainStatus::Available => Some(("✓ available", Color::Green)),
        DomainStatus::Unavailable => Some(("✗ taken", Color::Red)),
    }
}
