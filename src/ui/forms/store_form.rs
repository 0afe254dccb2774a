//! Store creation form rendering

use super::field_renderer::{draw_domain_field, draw_field, FIELD_HEIGHT};
use crate::app::App;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::validate::FieldId;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// Draw the store creation form
pub fn draw_store_create(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),  // Store name
            Constraint::Length(FIELD_HEIGHT),  // Subdomain
            Constraint::Length(FIELD_HEIGHT),  // Country
            Constraint::Length(FIELD_HEIGHT),  // Category
            Constraint::Length(FIELD_HEIGHT),  // Currency
            Constraint::Length(FIELD_HEIGHT),  // Email
            Constraint::Length(BUTTON_HEIGHT), // Submit button
            Constraint::Min(0),
        ])
        .split(area);

    let form = &app.state.form;
    let errors = &app.state.errors;
    let active = form.active_field_index;

    draw_field(
        frame,
        chunks[0],
        &form.name,
        active == 0,
        errors.get(FieldId::Name),
    );
    draw_domain_field(
        frame,
        chunks[1],
        &form.domain,
        active == 1,
        errors.get(FieldId::Domain),
        app.domain_suffix(),
        app.state.domain_check.status(),
    );
    draw_field(
        frame,
        chunks[2],
        &form.country,
        active == 2,
        errors.get(FieldId::Country),
    );
    draw_field(
        frame,
        chunks[3],
        &form.category,
        active == 3,
        errors.get(FieldId::Category),
    );
    draw_field(
        frame,
        chunks[4],
        &form.currency,
        active == 4,
        errors.get(FieldId::Currency),
    );
    draw_field(
        frame,
        chunks[5],
        &form.email,
        active == 5,
        errors.get(FieldId::Email),
    );

    draw_submit_button(frame, chunks[6], app);
}

fn draw_submit_button(frame: &mut Frame, area: Rect, app: &App) {
    let label = if app.state.submitting {
        "Creating Store..."
    } else {
        "Create Store"
    };
    render_button(
        frame,
        area,
        label,
        app.state.form.is_submit_row_active(),
        !app.state.submitting,
    );
}
