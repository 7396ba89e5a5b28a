// ui/header.rs

use super::spinner::spinner_frame;
use crate::{context::Context, encounter::NgLevel};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Tabs, Widget},
};
use strum::IntoEnumIterator;

pub fn render_header(buffer: &mut Buffer, area: Rect, context: &Context) {
    let [title_area, tabs_area, progress_area] = Layout::horizontal([
        Constraint::Length(20),
        Constraint::Min(40),
        Constraint::Length(34),
    ])
    .areas(area);

    Paragraph::new(format!("Elden Scout v{}", env!("CARGO_PKG_VERSION")))
        .style(Style::default().fg(Color::DarkGray))
        .render(title_area, buffer);

    let current = context.controller.ng_level();
    let selected = NgLevel::iter()
        .position(|level| level == current)
        .unwrap_or(0);
    Tabs::new(NgLevel::iter().map(|level| level.label()))
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .divider("|")
        .padding("", "")
        .render(tabs_area, buffer);

    progress_line(context)
        .alignment(Alignment::Right)
        .render(progress_area, buffer);
}

fn progress_line(context: &Context) -> Line<'static> {
    let tracker = context.controller.progress();
    match (tracker.stats(), tracker.level()) {
        (Some(stats), Some(level)) => Line::from(vec![
            Span::styled(format!("{level} "), Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!(
                    "{}/{} analyzed ({:.1}%)",
                    stats.analyzed_enemies, stats.total_enemies, stats.percentage
                ),
                Style::default().fg(Color::Green),
            ),
        ]),
        _ => Line::styled("Progress unknown", Style::default().fg(Color::DarkGray)),
    }
}

pub fn render_status(buffer: &mut Buffer, area: Rect, context: &Context, hints: &str) {
    let [message_area, hints_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

    let message = if let Some(error) = context.controller.last_error() {
        Line::styled(format!("Error: {error}"), Style::default().fg(Color::Red))
    } else if context.controller.is_busy() {
        Line::styled(
            spinner_frame(context.spinner),
            Style::default().fg(Color::Yellow),
        )
    } else if context.settings.debug_mode {
        Line::styled(
            format!(
                "view: {} · revision: {} · backend: {}",
                context.controller.view().name(),
                context.controller.revision(),
                context.settings.api_base_url
            ),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Line::default()
    };
    Paragraph::new(message)
        .alignment(Alignment::Center)
        .render(message_area, buffer);

    Paragraph::new(hints.to_string())
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .render(hints_area, buffer);
}
