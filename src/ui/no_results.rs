// ui/no_results.rs

use super::{Component, center_rect, constants::NO_RESULTS_HINTS};
use crate::{app::Action, context::Context, navigation::Intent};
use ratatui::{
    buffer::Buffer,
    crossterm::event::{KeyCode, KeyEvent},
    layout::{Alignment, Constraint, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

#[derive(Debug)]
pub struct NoResultsView {
    query: String,
}

impl NoResultsView {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
        }
    }
}

impl Component for NoResultsView {
    fn on_key(&mut self, key: KeyEvent, _context: &Context) -> Option<Action> {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Backspace => {
                Some(Action::Navigate(Intent::Back))
            }
            _ => None,
        }
    }

    fn key_hints(&self) -> &'static str {
        NO_RESULTS_HINTS
    }

    fn render(&mut self, area: Rect, buffer: &mut Buffer, _context: &Context) {
        let rect = center_rect(area, Constraint::Percentage(60), Constraint::Length(6));
        let lines = vec![
            Line::styled(
                format!("No enemies or regions match \"{}\".", self.query),
                Style::default().fg(Color::Yellow),
            ),
            Line::default(),
            Line::styled(
                "Check the spelling or try part of the name.",
                Style::default().fg(Color::DarkGray),
            ),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(" No results "),
            )
            .render(rect, buffer);
    }
}
