// ui/landing.rs

use super::{
    Component, center_rect,
    constants::{LANDING_HINTS, TAGLINE, TITLE},
};
use crate::{app::Action, context::Context, navigation::Intent};
use ratatui::{
    buffer::Buffer,
    crossterm::event::{KeyCode, KeyEvent},
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use tui_textarea::TextArea;

#[derive(Debug)]
pub struct LandingView {
    textarea: TextArea<'static>,
}

impl Default for LandingView {
    fn default() -> Self {
        Self::new()
    }
}

impl LandingView {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Yellow))
                .title(" Search an enemy or a region "),
        );
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text("e.g. Margit, Liurnia of the Lakes, Crucible Knight");
        Self { textarea }
    }

    fn query(&self) -> String {
        self.textarea.lines().join(" ")
    }
}

impl Component for LandingView {
    fn on_key(&mut self, key: KeyEvent, _context: &Context) -> Option<Action> {
        match key.code {
            KeyCode::Esc => Some(Action::Quit),
            KeyCode::Enter => {
                let query = self.query();
                if query.trim().is_empty() {
                    None
                } else {
                    Some(Action::Navigate(Intent::Search(query)))
                }
            }
            _ => {
                self.textarea.input(key);
                None
            }
        }
    }

    fn key_hints(&self) -> &'static str {
        LANDING_HINTS
    }

    fn render(&mut self, area: Rect, buffer: &mut Buffer, context: &Context) {
        let [title_area, tagline_area, _, input_area, console_area] = Layout::vertical([
            Constraint::Length(5),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .flex(ratatui::layout::Flex::Center)
        .areas(area);

        Paragraph::new(TITLE)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow))
            .render(title_area, buffer);

        Paragraph::new(TAGLINE)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .render(tagline_area, buffer);

        let input_rect = center_rect(input_area, Constraint::Percentage(60), Constraint::Length(3));
        self.textarea.render(input_rect, buffer);

        let console = if context.controller.last_query().is_empty() {
            String::new()
        } else {
            format!("Last search: {}", context.controller.last_query())
        };
        Paragraph::new(console)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .render(console_area, buffer);
    }
}
