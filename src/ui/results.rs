// ui/results.rs

use super::{Component, constants::LIST_HINTS, widgets::StatefulList};
use crate::{app::Action, context::Context, encounter::EnemyStub, navigation::Intent};
use ratatui::{
    buffer::Buffer,
    crossterm::event::{KeyCode, KeyEvent},
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, StatefulWidget},
};

#[derive(Debug)]
pub struct ResultsView {
    list: StatefulList<EnemyStub>,
}

impl ResultsView {
    pub fn new(results: Vec<EnemyStub>) -> Self {
        Self {
            list: StatefulList::with_items(results),
        }
    }
}

pub(super) fn stub_line(stub: &EnemyStub) -> Line<'static> {
    let mut spans = vec![Span::styled(
        stub.name.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if !stub.location.is_empty() {
        spans.push(Span::styled(
            format!("  {}", stub.location),
            Style::default().fg(Color::DarkGray),
        ));
    }
    if let Some(hp) = stub.hp {
        spans.push(Span::styled(
            format!("  HP {hp}"),
            Style::default().fg(Color::Red),
        ));
    }
    Line::from(spans)
}

pub(super) fn render_stub_list(
    list: &mut StatefulList<EnemyStub>,
    title: String,
    area: Rect,
    buffer: &mut Buffer,
) {
    let items: Vec<ListItem> = list
        .items
        .iter()
        .enumerate()
        .map(|(i, stub)| {
            let mut line = stub_line(stub);
            line.spans.insert(
                0,
                Span::styled(format!("{:>3}. ", i + 1), Style::default().fg(Color::DarkGray)),
            );
            ListItem::new(line)
        })
        .collect();

    let widget = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(title),
        )
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    StatefulWidget::render(widget, area, buffer, &mut list.state);
}

impl Component for ResultsView {
    fn on_key(&mut self, key: KeyEvent, _context: &Context) -> Option<Action> {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') => {
                Some(Action::Navigate(Intent::Back))
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.list.previous();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.list.next();
                None
            }
            KeyCode::Enter | KeyCode::Char('l') => self
                .list
                .selected()
                .map(|stub| Action::Navigate(Intent::SelectEnemy(stub.name.clone()))),
            _ => None,
        }
    }

    fn key_hints(&self) -> &'static str {
        LIST_HINTS
    }

    fn render(&mut self, area: Rect, buffer: &mut Buffer, context: &Context) {
        let title = format!(
            " Results for \"{}\" ({}) ",
            context.controller.last_query(),
            self.list.items.len()
        );
        render_stub_list(&mut self.list, title, area, buffer);
    }
}
