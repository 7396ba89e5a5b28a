// ui/region.rs

use super::{
    Component, center_rect,
    constants::{LIST_HINTS, REGION_HINTS},
    results::render_stub_list,
    widgets::StatefulList,
};
use crate::{app::Action, context::Context, encounter::EnemyStub, navigation::Intent};
use ratatui::{
    buffer::Buffer,
    crossterm::event::{KeyCode, KeyEvent},
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

const REGION_OPTIONS: [&str; 2] = ["Regional average", "All enemies in region"];

#[derive(Debug)]
pub struct RegionChoiceView {
    region: String,
    options: StatefulList<&'static str>,
}

impl RegionChoiceView {
    pub fn new(region: &str) -> Self {
        Self {
            region: region.to_string(),
            options: StatefulList::with_items(REGION_OPTIONS.to_vec()),
        }
    }

    fn choose(&self, index: usize) -> Option<Action> {
        match index {
            0 => Some(Action::Navigate(Intent::ChooseAverage)),
            1 => Some(Action::Navigate(Intent::ChooseAllEnemies)),
            _ => None,
        }
    }
}

impl Component for RegionChoiceView {
    fn on_key(&mut self, key: KeyEvent, _context: &Context) -> Option<Action> {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') => {
                Some(Action::Navigate(Intent::Back))
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.options.previous();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.options.next();
                None
            }
            KeyCode::Enter | KeyCode::Char('l') => self
                .options
                .state
                .selected()
                .and_then(|selected| self.choose(selected)),
            KeyCode::Char(c) => c
                .to_digit(10)
                .and_then(|digit| (digit as usize).checked_sub(1))
                .and_then(|index| self.choose(index)),
            _ => None,
        }
    }

    fn key_hints(&self) -> &'static str {
        REGION_HINTS
    }

    fn render(&mut self, area: Rect, buffer: &mut Buffer, _context: &Context) {
        let rect = center_rect(area, Constraint::Length(50), Constraint::Length(8));
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", self.region));
        let inner = block.inner(rect);
        block.render(rect, buffer);

        let [prompt_area, _, menu_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(2),
        ])
        .areas(inner);

        Paragraph::new("This is a region. What would you like to see?")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow))
            .render(prompt_area, buffer);

        let selected = self.options.state.selected().unwrap_or(0);
        let lines: Vec<Line> = self
            .options
            .items
            .iter()
            .enumerate()
            .map(|(i, &item)| {
                let number = format!("{}. ", i + 1);
                if i == selected {
                    Line::from(vec![
                        Span::styled(number, Style::default().fg(Color::Yellow)),
                        Span::styled(
                            item,
                            Style::default()
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                        ),
                    ])
                } else {
                    Line::from(vec![Span::raw(number), Span::raw(item)])
                }
            })
            .collect();

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(menu_area, buffer);
    }
}

#[derive(Debug)]
pub struct RegionEnemiesView {
    region: String,
    members: StatefulList<EnemyStub>,
}

impl RegionEnemiesView {
    pub fn new(region: &str, members: Vec<EnemyStub>) -> Self {
        Self {
            region: region.to_string(),
            members: StatefulList::with_items(members),
        }
    }
}

impl Component for RegionEnemiesView {
    fn on_key(&mut self, key: KeyEvent, _context: &Context) -> Option<Action> {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') => {
                Some(Action::Navigate(Intent::Back))
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.members.previous();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.members.next();
                None
            }
            KeyCode::Enter | KeyCode::Char('l') => self.members.selected().map(|stub| {
                Action::Navigate(Intent::SelectMember {
                    name: stub.name.clone(),
                    location: stub.location.clone(),
                })
            }),
            _ => None,
        }
    }

    fn key_hints(&self) -> &'static str {
        LIST_HINTS
    }

    fn render(&mut self, area: Rect, buffer: &mut Buffer, _context: &Context) {
        let title = format!(" {} ({} enemies) ", self.region, self.members.items.len());
        render_stub_list(&mut self.members, title, area, buffer);
    }
}
