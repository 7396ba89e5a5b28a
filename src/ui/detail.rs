// ui/detail.rs

use super::{Component, constants::DETAIL_HINTS, strategy::strategy_lines};
use crate::{
    analysis,
    app::Action,
    chart::{self, DefensePoint, ResistancePoint},
    context::Context,
    encounter::{EncounterRecord, PoiseProfile, StatusMultipliers},
    navigation::{DetailOrigin, Intent},
};
use ratatui::{
    buffer::Buffer,
    crossterm::event::{KeyCode, KeyEvent},
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget,
        Wrap,
    },
};

const LABEL_WIDTH: usize = 12;
const VALUE_WIDTH: usize = 8;
const DEFENSE_SCALE_MAX: f64 = 100.0;

#[derive(Debug)]
pub struct DetailView {
    record: EncounterRecord,
    origin: DetailOrigin,
    recommendations: Vec<String>,
    strategy: Vec<Line<'static>>,
    strategy_scroll: u16,
    variant_cursor: usize,
}

impl DetailView {
    pub fn new(record: &EncounterRecord, origin: &DetailOrigin) -> Self {
        let recommendations =
            analysis::recommend(record.damage.as_ref(), record.resistances.as_ref());
        let strategy = strategy_lines(&record.strategy_text);
        let variant_cursor = record
            .location_variants
            .iter()
            .position(|variant| variant.location == record.location)
            .unwrap_or(0);
        Self {
            record: record.clone(),
            origin: origin.clone(),
            recommendations,
            strategy,
            strategy_scroll: 0,
            variant_cursor,
        }
    }

    fn has_variants(&self) -> bool {
        self.record.location_variants.len() > 1
    }

    fn move_variant(&mut self, forward: bool) {
        let count = self.record.location_variants.len();
        if count == 0 {
            return;
        }
        self.variant_cursor = if forward {
            (self.variant_cursor + 1) % count
        } else {
            (self.variant_cursor + count - 1) % count
        };
    }

    fn load_selected_variant(&self) -> Option<Action> {
        let variant = self.record.location_variants.get(self.variant_cursor)?;
        if variant.location == self.record.location {
            return None;
        }
        Some(Action::Navigate(Intent::ChangeLocationVariant(
            variant.location.clone(),
        )))
    }

    fn render_summary(&self, area: Rect, buffer: &mut Buffer) {
        let mut spans = vec![Span::styled(
            self.record.name.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )];
        if !self.record.location.is_empty() {
            spans.push(Span::styled(
                format!("  {}", self.record.location),
                Style::default().fg(Color::Gray),
            ));
        }
        spans.push(Span::styled(
            format!("  HP {}", self.record.hp),
            Style::default().fg(Color::Red),
        ));
        if self.record.has_weak_spots {
            spans.push(Span::styled(
                "  Has weak spots",
                Style::default()
                    .fg(Color::LightRed)
                    .add_modifier(Modifier::ITALIC),
            ));
        }
        let title = match &self.origin {
            DetailOrigin::Enemy => " Enemy ".to_string(),
            DetailOrigin::RegionAverage { region } => format!(" Average of {region} "),
        };
        Paragraph::new(Line::from(spans))
            .block(panel(title))
            .render(area, buffer);
    }

    fn render_defenses(&self, area: Rect, buffer: &mut Buffer) {
        let block = panel(" Damage negation ".to_string());
        let inner = block.inner(area);
        block.render(area, buffer);

        let series = chart::defense_series(self.record.damage.as_ref());
        if series.is_empty() {
            no_data(inner, buffer);
            return;
        }
        let bar_width = bar_width(inner.width);
        let lines: Vec<Line> = series
            .iter()
            .map(|point| defense_bar(point, bar_width))
            .collect();
        Paragraph::new(lines).render(inner, buffer);
    }

    fn render_resistances(&self, area: Rect, buffer: &mut Buffer) {
        let block = panel(" Status resistance ".to_string());
        let inner = block.inner(area);
        block.render(area, buffer);

        let series = chart::resistance_series(self.record.resistances.as_ref());
        if series.is_empty() {
            no_data(inner, buffer);
            return;
        }
        let scale = series
            .iter()
            .map(|point| point.value)
            .fold(1.0_f64, f64::max);
        let bar_width = bar_width(inner.width);
        let lines: Vec<Line> = series
            .iter()
            .map(|point| resistance_bar(point, scale, bar_width))
            .collect();
        Paragraph::new(lines).render(inner, buffer);
    }

    fn render_poise(&self, area: Rect, buffer: &mut Buffer) {
        let mut lines = poise_lines(self.record.poise.as_ref());
        lines.push(Line::default());
        lines.extend(multiplier_lines(self.record.status_multipliers.as_ref()));
        Paragraph::new(lines)
            .block(panel(" Poise & multipliers ".to_string()))
            .render(area, buffer);
    }

    fn render_recommendations(&self, area: Rect, buffer: &mut Buffer) {
        let lines: Vec<Line> = self
            .recommendations
            .iter()
            .enumerate()
            .map(|(i, recommendation)| {
                Line::from(vec![
                    Span::styled(format!("{}. ", i + 1), Style::default().fg(Color::DarkGray)),
                    Span::styled(recommendation.clone(), Style::default().fg(Color::Green)),
                ])
            })
            .collect();
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(panel(" Exploit ".to_string()))
            .render(area, buffer);
    }

    fn render_strategy(&self, area: Rect, buffer: &mut Buffer) {
        let lines = if self.strategy.is_empty() {
            vec![Line::styled(
                "No strategy available.",
                Style::default().fg(Color::DarkGray),
            )]
        } else {
            self.strategy.clone()
        };
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((self.strategy_scroll, 0))
            .block(panel(" Strategy ".to_string()))
            .render(area, buffer);
    }

    fn render_variants(&self, area: Rect, buffer: &mut Buffer) {
        let items: Vec<ListItem> = self
            .record
            .location_variants
            .iter()
            .map(|variant| {
                let marker = if variant.location == self.record.location {
                    "● "
                } else {
                    "  "
                };
                let hp = variant
                    .hp
                    .map(|hp| format!("  HP {hp}"))
                    .unwrap_or_default();
                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(Color::Yellow)),
                    Span::raw(variant.location.clone()),
                    Span::styled(hp, Style::default().fg(Color::DarkGray)),
                ]))
            })
            .collect();

        let mut state = ListState::default().with_selected(Some(self.variant_cursor));
        let list = List::new(items)
            .block(panel(format!(
                " Locations ({}) ",
                self.record.location_variants.len()
            )))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        StatefulWidget::render(list, area, buffer, &mut state);
    }
}

impl Component for DetailView {
    fn on_key(&mut self, key: KeyEvent, _context: &Context) -> Option<Action> {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace => Some(Action::Navigate(Intent::Back)),
            KeyCode::Left | KeyCode::Char('h') => {
                self.move_variant(false);
                None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.move_variant(true);
                None
            }
            KeyCode::Enter => self.load_selected_variant(),
            KeyCode::Up | KeyCode::Char('k') => {
                self.strategy_scroll = self.strategy_scroll.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.strategy_scroll = self.strategy_scroll.saturating_add(1);
                None
            }
            KeyCode::PageUp => {
                self.strategy_scroll = self.strategy_scroll.saturating_sub(10);
                None
            }
            KeyCode::PageDown => {
                self.strategy_scroll = self.strategy_scroll.saturating_add(10);
                None
            }
            _ => None,
        }
    }

    fn key_hints(&self) -> &'static str {
        DETAIL_HINTS
    }

    fn render(&mut self, area: Rect, buffer: &mut Buffer, _context: &Context) {
        let [summary_area, charts_area, facts_area, lower_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(10),
            Constraint::Length(7),
            Constraint::Min(3),
        ])
        .areas(area);

        self.render_summary(summary_area, buffer);

        let [defense_area, resistance_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(charts_area);
        self.render_defenses(defense_area, buffer);
        self.render_resistances(resistance_area, buffer);

        let [poise_area, recommendation_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(facts_area);
        self.render_poise(poise_area, buffer);
        self.render_recommendations(recommendation_area, buffer);

        if self.has_variants() {
            let [strategy_area, variants_area] =
                Layout::horizontal([Constraint::Min(40), Constraint::Length(40)])
                    .areas(lower_area);
            self.render_strategy(strategy_area, buffer);
            self.render_variants(variants_area, buffer);
        } else {
            self.render_strategy(lower_area, buffer);
        }
    }
}

fn panel(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title)
}

fn no_data(area: Rect, buffer: &mut Buffer) {
    Paragraph::new("No data")
        .style(Style::default().fg(Color::DarkGray))
        .render(area, buffer);
}

fn bar_width(inner_width: u16) -> usize {
    (inner_width as usize).saturating_sub(LABEL_WIDTH + VALUE_WIDTH + 1)
}

fn bar_line(
    label: &str,
    value_text: &str,
    fraction: f64,
    fill: char,
    color: Color,
    width: usize,
) -> Line<'static> {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    Line::from(vec![
        Span::raw(format!("{label:<LABEL_WIDTH$}")),
        Span::styled(fill.to_string().repeat(filled), Style::default().fg(color)),
        Span::raw(" ".repeat(width - filled)),
        Span::styled(
            format!(" {value_text:>VALUE_WIDTH$}"),
            Style::default().fg(color),
        ),
    ])
}

/// Negative negation means the enemy takes extra damage; drawn with a lighter fill.
fn defense_bar(point: &DefensePoint, width: usize) -> Line<'static> {
    let fill = if point.value < 0.0 { '░' } else { '█' };
    bar_line(
        point.label,
        &chart::format_number(point.value),
        point.value.abs() / DEFENSE_SCALE_MAX,
        fill,
        chart::defense_color(point.value),
        width,
    )
}

fn resistance_bar(point: &ResistancePoint, scale: f64, width: usize) -> Line<'static> {
    bar_line(
        point.label,
        &point.display_label,
        point.value / scale,
        '█',
        chart::resistance_color(point.value),
        width,
    )
}

fn poise_lines(poise: Option<&PoiseProfile>) -> Vec<Line<'static>> {
    let Some(poise) = poise else {
        return vec![Line::styled("Poise: no data", Style::default().fg(Color::DarkGray))];
    };
    vec![
        Line::from(vec![
            Span::raw("Poise "),
            Span::styled(
                chart::poise_label(&poise.effective),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  (base {})", poise.base),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(format!(
            "Regen delay {}s",
            chart::format_number(poise.regen_delay)
        )),
    ]
}

fn multiplier_lines(multipliers: Option<&StatusMultipliers>) -> Vec<Line<'static>> {
    let Some(multipliers) = multipliers else {
        return Vec::new();
    };
    let entries = [
        ("Bleed", multipliers.bleed),
        ("Frost", multipliers.frost),
        ("Black Flame", multipliers.black_flame),
    ];
    let spans: Vec<Span> = entries
        .iter()
        .flat_map(|(label, value)| {
            let color = if *value > 1.0 { Color::Green } else { Color::Gray };
            [
                Span::raw(format!("{label} ")),
                Span::styled(
                    format!("×{} ", chart::format_number(*value)),
                    Style::default().fg(color),
                ),
            ]
        })
        .collect();
    vec![Line::from(spans)]
}
