// ui/strategy.rs

use crate::markup::{self, Fragment, SpanStyle};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

fn span_style(style: SpanStyle) -> Style {
    match style {
        SpanStyle::Plain => Style::default(),
        SpanStyle::Strong => Style::default().add_modifier(Modifier::BOLD),
        SpanStyle::Emphasis => Style::default().add_modifier(Modifier::ITALIC),
    }
}

fn heading_style(level: u8) -> Style {
    let style = Style::default().add_modifier(Modifier::BOLD);
    match level {
        1 => style.fg(Color::Yellow).add_modifier(Modifier::UNDERLINED),
        2 => style.fg(Color::Yellow),
        _ => style.fg(Color::LightYellow),
    }
}

/// Turns strategy markup into styled terminal lines.
pub fn strategy_lines(text: &str) -> Vec<Line<'static>> {
    markup::parse(Some(text))
        .iter()
        .map(|fragment| {
            let spans = fragment
                .spans()
                .iter()
                .map(|span| Span::styled(span.text.clone(), span_style(span.style)));
            match fragment {
                Fragment::Heading { level, .. } => {
                    let heading = heading_style(*level);
                    Line::from(spans.map(|span| span.patch_style(heading)).collect::<Vec<_>>())
                }
                Fragment::ListItem { .. } => {
                    let mut line = vec![Span::styled("  • ", Style::default().fg(Color::Yellow))];
                    line.extend(spans);
                    Line::from(line)
                }
                Fragment::Text { .. } => Line::from(spans.collect::<Vec<_>>()),
            }
        })
        .collect()
}
