// ui/mod.rs

mod constants;
mod detail;
mod header;
mod landing;
mod no_results;
mod region;
mod results;
pub mod spinner;
mod strategy;
mod widgets;

pub use detail::DetailView;
pub use landing::LandingView;
pub use no_results::NoResultsView;
pub use region::{RegionChoiceView, RegionEnemiesView};
pub use results::ResultsView;
pub use strategy::strategy_lines;
pub use widgets::StatefulList;

use crate::{app::Action, context::Context, navigation::View};
use enum_dispatch::enum_dispatch;
use ratatui::{
    Frame,
    buffer::Buffer,
    crossterm::event::KeyEvent,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Widget},
};

pub const MIN_WIDTH: u16 = 80;
pub const MIN_HEIGHT: u16 = 24;

#[enum_dispatch]
pub trait Component {
    fn on_key(&mut self, key: KeyEvent, context: &Context) -> Option<Action>;
    fn key_hints(&self) -> &'static str;
    fn render(&mut self, area: Rect, buffer: &mut Buffer, context: &Context);
}

#[enum_dispatch(Component)]
#[derive(Debug)]
pub enum ComponentEnum {
    Landing(LandingView),
    Results(ResultsView),
    RegionChoice(RegionChoiceView),
    RegionEnemies(RegionEnemiesView),
    Detail(DetailView),
    NoResults(NoResultsView),
}

impl ComponentEnum {
    /// Builds a fresh component for the controller's current view.
    pub fn for_view(view: &View) -> Self {
        match view {
            View::Landing => LandingView::new().into(),
            View::SearchResults { results } => ResultsView::new(results.clone()).into(),
            View::RegionChoice { region } => RegionChoiceView::new(region).into(),
            View::RegionEnemies { region, members } => {
                RegionEnemiesView::new(region, members.clone()).into()
            }
            View::EnemyDetail { record, origin } => DetailView::new(record, origin).into(),
            View::NoResults { query } => NoResultsView::new(query).into(),
        }
    }
}

pub fn center_rect(area: Rect, horizontal: Constraint, vertical: Constraint) -> Rect {
    let [area] = Layout::horizontal([horizontal])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([vertical]).flex(Flex::Center).areas(area);
    area
}

pub fn draw(frame: &mut Frame, component: &mut ComponentEnum, context: &Context) {
    let area = frame.area();
    let buffer = frame.buffer_mut();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        Paragraph::new("Terminal too small. Please resize.")
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center)
            .render(area, buffer);
        return;
    }

    let [header_area, body_area, status_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(10),
        Constraint::Length(2),
    ])
    .areas(area);

    header::render_header(buffer, header_area, context);
    component.render(body_area, buffer, context);
    header::render_status(buffer, status_area, context, component.key_hints());
}
