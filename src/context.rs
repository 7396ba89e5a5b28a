use crate::{navigation::NavigationController, settings::Settings, ui::spinner::Spinner};

/// Read-only view of the app handed to components for rendering and key handling.
#[derive(Debug)]
pub struct Context<'a> {
    pub controller: &'a NavigationController,
    pub settings: &'a Settings,
    pub spinner: &'a Spinner,
}
