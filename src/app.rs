// /app.rs
use crate::{
    api::{self, DataService},
    context::Context,
    navigation::{Command, Completion, Intent, NavigationController},
    settings::Settings,
    tui::{Tui, TuiEvent},
    ui::{self, Component, ComponentEnum, spinner::Spinner},
};

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

#[derive(Debug)]
pub enum Action {
    Quit,
    Navigate(Intent),
    Fetched(Completion),
}

pub struct App {
    running: bool,
    component: ComponentEnum,
    component_revision: u64,
    controller: NavigationController,
    settings: Settings,
    service: Arc<dyn DataService>,
    spinner: Spinner,
    action_sender: UnboundedSender<Action>,
    action_receiver: UnboundedReceiver<Action>,
}

impl App {
    pub fn new(settings: Settings, service: Arc<dyn DataService>) -> Self {
        let (action_sender, action_receiver) = mpsc::unbounded_channel();
        let controller = NavigationController::new(settings.default_ng_level);
        let component = ComponentEnum::for_view(controller.view());
        let component_revision = controller.revision();

        Self {
            running: true,
            component,
            component_revision,
            controller,
            settings,
            service,
            spinner: Spinner::new(),
            action_sender,
            action_receiver,
        }
    }

    pub fn controller(&self) -> &NavigationController {
        &self.controller
    }

    pub fn component(&self) -> &ComponentEnum {
        &self.component
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?
            .tick_rate(8.0) // spinner speed
            .frame_rate(30.0);

        tui.enter()?;
        let commands = self.controller.start();
        self.dispatch(commands);

        while self.running {
            tui.draw(|frame| {
                let context = Context {
                    controller: &self.controller,
                    settings: &self.settings,
                    spinner: &self.spinner,
                };
                ui::draw(frame, &mut self.component, &context);
            })?;

            tokio::select! {
                event = tui.next() => match event {
                    Some(event) => self.handle_tui_event(event),
                    None => break,
                },
                Some(action) = self.action_receiver.recv() => self.handle_action(action),
            }
        }

        self.persist_ng_level();
        tui.exit()?;
        Ok(())
    }

    fn handle_tui_event(&mut self, event: TuiEvent) {
        match event {
            TuiEvent::Key(key_event) => self.on_key(key_event),
            TuiEvent::Tick => self.on_tick(),
            TuiEvent::Error => log::warn!("Terminal event stream reported an error"),
            TuiEvent::Init | TuiEvent::Render | TuiEvent::Resize(_, _) => {}
        }
    }

    pub fn on_key(&mut self, key_event: KeyEvent) {
        let action = match key_event.code {
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::Quit)
            }
            KeyCode::Tab => Some(Action::Navigate(Intent::ChangeNgLevel(
                self.controller.ng_level().next(),
            ))),
            KeyCode::BackTab => Some(Action::Navigate(Intent::ChangeNgLevel(
                self.controller.ng_level().previous(),
            ))),
            _ => {
                let context = Context {
                    controller: &self.controller,
                    settings: &self.settings,
                    spinner: &self.spinner,
                };
                self.component.on_key(key_event, &context)
            }
        };

        if let Some(action) = action {
            self.handle_action(action);
        }
    }

    fn on_tick(&mut self) {
        if self.controller.is_busy() {
            self.spinner.tick();
        }
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.quit(),
            Action::Navigate(intent) => {
                let commands = self.controller.handle(intent);
                self.dispatch(commands);
            }
            Action::Fetched(completion) => {
                let commands = self.controller.complete(completion);
                self.dispatch(commands);
            }
        }
        self.sync_component();
    }

    /// Waits for the next action from a background request and applies it.
    pub async fn process_next_action(&mut self) -> bool {
        match self.action_receiver.recv().await {
            Some(action) => {
                self.handle_action(action);
                true
            }
            None => false,
        }
    }

    fn dispatch(&self, commands: Vec<Command>) {
        for command in commands {
            log::debug!("Dispatching {:?}", command.request);
            let service = Arc::clone(&self.service);
            let sender = self.action_sender.clone();
            tokio::spawn(async move {
                let outcome = api::execute(service.as_ref(), &command.request).await;
                let completion = Completion {
                    ticket: command.ticket,
                    request: command.request,
                    outcome,
                };
                // Receiver is gone only when the app is shutting down.
                let _ = sender.send(Action::Fetched(completion));
            });
        }
    }

    fn sync_component(&mut self) {
        if self.controller.revision() != self.component_revision {
            self.component = ComponentEnum::for_view(self.controller.view());
            self.component_revision = self.controller.revision();
        }
    }

    fn persist_ng_level(&mut self) {
        let level = self.controller.ng_level();
        if self.settings.default_ng_level == level {
            return;
        }
        self.settings.default_ng_level = level;
        if let Err(e) = self.settings.save() {
            log::error!("Failed to save settings: {e}");
        }
    }

    fn quit(&mut self) {
        self.running = false;
    }
}
