use std::time::Duration;

use ratatui::{DefaultTerminal, Frame};
use throbber_widgets_tui::ThrobberState;

use postbox::async_task::{SubmitResult, TaskManager};
use postbox::form::{BeginSubmit, Field, FormState, SubmissionStatus};
use postbox::relay::{RelayClient, SubmitPayload};

pub mod key_handler;
pub mod logging;
pub mod pages;
pub mod screen;
pub mod ui_utils;

use key_handler::{ActionContext, ActionProcessor, ActionStateUpdate, KeyAction, KeyHandler};
use screen::Screen;

// How long to wait for input before polling the background submission
const TICK: Duration = Duration::from_millis(100);

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    logging::init()?;
    let terminal = ratatui::init();
    let result = App::new().run(terminal);
    ratatui::restore();
    result
}

pub struct App {
    running: bool,
    screen: Screen,
    key_handler: KeyHandler,
    form: FormState,
    active_field: Field,
    show_help: bool,
    status_message: String,
    relay: RelayClient,
    tasks: TaskManager,
    throbber: ThrobberState,
}

impl App {
    pub fn new() -> Self {
        Self {
            running: false,
            screen: Screen::new(),
            key_handler: KeyHandler::new(),
            form: FormState::new(),
            active_field: Field::Name,
            show_help: false,
            status_message: String::from("Fill in the form | F1 for help"),
            relay: RelayClient::new(),
            tasks: TaskManager::new(),
            throbber: ThrobberState::default(),
        }
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            if self.form.is_submitting {
                self.throbber.calc_next();
            }
            let action = self.key_handler.handle_crossterm_events(TICK)?;
            if self.handle_action(action) {
                self.quit();
            }
            if let Some(result) = self.tasks.try_recv() {
                self.finish_submission(result);
            }
        }
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        self.screen.render(
            frame,
            &self.form,
            self.active_field,
            &self.status_message,
            self.show_help,
            &mut self.throbber,
        );
    }

    fn handle_action(&mut self, action: KeyAction) -> bool {
        // Build context for stateless processor
        let ctx = ActionContext {
            active_field: self.active_field,
            show_help: self.show_help,
            is_submitting: self.form.is_submitting,
        };

        // Process action (stateless)
        let (result, update) = ActionProcessor::process(action, &ctx);

        // Apply state updates
        self.apply_action_updates(update);

        // Set status if provided, otherwise recompute the contextual hint
        if let Some(msg) = result.status_message {
            self.status_message = msg;
        } else {
            self.update_status_message();
        }

        result.should_quit
    }

    fn apply_action_updates(&mut self, update: ActionStateUpdate) {
        if let Some(field) = update.active_field {
            self.active_field = field;
        }
        if let Some(help) = update.show_help {
            self.show_help = help;
        }
        if let Some(c) = update.field_append {
            self.form.push_char(self.active_field, c);
        }
        if update.field_pop.is_some() {
            self.form.pop_char(self.active_field);
        }
        if update.submit_requested.is_some() {
            self.submit();
        }
    }

    fn update_status_message(&mut self) {
        self.status_message = if self.form.is_submitting {
            "Sending your message...".into()
        } else if self.form.error(Field::Email).is_some() {
            "Fix the highlighted email and try again".into()
        } else {
            match self.active_field {
                Field::Name => "Name: optional, shown as the sender".into(),
                Field::Email => "Email: required, where replies go".into(),
                Field::Message => "Message: optional, Enter adds a new line".into(),
            }
        };
    }

    /// Validate and, when the form is clean, hand the composed payload to
    /// a background worker. Invalid forms never reach the network.
    fn submit(&mut self) {
        match self.form.begin_submit() {
            BeginSubmit::Accepted => {
                let payload = SubmitPayload::compose(&self.form.fields);
                let client = self.relay.clone();
                self.tasks.spawn_submission(move || client.send(&payload));
                self.throbber = ThrobberState::default();
            }
            BeginSubmit::Invalid => {
                // Put the cursor where the problem is
                self.active_field = Field::Email;
            }
            BeginSubmit::InFlight => {}
        }
    }

    fn finish_submission(&mut self, result: SubmitResult) {
        if let Err(err) = &result {
            tracing::error!("submission failed: {err}");
        }
        self.form.finish_submit(result.is_ok());
        self.status_message = match self.form.status {
            SubmissionStatus::Success => "Message sent".into(),
            _ => "Sending failed, press Ctrl+S to retry".into(),
        };
    }

    fn quit(&mut self) {
        self.running = false;
    }
}
