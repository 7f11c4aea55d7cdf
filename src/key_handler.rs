use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use postbox::form::Field;

#[derive(Debug, Clone, PartialEq)]
pub enum KeyAction {
    Quit,
    Back,
    Help,
    NextField,
    PrevField,
    Select,
    Submit,
    InputChar(char),
    Backspace,
    None,
}

#[derive(Debug)]
pub struct KeyHandler;

impl KeyHandler {
    pub fn new() -> Self {
        Self
    }

    /// Wait up to `tick` for an input event, so the caller can poll the
    /// background submission and animate the spinner between keystrokes.
    pub fn handle_crossterm_events(&mut self, tick: Duration) -> color_eyre::Result<KeyAction> {
        if !event::poll(tick)? {
            return Ok(KeyAction::None);
        }
        match event::read()? {
            // it's important to check KeyEventKind::Press to avoid handling key release events
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(self.on_key_event(key)),
            Event::Mouse(_) => Ok(KeyAction::None),
            Event::Resize(_, _) => Ok(KeyAction::None),
            _ => Ok(KeyAction::None),
        }
    }

    pub fn on_key_event(&mut self, key: KeyEvent) -> KeyAction {
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => KeyAction::Quit,
            (KeyModifiers::NONE, KeyCode::Esc) => KeyAction::Back,
            (KeyModifiers::NONE, KeyCode::F(1)) => KeyAction::Help,
            (KeyModifiers::CONTROL, KeyCode::Char('s') | KeyCode::Char('S')) => KeyAction::Submit,
            (KeyModifiers::NONE, KeyCode::Tab) => KeyAction::NextField,
            (KeyModifiers::SHIFT, KeyCode::BackTab) | (KeyModifiers::NONE, KeyCode::BackTab) => {
                KeyAction::PrevField
            }
            (KeyModifiers::NONE, KeyCode::Enter) => KeyAction::Select,
            (KeyModifiers::NONE, KeyCode::Backspace) => KeyAction::Backspace,
            // Shifted characters arrive with the SHIFT modifier set
            (m, KeyCode::Char(c)) if m.is_empty() || m == KeyModifiers::SHIFT => {
                KeyAction::InputChar(c)
            }
            _ => KeyAction::None,
        }
    }
}

/// Action handler result: quit flag plus an optional status-bar override
pub struct ActionResult {
    pub should_quit: bool,
    pub status_message: Option<String>,
}

/// Context passed to the action processor to enable decision-making
#[derive(Debug, Clone)]
pub struct ActionContext {
    pub active_field: Field,
    pub show_help: bool,
    pub is_submitting: bool,
}

/// Stateless action processor: takes action + context, returns result + modified state
pub struct ActionProcessor;

impl ActionProcessor {
    pub fn process(action: KeyAction, ctx: &ActionContext) -> (ActionResult, ActionStateUpdate) {
        match action {
            KeyAction::Quit => (
                ActionResult {
                    should_quit: true,
                    status_message: None,
                },
                ActionStateUpdate::none(),
            ),
            KeyAction::Help => (
                ActionResult {
                    should_quit: false,
                    status_message: None,
                },
                ActionStateUpdate {
                    show_help: Some(!ctx.show_help),
                    ..Default::default()
                },
            ),
            KeyAction::Back => {
                if ctx.show_help {
                    (
                        ActionResult {
                            should_quit: false,
                            status_message: None,
                        },
                        ActionStateUpdate {
                            show_help: Some(false),
                            ..Default::default()
                        },
                    )
                } else {
                    (
                        ActionResult {
                            should_quit: true,
                            status_message: None,
                        },
                        ActionStateUpdate::none(),
                    )
                }
            }
            KeyAction::NextField => Self::move_focus(ctx, ctx.active_field.next()),
            KeyAction::PrevField => Self::move_focus(ctx, ctx.active_field.prev()),
            KeyAction::Select => {
                if ctx.show_help {
                    return (
                        ActionResult {
                            should_quit: false,
                            status_message: None,
                        },
                        ActionStateUpdate {
                            show_help: Some(false),
                            ..Default::default()
                        },
                    );
                }
                if ctx.active_field.is_multiline() {
                    // Enter inside the message body is a newline, not a submit
                    (
                        ActionResult {
                            should_quit: false,
                            status_message: None,
                        },
                        ActionStateUpdate {
                            field_append: Some('\n'),
                            ..Default::default()
                        },
                    )
                } else {
                    Self::move_focus(ctx, ctx.active_field.next())
                }
            }
            KeyAction::Submit => {
                if ctx.show_help {
                    return (
                        ActionResult {
                            should_quit: false,
                            status_message: None,
                        },
                        ActionStateUpdate::none(),
                    );
                }
                if ctx.is_submitting {
                    // Submit control is disabled while a request is outstanding
                    (
                        ActionResult {
                            should_quit: false,
                            status_message: Some("Still sending your message...".into()),
                        },
                        ActionStateUpdate::none(),
                    )
                } else {
                    (
                        ActionResult {
                            should_quit: false,
                            status_message: None,
                        },
                        ActionStateUpdate {
                            submit_requested: Some(()),
                            ..Default::default()
                        },
                    )
                }
            }
            KeyAction::InputChar(c) => {
                if ctx.show_help {
                    (
                        ActionResult {
                            should_quit: false,
                            status_message: None,
                        },
                        ActionStateUpdate::none(),
                    )
                } else {
                    (
                        ActionResult {
                            should_quit: false,
                            status_message: None,
                        },
                        ActionStateUpdate {
                            field_append: Some(c),
                            ..Default::default()
                        },
                    )
                }
            }
            KeyAction::Backspace => {
                if ctx.show_help {
                    (
                        ActionResult {
                            should_quit: false,
                            status_message: None,
                        },
                        ActionStateUpdate::none(),
                    )
                } else {
                    (
                        ActionResult {
                            should_quit: false,
                            status_message: None,
                        },
                        ActionStateUpdate {
                            field_pop: Some(()),
                            ..Default::default()
                        },
                    )
                }
            }
            KeyAction::None => (
                ActionResult {
                    should_quit: false,
                    status_message: None,
                },
                ActionStateUpdate::none(),
            ),
        }
    }

    fn move_focus(ctx: &ActionContext, target: Field) -> (ActionResult, ActionStateUpdate) {
        if ctx.show_help {
            return (
                ActionResult {
                    should_quit: false,
                    status_message: None,
                },
                ActionStateUpdate::none(),
            );
        }
        (
            ActionResult {
                should_quit: false,
                status_message: None,
            },
            ActionStateUpdate {
                active_field: Some(target),
                ..Default::default()
            },
        )
    }
}

/// Structural representation of state changes requested by action handlers
#[derive(Debug, Default, Clone)]
pub struct ActionStateUpdate {
    // Focus and overlay
    pub active_field: Option<Field>,
    pub show_help: Option<bool>,

    // Active-field edits
    pub field_append: Option<char>,
    pub field_pop: Option<()>,

    // Commands
    pub submit_requested: Option<()>,
}

impl ActionStateUpdate {
    pub fn none() -> Self {
        Self::default()
    }
}
