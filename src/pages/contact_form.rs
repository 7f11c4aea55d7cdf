use postbox::form::{Field, FormState, SubmissionStatus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    widgets::{Paragraph, Wrap},
    Frame,
};
use throbber_widgets_tui::{Throbber, ThrobberState, WhichUse, BRAILLE_SIX};

use crate::ui_utils::{field_block, input_text};

#[derive(Debug)]
pub struct ContactFormPage;

impl Default for ContactFormPage {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactFormPage {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        form: &FormState,
        active: Field,
        throbber: &mut ThrobberState,
    ) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // name
                Constraint::Length(3), // email
                Constraint::Length(1), // inline email error
                Constraint::Min(5),    // message body
                Constraint::Length(1), // submit row
                Constraint::Length(1), // status banner
            ])
            .split(area);

        frame.render_widget(
            Paragraph::new(input_text(&form.fields.name, active == Field::Name))
                .block(field_block("Name (optional)", active == Field::Name, false)),
            layout[0],
        );

        let email_error = form.error(Field::Email);
        frame.render_widget(
            Paragraph::new(input_text(&form.fields.email, active == Field::Email)).block(
                field_block("Email", active == Field::Email, email_error.is_some()),
            ),
            layout[1],
        );
        if let Some(error) = email_error {
            frame.render_widget(
                Paragraph::new(format!("  ✗ {error}")).style(Style::new().red()),
                layout[2],
            );
        }

        frame.render_widget(
            Paragraph::new(input_text(&form.fields.message, active == Field::Message))
                .wrap(Wrap { trim: false })
                .block(field_block(
                    "Message (optional, Enter for a new line)",
                    active == Field::Message,
                    false,
                )),
            layout[3],
        );

        if form.is_submitting {
            let spinner = Throbber::default()
                .label("Sending...")
                .style(Style::new().yellow())
                .throbber_set(BRAILLE_SIX)
                .use_type(WhichUse::Spin);
            frame.render_stateful_widget(spinner, layout[4], throbber);
        } else {
            frame.render_widget(
                Paragraph::new("Ctrl+S  Send message").bold(),
                layout[4],
            );
        }

        match form.status {
            SubmissionStatus::Success => frame.render_widget(
                Paragraph::new("✓ Message sent. Thank you!").style(Style::new().green().bold()),
                layout[5],
            ),
            SubmissionStatus::Error => frame.render_widget(
                Paragraph::new("✗ Something went wrong. Please try again.")
                    .style(Style::new().red().bold()),
                layout[5],
            ),
            SubmissionStatus::None => {}
        }
    }
}
