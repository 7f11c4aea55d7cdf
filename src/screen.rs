use postbox::form::{Field, FormState};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Stylize,
    text::Line,
    widgets::Block,
    Frame,
};
use throbber_widgets_tui::ThrobberState;

use crate::pages::contact_form::ContactFormPage;
use crate::pages::help::HelpPage;

#[derive(Debug)]
pub struct Screen {
    contact_form: ContactFormPage,
    help: HelpPage,
}

impl Screen {
    pub fn new() -> Self {
        Self {
            contact_form: ContactFormPage::new(),
            help: HelpPage::new(),
        }
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        form: &FormState,
        active_field: Field,
        status: &str,
        show_help: bool,
        throbber: &mut ThrobberState,
    ) {
        let area = frame.area();
        let title = Line::from("Postbox - Contact Form")
            .bold()
            .blue()
            .left_aligned();
        let block = Block::bordered().title(title);
        let inner_area = block.inner(area);
        frame.render_widget(block, area);

        // Split into main content and bottom status bar
        let vlayout = Layout::new(
            Direction::Vertical,
            [Constraint::Min(0), Constraint::Length(1)],
        )
        .split(inner_area);

        if show_help {
            self.help.render(frame, vlayout[0]);
        } else {
            self.contact_form
                .render(frame, vlayout[0], form, active_field, throbber);
        }

        // Render the status bar on bottom
        let status_line = Line::from(format!(
            "{}  |  Tab: Next field  Ctrl+S: Send  F1: Help  Esc: Quit",
            status
        ))
        .on_dark_gray()
        .white();
        frame.render_widget(status_line, vlayout[1]);
    }
}
