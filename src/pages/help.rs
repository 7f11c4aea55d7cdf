use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

#[derive(Debug)]
pub struct HelpPage;

impl Default for HelpPage {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpPage {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(8), Constraint::Min(0)])
            .split(area);

        // Fill the overlay to avoid a transparent background bleeding through
        frame.render_widget(Block::default().style(Style::new().bg(Color::Black)), area);

        let keys = vec![
            Line::from(vec![
                Span::styled("Tab / Shift+Tab", Style::new().bold().cyan()),
                Span::raw("   Move between fields"),
            ]),
            Line::from(vec![
                Span::styled("Enter", Style::new().bold().cyan()),
                Span::raw("             Next field (new line inside Message)"),
            ]),
            Line::from(vec![
                Span::styled("Ctrl+S", Style::new().bold().cyan()),
                Span::raw("            Send the message"),
            ]),
            Line::from(vec![
                Span::styled("F1", Style::new().bold().cyan()),
                Span::raw("                Toggle this help"),
            ]),
            Line::from(vec![
                Span::styled("Esc", Style::new().bold().cyan()),
                Span::raw("               Close help / quit"),
            ]),
            Line::from(vec![
                Span::styled("Ctrl+C", Style::new().bold().cyan()),
                Span::raw("            Quit"),
            ]),
        ];
        frame.render_widget(
            Paragraph::new(keys).block(Block::bordered().title("Keys")),
            sections[0],
        );

        let tips = vec![
            Line::from("Only the email field is validated; name and message are optional."),
            Line::from("Your input is kept if sending fails, so you can simply try again."),
            Line::from("Delivery details are written to postbox.log next to the binary."),
        ];
        frame.render_widget(
            Paragraph::new(tips).block(Block::bordered().title("Tips")),
            sections[1],
        );
    }
}
