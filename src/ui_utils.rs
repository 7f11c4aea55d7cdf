use ratatui::{style::Style, style::Stylize, widgets::Block};

/// Creates a field block with conditional styling: yellow border when the
/// field has focus, red border when it carries a validation error
pub fn field_block(title: &str, is_focused: bool, has_error: bool) -> Block<'_> {
    let block = Block::bordered().title(title);
    if has_error {
        block.border_style(Style::new().red())
    } else if is_focused {
        block.border_style(Style::new().yellow())
    } else {
        block
    }
}

/// Renders a field value with a trailing cursor marker when focused
pub fn input_text(value: &str, is_focused: bool) -> String {
    if is_focused {
        format!("{value}▏")
    } else {
        value.to_string()
    }
}
