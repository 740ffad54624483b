//! Dialog rendering
//!
//! The date entry popup drawn over the panels.

use crate::components::centered_rect;
use crate::input::DateInput;
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn date_input_lines(input: &DateInput) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled("Format: YYYY-MM-DD", Styles::text_muted())),
        Line::from(vec![
            Span::styled("> ", Styles::title()),
            Span::styled(format!("{}_", input.buffer), Styles::text()),
        ]),
    ];
    if let Some(ref err) = input.error {
        lines.push(Line::from(Span::styled(err.clone(), Styles::error())));
    }
    lines
}

pub fn render_date_input(f: &mut Frame, parent: Rect, input: &DateInput) {
    let area = centered_rect(parent, 40, 20, (48, 6), (64, 8));
    let block = Block::default()
        .title(format!(" {} ", input.field.label()))
        .title_bottom(" Enter to apply, Del to clear, Esc to cancel ")
        .borders(Borders::ALL)
        .border_style(Styles::border(true))
        .style(Style::default().bg(Colors::BG_PRIMARY));

    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(date_input_lines(input)).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::DateField;
    use chrono::NaiveDate;

    #[test]
    fn test_date_input_lines_show_error() {
        let mut input = DateInput::new(DateField::End, NaiveDate::from_ymd_opt(2030, 1, 1).unwrap());
        assert_eq!(date_input_lines(&input).len(), 2);
        input.clear();
        let _ = input.submit();
        let lines = date_input_lines(&input);
        assert_eq!(lines.len(), 3);
        assert!(lines[2].to_string().starts_with("Invalid date"));
    }
}
