//! Header, stepper, and footer rendering
//!
//! Common chrome around the wizard panels: the page title, the four-step
//! progress row, the status line, and the navigation bar.

use crate::components::keybindings::KeybindingContext;
use crate::components::nav_bar::NavBar;
use crate::theme::{Styles, Theme, UiText};
use crate::types::ResolutionMode;
use crate::wizard::{WizardStep, CURRENT_STEP};
use crate::app::Focus;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Header renderer containing the page title lines
pub struct HeaderRenderer {
    header_lines: Vec<Line<'static>>,
}

impl Default for HeaderRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderRenderer {
    pub fn new() -> Self {
        Self {
            header_lines: vec![
                Line::from(Span::styled(UiText::EYEBROW, Styles::eyebrow())),
                Line::from(Span::styled(UiText::HEADLINE, Styles::title())),
            ],
        }
    }

    /// Render the title lines plus the active resolution mode
    pub fn render_header(&self, f: &mut Frame, area: Rect, mode: ResolutionMode) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let mut lines = self.header_lines.clone();
        lines.push(Line::from(vec![
            Span::styled("Resolution: ", Styles::text_muted()),
            Span::styled(mode.to_string(), Styles::pill()),
        ]));
        f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }
}

/// Two lines for one stepper entry: marker + title, then the subtitle
pub fn step_lines(step: WizardStep) -> Vec<Line<'static>> {
    let style = Theme::step_style(step.status(CURRENT_STEP));
    vec![
        Line::from(Span::styled(
            format!("{} {}", step.marker(CURRENT_STEP), step.title()),
            style,
        )),
        Line::from(Span::styled(step.subtitle(), Styles::text_muted())),
    ]
}

/// Render the four-step progress row
pub fn render_stepper(f: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, WizardStep::TOTAL_STEPS as u32); WizardStep::TOTAL_STEPS])
        .split(area);

    for (step, chunk) in WizardStep::all().zip(chunks.iter()) {
        let focused = step == CURRENT_STEP;
        let widget = Paragraph::new(step_lines(step)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border(focused)),
        );
        f.render_widget(widget, *chunk);
    }
}

/// Render the one-line status message
pub fn render_status(f: &mut Frame, area: Rect, message: &str) {
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(message.to_string(), Styles::success()))),
        area,
    );
}

/// Render the navigation bar
pub fn render_nav_bar(f: &mut Frame, focus: Focus, keybinding_ctx: &KeybindingContext, area: Rect) {
    let nav_items = keybinding_ctx.get_nav_items(focus);
    NavBar::new(nav_items).render(f, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_lines_mark_completed_steps() {
        assert_eq!(step_lines(WizardStep::CommonData)[0].to_string(), "✓ Common data");
        assert_eq!(step_lines(WizardStep::PriceAllocation)[0].to_string(), "3 Price allocation");
        assert_eq!(
            step_lines(WizardStep::ReviewSubmit)[1].to_string(),
            "Validate payload and submit"
        );
    }
}
