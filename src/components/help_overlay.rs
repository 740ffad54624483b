//! Help overlay component
//!
//! Displays context-sensitive help for the focused panel in a popup.

use super::centered_rect;
use super::keybindings::{HelpSection, KeybindingContext};
use crate::app::Focus;
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Help overlay component
pub struct HelpOverlay {
    content: Vec<Line<'static>>,
}

impl HelpOverlay {
    /// Create a new help overlay for the given panel
    pub fn new(focus: Focus, keybinding_ctx: &KeybindingContext) -> Self {
        let sections = keybinding_ctx.get_help_content(focus);
        Self {
            content: Self::build_content(&sections, focus),
        }
    }

    /// Build the help content from sections
    fn build_content(sections: &[HelpSection], focus: Focus) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = Vec::new();

        lines.push(Line::from(vec![Span::styled(
            "  Agreement Wizard Help  ",
            Styles::title(),
        )]));
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Current: ", Styles::text_muted()),
            Span::styled(focus.label(), Style::default().fg(Colors::SECONDARY)),
        ]));
        lines.push(Line::from(""));

        for section in sections {
            lines.push(Line::from(vec![Span::styled(
                format!("  {}  ", section.title),
                Style::default()
                    .fg(Colors::SUCCESS)
                    .add_modifier(Modifier::BOLD),
            )]));

            for (key, description) in &section.items {
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(
                        format!("{:<10}", key),
                        Style::default()
                            .fg(Colors::PRIMARY)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(description.clone(), Styles::text()),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines
    }

    /// Plain-text help lines, one per line of the popup
    pub fn text_lines(&self) -> Vec<String> {
        self.content.iter().map(|l| l.to_string()).collect()
    }

    /// Render the help overlay
    pub fn render(&self, f: &mut Frame, parent: Rect) {
        let area = centered_rect(parent, 60, 70, (50, 15), (80, 35));
        let block = Block::default()
            .title(" Help ")
            .title_bottom(" Press ? or Esc to close ")
            .borders(Borders::ALL)
            .border_style(Styles::border(true))
            .style(Style::default().bg(Colors::BG_PRIMARY));

        f.render_widget(Clear, area);
        f.render_widget(Paragraph::new(self.content.clone()).block(block), area);
    }
}
