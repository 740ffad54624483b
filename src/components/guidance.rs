//! Experience blueprint overlay
//!
//! Design notes for the flow: what is common, how overrides show up, and
//! what the payload preview is for.

use super::centered_rect;
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// A titled card of guidance copy
pub struct GuidanceCard {
    pub title: &'static str,
    pub body: &'static str,
    pub bullets: &'static [&'static str],
}

pub const GUIDANCE_CARDS: [GuidanceCard; 3] = [
    GuidanceCard {
        title: "1. Decide common vs. per-contract",
        body: "Capture dates, attachments, and baseline prices once. \
               Override any field per contract in later steps.",
        bullets: &[
            "Defaults flow from common data.",
            "Overrides are additive and only send deltas to the API.",
        ],
    },
    GuidanceCard {
        title: "2. Price allocation canvas",
        body: "Each selected contract shows the inherited prices and allows \
               adding or removing prices inline.",
        bullets: &[
            "Show inheritance: \"2 prices inherited, 1 overridden\".",
            "Surface availability filtering by tag (core/support/usage).",
        ],
    },
    GuidanceCard {
        title: "3. Submission preview",
        body: "Render the JSON payload users will send. Highlight which \
               contracts carry overrides so the data contract is transparent.",
        bullets: &[],
    },
];

pub fn guidance_lines() -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled("Experience blueprint", Styles::title())),
        Line::from(""),
    ];
    for card in &GUIDANCE_CARDS {
        lines.push(Line::from(Span::styled(card.title, Styles::eyebrow())));
        lines.push(Line::from(Span::styled(card.body, Styles::text())));
        for bullet in card.bullets {
            lines.push(Line::from(vec![
                Span::styled("  • ", Styles::pill()),
                Span::styled(*bullet, Styles::text_secondary()),
            ]));
        }
        lines.push(Line::from(""));
    }
    lines
}

pub fn render_guidance(f: &mut Frame, parent: Rect) {
    let area = centered_rect(parent, 70, 70, (50, 15), (100, 30));
    let block = Block::default()
        .title(" Guidance ")
        .title_bottom(" Press g or Esc to close ")
        .borders(Borders::ALL)
        .border_style(Styles::border(true))
        .style(Style::default().bg(Colors::BG_PRIMARY));

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(guidance_lines())
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}
