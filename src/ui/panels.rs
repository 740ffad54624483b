//! Wizard panels
//!
//! One panel per step. Each panel is built as a list of lines from the
//! selection store so the content can be checked without a terminal.

use crate::app::{App, Focus};
use crate::catalog::Price;
use crate::store::PriceOverride;
use crate::theme::{Styles, Theme, UiText};
use crate::types::ResolutionMode;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn panel_block(step: usize, title: &str, focused: bool) -> Block<'static> {
    Block::default()
        .title(Line::from(vec![
            Span::styled(format!(" Step {} ", step), Styles::eyebrow()),
            Span::styled(format!("{} ", title), Styles::title()),
        ]))
        .borders(Borders::ALL)
        .border_style(Styles::border(focused))
}

fn lede(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(text, Styles::text_muted()))
}

/// One price chip: checkbox, label, amount, term, and tags
fn price_line(price: &Price, on: bool, under_cursor: bool) -> Line<'static> {
    let style = if under_cursor {
        Styles::selected()
    } else {
        Styles::chip(on)
    };
    let mut spans = vec![
        Span::styled(format!("{} {}", Theme::checkbox(on), price.label), style),
        Span::styled(
            format!("  {} {}", price.display_amount(), price.term),
            Styles::text_secondary(),
        ),
    ];
    for tag in &price.tags {
        spans.push(Span::styled(format!(" #{}", tag), Styles::pill()));
    }
    Line::from(spans)
}

/// Step 1: dates, attachments, and baseline prices
pub fn common_data_lines(app: &App) -> Vec<Line<'static>> {
    let store = app.store();
    let state = app.state();
    let focused = state.focus == Focus::CommonData;
    let common = store.common();

    let mut lines = vec![
        lede(UiText::COMMON_LEDE),
        Line::from(""),
        Line::from(vec![
            Span::styled("Start date ", Styles::text_muted()),
            Span::styled(common.start_date.to_string(), Styles::text()),
            Span::styled("   End date ", Styles::text_muted()),
            Span::styled(common.end_date.to_string(), Styles::text()),
        ]),
        Line::from(""),
        Line::from(Span::styled("Attachments", Styles::eyebrow())),
    ];
    for attachment in store.attachments() {
        lines.push(Line::from(vec![
            Span::styled("  • ", Styles::pill()),
            Span::styled(attachment.name.clone(), Styles::text()),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Baseline prices", Styles::eyebrow())));
    for (i, price) in store.catalog().prices().iter().enumerate() {
        let on = common.prices.contains(&price.id);
        lines.push(price_line(price, on, focused && i == state.common_cursor));
    }
    lines
}

/// Step 2: contract cards with selection checkboxes
pub fn contract_lines(app: &App) -> Vec<Line<'static>> {
    let store = app.store();
    let state = app.state();
    let focused = state.focus == Focus::Contracts;

    let mut lines = vec![lede(UiText::CONTRACTS_LEDE), Line::from("")];
    for (i, contract) in store.catalog().contracts().iter().enumerate() {
        let on = store.is_selected(&contract.id);
        let style = if focused && i == state.contract_cursor {
            Styles::selected()
        } else {
            Styles::chip(on)
        };
        let mut spans = vec![
            Span::styled(format!("{} {}", Theme::checkbox(on), contract.name), style),
            Span::styled(format!("  [{}]", contract.region), Styles::pill()),
            Span::styled(format!("  Owner: {}", contract.owner), Styles::text_secondary()),
        ];
        if !on && !store.is_inheriting(&contract.id) {
            spans.push(Span::styled("  override kept", Styles::override_marker()));
        }
        lines.push(Line::from(spans));
    }
    lines
}

/// Step 3: the override card for the contract under the cursor
pub fn allocation_lines(app: &App) -> Vec<Line<'static>> {
    let store = app.store();
    let state = app.state();
    let focused = state.focus == Focus::Allocation;

    let mut lines = vec![lede(UiText::ALLOCATION_LEDE)];

    // Every selected contract, highlighting the ones carrying overrides
    let mut roster = vec![Span::styled("Contracts: ", Styles::text_muted())];
    for (i, contract_id) in store.selected().iter().enumerate() {
        let style = if !store.is_inheriting(contract_id) {
            Styles::override_marker()
        } else {
            Styles::text_secondary()
        };
        let label = if i == state.allocation_contract {
            format!("<{}> ", contract_id)
        } else {
            format!("{} ", contract_id)
        };
        roster.push(Span::styled(label, style));
    }
    lines.push(Line::from(roster));
    lines.push(Line::from(""));

    let Some(contract) = app.allocation_contract() else {
        lines.push(Line::from(Span::styled(UiText::NO_CONTRACTS, Styles::warning())));
        return lines;
    };

    let summary = store.contract_summary(&contract.id);
    let override_entry = store.override_for(&contract.id);
    lines.push(Line::from(vec![
        Span::styled(format!("{} ", contract.region), Styles::eyebrow()),
        Span::styled(contract.name.clone(), Styles::title()),
    ]));
    lines.push(Line::from(vec![
        Span::styled(format!("[{} inherited]", summary.inherited), Styles::pill()),
        Span::raw(" "),
        Span::styled(format!("[{} override(s)]", summary.overridden), Styles::pill()),
        Span::raw(" "),
        match override_entry {
            Some(PriceOverride::Explicit(_)) => {
                Span::styled("explicit override", Styles::override_marker())
            }
            Some(PriceOverride::Adjusted(_)) => {
                Span::styled("adjusted from common", Styles::override_marker())
            }
            None => Span::styled("inheriting", Styles::text_muted()),
        },
    ]));

    let filter = match app.tag_filter() {
        Some(tag) => format!("Select prices for this contract (tag: {})", tag),
        None => "Select prices for this contract".to_string(),
    };
    lines.push(Line::from(Span::styled(filter, Styles::text_muted())));

    for (i, price) in app.allocation_prices().into_iter().enumerate() {
        let on = summary.resolved.contains(&price.id);
        lines.push(price_line(price, on, focused && i == state.allocation_cursor));
    }

    lines.push(Line::from(""));
    let help = match (override_entry, store.mode()) {
        (Some(PriceOverride::Explicit(_)), _) => UiText::EXPLICIT_HELP,
        (Some(PriceOverride::Adjusted(_)), _) | (None, ResolutionMode::Delta) => {
            UiText::DELTA_HELP
        }
        (None, ResolutionMode::Verbatim) => UiText::VERBATIM_HELP,
    };
    lines.push(lede(help));
    lines
}

/// Step 4: the derived payload as pretty JSON
pub fn payload_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![lede(UiText::REVIEW_LEDE), Line::from("")];
    match app.store().derive_payload().to_json_pretty() {
        Ok(json) => {
            lines.extend(
                json.lines()
                    .map(|l| Line::from(Span::styled(l.to_string(), Styles::json()))),
            );
        }
        Err(e) => {
            lines.push(Line::from(Span::styled(e.to_string(), Styles::error())));
        }
    }
    lines
}

fn render_panel(
    f: &mut Frame,
    area: Rect,
    block: Block<'static>,
    lines: Vec<Line<'static>>,
    scroll: u16,
) {
    let widget = Paragraph::new(lines)
        .block(block)
        .style(Style::default())
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(widget, area);
}

pub fn render_common_data(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.state().focus == Focus::CommonData;
    render_panel(f, area, panel_block(1, "Common data", focused), common_data_lines(app), 0);
}

pub fn render_contracts(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.state().focus == Focus::Contracts;
    render_panel(f, area, panel_block(2, "Pick contracts", focused), contract_lines(app), 0);
}

pub fn render_allocation(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.state().focus == Focus::Allocation;
    render_panel(
        f,
        area,
        panel_block(3, "Price allocation per contract", focused),
        allocation_lines(app),
        0,
    );
}

pub fn render_payload(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.state().focus == Focus::Payload;
    render_panel(
        f,
        area,
        panel_block(4, "Review & payload", focused),
        payload_lines(app),
        app.state().payload_scroll,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn text(lines: &[Line<'_>]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    fn demo_app() -> App {
        App::new(AppConfig::default().build_store().unwrap())
    }

    #[test]
    fn test_common_data_lists_baseline_prices() {
        let lines = text(&common_data_lines(&demo_app()));
        assert!(lines.iter().any(|l| l.starts_with("[x] Base platform access")));
        assert!(lines.iter().any(|l| l.starts_with("[ ] Usage-based compute  USD 0.08 per hour")));
        assert!(lines.iter().any(|l| l.contains("Statement of Work v2.docx")));
        assert!(lines.iter().any(|l| l.contains("2025-01-01") && l.contains("2030-01-01")));
    }

    #[test]
    fn test_contract_cards() {
        let lines = text(&contract_lines(&demo_app()));
        assert!(lines.iter().any(|l| l.starts_with("[x] Acme Renewable Energy")));
        assert!(lines.iter().any(|l| l.starts_with("[ ] Helios Telecom")));
    }

    #[test]
    fn test_allocation_card_for_first_contract() {
        let lines = text(&allocation_lines(&demo_app()));
        assert!(lines.iter().any(|l| l.contains("Acme Renewable Energy")));
        assert!(lines.iter().any(|l| l.contains("[2 inherited] [0 override(s)] inheriting")));
    }

    fn delta_app() -> App {
        let config = AppConfig {
            resolution: ResolutionMode::Delta,
            ..AppConfig::default()
        };
        App::new(config.build_store().unwrap())
    }

    #[test]
    fn test_allocation_card_labels_adjusted_override() {
        let mut app = delta_app();
        app.handle_key_event(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE))
            .unwrap();
        let lines = text(&allocation_lines(&app));
        assert!(lines.iter().any(|l| l.ends_with("adjusted from common")));
        assert!(lines.iter().any(|l| l == UiText::DELTA_HELP));
    }

    #[test]
    fn test_allocation_card_labels_explicit_override_in_delta_mode() {
        let mut app = delta_app();
        app.handle_key_event(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE))
            .unwrap();
        let lines = text(&allocation_lines(&app));
        assert!(lines.iter().any(|l| l.contains("Northwind Logistics")));
        assert!(lines.iter().any(|l| l.ends_with("explicit override")));
        assert!(lines.iter().any(|l| l == UiText::EXPLICIT_HELP));
        assert!(!lines.iter().any(|l| l == UiText::DELTA_HELP));
    }

    #[test]
    fn test_payload_preview_contains_contract_ids() {
        let lines = text(&payload_lines(&demo_app()));
        assert!(lines.iter().any(|l| l.contains("\"contractId\": \"239\"")));
        assert!(lines.iter().any(|l| l.contains("\"startDate\": \"2025-01-01\"")));
    }
}
