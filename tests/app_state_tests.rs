//! Key-driven tests for the wizard app
//!
//! Feeds key events through `App::handle_key_event` and checks the store and
//! the rendered screen.

use agreetui::app::{App, Focus};
use agreetui::ui::UiRenderer;
use agreetui::{AppConfig, ContractId, PriceOverride, ResolutionMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

fn demo_app(mode: ResolutionMode) -> App {
    let config = AppConfig {
        resolution: mode,
        ..AppConfig::default()
    };
    App::new(config.build_store().expect("demo store"))
}

fn press(app: &mut App, code: KeyCode) -> bool {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
        .expect("key handled")
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(160, 50)).unwrap();
    let renderer = UiRenderer::new();
    terminal.draw(|f| renderer.render(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_starts_on_allocation_panel() {
    let app = demo_app(ResolutionMode::Verbatim);
    assert_eq!(app.state().focus, Focus::Allocation);
    assert_eq!(app.allocation_contract().unwrap().name, "Acme Renewable Energy");
}

#[test]
fn test_space_toggles_override_for_current_contract() {
    let mut app = demo_app(ResolutionMode::Verbatim);
    press(&mut app, KeyCode::Char(' '));

    let contract = ContractId::from("123");
    assert!(matches!(
        app.store().override_for(&contract),
        Some(PriceOverride::Explicit(p)) if p.as_slice().len() == 1
    ));
    assert!(app.state().status_message.contains("included"));

    press(&mut app, KeyCode::Char('c'));
    assert!(app.store().is_inheriting(&contract));
}

#[test]
fn test_tab_cycles_panels() {
    let mut app = demo_app(ResolutionMode::Verbatim);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.state().focus, Focus::Payload);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.state().focus, Focus::CommonData);
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.state().focus, Focus::Payload);
}

#[test]
fn test_deselecting_current_contract_clamps_allocation_card() {
    let mut app = demo_app(ResolutionMode::Verbatim);
    press(&mut app, KeyCode::Right);
    assert_eq!(app.state().allocation_contract, 1);

    // Contracts panel: move to Northwind and deselect it
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.state().focus, Focus::Contracts);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char(' '));

    assert_eq!(app.store().selected(), &[ContractId::from("123")]);
    assert_eq!(app.state().allocation_contract, 0);
    assert!(app.state().status_message.contains("override kept"));
}

#[test]
fn test_date_dialog_applies_valid_date() {
    let mut app = demo_app(ResolutionMode::Verbatim);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.state().focus, Focus::CommonData);

    press(&mut app, KeyCode::Char('s'));
    assert!(app.state().date_input.is_some());
    for _ in 0..10 {
        press(&mut app, KeyCode::Backspace);
    }
    type_text(&mut app, "2026-13-01");
    press(&mut app, KeyCode::Enter);
    assert!(app.state().date_input.as_ref().unwrap().error.is_some());

    for _ in 0..5 {
        press(&mut app, KeyCode::Backspace);
    }
    type_text(&mut app, "03-01");
    press(&mut app, KeyCode::Enter);
    assert!(app.state().date_input.is_none());
    assert_eq!(app.store().common().start_date.to_string(), "2026-03-01");
}

#[test]
fn test_render_shows_payload_and_stepper() {
    let app = demo_app(ResolutionMode::Delta);
    let screen = render(&app);
    assert!(screen.contains("Price allocation"));
    assert!(screen.contains("Resolution: delta"));
    assert!(screen.contains("\"contractId\": \"123\""));
}

#[test]
fn test_render_help_overlay() {
    let mut app = demo_app(ResolutionMode::Verbatim);
    press(&mut app, KeyCode::Char('?'));
    let screen = render(&app);
    assert!(screen.contains("Current: Price allocation"));
}
