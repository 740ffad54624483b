//! Application module
//!
//! Contains the main application logic and event handling.
//!
//! # Module Structure
//! - `state` - View state types (AppState, Focus)
//! - Main module - App struct and event loop
//!
//! The app owns the selection store outright. Each key event runs to
//! completion before the next frame is drawn, so there is no shared state.

mod state;

pub use state::{AppState, Focus};

use crate::catalog::{Contract, Price};
use crate::components::keybindings::{KeyAction, KeybindingContext};
use crate::error::Result;
use crate::input::{DateField, DateInput};
use crate::store::SelectionStore;
use crate::types::ContractId;
use crate::ui::{panels, UiRenderer};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Main application struct
pub struct App {
    store: SelectionStore,
    state: AppState,
    ui_renderer: UiRenderer,
    /// Keybinding context for dispatch and navigation hints
    keybinding_context: KeybindingContext,
}

impl App {
    /// Create a new application instance over a prepared store
    pub fn new(store: SelectionStore) -> Self {
        info!(mode = %store.mode(), "creating app");
        Self {
            store,
            state: AppState::default(),
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
        }
    }

    pub fn store(&self) -> &SelectionStore {
        &self.store
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn keybinding_context(&self) -> &KeybindingContext {
        &self.keybinding_context
    }

    /// Run the main application loop until the user quits
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("starting main application loop");

        loop {
            terminal.draw(|f| self.ui_renderer.render(f, self))?;

            if crossterm::event::poll(Duration::from_millis(100))? {
                match crossterm::event::read()? {
                    Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                        if self.handle_key_event(key_event)? {
                            break;
                        }
                    }
                    Event::Resize(width, height) => {
                        debug!(width, height, "terminal resized");
                    }
                    _ => {}
                }
            }
        }

        info!("main application loop finished");
        Ok(())
    }

    /// Handle a key press. Returns `true` when the user asked to quit.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<bool> {
        if self.state.is_modal() {
            if self.state.date_input.is_some() {
                self.handle_date_input_key(key_event);
            } else if matches!(
                key_event.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('g') | KeyCode::Char('q')
            ) {
                self.state.help_visible = false;
                self.state.guidance_visible = false;
            }
            return Ok(false);
        }

        let Some(action) = self
            .keybinding_context
            .action_for(self.state.focus, &key_event)
        else {
            return Ok(false);
        };

        match action {
            KeyAction::Quit => return Ok(true),
            KeyAction::Help => self.state.help_visible = true,
            KeyAction::Guidance => self.state.guidance_visible = true,
            KeyAction::NextPanel => self.state.focus = self.state.focus.next(),
            KeyAction::PreviousPanel => self.state.focus = self.state.focus.previous(),
            KeyAction::NavigateUp => self.navigate_up(),
            KeyAction::NavigateDown => self.navigate_down(),
            KeyAction::PreviousContract => {
                self.state.allocation_contract = self.state.allocation_contract.saturating_sub(1);
            }
            KeyAction::NextContract => {
                let count = self.store.selected().len();
                if self.state.allocation_contract + 1 < count {
                    self.state.allocation_contract += 1;
                }
            }
            KeyAction::ScrollUp => {
                self.state.payload_scroll = self.state.payload_scroll.saturating_sub(1);
            }
            KeyAction::ScrollDown => {
                let last_line = self.payload_line_count().saturating_sub(1);
                if usize::from(self.state.payload_scroll) < last_line {
                    self.state.payload_scroll += 1;
                }
            }
            KeyAction::Toggle => self.handle_toggle(),
            KeyAction::EditStartDate => self.open_date_input(DateField::Start),
            KeyAction::EditEndDate => self.open_date_input(DateField::End),
            KeyAction::ClearOverride => self.clear_current_override(),
            KeyAction::CycleTagFilter => {
                let tag_count = self.store.catalog().tags().len();
                self.state.cycle_tag_filter(tag_count);
                self.state.status_message = match self.tag_filter() {
                    Some(tag) => format!("Showing prices tagged {:?}", tag),
                    None => "Showing all prices".to_string(),
                };
            }
        }

        Ok(false)
    }

    /// Active tag filter, if any
    pub fn tag_filter(&self) -> Option<&str> {
        let tags = self.store.catalog().tags();
        self.state.tag_filter.and_then(|i| tags.get(i).copied())
    }

    /// Prices listed in the allocation panel under the current tag filter
    pub fn allocation_prices(&self) -> Vec<&Price> {
        self.store.catalog().prices_with_tag(self.tag_filter())
    }

    /// Contract whose card is being edited in the allocation panel
    pub fn allocation_contract(&self) -> Option<&Contract> {
        let contract_id = self.store.selected().get(self.state.allocation_contract)?;
        self.store.catalog().contract(contract_id)
    }

    /// Lines in the payload preview, used to bound scrolling
    fn payload_line_count(&self) -> usize {
        panels::payload_lines(self).len()
    }

    fn list_len(&self) -> usize {
        match self.state.focus {
            Focus::CommonData => self.store.catalog().prices().len(),
            Focus::Contracts => self.store.catalog().contracts().len(),
            Focus::Allocation => self.allocation_prices().len(),
            Focus::Payload => 0,
        }
    }

    fn cursor_mut(&mut self) -> Option<&mut usize> {
        match self.state.focus {
            Focus::CommonData => Some(&mut self.state.common_cursor),
            Focus::Contracts => Some(&mut self.state.contract_cursor),
            Focus::Allocation => Some(&mut self.state.allocation_cursor),
            Focus::Payload => None,
        }
    }

    fn navigate_up(&mut self) {
        if let Some(cursor) = self.cursor_mut() {
            *cursor = cursor.saturating_sub(1);
        }
    }

    fn navigate_down(&mut self) {
        let len = self.list_len();
        if let Some(cursor) = self.cursor_mut() {
            if *cursor + 1 < len {
                *cursor += 1;
            }
        }
    }

    fn handle_toggle(&mut self) {
        let result = match self.state.focus {
            Focus::CommonData => self.toggle_common_price(),
            Focus::Contracts => self.toggle_contract(),
            Focus::Allocation => self.toggle_override_price(),
            Focus::Payload => return,
        };

        if let Some(Err(e)) = result {
            warn!("toggle rejected: {}", e);
            self.state.status_message = e.to_string();
        }
    }

    fn toggle_common_price(&mut self) -> Option<Result<()>> {
        let price = self.store.catalog().prices().get(self.state.common_cursor)?.clone();
        Some(self.store.toggle_common_price(&price.id).map(|selected| {
            self.state.status_message = format!(
                "{} {} baseline prices",
                price.label,
                if selected { "added to" } else { "removed from" }
            );
        }))
    }

    fn toggle_contract(&mut self) -> Option<Result<()>> {
        let contract = self
            .store
            .catalog()
            .contracts()
            .get(self.state.contract_cursor)?
            .clone();
        let result = self.store.toggle_contract(&contract.id);
        Some(result.map(|selected| {
            self.clamp_allocation_contract();
            self.state.status_message = if selected {
                format!("{} selected", contract.name)
            } else if self.store.is_inheriting(&contract.id) {
                format!("{} deselected", contract.name)
            } else {
                format!("{} deselected (override kept)", contract.name)
            };
        }))
    }

    fn toggle_override_price(&mut self) -> Option<Result<()>> {
        let contract_id = self.current_contract_id()?;
        let price = self.allocation_prices().get(self.state.allocation_cursor)?.id.clone();
        Some(
            self.store
                .toggle_override_price(&contract_id, &price)
                .map(|selected| {
                    self.state.status_message = format!(
                        "{} {} for contract {}",
                        price,
                        if selected { "included" } else { "excluded" },
                        contract_id
                    );
                }),
        )
    }

    fn clear_current_override(&mut self) {
        let Some(contract_id) = self.current_contract_id() else {
            return;
        };
        match self.store.clear_override(&contract_id) {
            Ok(true) => {
                self.state.status_message =
                    format!("Contract {} inherits common prices again", contract_id);
            }
            Ok(false) => {
                self.state.status_message = format!("Contract {} has no override", contract_id);
            }
            Err(e) => {
                warn!("clear override rejected: {}", e);
                self.state.status_message = e.to_string();
            }
        }
    }

    fn current_contract_id(&self) -> Option<ContractId> {
        self.store
            .selected()
            .get(self.state.allocation_contract)
            .cloned()
    }

    /// Keep the allocation card index inside the selection after it shrinks
    fn clamp_allocation_contract(&mut self) {
        let count = self.store.selected().len();
        if self.state.allocation_contract >= count {
            self.state.allocation_contract = count.saturating_sub(1);
        }
    }

    fn open_date_input(&mut self, field: DateField) {
        let current = match field {
            DateField::Start => self.store.common().start_date,
            DateField::End => self.store.common().end_date,
        };
        self.state.date_input = Some(DateInput::new(field, current));
    }

    fn handle_date_input_key(&mut self, key_event: KeyEvent) {
        let Some(input) = self.state.date_input.as_mut() else {
            return;
        };

        match key_event.code {
            KeyCode::Esc => {
                self.state.date_input = None;
            }
            KeyCode::Backspace => input.backspace(),
            KeyCode::Delete => input.clear(),
            KeyCode::Char(c) => {
                input.push(c);
            }
            KeyCode::Enter => {
                let field = input.field;
                match input.submit() {
                    Ok(date) => {
                        match field {
                            DateField::Start => self.store.set_start_date(date),
                            DateField::End => self.store.set_end_date(date),
                        }
                        self.state.status_message = format!("{} set to {}", field.label(), date);
                        self.state.date_input = None;
                    }
                    Err(e) => {
                        debug!("date input rejected: {}", e);
                    }
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crossterm::event::KeyModifiers;

    fn app() -> App {
        App::new(AppConfig::default().build_store().unwrap())
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap()
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert!(press(&mut app, KeyCode::Char('q')));
        assert!(press(&mut app, KeyCode::Esc));
    }

    #[test]
    fn test_overlays_swallow_keys_until_closed() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.state().help_visible);
        assert!(!press(&mut app, KeyCode::Char(' ')));
        assert!(!press(&mut app, KeyCode::Char('q')));
        assert!(!app.state().help_visible);
    }

    #[test]
    fn test_next_contract_stops_at_last_selected() {
        let mut app = app();
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.state().allocation_contract, 1);
        assert_eq!(app.allocation_contract().unwrap().name, "Northwind Logistics");
    }

    #[test]
    fn test_tag_filter_limits_allocation_prices() {
        let mut app = app();
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.tag_filter(), Some("core"));
        let ids: Vec<&str> = app.allocation_prices().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["base"]);
    }

    #[test]
    fn test_payload_scroll_stops_at_last_line() {
        let mut app = app();
        app.state.focus = Focus::Payload;
        let lines = app.payload_line_count();
        for _ in 0..lines + 20 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(usize::from(app.state().payload_scroll), lines - 1);
        press(&mut app, KeyCode::Up);
        assert_eq!(usize::from(app.state().payload_scroll), lines - 2);
    }

    #[test]
    fn test_date_dialog_delete_clears_buffer() {
        let mut app = app();
        app.state.focus = Focus::CommonData;
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Delete);
        assert_eq!(app.state().date_input.as_ref().unwrap().buffer, "");
        for c in "2027-02-03".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.store().common().start_date.to_string(), "2027-02-03");
    }

    #[test]
    fn test_date_dialog_escape_discards() {
        let mut app = app();
        app.state.focus = Focus::CommonData;
        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Esc);
        assert!(app.state().date_input.is_none());
        assert_eq!(app.store().common().end_date.to_string(), "2030-01-01");
    }
}
