//! User interface rendering module
//!
//! This module is organized into submodules:
//! - `header` - Title, stepper, status line, and navigation bar
//! - `panels` - The four wizard panels
//! - `dialogs` - Date entry popup
//!
//! Every panel is drawn on one screen; Tab moves keyboard focus between them.

mod dialogs;
mod header;
pub mod panels;

pub use header::{step_lines, HeaderRenderer};

use crate::app::App;
use crate::components::guidance::render_guidance;
use crate::components::help_overlay::HelpOverlay;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Main UI renderer
pub struct UiRenderer {
    /// Header renderer instance
    header: HeaderRenderer,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    /// Create a new UI renderer
    pub fn new() -> Self {
        Self {
            header: HeaderRenderer::new(),
        }
    }

    /// Render the complete UI from the app's store and view state
    pub fn render(&self, f: &mut Frame, app: &App) {
        let state = app.state();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(4), // Stepper
                Constraint::Min(10),   // Panels
                Constraint::Length(1), // Status line
                Constraint::Length(1), // Navigation bar
            ])
            .split(f.area());

        self.header
            .render_header(f, main_chunks[0], app.store().mode());
        header::render_stepper(f, main_chunks[1]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(main_chunks[2]);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(columns[0]);
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(columns[1]);

        panels::render_common_data(f, left[0], app);
        panels::render_contracts(f, left[1], app);
        panels::render_allocation(f, right[0], app);
        panels::render_payload(f, right[1], app);

        header::render_status(f, main_chunks[3], &state.status_message);
        header::render_nav_bar(f, state.focus, app.keybinding_context(), main_chunks[4]);

        // Overlays last so they sit on top of the panels
        let area = f.area();
        if let Some(ref input) = state.date_input {
            dialogs::render_date_input(f, area, input);
        } else if state.help_visible {
            HelpOverlay::new(state.focus, app.keybinding_context()).render(f, area);
        } else if state.guidance_visible {
            render_guidance(f, area);
        }
    }
}
