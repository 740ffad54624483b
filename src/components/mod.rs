//! Reusable UI components
//!
//! - `keybindings` - Focus-aware key registry (dispatch, nav bar, help)
//! - `nav_bar` - Bottom navigation hints
//! - `help_overlay` - Context help popup
//! - `guidance` - Experience blueprint popup

pub mod guidance;
pub mod help_overlay;
pub mod keybindings;
pub mod nav_bar;

use ratatui::layout::Rect;

/// A rectangle centered in `parent`, sized by percentage and clamped to bounds
pub fn centered_rect(
    parent: Rect,
    width_percent: u16,
    height_percent: u16,
    min: (u16, u16),
    max: (u16, u16),
) -> Rect {
    let width = (parent.width * width_percent / 100)
        .clamp(min.0, max.0)
        .min(parent.width);
    let height = (parent.height * height_percent / 100)
        .clamp(min.1, max.1)
        .min(parent.height);

    Rect {
        x: parent.x + (parent.width - width) / 2,
        y: parent.y + (parent.height - height) / 2,
        width,
        height,
    }
}
