//! Centralized theme and styling for the TUI
//!
//! Single source of truth for the colors, styles, and copy used by the
//! wizard panels.
//!
//! # Usage
//! ```rust
//! use agreetui::theme::{Colors, Styles, Theme};
//! use agreetui::wizard::StepStatus;
//! use ratatui::style::Style;
//!
//! let style = Style::default().fg(Colors::PRIMARY);
//! let chip = Styles::chip(true);
//! let step = Theme::step_style(StepStatus::Active);
//! ```

use ratatui::style::{Color, Modifier, Style};

use crate::wizard::StepStatus;

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
pub struct Colors;

impl Colors {
    /// Panel and dialog background
    pub const BG_PRIMARY: Color = Color::Rgb(20, 20, 30);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary/muted text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    /// Primary accent color - used for borders, titles, highlights
    pub const PRIMARY: Color = Color::Cyan;

    /// Secondary accent color - eyebrows and emphasis
    pub const SECONDARY: Color = Color::Yellow;

    pub const SUCCESS: Color = Color::Green;
    pub const WARNING: Color = Color::Yellow;
    pub const ERROR: Color = Color::Red;

    /// Focused panel border
    pub const BORDER_ACTIVE: Color = Color::Cyan;

    /// Unfocused panel border
    pub const BORDER_INACTIVE: Color = Color::DarkGray;

    /// Cursor row highlight
    pub const SELECTED_BG: Color = Color::Yellow;

    /// Cursor row text (for contrast on yellow bg)
    pub const SELECTED_FG: Color = Color::Black;

    /// Selected price chip / checked contract card
    pub const CHIP_ON: Color = Color::LightGreen;

    /// Unselected price chip
    pub const CHIP_OFF: Color = Color::Gray;

    /// Region and tag pills
    pub const PILL: Color = Color::LightBlue;

    /// Contracts carrying an override
    pub const OVERRIDE: Color = Color::Magenta;

    /// JSON preview text
    pub const JSON: Color = Color::LightYellow;

    /// Navigation hint color
    pub const NAV_HINT: Color = Color::DarkGray;

    pub const STEP_ACTIVE: Color = Color::Yellow;
    pub const STEP_COMPLETE: Color = Color::Green;
    pub const STEP_PENDING: Color = Color::Gray;
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Pre-built styles for common UI patterns
pub struct Styles;

impl Styles {
    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Muted/secondary text
    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    pub fn text_secondary() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    /// Main title style (cyan, bold)
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Small uppercase-ish label above a heading ("Step 1", regions)
    pub fn eyebrow() -> Style {
        Style::default()
            .fg(Colors::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border(focused: bool) -> Style {
        if focused {
            Style::default().fg(Colors::BORDER_ACTIVE)
        } else {
            Style::default().fg(Colors::BORDER_INACTIVE)
        }
    }

    /// Cursor row
    pub fn selected() -> Style {
        Style::default()
            .fg(Colors::SELECTED_FG)
            .bg(Colors::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Price chip or contract card, on or off
    pub fn chip(on: bool) -> Style {
        if on {
            Style::default()
                .fg(Colors::CHIP_ON)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Colors::CHIP_OFF)
        }
    }

    pub fn pill() -> Style {
        Style::default().fg(Colors::PILL)
    }

    pub fn override_marker() -> Style {
        Style::default()
            .fg(Colors::OVERRIDE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn json() -> Style {
        Style::default().fg(Colors::JSON)
    }

    /// Navigation hint (keybindings)
    pub fn nav_hint() -> Style {
        Style::default().fg(Colors::NAV_HINT)
    }

    pub fn success() -> Style {
        Style::default().fg(Colors::SUCCESS)
    }

    pub fn warning() -> Style {
        Style::default().fg(Colors::WARNING)
    }

    pub fn error() -> Style {
        Style::default().fg(Colors::ERROR)
    }
}

// =============================================================================
// THEME CONTEXT
// =============================================================================

/// Theme context providing semantic style lookups
pub struct Theme;

impl Theme {
    /// Style for a stepper entry
    pub fn step_style(status: StepStatus) -> Style {
        match status {
            StepStatus::Complete => Style::default().fg(Colors::STEP_COMPLETE),
            StepStatus::Active => Style::default()
                .fg(Colors::STEP_ACTIVE)
                .add_modifier(Modifier::BOLD),
            StepStatus::Pending => Style::default().fg(Colors::STEP_PENDING),
        }
    }

    /// Checkbox glyph for a toggle
    pub fn checkbox(on: bool) -> &'static str {
        if on { "[x]" } else { "[ ]" }
    }
}

// =============================================================================
// TEXT CONSTANTS
// =============================================================================

/// Panel copy
pub struct UiText;

impl UiText {
    pub const EYEBROW: &'static str = "Multiple agreements";
    pub const HEADLINE: &'static str = "Design a guided creation flow for per-contract prices";
    pub const COMMON_LEDE: &'static str =
        "Everything captured here cascades to every contract unless overridden later.";
    pub const CONTRACTS_LEDE: &'static str =
        "Multi-select contracts to branch off agreements. Inherit all common data by default.";
    pub const ALLOCATION_LEDE: &'static str =
        "Override prices where needed. Overrides are kept per contract for the API payload.";
    pub const REVIEW_LEDE: &'static str =
        "Export-ready payload with clear separation of common data and overrides.";
    pub const VERBATIM_HELP: &'static str =
        "Verbatim resolution: a contract without an override sends no prices.";
    pub const DELTA_HELP: &'static str =
        "Delta resolution: unselected prices fall back to the common selection.";
    pub const EXPLICIT_HELP: &'static str =
        "Explicit override: exactly the checked prices are sent for this contract.";
    pub const NO_CONTRACTS: &'static str = "Select contracts in step 2 to allocate prices.";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_styles_differ() {
        assert_ne!(
            Theme::step_style(StepStatus::Active),
            Theme::step_style(StepStatus::Pending)
        );
    }

    #[test]
    fn test_chip_styles() {
        assert_eq!(Styles::chip(true).fg, Some(Colors::CHIP_ON));
        assert_eq!(Styles::chip(false).fg, Some(Colors::CHIP_OFF));
    }

    #[test]
    fn test_checkbox() {
        assert_eq!(Theme::checkbox(true), "[x]");
        assert_eq!(Theme::checkbox(false), "[ ]");
    }
}
