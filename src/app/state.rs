//! Application state definitions
//!
//! View state only: which panel has focus, cursor positions, overlays, and
//! the status line. Agreement data lives in the selection store.

use crate::input::DateInput;

/// Panel that receives navigation and toggle keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Focus {
    /// Step 1 - baseline prices and dates
    CommonData,
    /// Step 2 - contract selection
    Contracts,
    /// Step 3 - per-contract price overrides
    Allocation,
    /// Step 4 - payload preview (scroll only)
    Payload,
}

impl Focus {
    const ORDER: [Focus; 4] = [
        Focus::CommonData,
        Focus::Contracts,
        Focus::Allocation,
        Focus::Payload,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            Focus::CommonData => "Common data",
            Focus::Contracts => "Contracts",
            Focus::Allocation => "Price allocation",
            Focus::Payload => "Payload",
        }
    }
}

/// Main application view state
#[derive(Debug, Clone)]
pub struct AppState {
    pub focus: Focus,
    /// Cursor in the baseline price list
    pub common_cursor: usize,
    /// Cursor in the contract list
    pub contract_cursor: usize,
    /// Index into the selected contracts of the card being edited
    pub allocation_contract: usize,
    /// Cursor in the (tag-filtered) allocation price list
    pub allocation_cursor: usize,
    /// Index into the catalog's tags; `None` shows every price
    pub tag_filter: Option<usize>,
    /// First visible line of the payload preview
    pub payload_scroll: u16,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Whether the experience-blueprint overlay is visible
    pub guidance_visible: bool,
    /// Open date input dialog
    pub date_input: Option<DateInput>,
    /// Status message for user feedback
    pub status_message: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            focus: Focus::Allocation,
            common_cursor: 0,
            contract_cursor: 0,
            allocation_contract: 0,
            allocation_cursor: 0,
            tag_filter: None,
            payload_scroll: 0,
            help_visible: false,
            guidance_visible: false,
            date_input: None,
            status_message: "Tab switches panels, Space toggles, ? for help".to_string(),
        }
    }
}

impl AppState {
    /// Whether an overlay or dialog is capturing input
    pub fn is_modal(&self) -> bool {
        self.date_input.is_some() || self.help_visible || self.guidance_visible
    }

    /// Advance the tag filter: all prices, then each tag in turn
    pub fn cycle_tag_filter(&mut self, tag_count: usize) {
        self.tag_filter = match self.tag_filter {
            None if tag_count > 0 => Some(0),
            Some(i) if i + 1 < tag_count => Some(i + 1),
            _ => None,
        };
        self.allocation_cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycles_both_ways() {
        assert_eq!(Focus::CommonData.next(), Focus::Contracts);
        assert_eq!(Focus::Payload.next(), Focus::CommonData);
        assert_eq!(Focus::CommonData.previous(), Focus::Payload);
        assert_eq!(Focus::Allocation.previous(), Focus::Contracts);
    }

    #[test]
    fn test_default_focus_matches_active_step() {
        let state = AppState::default();
        assert_eq!(state.focus, Focus::Allocation);
        assert!(!state.is_modal());
    }

    #[test]
    fn test_cycle_tag_filter_wraps_to_all() {
        let mut state = AppState {
            allocation_cursor: 2,
            ..Default::default()
        };
        state.cycle_tag_filter(2);
        assert_eq!(state.tag_filter, Some(0));
        assert_eq!(state.allocation_cursor, 0);
        state.cycle_tag_filter(2);
        assert_eq!(state.tag_filter, Some(1));
        state.cycle_tag_filter(2);
        assert_eq!(state.tag_filter, None);
    }

    #[test]
    fn test_cycle_tag_filter_without_tags() {
        let mut state = AppState::default();
        state.cycle_tag_filter(0);
        assert_eq!(state.tag_filter, None);
    }
}
