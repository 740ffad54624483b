//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change based on the focused panel.
//! The registry is used both for dispatching key events and for the nav bar
//! and help overlay.

use crate::app::Focus;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    NavigateUp,
    NavigateDown,
    PreviousContract,
    NextContract,
    Toggle,
    NextPanel,
    PreviousPanel,
    EditStartDate,
    EditEndDate,
    ClearOverride,
    CycleTagFilter,
    ScrollUp,
    ScrollDown,
    Guidance,
    Help,
    Quit,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Whether `event` triggers this binding. Shift is ignored because it is
    /// already folded into the key code (`BackTab`, upper-case chars).
    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.key == event.code && event.modifiers.difference(KeyModifiers::SHIFT) == self.modifiers
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Panel-specific keybindings
    focus_bindings: HashMap<Focus, Vec<Keybinding>>,
    /// Global keybindings (available in every panel)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            focus_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    /// Register default keybindings for all panels
    fn register_defaults(&mut self) {
        self.global_bindings = vec![
            Keybinding::new(KeyCode::Tab, KeyAction::NextPanel, "Tab", "Next panel"),
            Keybinding::new(KeyCode::BackTab, KeyAction::PreviousPanel, "S-Tab", "Previous panel"),
            Keybinding::new(KeyCode::Char('g'), KeyAction::Guidance, "G", "Experience blueprint"),
            Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
            Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
            Keybinding::new(KeyCode::Esc, KeyAction::Quit, "Esc", "Quit"),
            Keybinding::with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                KeyAction::Quit,
                "Ctrl+C",
                "Quit",
            ),
        ];

        let list_nav = || {
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Navigate up"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Navigate down"),
            ]
        };

        // Step 1
        let mut common = list_nav();
        common.extend([
            Keybinding::new(KeyCode::Char(' '), KeyAction::Toggle, "Space", "Toggle baseline price"),
            Keybinding::new(KeyCode::Enter, KeyAction::Toggle, "Enter", "Toggle baseline price"),
            Keybinding::new(KeyCode::Char('s'), KeyAction::EditStartDate, "S", "Edit start date"),
            Keybinding::new(KeyCode::Char('e'), KeyAction::EditEndDate, "E", "Edit end date"),
        ]);
        self.focus_bindings.insert(Focus::CommonData, common);

        // Step 2
        let mut contracts = list_nav();
        contracts.extend([
            Keybinding::new(KeyCode::Char(' '), KeyAction::Toggle, "Space", "Select contract"),
            Keybinding::new(KeyCode::Enter, KeyAction::Toggle, "Enter", "Select contract"),
        ]);
        self.focus_bindings.insert(Focus::Contracts, contracts);

        // Step 3
        let mut allocation = list_nav();
        allocation.extend([
            Keybinding::new(KeyCode::Left, KeyAction::PreviousContract, "Left", "Previous contract"),
            Keybinding::new(KeyCode::Right, KeyAction::NextContract, "Right", "Next contract"),
            Keybinding::new(KeyCode::Char(' '), KeyAction::Toggle, "Space", "Toggle override price"),
            Keybinding::new(KeyCode::Enter, KeyAction::Toggle, "Enter", "Toggle override price"),
            Keybinding::new(KeyCode::Char('c'), KeyAction::ClearOverride, "C", "Clear override"),
            Keybinding::new(KeyCode::Char('t'), KeyAction::CycleTagFilter, "T", "Filter by tag"),
        ]);
        self.focus_bindings.insert(Focus::Allocation, allocation);

        // Step 4
        self.focus_bindings.insert(
            Focus::Payload,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::ScrollUp, "Up", "Scroll up"),
                Keybinding::new(KeyCode::Down, KeyAction::ScrollDown, "Down", "Scroll down"),
            ],
        );
    }

    /// Get keybindings for a panel (panel bindings first, then global bindings)
    pub fn get_bindings(&self, focus: Focus) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();
        if let Some(focus_bindings) = self.focus_bindings.get(&focus) {
            bindings.extend(focus_bindings.iter());
        }
        bindings.extend(self.global_bindings.iter());
        bindings
    }

    /// Resolve a key event to an action for the focused panel
    pub fn action_for(&self, focus: Focus, event: &KeyEvent) -> Option<KeyAction> {
        self.get_bindings(focus)
            .into_iter()
            .find(|b| b.matches(event))
            .map(|b| b.action)
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, focus: Focus) -> Vec<NavBarItem> {
        let bindings = self.get_bindings(focus);

        let priority_actions = match focus {
            Focus::CommonData => vec![
                KeyAction::NavigateUp,
                KeyAction::Toggle,
                KeyAction::EditStartDate,
                KeyAction::EditEndDate,
                KeyAction::NextPanel,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            Focus::Contracts => vec![
                KeyAction::NavigateUp,
                KeyAction::Toggle,
                KeyAction::NextPanel,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            Focus::Allocation => vec![
                KeyAction::NavigateUp,
                KeyAction::PreviousContract,
                KeyAction::Toggle,
                KeyAction::ClearOverride,
                KeyAction::CycleTagFilter,
                KeyAction::NextPanel,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            Focus::Payload => vec![
                KeyAction::ScrollUp,
                KeyAction::NextPanel,
                KeyAction::Help,
                KeyAction::Quit,
            ],
        };

        let mut items: Vec<NavBarItem> = Vec::new();
        for action in priority_actions {
            let Some(binding) = bindings.iter().find(|b| b.action == action) else {
                continue;
            };
            // Paired keys share one nav item
            let item = match action {
                KeyAction::NavigateUp => NavBarItem::new("Up/Dn", "Navigate"),
                KeyAction::ScrollUp => NavBarItem::new("Up/Dn", "Scroll"),
                KeyAction::PreviousContract => NavBarItem::new("Lt/Rt", "Contract"),
                _ => NavBarItem::new(&binding.display, &binding.description),
            };
            items.push(item);
        }

        items
    }

    /// Get full help content for a panel (for help overlay)
    pub fn get_help_content(&self, focus: Focus) -> Vec<HelpSection> {
        let groups: [(&str, fn(KeyAction) -> bool); 3] = [
            ("Navigation", |a| {
                matches!(
                    a,
                    KeyAction::NavigateUp
                        | KeyAction::NavigateDown
                        | KeyAction::PreviousContract
                        | KeyAction::NextContract
                        | KeyAction::ScrollUp
                        | KeyAction::ScrollDown
                        | KeyAction::NextPanel
                        | KeyAction::PreviousPanel
                )
            }),
            ("Actions", |a| {
                matches!(
                    a,
                    KeyAction::Toggle
                        | KeyAction::EditStartDate
                        | KeyAction::EditEndDate
                        | KeyAction::ClearOverride
                        | KeyAction::CycleTagFilter
                )
            }),
            ("General", |a| {
                matches!(a, KeyAction::Guidance | KeyAction::Help | KeyAction::Quit)
            }),
        ];

        let bindings = self.get_bindings(focus);
        groups
            .iter()
            .filter_map(|(title, belongs)| {
                let items: Vec<(String, String)> = bindings
                    .iter()
                    .filter(|b| belongs(b.action))
                    .map(|b| (b.display.clone(), b.description.clone()))
                    .collect();
                (!items.is_empty()).then(|| HelpSection {
                    title: title.to_string(),
                    items,
                })
            })
            .collect()
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone, PartialEq)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

impl NavBarItem {
    fn new(key_display: &str, action_label: &str) -> Self {
        Self {
            key_display: key_display.to_string(),
            action_label: action_label.to_string(),
        }
    }
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_space_toggles_in_every_interactive_panel() {
        let ctx = KeybindingContext::new();
        for focus in [Focus::CommonData, Focus::Contracts, Focus::Allocation] {
            assert_eq!(
                ctx.action_for(focus, &key(KeyCode::Char(' '))),
                Some(KeyAction::Toggle)
            );
        }
        assert_eq!(ctx.action_for(Focus::Payload, &key(KeyCode::Char(' '))), None);
    }

    #[test]
    fn test_panel_specific_bindings() {
        let ctx = KeybindingContext::new();
        assert_eq!(
            ctx.action_for(Focus::Allocation, &key(KeyCode::Char('c'))),
            Some(KeyAction::ClearOverride)
        );
        assert_eq!(ctx.action_for(Focus::Contracts, &key(KeyCode::Char('c'))), None);
        assert_eq!(
            ctx.action_for(Focus::Payload, &key(KeyCode::Down)),
            Some(KeyAction::ScrollDown)
        );
    }

    #[test]
    fn test_modifiers_are_respected() {
        let ctx = KeybindingContext::new();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(ctx.action_for(Focus::Allocation, &ctrl_c), Some(KeyAction::Quit));

        let back_tab = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(
            ctx.action_for(Focus::Contracts, &back_tab),
            Some(KeyAction::PreviousPanel)
        );
    }

    #[test]
    fn test_nav_items_combine_pairs() {
        let ctx = KeybindingContext::new();
        let items = ctx.get_nav_items(Focus::Allocation);
        assert_eq!(items[0], NavBarItem::new("Up/Dn", "Navigate"));
        assert_eq!(items[1], NavBarItem::new("Lt/Rt", "Contract"));
        assert!(items.iter().any(|i| i.action_label == "Clear override"));
    }

    #[test]
    fn test_help_content_sections() {
        let ctx = KeybindingContext::new();
        let sections = ctx.get_help_content(Focus::CommonData);
        let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Navigation", "Actions", "General"]);
    }
}
