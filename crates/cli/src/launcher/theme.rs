//! Launcher color scheme.
//!
//! A `Theme` is built once when the launcher starts and handed to every
//! render call. Rendering never reaches for global style state.

use ratatui::style::{Color, Modifier, Style};

/// Styles used by the launcher panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Border of the pane holding focus.
    pub focused_border: Style,
    /// Border of every other pane.
    pub normal_border: Style,
    /// Highlighted row in the command selector.
    pub active_row: Style,
    /// Other rows in the command selector.
    pub inactive_row: Style,
    /// Selected label in the tab bar.
    pub active_tab: Style,
    /// Unselected labels in the tab bar.
    pub inactive_tab: Style,
    /// Placeholder text in empty panes.
    pub placeholder: Style,
    /// Help line below the panes.
    pub help: Style,
}

impl Default for Theme {
    fn default() -> Self {
        let accent = Color::Indexed(205);

        Self {
            focused_border: Style::new().fg(accent),
            normal_border: Style::new(),
            active_row: Style::new().fg(Color::Indexed(230)).bg(accent),
            inactive_row: Style::new().fg(Color::Indexed(62)),
            active_tab: Style::new().fg(accent).add_modifier(Modifier::BOLD),
            inactive_tab: Style::new().fg(Color::Indexed(241)),
            placeholder: Style::new().add_modifier(Modifier::DIM),
            help: Style::new().fg(Color::Indexed(241)),
        }
    }
}
