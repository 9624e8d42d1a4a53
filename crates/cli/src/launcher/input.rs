//! Mapping of raw crossterm events to launcher actions.
//!
//! Global bindings are checked first. `q` and `?` are only global outside
//! the input pane so they can still be typed there.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Margin, Position};
use rust_deck_core::focus::Focus;

use super::types::{Action, CycleDirection};
use super::ui::PaneAreas;

/// Map a key press to an action for the currently focused pane.
///
/// Returns None for keys that don't map to any action.
#[must_use]
pub fn map_key(key: KeyEvent, focus: Focus) -> Option<Action> {
    if let Some(action) = map_global_key(key, focus) {
        return Some(action);
    }

    match focus {
        Focus::Selector => map_selector_key(key),
        Focus::Viewport => map_viewport_key(key),
        Focus::Input => map_input_key(key),
    }
}

fn map_global_key(key: KeyEvent, focus: Focus) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('n') => Some(Action::NextFocus),
            KeyCode::Char('p') => Some(Action::PreviousFocus),
            KeyCode::Char('l') => Some(Action::Refresh),
            KeyCode::Right => Some(Action::NextTab),
            KeyCode::Left => Some(Action::PreviousTab),
            _ => None,
        };
    }

    match key.code {
        KeyCode::F(1) => Some(Action::ToggleHelp),
        KeyCode::Char('q') if focus != Focus::Input => Some(Action::Quit),
        KeyCode::Char('?') if focus != Focus::Input => Some(Action::ToggleHelp),
        _ => None,
    }
}

fn map_selector_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Move(CycleDirection::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Move(CycleDirection::Down)),
        KeyCode::Enter => Some(Action::Submit),
        _ => None,
    }
}

fn map_viewport_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Move(CycleDirection::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Move(CycleDirection::Down)),
        KeyCode::PageUp => Some(Action::PageUp),
        KeyCode::PageDown => Some(Action::PageDown),
        KeyCode::Home | KeyCode::Char('g') => Some(Action::Top),
        KeyCode::End | KeyCode::Char('G') => Some(Action::Bottom),
        KeyCode::Char('/') => Some(Action::Filter),
        _ => None,
    }
}

fn map_input_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('u') => Some(Action::ClearInput),
            KeyCode::Char('a') => Some(Action::CaretHome),
            KeyCode::Char('e') => Some(Action::CaretEnd),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Tab => Some(Action::Complete),
        KeyCode::Esc => Some(Action::Cancel),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Delete => Some(Action::Delete),
        KeyCode::Left => Some(Action::CaretLeft),
        KeyCode::Right => Some(Action::CaretRight),
        KeyCode::Home => Some(Action::CaretHome),
        KeyCode::End => Some(Action::CaretEnd),
        KeyCode::Char(c) => Some(Action::Insert(c)),
        _ => None,
    }
}

/// Map a mouse event to an action using the pane layout of the last frame.
#[must_use]
pub fn map_mouse(mouse: MouseEvent, areas: &PaneAreas) -> Option<Action> {
    let position = Position::new(mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if areas.selector.contains(position) {
                let rows = areas.selector.inner(Margin::new(1, 1));
                if rows.contains(position) {
                    return Some(Action::SelectRow(usize::from(position.y - rows.y)));
                }
                Some(Action::FocusPane(Focus::Selector))
            } else if areas.viewport.contains(position) {
                Some(Action::FocusPane(Focus::Viewport))
            } else if areas.input.contains(position) {
                Some(Action::FocusPane(Focus::Input))
            } else {
                None
            }
        }
        MouseEventKind::ScrollUp if areas.viewport.contains(position) => {
            Some(Action::ScrollViewport(CycleDirection::Up))
        }
        MouseEventKind::ScrollDown if areas.viewport.contains(position) => {
            Some(Action::ScrollViewport(CycleDirection::Down))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn areas() -> PaneAreas {
        PaneAreas {
            tab_bar: None,
            selector: Rect::new(0, 0, 20, 10),
            viewport: Rect::new(20, 0, 40, 7),
            input: Rect::new(20, 7, 40, 3),
            help: None,
        }
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        for focus in [Focus::Selector, Focus::Viewport, Focus::Input] {
            assert_eq!(map_key(ctrl('c'), focus), Some(Action::Quit));
        }
    }

    #[test]
    fn test_q_quits_outside_input_only() {
        let q = key(KeyCode::Char('q'));
        assert_eq!(map_key(q, Focus::Selector), Some(Action::Quit));
        assert_eq!(map_key(q, Focus::Viewport), Some(Action::Quit));
        assert_eq!(map_key(q, Focus::Input), Some(Action::Insert('q')));
    }

    #[test]
    fn test_focus_and_tab_bindings_are_global() {
        assert_eq!(map_key(ctrl('n'), Focus::Input), Some(Action::NextFocus));
        assert_eq!(map_key(ctrl('p'), Focus::Viewport), Some(Action::PreviousFocus));
        assert_eq!(map_key(ctrl('l'), Focus::Selector), Some(Action::Refresh));

        let next_tab = KeyEvent::new(KeyCode::Right, KeyModifiers::CONTROL);
        assert_eq!(map_key(next_tab, Focus::Input), Some(Action::NextTab));
        let previous_tab = KeyEvent::new(KeyCode::Left, KeyModifiers::CONTROL);
        assert_eq!(map_key(previous_tab, Focus::Selector), Some(Action::PreviousTab));
    }

    #[test]
    fn test_slash_filters_only_in_viewport() {
        let slash = key(KeyCode::Char('/'));
        assert_eq!(map_key(slash, Focus::Viewport), Some(Action::Filter));
        assert_eq!(map_key(slash, Focus::Selector), None);
        assert_eq!(map_key(slash, Focus::Input), Some(Action::Insert('/')));
    }

    #[test]
    fn test_tab_key_completes_in_input() {
        assert_eq!(map_key(key(KeyCode::Tab), Focus::Input), Some(Action::Complete));
        assert_eq!(map_key(key(KeyCode::Tab), Focus::Selector), None);
    }

    #[test]
    fn test_enter_submits_in_selector_and_input() {
        assert_eq!(map_key(key(KeyCode::Enter), Focus::Selector), Some(Action::Submit));
        assert_eq!(map_key(key(KeyCode::Enter), Focus::Input), Some(Action::Submit));
        assert_eq!(map_key(key(KeyCode::Enter), Focus::Viewport), None);
    }

    #[test]
    fn test_click_focuses_pane() {
        assert_eq!(
            map_mouse(click(30, 3), &areas()),
            Some(Action::FocusPane(Focus::Viewport))
        );
        assert_eq!(
            map_mouse(click(30, 8), &areas()),
            Some(Action::FocusPane(Focus::Input))
        );
        assert_eq!(map_mouse(click(70, 3), &areas()), None);
    }

    #[test]
    fn test_click_on_selector_row() {
        assert_eq!(map_mouse(click(5, 3), &areas()), Some(Action::SelectRow(2)));
        assert_eq!(
            map_mouse(click(0, 0), &areas()),
            Some(Action::FocusPane(Focus::Selector))
        );
    }

    #[test]
    fn test_wheel_over_viewport_scrolls() {
        let wheel = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 25,
            row: 2,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(
            map_mouse(wheel, &areas()),
            Some(Action::ScrollViewport(CycleDirection::Down))
        );
    }
}
