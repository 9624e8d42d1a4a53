//! Type definitions for the launcher state machine.
//!
//! This module defines the semantic actions the event loop feeds into the
//! controller, the effects the controller asks the loop to perform, and the
//! selector list state.

use rust_deck_core::command_definitions::Invocation;
use rust_deck_core::focus::Focus;

/// Direction to move through a list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleDirection {
    Up,
    Down,
}

/// Semantic user action, decoupled from raw key and mouse events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Global
    Quit,
    ToggleHelp,
    NextFocus,
    PreviousFocus,
    NextTab,
    PreviousTab,
    Refresh,

    // Selector and viewport
    Move(CycleDirection),
    PageUp,
    PageDown,
    Top,
    Bottom,
    Filter,

    // Input
    Insert(char),
    Backspace,
    Delete,
    CaretLeft,
    CaretRight,
    CaretHome,
    CaretEnd,
    ClearInput,
    Complete,
    Cancel,

    /// Enter: run the selected command or submit the input line.
    Submit,

    // Pointer
    FocusPane(Focus),
    SelectRow(usize),
    ScrollViewport(CycleDirection),
}

/// Blocking work the event loop performs on behalf of the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    RunCommand(Invocation),
    FilterOutput,
}

/// Result of feeding one action to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Continue,
    Quit,
    Effect(Effect),
}

/// Selection and scroll offset of the command list.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct SelectorState {
    pub selected_index: usize,
    pub offset: usize,
}

impl SelectorState {
    /// Moves the selection one row, wrapping at both ends, and keeps it within `rows`.
    pub fn move_selection(&mut self, direction: CycleDirection, len: usize, rows: usize) {
        if len == 0 || rows == 0 {
            return;
        }

        match direction {
            CycleDirection::Up => {
                if self.selected_index == 0 {
                    self.selected_index = len - 1;
                    self.offset = self.selected_index.saturating_sub(rows - 1);
                } else {
                    self.selected_index -= 1;
                    if self.selected_index < self.offset {
                        self.offset = self.selected_index;
                    }
                }
            }
            CycleDirection::Down => {
                let new_index = (self.selected_index + 1) % len;
                if new_index < self.selected_index {
                    self.offset = 0;
                } else if new_index >= self.offset + rows {
                    self.offset = new_index + 1 - rows;
                }
                self.selected_index = new_index;
            }
        }
    }

    /// Scrolls just enough that the selection is within the first `rows` rows.
    pub fn keep_visible(&mut self, rows: usize) {
        if rows == 0 {
            return;
        }
        if self.selected_index < self.offset {
            self.offset = self.selected_index;
        } else if self.selected_index >= self.offset + rows {
            self.offset = self.selected_index + 1 - rows;
        }
    }

    /// Selects a row by its position among the visible rows.
    pub fn select_visible_row(&mut self, row: usize, len: usize) -> bool {
        let index = self.offset + row;
        if index < len {
            self.selected_index = index;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_down_wraps_to_top() {
        let mut state = SelectorState::default();
        for _ in 0..3 {
            state.move_selection(CycleDirection::Down, 3, 10);
        }
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.offset, 0);
    }

    #[test]
    fn test_move_up_wraps_to_bottom_and_scrolls() {
        let mut state = SelectorState::default();
        state.move_selection(CycleDirection::Up, 10, 4);
        assert_eq!(state.selected_index, 9);
        assert_eq!(state.offset, 6);
    }

    #[test]
    fn test_move_down_scrolls_past_visible_rows() {
        let mut state = SelectorState::default();
        for _ in 0..4 {
            state.move_selection(CycleDirection::Down, 10, 4);
        }
        assert_eq!(state.selected_index, 4);
        assert_eq!(state.offset, 1);
    }

    #[test]
    fn test_move_up_scrolls_back() {
        let mut state = SelectorState {
            selected_index: 4,
            offset: 4,
        };
        state.move_selection(CycleDirection::Up, 10, 4);
        assert_eq!(state.selected_index, 3);
        assert_eq!(state.offset, 3);
    }

    #[test]
    fn test_select_visible_row() {
        let mut state = SelectorState {
            selected_index: 0,
            offset: 2,
        };
        assert!(state.select_visible_row(1, 5));
        assert_eq!(state.selected_index, 3);
        assert!(!state.select_visible_row(7, 5));
        assert_eq!(state.selected_index, 3);
    }

    #[test]
    fn test_keep_visible_after_shrink() {
        let mut state = SelectorState {
            selected_index: 7,
            offset: 0,
        };
        state.keep_visible(3);
        assert_eq!(state.offset, 5);

        state.keep_visible(10);
        assert_eq!(state.offset, 5);
    }
}
