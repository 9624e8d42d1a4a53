use std::cmp::Reverse;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use itertools::Itertools;

/// What a key press means to the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerAction {
    Push(char),
    Pop,
    Up,
    Down,
    Accept,
    Abort,
}

#[must_use]
pub fn map_picker_key(key: KeyEvent) -> Option<PickerAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(PickerAction::Abort),
            KeyCode::Char('p') => Some(PickerAction::Up),
            KeyCode::Char('n') => Some(PickerAction::Down),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(PickerAction::Abort),
        KeyCode::Enter => Some(PickerAction::Accept),
        KeyCode::Up => Some(PickerAction::Up),
        KeyCode::Down => Some(PickerAction::Down),
        KeyCode::Backspace => Some(PickerAction::Pop),
        KeyCode::Char(c) => Some(PickerAction::Push(c)),
        _ => None,
    }
}

/// Query and match list of an open picker.
///
/// `matches` holds indexes into `lines`, best match first.
pub struct PickerState<'a> {
    lines: &'a [String],
    matcher: SkimMatcherV2,
    query: String,
    matches: Vec<usize>,
    cursor: usize,
}

impl<'a> PickerState<'a> {
    #[must_use]
    pub fn new(lines: &'a [String]) -> Self {
        let mut state = Self {
            lines,
            matcher: SkimMatcherV2::default(),
            query: String::new(),
            matches: Vec::new(),
            cursor: 0,
        };
        state.refresh_matches();
        state
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Matching lines, best first.
    pub fn matched_lines(&self) -> impl Iterator<Item = &'a str> + '_ {
        let lines = self.lines;
        self.matches.iter().map(move |&index| lines[index].as_str())
    }

    #[must_use]
    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// Index into the original lines of the highlighted match.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.matches.get(self.cursor).copied()
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.refresh_matches();
    }

    pub fn pop_char(&mut self) {
        if self.query.pop().is_some() {
            self.refresh_matches();
        }
    }

    pub fn move_up(&mut self) {
        if self.matches.is_empty() {
            return;
        }
        self.cursor = self.cursor.checked_sub(1).unwrap_or(self.matches.len() - 1);
    }

    pub fn move_down(&mut self) {
        if self.matches.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.matches.len();
    }

    fn refresh_matches(&mut self) {
        self.matches = if self.query.is_empty() {
            (0..self.lines.len()).collect()
        } else {
            // Stable sort keeps equal scores in their original order.
            self.lines
                .iter()
                .enumerate()
                .filter_map(|(index, line)| {
                    self.matcher
                        .fuzzy_match(line, &self.query)
                        .map(|score| (index, score))
                })
                .sorted_by_key(|&(_, score)| Reverse(score))
                .map(|(index, _)| index)
                .collect()
        };
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_empty_query_lists_every_line() {
        let lines = lines(&["x", "y", "z", ""]);
        let state = PickerState::new(&lines);
        assert_eq!(state.matched_lines().collect::<Vec<_>>(), vec!["x", "y", "z", ""]);
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_query_narrows_by_subsequence() {
        let lines = lines(&["cargo build", "git status", "cargo test"]);
        let mut state = PickerState::new(&lines);
        for c in "cgo".chars() {
            state.push_char(c);
        }
        let matched: Vec<_> = state.matched_lines().collect();
        assert_eq!(matched.len(), 2);
        assert!(matched.iter().all(|line| line.starts_with("cargo")));
    }

    #[test]
    fn test_equal_scores_keep_original_order() {
        let lines = lines(&["y one", "x", "y two"]);
        let mut state = PickerState::new(&lines);
        state.push_char('y');
        assert_eq!(state.matched_lines().collect::<Vec<_>>(), vec!["y one", "y two"]);
    }

    #[test]
    fn test_better_match_ranks_first() {
        let lines = lines(&["s_t_a_t_u_s", "status"]);
        let mut state = PickerState::new(&lines);
        for c in "status".chars() {
            state.push_char(c);
        }
        assert_eq!(state.selected(), Some(1));
    }

    #[test]
    fn test_no_matches_selects_nothing() {
        let lines = lines(&["abc"]);
        let mut state = PickerState::new(&lines);
        state.push_char('q');
        assert_eq!(state.match_count(), 0);
        assert_eq!(state.selected(), None);
        state.move_down();
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_cursor_wraps() {
        let lines = lines(&["a", "b", "c"]);
        let mut state = PickerState::new(&lines);
        state.move_up();
        assert_eq!(state.selected(), Some(2));
        state.move_down();
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_pop_char_widens_matches() {
        let lines = lines(&["alpha", "beta"]);
        let mut state = PickerState::new(&lines);
        state.push_char('l');
        assert_eq!(state.match_count(), 1);
        state.pop_char();
        assert_eq!(state.match_count(), 2);
        assert_eq!(state.query(), "");
    }

    #[test]
    fn test_key_mapping() {
        let plain = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(map_picker_key(plain(KeyCode::Esc)), Some(PickerAction::Abort));
        assert_eq!(map_picker_key(plain(KeyCode::Enter)), Some(PickerAction::Accept));
        assert_eq!(
            map_picker_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(PickerAction::Abort)
        );
        assert_eq!(
            map_picker_key(plain(KeyCode::Char('q'))),
            Some(PickerAction::Push('q'))
        );
    }
}
