use std::io::Stdout;

use crossterm::event::{self, Event, KeyEventKind};
use log::debug;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout, Position};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use ratatui::{Frame, Terminal};
use rust_deck_core::error::Result;

use super::state::{map_picker_key, PickerAction, PickerState};
use crate::launcher::theme::Theme;

const PROMPT: &str = "> ";

/// Runs the picker over `lines` until a line is accepted or the picker is aborted.
///
/// Returns the index of the accepted line. Takes over the whole screen and
/// blocks the caller until it returns.
///
/// # Errors
///
/// Returns an error if drawing or reading terminal events fails.
pub fn pick_line(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    lines: &[String],
    theme: &Theme,
) -> Result<Option<usize>> {
    let mut state = PickerState::new(lines);

    loop {
        terminal.draw(|frame| render_picker(&state, theme, frame))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match map_picker_key(key) {
            Some(PickerAction::Accept) => {
                if let Some(index) = state.selected() {
                    debug!("Picked line {index} with query `{}`", state.query());
                    return Ok(Some(index));
                }
            }
            Some(PickerAction::Abort) => return Ok(None),
            Some(PickerAction::Push(c)) => state.push_char(c),
            Some(PickerAction::Pop) => state.pop_char(),
            Some(PickerAction::Up) => state.move_up(),
            Some(PickerAction::Down) => state.move_down(),
            None => {}
        }
    }
}

/// Draws the query line above the list of matches.
pub fn render_picker(state: &PickerState, theme: &Theme, frame: &mut Frame) {
    let [query_area, list_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(frame.area());

    let query = Line::from(vec![
        Span::styled(PROMPT, theme.focused_border),
        Span::raw(state.query()),
        Span::styled(
            format!("  {}/{}", state.match_count(), state.line_count()),
            theme.help,
        ),
    ]);
    frame.render_widget(query, query_area);

    let prompt_width =
        u16::try_from(PROMPT.len() + state.query().chars().count()).unwrap_or(u16::MAX);
    frame.set_cursor_position(Position::new(
        query_area.x.saturating_add(prompt_width),
        query_area.y,
    ));

    let items: Vec<ListItem> = state.matched_lines().map(ListItem::new).collect();
    let mut list_state = ListState::default();
    list_state.select(state.selected().map(|_| state.cursor()));

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.focused_border)
                .title("Filter output"),
        )
        .highlight_style(theme.active_row);

    frame.render_stateful_widget(list, list_area, &mut list_state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn draw(state: &PickerState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal
            .draw(|frame| render_picker(state, &Theme::default(), frame))
            .expect("render should not panic");
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol().to_string())
            .collect()
    }

    #[test]
    fn test_picker_shows_query_and_count() {
        let lines = vec!["alpha".to_string(), "beta".to_string()];
        let mut state = PickerState::new(&lines);
        state.push_char('b');

        let content = draw(&state);
        assert!(content.contains("> b"));
        assert!(content.contains("1/2"));
        assert!(content.contains("beta"));
        assert!(!content.contains("alpha"));
    }

    #[test]
    fn test_picker_renders_without_matches() {
        let lines = vec!["alpha".to_string()];
        let mut state = PickerState::new(&lines);
        state.push_char('z');
        assert!(draw(&state).contains("0/1"));
    }
}
