//! Rendering: map the launcher model to ratatui widgets.
//!
//! Layout is computed separately from drawing so the event loop can
//! hit-test mouse clicks against the same rectangles that were drawn.

use ratatui::layout::{Constraint, Layout, Margin, Position, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs, Wrap};
use ratatui::Frame;
use rust_deck_core::focus::Focus;
use rust_deck_core::tabs::TabDisplay;

use super::controller::App;
use super::theme::Theme;

pub const HELP_TEXT: &str = "Ctrl-N/Ctrl-P: switch focus | Enter: run command | q: quit | \
/: filter output | Ctrl-L: refresh | Ctrl-Left/Right: switch tab | Tab: complete";
pub const VIEWPORT_PLACEHOLDER: &str = "Output will be displayed here...";
pub const INPUT_PLACEHOLDER: &str = "Type a command...";
pub const SELECTOR_TITLE: &str = "Commands";

/// Input pane height: one text row plus its border.
const INPUT_HEIGHT: u16 = 3;
const HELP_HEIGHT: u16 = 2;

/// Screen rectangles of every pane in the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneAreas {
    pub tab_bar: Option<Rect>,
    pub selector: Rect,
    pub viewport: Rect,
    pub input: Rect,
    pub help: Option<Rect>,
}

/// Lays out the panes inside `area` using the configured pane sizes.
///
/// Panes are clipped when the terminal is smaller than the configured sizes.
#[must_use]
pub fn compute_layout(area: Rect, app: &App) -> PaneAreas {
    let area = area.inner(Margin::new(2, 1));
    let show_tabs = app.tabs.len() > 1;
    let body_height = app
        .list
        .height
        .max(app.viewport.height.saturating_add(INPUT_HEIGHT));

    let rows = Layout::vertical([
        Constraint::Length(u16::from(show_tabs)),
        Constraint::Length(body_height),
        Constraint::Length(if app.show_help { HELP_HEIGHT } else { 0 }),
        Constraint::Min(0),
    ])
    .split(area);

    let columns = Layout::horizontal([
        Constraint::Length(app.list.width),
        Constraint::Length(app.viewport.width),
        Constraint::Min(0),
    ])
    .split(rows[1]);

    let right = Layout::vertical([
        Constraint::Length(app.viewport.height),
        Constraint::Length(INPUT_HEIGHT),
        Constraint::Min(0),
    ])
    .split(columns[1]);

    let selector = Rect {
        height: columns[0].height.min(app.list.height),
        ..columns[0]
    };
    let input = Rect {
        width: right[1].width.min(app.textinput.width.saturating_add(2)),
        ..right[1]
    };

    PaneAreas {
        tab_bar: show_tabs.then_some(rows[0]),
        selector,
        viewport: right[0],
        input,
        help: app.show_help.then_some(rows[2]),
    }
}

/// Draws the whole launcher.
pub fn render(app: &App, theme: &Theme, frame: &mut Frame) {
    let areas = compute_layout(frame.area(), app);
    let focus = app.focus.focus();

    if let Some(area) = areas.tab_bar {
        frame.render_widget(render_tab_bar(app, theme), area);
    }

    let selector_rows = usize::from(areas.selector.height.saturating_sub(2));
    frame.render_widget(
        render_selector(app, theme, focus == Focus::Selector, selector_rows),
        areas.selector,
    );
    let viewport_rows = usize::from(areas.viewport.height.saturating_sub(2));
    frame.render_widget(
        render_viewport(app, theme, focus == Focus::Viewport, viewport_rows),
        areas.viewport,
    );

    let inner_input = areas.input.inner(Margin::new(1, 1));
    let input_scroll = input_scroll(app.input.caret(), inner_input.width);
    frame.render_widget(
        render_input(app, theme, focus == Focus::Input, input_scroll),
        areas.input,
    );

    if focus == Focus::Input && inner_input.width > 0 {
        let caret = u16::try_from(app.input.caret()).unwrap_or(u16::MAX);
        let x = inner_input.x.saturating_add(caret.saturating_sub(input_scroll));
        frame.set_cursor_position(Position::new(x, inner_input.y));
    }

    if let Some(area) = areas.help {
        let help = Paragraph::new(Span::styled(HELP_TEXT, theme.help)).wrap(Wrap { trim: true });
        frame.render_widget(help, area);
    }
}

/// Renders one row of the command selector.
#[must_use]
pub fn render_selector_row(text: &str, is_selected: bool, theme: &Theme) -> Line<'static> {
    let style = if is_selected {
        theme.active_row
    } else {
        theme.inactive_row
    };
    Line::from(Span::styled(format!(" {text} "), style))
}

fn pane_block<'a>(title: impl Into<Line<'a>>, focused: bool, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(if focused {
            theme.focused_border
        } else {
            theme.normal_border
        })
        .title(title)
}

fn render_tab_bar<'a>(app: &'a App, theme: &Theme) -> Tabs<'a> {
    Tabs::new(app.tabs.iter().map(|tab| tab.label()))
        .select(app.tabs.active_index())
        .style(theme.inactive_tab)
        .highlight_style(theme.active_tab)
}

fn render_selector(app: &App, theme: &Theme, focused: bool, rows: usize) -> Paragraph<'static> {
    let lines: Vec<Line> = app
        .commands
        .iter()
        .enumerate()
        .skip(app.selector.offset)
        .take(rows)
        .map(|(index, command)| {
            render_selector_row(
                &command.to_string(),
                index == app.selector.selected_index,
                theme,
            )
        })
        .collect();

    Paragraph::new(lines).block(pane_block(SELECTOR_TITLE, focused, theme))
}

fn render_viewport<'a>(app: &'a App, theme: &Theme, focused: bool, rows: usize) -> Paragraph<'a> {
    let tab = app.tabs.active();
    let title = match tab.display() {
        TabDisplay::Log => tab.label().to_string(),
        TabDisplay::Filtered(_) => format!("{} (filtered, Ctrl-L to restore)", tab.label()),
    };

    // Only the visible slice is handed to ratatui, whose scroll offset is a u16.
    let text = if tab.log().is_empty() && matches!(tab.display(), TabDisplay::Log) {
        Text::from(Span::styled(VIEWPORT_PLACEHOLDER, theme.placeholder))
    } else {
        Text::from_iter(tab.visible_lines(rows))
    };

    Paragraph::new(text).block(pane_block(title, focused, theme))
}

fn render_input<'a>(app: &'a App, theme: &Theme, focused: bool, scroll: u16) -> Paragraph<'a> {
    let title = match app.focus.prompt() {
        Some(prompt) => format!("Argument for {}", prompt.pending_command),
        None => "Input".to_string(),
    };

    let text = if app.input.is_empty() {
        Line::from(Span::styled(INPUT_PLACEHOLDER, theme.placeholder))
    } else {
        Line::from(app.input.value())
    };

    Paragraph::new(text)
        .block(pane_block(title, focused, theme))
        .scroll((0, scroll))
}

/// Horizontal scroll that keeps the caret inside a field `width` columns wide.
fn input_scroll(caret: usize, width: u16) -> u16 {
    let caret = u16::try_from(caret).unwrap_or(u16::MAX);
    caret.saturating_sub(width.saturating_sub(1))
}
