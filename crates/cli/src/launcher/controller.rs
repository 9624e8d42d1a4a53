//! Interaction controller: `(App, Action) → Transition`.
//!
//! Global actions are handled first, regardless of focus. Everything else is
//! dispatched to the focused pane only. Running a command and opening the
//! fuzzy filter block the loop, so they are returned as effects for the loop
//! to perform rather than executed here.

use log::debug;
use rust_deck_core::command_definitions::{
    CommandSpec, InputDimensions, Invocation, LauncherConfig, PaneDimensions,
};
use rust_deck_core::completion::CompletionCursor;
use rust_deck_core::error::Result;
use rust_deck_core::execution;
use rust_deck_core::focus::{Focus, FocusState};
use rust_deck_core::tabs::TabSet;

use super::text_input::TextInput;
use super::types::{Action, CycleDirection, Effect, SelectorState, Transition};

/// Lines scrolled per mouse wheel notch.
const WHEEL_STEP: isize = 3;

/// Top-level launcher model, owned by the event loop.
#[derive(Debug)]
pub struct App {
    pub commands: Vec<CommandSpec>,
    pub focus: FocusState,
    pub tabs: TabSet,
    pub selector: SelectorState,
    pub input: TextInput,
    pub completion: CompletionCursor,
    pub show_help: bool,
    pub viewport: PaneDimensions,
    pub list: PaneDimensions,
    pub textinput: InputDimensions,
    /// Text rows of the viewport and selector as last laid out on screen.
    viewport_rows: usize,
    selector_rows: usize,
}

impl App {
    /// # Errors
    ///
    /// Returns an error if the config names no tabs.
    pub fn new(config: &LauncherConfig) -> Result<Self> {
        Ok(Self {
            commands: config.commands.clone(),
            focus: FocusState::default(),
            tabs: TabSet::new(&config.tabs)?,
            selector: SelectorState::default(),
            input: TextInput::default(),
            completion: CompletionCursor::new(config.completions.clone()),
            show_help: false,
            viewport: config.viewport,
            list: config.list,
            textinput: config.textinput,
            viewport_rows: usize::from(config.viewport.height.saturating_sub(2)),
            selector_rows: usize::from(config.list.height.saturating_sub(2)),
        })
    }

    /// Text rows inside the viewport border.
    #[must_use]
    pub fn viewport_rows(&self) -> usize {
        self.viewport_rows
    }

    /// Command rows inside the selector border.
    #[must_use]
    pub fn selector_rows(&self) -> usize {
        self.selector_rows
    }

    /// Adopts the pane heights the terminal actually has room for.
    ///
    /// Panes are clipped when the terminal is smaller than configured. A tab
    /// that was showing the end of its log keeps showing it, and the selected
    /// command stays visible.
    pub fn fit_panes(&mut self, viewport_height: u16, selector_height: u16) {
        let viewport_rows = usize::from(viewport_height.saturating_sub(2));
        let selector_rows = usize::from(selector_height.saturating_sub(2));

        if viewport_rows != self.viewport_rows {
            debug!("Viewport rows {} -> {}", self.viewport_rows, viewport_rows);
            let old_rows = self.viewport_rows;
            for tab in self.tabs.iter_mut() {
                if tab.is_at_bottom(old_rows) {
                    tab.scroll_to_bottom(viewport_rows);
                } else {
                    tab.scroll_by(0, viewport_rows);
                }
            }
            self.viewport_rows = viewport_rows;
        }

        if selector_rows != self.selector_rows {
            self.selector_rows = selector_rows;
            self.selector.keep_visible(selector_rows);
        }
    }

    #[must_use]
    pub fn selected_command(&self) -> Option<&CommandSpec> {
        self.commands.get(self.selector.selected_index)
    }

    /// Runs an invocation into the active tab. Blocks until the child exits.
    pub fn run_invocation(&mut self, invocation: &Invocation) {
        let rows = self.viewport_rows();
        execution::run_in_tab(invocation, self.tabs.active_mut(), rows);
    }

    /// Lines of the active tab's log, as offered to the fuzzy filter.
    #[must_use]
    pub fn filter_lines(&self) -> Vec<String> {
        self.tabs
            .active()
            .log()
            .lines()
            .into_iter()
            .map(ToString::to_string)
            .collect()
    }

    /// Shows the picked line in the active viewport. `None` means the filter was aborted.
    pub fn apply_filter_selection(&mut self, line: Option<String>) {
        match line {
            Some(line) => self.tabs.active_mut().show_filtered(line),
            None => debug!("Filter aborted"),
        }
    }

    fn reset_input(&mut self) {
        self.input.clear();
        self.completion.reset();
    }

    fn scroll_viewport(&mut self, delta: isize) {
        let rows = self.viewport_rows();
        self.tabs.active_mut().scroll_by(delta, rows);
    }
}

/// Applies one action to the model.
pub fn update(app: &mut App, action: &Action) -> Transition {
    match action {
        Action::Quit => return Transition::Quit,
        Action::ToggleHelp => app.show_help = !app.show_help,
        Action::NextFocus => app.focus.cycle_next(),
        Action::PreviousFocus => app.focus.cycle_previous(),
        Action::NextTab => app.tabs.next(),
        Action::PreviousTab => app.tabs.previous(),
        Action::Refresh => {
            let rows = app.viewport_rows();
            app.tabs.active_mut().refresh(rows);
        }
        Action::FocusPane(pane) => app.focus.click(*pane),
        Action::SelectRow(row) => {
            app.focus.click(Focus::Selector);
            if app.focus.focus() == Focus::Selector {
                let len = app.commands.len();
                app.selector.select_visible_row(*row, len);
            }
        }
        Action::ScrollViewport(CycleDirection::Up) => app.scroll_viewport(-WHEEL_STEP),
        Action::ScrollViewport(CycleDirection::Down) => app.scroll_viewport(WHEEL_STEP),
        _ => {
            return match app.focus.focus() {
                Focus::Selector => update_selector(app, action),
                Focus::Viewport => update_viewport(app, action),
                Focus::Input => update_input(app, action),
            }
        }
    }

    Transition::Continue
}

fn update_selector(app: &mut App, action: &Action) -> Transition {
    match action {
        Action::Move(direction) => {
            let (len, rows) = (app.commands.len(), app.selector_rows());
            app.selector.move_selection(*direction, len, rows);
        }
        Action::Submit => {
            let Some(command) = app.selected_command().cloned() else {
                return Transition::Continue;
            };

            if command.requires_prompt {
                app.reset_input();
                app.focus.begin_prompt(command);
            } else {
                return Transition::Effect(Effect::RunCommand(Invocation::from_command_spec(
                    &command,
                )));
            }
        }
        _ => {}
    }

    Transition::Continue
}

fn update_viewport(app: &mut App, action: &Action) -> Transition {
    let rows = app.viewport_rows();
    let page = isize::try_from(rows.max(1)).unwrap_or(isize::MAX);

    match action {
        Action::Move(CycleDirection::Up) => app.scroll_viewport(-1),
        Action::Move(CycleDirection::Down) => app.scroll_viewport(1),
        Action::PageUp => app.scroll_viewport(-page),
        Action::PageDown => app.scroll_viewport(page),
        Action::Top => app.tabs.active_mut().scroll_to_top(),
        Action::Bottom => app.tabs.active_mut().scroll_to_bottom(rows),
        Action::Filter => return Transition::Effect(Effect::FilterOutput),
        _ => {}
    }

    Transition::Continue
}

fn update_input(app: &mut App, action: &Action) -> Transition {
    match action {
        Action::Insert(c) => {
            app.input.insert(*c);
            app.completion.reset();
        }
        Action::Backspace => {
            if app.input.backspace() {
                app.completion.reset();
            }
        }
        Action::Delete => {
            if app.input.delete() {
                app.completion.reset();
            }
        }
        Action::ClearInput => {
            if !app.input.is_empty() {
                app.reset_input();
            }
        }
        Action::CaretLeft => app.input.move_left(),
        Action::CaretRight => app.input.move_right(),
        Action::CaretHome => app.input.move_home(),
        Action::CaretEnd => app.input.move_end(),
        Action::Complete => {
            if let Some(candidate) = app.completion.advance() {
                app.input.set_value(candidate);
            }
        }
        Action::Cancel => {
            if app.focus.is_pinned() {
                app.focus.finish_prompt();
                app.reset_input();
            }
        }
        Action::Submit => return submit_input(app),
        _ => {}
    }

    Transition::Continue
}

fn submit_input(app: &mut App) -> Transition {
    let text = app.input.value().to_string();

    let prompted = app
        .focus
        .prompt()
        .map(|prompt| Invocation::with_prompt_value(&prompt.pending_command, &text));

    if let Some(invocation) = prompted {
        app.focus.finish_prompt();
        app.reset_input();
        return Transition::Effect(Effect::RunCommand(invocation));
    }

    let invocation = Invocation::from_line(&text);
    app.reset_input();
    app.focus.return_to_selector();

    if invocation.is_empty() {
        Transition::Continue
    } else {
        Transition::Effect(Effect::RunCommand(invocation))
    }
}
