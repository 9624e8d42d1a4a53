//! Event loop and terminal lifecycle.
//!
//! This is the only part of the launcher with side effects. It reads events,
//! feeds them through the pure controller and performs the blocking effects
//! the controller asks for.

use std::io::{self, stdout, Stdout};

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use log::info;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use rust_deck_core::command_definitions::LauncherConfig;
use rust_deck_core::error::Result;

use super::controller::{update, App};
use super::input::{map_key, map_mouse};
use super::theme::Theme;
use super::types::{Effect, Transition};
use super::ui::{compute_layout, render};
use crate::fuzzy_filter;

type LauncherTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Restores the terminal when dropped, including on early returns.
struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = stdout();
    let _ = stdout.execute(DisableMouseCapture);
    let _ = stdout.execute(LeaveAlternateScreen);
}

/// Restores the terminal before the default hook prints the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));
}

fn setup_terminal() -> io::Result<(RawModeGuard, LauncherTerminal)> {
    enable_raw_mode()?;
    let guard = RawModeGuard;
    let mut stdout = stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((guard, terminal))
}

/// Runs the launcher until the user quits.
///
/// # Errors
///
/// Returns an error if the config names no tabs or the terminal fails.
/// The terminal is restored before the error is returned.
pub fn run(config: &LauncherConfig) -> Result<()> {
    let mut app = App::new(config)?;
    let theme = Theme::default();

    install_panic_hook();
    let (_guard, mut terminal) = setup_terminal()?;
    info!("Launcher started with {} commands", app.commands.len());

    loop {
        let size = terminal.size()?;
        let areas = compute_layout(Rect::new(0, 0, size.width, size.height), &app);
        app.fit_panes(areas.viewport.height, areas.selector.height);
        terminal.draw(|frame| render(&app, &theme, frame))?;

        let action = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                map_key(key, app.focus.focus())
            }
            Event::Mouse(mouse) => map_mouse(mouse, &areas),
            _ => None,
        };

        let Some(action) = action else {
            continue;
        };

        match update(&mut app, &action) {
            Transition::Continue => {}
            Transition::Quit => break,
            Transition::Effect(effect) => handle_effect(effect, &mut app, &mut terminal, &theme)?,
        }
    }

    info!("Launcher exiting");
    Ok(())
}

fn handle_effect(
    effect: Effect,
    app: &mut App,
    terminal: &mut LauncherTerminal,
    theme: &Theme,
) -> Result<()> {
    match effect {
        Effect::RunCommand(invocation) => app.run_invocation(&invocation),
        Effect::FilterOutput => {
            let lines = app.filter_lines();
            let picked = fuzzy_filter::pick_line(terminal, &lines, theme)?;
            app.apply_filter_selection(picked.and_then(|index| lines.get(index).cloned()));
            // The picker drew over the whole screen.
            terminal.clear()?;
        }
    }
    Ok(())
}
