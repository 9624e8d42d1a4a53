//! Focus state machine for the three launcher panes.
//!
//! Focus cycles `Selector → Viewport → Input`. While a prompting command is
//! waiting for its argument, focus is pinned to `Input` and both cycling and
//! pointer focus are ignored until the prompt is submitted or abandoned.

use log::debug;

use crate::command_definitions::CommandSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Selector,
    Viewport,
    Input,
}

impl Focus {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Focus::Selector => Focus::Viewport,
            Focus::Viewport => Focus::Input,
            Focus::Input => Focus::Selector,
        }
    }

    #[must_use]
    pub fn previous(self) -> Self {
        match self {
            Focus::Selector => Focus::Input,
            Focus::Viewport => Focus::Selector,
            Focus::Input => Focus::Viewport,
        }
    }
}

/// A prompting command waiting for the user to type its last argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptContext {
    pub pending_command: CommandSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusState {
    focus: Focus,
    prompt: Option<PromptContext>,
}

impl FocusState {
    #[must_use]
    pub fn focus(&self) -> Focus {
        self.focus
    }

    #[must_use]
    pub fn prompt(&self) -> Option<&PromptContext> {
        self.prompt.as_ref()
    }

    #[must_use]
    pub fn is_pinned(&self) -> bool {
        self.prompt.is_some()
    }

    pub fn cycle_next(&mut self) {
        if !self.is_pinned() {
            self.set(self.focus.next());
        }
    }

    pub fn cycle_previous(&mut self) {
        if !self.is_pinned() {
            self.set(self.focus.previous());
        }
    }

    /// Pointer focus: a direct jump to the clicked pane.
    pub fn click(&mut self, target: Focus) {
        if !self.is_pinned() {
            self.set(target);
        }
    }

    pub fn begin_prompt(&mut self, command: CommandSpec) {
        debug!("Prompting for the argument of `{}`", command);
        self.prompt = Some(PromptContext {
            pending_command: command,
        });
        self.set(Focus::Input);
    }

    /// Resolves the prompt (submitted or abandoned) and returns to the selector.
    pub fn finish_prompt(&mut self) -> Option<PromptContext> {
        let prompt = self.prompt.take();
        self.set(Focus::Selector);
        prompt
    }

    pub fn return_to_selector(&mut self) {
        self.set(Focus::Selector);
    }

    fn set(&mut self, focus: Focus) {
        if focus != self.focus {
            debug!("Focus {:?} -> {:?}", self.focus, focus);
        }
        self.focus = focus;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_next_visits_all_panes() {
        let mut state = FocusState::default();
        let mut seen = vec![state.focus()];
        for _ in 0..3 {
            state.cycle_next();
            seen.push(state.focus());
        }
        assert_eq!(
            seen,
            vec![Focus::Selector, Focus::Viewport, Focus::Input, Focus::Selector]
        );
    }

    #[test]
    fn test_cycle_previous_reverses() {
        let mut state = FocusState::default();
        state.cycle_previous();
        assert_eq!(state.focus(), Focus::Input);
        state.cycle_previous();
        assert_eq!(state.focus(), Focus::Viewport);
    }

    #[test]
    fn test_prompt_pins_focus_to_input() {
        let mut state = FocusState::default();
        state.begin_prompt(CommandSpec::new("show", &["cat"]).prompting());

        state.cycle_next();
        state.cycle_previous();
        state.click(Focus::Viewport);

        assert_eq!(state.focus(), Focus::Input);
        assert!(state.is_pinned());
    }

    #[test]
    fn test_finish_prompt_returns_to_selector() {
        let spec = CommandSpec::new("show", &["cat"]).prompting();
        let mut state = FocusState::default();
        state.begin_prompt(spec.clone());

        let prompt = state.finish_prompt().unwrap();
        assert_eq!(prompt.pending_command, spec);
        assert_eq!(state.focus(), Focus::Selector);
        assert!(state.prompt().is_none());
    }

    #[test]
    fn test_click_moves_focus_directly() {
        let mut state = FocusState::default();
        state.click(Focus::Input);
        assert_eq!(state.focus(), Focus::Input);
    }
}
