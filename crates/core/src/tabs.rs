//! Tabs pair an output log with what the viewport currently shows of it.
//!
//! Only the active tab is rendered or written to. Inactive tabs keep their
//! log, display and scroll position until they are revisited.

use crate::error::{Error, Result};
use crate::output_log::OutputLog;

/// What the viewport of a tab is showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TabDisplay {
    /// The whole log.
    #[default]
    Log,
    /// A single line picked by the fuzzy filter. The log itself is untouched.
    Filtered(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    label: String,
    log: OutputLog,
    display: TabDisplay,
    scroll_offset: usize,
}

impl Tab {
    #[must_use]
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            log: OutputLog::new(),
            display: TabDisplay::Log,
            scroll_offset: 0,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn log(&self) -> &OutputLog {
        &self.log
    }

    #[must_use]
    pub fn display(&self) -> &TabDisplay {
        &self.display
    }

    #[must_use]
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Appends to the log. Any filtered display is dropped in favour of the log.
    pub fn append(&mut self, text: &str) {
        self.log.append(text);
        self.display = TabDisplay::Log;
    }

    /// Text the viewport should currently render.
    #[must_use]
    pub fn displayed_text(&self) -> &str {
        match &self.display {
            TabDisplay::Log => self.log.as_str(),
            TabDisplay::Filtered(line) => line,
        }
    }

    #[must_use]
    pub fn displayed_line_count(&self) -> usize {
        self.displayed_text().lines().count()
    }

    pub fn show_filtered(&mut self, line: String) {
        self.display = TabDisplay::Filtered(line);
        self.scroll_offset = 0;
    }

    /// Puts the full log back into the viewport.
    pub fn refresh(&mut self, rows: usize) {
        self.display = TabDisplay::Log;
        self.scroll_to_bottom(rows);
    }

    fn max_offset(&self, rows: usize) -> usize {
        self.displayed_line_count().saturating_sub(rows)
    }

    pub fn scroll_by(&mut self, delta: isize, rows: usize) {
        let target = self.scroll_offset.saturating_add_signed(delta);
        self.scroll_offset = target.min(self.max_offset(rows));
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    pub fn scroll_to_bottom(&mut self, rows: usize) {
        self.scroll_offset = self.max_offset(rows);
    }

    /// Whether the last line is on screen when `rows` lines are visible.
    #[must_use]
    pub fn is_at_bottom(&self, rows: usize) -> bool {
        self.scroll_offset >= self.max_offset(rows)
    }

    /// The displayed lines that fit in a viewport of `rows` lines at the current offset.
    pub fn visible_lines(&self, rows: usize) -> impl Iterator<Item = &str> {
        self.displayed_text()
            .lines()
            .skip(self.scroll_offset)
            .take(rows)
    }
}

/// Fixed, non-empty, ordered set of tabs with exactly one active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSet {
    tabs: Vec<Tab>,
    active: usize,
}

impl TabSet {
    /// # Errors
    ///
    /// Returns [`Error::NoTabs`] when no labels are given.
    pub fn new(labels: &[String]) -> Result<Self> {
        if labels.is_empty() {
            return Err(Error::NoTabs);
        }

        Ok(Self {
            tabs: labels.iter().map(|label| Tab::new(label)).collect(),
            active: 0,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn active(&self) -> &Tab {
        &self.tabs[self.active]
    }

    pub fn active_mut(&mut self) -> &mut Tab {
        &mut self.tabs[self.active]
    }

    pub fn next(&mut self) {
        self.active = (self.active + 1) % self.tabs.len();
    }

    pub fn previous(&mut self) {
        self.active = (self.active + self.tabs.len() - 1) % self.tabs.len();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tab> {
        self.tabs.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Tab> {
        self.tabs.iter_mut()
    }
}
