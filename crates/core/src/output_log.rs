/// Append-only text buffer holding everything a tab has printed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputLog {
    text: String,
}

impl OutputLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, text: &str) {
        self.text.push_str(text);
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Splits the log on `'\n'`.
    ///
    /// A trailing separator yields a final empty line, and an empty log yields
    /// a single empty line.
    #[must_use]
    pub fn lines(&self) -> Vec<&str> {
        self.text.split('\n').collect()
    }
}
