/// Cycles through a fixed list of completion candidates.
///
/// `index` is `None` until the first advance, and goes back to `None`
/// whenever the input is edited by other means.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionCursor {
    candidates: Vec<String>,
    index: Option<usize>,
}

impl CompletionCursor {
    #[must_use]
    pub fn new(candidates: Vec<String>) -> Self {
        Self {
            candidates,
            index: None,
        }
    }

    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Moves to the next candidate and returns it, or `None` with no candidates.
    pub fn advance(&mut self) -> Option<&str> {
        if self.candidates.is_empty() {
            return None;
        }

        let next = match self.index {
            Some(index) => (index + 1) % self.candidates.len(),
            None => 0,
        };
        self.index = Some(next);

        Some(self.candidates[next].as_str())
    }

    pub fn reset(&mut self) {
        self.index = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor(candidates: &[&str]) -> CompletionCursor {
        CompletionCursor::new(candidates.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn test_advance_cycles() {
        let mut cursor = cursor(&["a.txt", "b.txt", "c.txt"]);
        let seen: Vec<String> = (0..4)
            .map(|_| cursor.advance().unwrap().to_string())
            .collect();
        assert_eq!(seen, vec!["a.txt", "b.txt", "c.txt", "a.txt"]);
    }

    #[test]
    fn test_reset_restarts_at_first_candidate() {
        let mut cursor = cursor(&["a.txt", "b.txt"]);
        cursor.advance();
        cursor.advance();
        cursor.reset();
        assert_eq!(cursor.index(), None);
        assert_eq!(cursor.advance(), Some("a.txt"));
    }

    #[test]
    fn test_advance_without_candidates() {
        let mut cursor = CompletionCursor::default();
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.index(), None);
    }
}
