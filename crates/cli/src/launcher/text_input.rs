/// Single-line text field with a caret measured in characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    caret: usize,
}

impl TextInput {
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn caret(&self) -> usize {
        self.caret
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.caret = self.value.chars().count();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.caret = 0;
    }

    fn byte_index(&self, caret: usize) -> usize {
        self.value
            .char_indices()
            .nth(caret)
            .map_or(self.value.len(), |(index, _)| index)
    }

    pub fn insert(&mut self, c: char) {
        let index = self.byte_index(self.caret);
        self.value.insert(index, c);
        self.caret += 1;
    }

    /// Removes the character before the caret. Returns whether anything changed.
    pub fn backspace(&mut self) -> bool {
        if self.caret == 0 {
            return false;
        }
        self.caret -= 1;
        let index = self.byte_index(self.caret);
        self.value.remove(index);
        true
    }

    /// Removes the character under the caret. Returns whether anything changed.
    pub fn delete(&mut self) -> bool {
        if self.caret >= self.value.chars().count() {
            return false;
        }
        let index = self.byte_index(self.caret);
        self.value.remove(index);
        true
    }

    pub fn move_left(&mut self) {
        self.caret = self.caret.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.caret = (self.caret + 1).min(self.value.chars().count());
    }

    pub fn move_home(&mut self) {
        self.caret = 0;
    }

    pub fn move_end(&mut self) {
        self.caret = self.value.chars().count();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> TextInput {
        let mut input = TextInput::default();
        for c in text.chars() {
            input.insert(c);
        }
        input
    }

    #[test]
    fn test_insert_at_caret() {
        let mut input = typed("lsla");
        input.move_left();
        input.move_left();
        input.insert(' ');
        input.insert('-');
        assert_eq!(input.value(), "ls -la");
        assert_eq!(input.caret(), 4);
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut input = typed("abc");
        assert!(input.backspace());
        assert_eq!(input.value(), "ab");

        input.move_home();
        assert!(!input.backspace());
        assert!(input.delete());
        assert_eq!(input.value(), "b");

        input.move_end();
        assert!(!input.delete());
    }

    #[test]
    fn test_multibyte_characters() {
        let mut input = typed("héllo");
        input.move_left();
        input.move_left();
        input.move_left();
        assert!(input.backspace());
        assert_eq!(input.value(), "hllo");
    }

    #[test]
    fn test_set_value_moves_caret_to_end() {
        let mut input = TextInput::default();
        input.set_value("b.txt");
        assert_eq!(input.caret(), 5);
        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.caret(), 0);
    }
}
