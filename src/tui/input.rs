/// Default maximum length of a task title, in characters
pub const DEFAULT_CHAR_LIMIT: usize = 50;

/// Input mode for the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Navigating the board
    Idle,
    /// Typing the title of a new task
    Creating,
    /// Rewriting the title of the selected task
    Editing,
}

impl InputMode {
    pub fn is_idle(&self) -> bool {
        *self == InputMode::Idle
    }
}

impl Default for InputMode {
    fn default() -> Self {
        Self::Idle
    }
}

/// Single-line text buffer used while creating or editing a task.
///
/// The caret is a character index, not a byte offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBuffer {
    value: String,
    cursor: usize,
    char_limit: usize,
}

impl InputBuffer {
    pub fn new(char_limit: usize) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            char_limit,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn char_limit(&self) -> usize {
        self.char_limit
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Replace the contents and put the caret at the end.
    /// Text beyond the character limit is dropped.
    pub fn set(&mut self, text: &str) {
        self.value = text.chars().take(self.char_limit).collect();
        self.cursor = self.len();
    }

    /// Take the contents, leaving the buffer empty
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.value)
    }

    /// Insert a character at the caret; ignored once the limit is reached
    pub fn insert(&mut self, c: char) {
        if c.is_control() || self.len() >= self.char_limit {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Remove the character before the caret
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
    }

    /// Remove the character under the caret
    pub fn delete(&mut self) {
        if self.cursor >= self.len() {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }
}

impl Default for InputBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_CHAR_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_respects_char_limit() {
        let mut input = InputBuffer::new(3);
        for c in "abcd".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "abc");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn test_insert_in_the_middle() {
        let mut input = InputBuffer::default();
        input.set("ac");
        input.move_left();
        input.insert('b');
        assert_eq!(input.value(), "abc");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_backspace_and_delete_multibyte() {
        let mut input = InputBuffer::default();
        input.set("héllo");
        input.move_home();
        input.move_right();
        input.move_right();
        input.backspace();
        assert_eq!(input.value(), "hllo");
        input.delete();
        assert_eq!(input.value(), "hlo");
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = InputBuffer::default();
        input.set("x");
        input.move_home();
        input.backspace();
        assert_eq!(input.value(), "x");
    }

    #[test]
    fn test_control_chars_are_ignored() {
        let mut input = InputBuffer::default();
        input.insert('\n');
        input.insert('\t');
        assert!(input.is_empty());
    }

    #[test]
    fn test_set_truncates_and_take_clears() {
        let mut input = InputBuffer::new(4);
        input.set("abcdef");
        assert_eq!(input.value(), "abcd");
        assert_eq!(input.take(), "abcd");
        assert!(input.is_empty());
        assert_eq!(input.cursor(), 0);
    }
}
