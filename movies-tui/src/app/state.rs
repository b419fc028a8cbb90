#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    SearchBox,
    Grid,
}

/// A text input with mid-string cursor support.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextInput {
    pub value: String,
    /// Byte offset, always on a char boundary.
    pub cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_str(s: &str) -> Self {
        Self {
            value: s.to_string(),
            cursor: s.len(),
        }
    }

    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some((idx, _)) = self.value[..self.cursor].char_indices().next_back() {
            self.value.drain(idx..self.cursor);
            self.cursor = idx;
        }
    }

    pub fn move_left(&mut self) {
        if let Some((idx, _)) = self.value[..self.cursor].char_indices().next_back() {
            self.cursor = idx;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.value[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Returns the string split at the cursor: (before, after).
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.value.split_at(self.cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_multibyte_text() {
        let mut input = TextInput::from_str("Amélie");
        input.move_left();
        input.move_left();
        input.move_left();
        assert_eq!(input.split_at_cursor(), ("Amé", "lie"));
        input.backspace();
        assert_eq!(input.value, "Amlie");
        assert_eq!(input.split_at_cursor(), ("Am", "lie"));

        input.insert('é');
        assert_eq!(input.value, "Amélie");
        input.move_right();
        assert_eq!(input.split_at_cursor(), ("Amél", "ie"));
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut input = TextInput::new();
        input.backspace();
        input.move_left();
        input.move_right();
        assert_eq!(input.cursor, 0);

        input.insert('x');
        input.home();
        input.backspace();
        assert_eq!(input.value, "x");
        input.end();
        assert_eq!(input.cursor, 1);
    }
}
