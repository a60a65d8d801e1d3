//! InputField widget: single-line text input with cursor.

/// Text input field with cursor and optional placeholder.
#[derive(Debug, Clone)]
pub struct InputField {
    pub text: String,
    pub placeholder: String,
    pub cursor_pos: usize,
    pub focused: bool,
}

impl InputField {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            placeholder: String::new(),
            cursor_pos: 0,
            focused: false,
        }
    }

    pub fn with_placeholder(placeholder: &str) -> Self {
        Self {
            placeholder: placeholder.to_string(),
            ..Self::new()
        }
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, ch: char) {
        let byte_pos = self
            .text
            .char_indices()
            .nth(self.cursor_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len());
        self.text.insert(byte_pos, ch);
        self.cursor_pos += 1;
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            let byte_pos = self
                .text
                .char_indices()
                .nth(self.cursor_pos)
                .map(|(i, _)| i)
                .unwrap_or(self.text.len());
            if byte_pos < self.text.len() {
                let ch_len = self.text[byte_pos..]
                    .chars()
                    .next()
                    .map_or(0, |c| c.len_utf8());
                self.text.drain(byte_pos..byte_pos + ch_len);
            }
        }
    }

    /// Reset to empty with the cursor at the start.
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor_pos = 0;
    }

    /// Text to render: content, or the placeholder when empty.
    pub fn render_text(&self) -> &str {
        if self.text.is_empty() {
            &self.placeholder
        } else {
            &self.text
        }
    }
}

impl Default for InputField {
    fn default() -> Self {
        Self::new()
    }
}
