//! Request body editor
//!
//! A small multi-line text editor used by the body modal of the Test view.
//! The cursor is a byte offset that always sits on a UTF-8 char boundary.
//! Content is never validated before sending; `validate_json` only feeds the
//! status line of the modal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::Value;

const TAB_WIDTH: usize = 2;

#[derive(Debug, Clone, Default)]
pub struct BodyEditor {
    content: String,
    cursor: usize,
    dirty: bool,
}

impl BodyEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new editor with initial content, cursor at the end
    pub fn with_content(content: impl Into<String>) -> Self {
        let content = content.into();
        let cursor = content.len();
        Self {
            content,
            cursor,
            dirty: false,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Replace the content, e.g. when the modal opens for another endpoint
    pub fn load(&mut self, content: &str) {
        self.content = content.to_string();
        self.cursor = self.content.len();
        self.dirty = false;
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
        self.dirty = true;
    }

    pub fn insert_char(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        self.dirty = true;
    }

    /// Insert pasted text. Curly quotes become straight ones and tabs become
    /// spaces so pasted JSON stays usable.
    pub fn insert_str(&mut self, s: &str) {
        let normalized = s
            .replace(['\u{201C}', '\u{201D}'], "\"")
            .replace(['\u{2018}', '\u{2019}'], "'")
            .replace('\t', &" ".repeat(TAB_WIDTH));

        self.content.insert_str(self.cursor, &normalized);
        self.cursor += normalized.len();
        self.dirty = true;
    }

    /// Break the line, carrying the current line's indentation over
    pub fn insert_newline(&mut self) {
        let (line, _) = self.cursor_line_col();
        let indent: String = self
            .content
            .lines()
            .nth(line)
            .unwrap_or("")
            .chars()
            .take_while(|c| *c == ' ')
            .collect();

        self.insert_char('\n');
        self.insert_str(&indent);
    }

    pub fn backspace(&mut self) -> bool {
        match self.content[..self.cursor].chars().next_back() {
            Some(c) => {
                self.cursor -= c.len_utf8();
                self.content.remove(self.cursor);
                self.dirty = true;
                true
            }
            None => false,
        }
    }

    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.content.len() {
            return false;
        }
        self.content.remove(self.cursor);
        self.dirty = true;
        true
    }

    pub fn move_left(&mut self) -> bool {
        match self.content[..self.cursor].chars().next_back() {
            Some(c) => {
                self.cursor -= c.len_utf8();
                true
            }
            None => false,
        }
    }

    pub fn move_right(&mut self) -> bool {
        match self.content[self.cursor..].chars().next() {
            Some(c) => {
                self.cursor += c.len_utf8();
                true
            }
            None => false,
        }
    }

    pub fn move_line_start(&mut self) {
        self.cursor = self.content[..self.cursor]
            .rfind('\n')
            .map(|pos| pos + 1)
            .unwrap_or(0);
    }

    pub fn move_line_end(&mut self) {
        self.cursor = self.content[self.cursor..]
            .find('\n')
            .map(|pos| self.cursor + pos)
            .unwrap_or(self.content.len());
    }

    pub fn move_up(&mut self) -> bool {
        let (line, col) = self.cursor_line_col();
        if line == 0 {
            return false;
        }
        self.cursor = self.offset_for(line - 1, col);
        true
    }

    pub fn move_down(&mut self) -> bool {
        let (line, col) = self.cursor_line_col();
        if line + 1 >= self.line_count() {
            return false;
        }
        self.cursor = self.offset_for(line + 1, col);
        true
    }

    /// Zero-based (line, column) of the cursor, column counted in chars
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let before = &self.content[..self.cursor];
        let line = before.matches('\n').count();
        let line_start = before.rfind('\n').map(|pos| pos + 1).unwrap_or(0);
        let col = before[line_start..].chars().count();
        (line, col)
    }

    pub fn line_count(&self) -> usize {
        self.content.split('\n').count()
    }

    /// Byte offset of (line, col), clamping col to the line length
    fn offset_for(&self, line: usize, col: usize) -> usize {
        let mut offset = 0;
        for (idx, text) in self.content.split('\n').enumerate() {
            if idx == line {
                let within: usize = text.chars().take(col).map(char::len_utf8).sum();
                return offset + within;
            }
            offset += text.len() + 1;
        }
        self.content.len()
    }

    /// Pretty-print the content in place when it is valid JSON
    pub fn format_json(&mut self) -> Result<(), String> {
        let json = serde_json::from_str::<Value>(&self.content)
            .map_err(|e| format!("Invalid JSON: {e}"))?;
        self.content = serde_json::to_string_pretty(&json).map_err(|e| e.to_string())?;
        self.cursor = self.content.len();
        self.dirty = true;
        Ok(())
    }

    /// Empty content counts as valid: nothing will be sent
    pub fn validate_json(&self) -> Result<(), String> {
        if self.content.trim().is_empty() {
            return Ok(());
        }
        serde_json::from_str::<Value>(&self.content)
            .map(|_| ())
            .map_err(|e| format!("Invalid JSON: {e}"))
    }

    /// Handle an editing key, returns true if the event was consumed
    pub fn handle_key_event(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Up => self.move_up(),
            KeyCode::Down => self.move_down(),
            KeyCode::Home => {
                self.move_line_start();
                true
            }
            KeyCode::End => {
                self.move_line_end();
                true
            }
            KeyCode::Enter => {
                self.insert_newline();
                true
            }
            KeyCode::Tab => {
                self.insert_str("\t");
                true
            }
            KeyCode::Char('a') if ctrl => {
                self.move_line_start();
                true
            }
            KeyCode::Char('e') if ctrl => {
                self.move_line_end();
                true
            }
            KeyCode::Char('l') if ctrl => {
                self.clear();
                true
            }
            KeyCode::Char(c) if !ctrl => {
                self.insert_char(c);
                true
            }
            _ => false,
        }
    }
}
