// Input collector: typed text buffer or truncated .txt file content
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::FILE_TOKEN_LIMIT;
use crate::types::{InputMode, Result};

/// Cut text to its first `limit` whitespace-delimited tokens, re-joined with
/// single spaces. Anything past the cap is silently discarded; whitespace
/// runs collapse at the split points.
pub fn truncate_tokens(raw: &str, limit: usize) -> String {
    raw.split_whitespace()
        .take(limit)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Owns the two exclusive input sources: a multi-line editable text buffer
/// and the truncated content of the last picked file. Only the active mode's
/// content is submitted.
pub struct InputCollector {
    pub mode: InputMode,
    lines: Vec<String>,
    pub cursor_line: usize,
    pub cursor_col: usize,
    file_content: String,
    pub file_path: Option<PathBuf>,
}

impl InputCollector {
    pub fn new() -> Self {
        Self {
            mode: InputMode::Text,
            lines: vec![String::new()],
            cursor_line: 0,
            cursor_col: 0,
            file_content: String::new(),
            file_path: None,
        }
    }

    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
    }

    /// Content of the active input mode, as it would be submitted.
    pub fn content(&self) -> String {
        match self.mode {
            InputMode::Text => self.lines.join("\n"),
            InputMode::File => self.file_content.clone(),
        }
    }

    /// Submission guard: non-empty after trimming.
    pub fn has_content(&self) -> bool {
        !self.content().trim().is_empty()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        // Malformed files pass through as read; invalid UTF-8 is replaced,
        // not rejected
        let raw = fs::read(path)?;
        self.file_content = truncate_tokens(&String::from_utf8_lossy(&raw), FILE_TOKEN_LIMIT);
        self.file_path = Some(path.to_path_buf());
        Ok(())
    }

    pub fn file_summary(&self) -> Option<String> {
        self.file_path.as_ref().map(|p| {
            let tokens = self.file_content.split(' ').filter(|t| !t.is_empty()).count();
            format!("{} ({} tokens)", p.display(), tokens)
        })
    }

    // Text buffer editing. Columns are char offsets, not byte offsets.

    pub fn insert_char(&mut self, c: char) {
        let line = &mut self.lines[self.cursor_line];
        let byte_idx = char_to_byte(line, self.cursor_col);
        line.insert(byte_idx, c);
        self.cursor_col += 1;
    }

    pub fn insert_newline(&mut self) {
        let line = &mut self.lines[self.cursor_line];
        let byte_idx = char_to_byte(line, self.cursor_col);
        let rest = line.split_off(byte_idx);
        self.lines.insert(self.cursor_line + 1, rest);
        self.cursor_line += 1;
        self.cursor_col = 0;
    }

    pub fn backspace(&mut self) {
        if self.cursor_col > 0 {
            let line = &mut self.lines[self.cursor_line];
            let byte_idx = char_to_byte(line, self.cursor_col - 1);
            line.remove(byte_idx);
            self.cursor_col -= 1;
        } else if self.cursor_line > 0 {
            let removed = self.lines.remove(self.cursor_line);
            self.cursor_line -= 1;
            self.cursor_col = self.lines[self.cursor_line].chars().count();
            self.lines[self.cursor_line].push_str(&removed);
        }
    }

    pub fn move_cursor(&mut self, d_line: i32, d_col: i32) {
        if d_line != 0 {
            let target = (self.cursor_line as i32 + d_line)
                .clamp(0, self.lines.len() as i32 - 1) as usize;
            self.cursor_line = target;
            let len = self.lines[self.cursor_line].chars().count();
            self.cursor_col = self.cursor_col.min(len);
        }
        if d_col != 0 {
            let len = self.lines[self.cursor_line].chars().count() as i32;
            self.cursor_col = (self.cursor_col as i32 + d_col).clamp(0, len) as usize;
        }
    }
}

fn char_to_byte(line: &str, char_idx: usize) -> usize {
    line.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(line.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn long_file_truncates_to_first_150_tokens() {
        let raw: String = (0..400).map(|i| format!("w{} ", i)).collect();
        let truncated = truncate_tokens(&raw, FILE_TOKEN_LIMIT);
        let expected: Vec<String> = (0..150).map(|i| format!("w{}", i)).collect();
        assert_eq!(truncated, expected.join(" "));
    }

    #[test]
    fn truncation_ignores_whitespace_structure() {
        let a = truncate_tokens("one two\nthree\t four", 150);
        let b = truncate_tokens("one   two three four", 150);
        assert_eq!(a, "one two three four");
        assert_eq!(a, b);
    }

    #[test]
    fn short_file_collapses_whitespace_runs_only() {
        let truncated = truncate_tokens("hello   world", 150);
        assert_eq!(truncated, "hello world");
    }

    #[test]
    fn empty_buffer_has_no_content() {
        let collector = InputCollector::new();
        assert!(!collector.has_content());
    }

    #[test]
    fn whitespace_only_buffer_has_no_content() {
        let mut collector = InputCollector::new();
        collector.insert_char(' ');
        collector.insert_newline();
        collector.insert_char('\t');
        assert!(!collector.has_content());
    }

    #[test]
    fn typed_text_round_trips_through_content() {
        let mut collector = InputCollector::new();
        for c in "hi".chars() {
            collector.insert_char(c);
        }
        collector.insert_newline();
        collector.insert_char('!');
        assert_eq!(collector.content(), "hi\n!");
        assert!(collector.has_content());
    }

    #[test]
    fn backspace_joins_lines_at_start_of_line() {
        let mut collector = InputCollector::new();
        collector.insert_char('a');
        collector.insert_newline();
        collector.insert_char('b');
        collector.move_cursor(0, -1);
        collector.backspace();
        assert_eq!(collector.content(), "ab");
    }

    #[test]
    fn malformed_file_loads_with_lossy_replacement() {
        let mut tmp = std::env::temp_dir();
        tmp.push(format!("sentiscope_lossy_test_{}.txt", std::process::id()));
        std::fs::write(&tmp, b"hello \xFF world").unwrap();

        let mut collector = InputCollector::new();
        collector.set_mode(InputMode::File);
        collector.load_file(&tmp).unwrap();
        assert_eq!(collector.content(), "hello \u{FFFD} world");

        std::fs::remove_file(&tmp).ok();
    }

    #[test]
    fn file_mode_content_comes_from_loaded_file() {
        let mut tmp = std::env::temp_dir();
        tmp.push(format!("sentiscope_input_test_{}.txt", std::process::id()));
        let mut f = std::fs::File::create(&tmp).unwrap();
        write!(f, "alpha  beta\ngamma").unwrap();

        let mut collector = InputCollector::new();
        collector.set_mode(InputMode::File);
        collector.load_file(&tmp).unwrap();
        assert_eq!(collector.content(), "alpha beta gamma");
        assert!(collector.has_content());

        std::fs::remove_file(&tmp).ok();
    }
}
