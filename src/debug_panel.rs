// Scrollable view over the in-memory diagnostic log
use crossterm::{
    cursor::MoveTo,
    execute,
    style::{ResetColor, SetForegroundColor},
};
use std::io::{self, Write};

use crate::theme::SentiTheme;

pub struct DebugPanel {
    pub logs: Vec<String>,
    pub scroll_offset: usize,
}

impl DebugPanel {
    pub fn new() -> Self {
        Self {
            logs: Vec::new(),
            scroll_offset: 0,
        }
    }

    pub fn render(&self, start_x: u16, start_y: u16, width: u16, height: u16) -> io::Result<()> {
        let mut stdout = io::stdout();

        for y in 0..height {
            execute!(stdout, MoveTo(start_x, start_y + y))?;

            let log_idx = self.scroll_offset + y as usize;
            if log_idx < self.logs.len() {
                let log = &self.logs[log_idx];
                let clipped: String = log.chars().take(width as usize).collect();
                execute!(stdout, SetForegroundColor(SentiTheme::text_primary()))?;
                write!(stdout, "{:<width$}", clipped, width = width as usize)?;
                execute!(stdout, ResetColor)?;
            } else {
                write!(stdout, "{:width$}", "", width = width as usize)?;
            }
        }

        stdout.flush()?;
        Ok(())
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        let max_scroll = self.logs.len().saturating_sub(1);
        self.scroll_offset = (self.scroll_offset + lines).min(max_scroll);
    }
}
