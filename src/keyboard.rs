// Keyboard handling module
use crate::app::App;
use crate::screen_mode::ScreenMode;
use crate::types::{AppFlags, InputMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    // Global commands that work from ANY screen

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.flags.insert(AppFlags::EXIT);
        return Ok(false);
    }

    // Tab - Switch screens
    if key.code == KeyCode::Tab {
        app.screen_mode = app.screen_mode.toggle();
        app.flags.insert(AppFlags::REDRAW);
        crate::debug_log(format!("Switched to {:?} screen", app.screen_mode));
        return Ok(true);
    }

    match app.screen_mode {
        ScreenMode::Debug => handle_debug_keys(app, key),
        ScreenMode::Analyze => handle_analyze_keys(app, key),
    }
}

fn handle_debug_keys(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Up => {
            app.debug_panel.scroll_up(1);
            app.flags.insert(AppFlags::REDRAW);
        }
        KeyCode::Down => {
            app.debug_panel.scroll_down(1);
            app.flags.insert(AppFlags::REDRAW);
        }
        KeyCode::PageUp => {
            app.debug_panel.scroll_up(10);
            app.flags.insert(AppFlags::REDRAW);
        }
        KeyCode::PageDown => {
            app.debug_panel.scroll_down(10);
            app.flags.insert(AppFlags::REDRAW);
        }
        _ => {}
    }
    Ok(true)
}

fn handle_analyze_keys(app: &mut App, key: KeyEvent) -> Result<bool> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Ctrl+T / Ctrl+F - exclusive input mode selector
    if ctrl && key.code == KeyCode::Char('t') {
        app.collector.set_mode(InputMode::Text);
        app.flags.insert(AppFlags::REDRAW);
        return Ok(true);
    }
    if ctrl && key.code == KeyCode::Char('f') {
        app.collector.set_mode(InputMode::File);
        app.flags.insert(AppFlags::REDRAW);
        return Ok(true);
    }

    // Ctrl+O - pick a .txt file (switches to file mode)
    if ctrl && key.code == KeyCode::Char('o') {
        app.collector.set_mode(InputMode::File);
        app.open_file_picker = true;
        return Ok(true);
    }

    // Ctrl+R - run the analysis, guarded by content and the busy flag
    if ctrl && key.code == KeyCode::Char('r') {
        app.submit_analysis();
        return Ok(true);
    }

    // Everything else edits the text buffer, only in text mode
    if app.collector.mode != InputMode::Text {
        return Ok(true);
    }

    match key.code {
        KeyCode::Char(c) if !ctrl => {
            app.collector.insert_char(c);
            app.flags.insert(AppFlags::REDRAW);
        }
        KeyCode::Enter => {
            app.collector.insert_newline();
            app.flags.insert(AppFlags::REDRAW);
        }
        KeyCode::Backspace => {
            app.collector.backspace();
            app.flags.insert(AppFlags::REDRAW);
        }
        KeyCode::Up => {
            app.collector.move_cursor(-1, 0);
            app.flags.insert(AppFlags::REDRAW);
        }
        KeyCode::Down => {
            app.collector.move_cursor(1, 0);
            app.flags.insert(AppFlags::REDRAW);
        }
        KeyCode::Left => {
            app.collector.move_cursor(0, -1);
            app.flags.insert(AppFlags::REDRAW);
        }
        KeyCode::Right => {
            app.collector.move_cursor(0, 1);
            app.flags.insert(AppFlags::REDRAW);
        }
        _ => {}
    }

    Ok(true)
}
