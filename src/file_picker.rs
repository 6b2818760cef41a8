// Interactive fuzzy picker for .txt files
use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    style::{Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use nucleo::{Config, Nucleo, Utf32String};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::theme::SentiTheme;

const MAX_WALK_DEPTH: usize = 6;

/// Pick a .txt file with interactive fuzzy finding. Returns None if the
/// user cancels. Runs its own raw-mode session; the caller is expected to
/// have restored the terminal first.
pub fn pick_txt_file() -> Result<Option<PathBuf>> {
    let files = find_txt_files();

    if files.is_empty() {
        println!("No .txt files found under the current directory");
        return Ok(None);
    }

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    terminal::enable_raw_mode()?;

    let result = run_fuzzy_picker(&files);

    terminal::disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen)?;

    result
}

fn run_fuzzy_picker(files: &[String]) -> Result<Option<PathBuf>> {
    let mut stdout = io::stdout();

    let mut nucleo = Nucleo::<Arc<str>>::new(Config::DEFAULT, Arc::new(|| {}), None, 1);

    let injector = nucleo.injector();
    for file in files {
        let file_arc: Arc<str> = Arc::from(file.as_str());
        let _ = injector.push(file_arc.clone(), |data, cols: &mut [Utf32String]| {
            cols[0] = data.as_ref().into();
        });
    }

    let mut query = String::new();
    let mut selected_index = 0usize;
    let mut scroll_offset = 0usize;

    loop {
        execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;

        let (term_width, term_height) = terminal::size().unwrap_or((80, 24));

        execute!(
            stdout,
            MoveTo(0, 0),
            SetBackgroundColor(SentiTheme::accent_file()),
            SetForegroundColor(SentiTheme::text_header()),
            SetAttribute(Attribute::Bold),
            Print(format!(
                "  {:<width$}",
                "SentiScope - Pick a .txt file",
                width = (term_width.saturating_sub(2)) as usize
            )),
            ResetColor,
            SetAttribute(Attribute::Reset)
        )?;

        execute!(
            stdout,
            MoveTo(0, 2),
            SetForegroundColor(SentiTheme::text_secondary()),
            Print("  Search: "),
            SetForegroundColor(SentiTheme::text_primary()),
            Print(&query),
            SetForegroundColor(SentiTheme::text_dim()),
            Print("_"),
            ResetColor,
        )?;

        let snapshot = nucleo.snapshot();
        let all_matches = snapshot.matched_items(..).collect::<Vec<_>>();

        let max_path_width = (term_width as usize).saturating_sub(5);
        let max_display_items = (term_height as usize).saturating_sub(7).max(1);

        if selected_index >= scroll_offset + max_display_items {
            scroll_offset = selected_index.saturating_sub(max_display_items - 1);
        } else if selected_index < scroll_offset {
            scroll_offset = selected_index;
        }

        let visible_matches = all_matches
            .iter()
            .skip(scroll_offset)
            .take(max_display_items)
            .collect::<Vec<_>>();

        for (display_i, item) in visible_matches.iter().enumerate() {
            let actual_index = scroll_offset + display_i;
            let path = item.data.as_ref();
            let display: String = path.chars().take(max_path_width).collect();
            let line_pos = 4 + display_i as u16;

            execute!(stdout, MoveTo(0, line_pos), Clear(ClearType::CurrentLine))?;

            if actual_index == selected_index {
                execute!(
                    stdout,
                    SetForegroundColor(SentiTheme::success()),
                    Print("  ▶ "),
                    SetForegroundColor(SentiTheme::text_primary()),
                    Print(&display),
                    ResetColor
                )?;
            } else {
                execute!(
                    stdout,
                    Print("    "),
                    SetForegroundColor(SentiTheme::text_secondary()),
                    Print(&display),
                    ResetColor
                )?;
            }
        }

        let help_line = (4 + max_display_items + 1) as u16;
        execute!(
            stdout,
            MoveTo(0, help_line),
            Clear(ClearType::CurrentLine),
            SetForegroundColor(SentiTheme::text_dim()),
            Print(format!(
                "  {} files  •  ↑/↓ Navigate  •  Enter Select  •  Esc Back  •  Type to search",
                all_matches.len()
            )),
            ResetColor
        )?;

        stdout.flush()?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
                {
                    return Ok(None);
                }
                match key.code {
                    KeyCode::Esc => return Ok(None),
                    KeyCode::Enter => {
                        if let Some(item) = all_matches.get(selected_index) {
                            return Ok(Some(PathBuf::from(item.data.as_ref())));
                        }
                    }
                    KeyCode::Up => {
                        selected_index = selected_index.saturating_sub(1);
                    }
                    KeyCode::Down => {
                        selected_index =
                            (selected_index + 1).min(all_matches.len().saturating_sub(1));
                    }
                    KeyCode::PageUp => {
                        selected_index = selected_index.saturating_sub(max_display_items);
                    }
                    KeyCode::PageDown => {
                        selected_index = (selected_index + max_display_items)
                            .min(all_matches.len().saturating_sub(1));
                    }
                    KeyCode::Backspace => {
                        query.pop();
                        selected_index = 0;
                        scroll_offset = 0;
                        reparse(&mut nucleo, &query);
                    }
                    KeyCode::Char(c) => {
                        query.push(c);
                        selected_index = 0;
                        scroll_offset = 0;
                        reparse(&mut nucleo, &query);
                    }
                    _ => {}
                }
            }
        }

        nucleo.tick(10);
    }
}

fn reparse(nucleo: &mut Nucleo<Arc<str>>, query: &str) {
    nucleo.pattern.reparse(
        0,
        query,
        nucleo::pattern::CaseMatching::Smart,
        nucleo::pattern::Normalization::Smart,
        false,
    );
}

/// Collect .txt files under the current directory and the user's home
/// directory, deduplicated and sorted.
fn find_txt_files() -> Vec<String> {
    let mut all_files = Vec::new();

    walk_for_txt(Path::new("."), 0, &mut all_files);
    if let Some(home) = dirs::home_dir() {
        let docs = home.join("Documents");
        if docs.is_dir() {
            walk_for_txt(&docs, 0, &mut all_files);
        }
    }

    all_files.sort();
    all_files.dedup();
    all_files
}

fn walk_for_txt(dir: &Path, depth: usize, out: &mut Vec<String>) {
    if depth > MAX_WALK_DEPTH {
        return;
    }
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return,
    };
    for entry in entries.flatten() {
        let path = entry.path();
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.starts_with('.') {
            continue;
        }
        if path.is_dir() {
            walk_for_txt(&path, depth + 1, out);
        } else if path.extension().map_or(false, |ext| ext == "txt") {
            out.push(path.to_string_lossy().to_string());
        }
    }
}
