// TUI shell: app state, event loop, and screen rendering
use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event},
    execute,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Write};
use std::time::Duration;
use tokio::sync::mpsc;

use crate::chart::{self, ChartSeries};
use crate::client::{self, AnalysisClient};
use crate::config;
use crate::debug_log;
use crate::debug_panel::DebugPanel;
use crate::file_picker;
use crate::input::InputCollector;
use crate::keyboard;
use crate::model::{AnalysisRequest, AnalysisResult};
use crate::result_view;
use crate::screen_mode::ScreenMode;
use crate::theme::SentiTheme;
use crate::types::{self, AppFlags, InputMode};

// Rows occupied by the editable input area on the Analyze screen
const INPUT_TOP: u16 = 3;
const INPUT_HEIGHT: u16 = 6;

pub struct App {
    pub collector: InputCollector,
    pub client: AnalysisClient,
    pub result: Option<AnalysisResult>,
    pub flags: AppFlags,
    pub screen_mode: ScreenMode,
    pub status_message: String,
    pub open_file_picker: bool,
    pub debug_panel: DebugPanel,
    pub last_rendered_screen: Option<ScreenMode>,
    pending: Option<mpsc::Receiver<types::Result<AnalysisResult>>>,
}

impl App {
    pub fn new(client: AnalysisClient) -> Self {
        debug_log(format!("SentiScope started, endpoint {}", client.endpoint()));
        Self {
            collector: InputCollector::new(),
            client,
            result: None,
            flags: AppFlags::REDRAW,
            screen_mode: ScreenMode::Analyze,
            status_message: String::new(),
            open_file_picker: false,
            debug_panel: DebugPanel::new(),
            last_rendered_screen: None,
            pending: None,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.flags.contains(AppFlags::BUSY)
    }

    /// Kick off one analysis unless empty or already in flight. The BUSY
    /// flag hard-blocks resubmission until the response lands.
    pub fn submit_analysis(&mut self) {
        if self.flags.contains(AppFlags::BUSY) {
            debug_log("Submit ignored: analysis already in flight");
            return;
        }
        if !self.collector.has_content() {
            debug_log("Submit ignored: empty content");
            return;
        }

        let content = self.collector.content();
        let request = match self.collector.mode {
            InputMode::Text => AnalysisRequest::typed(&content),
            InputMode::File => AnalysisRequest::from_file(&content),
        };

        debug_log(format!(
            "Submitting {} chars ({:?} mode)",
            content.chars().count(),
            self.collector.mode
        ));
        self.pending = Some(client::spawn_analysis(&self.client, request));
        self.flags.insert(AppFlags::BUSY | AppFlags::REDRAW);
    }

    /// Drain the response channel. A failure is logged and leaves the prior
    /// result untouched; either way the busy flag clears.
    pub fn poll_response(&mut self) {
        let Some(rx) = &mut self.pending else { return };
        match rx.try_recv() {
            Ok(Ok(result)) => {
                debug_log(format!(
                    "Analysis complete: {}",
                    result.huggingface.sentiment.label()
                ));
                self.result = Some(result);
                self.status_message = "Analysis complete".to_string();
                self.finish_request();
            }
            Ok(Err(e)) => {
                debug_log(format!("Sentiment analysis failed: {}", e));
                self.status_message = String::new();
                self.finish_request();
            }
            Err(mpsc::error::TryRecvError::Empty) => {}
            Err(mpsc::error::TryRecvError::Disconnected) => {
                debug_log("Analysis task dropped without a response");
                self.finish_request();
            }
        }
    }

    fn finish_request(&mut self) {
        self.pending = None;
        self.flags.remove(AppFlags::BUSY);
        self.flags.insert(AppFlags::REDRAW);
    }
}

pub fn setup_terminal() -> Result<()> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, Hide)?;
    Ok(())
}

pub fn restore_terminal() -> Result<()> {
    execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
    execute!(io::stdout(), Show, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

pub async fn run_app(app: &mut App) -> Result<()> {
    let mut stdout = io::stdout();
    let mut last_term_size = (0, 0);

    app.flags.insert(AppFlags::REDRAW);

    loop {
        let (term_width, term_height) = terminal::size()?;

        if (term_width, term_height) != last_term_size
            || app.last_rendered_screen != Some(app.screen_mode)
        {
            app.flags.insert(AppFlags::REDRAW);
            last_term_size = (term_width, term_height);
            app.last_rendered_screen = Some(app.screen_mode);
        }

        // A background analysis may have finished
        app.poll_response();

        if app.open_file_picker {
            app.open_file_picker = false;
            restore_terminal()?;

            if let Some(path) = file_picker::pick_txt_file()? {
                match app.collector.load_file(&path) {
                    Ok(()) => {
                        app.status_message = format!("Loaded {}", path.display());
                        debug_log(format!("Loaded file {}", path.display()));
                    }
                    Err(e) => {
                        app.status_message = format!("Load failed: {}", e);
                        debug_log(format!("File load failed: {}", e));
                    }
                }
            }

            setup_terminal()?;
            app.flags.insert(AppFlags::REDRAW);
        }

        if app.flags.contains(AppFlags::REDRAW) {
            execute!(stdout, Hide, Clear(ClearType::All), MoveTo(0, 0))?;

            match app.screen_mode {
                ScreenMode::Analyze => {
                    render_panel_header(
                        &mut stdout,
                        0,
                        0,
                        term_width,
                        "SENTISCOPE - VADER vs HUGGING FACE",
                        SentiTheme::header_analyze(),
                    )?;
                    render_analyze_screen(&mut stdout, app, term_width, term_height)?;
                }

                ScreenMode::Debug => {
                    render_panel_header(
                        &mut stdout,
                        0,
                        0,
                        term_width,
                        "DEBUG LOG",
                        SentiTheme::header_debug(),
                    )?;

                    if let Ok(logs) = crate::DEBUG_LOGS.lock() {
                        app.debug_panel.logs = logs.clone();
                    }
                    app.debug_panel
                        .render(0, 1, term_width, term_height.saturating_sub(2))?;
                }
            }

            render_status_bar(&mut stdout, app, term_width, term_height)?;

            // Terminal cursor marks the edit position; placed last so panel
            // drawing cannot move it away
            if app.screen_mode == ScreenMode::Analyze && app.collector.mode == InputMode::Text {
                position_text_cursor(&mut stdout, app, term_width)?;
            }

            stdout.flush()?;
            app.flags.remove(AppFlags::REDRAW);
        }

        if event::poll(Duration::from_millis(config::EVENT_POLL_MS))? {
            if let Event::Key(key) = event::read()? {
                if !keyboard::handle_input(app, key)? {
                    break;
                }
                if app.flags.contains(AppFlags::EXIT) {
                    break;
                }
            }
        }
    }

    Ok(())
}

fn render_panel_header(
    stdout: &mut io::Stdout,
    x: u16,
    y: u16,
    width: u16,
    title: &str,
    color: Color,
) -> Result<()> {
    execute!(stdout, MoveTo(x, y))?;
    execute!(stdout, SetBackgroundColor(color))?;
    execute!(stdout, SetForegroundColor(SentiTheme::text_header()))?;
    write!(stdout, "{:^width$}", format!(" {} ", title), width = width as usize)?;
    execute!(stdout, ResetColor)?;
    Ok(())
}

fn render_analyze_screen(
    stdout: &mut io::Stdout,
    app: &App,
    term_width: u16,
    term_height: u16,
) -> Result<()> {
    // Mode selector line
    let text_active = app.collector.mode == InputMode::Text;
    execute!(stdout, MoveTo(0, 1))?;
    for (label, active) in [("[ Text ]", text_active), ("[ File ]", !text_active)] {
        if active {
            execute!(
                stdout,
                SetForegroundColor(SentiTheme::text_header()),
                SetBackgroundColor(SentiTheme::header_analyze()),
                Print(label),
                ResetColor,
                Print(" ")
            )?;
        } else {
            execute!(
                stdout,
                SetForegroundColor(SentiTheme::text_dim()),
                Print(label),
                ResetColor,
                Print(" ")
            )?;
        }
    }

    // Input area
    match app.collector.mode {
        InputMode::Text => {
            let lines = app.collector.lines();
            let first = lines.len().saturating_sub(INPUT_HEIGHT as usize);
            for (i, line) in lines.iter().skip(first).take(INPUT_HEIGHT as usize).enumerate() {
                let clipped: String = line
                    .chars()
                    .take((term_width as usize).saturating_sub(2))
                    .collect();
                execute!(
                    stdout,
                    MoveTo(1, INPUT_TOP + i as u16),
                    SetForegroundColor(SentiTheme::text_primary()),
                    Print(clipped),
                    ResetColor
                )?;
            }
        }
        InputMode::File => {
            let line = match app.collector.file_summary() {
                Some(summary) => format!("File: {}", summary),
                None => "No file selected - press Ctrl+O to pick a .txt file".to_string(),
            };
            execute!(
                stdout,
                MoveTo(1, INPUT_TOP),
                SetForegroundColor(SentiTheme::accent_file()),
                Print(line),
                ResetColor
            )?;
        }
    }

    // Results, as a pure function of the latest normalized result
    if let Some(result) = &app.result {
        let results_top = INPUT_TOP + INPUT_HEIGHT + 1;
        let split_x = term_width / 2;
        let available = term_height.saturating_sub(results_top + 1);

        let series = ChartSeries::from_result(result);
        let chart_rows = chart::render(stdout, &series, 1, results_top, split_x.saturating_sub(2))?;

        result_view::render_input_echo(
            stdout,
            result,
            1,
            results_top + chart_rows + 1,
            split_x.saturating_sub(2),
            available.saturating_sub(chart_rows + 1),
        )?;

        let vader_rows = result_view::render_vader_panel(
            stdout,
            result,
            split_x + 1,
            results_top,
            term_width.saturating_sub(split_x + 2),
            6,
        )?;

        result_view::render_huggingface_panel(
            stdout,
            result,
            split_x + 1,
            results_top + vader_rows + 1,
            term_width.saturating_sub(split_x + 2),
            available.saturating_sub(vader_rows + 1),
        )?;
    }

    Ok(())
}

fn position_text_cursor(stdout: &mut io::Stdout, app: &App, term_width: u16) -> Result<()> {
    let first = app
        .collector
        .lines()
        .len()
        .saturating_sub(INPUT_HEIGHT as usize);
    let cursor_row = INPUT_TOP + app.collector.cursor_line.saturating_sub(first) as u16;
    let cursor_col =
        1 + app.collector.cursor_col.min((term_width as usize).saturating_sub(2)) as u16;
    execute!(stdout, MoveTo(cursor_col, cursor_row), Show)?;
    Ok(())
}

fn render_status_bar(
    stdout: &mut io::Stdout,
    app: &App,
    width: u16,
    height: u16,
) -> Result<()> {
    execute!(stdout, MoveTo(0, height - 1))?;
    execute!(stdout, SetBackgroundColor(SentiTheme::bg_status_dark()))?;
    execute!(stdout, SetForegroundColor(SentiTheme::text_status_dark()))?;

    let screen_name = match app.screen_mode {
        ScreenMode::Analyze => "ANALYZE",
        ScreenMode::Debug => "DEBUG",
    };

    let state = if app.is_busy() {
        "Analyzing..."
    } else if app.status_message.is_empty() {
        "Ready"
    } else {
        &app.status_message
    };

    let status = format!(
        " {} | {} mode | {} | Ctrl+T/F: Mode | Ctrl+O: Open | Ctrl+R: Analyze | Tab: Debug | Ctrl+C: Quit ",
        screen_name,
        app.collector.mode.label(),
        state
    );

    let status_len = status.chars().count();
    execute!(stdout, Print(&status))?;
    execute!(stdout, Print(" ".repeat((width as usize).saturating_sub(status_len))))?;
    execute!(stdout, ResetColor)?;

    Ok(())
}
