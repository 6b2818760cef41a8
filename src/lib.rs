// SentiScope - terminal client for a remote sentiment-comparison service
use std::sync::Mutex;

pub mod app;
pub mod chart;
pub mod client;
pub mod config;
pub mod debug_panel;
pub mod file_picker;
pub mod input;
pub mod keyboard;
pub mod model;
pub mod result_view;
pub mod screen_mode;
pub mod theme;
pub mod types;

// Global diagnostic log, viewable on the Debug screen
pub static DEBUG_LOGS: once_cell::sync::Lazy<Mutex<Vec<String>>> =
    once_cell::sync::Lazy::new(|| Mutex::new(Vec::new()));

pub fn debug_log<S: Into<String>>(msg: S) {
    let formatted = format!(
        "[{}] {}",
        chrono::Local::now().format("%H:%M:%S%.3f"),
        msg.into()
    );
    if let Ok(mut logs) = DEBUG_LOGS.lock() {
        logs.push(formatted);
        if logs.len() > config::MAX_DEBUG_LOGS {
            logs.remove(0);
        }
    }
}
