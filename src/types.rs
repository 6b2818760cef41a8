// Core types for SentiScope

/// Which input source feeds the analysis request.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Text,
    File,
}

impl InputMode {
    pub fn label(&self) -> &'static str {
        match self {
            InputMode::Text => "TEXT",
            InputMode::File => "FILE",
        }
    }
}

// App state flags using bitflags
bitflags::bitflags! {
    #[derive(Debug)]
    pub struct AppFlags: u8 {
        const EXIT   = 0b001;
        const REDRAW = 0b010;
        const BUSY   = 0b100;
    }
}

// Error types
#[derive(Debug, thiserror::Error)]
pub enum SentiError {
    #[error("analysis request failed: {0}")]
    Request(String),

    #[error("unexpected response shape: {0}")]
    ResponseShape(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SentiError>;
