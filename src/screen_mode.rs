// Screen modes for the TUI

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScreenMode {
    Analyze,
    Debug,
}

impl ScreenMode {
    pub fn toggle(self) -> Self {
        match self {
            ScreenMode::Analyze => ScreenMode::Debug,
            ScreenMode::Debug => ScreenMode::Analyze,
        }
    }
}
