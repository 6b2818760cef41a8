// Theme module - color scheme and styling
use crossterm::style::Color;

pub struct SentiTheme;

impl SentiTheme {
    pub fn bg_status_dark() -> Color {
        Color::Rgb { r: 40, g: 40, b: 46 }
    }

    pub fn text_status_dark() -> Color {
        Color::Rgb { r: 200, g: 200, b: 200 }
    }

    pub fn text_primary() -> Color {
        Color::Rgb { r: 248, g: 248, b: 242 }
    }

    pub fn text_secondary() -> Color {
        Color::Rgb { r: 180, g: 180, b: 180 }
    }

    pub fn text_dim() -> Color {
        Color::Rgb { r: 120, g: 120, b: 120 }
    }

    pub fn text_header() -> Color {
        Color::Black
    }

    pub fn header_analyze() -> Color {
        Color::Rgb { r: 176, g: 196, b: 222 }  // Light steel blue
    }

    pub fn header_debug() -> Color {
        Color::Rgb { r: 152, g: 195, b: 121 }  // Soft green
    }

    // Series colors match the original chart: VADER blue, Hugging Face violet
    pub fn series_vader() -> Color {
        Color::Rgb { r: 59, g: 130, b: 246 }
    }

    pub fn series_huggingface() -> Color {
        Color::Rgb { r: 139, g: 92, b: 246 }
    }

    pub fn accent_file() -> Color {
        Color::Rgb { r: 219, g: 112, b: 147 }  // Soft pink
    }

    pub fn success() -> Color {
        Color::Rgb { r: 152, g: 195, b: 121 }
    }
}
