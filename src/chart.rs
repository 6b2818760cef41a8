// Grouped bar chart for the VADER / Hugging Face comparison
use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    execute,
    style::{Print, ResetColor, SetForegroundColor},
};
use std::io::Write;

use crate::model::{AnalysisResult, Sentiment};
use crate::theme::SentiTheme;

pub const CATEGORIES: [&str; 3] = ["Positive", "Neutral", "Negative"];

/// The two series shown in the comparison chart, in category order
/// Positive / Neutral / Negative, each on a 0..=100 scale.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub vader: [f64; 3],
    pub huggingface: [f64; 3],
}

impl ChartSeries {
    /// VADER fractions scale to percentages; the Hugging Face label becomes a
    /// one-hot series (100 for the matching category, 0 elsewhere).
    pub fn from_result(result: &AnalysisResult) -> Self {
        let v = &result.vader;
        let label = result.huggingface.sentiment;
        let one_hot = |s: Sentiment| if label == s { 100.0 } else { 0.0 };
        Self {
            vader: [v.pos * 100.0, v.neu * 100.0, v.neg * 100.0],
            huggingface: [
                one_hot(Sentiment::Positive),
                one_hot(Sentiment::Neutral),
                one_hot(Sentiment::Negative),
            ],
        }
    }
}

/// Bar body for a 0..=100 value within `max_width` cells. Nonzero values
/// always get at least one cell so small scores stay visible.
pub fn bar_cells(value: f64, max_width: usize) -> String {
    let clamped = value.clamp(0.0, 100.0);
    let mut cells = ((clamped / 100.0) * max_width as f64).round() as usize;
    if clamped > 0.0 {
        cells = cells.max(1);
    }
    "█".repeat(cells.min(max_width))
}

/// Draw the grouped chart at (x, y). Returns the number of rows used.
pub fn render<W: Write>(
    out: &mut W,
    series: &ChartSeries,
    x: u16,
    y: u16,
    width: u16,
) -> Result<u16> {
    // "Positive  VADER " prefix plus a numeric suffix
    let bar_width = (width as usize).saturating_sub(22).max(10);
    let mut row = y;

    for (i, category) in CATEGORIES.iter().enumerate() {
        execute!(
            out,
            MoveTo(x, row),
            SetForegroundColor(SentiTheme::text_secondary()),
            Print(format!("{:<9}", category)),
        )?;
        row += 1;

        for (label, value, color) in [
            ("VADER", series.vader[i], SentiTheme::series_vader()),
            ("HF   ", series.huggingface[i], SentiTheme::series_huggingface()),
        ] {
            execute!(
                out,
                MoveTo(x + 2, row),
                SetForegroundColor(SentiTheme::text_dim()),
                Print(format!("{} ", label)),
                SetForegroundColor(color),
                Print(bar_cells(value, bar_width)),
                SetForegroundColor(SentiTheme::text_secondary()),
                Print(format!(" {:.1}", value)),
                ResetColor,
            )?;
            row += 1;
        }
    }

    Ok(row - y)
}

/// Plain-text rendition for one-shot CLI output.
pub fn plain_lines(series: &ChartSeries, bar_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, category) in CATEGORIES.iter().enumerate() {
        lines.push(category.to_string());
        lines.push(format!(
            "  VADER {} {:.1}",
            bar_cells(series.vader[i], bar_width),
            series.vader[i]
        ));
        lines.push(format!(
            "  HF    {} {:.1}",
            bar_cells(series.huggingface[i], bar_width),
            series.huggingface[i]
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HuggingFaceResult, VaderScores};

    fn result_with(vader: VaderScores, sentiment: Sentiment) -> AnalysisResult {
        AnalysisResult {
            input: "x".into(),
            vader,
            huggingface: HuggingFaceResult {
                sentiment,
                polarity: 0.0,
                response: String::new(),
            },
        }
    }

    #[test]
    fn vader_series_scales_fractions_to_percentages() {
        let result = result_with(
            VaderScores { pos: 0.2, neu: 0.5, neg: 0.3, compound: 0.1 },
            Sentiment::Neutral,
        );
        let series = ChartSeries::from_result(&result);
        assert_eq!(series.vader, [20.0, 50.0, 30.0]);
    }

    #[test]
    fn huggingface_series_is_one_hot() {
        let result = result_with(
            VaderScores { pos: 0.0, neu: 0.0, neg: 1.0, compound: -0.9 },
            Sentiment::Negative,
        );
        let series = ChartSeries::from_result(&result);
        assert_eq!(series.huggingface, [0.0, 0.0, 100.0]);
    }

    #[test]
    fn bar_cells_scale_with_value() {
        assert_eq!(bar_cells(100.0, 10).chars().count(), 10);
        assert_eq!(bar_cells(50.0, 10).chars().count(), 5);
        assert_eq!(bar_cells(0.0, 10).chars().count(), 0);
    }

    #[test]
    fn tiny_nonzero_values_keep_one_cell() {
        assert_eq!(bar_cells(0.4, 10).chars().count(), 1);
    }

    #[test]
    fn out_of_range_values_clamp() {
        assert_eq!(bar_cells(250.0, 10).chars().count(), 10);
        assert_eq!(bar_cells(-5.0, 10).chars().count(), 0);
    }
}
