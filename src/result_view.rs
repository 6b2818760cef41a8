// Textual panels for a normalized analysis result
use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    execute,
    style::{Print, ResetColor, SetForegroundColor},
};
use std::io::Write;

use crate::model::{summary_of, AnalysisResult};
use crate::theme::SentiTheme;

pub const POLARITY_NOTE: &str = "Note: The model analyzes the tone based on overall context and \
phrasing. A polarity above 0.1 generally indicates a positive tone.";

/// Greedy word wrap into lines of at most `width` chars.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for source_line in text.lines() {
        let mut current = String::new();
        for word in source_line.split_whitespace() {
            let word_len = word.chars().count();
            let current_len = current.chars().count();
            if current.is_empty() {
                // Hard-break words longer than the panel
                let mut w: String = word.to_string();
                while w.chars().count() > width {
                    let head: String = w.chars().take(width).collect();
                    lines.push(head);
                    w = w.chars().skip(width).collect();
                }
                current = w;
            } else if current_len + 1 + word_len <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current = word.to_string();
            }
        }
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Lines of the VADER panel: three percentages to two decimals plus the raw
/// compound score.
pub fn vader_lines(result: &AnalysisResult) -> Vec<String> {
    let v = &result.vader;
    vec![
        format!("Positive: {:.2}%", v.pos * 100.0),
        format!("Neutral:  {:.2}%", v.neu * 100.0),
        format!("Negative: {:.2}%", v.neg * 100.0),
        format!("Compound: {}", v.compound),
    ]
}

/// Lines of the Hugging Face panel: label, polarity, truncated summary and
/// the fixed polarity-threshold note.
pub fn huggingface_lines(result: &AnalysisResult, width: usize) -> Vec<String> {
    let hf = &result.huggingface;
    let mut lines = vec![
        format!("Sentiment: {}", hf.sentiment.label()),
        format!("Polarity:  {:.2}", hf.polarity),
        String::new(),
        "Generated Summary:".to_string(),
    ];
    lines.extend(wrap_text(&summary_of(&hf.response), width));
    lines.push(String::new());
    lines.extend(wrap_text(POLARITY_NOTE, width));
    lines
}

fn render_panel<W: Write>(
    out: &mut W,
    title: &str,
    title_color: crossterm::style::Color,
    lines: &[String],
    x: u16,
    y: u16,
    width: u16,
    max_height: u16,
) -> Result<u16> {
    execute!(
        out,
        MoveTo(x, y),
        SetForegroundColor(title_color),
        Print(format!("┌─ {} ", title)),
        Print("─".repeat((width as usize).saturating_sub(title.chars().count() + 4))),
        ResetColor,
    )?;

    let mut row = y + 1;
    for line in lines.iter().take(max_height.saturating_sub(1) as usize) {
        let clipped: String = line.chars().take(width as usize).collect();
        execute!(
            out,
            MoveTo(x, row),
            SetForegroundColor(SentiTheme::text_primary()),
            Print(clipped),
            ResetColor,
        )?;
        row += 1;
    }
    Ok(row - y)
}

/// Echoed input block above the panels.
pub fn render_input_echo<W: Write>(
    out: &mut W,
    result: &AnalysisResult,
    x: u16,
    y: u16,
    width: u16,
    max_height: u16,
) -> Result<u16> {
    let lines = wrap_text(&result.input, width.saturating_sub(2) as usize);
    render_panel(
        out,
        "Analyzed Text",
        SentiTheme::text_secondary(),
        &lines,
        x,
        y,
        width,
        max_height,
    )
}

pub fn render_vader_panel<W: Write>(
    out: &mut W,
    result: &AnalysisResult,
    x: u16,
    y: u16,
    width: u16,
    max_height: u16,
) -> Result<u16> {
    render_panel(
        out,
        "VADER Results",
        SentiTheme::series_vader(),
        &vader_lines(result),
        x,
        y,
        width,
        max_height,
    )
}

pub fn render_huggingface_panel<W: Write>(
    out: &mut W,
    result: &AnalysisResult,
    x: u16,
    y: u16,
    width: u16,
    max_height: u16,
) -> Result<u16> {
    let lines = huggingface_lines(result, width.saturating_sub(2) as usize);
    render_panel(
        out,
        "Hugging Face Results",
        SentiTheme::series_huggingface(),
        &lines,
        x,
        y,
        width,
        max_height,
    )
}

/// Full plain-text report for one-shot CLI mode.
pub fn plain_report(result: &AnalysisResult) -> String {
    let series = crate::chart::ChartSeries::from_result(result);
    let mut out = Vec::new();

    out.push("── Sentiment Comparison ──".to_string());
    out.extend(crate::chart::plain_lines(&series, 40));
    out.push(String::new());

    out.push("Analyzed Text:".to_string());
    for line in wrap_text(&result.input, 76) {
        out.push(format!("  {}", line));
    }
    out.push(String::new());

    out.push("VADER Results:".to_string());
    for line in vader_lines(result) {
        out.push(format!("  {}", line));
    }
    out.push(String::new());

    out.push("Hugging Face Results:".to_string());
    for line in huggingface_lines(result, 74) {
        out.push(format!("  {}", line));
    }

    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HuggingFaceResult, Sentiment, VaderScores};

    fn sample() -> AnalysisResult {
        AnalysisResult {
            input: "the service was fine".into(),
            vader: VaderScores { pos: 0.2, neu: 0.5, neg: 0.3, compound: 0.1234 },
            huggingface: HuggingFaceResult {
                sentiment: Sentiment::Neutral,
                polarity: 0.05678,
                response: "Good news. Things improved. Details omitted.".into(),
            },
        }
    }

    #[test]
    fn vader_panel_formats_percentages_to_two_decimals() {
        let lines = vader_lines(&sample());
        assert_eq!(lines[0], "Positive: 20.00%");
        assert_eq!(lines[1], "Neutral:  50.00%");
        assert_eq!(lines[2], "Negative: 30.00%");
        // compound stays raw
        assert_eq!(lines[3], "Compound: 0.1234");
    }

    #[test]
    fn huggingface_panel_shows_label_polarity_and_summary() {
        let lines = huggingface_lines(&sample(), 120);
        assert_eq!(lines[0], "Sentiment: Neutral");
        assert_eq!(lines[1], "Polarity:  0.06");
        assert!(lines.contains(&"Good news. Things improved.".to_string()));
    }

    #[test]
    fn wrap_respects_width() {
        let lines = wrap_text("alpha beta gamma delta", 11);
        assert_eq!(lines, vec!["alpha beta", "gamma delta"]);
    }

    #[test]
    fn wrap_hard_breaks_oversized_words() {
        let lines = wrap_text("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn plain_report_contains_all_sections() {
        let report = plain_report(&sample());
        assert!(report.contains("VADER Results:"));
        assert!(report.contains("Hugging Face Results:"));
        assert!(report.contains("the service was fine"));
        assert!(report.contains("polarity above 0.1"));
    }
}
