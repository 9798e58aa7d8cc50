//! Output modes and rendering of command results.

use clap::ValueEnum;
use console::Style;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Plain text, emphasized when stdout is a terminal
    Auto,
    /// Plain text, always emphasized
    Term,
    /// Plain text, never emphasized
    Text,
    /// Structured JSON
    Json,
}

impl OutputMode {
    pub fn is_json(self) -> bool {
        matches!(self, OutputMode::Json)
    }

    pub fn should_use_color(self) -> bool {
        match self {
            OutputMode::Auto => console::colors_enabled(),
            OutputMode::Term => true,
            OutputMode::Text | OutputMode::Json => false,
        }
    }
}

/// Result of `apply`, as serialized in JSON mode.
#[derive(Debug, Serialize)]
pub struct Applied<'a> {
    pub style: &'static str,
    pub input: &'a str,
    pub output: &'a str,
}

/// Result of `strip`, as serialized in JSON mode.
#[derive(Debug, Serialize)]
pub struct Stripped<'a> {
    pub input: &'a str,
    pub output: &'a str,
    pub styled: bool,
}

/// One row of the `styles` listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleRow {
    pub name: &'static str,
    pub label: &'static str,
    pub short_label: &'static str,
    pub preview: String,
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

/// Lays out style rows as aligned columns: name, label, preview.
pub fn render_style_rows(rows: &[StyleRow], use_color: bool) -> String {
    let name_width = rows.iter().map(|row| row.name.width()).max().unwrap_or(0);
    let label_width = rows.iter().map(|row| row.label.width()).max().unwrap_or(0);
    let emphasis = Style::new().bold().force_styling(use_color);
    let muted = Style::new().dim().force_styling(use_color);

    let mut out = String::new();
    for row in rows {
        let name = pad_right(row.name, name_width);
        let label = pad_right(row.label, label_width);
        out.push_str(&format!(
            "{}  {}  {}\n",
            emphasis.apply_to(name),
            muted.apply_to(label),
            row.preview
        ));
    }
    out
}

/// Pads `s` with spaces up to `width` display columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let current = s.width();
    if current >= width {
        return s.to_string();
    }
    format!("{}{}", s, " ".repeat(width - current))
}
