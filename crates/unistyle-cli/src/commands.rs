//! Command handlers.
//!
//! Each handler takes the resolved input text and returns the rendered
//! output, leaving stdout and stdin handling to `main`.

use std::io::Read;

use anyhow::{Context, Result};
use unistyle::{apply, is_styled, strip, StyleTag};

use crate::cli::InputArgs;
use crate::output::{render_style_rows, to_json, Applied, OutputMode, StyleRow, Stripped};

/// Text handed to a command, and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Positional words joined with single spaces.
    Args(String),
    /// Everything read from stdin.
    Stdin(String),
}

impl Input {
    pub fn resolve(args: &InputArgs) -> Result<Self> {
        if !args.text.is_empty() {
            return Ok(Input::Args(args.text.join(" ")));
        }
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read text from stdin")?;
        tracing::debug!(bytes = buf.len(), "read input from stdin");
        Ok(Input::Stdin(buf))
    }

    pub fn text(&self) -> &str {
        match self {
            Input::Args(text) | Input::Stdin(text) => text,
        }
    }

    /// Runs `f` over the text. Stdin is transformed line by line so line
    /// terminators are kept as-is and never styled.
    fn transform(&self, f: impl Fn(&str) -> String) -> String {
        match self {
            Input::Args(text) => f(text),
            Input::Stdin(text) => text
                .split_inclusive('\n')
                .map(|line| {
                    let body = line.trim_end_matches(['\n', '\r']);
                    let mut out = f(body);
                    out.push_str(&line[body.len()..]);
                    out
                })
                .collect(),
        }
    }

    /// Appends the trailing newline stdin input already carries.
    fn finish(&self, mut rendered: String) -> String {
        if matches!(self, Input::Args(_)) {
            rendered.push('\n');
        }
        rendered
    }
}

pub fn run_apply(input: &Input, style: StyleTag, mode: OutputMode) -> Result<String> {
    tracing::info!(%style, "applying style");
    let output = input.transform(|text| apply(text, style));

    if mode.is_json() {
        let applied = Applied {
            style: style.name(),
            input: input.text(),
            output: &output,
        };
        return Ok(to_json(&applied)? + "\n");
    }
    Ok(input.finish(output))
}

pub fn run_strip(input: &Input, mode: OutputMode) -> Result<String> {
    let styled = is_styled(input.text());
    tracing::info!(styled, "stripping styles");
    let output = input.transform(strip);

    if mode.is_json() {
        let stripped = Stripped {
            input: input.text(),
            output: &output,
            styled,
        };
        return Ok(to_json(&stripped)? + "\n");
    }
    Ok(input.finish(output))
}

pub fn run_styles(mode: OutputMode) -> Result<String> {
    let rows: Vec<StyleRow> = StyleTag::ALL
        .iter()
        .map(|tag| StyleRow {
            name: tag.name(),
            label: tag.label(),
            short_label: tag.short_label(),
            preview: tag.preview(),
        })
        .collect();

    if mode.is_json() {
        return Ok(to_json(&rows)? + "\n");
    }
    Ok(render_style_rows(&rows, mode.should_use_color()))
}
