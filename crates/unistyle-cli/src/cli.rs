use std::str::FromStr;

use clap::{ArgAction, Args, Parser, Subcommand};
use unistyle::StyleTag;

use crate::output::OutputMode;

/// Style text with Unicode bold, italic, monospace, underline and strikethrough.
#[derive(Debug, Parser)]
#[command(name = "unistyle", about, version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output mode: auto, term, text, or json
    #[arg(long, value_enum, global = true, default_value_t = OutputMode::Auto)]
    pub output: OutputMode,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render text in a style
    Apply {
        /// Style to apply: bold, italic, boldItalic, underline, strikethrough, monospace
        #[arg(short, long, env = "UNISTYLE_STYLE", value_parser = StyleTag::from_str)]
        style: StyleTag,

        #[command(flatten)]
        input: InputArgs,
    },

    /// Remove styling and recover plain text
    Strip {
        #[command(flatten)]
        input: InputArgs,
    },

    /// List the available styles with a preview
    Styles,
}

/// Where the text to transform comes from.
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Text to transform, joined with spaces. Reads stdin when omitted
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,
}
