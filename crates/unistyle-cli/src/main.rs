mod cli;
mod commands;
mod logging;
mod output;

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use commands::Input;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mode = cli.output;
    let rendered = match cli.command {
        Commands::Apply { style, ref input } => {
            commands::run_apply(&Input::resolve(input)?, style, mode)?
        }
        Commands::Strip { ref input } => commands::run_strip(&Input::resolve(input)?, mode)?,
        Commands::Styles => commands::run_styles(mode)?,
    };

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .and_then(|()| stdout.flush())
        .context("failed to write output")
}
