//! `camctl`: command-line front end for the digest-authenticated camera API.
//!
//! Argument parsing, logger and colour setup happen here; everything else is
//! in the library.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::Parser;

use digest_requester::cli::{
    self, configure_colors, init_logger, CommandSource, LineEditor, Options, Prompted,
};

fn main() -> Result<()> {
    let options = Options::parse();

    init_logger(options.log_level.into()).context("Failed to initialize logger")?;
    configure_colors(options.force_color);

    let client = reqwest::blocking::Client::builder()
        .build()
        .context("Failed to create HTTP client")?;
    let requester = cli::requester(&options, client);

    let stdin = io::stdin();
    let interactive = options.commands.is_empty() && stdin.is_terminal();
    let mut input: Box<dyn CommandSource> = if interactive {
        Box::new(LineEditor::new().context("Failed to open line editor")?)
    } else {
        Box::new(Prompted::new(stdin.lock()))
    };

    let stdout = io::stdout();
    let stderr = io::stderr();
    cli::run(
        &options,
        &requester,
        input.as_mut(),
        &mut stdout.lock(),
        &mut stderr.lock(),
    )
}
