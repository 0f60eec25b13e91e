// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Permutator CLI
//!
//! Thin front end over `permutator-core`: picks a strategy by name, hands it
//! the raw inputs and a destination, and reports what was written.

mod cli;
mod commands;

use std::io::{self, BufWriter, Write};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Args, Command};
use commands::Settings;

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match args.cmd {
        Command::List => {
            let settings = Settings::load(args.config_dir.as_deref())?;
            commands::list(&settings, &mut out)?;
        }
        Command::Count { strategy, inputs } => {
            let settings = Settings::load(args.config_dir.as_deref())?;
            commands::count(&settings, &strategy, &inputs, &mut out)?;
        }
        Command::Print { chars, inputs } => commands::print(chars, &inputs, &mut out)?,
        Command::Run(run) => {
            let mut settings = Settings::load(args.config_dir.as_deref())?;
            commands::run(&mut settings, run, &mut out)?;
        }
        Command::Config(cmd) => {
            let mut settings = Settings::load(args.config_dir.as_deref())?;
            commands::config(&mut settings, cmd, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}
