mod commands;
mod error;
mod session;

use anyhow::{Context as _, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::error::{exit_code_for, report_error};
use crate::session::Session;
use phonebook_config as config;

#[derive(Debug, Parser)]
#[command(name = "phonebook", version, about = "Interactive in-memory contact book")]
struct Cli {
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        verbose,
    } = cli;

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config_path.or_else(config::default_config_path) {
            Some(path) if path.exists() => debug!(path = %path.display(), "config resolved"),
            Some(path) => debug!(path = %path.display(), "config missing, using defaults"),
            None => debug!("no config location, using defaults"),
        }
    }

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    let mut session = Session::new(&app_config, &mut input, &mut output);
    session.run().with_context(|| "interactive session")
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
