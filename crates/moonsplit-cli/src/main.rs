use anyhow::{Context, Result};
use clap::Parser;
use moonsplit_cli::logging::init_logging;
use moonsplit_cli::{Cli, ConfigSource, MoonSplitConfig, Runner};
use std::fs;
use std::process::ExitCode;
use tracing::{info, warn};

fn main() -> ExitCode {
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<bool> {
    let cli = Cli::parse();
    let (config, source) = MoonSplitConfig::load(cli.config.as_deref())?;
    let config = config.apply_env_overrides();
    init_logging(&config.logging, cli.verbose)?;

    match &source {
        ConfigSource::File(path) => info!(path = %path.display(), "Loaded configuration"),
        ConfigSource::Defaults { missing } => {
            warn!(path = %missing.display(), "Configuration file not found, using defaults")
        }
    }
    info!(version = env!("CARGO_PKG_VERSION"), "Starting MoOn Split");

    let mut runner = Runner::new(config)?;
    let output = runner.execute(&cli.command)?;

    match cli.command.output_path() {
        Some(path) => {
            fs::write(path, format!("{}\n", output.text))
                .with_context(|| format!("failed to write output to '{}'", path.display()))?;
            info!(path = %path.display(), "Output written");
        }
        None => println!("{}", output.text),
    }
    Ok(output.success)
}
