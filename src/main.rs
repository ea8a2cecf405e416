//! prcheck - pattern-based pull request review checks for CI.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use prcheck::cli::{self, Cli, Commands};
use prcheck::Error;

fn main() -> Result<(), Error> {
    // Logs go to stderr; stdout carries the review output
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("prcheck=info".parse().unwrap()))
        .init();

    let cli = Cli::parse();
    let config_path = cli.config_path();

    match &cli.command {
        Commands::Check {
            range,
            files,
            format,
        } => {
            let config = cli.load_config()?;
            let exit_code = cli::check::run(&cli.root, &config, range, files.clone(), *format)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Commands::Files { range } => {
            let config = cli.load_config()?;
            cli::files::run(&cli.root, &config, range)?;
        }
        Commands::Config => {
            let config = cli.load_config()?;
            cli::config::show(&config_path, &config)?;
        }
        Commands::Init { force } => {
            cli::init::run(&config_path, *force)?;
        }
    }

    Ok(())
}
