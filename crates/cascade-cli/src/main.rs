//! Stylesheet tree CLI tool

use anyhow::Result;
use clap::Parser;

use cascade_cli::commands::*;
use cascade_cli::errors::print_error;
use cascade_cli::Config;

mod cli;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            print_error("Failed to load configuration", &e);
            std::process::exit(1);
        }
    };

    let color = config.color && !cli.no_color;
    if !color {
        colored::control::set_override(false);
    }

    if let Err(e) = init_logging(&config, cli.verbose, color) {
        print_error("Failed to initialize logging", &e);
        std::process::exit(1);
    }

    // Execute the command
    let result = match cli.command {
        Commands::Resolve { path, format, stats } => {
            resolve_tree(&path, format.unwrap_or(config.format), stats, &config)
        }
        Commands::Show { path, format } => {
            show_tree(&path, format.unwrap_or(config.format), &config)
        }
        Commands::Check { patterns } => check_files(&patterns),
    };

    if let Err(e) = result {
        print_error("Command failed", &e);
        std::process::exit(1);
    }
}

fn init_logging(config: &Config, verbose: bool, color: bool) -> Result<()> {
    let level = if verbose { tracing::Level::DEBUG } else { config.tracing_level()? };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_ansi(color)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}
