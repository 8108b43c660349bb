//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use cascade_cli::OutputFormat;

#[derive(Parser)]
#[command(name = "cascade")]
#[command(about = "Resolve @inherit markers in stylesheet trees", long_about = None)]
#[command(after_help = "Use 'cascade <command> --help' for more information about a command.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to a config file (defaults to ./.cascade.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log the pass's progress to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the @inherit pass and print the resolved tree
    #[command(visible_alias = "run")]
    Resolve {
        /// Tree file to resolve ('-' reads stdin)
        path: PathBuf,

        /// Output format (overrides the config file)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Print pass statistics to stderr
        #[arg(short, long)]
        stats: bool,
    },

    /// Print a tree as read, without resolving it
    #[command(visible_alias = "cat")]
    Show {
        /// Tree file to print ('-' reads stdin)
        path: PathBuf,

        /// Output format (overrides the config file)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Resolve many files and report which ones fail
    #[command(visible_alias = "lint")]
    Check {
        /// Files or glob patterns (e.g., "styles/**/*.tree")
        #[arg(required = true)]
        patterns: Vec<String>,
    },
}
