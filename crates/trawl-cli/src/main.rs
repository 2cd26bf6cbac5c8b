//! # Trawl CLI
//!
//! Command-line interface for the Trawl path globbing engine.
//!
//! ## Commands
//!
//! - `trawl match <pattern> <path>` - Test one pattern against one path
//! - `trawl filter -p <pattern> [names...]` - Keep the names that match
//! - `trawl find <base> [patterns...]` - Enumerate matching paths
//!
//! ## Example Usage
//!
//! ```bash
//! # Does the pattern match? (exit status 0 = yes, 1 = no)
//! trawl match 'src/**/*.rs' src/commands/find.rs
//!
//! # Filter a list of names coming from stdin
//! git ls-files | trawl filter -p '**/*.proto' -p '!vendor/**'
//!
//! # Find everything under the current directory except .git
//! trawl find .
//! ```

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Trawl - Extended path globbing
#[derive(Parser)]
#[command(name = "trawl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Test whether a pattern matches a path
    Match {
        /// Glob pattern (supports `**` and `!` negation)
        pattern: String,

        /// Path to test the pattern against
        path: String,
    },

    /// Keep the names that match a pattern set
    Filter {
        /// Pattern to match (can be used multiple times)
        #[arg(short, long = "pattern", required = true)]
        patterns: Vec<String>,

        /// Names to filter; read from stdin when omitted
        names: Vec<String>,
    },

    /// Enumerate paths under a base directory that match a pattern set
    Find {
        /// Base directory to search
        #[arg(default_value = ".")]
        base: PathBuf,

        /// Patterns to match; the configured defaults when omitted
        patterns: Vec<String>,

        /// Sort results before printing
        #[arg(short, long)]
        sort: bool,

        /// Resolve patterns to absolute form before matching
        #[arg(short, long)]
        absolute: bool,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },
}

#[derive(Clone, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)))
        .init();

    // Execute command. Only `find` consults the configuration, so it is
    // loaded there: a broken config file must not get in the way of plain
    // pattern evaluation.
    match cli.command {
        Commands::Match { pattern, path } => commands::matches::run(&pattern, &path),
        Commands::Filter { patterns, names } => commands::filter::run(patterns, names),
        Commands::Find {
            base,
            patterns,
            sort,
            absolute,
            output,
        } => {
            let config = match &cli.config {
                Some(path) => trawl_core::Config::load_from(path)?,
                None => trawl_core::Config::load()?,
            };
            commands::find::run(config, &base, patterns, sort, absolute, output)
        }
    }
}
