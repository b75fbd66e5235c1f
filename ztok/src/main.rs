//! ztok CLI - Token dumps and scan checks for Zig source files.
//!
//! This is the main entry point for the ztok CLI application.
//! It uses clap for argument parsing and dispatches to the command
//! handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::common::OutputFormat;
use commands::{run_check, run_tokens, CheckArgs, TokensArgs};
use config::Config;
use error::{Result, ToolError};

/// ztok - Inspect how the zc scanner tokenizes source files
#[derive(Parser, Debug)]
#[command(name = "ztok")]
#[command(author = "zc Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Token dumps and scan checks for Zig source files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "ZTOK_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "ZTOK_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "ZTOK_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the ztok CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the token stream of each file
    Tokens(TokensCommand),

    /// Report scan errors and overflowing literals
    ///
    /// Files are scanned in parallel. The command fails if any file has a
    /// scan error, or an overflowing literal with `--deny-overflow`.
    Check(CheckCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Files to tokenize
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Also print the line-offset table
    #[arg(short, long)]
    lines: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Files to check
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Number of parallel jobs (default: from config)
    #[arg(short, long)]
    jobs: Option<u32>,

    /// Fail on number literals that overflow
    #[arg(long)]
    deny_overflow: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;

    execute_command(cli.command, cli.verbose, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so token dumps on stdout stay machine readable.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| ToolError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, verbose: bool, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => run_tokens(
            TokensArgs {
                verbose,
                files: args.files,
                format: args.format,
                lines: args.lines,
            },
            config,
        ),
        Commands::Check(args) => run_check(
            CheckArgs {
                verbose,
                files: args.files,
                jobs: args.jobs,
                deny_overflow: args.deny_overflow,
            },
            config,
        ),
    }
}
