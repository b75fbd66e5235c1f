//! Command modules for the ztok CLI.
//!
//! Each subcommand is implemented in its own file: an `*Args` struct filled
//! from the command line, a `*Command` handler that merges it with the
//! configuration, and a `run_*` entry point.

pub mod common;

pub mod check;
pub mod tokens;

// Re-export command types and functions
pub use check::{run_check, CheckArgs};
pub use tokens::{run_tokens, TokensArgs};
