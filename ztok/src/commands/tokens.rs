//! Tokens command implementation.
//!
//! Prints the token stream of each input file, as text or JSON, optionally
//! followed by the file's line-offset table.

use std::io::Write;
use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info};
use zc_lex::{tokenize, ScanError, Token};

use crate::commands::common::{describe_token, read_source, OutputFormat};
use crate::config::{Config, OutputConfig};
use crate::error::{Result, ToolError};

/// Arguments for the tokens command.
#[derive(Debug, Clone, Default)]
pub struct TokensArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Files to tokenize.
    pub files: Vec<PathBuf>,
    /// Output format; the config value when unset.
    pub format: Option<OutputFormat>,
    /// Print the line table.
    pub lines: bool,
}

/// JSON document written for one file.
#[derive(Serialize)]
struct FileTokens<'a> {
    file: String,
    tokens: &'a [Token],
    #[serde(skip_serializing_if = "Option::is_none")]
    line_offsets: Option<&'a [usize]>,
    error: Option<&'a ScanError>,
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
    config: Config,
}

impl TokensCommand {
    /// Create a new TokensCommand.
    pub fn new(args: TokensArgs, config: Config) -> Self {
        Self { args, config }
    }

    /// Effective output settings: flags override the configuration.
    pub fn output_config(&self) -> OutputConfig {
        let mut output = self.config.output.clone();
        if let Some(format) = self.args.format {
            output.format = format;
        }
        output.show_line_table |= self.args.lines;
        output
    }

    /// Execute the command, writing to stdout.
    pub fn run(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run_to(&mut out)
    }

    /// Execute the command, writing to `out`.
    ///
    /// Every file is printed even if an earlier one failed to scan; the
    /// command fails afterwards if any did.
    pub fn run_to(&self, out: &mut impl Write) -> Result<()> {
        if self.args.files.is_empty() {
            return Err(ToolError::FileOperation("No input files specified".to_string()));
        }

        let output = self.output_config();
        let mut failed = 0usize;

        for path in &self.args.files {
            let file = read_source(path)?;
            let result = tokenize(&file.bytes);
            debug!(file = %file.name(), tokens = result.tokens.len(), "tokenized");

            match output.format {
                OutputFormat::Text => {
                    if self.args.files.len() > 1 {
                        writeln!(out, "==> {} <==", file.name())?;
                    }
                    for token in &result.tokens {
                        writeln!(out, "{}", describe_token(token))?;
                    }
                    if output.show_line_table {
                        let offsets: Vec<String> =
                            result.line_offsets.iter().map(|o| o.to_string()).collect();
                        writeln!(out, "lines: {}", offsets.join(" "))?;
                    }
                    if let Some(error) = &result.error {
                        writeln!(out, "error: {}:{}", file.name(), error)?;
                    }
                },
                OutputFormat::Json => {
                    let doc = FileTokens {
                        file: file.name(),
                        tokens: &result.tokens,
                        line_offsets: output
                            .show_line_table
                            .then_some(result.line_offsets.as_slice()),
                        error: result.error.as_ref(),
                    };
                    serde_json::to_writer_pretty(&mut *out, &doc)?;
                    writeln!(out)?;
                },
            }

            if !result.is_ok() {
                failed += 1;
            }
        }

        if self.args.verbose {
            info!(files = self.args.files.len(), failed, "tokens finished");
        }

        if failed > 0 {
            return Err(ToolError::Scan(format!("{} file(s) failed", failed)));
        }
        Ok(())
    }
}

/// Run the tokens command.
pub fn run_tokens(args: TokensArgs, config: Config) -> Result<()> {
    TokensCommand::new(args, config).run()
}
