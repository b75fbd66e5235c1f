//! Check command implementation.
//!
//! Scans every input file in parallel and reports scan errors and
//! overflowing number literals as rendered diagnostics.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info, warn};
use zc_lex::{tokenize, NumKind, Token};
use zc_util::{Diagnostic, DiagnosticCode, Handler, LineIndex};

use crate::commands::common::read_source;
use crate::config::{CheckConfig, Config};
use crate::error::{Result, ToolError};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Files to check.
    pub files: Vec<PathBuf>,
    /// Number of parallel jobs; the config value when unset.
    pub jobs: Option<u32>,
    /// Treat overflowing literals as failures.
    pub deny_overflow: bool,
}

/// Outcome of checking one file.
#[derive(Debug, Default)]
pub struct FileReport {
    /// Rendered diagnostics, in source order
    pub rendered: String,
    /// Scan errors (at most one) or read failures
    pub errors: usize,
    /// Overflowing number literals
    pub overflows: usize,
}

impl FileReport {
    /// Whether this file fails the check.
    pub fn failed(&self, deny_overflow: bool) -> bool {
        self.errors > 0 || (deny_overflow && self.overflows > 0)
    }
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
    config: Config,
}

impl CheckCommand {
    /// Create a new CheckCommand.
    pub fn new(args: CheckArgs, config: Config) -> Self {
        Self { args, config }
    }

    /// Effective check settings: flags override the configuration.
    pub fn check_config(&self) -> CheckConfig {
        let mut check = self.config.check.clone();
        if let Some(jobs) = self.args.jobs {
            check.jobs = jobs;
        }
        check.deny_overflow |= self.args.deny_overflow;
        check
    }

    /// Execute the command, diagnostics to stderr and the summary to stdout.
    pub fn run(&self) -> Result<()> {
        let mut diagnostics = std::io::stderr().lock();
        let mut summary = std::io::stdout().lock();
        self.run_to(&mut diagnostics, &mut summary)
    }

    /// Execute the command with explicit output streams.
    pub fn run_to(&self, diagnostics: &mut impl Write, summary: &mut impl Write) -> Result<()> {
        if self.args.files.is_empty() {
            return Err(ToolError::FileOperation("No input files specified".to_string()));
        }

        let check = self.check_config();
        if check.jobs == 0 {
            return Err(ToolError::Config("jobs must be at least 1".to_string()));
        }

        let start_time = Instant::now();
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(check.jobs as usize)
            .build()
            .map_err(|e| ToolError::Config(format!("Failed to start worker pool: {}", e)))?;

        let reports: Vec<FileReport> =
            pool.install(|| self.args.files.par_iter().map(|path| check_file(path)).collect());

        let mut errors = 0usize;
        let mut overflows = 0usize;
        let mut failed = 0usize;
        for report in &reports {
            diagnostics.write_all(report.rendered.as_bytes())?;
            errors += report.errors;
            overflows += report.overflows;
            if report.failed(check.deny_overflow) {
                failed += 1;
            }
        }

        writeln!(
            summary,
            "checked {} file(s): {} error(s), {} warning(s)",
            reports.len(),
            errors,
            overflows
        )?;

        if self.args.verbose {
            info!(
                files = reports.len(),
                jobs = check.jobs,
                elapsed_ms = start_time.elapsed().as_millis() as u64,
                "check finished"
            );
        }

        if failed > 0 {
            return Err(ToolError::Scan(format!("{} file(s) failed", failed)));
        }
        Ok(())
    }
}

/// Warning for a number literal whose value does not fit.
fn overflow_diagnostic(token: &Token) -> Diagnostic {
    let note = match token.num_lit().map(|lit| lit.value.kind()) {
        Some(NumKind::Int) => "integer literals are limited to 64 bits",
        _ => "value is outside the range of a 64-bit float",
    };
    Diagnostic::warning("number literal overflows its representation", token.span())
        .with_code(DiagnosticCode::W_LEX_NUMBER_OVERFLOW)
        .with_note(note)
}

/// Scan one file and render its diagnostics.
pub fn check_file(path: &Path) -> FileReport {
    let file = match read_source(path) {
        Ok(file) => file,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cannot read input");
            return FileReport {
                rendered: format!("error: {}\n", e),
                errors: 1,
                overflows: 0,
            };
        },
    };

    let result = tokenize(&file.bytes);
    let handler = Handler::new();

    if let Some(error) = &result.error {
        handler.emit_diagnostic(error.to_diagnostic());
    }
    for token in result.overflowed() {
        handler.emit_diagnostic(overflow_diagnostic(token));
    }

    let index = result
        .line_index()
        .unwrap_or_else(|_| LineIndex::new(&file.bytes));
    let name = file.name();
    let errors = handler.error_count();
    let overflows = handler.warning_count();
    let mut diagnostics = handler.take();
    diagnostics.sort_by_key(|d| d.span.start);

    let rendered = diagnostics
        .iter()
        .map(|d| d.render(&name, &file.bytes, &index))
        .collect::<Vec<_>>()
        .join("\n");

    debug!(file = %name, errors, overflows, "checked");

    FileReport {
        rendered,
        errors,
        overflows,
    }
}

/// Run the check command.
pub fn run_check(args: CheckArgs, config: Config) -> Result<()> {
    CheckCommand::new(args, config).run()
}
