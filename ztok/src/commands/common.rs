//! Common types and utilities for ztok commands.
//!
//! This module provides shared types, constants, and utility functions
//! used across all command implementations to ensure consistency.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use zc_lex::{NumKind, Token, TokenData, TokenKind};

use crate::error::{Result, ToolError};

// ============================================================================
// Output Format
// ============================================================================

/// Supported output formats for token dumps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One token per line
    #[default]
    Text,
    /// One JSON document per file
    Json,
}

// ============================================================================
// Input Files
// ============================================================================

/// A source file read into memory.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Path as given on the command line
    pub path: PathBuf,
    /// Raw file contents
    pub bytes: Vec<u8>,
}

impl SourceFile {
    /// Display name used in diagnostics.
    pub fn name(&self) -> String {
        self.path.display().to_string()
    }
}

/// Read an input file, rejecting directories and missing paths.
pub fn read_source(path: &Path) -> Result<SourceFile> {
    if !path.exists() {
        return Err(ToolError::FileOperation(format!(
            "Input path does not exist: {}",
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(ToolError::FileOperation(format!(
            "Input path is not a file: {}",
            path.display()
        )));
    }

    let bytes = std::fs::read(path)?;
    Ok(SourceFile {
        path: path.to_path_buf(),
        bytes,
    })
}

// ============================================================================
// Token Rendering
// ============================================================================

/// Quote decoded literal bytes, escaping anything that is not printable ASCII.
pub fn quote_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() + 2);
    out.push('"');
    for &b in bytes {
        match b {
            b'"' => out.push_str("\\\""),
            b'\\' => out.push_str("\\\\"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\t' => out.push_str("\\t"),
            b if b.is_ascii_graphic() || b == b' ' => out.push(b as char),
            b => {
                let _ = write!(out, "\\x{:02x}", b);
            },
        }
    }
    out.push('"');
    out
}

/// One-line description of a token: `line:col kind payload`, 1-based.
pub fn describe_token(token: &Token) -> String {
    let position = format!("{}:{}", token.start_line + 1, token.start_column + 1);

    let detail = match (&token.kind, &token.data) {
        (TokenKind::Eof, _) => "eof".to_string(),
        (TokenKind::Symbol, TokenData::Str(lit)) => format!("symbol {}", quote_bytes(&lit.bytes)),
        (TokenKind::StringLiteral, TokenData::Str(lit)) => {
            let prefix = if lit.is_c_string { "c" } else { "" };
            format!("string {}{}", prefix, quote_bytes(&lit.bytes))
        },
        (_, TokenData::Char(value)) => format!("char 0x{:02x}", value),
        (_, TokenData::Num(lit)) => {
            let kind = match lit.value.kind() {
                NumKind::Int => "int",
                NumKind::Float => "float",
            };
            let overflow = if lit.overflow { " overflow" } else { "" };
            format!("number {} ({}){}", lit.value, kind, overflow)
        },
        (kind, _) if kind.is_keyword() => format!("keyword {}", kind),
        (kind, _) => format!("operator {}", quote_bytes(kind.spelling().as_bytes())),
    };

    format!("{} {}", position, detail)
}
