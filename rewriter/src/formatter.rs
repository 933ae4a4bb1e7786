use std::fs;
use std::io::{self, Write};
use std::process::{Command, ExitStatus, Stdio};

use gqlfmt::Block;
use thiserror::Error;
use tracing::debug;

use crate::error::Warning;

pub const DEFAULT_PROGRAM: &str = "biome";

pub const DEFAULT_ARGS: &[&str] = &[
    "format",
    "--indent-style",
    "space",
    "--indent-width",
    "2",
    "--write",
];

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("cannot prepare temporary file: {0}")]
    TempFile(#[source] io::Error),

    #[error("cannot run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("`{program}` failed ({status}): {stderr}")]
    Exit {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("cannot read formatted output: {0}")]
    ReadBack(#[source] io::Error),
}

/// Pretty-prints a GraphQL query.
pub trait Formatter {
    fn format(&self, query: &str) -> Result<String, FormatError>;
}

/// Returns queries unchanged. Used when formatting is switched off.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl Formatter for Passthrough {
    fn format(&self, query: &str) -> Result<String, FormatError> {
        Ok(query.to_string())
    }
}

/// Runs a command-line formatter that rewrites a `.graphql` file in place.
///
/// The query is written to a temporary file which is passed as the last
/// argument; the file is removed when formatting ends, whatever the outcome.
#[derive(Debug, Clone)]
pub struct ExternalFormatter {
    program: String,
    args: Vec<String>,
}

impl ExternalFormatter {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        ExternalFormatter {
            program: program.into(),
            args,
        }
    }

    /// `biome format --indent-style space --indent-width 2 --write <file>`
    pub fn biome() -> Self {
        Self::new(
            DEFAULT_PROGRAM,
            DEFAULT_ARGS.iter().map(|a| a.to_string()).collect(),
        )
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for ExternalFormatter {
    fn default() -> Self {
        Self::biome()
    }
}

impl Formatter for ExternalFormatter {
    fn format(&self, query: &str) -> Result<String, FormatError> {
        let mut file = tempfile::Builder::new()
            .prefix("query")
            .suffix(".graphql")
            .tempfile()
            .map_err(FormatError::TempFile)?;
        file.write_all(query.as_bytes())
            .and_then(|_| file.flush())
            .map_err(FormatError::TempFile)?;

        debug!(program = %self.program, file = %file.path().display(), "running formatter");
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(file.path())
            .stdin(Stdio::null())
            .output()
            .map_err(|source| FormatError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(FormatError::Exit {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let formatted = fs::read_to_string(file.path()).map_err(FormatError::ReadBack)?;
        Ok(formatted.trim().to_string())
    }
}

/// Format `query`, or return it unchanged when the formatter fails.
///
/// A failure is recorded in `warnings` against `block` and logged at debug
/// level only; it never reaches the caller as an error.
pub fn format_or_passthrough(
    formatter: &dyn Formatter,
    query: &str,
    block: &Block,
    warnings: &mut Vec<Warning>,
) -> String {
    match formatter.format(query) {
        Ok(formatted) => formatted,
        Err(err) => {
            debug!(block = block.index, error = %err, "formatter failed, falling back");
            warnings.push(Warning::for_block(
                block,
                format!("formatting failed ({}), using unformatted query", err),
            ));
            query.to_string()
        }
    }
}
