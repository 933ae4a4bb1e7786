use std::io;
use std::ops::Range;
use std::path::PathBuf;

use codespan_reporting::diagnostic::{Diagnostic, Label, Severity};
use gqlfmt::{Block, ParseError};
use thiserror::Error;

/// Failure that stops a file from being rewritten.
#[derive(Debug, Error)]
pub enum RewriteError {
    #[error("cannot read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// A non-fatal problem with one block. The block is still rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub message: String,
    /// Index of the block the warning belongs to.
    pub block: usize,
    pub span: Range<usize>,
}

impl Warning {
    pub fn for_block(block: &Block, message: impl Into<String>) -> Self {
        Warning {
            message: message.into(),
            block: block.index,
            span: block.span.clone(),
        }
    }

    pub fn to_diagnostic(&self, file_id: usize) -> Diagnostic<usize> {
        Diagnostic::new(Severity::Warning)
            .with_message(&self.message)
            .with_labels(vec![
                Label::primary(file_id, self.span.clone())
                    .with_message(format!("graphql block #{}", self.block + 1)),
            ])
    }
}
