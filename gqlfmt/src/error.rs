use std::ops::Range;

use codespan_reporting::diagnostic::{Diagnostic, Label, Severity};
use thiserror::Error;

use crate::block::Block;

/// A block that could not be rewritten, with the location of the offending
/// fenced region.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
    /// Zero-based index of the block within its document.
    pub block: usize,
    /// Byte span of the whole fenced block, fences included.
    pub span: Range<usize>,
    pub severity: Severity,
    pub notes: Vec<String>,
}

impl ParseError {
    pub fn in_block(block: &Block, message: impl Into<String>) -> Self {
        ParseError {
            message: message.into(),
            block: block.index,
            span: block.span.clone(),
            severity: Severity::Error,
            notes: Vec::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Convert to a codespan-reporting Diagnostic for display.
    pub fn to_diagnostic(&self, file_id: usize) -> Diagnostic<usize> {
        Diagnostic::new(self.severity)
            .with_message(&self.message)
            .with_labels(vec![
                Label::primary(file_id, self.span.clone())
                    .with_message(format!("graphql block #{}", self.block + 1)),
            ])
            .with_notes(self.notes.clone())
    }
}
