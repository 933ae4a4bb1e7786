use gqlfmt::{Block, ParseError, reorder_arguments, replace_blocks, resolve_block};

use crate::error::Warning;
use crate::formatter::{Formatter, format_or_passthrough};

/// The rewritten text of one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub content: String,
    /// Number of GraphQL blocks rewritten.
    pub blocks: usize,
    pub warnings: Vec<Warning>,
}

/// Run one block through inlining, formatting and argument reordering.
pub fn rewrite_block(
    block: &Block,
    formatter: &dyn Formatter,
    warnings: &mut Vec<Warning>,
) -> Result<String, ParseError> {
    let query = resolve_block(block)?;
    let formatted = format_or_passthrough(formatter, &query, block, warnings);
    Ok(reorder_arguments(&formatted))
}

/// Rewrite every GraphQL block of `source`. Nothing outside the blocks changes.
pub fn rewrite_content(source: &str, formatter: &dyn Formatter) -> Result<Rewrite, ParseError> {
    let mut warnings = Vec::new();
    let mut blocks = 0;

    let content = replace_blocks(source, |block| {
        blocks += 1;
        rewrite_block(block, formatter, &mut warnings)
    })?;

    Ok(Rewrite {
        content,
        blocks,
        warnings,
    })
}
