//! Text transforms for GraphQL blocks embedded in fenced code regions.

pub mod block;
pub mod error;
pub mod inline;
pub mod reorder;
pub mod value;
pub mod variables;

pub use block::{Block, extract_blocks, replace_blocks};
pub use error::ParseError;
pub use reorder::reorder_arguments;

use crate::inline::inline_variables;
use crate::variables::{extract_query_body, parse_variables, split_body};

/// Produce the query text of `block` that is handed to the formatter.
///
/// A block without a variables trailer is returned trimmed. Otherwise the
/// operation body is extracted and every variable is inlined.
pub fn resolve_block(block: &Block) -> Result<String, ParseError> {
    let body = block.body.trim();
    let split = split_body(body).map_err(|e| ParseError::in_block(block, e.to_string()))?;

    let Some(variables_text) = split.variables else {
        return Ok(body.to_string());
    };

    let variables = parse_variables(variables_text).map_err(|e| {
        let mut error = ParseError::in_block(block, e.to_string());
        if let variables::VariablesError::Json(json) = &e {
            error = error.with_note(json.to_string());
        }
        error
    })?;

    let query = extract_query_body(split.query);
    Ok(inline_variables(&query, &variables))
}
