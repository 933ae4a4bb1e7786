mod pseudo_json;

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};
use thiserror::Error;

pub use pseudo_json::quote_bare_tokens;

/// Literal whose presence marks a block as carrying a variables trailer.
const VARIABLES_MARKER: &str = "variables {";

static VARIABLES_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\nvariables\s*\{").expect("boundary pattern is valid"));

static QUERY_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bquery\b").expect("keyword pattern is valid"));

/// From the first `{` to the last `}` that only whitespace follows.
static OPERATION_BODY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{\s*(.*)\s*\}\s*\z").expect("body pattern is valid"));

pub type VariableMap = Map<String, Value>;

#[derive(Debug, Error)]
pub enum VariablesError {
    #[error("`variables {{` must be separated from the query by a blank line")]
    MissingBoundary,

    #[error("malformed variables block")]
    Json(#[from] serde_json::Error),
}

/// A block body split around its optional `variables { ... }` trailer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitBody<'a> {
    pub query: &'a str,
    /// Text after the `variables {` opener, closing brace included.
    pub variables: Option<&'a str>,
}

/// Split a trimmed block body into query text and variables text.
pub fn split_body(body: &str) -> Result<SplitBody<'_>, VariablesError> {
    if !body.contains(VARIABLES_MARKER) {
        return Ok(SplitBody {
            query: body,
            variables: None,
        });
    }

    let boundary = VARIABLES_BOUNDARY
        .find(body)
        .ok_or(VariablesError::MissingBoundary)?;

    Ok(SplitBody {
        query: &body[..boundary.start()],
        variables: Some(&body[boundary.end()..]),
    })
}

/// Reduce an operation to the fields of its selection set, one per line with
/// indentation removed. Both `query Name(...) { ... }` and the shorthand
/// `{ ... }` form are unwrapped; any other text is returned as is.
pub fn extract_query_body(query: &str) -> String {
    let shorthand = query.trim_start().starts_with('{');
    if !shorthand && !QUERY_KEYWORD.is_match(query) {
        return query.to_string();
    }

    match OPERATION_BODY.captures(query).and_then(|caps| caps.get(1)) {
        Some(inner) => inner
            .as_str()
            .trim()
            .lines()
            .map(str::trim)
            .collect::<Vec<_>>()
            .join("\n"),
        None => query.to_string(),
    }
}

/// Decode the text following `variables {` into a name-to-value map.
///
/// The object's closing brace is dropped and the remainder is decoded as an
/// object body, with bare keys and enum values quoted first.
pub fn parse_variables(text: &str) -> Result<VariableMap, VariablesError> {
    let trimmed = text.trim();
    let inner = trimmed.strip_suffix('}').unwrap_or(trimmed);
    let json = format!("{{{}}}", quote_bare_tokens(inner));
    Ok(serde_json::from_str(&json)?)
}
