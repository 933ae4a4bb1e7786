use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

static FENCED_GRAPHQL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```graphql\n(.*?)\n```").expect("fence pattern is valid"));

/// A fenced GraphQL block found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Position of the block among all blocks of the document, starting at 0.
    pub index: usize,
    /// Text between the opening and closing fence lines.
    pub body: String,
    /// Byte span of the whole match, fences included.
    pub span: Range<usize>,
    /// Byte span of `body` in the document.
    pub body_span: Range<usize>,
}

impl Block {
    /// Wrap `body` back into a fenced GraphQL block.
    pub fn fenced(body: &str) -> String {
        format!("```graphql\n{}\n```", body)
    }
}

/// Find every fenced GraphQL block in `source`, in document order.
pub fn extract_blocks(source: &str) -> Vec<Block> {
    FENCED_GRAPHQL
        .captures_iter(source)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let body = caps.get(1)?;
            Some((whole, body))
        })
        .enumerate()
        .map(|(index, (whole, body))| Block {
            index,
            body: body.as_str().to_string(),
            span: whole.range(),
            body_span: body.range(),
        })
        .collect()
}

/// Rebuild `source` with every fenced GraphQL block replaced by a fenced block
/// holding `rewrite(block)`.
///
/// Text outside the blocks is copied unchanged. The first error returned by
/// `rewrite` aborts the whole document.
pub fn replace_blocks<E>(
    source: &str,
    mut rewrite: impl FnMut(&Block) -> Result<String, E>,
) -> Result<String, E> {
    let mut out = String::with_capacity(source.len());
    let mut cursor = 0;

    for block in extract_blocks(source) {
        out.push_str(&source[cursor..block.span.start]);
        out.push_str(&Block::fenced(&rewrite(&block)?));
        cursor = block.span.end;
    }

    out.push_str(&source[cursor..]);
    Ok(out)
}
