use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::{Captures, Regex};

use crate::value::is_enum_like;

/// Arguments that lead every call site, in this order, when present.
pub const PRIORITY: [&str; 3] = ["limit", "sortBy", "query"];

/// `name(args)` on one line. Non-greedy: the match ends at the first `)`.
static CALL_SITE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z0-9_]+)\((.*?)\)").expect("call pattern is valid"));

/// Put the arguments of every call site in canonical order and unquote enum
/// `sortBy` values.
///
/// A call site is left exactly as written when its arguments are empty, when
/// any argument lacks a `name:` prefix, or when quotes or brackets do not
/// balance (a nested call cut short at its first `)`).
pub fn reorder_arguments(query: &str) -> String {
    CALL_SITE
        .replace_all(query, |caps: &Captures| match reorder_call(&caps[2]) {
            Some(args) => format!("{}({})", &caps[1], args),
            None => caps[0].to_string(),
        })
        .into_owned()
}

fn reorder_call(args: &str) -> Option<String> {
    if args.trim().is_empty() {
        return None;
    }

    let mut ordered: IndexMap<&str, &str> = IndexMap::new();
    for piece in split_top_level(args)? {
        let (key, value) = piece.split_once(':')?;
        let key = key.trim();
        let mut value = value.trim();
        if key == "sortBy" && is_quoted_enum(value) {
            value = &value[1..value.len() - 1];
        }
        ordered.insert(key, value);
    }

    let mut keys: Vec<&str> = PRIORITY
        .iter()
        .copied()
        .filter(|k| ordered.contains_key(*k))
        .collect();
    keys.extend(
        ordered
            .keys()
            .copied()
            .filter(|k| !PRIORITY.iter().any(|p| *p == *k)),
    );

    let rendered: Vec<String> = keys
        .iter()
        .map(|key| format!("{}: {}", key, ordered[*key]))
        .collect();

    Some(rendered.join(", "))
}

/// Split on commas outside string literals and brackets. `None` when the text
/// is not balanced.
fn split_top_level(args: &str) -> Option<Vec<&str>> {
    let mut pieces = Vec::new();
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    let mut start = 0;

    for (i, c) in args.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' | '[' | '(' => depth += 1,
            '}' | ']' | ')' => depth = depth.checked_sub(1)?,
            ',' if depth == 0 => {
                pieces.push(&args[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    if in_string || depth != 0 {
        return None;
    }

    pieces.push(&args[start..]);
    Some(pieces)
}

fn is_quoted_enum(value: &str) -> bool {
    value.len() > 2
        && value.starts_with('"')
        && value.ends_with('"')
        && is_enum_like(&value[1..value.len() - 1])
}
