use std::cmp::Reverse;

use serde_json::{Map, Value};

use crate::value::format_value;

/// Replace every `$name` placeholder in `body` with the literal form of its
/// value and wrap the result in a fresh selection set.
///
/// Placeholders are plain substrings, so longer names are substituted first:
/// with `$id` and `$idList` both bound, `$idList` must not be rewritten as
/// `<id>List`.
pub fn inline_variables(body: &str, variables: &Map<String, Value>) -> String {
    let mut bindings: Vec<(&String, &Value)> = variables.iter().collect();
    bindings.sort_by_key(|(name, _)| Reverse(name.len()));

    let mut inlined = body.to_string();
    for (name, value) in bindings {
        let placeholder = format!("${}", name);
        if inlined.contains(&placeholder) {
            inlined = inlined.replace(&placeholder, &format_value(value, name));
        }
    }

    format!("{{\n{}\n}}", inlined)
}
