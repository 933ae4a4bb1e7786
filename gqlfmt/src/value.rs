use serde_json::Value;

/// Variable whose values are always enum names, whatever their shape.
const SORT_BY_KEY: &str = "sort_by";

/// True for bare GraphQL enum names such as `BLOCKHEIGHT_DESC`: one or more
/// ASCII uppercase letters and underscores.
pub fn is_enum_like(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_uppercase() || b == b'_')
}

/// Render a variable value as a GraphQL literal.
///
/// `key` is the name the value is bound to. Strings bound to `sort_by` and
/// enum-shaped strings are emitted bare; other strings are quoted. Objects
/// keep their source key order.
pub fn format_value(value: &Value, key: &str) -> String {
    match value {
        Value::Object(map) => {
            let pairs: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", k, format_value(v, k)))
                .collect();
            format!("{{{}}}", pairs.join(", "))
        }
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(|v| format_value(v, key)).collect();
            format!("[{}]", items.join(", "))
        }
        Value::String(s) if key == SORT_BY_KEY || is_enum_like(s) => s.clone(),
        // JSON string escaping is valid GraphQL string escaping.
        Value::String(_) => value.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
    }
}
