use crate::value::is_enum_like;

/// Quote the bare words of a JSON-like object body so it can be decoded as
/// standard JSON.
///
/// Identifiers directly followed by `:` are object keys and get quoted.
/// Enum-shaped words (`ACTIVE`, `BLOCKHEIGHT_DESC`) become strings. `true`,
/// `false` and `null` stay literals, and any other bare word is left alone for
/// the JSON decoder to reject. String literals pass through untouched.
pub fn quote_bare_tokens(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let mut chars = text.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        match c {
            '"' => {
                out.push(c);
                let mut escaped = false;
                for (_, c) in chars.by_ref() {
                    out.push(c);
                    if escaped {
                        escaped = false;
                    } else if c == '\\' {
                        escaped = true;
                    } else if c == '"' {
                        break;
                    }
                }
            }
            // Numbers may contain letters (`1e5`), which must not start a word.
            c if c.is_ascii_digit() || c == '-' => {
                out.push(c);
                while let Some(&(_, c)) = chars.peek() {
                    if c.is_ascii_alphanumeric() || matches!(c, '.' | '+' | '-') {
                        out.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let mut end = start + c.len_utf8();
                while let Some(&(i, c)) = chars.peek() {
                    if c.is_ascii_alphanumeric() || c == '_' {
                        end = i + c.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }

                let word = &text[start..end];
                let is_key = text[end..].trim_start().starts_with(':');
                if is_key || (!is_json_literal(word) && is_enum_like(word)) {
                    out.push('"');
                    out.push_str(word);
                    out.push('"');
                } else {
                    out.push_str(word);
                }
            }
            _ => out.push(c),
        }
    }

    out
}

fn is_json_literal(word: &str) -> bool {
    matches!(word, "true" | "false" | "null")
}
