use gqlfmt::inline::inline_variables;
use gqlfmt::value::{format_value, is_enum_like};
use gqlfmt::variables::VariableMap;
use serde_json::Value;

fn vars(json: &str) -> VariableMap {
    serde_json::from_str(json).expect("test variables are valid JSON")
}

fn value(json: &str) -> Value {
    serde_json::from_str(json).expect("test value is valid JSON")
}

#[test]
fn numbers_inline_unquoted() {
    assert_eq!(
        inline_variables("user(id: $id)", &vars(r#"{"id": 5}"#)),
        "{\nuser(id: 5)\n}"
    );
}

#[test]
fn enum_shaped_strings_inline_bare() {
    assert_eq!(
        inline_variables("users(status: $status)", &vars(r#"{"status": "ACTIVE"}"#)),
        "{\nusers(status: ACTIVE)\n}"
    );
}

#[test]
fn other_strings_are_quoted() {
    assert_eq!(
        inline_variables("user(name: $name)", &vars(r#"{"name": "Alice"}"#)),
        "{\nuser(name: \"Alice\")\n}"
    );
}

#[test]
fn sort_by_is_never_quoted() {
    assert_eq!(
        inline_variables("blocks(sortBy: $sort_by)", &vars(r#"{"sort_by": "blockHeight_desc"}"#)),
        "{\nblocks(sortBy: blockHeight_desc)\n}"
    );
}

#[test]
fn nested_objects_inline_recursively() {
    assert_eq!(
        inline_variables(
            "blocks(query: $query)",
            &vars(r#"{"query": {"min": 1, "max": 10, "status": "PENDING", "creator": "B62q"}}"#)
        ),
        "{\nblocks(query: {min: 1, max: 10, status: PENDING, creator: \"B62q\"})\n}"
    );
}

#[test]
fn longer_names_are_substituted_first() {
    assert_eq!(
        inline_variables("a(id: $id, ids: $idList)", &vars(r#"{"id": 1, "idList": [1, 2]}"#)),
        "{\na(id: 1, ids: [1, 2])\n}"
    );
}

#[test]
fn every_occurrence_is_replaced() {
    assert_eq!(
        inline_variables("a(x: $n)\nb(y: $n)", &vars(r#"{"n": 3}"#)),
        "{\na(x: 3)\nb(y: 3)\n}"
    );
}

#[test]
fn unused_variables_are_ignored() {
    assert_eq!(
        inline_variables("a", &vars(r#"{"unused": "x"}"#)),
        "{\na\n}"
    );
}

#[test]
fn scalar_formatting() {
    assert_eq!(format_value(&value("true"), "flag"), "true");
    assert_eq!(format_value(&value("1.5"), "ratio"), "1.5");
    assert_eq!(format_value(&value("null"), "x"), "null");
    assert_eq!(format_value(&value(r#""say \"hi\"""#), "x"), r#""say \"hi\"""#);
    assert_eq!(format_value(&value(r#"["A", "b"]"#), "x"), r#"[A, "b"]"#);
}

#[test]
fn enum_shape() {
    assert!(is_enum_like("BLOCKHEIGHT_DESC"));
    assert!(is_enum_like("_"));
    assert!(!is_enum_like(""));
    assert!(!is_enum_like("Active"));
    assert!(!is_enum_like("V2"));
}
