use gqlfmt::variables::{
    VariablesError, extract_query_body, parse_variables, quote_bare_tokens, split_body,
};
use gqlfmt::{extract_blocks, resolve_block};

const WITH_VARIABLES: &str = "query Q($id: Int) {\n  user(id: $id)\n}\n\nvariables {\n  \"id\": 5\n}";

#[test]
fn pure_query_has_no_variables() {
    let split = split_body("{ blocks { stateHash } }").unwrap();
    assert_eq!(split.query, "{ blocks { stateHash } }");
    assert_eq!(split.variables, None);
}

#[test]
fn splits_on_blank_line_before_variables() {
    let split = split_body(WITH_VARIABLES).unwrap();
    assert_eq!(split.query, "query Q($id: Int) {\n  user(id: $id)\n}");
    assert_eq!(split.variables, Some("\n  \"id\": 5\n}"));
}

#[test]
fn variables_without_blank_line_is_an_error() {
    let err = split_body("query { a }\nvariables {\n  \"x\": 1\n}").unwrap_err();
    assert!(matches!(err, VariablesError::MissingBoundary));
}

#[test]
fn operation_body_is_unindented() {
    let query = "query Q($id: Int) {\n  user(id: $id) {\n    name\n  }\n}";
    assert_eq!(extract_query_body(query), "user(id: $id) {\nname\n}");
}

#[test]
fn shorthand_query_is_unwrapped() {
    assert_eq!(extract_query_body("{ user(id: $id) }"), "user(id: $id)");
    assert_eq!(
        extract_query_body("{\n  user(id: $id) {\n    name\n  }\n}"),
        "user(id: $id) {\nname\n}"
    );
}

#[test]
fn text_without_selection_set_is_kept_verbatim() {
    assert_eq!(extract_query_body("user(id: $id)"), "user(id: $id)");
}

#[test]
fn parses_json_object_body() {
    let vars = parse_variables("\n  \"id\": 5,\n  \"name\": \"Alice\"\n}").unwrap();
    assert_eq!(vars["id"], 5);
    assert_eq!(vars["name"], "Alice");
}

#[test]
fn bare_enum_values_and_keys_are_accepted() {
    let vars = parse_variables("limit: 10, sort_by: BLOCKHEIGHT_DESC, flag: true }").unwrap();
    assert_eq!(vars["limit"], 10);
    assert_eq!(vars["sort_by"], "BLOCKHEIGHT_DESC");
    assert_eq!(vars["flag"], true);
}

#[test]
fn key_order_follows_source() {
    let vars = parse_variables("\"b\": 1, \"a\": {\"z\": 1, \"y\": 2}}").unwrap();
    let keys: Vec<&str> = vars.keys().map(String::as_str).collect();
    assert_eq!(keys, ["b", "a"]);
    let inner: Vec<&str> = vars["a"]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(inner, ["z", "y"]);
}

#[test]
fn lowercase_bare_words_are_rejected() {
    let err = parse_variables("\"status\": active\n}").unwrap_err();
    assert!(matches!(err, VariablesError::Json(_)));
}

#[test]
fn strings_and_numbers_are_not_quoted() {
    assert_eq!(
        quote_bare_tokens("\"note\": \"KEEP: as is\", n: -1.5e3, e: null"),
        "\"note\": \"KEEP: as is\", \"n\": -1.5e3, \"e\": null"
    );
    assert_eq!(
        quote_bare_tokens("\"q\": \"say \\\"HI\\\"\", s: ACTIVE"),
        "\"q\": \"say \\\"HI\\\"\", \"s\": \"ACTIVE\""
    );
}

#[test]
fn resolve_inlines_variables() {
    let source = format!("```graphql\n{}\n```", WITH_VARIABLES);
    let blocks = extract_blocks(&source);
    assert_eq!(resolve_block(&blocks[0]).unwrap(), "{\nuser(id: 5)\n}");
}

#[test]
fn resolve_shorthand_query_is_wrapped_once() {
    let source = "```graphql\n{ user(id: $id) }\n\nvariables {\n  \"id\": 5\n}\n```";
    let blocks = extract_blocks(source);
    assert_eq!(resolve_block(&blocks[0]).unwrap(), "{\nuser(id: 5)\n}");
}

#[test]
fn resolve_trims_pure_queries() {
    let blocks = extract_blocks("```graphql\n\n  { a }  \n\n```");
    assert_eq!(resolve_block(&blocks[0]).unwrap(), "{ a }");
}

#[test]
fn resolve_error_names_the_block() {
    let source = "```graphql\n{ a }\n```\n\
```graphql\nquery Q { a(x: $x) }\n\nvariables {\n  \"x\": oops\n}\n```\n";
    let blocks = extract_blocks(source);
    assert!(resolve_block(&blocks[0]).is_ok());

    let err = resolve_block(&blocks[1]).unwrap_err();
    assert_eq!(err.block, 1);
    assert_eq!(err.span, blocks[1].span);
    assert_eq!(err.message, "malformed variables block");
    assert_eq!(err.notes.len(), 1);
}
