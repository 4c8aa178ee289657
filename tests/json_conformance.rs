//! Parser and serializer behavior tests through the public API.

use minijson::json::{parse, parse_with_limits, serialize, JsonType, JsonValue, Limits};
use minijson::ErrorCode;
use std::collections::BTreeMap;
use test_case::test_case;

fn num(n: f64) -> JsonValue {
    JsonValue::Number(n)
}

// ============================================================================
// Literals and scalars
// ============================================================================

#[test]
fn null_literal() {
    assert_eq!(parse("null").unwrap(), JsonValue::Null);
}

#[test]
fn bool_literals() {
    assert_eq!(parse("true").unwrap(), JsonValue::Bool(true));
    assert_eq!(parse("false").unwrap(), JsonValue::Bool(false));
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    assert_eq!(parse(" \t\r\n null \r\n").unwrap(), JsonValue::Null);
}

#[test]
fn numbers_decode_to_doubles() {
    assert_eq!(parse("0").unwrap(), num(0.0));
    assert_eq!(parse("-17").unwrap(), num(-17.0));
    assert_eq!(parse("3.141592653589793").unwrap(), num(std::f64::consts::PI));
    assert_eq!(parse("1E2").unwrap(), num(100.0));
    assert_eq!(parse("1e-2").unwrap(), num(0.01));
}

#[test]
fn string_with_escaped_newline() {
    assert_eq!(
        parse("\"line1\\nline2\"").unwrap(),
        JsonValue::String("line1\nline2".to_string())
    );
}

#[test]
fn all_escape_sequences() {
    let value = parse(r#""\" \\ \/ \b \f \n \r \t A""#).unwrap();
    assert_eq!(value.str(), "\" \\ / \x08 \x0C \n \r \t A");
}

// ============================================================================
// Composites
// ============================================================================

#[test]
fn array_of_numbers() {
    assert_eq!(
        parse("[1,2,3]").unwrap(),
        JsonValue::Array(vec![num(1.0), num(2.0), num(3.0)])
    );
}

#[test]
fn empty_array_and_object() {
    assert_eq!(parse("[]").unwrap(), JsonValue::Array(vec![]));
    assert_eq!(parse("{}").unwrap(), JsonValue::Object(BTreeMap::new()));
}

#[test]
fn duplicate_keys_last_write_wins() {
    let value = parse("{\"a\":1,\"a\":2}").unwrap();
    let mut expected = BTreeMap::new();
    expected.insert("a".to_string(), num(2.0));
    assert_eq!(value, JsonValue::Object(expected));
}

#[test]
fn mixed_nesting() {
    let value = parse(
        r#"{
            "nodes": [
                {"name": "root", "children": [1, 2]},
                {"name": "leaf", "translation": [0.5, -1, 2e0]}
            ],
            "extra": null
        }"#,
    )
    .unwrap();

    let nodes = value.get("nodes").unwrap().array();
    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0].get("name").unwrap().str(), "root");
    assert_eq!(
        nodes[1].get("translation").unwrap().array(),
        &[num(0.5), num(-1.0), num(2.0)]
    );
    assert!(nodes[1].get("children").is_none());
    assert_eq!(value.get("extra").unwrap().type_of(), JsonType::Null);
}

// ============================================================================
// Errors
// ============================================================================

#[test_case("" => ErrorCode::E100_EmptyInput; "empty")]
#[test_case("   " => ErrorCode::E100_EmptyInput; "whitespace only")]
#[test_case("nil" => ErrorCode::E101_ExpectedNull(0); "bad null")]
#[test_case("truth" => ErrorCode::E114_TrailingContent(4); "true prefix then garbage")]
#[test_case("fals" => ErrorCode::E102_ExpectedBoolLiteral(0); "short false")]
#[test_case("x" => ErrorCode::E103_InvalidNumber(0); "not a value")]
#[test_case("\"abc" => ErrorCode::E104_UnterminatedString(0); "open string")]
#[test_case("\"bad\\q\"" => ErrorCode::E105_UnsupportedEscape('q', 4); "bad escape")]
#[test_case("[1 2]" => ErrorCode::E106_ExpectedCommaOrBracket(3); "missing comma in array")]
#[test_case("{\"a\" 1}" => ErrorCode::E107_ExpectedColon(5); "missing colon")]
#[test_case("{\"a\":1 \"b\":2}" => ErrorCode::E108_ExpectedCommaOrBrace(7); "missing comma in object")]
#[test_case("[1,2," => ErrorCode::E109_UnterminatedArray(0); "open array")]
#[test_case("{\"a\":1" => ErrorCode::E110_UnterminatedObject(0); "open object")]
#[test_case("{1:2}" => ErrorCode::E112_ExpectedKey(1); "numeric key")]
#[test_case("[1,]" => ErrorCode::E113_TrailingComma(3); "trailing comma")]
#[test_case("{} {}" => ErrorCode::E114_TrailingContent(3); "two documents")]
fn parse_errors(input: &str) -> ErrorCode {
    parse(input).unwrap_err()
}

#[test]
fn error_messages_are_readable() {
    let err = parse("[1,2,").unwrap_err();
    assert_eq!(err.to_string(), "unterminated array starting at byte 0");
    assert_eq!(err.code(), 109);
    assert_eq!(err.name(), "E109_UnterminatedArray");
}

#[test]
fn lenient_mode_ignores_trailing_content() {
    assert_eq!(
        parse_with_limits("{} {}", Limits::lenient()).unwrap(),
        JsonValue::Object(BTreeMap::new())
    );
}

#[test]
fn nesting_limit_reports_depth() {
    let input = format!("{}1{}", "[".repeat(10), "]".repeat(10));
    let limits = Limits::strict().with_max_nesting_depth(5);
    assert_eq!(
        parse_with_limits(&input, limits),
        Err(ErrorCode::E111_NestingTooDeep(6, 5))
    );
}

// ============================================================================
// Round trips
// ============================================================================

#[test]
fn point_one_round_trips_bit_exact() {
    let text = serialize(&JsonValue::Number(0.1));
    let back = parse(&text).unwrap().number();
    assert_eq!(back.to_bits(), 0.1f64.to_bits());
}

#[test]
fn document_round_trips() {
    let inputs = [
        "null",
        "[true,false,null]",
        r#"{"z":{"y":[1,2.5,-3e-9]},"a":"tab\there"}"#,
        r#"["quote \" and backslash \\", "é\/"]"#,
        "[[[[[]]]],{}]",
        "[1e300,-1e-300,123456789012345680000]",
    ];
    for input in inputs {
        let value = parse(input).unwrap();
        let text = serialize(&value);
        assert_eq!(parse(&text).unwrap(), value, "{} -> {}", input, text);
    }
}

#[test]
fn serialize_is_compact_and_sorted() {
    let value = parse(" { \"b\" : [ 1 , { } ] , \"a\" : \"x\" } ").unwrap();
    assert_eq!(serialize(&value), r#"{"a":"x","b":[1,{}]}"#);
}

#[test]
fn serializing_built_value() {
    let node: JsonValue = [
        ("name", JsonValue::from("camera")),
        (
            "scale",
            [1.0, 1.0, 2.0].into_iter().map(JsonValue::from).collect(),
        ),
        ("children", vec![JsonValue::from(3)].into()),
    ]
    .into_iter()
    .collect();

    assert_eq!(
        serialize(&node),
        r#"{"children":[3],"name":"camera","scale":[1,1,2]}"#
    );
}
