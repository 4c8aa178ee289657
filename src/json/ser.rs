//! Compact JSON serialization.
//!
//! Output has no insignificant whitespace. Object members come out in the
//! map's sorted key order, and strings are escaped so that every serialized
//! value parses back to an equal value.

use std::fmt;

use super::types::JsonValue;

/// Render a number as the shortest decimal text that parses back to the same
/// double.
///
/// Magnitudes in `[1e-6, 1e21)` use plain notation, everything else uses an
/// exponent. Non-finite values have no JSON form and are written as `null`;
/// the parser never produces them.
pub fn serialize_number(value: f64) -> String {
    if !value.is_finite() {
        return "null".to_string();
    }
    let magnitude = value.abs();
    if magnitude == 0.0 || (1e-6..1e21).contains(&magnitude) {
        format!("{}", value)
    } else {
        format!("{:e}", value)
    }
}

/// Serialize a JsonValue to compact JSON text.
pub fn serialize(value: &JsonValue) -> String {
    let mut output = String::new();
    serialize_into(value, &mut output);
    output
}

/// Append the serialization of `value` to `output`.
pub fn serialize_into(value: &JsonValue, output: &mut String) {
    match value {
        JsonValue::Null => output.push_str("null"),
        JsonValue::Bool(true) => output.push_str("true"),
        JsonValue::Bool(false) => output.push_str("false"),
        JsonValue::Number(n) => output.push_str(&serialize_number(*n)),
        JsonValue::String(s) => serialize_string(s, output),
        JsonValue::Array(arr) => serialize_array(arr, output),
        JsonValue::Object(obj) => {
            output.push('{');
            for (i, (key, v)) in obj.iter().enumerate() {
                if i > 0 {
                    output.push(',');
                }
                serialize_string(key, output);
                output.push(':');
                serialize_into(v, output);
            }
            output.push('}');
        }
    }
}

/// Serialize a string with proper JSON escaping.
fn serialize_string(s: &str, output: &mut String) {
    output.push('"');
    for ch in s.chars() {
        match ch {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\x08' => output.push_str("\\b"),
            '\x0C' => output.push_str("\\f"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            c if c < '\x20' => {
                // Other control characters as \u00XX
                output.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => output.push(c),
        }
    }
    output.push('"');
}

/// Serialize an array.
fn serialize_array(arr: &[JsonValue], output: &mut String) {
    output.push('[');
    for (i, value) in arr.iter().enumerate() {
        if i > 0 {
            output.push(',');
        }
        serialize_into(value, output);
    }
    output.push(']');
}

/// Check whether `input` is exactly the serialization of `value`.
pub fn is_canonical(input: &str, value: &JsonValue) -> bool {
    serialize(value) == input
}

impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::parser::parse;
    use std::collections::BTreeMap;

    #[test]
    fn test_serialize_number() {
        assert_eq!(serialize_number(0.0), "0");
        assert_eq!(serialize_number(42.0), "42");
        assert_eq!(serialize_number(-123.0), "-123");
        assert_eq!(serialize_number(0.1), "0.1");
        assert_eq!(serialize_number(1.5), "1.5");
        assert_eq!(serialize_number(9007199254740991.0), "9007199254740991");
    }

    #[test]
    fn test_serialize_number_exponent_range() {
        assert_eq!(serialize_number(1e21), "1e21");
        assert_eq!(serialize_number(1e300), "1e300");
        assert_eq!(serialize_number(-2.5e-7), "-2.5e-7");
        assert_eq!(serialize_number(1e-6), "0.000001");
    }

    #[test]
    fn test_serialize_non_finite() {
        assert_eq!(serialize_number(f64::NAN), "null");
        assert_eq!(serialize_number(f64::INFINITY), "null");
        assert_eq!(serialize(&JsonValue::Number(f64::NEG_INFINITY)), "null");
    }

    #[test]
    fn test_number_precision_round_trip() {
        for n in [0.1, 1.0 / 3.0, 2.0f64.sqrt(), 1e-300, 123456.789e10, -0.0] {
            let text = serialize(&JsonValue::Number(n));
            let back = parse(&text).unwrap().number();
            assert_eq!(back.to_bits(), n.to_bits(), "{} -> {}", n, text);
        }
    }

    #[test]
    fn test_serialize_primitives() {
        assert_eq!(serialize(&JsonValue::Null), "null");
        assert_eq!(serialize(&JsonValue::Bool(true)), "true");
        assert_eq!(serialize(&JsonValue::Bool(false)), "false");
        assert_eq!(serialize(&JsonValue::Number(42.0)), "42");
    }

    #[test]
    fn test_serialize_string() {
        assert_eq!(
            serialize(&JsonValue::String("hello".to_string())),
            "\"hello\""
        );
    }

    #[test]
    fn test_serialize_string_escapes() {
        assert_eq!(serialize(&JsonValue::from("a\nb")), "\"a\\nb\"");
        assert_eq!(serialize(&JsonValue::from("a\tb")), "\"a\\tb\"");
        assert_eq!(serialize(&JsonValue::from("a\"b")), "\"a\\\"b\"");
        assert_eq!(serialize(&JsonValue::from("a\\b")), "\"a\\\\b\"");
        assert_eq!(serialize(&JsonValue::from("\x01")), "\"\\u0001\"");
        assert_eq!(serialize(&JsonValue::from("a/b")), "\"a/b\"");
    }

    #[test]
    fn test_escaped_string_round_trip() {
        let original = JsonValue::from("quote \" backslash \\ nl \n ctl \x1f é");
        assert_eq!(parse(&serialize(&original)).unwrap(), original);
    }

    #[test]
    fn test_serialize_array() {
        let arr = JsonValue::Array(vec![
            JsonValue::Number(1.0),
            JsonValue::Number(2.0),
            JsonValue::Number(3.0),
        ]);
        assert_eq!(serialize(&arr), "[1,2,3]");
        assert_eq!(serialize(&JsonValue::Array(vec![])), "[]");
    }

    #[test]
    fn test_serialize_object() {
        let mut obj = BTreeMap::new();
        obj.insert("b".to_string(), JsonValue::Number(2.0));
        obj.insert("a".to_string(), JsonValue::Number(1.0));
        let value = JsonValue::Object(obj);

        assert_eq!(serialize(&value), "{\"a\":1,\"b\":2}");
        assert_eq!(serialize(&JsonValue::Object(BTreeMap::new())), "{}");
    }

    #[test]
    fn test_serialize_object_key_escaped() {
        let value: JsonValue = [("say \"hi\"", JsonValue::Null)].into_iter().collect();
        assert_eq!(serialize(&value), r#"{"say \"hi\"":null}"#);
    }

    #[test]
    fn test_serialize_nested() {
        let mut inner = BTreeMap::new();
        inner.insert("x".to_string(), JsonValue::Number(1.0));

        let mut outer = BTreeMap::new();
        outer.insert(
            "arr".to_string(),
            JsonValue::Array(vec![JsonValue::Number(1.0)]),
        );
        outer.insert("obj".to_string(), JsonValue::Object(inner));

        let value = JsonValue::Object(outer);
        assert_eq!(serialize(&value), "{\"arr\":[1],\"obj\":{\"x\":1}}");
    }

    #[test]
    fn test_serialize_into_appends() {
        let mut out = String::from("value=");
        serialize_into(&JsonValue::Bool(true), &mut out);
        assert_eq!(out, "value=true");
    }

    #[test]
    fn test_display_matches_serialize() {
        let value = parse(r#"{"k": [null, 1.25, "s"]}"#).unwrap();
        assert_eq!(value.to_string(), serialize(&value));
        assert_eq!(value.to_string(), r#"{"k":[null,1.25,"s"]}"#);
    }

    #[test]
    fn test_is_canonical() {
        let value = parse(r#"{"a": 1}"#).unwrap();
        assert!(is_canonical("{\"a\":1}", &value));
        assert!(!is_canonical("{\"a\": 1}", &value));
        assert!(!is_canonical("{ \"a\":1}", &value));
    }
}
