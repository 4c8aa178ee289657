//! JSON value types.
//!
//! `JsonValue` is a closed tagged union over the six JSON kinds. Values are
//! plain owned trees: composite variants own their children and there are no
//! back-references.
//!
//! Two accessor families are provided. The `as_*` methods return `Option` and
//! are meant for walking documents of unknown shape. The bare accessors
//! (`bool()`, `number()`, `str()`, `array()`, `object()`) assert the variant and
//! panic on mismatch, because asking a known-shape value for the wrong payload
//! is a caller bug rather than bad input.

use std::collections::BTreeMap;
use std::fmt;

/// The kind of a [`JsonValue`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonType {
    /// `null`
    Null,
    /// `true` / `false`
    Bool,
    /// IEEE-754 double
    Number,
    /// Decoded string
    String,
    /// Ordered sequence
    Array,
    /// String-keyed map
    Object,
}

impl JsonType {
    /// Lower-case name used in messages and CLI output.
    pub fn name(self) -> &'static str {
        match self {
            JsonType::Null => "null",
            JsonType::Bool => "boolean",
            JsonType::Number => "number",
            JsonType::String => "string",
            JsonType::Array => "array",
            JsonType::Object => "object",
        }
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed JSON value.
///
/// Objects are stored in a `BTreeMap`, so keys are unique and iteration (and
/// therefore serialization) order is sorted rather than input order.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum JsonValue {
    /// JSON null literal
    #[default]
    Null,
    /// JSON boolean (true/false)
    Bool(bool),
    /// JSON number as an IEEE-754 double
    Number(f64),
    /// JSON string with escapes resolved
    String(String),
    /// JSON array of values
    Array(Vec<JsonValue>),
    /// JSON object; a repeated key keeps the last value
    Object(BTreeMap<String, JsonValue>),
}

#[cold]
#[track_caller]
#[allow(clippy::panic)]
fn variant_mismatch(expected: JsonType, found: JsonType) -> ! {
    panic!("JSON value accessed as {expected}, but it is {found}")
}

impl JsonValue {
    /// Returns the kind of this value.
    pub fn type_of(&self) -> JsonType {
        match self {
            JsonValue::Null => JsonType::Null,
            JsonValue::Bool(_) => JsonType::Bool,
            JsonValue::Number(_) => JsonType::Number,
            JsonValue::String(_) => JsonType::String,
            JsonValue::Array(_) => JsonType::Array,
            JsonValue::Object(_) => JsonType::Object,
        }
    }

    /// Returns the type name as a string for error messages.
    pub fn type_name(&self) -> &'static str {
        self.type_of().name()
    }

    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    /// Returns true if this is a boolean value.
    pub fn is_bool(&self) -> bool {
        matches!(self, JsonValue::Bool(_))
    }

    /// Returns true if this is a number value.
    pub fn is_number(&self) -> bool {
        matches!(self, JsonValue::Number(_))
    }

    /// Returns true if this is a string value.
    pub fn is_string(&self) -> bool {
        matches!(self, JsonValue::String(_))
    }

    /// Returns true if this is an array value.
    pub fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    /// Returns true if this is an object value.
    pub fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    /// Returns the boolean value if this is a Bool, None otherwise.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the number if this is a Number, None otherwise.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns a reference to the string if this is a String, None otherwise.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns a reference to the array if this is an Array, None otherwise.
    pub fn as_array(&self) -> Option<&Vec<JsonValue>> {
        match self {
            JsonValue::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Returns a reference to the object if this is an Object, None otherwise.
    pub fn as_object(&self) -> Option<&BTreeMap<String, JsonValue>> {
        match self {
            JsonValue::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Boolean payload.
    ///
    /// # Panics
    ///
    /// Panics if the value is not a Bool.
    #[track_caller]
    pub fn bool(&self) -> bool {
        match self {
            JsonValue::Bool(b) => *b,
            other => variant_mismatch(JsonType::Bool, other.type_of()),
        }
    }

    /// Number payload.
    ///
    /// # Panics
    ///
    /// Panics if the value is not a Number.
    #[track_caller]
    pub fn number(&self) -> f64 {
        match self {
            JsonValue::Number(n) => *n,
            other => variant_mismatch(JsonType::Number, other.type_of()),
        }
    }

    /// String payload.
    ///
    /// # Panics
    ///
    /// Panics if the value is not a String.
    #[track_caller]
    pub fn str(&self) -> &str {
        match self {
            JsonValue::String(s) => s,
            other => variant_mismatch(JsonType::String, other.type_of()),
        }
    }

    /// Array payload.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an Array.
    #[track_caller]
    pub fn array(&self) -> &[JsonValue] {
        match self {
            JsonValue::Array(a) => a,
            other => variant_mismatch(JsonType::Array, other.type_of()),
        }
    }

    /// Object payload.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an Object.
    #[track_caller]
    pub fn object(&self) -> &BTreeMap<String, JsonValue> {
        match self {
            JsonValue::Object(o) => o,
            other => variant_mismatch(JsonType::Object, other.type_of()),
        }
    }

    /// Get a value from an object by key.
    ///
    /// Returns None for a missing key and for non-object values alike, which
    /// is what binding code wants when a field is optional.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        match self {
            JsonValue::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// Get a value from an array by index.
    pub fn get_index(&self, index: usize) -> Option<&JsonValue> {
        match self {
            JsonValue::Array(arr) => arr.get(index),
            _ => None,
        }
    }
}

impl From<bool> for JsonValue {
    fn from(value: bool) -> Self {
        JsonValue::Bool(value)
    }
}

impl From<f64> for JsonValue {
    fn from(value: f64) -> Self {
        JsonValue::Number(value)
    }
}

impl From<i32> for JsonValue {
    fn from(value: i32) -> Self {
        JsonValue::Number(f64::from(value))
    }
}

impl From<u32> for JsonValue {
    fn from(value: u32) -> Self {
        JsonValue::Number(f64::from(value))
    }
}

impl From<&str> for JsonValue {
    fn from(value: &str) -> Self {
        JsonValue::String(value.to_string())
    }
}

impl From<String> for JsonValue {
    fn from(value: String) -> Self {
        JsonValue::String(value)
    }
}

impl From<Vec<JsonValue>> for JsonValue {
    fn from(value: Vec<JsonValue>) -> Self {
        JsonValue::Array(value)
    }
}

impl From<BTreeMap<String, JsonValue>> for JsonValue {
    fn from(value: BTreeMap<String, JsonValue>) -> Self {
        JsonValue::Object(value)
    }
}

impl FromIterator<JsonValue> for JsonValue {
    fn from_iter<I: IntoIterator<Item = JsonValue>>(iter: I) -> Self {
        JsonValue::Array(iter.into_iter().collect())
    }
}

impl<K: Into<String>> FromIterator<(K, JsonValue)> for JsonValue {
    fn from_iter<I: IntoIterator<Item = (K, JsonValue)>>(iter: I) -> Self {
        JsonValue::Object(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
