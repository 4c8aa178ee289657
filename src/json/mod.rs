//! JSON parsing and serialization.
//!
//! # Architecture
//!
//! The JSON subsystem is organized into focused modules:
//!
//! - [`types`] - `JsonValue` tagged union and `JsonType`
//! - [`limits`] - nesting depth, input size and trailing-content policy
//! - [`cursor`] - text cursor and the non-recursive productions
//! - [`parser`] - recursive descent over arrays and objects
//! - [`ser`] - compact serialization with symmetric string escaping
//! - [`interop`] - conversions to and from `serde_json::Value`
//!
//! # Example
//!
//! ```
//! use minijson::json::{parse, serialize, JsonValue};
//!
//! let value = parse("{\"b\": [1, 2], \"a\": \"x\\ny\"}").unwrap();
//! assert_eq!(value.get("a"), Some(&JsonValue::String("x\ny".to_string())));
//!
//! // Compact output, keys in sorted order
//! assert_eq!(serialize(&value), "{\"a\":\"x\\ny\",\"b\":[1,2]}");
//! ```

pub mod cursor;
pub mod interop;
pub mod limits;
pub mod parser;
pub mod ser;
pub mod types;

// Re-export commonly used items
pub use limits::Limits;
pub use parser::{parse, parse_bytes, parse_bytes_with_limits, parse_with_limits, Parser};
pub use ser::{is_canonical, serialize, serialize_into};
pub use types::{JsonType, JsonValue};
