//! minijson - a small JSON parser and serializer.
//!
//! Text is decoded by a recursive descent parser into [`JsonValue`], a closed
//! tagged union over the six JSON kinds, and encoded back into compact text.
//!
//! # Architecture
//!
//! - [`json`] - value model, parser, serializer and parse limits
//! - [`error`] - numbered parse error codes
//! - [`conformance`] - differential testing against `serde_json` and corpus runner
//!
//! # Example
//!
//! ```
//! use minijson::{parse, serialize, ErrorCode, JsonType};
//!
//! let value = parse("[1, 2, 3]").unwrap();
//! assert_eq!(value.type_of(), JsonType::Array);
//! assert_eq!(serialize(&value), "[1,2,3]");
//!
//! assert_eq!(parse("[1, 2,"), Err(ErrorCode::E109_UnterminatedArray(0)));
//! ```

// Library code reports errors instead of panicking. The wrong-variant
// accessors on JsonValue are the one deliberate exception.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod conformance;
pub mod error;
pub mod json;

// Re-export commonly used types
pub use conformance::{CorpusRunner, DiffResult, DiffTestHarness};
pub use error::{ErrorCode, JsonResult};
pub use json::{parse, parse_with_limits, serialize, JsonType, JsonValue, Limits};
