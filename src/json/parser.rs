//! Recursive descent JSON parser.
//!
//! Value dispatch looks at the first non-whitespace byte and hands off to one
//! routine per production. Arrays and objects call back into value dispatch,
//! so nesting depth is checked against [`Limits::max_nesting_depth`] on every
//! descent.
//!
//! The first error aborts the parse; nothing is recovered or resynchronized.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use super::cursor::Cursor;
use super::limits::Limits;
use super::types::JsonValue;
use crate::error::{ErrorCode, JsonResult};

/// JSON parser over a borrowed input string.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    limits: Limits,
    depth: u64,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given input.
    pub fn new(input: &'a str, limits: Limits) -> JsonResult<Self> {
        // Check input size limit (E116)
        if input.len() as u64 > limits.max_input_size {
            return Err(ErrorCode::E116_InputTooLarge(
                input.len() as u64,
                limits.max_input_size,
            ));
        }

        Ok(Self {
            cursor: Cursor::new(input),
            limits,
            depth: 0,
        })
    }

    /// Current byte position of the underlying cursor.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Parse one top-level value.
    ///
    /// Unless the limits allow trailing content, everything after the value
    /// other than whitespace is rejected.
    pub fn parse(&mut self) -> JsonResult<JsonValue> {
        let value = self.parse_value()?;

        self.cursor.skip_whitespace();
        if !self.cursor.is_at_end() && !self.limits.allow_trailing_content {
            return Err(ErrorCode::E114_TrailingContent(self.cursor.offset()));
        }

        Ok(value)
    }

    /// Parse a single JSON value.
    fn parse_value(&mut self) -> JsonResult<JsonValue> {
        self.cursor.skip_whitespace();

        match self.cursor.peek() {
            None => Err(ErrorCode::E100_EmptyInput),
            Some(b'n') => {
                self.cursor.read_null()?;
                Ok(JsonValue::Null)
            }
            Some(b't' | b'f') => self.cursor.read_bool().map(JsonValue::Bool),
            Some(b'"') => self.cursor.read_string().map(JsonValue::String),
            Some(b'[') => self.parse_array(),
            Some(b'{') => self.parse_object(),
            Some(_) => self.cursor.read_number().map(JsonValue::Number),
        }
    }

    /// Enter a nested array or object (E111).
    fn descend(&mut self) -> JsonResult<()> {
        self.depth += 1;
        if self.depth > self.limits.max_nesting_depth {
            return Err(ErrorCode::E111_NestingTooDeep(
                self.depth,
                self.limits.max_nesting_depth,
            ));
        }
        Ok(())
    }

    /// Parse a JSON array.
    fn parse_array(&mut self) -> JsonResult<JsonValue> {
        self.descend()?;
        let open = self.cursor.offset();
        let unterminated = ErrorCode::E109_UnterminatedArray(open);

        // Consume opening bracket
        self.cursor.advance();

        let mut arr = Vec::new();

        self.cursor.skip_whitespace();
        match self.cursor.peek() {
            None => return Err(unterminated),
            Some(b']') => {
                self.cursor.advance();
                self.depth -= 1;
                return Ok(JsonValue::Array(arr));
            }
            Some(_) => {}
        }

        loop {
            arr.push(self.parse_value()?);

            // Expect comma or closing bracket
            self.cursor.skip_whitespace();
            match self.cursor.peek() {
                None => return Err(unterminated),
                Some(b',') => {
                    self.cursor.advance();
                    self.cursor.skip_whitespace();
                    match self.cursor.peek() {
                        None => return Err(unterminated),
                        Some(b']') => {
                            return Err(ErrorCode::E113_TrailingComma(self.cursor.offset()))
                        }
                        Some(_) => {}
                    }
                }
                Some(b']') => {
                    self.cursor.advance();
                    break;
                }
                Some(_) => {
                    return Err(ErrorCode::E106_ExpectedCommaOrBracket(
                        self.cursor.offset(),
                    ))
                }
            }
        }

        self.depth -= 1;
        Ok(JsonValue::Array(arr))
    }

    /// Parse a JSON object.
    fn parse_object(&mut self) -> JsonResult<JsonValue> {
        self.descend()?;
        let open = self.cursor.offset();
        let unterminated = ErrorCode::E110_UnterminatedObject(open);

        // Consume opening brace
        self.cursor.advance();

        let mut map = BTreeMap::new();

        self.cursor.skip_whitespace();
        match self.cursor.peek() {
            None => return Err(unterminated),
            Some(b'}') => {
                self.cursor.advance();
                self.depth -= 1;
                return Ok(JsonValue::Object(map));
            }
            Some(_) => {}
        }

        loop {
            let key = self.cursor.read_string()?;

            // Expect colon
            self.cursor.skip_whitespace();
            match self.cursor.peek() {
                None => return Err(unterminated),
                Some(b':') => {
                    self.cursor.advance();
                }
                Some(_) => return Err(ErrorCode::E107_ExpectedColon(self.cursor.offset())),
            }

            self.cursor.skip_whitespace();
            if self.cursor.is_at_end() {
                return Err(unterminated);
            }
            let value = self.parse_value()?;

            if map.insert(key, value).is_some() {
                trace!(offset = self.cursor.position(), "duplicate object key, keeping last value");
            }

            // Expect comma or closing brace
            self.cursor.skip_whitespace();
            match self.cursor.peek() {
                None => return Err(unterminated),
                Some(b',') => {
                    self.cursor.advance();
                    self.cursor.skip_whitespace();
                    match self.cursor.peek() {
                        None => return Err(unterminated),
                        Some(b'}') => {
                            return Err(ErrorCode::E113_TrailingComma(self.cursor.offset()))
                        }
                        Some(_) => {}
                    }
                }
                Some(b'}') => {
                    self.cursor.advance();
                    break;
                }
                Some(_) => {
                    return Err(ErrorCode::E108_ExpectedCommaOrBrace(
                        self.cursor.offset(),
                    ))
                }
            }
        }

        self.depth -= 1;
        Ok(JsonValue::Object(map))
    }
}

/// Parse JSON text into a JsonValue with default (strict) limits.
pub fn parse(input: &str) -> JsonResult<JsonValue> {
    parse_with_limits(input, Limits::default())
}

/// Parse JSON text into a JsonValue with custom limits.
pub fn parse_with_limits(input: &str, limits: Limits) -> JsonResult<JsonValue> {
    debug!(
        len = input.len(),
        max_depth = limits.max_nesting_depth,
        trailing = limits.allow_trailing_content,
        "parsing JSON"
    );
    let mut parser = Parser::new(input, limits)?;
    let result = parser.parse();
    match &result {
        Ok(value) => debug!(kind = value.type_name(), consumed = parser.position(), "parsed JSON"),
        Err(e) => debug!(code = e.code(), error = %e, "JSON parse failed"),
    }
    result
}

/// Parse UTF-8 bytes with default limits.
pub fn parse_bytes(input: &[u8]) -> JsonResult<JsonValue> {
    parse_bytes_with_limits(input, Limits::default())
}

/// Parse UTF-8 bytes with custom limits. Invalid UTF-8 fails with E115.
pub fn parse_bytes_with_limits(input: &[u8], limits: Limits) -> JsonResult<JsonValue> {
    let text = std::str::from_utf8(input)
        .map_err(|e| ErrorCode::E115_InvalidUtf8(e.valid_up_to() as u64))?;
    parse_with_limits(text, limits)
}
