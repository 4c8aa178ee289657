//! Text cursor and leaf productions.
//!
//! The cursor walks the original input left to right and decodes the
//! productions that do not recurse: whitespace, `null`, booleans, numbers and
//! strings. Each `read_*` method consumes exactly its production and leaves
//! the cursor immediately after it. On error the cursor position is
//! unspecified; callers abort the whole parse.

use crate::error::{ErrorCode, JsonResult};

/// Read position within a borrowed input string.
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Get the current byte position in the input.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn offset(&self) -> u64 {
        self.pos as u64
    }

    /// Returns true once every byte has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Peek at the current byte without consuming it.
    pub fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    /// Consume and return the current byte.
    pub fn advance(&mut self) -> Option<u8> {
        let b = self.peek();
        if b.is_some() {
            self.pos += 1;
        }
        b
    }

    /// Skip space, tab, newline and carriage return.
    pub fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.pos += 1;
        }
    }

    /// Read the `null` literal.
    pub fn read_null(&mut self) -> JsonResult<()> {
        if self.eat_literal("null") {
            Ok(())
        } else {
            Err(ErrorCode::E101_ExpectedNull(self.offset()))
        }
    }

    /// Read a `true` or `false` literal.
    pub fn read_bool(&mut self) -> JsonResult<bool> {
        if self.eat_literal("true") {
            Ok(true)
        } else if self.eat_literal("false") {
            Ok(false)
        } else {
            Err(ErrorCode::E102_ExpectedBoolLiteral(self.offset()))
        }
    }

    fn eat_literal(&mut self, literal: &str) -> bool {
        if self.input.as_bytes()[self.pos..].starts_with(literal.as_bytes()) {
            self.pos += literal.len();
            true
        } else {
            false
        }
    }

    /// Read the longest numeric literal starting here.
    ///
    /// Accepts `-`? digits* (`.` digits*)? followed by an exponent only when
    /// the exponent has digits; at least one mantissa digit is required.
    /// Leading zeros and a bare leading or trailing `.` are tolerated. Values
    /// that overflow to infinity are rejected so every parsed number is finite.
    pub fn read_number(&mut self) -> JsonResult<f64> {
        let bytes = self.input.as_bytes();
        let start = self.pos;
        let mut end = start;

        if bytes.get(end) == Some(&b'-') {
            end += 1;
        }

        let int_end = skip_digits(bytes, end);
        let mut mantissa_digits = int_end - end;
        end = int_end;

        if bytes.get(end) == Some(&b'.') {
            let frac_end = skip_digits(bytes, end + 1);
            let frac_digits = frac_end - (end + 1);
            if mantissa_digits + frac_digits > 0 {
                mantissa_digits += frac_digits;
                end = frac_end;
            }
        }

        if mantissa_digits == 0 {
            return Err(ErrorCode::E103_InvalidNumber(start as u64));
        }

        if let Some(b'e' | b'E') = bytes.get(end) {
            let mut exp = end + 1;
            if let Some(b'+' | b'-') = bytes.get(exp) {
                exp += 1;
            }
            let exp_end = skip_digits(bytes, exp);
            if exp_end > exp {
                end = exp_end;
            }
        }

        let value: f64 = self.input[start..end]
            .parse()
            .map_err(|_| ErrorCode::E103_InvalidNumber(start as u64))?;
        if !value.is_finite() {
            return Err(ErrorCode::E103_InvalidNumber(start as u64));
        }

        self.pos = end;
        Ok(value)
    }

    /// Read a quoted string, resolving escape sequences.
    ///
    /// Fails with `E112_ExpectedKey` when the cursor is not on a `"`, which
    /// only happens for object keys since value dispatch checks the quote.
    pub fn read_string(&mut self) -> JsonResult<String> {
        if self.peek() != Some(b'"') {
            return Err(ErrorCode::E112_ExpectedKey(self.offset()));
        }
        let open = self.offset();
        self.pos += 1;

        let mut result = String::new();
        loop {
            let rest = &self.input.as_bytes()[self.pos..];
            let Some(stop) = rest.iter().position(|&b| b == b'"' || b == b'\\') else {
                self.pos = self.input.len();
                return Err(ErrorCode::E104_UnterminatedString(open));
            };

            // Both stop bytes are ASCII, so this slice ends on a char boundary.
            result.push_str(&self.input[self.pos..self.pos + stop]);
            self.pos += stop;

            if self.advance() == Some(b'"') {
                return Ok(result);
            }
            let ch = self.read_escape_sequence(open)?;
            result.push(ch);
        }
    }

    /// Read an escape sequence after a backslash.
    fn read_escape_sequence(&mut self, open: u64) -> JsonResult<char> {
        let backslash = self.pos - 1;
        match self.advance() {
            None => Err(ErrorCode::E104_UnterminatedString(open)),
            Some(b'"') => Ok('"'),
            Some(b'\\') => Ok('\\'),
            Some(b'/') => Ok('/'),
            Some(b'b') => Ok('\x08'),
            Some(b'f') => Ok('\x0C'),
            Some(b'n') => Ok('\n'),
            Some(b'r') => Ok('\r'),
            Some(b't') => Ok('\t'),
            Some(b'u') => self.read_unicode_escape(open, backslash as u64),
            Some(_) => {
                let ch = self.input[backslash + 1..]
                    .chars()
                    .next()
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                Err(ErrorCode::E105_UnsupportedEscape(ch, backslash as u64))
            }
        }
    }

    /// Read a \uXXXX escape naming a scalar value in the Basic Multilingual
    /// Plane. Surrogate halves are rejected; pairs are not combined.
    fn read_unicode_escape(&mut self, open: u64, backslash: u64) -> JsonResult<char> {
        let mut codepoint: u32 = 0;
        for _ in 0..4 {
            let b = self
                .advance()
                .ok_or(ErrorCode::E104_UnterminatedString(open))?;
            let digit = char::from(b)
                .to_digit(16)
                .ok_or(ErrorCode::E105_UnsupportedEscape('u', backslash))?;
            codepoint = (codepoint << 4) | digit;
        }

        if (0xD800..=0xDFFF).contains(&codepoint) {
            return Err(ErrorCode::E105_UnsupportedEscape('u', backslash));
        }
        char::from_u32(codepoint).ok_or(ErrorCode::E105_UnsupportedEscape('u', backslash))
    }
}

fn skip_digits(bytes: &[u8], mut i: usize) -> usize {
    while let Some(b'0'..=b'9') = bytes.get(i) {
        i += 1;
    }
    i
}
