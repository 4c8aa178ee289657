//! Error codes for JSON parsing.
//!
//! Every parse failure maps to exactly one numbered variant. The first error
//! encountered aborts the parse and is returned unchanged to the caller.
//! Positions are byte offsets into the original input.

use thiserror::Error;

/// All error codes produced by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[allow(non_camel_case_types)]
pub enum ErrorCode {
    /// E100: input is empty or whitespace only
    #[error("empty input")]
    E100_EmptyInput,

    /// E101: `n` not followed by `ull`
    #[error("expected 'null' at byte {0}")]
    E101_ExpectedNull(u64),

    /// E102: `t`/`f` not followed by the rest of `true`/`false`
    #[error("expected 'true' or 'false' at byte {0}")]
    E102_ExpectedBoolLiteral(u64),

    /// E103: no valid numeric literal, or the value is out of range
    #[error("invalid number at byte {0}")]
    E103_InvalidNumber(u64),

    /// E104: input ended before the closing quote (position of the opening quote)
    #[error("unterminated string starting at byte {0}")]
    E104_UnterminatedString(u64),

    /// E105: unknown or malformed backslash escape
    #[error("unsupported escape '\\{0}' at byte {1}")]
    E105_UnsupportedEscape(char, u64),

    /// E106: array element not followed by `,` or `]`
    #[error("expected ',' or ']' at byte {0}")]
    E106_ExpectedCommaOrBracket(u64),

    /// E107: object key not followed by `:`
    #[error("expected ':' after object key at byte {0}")]
    E107_ExpectedColon(u64),

    /// E108: object member not followed by `,` or `}`
    #[error("expected ',' or '}}' at byte {0}")]
    E108_ExpectedCommaOrBrace(u64),

    /// E109: input ended inside an array (position of the opening bracket)
    #[error("unterminated array starting at byte {0}")]
    E109_UnterminatedArray(u64),

    /// E110: input ended inside an object (position of the opening brace)
    #[error("unterminated object starting at byte {0}")]
    E110_UnterminatedObject(u64),

    /// E111: nesting depth exceeds the configured limit
    #[error("nesting depth {0} exceeds limit {1}")]
    E111_NestingTooDeep(u64, u64),

    /// E112: object member does not start with a string key
    #[error("expected string key at byte {0}")]
    E112_ExpectedKey(u64),

    /// E113: `,` directly followed by `]` or `}`
    #[error("trailing comma at byte {0}")]
    E113_TrailingComma(u64),

    /// E114: non-whitespace content after the top-level value
    #[error("unexpected trailing content at byte {0}")]
    E114_TrailingContent(u64),

    /// E115: byte input is not valid UTF-8 (position of the first invalid byte)
    #[error("invalid UTF-8 at byte {0}")]
    E115_InvalidUtf8(u64),

    /// E116: input is larger than the configured limit
    #[error("input size {0} exceeds limit {1}")]
    E116_InputTooLarge(u64, u64),
}

impl ErrorCode {
    /// Get the numeric error code.
    pub fn code(&self) -> u32 {
        match self {
            ErrorCode::E100_EmptyInput => 100,
            ErrorCode::E101_ExpectedNull(_) => 101,
            ErrorCode::E102_ExpectedBoolLiteral(_) => 102,
            ErrorCode::E103_InvalidNumber(_) => 103,
            ErrorCode::E104_UnterminatedString(_) => 104,
            ErrorCode::E105_UnsupportedEscape(_, _) => 105,
            ErrorCode::E106_ExpectedCommaOrBracket(_) => 106,
            ErrorCode::E107_ExpectedColon(_) => 107,
            ErrorCode::E108_ExpectedCommaOrBrace(_) => 108,
            ErrorCode::E109_UnterminatedArray(_) => 109,
            ErrorCode::E110_UnterminatedObject(_) => 110,
            ErrorCode::E111_NestingTooDeep(_, _) => 111,
            ErrorCode::E112_ExpectedKey(_) => 112,
            ErrorCode::E113_TrailingComma(_) => 113,
            ErrorCode::E114_TrailingContent(_) => 114,
            ErrorCode::E115_InvalidUtf8(_) => 115,
            ErrorCode::E116_InputTooLarge(_, _) => 116,
        }
    }

    /// Get the error name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorCode::E100_EmptyInput => "E100_EmptyInput",
            ErrorCode::E101_ExpectedNull(_) => "E101_ExpectedNull",
            ErrorCode::E102_ExpectedBoolLiteral(_) => "E102_ExpectedBoolLiteral",
            ErrorCode::E103_InvalidNumber(_) => "E103_InvalidNumber",
            ErrorCode::E104_UnterminatedString(_) => "E104_UnterminatedString",
            ErrorCode::E105_UnsupportedEscape(_, _) => "E105_UnsupportedEscape",
            ErrorCode::E106_ExpectedCommaOrBracket(_) => "E106_ExpectedCommaOrBracket",
            ErrorCode::E107_ExpectedColon(_) => "E107_ExpectedColon",
            ErrorCode::E108_ExpectedCommaOrBrace(_) => "E108_ExpectedCommaOrBrace",
            ErrorCode::E109_UnterminatedArray(_) => "E109_UnterminatedArray",
            ErrorCode::E110_UnterminatedObject(_) => "E110_UnterminatedObject",
            ErrorCode::E111_NestingTooDeep(_, _) => "E111_NestingTooDeep",
            ErrorCode::E112_ExpectedKey(_) => "E112_ExpectedKey",
            ErrorCode::E113_TrailingComma(_) => "E113_TrailingComma",
            ErrorCode::E114_TrailingContent(_) => "E114_TrailingContent",
            ErrorCode::E115_InvalidUtf8(_) => "E115_InvalidUtf8",
            ErrorCode::E116_InputTooLarge(_, _) => "E116_InputTooLarge",
        }
    }

    /// Byte offset the error refers to, if it has one.
    pub fn position(&self) -> Option<u64> {
        match self {
            ErrorCode::E100_EmptyInput
            | ErrorCode::E111_NestingTooDeep(_, _)
            | ErrorCode::E116_InputTooLarge(_, _) => None,
            ErrorCode::E101_ExpectedNull(pos)
            | ErrorCode::E102_ExpectedBoolLiteral(pos)
            | ErrorCode::E103_InvalidNumber(pos)
            | ErrorCode::E104_UnterminatedString(pos)
            | ErrorCode::E105_UnsupportedEscape(_, pos)
            | ErrorCode::E106_ExpectedCommaOrBracket(pos)
            | ErrorCode::E107_ExpectedColon(pos)
            | ErrorCode::E108_ExpectedCommaOrBrace(pos)
            | ErrorCode::E109_UnterminatedArray(pos)
            | ErrorCode::E110_UnterminatedObject(pos)
            | ErrorCode::E112_ExpectedKey(pos)
            | ErrorCode::E113_TrailingComma(pos)
            | ErrorCode::E114_TrailingContent(pos)
            | ErrorCode::E115_InvalidUtf8(pos) => Some(*pos),
        }
    }
}

/// Result type for parse operations.
pub type JsonResult<T> = Result<T, ErrorCode>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_names() {
        let errors = [
            ErrorCode::E100_EmptyInput,
            ErrorCode::E105_UnsupportedEscape('q', 4),
            ErrorCode::E111_NestingTooDeep(3, 2),
            ErrorCode::E116_InputTooLarge(20, 10),
        ];
        for error in errors {
            let prefix = format!("E{}_", error.code());
            assert!(error.name().starts_with(&prefix), "{}", error.name());
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(ErrorCode::E100_EmptyInput.to_string(), "empty input");
        assert_eq!(
            ErrorCode::E105_UnsupportedEscape('q', 5).to_string(),
            "unsupported escape '\\q' at byte 5"
        );
        assert_eq!(
            ErrorCode::E108_ExpectedCommaOrBrace(7).to_string(),
            "expected ',' or '}' at byte 7"
        );
    }

    #[test]
    fn test_position() {
        assert_eq!(ErrorCode::E100_EmptyInput.position(), None);
        assert_eq!(ErrorCode::E109_UnterminatedArray(0).position(), Some(0));
        assert_eq!(
            ErrorCode::E105_UnsupportedEscape('x', 12).position(),
            Some(12)
        );
    }
}
