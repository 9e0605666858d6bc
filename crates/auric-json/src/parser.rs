//! Recursive-descent JSON parser: converts text into a [`Value`] tree.
//!
//! One production per JSON construct, each reading directly from the input with a
//! single advancing cursor:
//!
//! - `n` / `t` / `f` → literal match (`null`, `true`, `false`, case-sensitive)
//! - `"` → string with escape decoding (`\uXXXX` re-encoded as UTF-8)
//! - `[` / `{` → array / object, built bottom-up
//! - anything else → number (an invalid lead character fails with `InvalidToken`)
//!
//! # Key design decisions
//!
//! - **No tokenizer**: the lead character selects the production, so the parser
//!   never looks back and never backtracks.
//! - **Integer vs double**: a numeral with neither `.` nor an exponent becomes an
//!   `i64` (overflow is `InvalidNumber`), anything else an `f64`. Leading zeros are
//!   decimal: `0123` is `123`. `1.` and `-.5` are accepted
//!   as doubles; a value cannot start with `.`.
//! - **Trailing commas**: one comma directly before `]` or `}` is accepted.
//! - **Surrogate pairs**: `\uD83D\uDE00` is combined into U+1F600. An unpaired
//!   surrogate fails with `InvalidEscape` instead of producing invalid UTF-8.
//! - **Trailing content**: parsing stops after the first complete value. Callers
//!   needing a single-document check use [`parse_prefix`] or
//!   [`Parser::is_at_end`].

use crate::error::{JsonError, Result};
use crate::options::ParseOptions;
use crate::types::{Array, Object, Value};

/// Parse `text` into a [`Value`] with default [`ParseOptions`].
///
/// Content after the first complete value is not inspected.
pub fn parse(text: &str) -> Result<Value> {
    parse_with_options(text, ParseOptions::default())
}

/// Parse `text` with explicit options.
pub fn parse_with_options(text: &str, options: ParseOptions) -> Result<Value> {
    Parser::with_options(text, options).parse_value()
}

/// Parse the first value in `text` and return it with the byte offset just past it.
///
/// ```rust
/// let (value, end) = auric_json::parse_prefix("[1, 2] tail").unwrap();
/// assert_eq!(value.to_array().unwrap().len(), 2);
/// assert_eq!(end, 6);
/// ```
pub fn parse_prefix(text: &str) -> Result<(Value, usize)> {
    let mut parser = Parser::new(text);
    let value = parser.parse_value()?;
    Ok((value, parser.position()))
}

/// Cursor over one input buffer.
///
/// Each parser owns its cursor, so independent documents can be parsed on
/// separate threads without coordination.
pub struct Parser<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
    depth: usize,
    options: ParseOptions,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, ParseOptions::default())
    }

    pub fn with_options(input: &'a str, options: ParseOptions) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            pos: 0,
            depth: 0,
            options,
        }
    }

    /// Current cursor offset in bytes.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// True when nothing but whitespace remains after the cursor.
    pub fn is_at_end(&self) -> bool {
        self.bytes[self.pos..].iter().all(|&b| is_whitespace(b))
    }

    /// Skip leading whitespace and parse one complete value.
    pub fn parse_value(&mut self) -> Result<Value> {
        self.depth = 0;
        self.skip_whitespace();
        self.value()
    }

    fn value(&mut self) -> Result<Value> {
        match self.peek()? {
            b'n' => self.parse_literal("null", Value::Null),
            b't' => self.parse_literal("true", Value::Bool(true)),
            b'f' => self.parse_literal("false", Value::Bool(false)),
            b'"' => self.parse_string().map(Value::String),
            b'[' => self.parse_array(),
            b'{' => self.parse_object(),
            _ => self.parse_number(),
        }
    }

    /// Match the whole literal starting at the cursor (its lead character included).
    fn parse_literal(&mut self, literal: &'static str, value: Value) -> Result<Value> {
        let rest = &self.bytes[self.pos..];
        if rest.starts_with(literal.as_bytes()) {
            self.pos += literal.len();
            return Ok(value);
        }
        // Input ran out partway through an otherwise matching literal
        if literal.as_bytes().starts_with(rest) {
            return Err(JsonError::UnexpectedEndOfInput {
                offset: self.bytes.len(),
            });
        }
        Err(JsonError::InvalidLiteral {
            offset: self.pos,
            expected: literal,
        })
    }

    /// Parse a string literal. The cursor must be on the opening quote.
    fn parse_string(&mut self) -> Result<String> {
        self.pos += 1;
        let mut out = String::new();

        loop {
            // Copy the run up to the next quote or backslash in one go. Both are
            // ASCII, so the slice always ends on a char boundary.
            let run = self.bytes[self.pos..]
                .iter()
                .position(|&b| b == b'"' || b == b'\\');
            let Some(run) = run else {
                self.pos = self.bytes.len();
                return Err(self.end_of_input());
            };
            out.push_str(&self.input[self.pos..self.pos + run]);
            self.pos += run;

            if self.bytes[self.pos] == b'"' {
                self.pos += 1;
                return Ok(out);
            }

            let escape_at = self.pos;
            self.pos += 1;
            out.push(self.parse_escape(escape_at)?);
        }
    }

    /// Decode the escape after a backslash. `escape_at` is the backslash offset.
    fn parse_escape(&mut self, escape_at: usize) -> Result<char> {
        let c = match self.next_byte()? {
            b'"' => '"',
            b'\\' => '\\',
            b'/' => '/',
            b'b' => '\u{8}',
            b'f' => '\u{c}',
            b'n' => '\n',
            b'r' => '\r',
            b't' => '\t',
            b'u' => return self.parse_unicode_escape(escape_at),
            _ => {
                let found = self.char_at(self.pos - 1);
                return Err(JsonError::InvalidEscape {
                    offset: escape_at,
                    message: format!("unknown escape '\\{found}'"),
                });
            }
        };
        Ok(c)
    }

    /// Decode `XXXX` after `\u`, combining a high surrogate with the `\uXXXX`
    /// low surrogate that must follow it.
    fn parse_unicode_escape(&mut self, escape_at: usize) -> Result<char> {
        let unit = self.read_hex4(escape_at)?;

        let code_point = match unit {
            0xD800..=0xDBFF => {
                let low_at = self.pos;
                let rest = &self.bytes[self.pos..];
                if rest.len() < 2 && b"\\u".starts_with(rest) {
                    return Err(self.end_of_input());
                }
                if !rest.starts_with(b"\\u") {
                    return Err(JsonError::InvalidEscape {
                        offset: escape_at,
                        message: format!("unpaired high surrogate \\u{unit:04X}"),
                    });
                }
                self.pos += 2;
                let low = self.read_hex4(low_at)?;
                if !(0xDC00..=0xDFFF).contains(&low) {
                    return Err(JsonError::InvalidEscape {
                        offset: low_at,
                        message: format!(
                            "expected low surrogate after \\u{unit:04X}, found \\u{low:04X}"
                        ),
                    });
                }
                0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00)
            }
            0xDC00..=0xDFFF => {
                return Err(JsonError::InvalidEscape {
                    offset: escape_at,
                    message: format!("unpaired low surrogate \\u{unit:04X}"),
                });
            }
            _ => unit,
        };

        char::from_u32(code_point).ok_or_else(|| JsonError::InvalidEscape {
            offset: escape_at,
            message: format!("invalid code point U+{code_point:04X}"),
        })
    }

    /// Read exactly four hex digits.
    fn read_hex4(&mut self, escape_at: usize) -> Result<u32> {
        let mut unit = 0u32;
        for _ in 0..4 {
            let b = self.next_byte()?;
            let digit = char::from(b).to_digit(16).ok_or_else(|| {
                let found = self.char_at(self.pos - 1);
                JsonError::InvalidEscape {
                    offset: escape_at,
                    message: format!("invalid hex digit {found:?} in \\u escape"),
                }
            })?;
            unit = (unit << 4) | digit;
        }
        Ok(unit)
    }

    /// Scan `-? digits (. digits)? ([eE] [+-]? digits)?` and convert it.
    fn parse_number(&mut self) -> Result<Value> {
        let start = self.pos;
        let lead = self.bytes[start];
        if lead != b'-' && !lead.is_ascii_digit() {
            return Err(JsonError::InvalidToken {
                offset: start,
                found: self.char_at(start),
            });
        }

        let mut is_double = false;
        if lead == b'-' {
            self.pos += 1;
        }
        self.skip_digits();

        if self.bytes.get(self.pos) == Some(&b'.') {
            is_double = true;
            self.pos += 1;
            self.skip_digits();
        }

        if matches!(self.bytes.get(self.pos), Some(b'e' | b'E')) {
            is_double = true;
            self.pos += 1;
            if matches!(self.bytes.get(self.pos), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            self.skip_digits();
        }

        let input = self.input;
        let text = &input[start..self.pos];
        let invalid = || JsonError::InvalidNumber {
            offset: start,
            text: text.to_string(),
        };

        if is_double {
            let f: f64 = text.parse().map_err(|_| invalid())?;
            if !f.is_finite() {
                return Err(invalid());
            }
            Ok(Value::Double(f))
        } else {
            text.parse::<i64>().map(Value::Integer).map_err(|_| invalid())
        }
    }

    fn parse_array(&mut self) -> Result<Value> {
        self.enter()?;
        self.pos += 1;
        let mut array = Array::new();

        self.skip_whitespace();
        if self.peek()? == b']' {
            self.pos += 1;
            self.depth -= 1;
            return Ok(Value::Array(array));
        }

        loop {
            array.push(self.value()?);
            self.skip_whitespace();
            match self.peek()? {
                b']' => {
                    self.pos += 1;
                    break;
                }
                b',' => {
                    self.pos += 1;
                    self.skip_whitespace();
                    if self.peek()? == b']' {
                        self.pos += 1;
                        break;
                    }
                }
                _ => return Err(self.expected_delimiter("',' or ']'")),
            }
        }

        self.depth -= 1;
        Ok(Value::Array(array))
    }

    fn parse_object(&mut self) -> Result<Value> {
        self.enter()?;
        self.pos += 1;
        let mut object = Object::new();

        self.skip_whitespace();
        if self.peek()? == b'}' {
            self.pos += 1;
            self.depth -= 1;
            return Ok(Value::Object(object));
        }

        loop {
            if self.peek()? != b'"' {
                return Err(JsonError::InvalidToken {
                    offset: self.pos,
                    found: self.char_at(self.pos),
                });
            }
            let key = self.parse_string()?;

            self.skip_whitespace();
            if self.peek()? != b':' {
                return Err(self.expected_delimiter("':'"));
            }
            self.pos += 1;
            self.skip_whitespace();

            let value = self.value()?;
            object.push(key, value);

            self.skip_whitespace();
            match self.peek()? {
                b'}' => {
                    self.pos += 1;
                    break;
                }
                b',' => {
                    self.pos += 1;
                    self.skip_whitespace();
                    if self.peek()? == b'}' {
                        self.pos += 1;
                        break;
                    }
                }
                _ => return Err(self.expected_delimiter("',' or '}'")),
            }
        }

        self.depth -= 1;
        Ok(Value::Object(object))
    }

    /// Step one container deeper, enforcing the depth limit.
    fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        match self.options.max_depth {
            Some(limit) if self.depth > limit => Err(JsonError::NestingTooDeep {
                offset: self.pos,
                limit,
            }),
            _ => Ok(()),
        }
    }

    fn skip_whitespace(&mut self) {
        while self.pos < self.bytes.len() && is_whitespace(self.bytes[self.pos]) {
            self.pos += 1;
        }
    }

    fn skip_digits(&mut self) {
        while self.pos < self.bytes.len() && self.bytes[self.pos].is_ascii_digit() {
            self.pos += 1;
        }
    }

    fn peek(&self) -> Result<u8> {
        self.bytes
            .get(self.pos)
            .copied()
            .ok_or_else(|| self.end_of_input())
    }

    fn next_byte(&mut self) -> Result<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Ok(b)
    }

    /// The character starting at `offset`. `offset` must be a char boundary.
    fn char_at(&self, offset: usize) -> char {
        self.input[offset..].chars().next().unwrap_or('\0')
    }

    fn end_of_input(&self) -> JsonError {
        JsonError::UnexpectedEndOfInput { offset: self.pos }
    }

    fn expected_delimiter(&self, expected: &'static str) -> JsonError {
        JsonError::ExpectedDelimiter {
            offset: self.pos,
            expected,
            found: self.char_at(self.pos),
        }
    }
}

/// Space, tab, LF, CR, form feed and vertical tab.
fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b'\x0C' | b'\x0B')
}
