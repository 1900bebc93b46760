//! Recursive-descent JSON parser: converts JSON text into a [`Value`] tree.
//!
//! The parser makes a single forward pass over the input bytes with a cursor
//! and never backtracks. Whitespace (the C `isspace` set: space, `\t`, `\n`,
//! `\r`, `\v`, `\f`) is skipped after every token. The first malformed token
//! aborts the whole parse; no partial tree is returned.
//!
//! # Grammar quirks
//!
//! The accepted language is slightly looser than RFC 8259:
//!
//! - **Numbers**: a maximal run of digits, `-`, `.` and `e` is taken as one
//!   literal. Any `.` or `e` in the run makes it a float; otherwise it must fit
//!   an `i64`. `E` and `+` end the run, so `[1E5]` and `[1e+5]` are rejected.
//!   Floats must be representable: `1e400` and `1e-400` are rejected rather
//!   than read as infinity or zero.
//! - **Escapes**: `\n \t \r \\ \' \" \?` only. `\u`, `\b`, `\f` and `\/` are
//!   errors.
//! - **Trailing commas** directly before `]` or `}` are tolerated.
//! - **Trailing content** after the top-level value is ignored unless
//!   [`ParseOptions::reject_trailing`] is set.
//! - **Duplicate keys** keep the first occurrence.
//!
//! Every cursor read is bounds checked; running out of input is reported as a
//! [`JsonError::Parse`] at the offset where more input was expected.

use crate::error::{JsonError, Result};
use crate::value::{Map, Value};

/// Default nesting limit for arrays and objects.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Parser configuration.
///
/// ```
/// use json_tree::{parse_with, ParseOptions};
///
/// let opts = ParseOptions::default().reject_trailing(true);
/// assert!(parse_with("[1] x", opts).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Fail when non-whitespace content follows the top-level value.
    pub reject_trailing: bool,
    /// Maximum array/object nesting depth.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            reject_trailing: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    pub fn reject_trailing(mut self, reject: bool) -> Self {
        self.reject_trailing = reject;
        self
    }

    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}

/// Parse JSON text with default options.
///
/// Trailing content after the first complete value is ignored.
pub fn parse(text: &str) -> Result<Value> {
    Parser::new(text).parse()
}

/// Parse JSON text, rejecting anything but whitespace after the value.
pub fn parse_strict(text: &str) -> Result<Value> {
    parse_with(text, ParseOptions::default().reject_trailing(true))
}

/// Parse JSON text with explicit options.
pub fn parse_with(text: &str, options: ParseOptions) -> Result<Value> {
    Parser::with_options(text, options).parse()
}

/// Cursor-based parser over a borrowed input buffer.
pub struct Parser<'a> {
    text: &'a str,
    src: &'a [u8],
    pos: usize,
    depth: usize,
    options: ParseOptions,
}

impl<'a> Parser<'a> {
    pub fn new(text: &'a str) -> Self {
        Self::with_options(text, ParseOptions::default())
    }

    pub fn with_options(text: &'a str, options: ParseOptions) -> Self {
        Self {
            text,
            src: text.as_bytes(),
            pos: 0,
            depth: 0,
            options,
        }
    }

    /// Byte offset of the cursor. After a successful [`Parser::parse`] this is
    /// where the value (and its trailing whitespace) ended.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Parse one value from the start of the input.
    ///
    /// May be called repeatedly; each call restarts at offset 0.
    pub fn parse(&mut self) -> Result<Value> {
        self.pos = 0;
        self.depth = 0;
        if self.src.is_empty() {
            return Err(JsonError::parse(0, "empty input"));
        }
        self.skip_whitespace();
        let value = self.parse_any()?;
        if self.options.reject_trailing && self.pos < self.src.len() {
            return Err(JsonError::parse(self.pos, "unexpected trailing content"));
        }
        Ok(value)
    }

    fn peek(&self) -> Option<u8> {
        self.src.get(self.pos).copied()
    }

    /// Current byte, or an end-of-input error.
    fn expect_byte(&self) -> Result<u8> {
        self.peek()
            .ok_or_else(|| JsonError::parse(self.pos, "unexpected end of input"))
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_space) {
            self.pos += 1;
        }
    }

    /// Error quoting up to `chars` characters at the cursor.
    fn illegal_word(&self, chars: usize) -> JsonError {
        let word: String = self.text[self.pos..].chars().take(chars).collect();
        if word.is_empty() {
            JsonError::parse(self.pos, "illegal word: end of input")
        } else {
            JsonError::parse(self.pos, format!("illegal word: '{word}'"))
        }
    }

    fn parse_any(&mut self) -> Result<Value> {
        self.skip_whitespace();
        match self.expect_byte()? {
            b'n' => self.parse_literal("null", Value::Null),
            b't' => self.parse_literal("true", Value::Bool(true)),
            b'f' => self.parse_literal("false", Value::Bool(false)),
            b'"' => self.parse_string().map(Value::String),
            b'[' => self.parse_array(),
            b'{' => self.parse_object(),
            _ => self.parse_number(),
        }
    }

    fn parse_literal(&mut self, word: &str, value: Value) -> Result<Value> {
        if !self.src[self.pos..].starts_with(word.as_bytes()) {
            return Err(self.illegal_word(word.len()));
        }
        self.pos += word.len();
        self.skip_whitespace();
        Ok(value)
    }

    /// Parse a quoted string at the cursor, decoding escapes.
    ///
    /// Unescaped runs are copied as slices; the cursor only ever stops on ASCII
    /// bytes, so every slice boundary is a char boundary.
    fn parse_string(&mut self) -> Result<String> {
        let start = self.pos;
        if self.peek() != Some(b'"') {
            return Err(self.illegal_word(1));
        }
        self.pos += 1;

        let text = self.text;
        let mut out = String::new();
        let mut run_start = self.pos;
        loop {
            match self.peek() {
                None => return Err(JsonError::parse(start, "unterminated string")),
                Some(b'"') => {
                    out.push_str(&text[run_start..self.pos]);
                    self.pos += 1;
                    break;
                }
                Some(b'\\') => {
                    out.push_str(&text[run_start..self.pos]);
                    let escape_pos = self.pos;
                    self.pos += 1;
                    let decoded = match self.peek() {
                        None => return Err(JsonError::parse(start, "unterminated string")),
                        Some(b'n') => '\n',
                        Some(b't') => '\t',
                        Some(b'r') => '\r',
                        Some(b'\\') => '\\',
                        Some(b'\'') => '\'',
                        Some(b'"') => '"',
                        Some(b'?') => '?',
                        Some(_) => {
                            return Err(JsonError::parse(escape_pos, "wrong escape character"))
                        }
                    };
                    out.push(decoded);
                    self.pos += 1;
                    run_start = self.pos;
                }
                Some(_) => self.pos += 1,
            }
        }

        self.skip_whitespace();
        Ok(out)
    }

    /// Scan a permissive numeric literal and convert it.
    fn parse_number(&mut self) -> Result<Value> {
        let start = self.pos;
        let mut is_float = false;
        while let Some(b) = self.peek() {
            match b {
                b'.' | b'e' => is_float = true,
                b'0'..=b'9' | b'-' => {}
                _ => break,
            }
            self.pos += 1;
        }

        let text = self.text;
        let literal = &text[start..self.pos];
        self.skip_whitespace();

        let value = if is_float {
            literal
                .parse::<f64>()
                .ok()
                .filter(|f| in_float_range(literal, *f))
                .map(Value::Float)
        } else {
            literal.parse::<i64>().ok().map(Value::Int)
        };
        value.ok_or_else(|| {
            JsonError::parse(start, format!("cannot cast \"{literal}\" to number"))
        })
    }

    fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > self.options.max_depth {
            return Err(JsonError::parse(self.pos, "nesting too deep"));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn parse_array(&mut self) -> Result<Value> {
        self.enter()?;
        // Consume '['
        self.pos += 1;
        self.skip_whitespace();

        let mut arr = Vec::new();
        loop {
            if self.expect_byte()? == b']' {
                break;
            }
            arr.push(self.parse_any()?);
            match self.expect_byte()? {
                b',' => {
                    self.pos += 1;
                    self.skip_whitespace();
                }
                b']' => break,
                _ => return Err(self.illegal_word(1)),
            }
        }

        // Consume ']'
        self.pos += 1;
        self.skip_whitespace();
        self.leave();
        Ok(Value::Array(arr))
    }

    fn parse_object(&mut self) -> Result<Value> {
        self.enter()?;
        // Consume '{'
        self.pos += 1;
        self.skip_whitespace();

        let mut map = Map::new();
        loop {
            if self.expect_byte()? == b'}' {
                break;
            }
            let key = self.parse_string()?;
            if self.expect_byte()? != b':' {
                return Err(self.illegal_word(1));
            }
            self.pos += 1;

            let value = self.parse_any()?;
            // First occurrence wins
            map.entry(key).or_insert(value);

            match self.expect_byte()? {
                b',' => {
                    self.pos += 1;
                    self.skip_whitespace();
                }
                b'}' => break,
                _ => return Err(self.illegal_word(1)),
            }
        }

        // Consume '}'
        self.pos += 1;
        self.skip_whitespace();
        self.leave();
        Ok(Value::Object(map))
    }
}

/// False when `f` overflowed to infinity or a nonzero literal underflowed to
/// zero.
fn in_float_range(literal: &str, f: f64) -> bool {
    if !f.is_finite() {
        return false;
    }
    if f != 0.0 {
        return true;
    }
    let mantissa = literal.split('e').next().unwrap_or(literal);
    !mantissa.bytes().any(|b| matches!(b, b'1'..=b'9'))
}

/// C `isspace` in the "C" locale.
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}
