//! The recursive-descent decoder.
//!
//! Works directly on the input bytes, dispatching on the first
//! non-whitespace byte of each value through a 256-entry lookup table.
//! Literal runs inside strings are located with `memchr` and copied in one
//! step. Everything built for a container is owned by a local, so an error
//! anywhere below drops the partial tree on its way out.
//!
//! It is *not* part of the public API; see [`crate::decode`].

use crate::array::Array;
use crate::error::{InsertErrorKind, ParseError, ParseErrorKind};
use crate::limits::Limits;
use crate::map::OrderedMap;
use crate::value::{Pair, Value};
use memchr::{memchr2, memchr_iter, memrchr};
use std::str;

// --- The Lookup Table (LUT) ---
// One byte class per input byte. Dispatch and whitespace skipping are a
// single table load.
const W: u8 = 1; // Whitespace
const A: u8 = 2; // Array open
const O: u8 = 3; // Object open
const L: u8 = 4; // Literal
const D: u8 = 5; // Digit (and '-')
const Q: u8 = 6; // Quote

static BYTE_PROPERTIES: [u8; 256] = {
    let mut table = [0; 256];
    table[b' ' as usize] = W;
    table[b'\n' as usize] = W;
    table[b'\r' as usize] = W;
    table[b'\t' as usize] = W;

    table[b'[' as usize] = A;
    table[b'{' as usize] = O;

    table[b't' as usize] = L;
    table[b'f' as usize] = L;
    table[b'n' as usize] = L;

    table[b'"' as usize] = Q;

    table[b'-' as usize] = D;
    let mut digit = b'0';
    while digit <= b'9' {
        table[digit as usize] = D;
        digit += 1;
    }

    // 0: every other byte is invalid at the start of a value
    table
};

/// A location in the input, captured before a production that may later be
/// reported as the error site.
#[derive(Debug, Clone, Copy)]
struct Position {
    offset: usize,
    line: usize,
    column: usize,
}

pub(crate) struct Decoder<'a> {
    /// The raw input.
    bytes: &'a [u8],
    /// The current position (index) in `bytes`.
    cursor: usize,
    /// The current line number (1-indexed) for error reporting.
    line: usize,
    /// The current column number (1-indexed, in bytes) for error reporting.
    column: usize,
    limits: Limits,
    /// Number of containers currently open.
    depth: usize,
}

impl<'a> Decoder<'a> {
    pub(crate) fn new(bytes: &'a [u8], limits: Limits) -> Self {
        Decoder {
            bytes,
            cursor: 0,
            line: 1,
            column: 1,
            limits,
            depth: 0,
        }
    }

    /// Decodes one complete document: leading whitespace, a value, and
    /// whatever the trailing-byte policy allows after it.
    pub(crate) fn decode_document(mut self) -> Result<Value, ParseError> {
        if self.bytes.len() > self.limits.max_input_size {
            return Err(self.error(ParseErrorKind::InputTooLarge));
        }

        self.skip_whitespace();
        let value = self.decode_value()?;

        if !self.limits.allow_trailing {
            self.skip_whitespace();
            if self.peek().is_some() {
                return Err(self.error(ParseErrorKind::TrailingCharacters));
            }
        }
        Ok(value)
    }

    // --- Cursor management ---

    fn position(&self) -> Position {
        Position {
            offset: self.cursor,
            line: self.line,
            column: self.column,
        }
    }

    /// Creates a `ParseError` at the current position.
    fn error(&self, kind: ParseErrorKind) -> ParseError {
        self.error_at(self.position(), kind)
    }

    fn error_at(&self, position: Position, kind: ParseErrorKind) -> ParseError {
        ParseError {
            kind,
            offset: position.offset,
            line: position.line,
            column: position.column,
        }
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.cursor).copied()
    }

    #[inline]
    fn skip_whitespace(&mut self) {
        while let Some(byte) = self.peek() {
            if BYTE_PROPERTIES[byte as usize] != W {
                break;
            }
            self.advance_byte();
        }
    }

    /// Advances past one byte, updating line/column. Callers have already
    /// peeked the byte, so the cursor is never at the end.
    #[inline]
    fn advance_byte(&mut self) {
        if self.bytes[self.cursor] == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.cursor += 1;
    }

    /// Advances past `n` bytes known to contain no newline.
    #[inline]
    fn advance_by(&mut self, n: usize) {
        self.cursor += n;
        self.column += n;
    }

    /// Advances past an arbitrary run of `n` bytes, which may span lines.
    fn consume(&mut self, n: usize) {
        let run = &self.bytes[self.cursor..self.cursor + n];
        match memrchr(b'\n', run) {
            Some(last) => {
                self.line += memchr_iter(b'\n', run).count();
                self.column = n - last;
            }
            None => self.column += n,
        }
        self.cursor += n;
    }

    /// Opens a container, enforcing the nesting limit.
    fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth >= self.limits.max_depth {
            return Err(self.error(ParseErrorKind::DepthLimitExceeded));
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    // --- Productions ---

    fn decode_value(&mut self) -> Result<Value, ParseError> {
        let byte = self
            .peek()
            .ok_or_else(|| self.error(ParseErrorKind::UnexpectedEnd))?;

        match BYTE_PROPERTIES[byte as usize] {
            A => self.decode_array().map(Value::Array),
            O => self.decode_object().map(Value::Object),
            Q => self.decode_string().map(Value::String),
            D => self.decode_number(),
            L => self.decode_literal(byte),
            _ => Err(self.error(ParseErrorKind::UnexpectedCharacter(byte))),
        }
    }

    /// `true`, `false` or `null`, matched exactly.
    fn decode_literal(&mut self, first: u8) -> Result<Value, ParseError> {
        let (expected, value): (&[u8], Value) = match first {
            b't' => (b"true", Value::Bool(true)),
            b'f' => (b"false", Value::Bool(false)),
            _ => (b"null", Value::Null),
        };
        let end = self.cursor + expected.len();
        if self.bytes.get(self.cursor..end) == Some(expected) {
            self.advance_by(expected.len());
            Ok(value)
        } else {
            Err(self.error(ParseErrorKind::InvalidLiteral))
        }
    }

    /// Consumes the longest prefix shaped like
    /// `-? digit* (. digit*)? ([eE] [+-]? digit+)?` and parses it as `f64`.
    ///
    /// Leading zeros and a bare trailing `.` are accepted. An `e` that is not
    /// followed by digits is left in the input. Magnitudes beyond `f64` range
    /// saturate to infinity.
    fn decode_number(&mut self) -> Result<Value, ParseError> {
        let start = self.position();
        let bytes = self.bytes;
        let count_digits = |from: usize| {
            bytes[from..]
                .iter()
                .take_while(|b| b.is_ascii_digit())
                .count()
        };

        let mut end = self.cursor;
        if bytes.get(end) == Some(&b'-') {
            end += 1;
        }
        let int_digits = count_digits(end);
        end += int_digits;

        let mut frac_digits = 0;
        if bytes.get(end) == Some(&b'.') {
            end += 1;
            frac_digits = count_digits(end);
            end += frac_digits;
        }

        if int_digits + frac_digits == 0 {
            return Err(self.error(ParseErrorKind::InvalidNumber));
        }

        if matches!(bytes.get(end), Some(b'e' | b'E')) {
            let mut exp = end + 1;
            if matches!(bytes.get(exp), Some(b'+' | b'-')) {
                exp += 1;
            }
            let exp_digits = count_digits(exp);
            if exp_digits > 0 {
                end = exp + exp_digits;
            }
        }

        let number = str::from_utf8(&bytes[self.cursor..end])
            .ok()
            .and_then(|text| text.parse::<f64>().ok())
            .ok_or_else(|| self.error_at(start, ParseErrorKind::InvalidNumber))?;

        self.advance_by(end - self.cursor);
        Ok(Value::Number(number))
    }

    /// Decodes a string starting at its opening quote, returning its bytes.
    fn decode_string(&mut self) -> Result<Vec<u8>, ParseError> {
        self.advance_byte(); // Consume opening '"'

        let bytes = self.bytes;
        let mut out = Vec::new();
        loop {
            let rest = &bytes[self.cursor..];
            let Some(stop) = memchr2(b'"', b'\\', rest) else {
                self.consume(rest.len());
                return Err(self.error(ParseErrorKind::UnterminatedString));
            };

            self.extend(&mut out, &rest[..stop])?;
            self.consume(stop);

            if rest[stop] == b'"' {
                self.advance_byte();
                return Ok(out);
            }
            self.advance_byte(); // Consume '\'
            self.decode_escape(&mut out)?;
        }
    }

    /// Decodes the escape following a backslash and appends its bytes.
    fn decode_escape(&mut self, out: &mut Vec<u8>) -> Result<(), ParseError> {
        let byte = self
            .peek()
            .ok_or_else(|| self.error(ParseErrorKind::UnterminatedString))?;

        let unescaped = match byte {
            b'"' | b'\\' | b'/' => byte,
            b'b' => b'\x08',
            b'f' => b'\x0C',
            b'n' => b'\n',
            b'r' => b'\r',
            b't' => b'\t',
            b'u' => {
                self.advance_byte();
                let code = self.decode_hex4()?;
                let mut buf = [0; 3];
                return self.extend(out, encode_code_point(code, &mut buf));
            }
            _ => return Err(self.error(ParseErrorKind::InvalidEscape)),
        };
        self.advance_byte();
        self.extend(out, &[unescaped])
    }

    /// Reads exactly four hex digits.
    fn decode_hex4(&mut self) -> Result<u32, ParseError> {
        let mut code = 0;
        for _ in 0..4 {
            let byte = self
                .peek()
                .ok_or_else(|| self.error(ParseErrorKind::UnterminatedString))?;
            let digit = char::from(byte)
                .to_digit(16)
                .ok_or_else(|| self.error(ParseErrorKind::InvalidUnicodeEscape))?;
            code = (code << 4) | digit;
            self.advance_byte();
        }
        Ok(code)
    }

    fn extend(&self, out: &mut Vec<u8>, bytes: &[u8]) -> Result<(), ParseError> {
        out.try_reserve(bytes.len())
            .map_err(|_| self.error(ParseErrorKind::OutOfMemory))?;
        out.extend_from_slice(bytes);
        Ok(())
    }

    fn decode_array(&mut self) -> Result<Array<Value>, ParseError> {
        self.enter()?;
        self.advance_byte(); // Consume '['

        let mut array = Array::new();
        self.skip_whitespace();
        if self.peek() == Some(b']') {
            self.advance_byte();
            self.leave();
            return Ok(array);
        }

        loop {
            let element = self.decode_value()?;
            array
                .push_back(element)
                .map_err(|_| self.error(ParseErrorKind::OutOfMemory))?;

            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.advance_byte();
                    self.skip_whitespace();
                }
                Some(b']') => {
                    self.advance_byte();
                    break;
                }
                Some(_) => return Err(self.error(ParseErrorKind::ExpectedCommaOrEnd)),
                None => return Err(self.error(ParseErrorKind::UnexpectedEnd)),
            }
        }

        self.leave();
        Ok(array)
    }

    fn decode_object(&mut self) -> Result<OrderedMap, ParseError> {
        self.enter()?;
        self.advance_byte(); // Consume '{'

        let mut map = OrderedMap::new();
        self.skip_whitespace();
        if self.peek() == Some(b'}') {
            self.advance_byte();
            self.leave();
            return Ok(map);
        }

        loop {
            match self.peek() {
                Some(b'"') => {}
                Some(byte) => return Err(self.error(ParseErrorKind::UnexpectedCharacter(byte))),
                None => return Err(self.error(ParseErrorKind::UnexpectedEnd)),
            }
            let key_start = self.position();
            let key = self.decode_string()?;

            self.skip_whitespace();
            match self.peek() {
                Some(b':') => self.advance_byte(),
                Some(_) => return Err(self.error(ParseErrorKind::ExpectedColon)),
                None => return Err(self.error(ParseErrorKind::UnexpectedEnd)),
            }
            self.skip_whitespace();

            let value = self.decode_value()?;
            if let Err(rejected) = map.insert(Pair::new(key, value)) {
                let kind = match rejected.kind() {
                    InsertErrorKind::DuplicateKey => ParseErrorKind::DuplicateKey(
                        String::from_utf8_lossy(&rejected.element().key).into_owned(),
                    ),
                    _ => ParseErrorKind::OutOfMemory,
                };
                return Err(self.error_at(key_start, kind));
            }

            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.advance_byte();
                    self.skip_whitespace();
                }
                Some(b'}') => {
                    self.advance_byte();
                    break;
                }
                Some(_) => return Err(self.error(ParseErrorKind::ExpectedCommaOrEnd)),
                None => return Err(self.error(ParseErrorKind::UnexpectedEnd)),
            }
        }

        self.leave();
        Ok(map)
    }
}

/// Encodes a code point below 0x10000 as one to three bytes of UTF-8.
/// Surrogate halves get the same three-byte treatment as any other value.
fn encode_code_point(code: u32, buf: &mut [u8; 3]) -> &[u8] {
    if code < 0x80 {
        buf[0] = code as u8;
        &buf[..1]
    } else if code < 0x800 {
        buf[0] = 0xC0 | (code >> 6) as u8;
        buf[1] = 0x80 | (code & 0x3F) as u8;
        &buf[..2]
    } else {
        buf[0] = 0xE0 | (code >> 12) as u8;
        buf[1] = 0x80 | ((code >> 6) & 0x3F) as u8;
        buf[2] = 0x80 | (code & 0x3F) as u8;
        &buf[..3]
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    fn decode(input: &str) -> Result<Value, ParseError> {
        Decoder::new(input.as_bytes(), Limits::default()).decode_document()
    }

    fn decode_err(input: &str) -> ParseError {
        decode(input).unwrap_err()
    }

    #[test]
    fn test_literals() {
        assert_eq!(decode("null").unwrap(), Value::Null);
        assert_eq!(decode("true").unwrap(), Value::Bool(true));
        assert_eq!(decode(" \t\r\nfalse").unwrap(), Value::Bool(false));
        assert_eq!(decode_err("nul").kind, ParseErrorKind::InvalidLiteral);
        assert_eq!(decode_err("trUe").kind, ParseErrorKind::InvalidLiteral);
    }

    #[test]
    fn test_empty_input() {
        let err = decode_err("");
        assert_eq!(err.kind, ParseErrorKind::UnexpectedEnd);
        assert_eq!((err.offset, err.line, err.column), (0, 1, 1));

        assert_eq!(decode_err("   ").kind, ParseErrorKind::UnexpectedEnd);
    }

    #[test]
    fn test_unexpected_first_byte() {
        let err = decode_err("  @");
        assert_eq!(err.kind, ParseErrorKind::UnexpectedCharacter(b'@'));
        assert_eq!(err.column, 3);
        assert_eq!(decode_err("+1").kind, ParseErrorKind::UnexpectedCharacter(b'+'));
        // Form feed is not whitespace.
        assert_eq!(
            decode_err("\x0C1").kind,
            ParseErrorKind::UnexpectedCharacter(0x0C)
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(decode("0").unwrap(), Value::Number(0.0));
        assert_eq!(decode("-12.5").unwrap(), Value::Number(-12.5));
        assert_eq!(decode("1e3").unwrap(), Value::Number(1000.0));
        assert_eq!(decode("2.5E-1").unwrap(), Value::Number(0.25));
        assert_eq!(decode("1E+2").unwrap(), Value::Number(100.0));
    }

    #[test]
    fn test_lenient_number_forms() {
        assert_eq!(decode("007").unwrap(), Value::Number(7.0));
        assert_eq!(decode("1.").unwrap(), Value::Number(1.0));
        assert_eq!(decode("-.5").unwrap(), Value::Number(-0.5));
    }

    #[test]
    fn test_exponent_without_digits_is_left_behind() {
        assert_eq!(decode("1e").unwrap(), Value::Number(1.0));

        let err = Decoder::new(b"1e+", Limits::strict())
            .decode_document()
            .unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::TrailingCharacters);
        assert_eq!(err.offset, 1);
    }

    #[test]
    fn test_invalid_numbers() {
        assert_eq!(decode_err("-").kind, ParseErrorKind::InvalidNumber);
        assert_eq!(decode_err("-x").kind, ParseErrorKind::InvalidNumber);
        assert_eq!(decode_err("-.").kind, ParseErrorKind::InvalidNumber);
    }

    #[test]
    fn test_overflowing_numbers_saturate() {
        assert_eq!(decode("1e400").unwrap(), Value::Number(f64::INFINITY));
        assert_eq!(decode("-1e400").unwrap(), Value::Number(f64::NEG_INFINITY));
        assert_eq!(decode("1e-400").unwrap(), Value::Number(0.0));

        let value = decode("[1e400, 2]").unwrap();
        assert_eq!(value.array_get(1), Some(&Value::Number(2.0)));
    }

    #[test]
    fn test_strings() {
        assert_eq!(decode(r#""""#).unwrap(), Value::from(""));
        assert_eq!(decode(r#""hello""#).unwrap(), Value::from("hello"));
        assert_eq!(
            decode(r#""a\"b\\c\/d\b\f\n\r\t""#).unwrap(),
            Value::string(&b"a\"b\\c/d\x08\x0C\n\r\t"[..])
        );
    }

    #[test]
    fn test_utf8_passthrough_and_escape() {
        let raw = decode("\"é\"").unwrap();
        assert_eq!(raw.as_bytes(), Some(&[0xC3, 0xA9][..]));

        let escaped = decode(r#""\u00e9""#).unwrap();
        assert_eq!(escaped, raw);

        let cjk = decode(r#""你好""#).unwrap();
        assert_eq!(cjk.as_str(), Some("你好"));

        assert_eq!(decode(r#""\u0041""#).unwrap(), Value::from("A"));
        assert_eq!(decode(r#""\u0000""#).unwrap(), Value::string(vec![0]));
    }

    #[test]
    fn test_surrogates_are_not_combined() {
        let value = decode(r#""\ud83d\ude00""#).unwrap();
        assert_eq!(
            value.as_bytes(),
            Some(&[0xED, 0xA0, 0xBD, 0xED, 0xB8, 0x80][..])
        );
    }

    #[test]
    fn test_raw_control_bytes_are_kept() {
        let value = decode("\"a\tb\nc\"").unwrap();
        assert_eq!(value.as_bytes(), Some(&b"a\tb\nc"[..]));
    }

    #[test]
    fn test_string_errors() {
        assert_eq!(decode_err(r#""abc"#).kind, ParseErrorKind::UnterminatedString);
        assert_eq!(decode_err(r#""abc\"#).kind, ParseErrorKind::UnterminatedString);
        assert_eq!(decode_err(r#""\u12"#).kind, ParseErrorKind::UnterminatedString);

        let err = decode_err(r#""ab\x""#);
        assert_eq!(err.kind, ParseErrorKind::InvalidEscape);
        assert_eq!(err.offset, 4);

        let err = decode_err(r#""\u12G4""#);
        assert_eq!(err.kind, ParseErrorKind::InvalidUnicodeEscape);
        assert_eq!(err.offset, 5);
    }

    #[test]
    fn test_arrays() {
        let value = decode("[ 1 , [ ] , [true, null] ]").unwrap();
        assert_eq!(value.len(), Some(3));
        assert_eq!(value.array_get(0), Some(&Value::Number(1.0)));
        assert_eq!(value.array_get(1).unwrap().len(), Some(0));
        assert_eq!(value.array_get(2).unwrap().array_get(1), Some(&Value::Null));
    }

    #[test]
    fn test_array_errors() {
        let err = decode_err("[1,2");
        assert_eq!(err.kind, ParseErrorKind::UnexpectedEnd);
        assert_eq!((err.offset, err.column), (4, 5));

        assert_eq!(decode_err("[1 2]").kind, ParseErrorKind::ExpectedCommaOrEnd);
        assert_eq!(
            decode_err("[1,]").kind,
            ParseErrorKind::UnexpectedCharacter(b']')
        );
        assert_eq!(decode_err("[").kind, ParseErrorKind::UnexpectedEnd);
    }

    #[test]
    fn test_objects() {
        let value = decode(r#"{"b": 1, "a": {"nested": [2]}}"#).unwrap();
        assert_eq!(value.len(), Some(2));
        assert_eq!(value.object_get("b").unwrap().value, Value::Number(1.0));
        let nested = &value.object_get("a").unwrap().value;
        assert_eq!(
            nested.object_get("nested").unwrap().value.array_get(0),
            Some(&Value::Number(2.0))
        );
        assert_eq!(decode("{ }").unwrap(), Value::new_object());
    }

    #[test]
    fn test_object_errors() {
        assert_eq!(decode_err(r#"{"a" 1}"#).kind, ParseErrorKind::ExpectedColon);
        assert_eq!(
            decode_err(r#"{"a":1 "b":2}"#).kind,
            ParseErrorKind::ExpectedCommaOrEnd
        );
        assert_eq!(
            decode_err("{a:1}").kind,
            ParseErrorKind::UnexpectedCharacter(b'a')
        );
        assert_eq!(
            decode_err(r#"{"a":1,}"#).kind,
            ParseErrorKind::UnexpectedCharacter(b'}')
        );
        assert_eq!(decode_err(r#"{"a":1,"b":"#).kind, ParseErrorKind::UnexpectedEnd);
    }

    #[test]
    fn test_duplicate_key_reports_key_position() {
        let err = decode_err("{\"a\":1,\n  \"a\":2}");
        assert_eq!(err.kind, ParseErrorKind::DuplicateKey("a".to_string()));
        assert_eq!((err.offset, err.line, err.column), (10, 2, 3));
    }

    #[test]
    fn test_line_and_column_track_strings_with_newlines() {
        let err = decode_err("[\"x\ny\nzz\", ?]");
        assert_eq!(err.kind, ParseErrorKind::UnexpectedCharacter(b'?'));
        assert_eq!((err.line, err.column), (3, 6));
    }

    #[test]
    fn test_depth_limit() {
        let limits = Limits::default().with_max_depth(3);
        assert!(Decoder::new(b"[[[1]]]", limits).decode_document().is_ok());

        let err = Decoder::new(b"[[[[1]]]]", limits)
            .decode_document()
            .unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::DepthLimitExceeded);
        assert_eq!(err.offset, 3);

        let err = Decoder::new(br#"{"a":{"b":{"c":{}}}}"#, limits)
            .decode_document()
            .unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::DepthLimitExceeded);
    }

    #[test]
    fn test_default_depth_allows_deep_documents() {
        let deep = format!("{}{}", "[".repeat(500), "]".repeat(500));
        assert!(decode(&deep).is_ok());

        let too_deep = format!("{}{}", "[".repeat(600), "]".repeat(600));
        assert_eq!(decode_err(&too_deep).kind, ParseErrorKind::DepthLimitExceeded);
    }

    #[test]
    fn test_input_size_limit() {
        let limits = Limits::default().with_max_input_size(4);
        assert!(Decoder::new(b"null", limits).decode_document().is_ok());
        let err = Decoder::new(b"[1,2]", limits).decode_document().unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InputTooLarge);
    }

    #[test]
    fn test_trailing_policy() {
        assert_eq!(decode("1 2").unwrap(), Value::Number(1.0));
        assert_eq!(decode("null]").unwrap(), Value::Null);

        let strict = Limits::strict();
        assert!(Decoder::new(b" [] \n", strict).decode_document().is_ok());
        let err = Decoder::new(b"[] x", strict).decode_document().unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::TrailingCharacters);
        assert_eq!(err.column, 4);
    }

    #[test]
    fn test_encode_code_point_widths() {
        let mut buf = [0; 3];
        assert_eq!(encode_code_point(0x24, &mut buf), "$".as_bytes());
        assert_eq!(encode_code_point(0xA2, &mut buf), "¢".as_bytes());
        assert_eq!(encode_code_point(0x20AC, &mut buf), "€".as_bytes());
        assert_eq!(encode_code_point(0xFFFF, &mut buf), &[0xEF, 0xBF, 0xBF]);
    }
}
