//! Compact serialization of a `Value` into a caller-owned byte buffer.
//!
//! Arrays are written recursively. Objects are written by walking the
//! map's tree with an explicit stack (see [`OrderedMap::preorder`]), so
//! members come out in tree preorder: deterministic for a given value, but
//! not sorted by key.

use crate::array::Array;
use crate::error::EncodeError;
use crate::map::OrderedMap;
use crate::value::Value;
use memchr::memchr_iter;
use std::fmt::{self, Write as _};

/// Which string bytes get escaped on output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StringEscape {
    /// Only `"` is escaped; every other byte is copied verbatim.
    QuoteOnly,
    /// `"`, `\` and control bytes below 0x20 are escaped.
    #[default]
    Standard,
}

/// Options for [`encode_with_options`](crate::encode_with_options).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Fractional digits written for every number. `None` writes the
    /// shortest fixed-point text that parses back to the same `f64`.
    pub precision: Option<usize>,
    pub escape: StringEscape,
}

/// Fractional digits used by [`EncodeOptions::default`].
pub const DEFAULT_PRECISION: usize = 6;

impl EncodeOptions {
    /// Six fractional digits, standard escaping.
    pub const fn new() -> Self {
        EncodeOptions {
            precision: Some(DEFAULT_PRECISION),
            escape: StringEscape::Standard,
        }
    }

    /// Shortest round-tripping numbers, standard escaping.
    pub const fn shortest() -> Self {
        EncodeOptions {
            precision: None,
            escape: StringEscape::Standard,
        }
    }

    pub const fn with_precision(mut self, precision: Option<usize>) -> Self {
        self.precision = precision;
        self
    }

    pub const fn with_escape(mut self, escape: StringEscape) -> Self {
        self.escape = escape;
        self
    }
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self::new()
    }
}

// Escape classes for `StringEscape::Standard`: 0 copies the byte, `U` needs
// a `\u00XX` escape, anything else is the letter of a two-byte escape.
const U: u8 = b'u';

static ESCAPES: [u8; 256] = {
    let mut table = [0; 256];
    let mut byte = 0;
    while byte < 0x20 {
        table[byte] = U;
        byte += 1;
    }
    table[0x08] = b'b';
    table[0x0C] = b'f';
    table[b'\n' as usize] = b'n';
    table[b'\r' as usize] = b'r';
    table[b'\t' as usize] = b't';
    table[b'"' as usize] = b'"';
    table[b'\\' as usize] = b'\\';
    table
};

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Appends to the output with fallible growth. Its `fmt::Write` impl lets
/// numbers be formatted straight into the buffer.
struct Writer<'a> {
    out: &'a mut Vec<u8>,
    options: EncodeOptions,
}

impl Writer<'_> {
    #[inline]
    fn put(&mut self, bytes: &[u8]) -> Result<(), EncodeError> {
        self.out.try_reserve(bytes.len())?;
        self.out.extend_from_slice(bytes);
        Ok(())
    }

    fn write_value(&mut self, value: &Value) -> Result<(), EncodeError> {
        match value {
            Value::Null => self.put(b"null"),
            Value::Bool(true) => self.put(b"true"),
            Value::Bool(false) => self.put(b"false"),
            Value::Number(n) => self.write_number(*n),
            Value::String(s) => self.write_string(s),
            Value::Array(a) => self.write_array(a),
            Value::Object(o) => self.write_object(o),
        }
    }

    /// Fixed-point only; JSON has no NaN or infinity.
    fn write_number(&mut self, n: f64) -> Result<(), EncodeError> {
        if !n.is_finite() {
            return Err(EncodeError::NonFiniteNumber(n));
        }
        // The only way formatting into the buffer fails is a refused
        // allocation.
        let written = match self.options.precision {
            Some(precision) => write!(self, "{n:.precision$}"),
            None => write!(self, "{n}"),
        };
        written.map_err(|_| EncodeError::OutOfMemory)
    }

    fn write_string(&mut self, s: &[u8]) -> Result<(), EncodeError> {
        self.put(b"\"")?;
        match self.options.escape {
            StringEscape::QuoteOnly => {
                let mut start = 0;
                for quote in memchr_iter(b'"', s) {
                    self.put(&s[start..quote])?;
                    self.put(b"\\\"")?;
                    start = quote + 1;
                }
                self.put(&s[start..])?;
            }
            StringEscape::Standard => {
                let mut start = 0;
                for (i, &byte) in s.iter().enumerate() {
                    let escape = ESCAPES[byte as usize];
                    if escape == 0 {
                        continue;
                    }
                    self.put(&s[start..i])?;
                    if escape == U {
                        self.put(&[
                            b'\\',
                            b'u',
                            b'0',
                            b'0',
                            HEX_DIGITS[(byte >> 4) as usize],
                            HEX_DIGITS[(byte & 0xF) as usize],
                        ])?;
                    } else {
                        self.put(&[b'\\', escape])?;
                    }
                    start = i + 1;
                }
                self.put(&s[start..])?;
            }
        }
        self.put(b"\"")
    }

    fn write_array(&mut self, array: &Array<Value>) -> Result<(), EncodeError> {
        self.put(b"[")?;
        for (i, element) in array.iter().enumerate() {
            if i > 0 {
                self.put(b",")?;
            }
            self.write_value(element)?;
        }
        self.put(b"]")
    }

    fn write_object(&mut self, map: &OrderedMap) -> Result<(), EncodeError> {
        self.put(b"{")?;
        // The traversal stack is owned by `members` and released on every
        // exit from this function.
        let members = map.preorder()?;
        for (i, pair) in members.enumerate() {
            if i > 0 {
                self.put(b",")?;
            }
            self.write_string(&pair.key)?;
            self.put(b":")?;
            self.write_value(&pair.value)?;
        }
        self.put(b"}")
    }
}

impl fmt::Write for Writer<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.put(s.as_bytes()).map_err(|_| fmt::Error)
    }
}

/// Appends the encoding of `value` to `out`.
///
/// On failure `out` keeps whatever was appended before the error.
pub(crate) fn encode_into(
    out: &mut Vec<u8>,
    value: &Value,
    options: EncodeOptions,
) -> Result<(), EncodeError> {
    Writer { out, options }.write_value(value)
}
