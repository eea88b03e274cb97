//! # ordjson
//!
//! `ordjson` is a small, safe JSON document model with its own codec.
//!
//! A document decodes into a [`Value`] tree. Arrays are backed by a
//! doubling [`Array`]. Objects are backed by an [`OrderedMap`], a
//! height-balanced search tree keyed by raw bytes that rejects duplicate
//! keys. Decoding, encoding and container insertion grow storage
//! fallibly: running out of memory there surfaces as an error value, not
//! an abort.
//!
//! ## Key Features
//!
//! * **Single ownership:** a value owns its whole subtree; dropping it
//!   releases everything, and a failed decode leaves nothing behind.
//! * **Ownership-safe mutation:** `array_add` and `object_add` hand the
//!   element back inside the error when they refuse it.
//! * **Configurable limits:** nesting depth, input size and the trailing-byte
//!   policy are set through [`Limits`].
//! * **Deterministic output:** encoding the same value twice gives identical
//!   bytes.
//!
//! ## Quick Start: Decoding
//!
//! ```
//! use ordjson::decode;
//!
//! let value = decode(br#"{"b": 1, "a": [true, null]}"#).unwrap();
//! assert_eq!(value.object_get("b").unwrap().value.as_f64(), Some(1.0));
//! assert_eq!(
//!     value.object_get("a").unwrap().value.array_get(0).unwrap().as_bool(),
//!     Some(true)
//! );
//! ```
//!
//! ## Quick Start: Building and Encoding
//!
//! ```
//! use ordjson::{encode, Pair, Value};
//!
//! let mut numbers = Value::new_array();
//! for n in [1.0, 2.0, 3.0] {
//!     numbers.array_add(Value::Number(n)).unwrap();
//! }
//!
//! let mut out = Vec::new();
//! encode(&mut out, &numbers).unwrap();
//! assert_eq!(out, b"[1.000000,2.000000,3.000000]");
//!
//! let mut user = Value::new_object();
//! user.object_add(Pair::new("name", Value::from("Ada"))).unwrap();
//! assert!(user.object_add(Pair::new("name", Value::Null)).is_err());
//! ```

/// The doubling, fallibly-growing `Array` container.
pub mod array;
/// Error types for decoding, encoding and container mutation.
pub mod error;
/// `EncodeOptions` and the serializer.
pub mod encoder;
/// Decode-time resource limits.
pub mod limits;
/// The balanced-tree `OrderedMap` backing JSON objects.
pub mod map;
/// The `Value` enum and the `Pair` record.
pub mod value;

/// The recursive-descent decoder. Private to the crate.
mod decoder;

pub use array::Array;
pub use encoder::{EncodeOptions, StringEscape};
pub use error::{
    AllocError, EncodeError, InsertError, InsertErrorKind, ParseError, ParseErrorKind,
};
pub use limits::Limits;
pub use map::OrderedMap;
pub use value::{Pair, Value};

use decoder::Decoder;

/// Decodes one JSON document with the default [`Limits`].
///
/// Leading whitespace is skipped and one value is parsed. With the default
/// limits, anything after that value is ignored.
///
/// # Errors
/// Returns a `ParseError` carrying the failure kind and where it was
/// detected. Nothing allocated for the document outlives the call.
///
/// # Examples
/// ```
/// use ordjson::{decode, ParseErrorKind};
///
/// assert!(decode(b"null").unwrap().is_null());
///
/// let err = decode(b"[1,2").unwrap_err();
/// assert_eq!(err.kind, ParseErrorKind::UnexpectedEnd);
/// assert_eq!(err.column, 5);
/// ```
pub fn decode(text: &[u8]) -> Result<Value, ParseError> {
    decode_with_limits(text, Limits::default())
}

/// Decodes one JSON document under the given limits.
///
/// # Errors
/// As [`decode`], plus `InputTooLarge`, `DepthLimitExceeded` and
/// `TrailingCharacters` as the limits dictate.
pub fn decode_with_limits(text: &[u8], limits: Limits) -> Result<Value, ParseError> {
    match Decoder::new(text, limits).decode_document() {
        Ok(value) => {
            tracing::trace!(bytes = text.len(), kind = value.type_name(), "decoded document");
            Ok(value)
        }
        Err(err) => {
            tracing::debug!(
                kind = %err.kind,
                offset = err.offset,
                line = err.line,
                column = err.column,
                "decode failed"
            );
            Err(err)
        }
    }
}

/// Appends the encoding of `value` to `out` with the default
/// [`EncodeOptions`]. Existing contents of `out` are kept.
///
/// # Errors
/// `NonFiniteNumber` for NaN or infinities, `OutOfMemory` if `out` cannot
/// grow. `out` stays valid, holding whatever was appended before the error.
pub fn encode(out: &mut Vec<u8>, value: &Value) -> Result<(), EncodeError> {
    encode_with_options(out, value, EncodeOptions::default())
}

/// Appends the encoding of `value` to `out` using `options`.
///
/// # Examples
/// ```
/// use ordjson::{decode, encode_with_options, EncodeOptions};
///
/// let value = decode(br#"[0.5, 10]"#).unwrap();
/// let mut out = Vec::new();
/// encode_with_options(&mut out, &value, EncodeOptions::shortest()).unwrap();
/// assert_eq!(out, b"[0.5,10]");
/// ```
pub fn encode_with_options(
    out: &mut Vec<u8>,
    value: &Value,
    options: EncodeOptions,
) -> Result<(), EncodeError> {
    let start = out.len();
    let result = encoder::encode_into(out, value, options);
    match &result {
        Ok(()) => tracing::trace!(bytes = out.len() - start, "encoded value"),
        Err(err) => tracing::debug!(error = %err, "encode failed"),
    }
    result
}
