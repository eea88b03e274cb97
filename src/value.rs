//! Contains the `Value` enum, the in-memory form of a JSON document, and the
//! `Pair` record stored in objects.
//!
//! Values own their children outright: arrays own their elements, objects
//! own their pairs, pairs own their key and value. Dropping a value releases
//! the whole subtree. Every mutator that moves an element into a container
//! hands the element back inside the error when it fails, so ownership only
//! changes hands on success.

use crate::array::Array;
use crate::encoder::EncodeOptions;
use crate::error::{EncodeError, InsertError, InsertErrorKind, ParseError};
use crate::map::OrderedMap;
use std::fmt;
use std::str::{self, FromStr};

/// A JSON value.
#[derive(Clone, PartialEq, Default)]
pub enum Value {
    /// JSON `null`.
    #[default]
    Null,
    /// JSON `true` or `false`.
    Bool(bool),
    /// A JSON number as a double.
    Number(f64),
    /// A JSON string as raw bytes.
    ///
    /// Usually UTF-8, but a `\u` escape naming a lone surrogate decodes to
    /// its three-byte form, which is not valid UTF-8.
    String(Vec<u8>),
    /// An ordered sequence of values.
    Array(Array<Value>),
    /// Pairs kept sorted by key.
    Object(OrderedMap),
}

/// A key/value entry stored inside an object.
#[derive(Clone, PartialEq)]
pub struct Pair {
    /// The member name, as raw bytes.
    pub key: Vec<u8>,
    /// The member value.
    pub value: Value,
}

impl Pair {
    pub fn new(key: impl Into<Vec<u8>>, value: Value) -> Self {
        Pair {
            key: key.into(),
            value,
        }
    }

    /// The key as text, if it is valid UTF-8.
    pub fn key_str(&self) -> Option<&str> {
        str::from_utf8(&self.key).ok()
    }
}

impl Value {
    /// Creates an empty array value.
    pub const fn new_array() -> Self {
        Value::Array(Array::new())
    }

    /// Creates an empty object value.
    pub const fn new_object() -> Self {
        Value::Object(OrderedMap::new())
    }

    /// Creates a string value from anything byte-like.
    pub fn string(bytes: impl Into<Vec<u8>>) -> Self {
        Value::String(bytes.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The raw bytes of a string value.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// A string value as text, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        self.as_bytes().and_then(|s| str::from_utf8(s).ok())
    }

    pub fn as_array(&self) -> Option<&Array<Value>> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Array<Value>> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&OrderedMap> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut OrderedMap> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// The element count of an array or object; `None` for scalars.
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::Array(a) => Some(a.len()),
            Value::Object(o) => Some(o.len()),
            _ => None,
        }
    }

    /// The variant's name, for messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    // --- Navigation ---

    /// The element at `index` of an array value.
    pub fn array_get(&self, index: usize) -> Option<&Value> {
        self.as_array()?.get(index)
    }

    /// The pair stored under `key` in an object value.
    pub fn object_get<K: AsRef<[u8]> + ?Sized>(&self, key: &K) -> Option<&Pair> {
        self.as_object()?.get(key)
    }

    // --- Ownership-transferring mutation ---

    /// Appends `element` to an array value.
    ///
    /// # Errors
    /// `TypeMismatch` if `self` is not an array, `OutOfMemory` if the array
    /// cannot grow. The element is handed back in both cases.
    pub fn array_add(&mut self, element: Value) -> Result<(), InsertError<Value>> {
        match self {
            Value::Array(array) => array.push_back(element),
            _ => Err(InsertError::new(InsertErrorKind::TypeMismatch, element)),
        }
    }

    /// Removes the element at `index` from an array value, shifting later
    /// elements down, and returns it.
    pub fn array_take(&mut self, index: usize) -> Option<Value> {
        self.as_array_mut()?.erase_at(index)
    }

    /// Inserts `pair` into an object value.
    ///
    /// # Errors
    /// `TypeMismatch` if `self` is not an object, `DuplicateKey` if the key is
    /// already present (the existing pair is kept), `OutOfMemory` if the map
    /// cannot grow. The pair is handed back in every case.
    pub fn object_add(&mut self, pair: Pair) -> Result<(), InsertError<Pair>> {
        match self {
            Value::Object(map) => map.insert(pair),
            _ => Err(InsertError::new(InsertErrorKind::TypeMismatch, pair)),
        }
    }

    /// Removes the pair stored under `key` from an object value and returns it.
    pub fn object_take<K: AsRef<[u8]> + ?Sized>(&mut self, key: &K) -> Option<Pair> {
        self.as_object_mut()?.remove(key)
    }

    // --- Codec shortcuts ---

    /// Parses a complete document with the default limits.
    pub fn parse(input: &[u8]) -> Result<Value, ParseError> {
        crate::decode(input)
    }

    /// Encodes the value with the default options into a fresh buffer.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, EncodeError> {
        let mut out = Vec::new();
        crate::encode_with_options(&mut out, self, EncodeOptions::default())?;
        Ok(out)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.as_bytes().to_vec())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s.into_bytes())
    }
}

impl FromStr for Value {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::decode(s.as_bytes())
    }
}

/// Strings are shown as (lossy) text rather than byte lists.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Value::String(s) => f
                .debug_tuple("String")
                .field(&String::from_utf8_lossy(s))
                .finish(),
            Value::Array(a) => f.debug_tuple("Array").field(a).finish(),
            Value::Object(o) => f.debug_tuple("Object").field(o).finish(),
        }
    }
}

impl fmt::Debug for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pair")
            .field("key", &String::from_utf8_lossy(&self.key))
            .field("value", &self.value)
            .finish()
    }
}

/// Writes the compact encoding with the default options. Invalid UTF-8 in
/// strings is replaced; values holding NaN or infinities fail to format.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.to_json_bytes().map_err(|_| fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&bytes))
    }
}
