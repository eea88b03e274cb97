//! Error types for decoding, encoding, and container mutation.
use std::collections::TryReserveError;
use std::fmt;
use thiserror::Error;

fn escape_byte(byte: &u8) -> impl fmt::Display {
    char::from(*byte).escape_default()
}

/// What went wrong while decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A byte that cannot start or continue the current production.
    #[error("Unexpected character '{}'", escape_byte(.0))]
    UnexpectedCharacter(u8),
    /// The input ended where a value or delimiter was required.
    #[error("Unexpected end of input")]
    UnexpectedEnd,
    /// A string was still open when the input ended.
    #[error("Unterminated string")]
    UnterminatedString,
    /// A backslash followed by something other than a known escape.
    #[error("Invalid escape sequence")]
    InvalidEscape,
    /// `\u` not followed by four hex digits.
    #[error("Invalid unicode escape")]
    InvalidUnicodeEscape,
    /// A `true`/`false`/`null` literal that does not match exactly.
    #[error("Invalid literal")]
    InvalidLiteral,
    /// A number prefix that the float parser rejected.
    #[error("Invalid number")]
    InvalidNumber,
    /// An object key not followed by `:`.
    #[error("Expected ':'")]
    ExpectedColon,
    /// A member not followed by `,` or the container's closing byte.
    #[error("Expected ',' or closing bracket")]
    ExpectedCommaOrEnd,
    /// The same key appeared twice in one object.
    #[error("Duplicate key \"{0}\"")]
    DuplicateKey(String),
    /// Containers nested deeper than `Limits::max_depth`.
    #[error("Maximum nesting depth exceeded")]
    DepthLimitExceeded,
    /// The input is longer than `Limits::max_input_size`.
    #[error("Input exceeds maximum size limit")]
    InputTooLarge,
    /// Non-whitespace bytes after the value when trailing bytes are rejected.
    #[error("Unexpected trailing characters")]
    TrailingCharacters,
    /// An allocation needed for the document could not be satisfied.
    #[error("Out of memory")]
    OutOfMemory,
}

/// The error returned by every decode entry point.
///
/// Carries the failure kind and the location where it was detected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error: {kind} at line {line}, column {column}.")]
pub struct ParseError {
    /// What went wrong.
    pub kind: ParseErrorKind,
    /// Byte offset (0-indexed) into the input.
    pub offset: usize,
    /// The line number (1-indexed) where the error was detected.
    pub line: usize,
    /// The column number (1-indexed, counted in bytes) where the error was detected.
    pub column: usize,
}

/// An allocation could not be satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("memory allocation failed")]
pub struct AllocError;

impl From<TryReserveError> for AllocError {
    fn from(_: TryReserveError) -> Self {
        AllocError
    }
}

/// The error returned by the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EncodeError {
    /// The output buffer or the traversal stack could not grow.
    #[error("out of memory while encoding")]
    OutOfMemory,
    /// NaN and the infinities have no JSON representation.
    #[error("number {0} has no JSON representation")]
    NonFiniteNumber(f64),
}

impl From<AllocError> for EncodeError {
    fn from(_: AllocError) -> Self {
        EncodeError::OutOfMemory
    }
}

impl From<TryReserveError> for EncodeError {
    fn from(_: TryReserveError) -> Self {
        EncodeError::OutOfMemory
    }
}

/// Why a container refused an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InsertErrorKind {
    /// Storage could not grow.
    #[error("memory allocation failed")]
    OutOfMemory,
    /// The insertion position is past the end.
    #[error("position out of bounds")]
    OutOfBounds,
    /// An entry with an equal key is already present.
    #[error("duplicate key")]
    DuplicateKey,
    /// The target value is not the required container variant.
    #[error("value is not the required container type")]
    TypeMismatch,
}

/// A failed insertion. The rejected element is handed back to the caller,
/// so ownership only moves into a container on success.
pub struct InsertError<T> {
    kind: InsertErrorKind,
    element: T,
}

impl<T> InsertError<T> {
    pub(crate) fn new(kind: InsertErrorKind, element: T) -> Self {
        InsertError { kind, element }
    }

    /// Why the insertion failed.
    pub fn kind(&self) -> InsertErrorKind {
        self.kind
    }

    /// Borrows the rejected element.
    pub fn element(&self) -> &T {
        &self.element
    }

    /// Recovers ownership of the rejected element.
    pub fn into_inner(self) -> T {
        self.element
    }
}

impl<T> fmt::Debug for InsertError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InsertError")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for InsertError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "insertion rejected: {}", self.kind)
    }
}

impl<T> std::error::Error for InsertError<T> {}
