//! Error types for the cell codec.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::tag::TypeTag;

/// Result type used throughout the codec.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for codec operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an unsupported kind error.
    #[must_use]
    pub fn unsupported_kind(tag: TypeTag) -> Self {
        Self::new(ErrorKind::UnsupportedKind(tag))
    }

    /// Creates an unknown tag error.
    #[must_use]
    pub fn unknown_tag(code: u8) -> Self {
        Self::new(ErrorKind::UnknownTag(code))
    }

    /// Creates a malformed frame error.
    #[must_use]
    pub fn malformed(defect: FrameDefect) -> Self {
        Self::new(ErrorKind::MalformedFrame(defect))
    }

    /// Creates a truncated frame error.
    #[must_use]
    pub fn truncated(needed: usize, available: usize) -> Self {
        Self::malformed(FrameDefect::Truncated { needed, available })
    }

    /// Creates a non-canonical encoding error.
    #[must_use]
    pub fn non_canonical(tag: TypeTag) -> Self {
        Self::new(ErrorKind::NonCanonicalEncoding(tag))
    }

    /// Creates an invalid decimal error.
    #[must_use]
    pub fn invalid_decimal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidDecimal(message.into()))
    }

    /// Returns true if this error rejects a reserved kind.
    #[must_use]
    pub const fn is_unsupported_kind(&self) -> bool {
        matches!(self.kind, ErrorKind::UnsupportedKind(_))
    }

    /// Returns true if the input started with an undefined tag.
    #[must_use]
    pub const fn is_unknown_tag(&self) -> bool {
        matches!(self.kind, ErrorKind::UnknownTag(_))
    }

    /// Returns true if the frame did not have the shape its tag requires.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self.kind, ErrorKind::MalformedFrame(_))
    }

    /// Returns true if the frame was valid but not in canonical form.
    #[must_use]
    pub const fn is_non_canonical(&self) -> bool {
        matches!(self.kind, ErrorKind::NonCanonicalEncoding(_))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The kind is defined but has no payload codec.
    #[error("unsupported kind: {0}")]
    UnsupportedKind(TypeTag),

    /// The first byte of the frame is not a defined tag.
    #[error("unknown tag: {0}")]
    UnknownTag(u8),

    /// The payload does not match the shape its tag requires.
    #[error("malformed frame: {0}")]
    MalformedFrame(FrameDefect),

    /// The payload is well formed but not the canonical encoding.
    #[error("non-canonical encoding for {0}")]
    NonCanonicalEncoding(TypeTag),

    /// A length prefix exceeds the configured decode limit.
    #[error("length {declared} exceeds limit {limit}")]
    LimitExceeded {
        /// Length declared by the frame.
        declared: usize,
        /// Configured maximum.
        limit: usize,
    },

    /// A variable-length payload is too long for a 32-bit length prefix.
    #[error("payload too large: {0} bytes")]
    PayloadTooLarge(usize),

    /// Text could not be parsed as a decimal.
    #[error("invalid decimal: {0}")]
    InvalidDecimal(String),

    /// I/O error while reading or writing frames.
    #[error("I/O error: {0}")]
    IoError(String),
}

/// Ways a frame can fail to match the shape of its tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameDefect {
    /// The input contained no bytes at all.
    Empty,
    /// The payload ended before a fixed-width field was complete.
    Truncated {
        /// Bytes required by the field.
        needed: usize,
        /// Bytes left in the input.
        available: usize,
    },
    /// A length prefix was negative.
    NegativeLength(i32),
    /// A length prefix pointed past the end of the input.
    LengthExceedsInput {
        /// Length declared by the prefix.
        declared: usize,
        /// Bytes left in the input.
        available: usize,
    },
    /// Bytes remained after a complete frame.
    TrailingBytes(usize),
    /// Text payload was not valid UTF-8.
    InvalidUtf8,
    /// Boolean payload byte was neither 0 nor 1.
    InvalidBool(u8),
}

impl fmt::Display for FrameDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty input"),
            Self::Truncated { needed, available } => {
                write!(f, "truncated: needed {needed} bytes, {available} available")
            }
            Self::NegativeLength(len) => write!(f, "negative length prefix {len}"),
            Self::LengthExceedsInput {
                declared,
                available,
            } => {
                write!(f, "length {declared} exceeds {available} available bytes")
            }
            Self::TrailingBytes(count) => write!(f, "{count} trailing bytes after frame"),
            Self::InvalidUtf8 => write!(f, "text is not valid UTF-8"),
            Self::InvalidBool(byte) => write!(f, "invalid bool byte {byte:#04x}"),
        }
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Byte offset of the frame within the input.
    pub offset: Option<usize>,
    /// The tag being processed.
    pub tag: Option<TypeTag>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the frame offset.
    #[must_use]
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Sets the tag.
    #[must_use]
    pub fn with_tag(mut self, tag: TypeTag) -> Self {
        self.tag = Some(tag);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.tag, self.offset) {
            (Some(tag), Some(offset)) => write!(f, "in {tag} frame at offset {offset}"),
            (Some(tag), None) => write!(f, "in {tag} frame"),
            (None, Some(offset)) => write!(f, "at offset {offset}"),
            (None, None) => Ok(()),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::IoError(err.to_string()))
    }
}
