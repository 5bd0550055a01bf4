//! The error taxonomy shared by every layer of the toolchain.

use std::path::PathBuf;

/// The standard result type for fallible CLB operations.
pub type ClbResult<T> = Result<T, ClbError>;

/// Errors that can occur while building, encoding, decoding, or parsing a
/// fabric configuration.
///
/// Invariant violations at the Boolean front end (`ArityExceeded`,
/// `PortCollision`, `TypeMisuse`) surface before the bitstream layer is ever
/// entered. Codec errors are fatal to the operation that invoked them and
/// name the offending field. Misconfiguration of a logic element (mask and
/// port selections disagreeing) is deliberately NOT an error: the hardware
/// accepts such configurations, so it is reported as a warning through the
/// diagnostic sink instead.
#[derive(Debug, thiserror::Error)]
pub enum ClbError {
    /// A Boolean expression references more than four distinct signals.
    #[error("a 4-input LUT can drive only four distinct signals, expression uses {count}")]
    ArityExceeded {
        /// How many distinct signals the expression references.
        count: usize,
    },

    /// Two distinct signals need the same LUT input port letter.
    #[error("port {port} used twice ({first} & {second})")]
    PortCollision {
        /// The contested port letter.
        port: char,
        /// The signal that claimed the port first.
        first: String,
        /// The signal that collided with it.
        second: String,
    },

    /// An argument of the wrong kind was supplied to a typed selector.
    #[error("{0}")]
    TypeMisuse(String),

    /// A decoded field's raw integer is not in the destination enumeration.
    #[error("field {field}: raw value {value:#b} is not a valid encoding")]
    UnknownEncoding {
        /// The field being decoded.
        field: String,
        /// The raw integer read from the buffer.
        value: u16,
    },

    /// An integer cannot be packed into its bit allotment.
    #[error("value {value} does not fit into {bits} bits")]
    ValueDoesNotFit {
        /// The value being packed.
        value: u16,
        /// The number of bits reserved for the field.
        bits: usize,
    },

    /// A bit index fell outside the configuration store.
    #[error("bit index {index} outside the {len}-bit configuration store")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The store length in bits.
        len: usize,
    },

    /// A FASM line was recognized but malformed.
    #[error("error parsing line {line:?}")]
    ParseError {
        /// The offending line, verbatim.
        line: String,
    },

    /// A serialized word list does not yield exactly 1632 bits.
    #[error("bitstream length is {actual} bits, expected {expected}")]
    LengthMismatch {
        /// The bit count actually decoded.
        actual: usize,
        /// The required bit count.
        expected: usize,
    },

    /// A file could not be read or written.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// The path that caused the error.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

impl ClbError {
    /// Creates a [`ClbError::ParseError`] carrying the offending line verbatim.
    pub fn parse(line: impl Into<String>) -> Self {
        ClbError::ParseError { line: line.into() }
    }

    /// Creates a [`ClbError::Io`] for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ClbError::Io {
            path: path.into(),
            source,
        }
    }
}
