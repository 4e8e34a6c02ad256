//! Address parse failures.

use thiserror::Error;

/// Coarse classification of an [`AddrParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Illegal character, digit overflow, misplaced separator, or premature end.
    Syntax,
    /// Too many or too few octets/hextets, or a misused `::`.
    Cardinality,
    /// A write would run past the fixed-size address buffer.
    Capacity,
}

impl ErrorKind {
    /// Stable lowercase name used in fixtures and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Syntax => "syntax",
            Self::Cardinality => "cardinality",
            Self::Capacity => "capacity",
        }
    }
}

/// Why a text address was rejected.
///
/// `offset` is the byte index where the failure was detected; failures found
/// at end of input report the text length. C-shaped entry points collapse all
/// variants into a single `0` return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AddrParseError {
    #[error("invalid address syntax at byte {offset}")]
    Syntax { offset: usize },
    #[error("wrong number of address components at byte {offset}")]
    Cardinality { offset: usize },
    #[error("address exceeds buffer capacity at byte {offset}")]
    Capacity { offset: usize },
}

impl AddrParseError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Syntax { .. } => ErrorKind::Syntax,
            Self::Cardinality { .. } => ErrorKind::Cardinality,
            Self::Capacity { .. } => ErrorKind::Capacity,
        }
    }

    #[must_use]
    pub const fn offset(&self) -> usize {
        match *self {
            Self::Syntax { offset } | Self::Cardinality { offset } | Self::Capacity { offset } => {
                offset
            }
        }
    }
}
