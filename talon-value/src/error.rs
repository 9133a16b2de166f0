//! The shared error type for container access and transformation.

use core::fmt::{self, Display, Formatter};

use crate::value::ValueKind;

/// Error raised by container access, reduction and transformation
/// operations.
///
/// Absence is not an error: an index that simply fails to resolve
/// produces an absent result (`None` at the single-step level,
/// [`Value::Null`] from a full extraction), never an `Error`. Errors
/// are reserved for garbled inputs — malformed indices, containers
/// with no indexing behavior, selections that cannot be honored — and
/// are raised immediately at the point of detection.
///
/// Failures returned by user-supplied callables propagate through the
/// library verbatim; nothing is ever caught and discarded.
///
/// [`Value::Null`]: crate::Value::Null
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// An index was not a single scalar.
    IndexLength {
        /// Length of the offending index value.
        len: usize,
    },

    /// An index had a kind the target container cannot use.
    IndexType {
        /// Kind of the container being indexed.
        container: ValueKind,
        /// Kind of the index value.
        index: ValueKind,
    },

    /// The container kind has no defined indexing behavior.
    UnsupportedContainer {
        /// Kind of the container.
        kind: ValueKind,
    },

    /// A reduction was given an empty sequence and no initial value.
    EmptyReduce,

    /// Two paired sequences cannot be aligned.
    LengthMismatch {
        /// Length of the first sequence.
        left: usize,
        /// Length of the second sequence.
        right: usize,
    },

    /// A name-based selection was applied to a container without names.
    NoNames {
        /// Kind of the unnamed container.
        kind: ValueKind,
    },

    /// A position selector mixed positive and negative positions.
    MixedSelector,

    /// A depth-targeted transformation ran out of structure.
    InsufficientDepth {
        /// The requested depth.
        depth: isize,
    },

    /// A replacement element is incompatible with the homogeneous
    /// store it was assigned into.
    Coerce {
        /// Kind of the replacement value.
        from: ValueKind,
        /// Element kind of the target store.
        to: ValueKind,
    },

    /// A strict extraction found nothing at one of its indices.
    NotPresent {
        /// 1-based position of the failing index in the path.
        step: usize,
    },

    /// A failure raised by a user-supplied callable.
    Custom {
        /// The failure message.
        message: String,
    },
}

impl Error {
    /// Create an error carrying a caller-supplied message.
    ///
    /// This is the conventional way for a user callable to fail; the
    /// library hands the error back to the top-level caller untouched.
    pub fn custom(message: impl Display) -> Self {
        Error::Custom {
            message: message.to_string(),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::IndexLength { len } => {
                write!(f, "index must have length 1, not {len}")
            }
            Error::IndexType { container, index } => match container {
                ValueKind::Record | ValueKind::Scope => {
                    write!(f, "index into a {container} must be a string, got {index}")
                }
                _ => write!(f, "index must be a string or a number, got {index}"),
            },
            Error::UnsupportedContainer { kind } => {
                write!(f, "don't know how to index object of type {kind}")
            }
            Error::EmptyReduce => {
                write!(f, "cannot reduce an empty sequence: no init supplied")
            }
            Error::LengthMismatch { left, right } => {
                write!(f, "sequence lengths {left} and {right} are incompatible")
            }
            Error::NoNames { kind } => {
                write!(f, "cannot select by name: {kind} value has no names")
            }
            Error::MixedSelector => {
                write!(f, "selector positions must be all positive or all negative")
            }
            Error::InsufficientDepth { depth } => {
                write!(
                    f,
                    "structure is not nested deeply enough to modify at depth {depth}"
                )
            }
            Error::Coerce { from, to } => {
                write!(f, "cannot coerce {from} into a single {to} element")
            }
            Error::NotPresent { step } => {
                write!(f, "index {step} did not match any element")
            }
            Error::Custom { message } => f.write_str(message),
        }
    }
}

impl core::error::Error for Error {}
