use std::{io, path::PathBuf};

/// Result type returned by every fallible operation in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse categories of [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A length, count or interval was out of its valid domain.
    InvalidArgument,
    /// The secure generator or a device file could not deliver bytes.
    Environment,
    /// A generator gave up before producing its result.
    Generation,
}

/// Errors produced while drawing randomness.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid interval [0, {0})")]
    InvalidInterval(i64),

    #[error("invalid length")]
    InvalidLength,

    #[error("alphabet is empty")]
    EmptyAlphabet,

    #[error("input length {input} is greater than output length {output}")]
    LengthMismatch { input: usize, output: usize },

    #[error("secure generator failed: {0}")]
    Secure(#[from] rand::Error),

    #[error("cannot read device {}: {source}", path.display())]
    Device {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A device file ended before the requested number of bytes was read.
    #[error("short read from {}: wanted {expected} bytes, got {read}", path.display())]
    ShortRead {
        path: PathBuf,
        expected: usize,
        read: usize,
    },

    /// Rejection sampling hit too many consecutive duplicates.
    #[error("can't generate a permutation of length {length} after {rejections} rejections")]
    PermutationExhausted { length: usize, rejections: usize },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidInterval(_)
            | Error::InvalidLength
            | Error::EmptyAlphabet
            | Error::LengthMismatch { .. } => ErrorKind::InvalidArgument,
            Error::Secure(_) | Error::Device { .. } | Error::ShortRead { .. } => {
                ErrorKind::Environment
            }
            Error::PermutationExhausted { .. } => ErrorKind::Generation,
        }
    }
}
