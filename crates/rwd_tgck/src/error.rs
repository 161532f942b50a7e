//! Error types that can be emitted from this library

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Error type for library
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Transparent wrapper for [`std::io::Error`]
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// Transparent wrapper for [`binrw::Error`]
    #[error(transparent)]
    BinRWError(#[from] binrw::Error),

    /// The intro block does not start with the "TGCK" signature
    #[error("invalid RWD file: \"TGCK\" signature missing")]
    MissingSignature,

    /// A metadata section's redundant length fields disagree
    #[error("invalid RWD file: mismatched '{0}' lengths")]
    MismatchedLengths(&'static str),

    /// The temporary output path already exists
    #[error("{} may have been left in place from a failed run - please clean up manually", .0.display())]
    TempFileExists(PathBuf),

    /// The archive ended before an entry's data did
    #[error("short read for {name}: expected {expected} bytes, copied {actual}")]
    ShortRead {
        /// Archived name of the affected entry
        name: String,
        /// Size the directory record claims
        expected: u64,
        /// Bytes actually available
        actual: u64,
    },

    /// An archived name resolves outside the directory it is joined to
    #[error("unsafe archived path: {0}")]
    UnsafePath(String),
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
