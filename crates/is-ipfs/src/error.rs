//! Error types for CID parsing.
//!
//! The public predicates never surface these: every failure is reported as
//! `false`. They exist so that [`CidParser`](crate::CidParser)
//! implementations can propagate failures with `?` and so that rejections can
//! be traced with their cause.

/// A specialized `Result` type for CID parsing.
pub type Result<T> = std::result::Result<T, ParseError>;

/// The error type returned by a [`CidParser`](crate::CidParser).
#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    /// The candidate string was empty.
    #[error("empty input")]
    Empty,
    /// The CID or its multibase envelope could not be decoded.
    #[error("CID error: {0}")]
    Cid(#[from] cid::Error),
    /// The multihash structure was invalid.
    #[error("multihash error: {0}")]
    Multihash(#[from] multihash::Error),
    /// The base58btc text could not be decoded.
    #[error("base58 error: {0}")]
    Base58(#[from] bs58::decode::Error),
    /// Decoded bytes continued past the end of the CID.
    #[error("{extra} trailing bytes after CID")]
    TrailingBytes {
        /// Number of bytes left over after the CID.
        extra: usize,
    },
    /// The multihash declares a hash function that is not in the code table.
    #[error("unsupported hash function: {0:#x}")]
    UnsupportedHash(u64),
}
