use std::io;
use thiserror::Error;

/// Error type for encode/decode operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The sink failed while encoding.
    #[error("I/O error while encoding: {0}")]
    Encode(#[source] io::Error),

    /// The source or sink failed while decoding.
    #[error("I/O error while decoding: {0}")]
    Decode(#[source] io::Error),

    /// The compressed stream is not well-formed.
    #[error("malformed stream: {0}")]
    MalformedStream(#[from] Malformed),
}

/// Reasons a compressed stream is rejected.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum Malformed {
    /// Stream ended after an escape byte or after the count byte.
    #[error("truncated run token")]
    TruncatedRun,

    /// A run token carried a count of zero.
    #[error("run token with zero count")]
    ZeroCount,
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Encode(err) | Error::Decode(err) => err,
            Error::MalformedStream(cause) => io::Error::new(io::ErrorKind::InvalidData, cause),
        }
    }
}
