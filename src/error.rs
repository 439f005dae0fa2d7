use std::result;

use thiserror::Error;

/// Failures of a single authenticated request.
///
/// A non-200 final status is not represented here: the requester hands that
/// response back and leaves status inspection to the caller.
#[derive(Error, Debug)]
pub enum DigestError {
    /// The `WWW-Authenticate` value yielded no usable directives.
    #[error("empty WWW-Authenticate map, {challenge}")]
    EmptyChallenge { challenge: String },

    /// The OS entropy source could not produce a client nonce.
    #[error("random source unavailable: {0}")]
    RandomSourceFailure(#[from] rand::Error),

    /// The transport failed on either send.
    #[error("transport failure: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The configured deadline passed before the named send could start.
    #[error("deadline elapsed before the {0} request")]
    DeadlineElapsed(&'static str),

    /// The assembled header contains bytes HTTP does not allow.
    #[error("invalid Authorization header value: {0}")]
    InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),
}

impl DigestError {
    pub(crate) fn transport<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        DigestError::Transport(Box::new(err))
    }
}

pub type Result<T> = result::Result<T, DigestError>;
