//! Errors returned by key generation and derivation.

/// Failure of a key operation. No output accompanies an error.
#[derive(Debug, thiserror::Error)]
pub enum KeyError {
    #[error("unsupported curve: {0}")]
    UnsupportedCurve(String),

    #[error("missing private key input")]
    MissingInput,

    #[error("failed to parse private key: {0}")]
    Parse(String),

    #[error("failed to encode key: {0}")]
    Encode(String),
}
