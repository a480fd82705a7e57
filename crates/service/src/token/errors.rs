use thiserror::Error;

/// Failures while building, signing or reading a token.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("signer configuration error: {0}")]
    Config(String),
    #[error("token encoding failed: {0}")]
    Encoding(String),
    #[error("token decoding failed: {0}")]
    Decoding(String),
    #[error("missing claim: {0}")]
    MissingClaim(&'static str),
    #[error("invalid claim {claim}: {value}")]
    InvalidClaim { claim: &'static str, value: String },
}

/// Why no token was handed out.
#[derive(Debug, Error)]
pub enum Denial {
    #[error("credentials rejected")]
    BadCredentials,
    #[error(transparent)]
    Token(#[from] TokenError),
}
