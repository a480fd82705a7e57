//! Token issuance: credential checks, claim construction and signing.
//!
//! Any failure while building or signing a token is collapsed to an absent
//! token at the public boundary; [`TokenOutcome`] keeps the reason for logs.

pub mod claims;
pub mod errors;
pub mod repository;
pub mod service;
pub mod signer;

pub use claims::{ClaimSet, TokenClaims};
pub use errors::{Denial, TokenError};
pub use repository::TokenRepository;
pub use service::{IssuerSettings, TokenOutcome, TokenService};
pub use signer::{JwtSigner, TokenSigner};
