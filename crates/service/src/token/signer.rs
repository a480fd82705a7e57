use std::str::FromStr;

use configs::JwtConfig;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use super::claims::{ClaimSet, TokenClaims};
use super::errors::TokenError;

/// Signs claims into a bearer token and reads verified claims back.
#[cfg_attr(test, mockall::automock)]
pub trait TokenSigner: Send + Sync {
    fn sign(&self, claims: &TokenClaims) -> Result<String, TokenError>;
    fn verify(&self, token: &str) -> Result<ClaimSet, TokenError>;
}

/// HMAC JWT signer backed by `jsonwebtoken`.
pub struct JwtSigner {
    header: Header,
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl JwtSigner {
    /// HMAC only; `cfg` must pass [`JwtConfig::validate`].
    pub fn from_config(cfg: &JwtConfig) -> Result<Self, TokenError> {
        cfg.validate().map_err(|e| TokenError::Config(e.to_string()))?;
        let algorithm = Algorithm::from_str(cfg.algorithm.trim().to_uppercase().as_str())
            .map_err(|e| TokenError::Config(format!("{}: {}", cfg.algorithm, e)))?;

        let mut validation = Validation::new(algorithm);
        validation.set_issuer(&[cfg.issuer.as_str()]);
        validation.set_audience(&[cfg.audience.as_str()]);
        validation.set_required_spec_claims(&["exp", "nbf", "iss", "aud"]);
        validation.validate_nbf = true;
        validation.leeway = cfg.leeway_secs;

        Ok(Self {
            header: Header::new(algorithm),
            encoding: EncodingKey::from_secret(cfg.secret.as_bytes()),
            decoding: DecodingKey::from_secret(cfg.secret.as_bytes()),
            validation,
        })
    }
}

impl TokenSigner for JwtSigner {
    fn sign(&self, claims: &TokenClaims) -> Result<String, TokenError> {
        encode(&self.header, claims, &self.encoding).map_err(|e| TokenError::Encoding(e.to_string()))
    }

    fn verify(&self, token: &str) -> Result<ClaimSet, TokenError> {
        decode::<ClaimSet>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| TokenError::Decoding(e.to_string()))
    }
}
