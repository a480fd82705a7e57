use std::sync::Arc;

use chrono::Utc;
use configs::JwtConfig;
use models::{ActorLogin, ActorToken, Authentication};
use tracing::{info, instrument, warn};

use super::claims::{ClaimSet, TokenClaims};
use super::errors::{Denial, TokenError};
use super::repository::TokenRepository;
use super::signer::{JwtSigner, TokenSigner};
use crate::errors::ServiceError;
use crate::validation::require_valid;

/// Issuer, audience and lifetime stamped into every token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuerSettings {
    pub issuer: String,
    pub audience: String,
    pub valid_for_secs: u64,
}

impl From<&JwtConfig> for IssuerSettings {
    fn from(cfg: &JwtConfig) -> Self {
        Self { issuer: cfg.issuer.clone(), audience: cfg.audience.clone(), valid_for_secs: cfg.valid_for_secs }
    }
}

/// Result of an issuance attempt. Denials carry the reason for logging only.
#[derive(Debug)]
pub enum TokenOutcome {
    Issued(ActorToken),
    Denied(Denial),
}

impl TokenOutcome {
    pub fn into_token(self) -> Option<ActorToken> {
        match self {
            TokenOutcome::Issued(token) => Some(token),
            TokenOutcome::Denied(_) => None,
        }
    }
}

/// Validates logins and issues signed tokens. Fails closed.
pub struct TokenService<R: TokenRepository, S: TokenSigner = JwtSigner> {
    repo: Arc<R>,
    signer: S,
    settings: IssuerSettings,
}

impl<R: TokenRepository> TokenService<R, JwtSigner> {
    /// Build a service signing with the HMAC key from `cfg`.
    ///
    /// # Examples
    /// ```
    /// use service::token::{TokenService, repository::memory::InMemoryCredentialStore};
    /// use configs::JwtConfig;
    /// use models::{ActorLogin, Authentication};
    /// use std::sync::Arc;
    /// let store = Arc::new(InMemoryCredentialStore::default());
    /// let auth = Authentication { primary_id: "1".into(), email: "u@e.com".into(), alias: "U".into(), ..Default::default() };
    /// tokio_test::block_on(store.register("u@e.com", "Passw0rd", auth)).unwrap();
    /// let cfg = JwtConfig { issuer: "board".into(), audience: "clients".into(), secret: "secret".into(), ..Default::default() };
    /// let svc = TokenService::from_config(store, &cfg).unwrap();
    /// let token = tokio_test::block_on(svc.get_claims_identity(&ActorLogin::new("u@e.com", "Passw0rd"))).unwrap();
    /// assert_eq!(token.unwrap().expires_in, 7200);
    /// ```
    pub fn from_config(repo: Arc<R>, cfg: &JwtConfig) -> Result<Self, TokenError> {
        Ok(Self::new(repo, JwtSigner::from_config(cfg)?, IssuerSettings::from(cfg)))
    }
}

impl<R: TokenRepository, S: TokenSigner> TokenService<R, S> {
    pub fn new(repo: Arc<R>, signer: S, settings: IssuerSettings) -> Self {
        Self { repo, signer, settings }
    }

    /// Validate the login, resolve it against the credential store and try to issue a token.
    ///
    /// `Err` is reserved for validation and storage failures.
    #[instrument(skip(self, login), fields(email = %login.email))]
    pub async fn authenticate(&self, login: &ActorLogin) -> Result<TokenOutcome, ServiceError> {
        require_valid(login)?;
        let outcome = match self.repo.resolve(login).await? {
            Some(auth) => self.issue(&auth),
            None => TokenOutcome::Denied(Denial::BadCredentials),
        };
        Ok(outcome)
    }

    /// Token for a login, or `None` when credentials or token construction fail.
    pub async fn get_claims_identity(&self, login: &ActorLogin) -> Result<Option<ActorToken>, ServiceError> {
        let outcome = self.authenticate(login).await?;
        Ok(settle(outcome))
    }

    /// Issue a fresh token from an authenticated caller's claims.
    #[instrument(skip(self, claims))]
    pub fn reissue(&self, claims: &ClaimSet) -> TokenOutcome {
        match claims.to_authentication() {
            Ok(auth) => self.issue(&auth),
            Err(e) => TokenOutcome::Denied(e.into()),
        }
    }

    /// Only call for callers that are already authenticated.
    pub fn renew_claims_identity(&self, claims: &ClaimSet) -> Option<ActorToken> {
        settle(self.reissue(claims))
    }

    /// Verified claims of a bearer token; `None` for anything that does not verify.
    pub fn read_claims(&self, token: &str) -> Option<ClaimSet> {
        match self.signer.verify(token) {
            Ok(claims) => Some(claims),
            Err(e) => {
                warn!(error = %e, "token_rejected");
                None
            }
        }
    }

    fn issue(&self, auth: &Authentication) -> TokenOutcome {
        let signed = TokenClaims::issue(auth, &self.settings, Utc::now()).and_then(|claims| self.signer.sign(&claims));
        match signed {
            Ok(token) => TokenOutcome::Issued(ActorToken { token, expires_in: self.settings.valid_for_secs }),
            Err(e) => TokenOutcome::Denied(e.into()),
        }
    }
}

fn settle(outcome: TokenOutcome) -> Option<ActorToken> {
    match &outcome {
        TokenOutcome::Issued(_) => info!("token_issued"),
        TokenOutcome::Denied(Denial::BadCredentials) => warn!("credentials_rejected"),
        TokenOutcome::Denied(reason) => warn!(reason = %reason, "token_construction_failed"),
    }
    outcome.into_token()
}
