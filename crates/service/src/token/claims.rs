use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use models::Authentication;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::errors::TokenError;
use super::service::IssuerSettings;

pub const EMAIL: &str = "email";
pub const PRIMARY_ID: &str = "primaryId";
pub const PRIMARY_GROUP_ID: &str = "primaryGroupId";
pub const ROLE_ID: &str = "roleId";
pub const ALIAS: &str = "alias";
pub const HIDDEN: &str = "hidden";

/// Claims written into every issued token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub email: String,
    #[serde(rename = "primaryId")]
    pub primary_id: String,
    #[serde(rename = "primaryGroupId")]
    pub primary_group_id: String,
    #[serde(rename = "roleId")]
    pub role_id: String,
    pub alias: String,
    pub hidden: bool,
    pub jti: String,
    pub iat: i64,
    pub nbf: i64,
    pub exp: i64,
    pub iss: String,
    pub aud: String,
}

impl TokenClaims {
    /// Claims for `auth`, valid from `now` for the configured window.
    pub fn issue(auth: &Authentication, settings: &IssuerSettings, now: DateTime<Utc>) -> Result<Self, TokenError> {
        let window = i64::try_from(settings.valid_for_secs)
            .ok()
            .and_then(Duration::try_seconds)
            .ok_or_else(|| TokenError::Encoding(format!("validity window {}s out of range", settings.valid_for_secs)))?;
        let expires = now
            .checked_add_signed(window)
            .ok_or_else(|| TokenError::Encoding("expiry out of range".into()))?;
        Ok(Self {
            email: auth.email.clone(),
            primary_id: auth.primary_id.clone(),
            primary_group_id: auth.primary_group_id.clone(),
            role_id: auth.role_id.clone(),
            alias: auth.alias.clone(),
            hidden: auth.hidden,
            jti: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            exp: expires.timestamp(),
            iss: settings.issuer.clone(),
            aud: settings.audience.clone(),
        })
    }
}

/// Claim set of an already-authenticated caller, keyed by claim name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimSet(BTreeMap<String, Value>);

impl ClaimSet {
    pub fn new() -> Self { Self::default() }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(name.into(), value.into())
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.0.remove(name)
    }

    /// Rebuild the identity the claims were issued for.
    ///
    /// `hidden` may be a JSON bool or a `"true"`/`"false"` string in any case.
    pub fn to_authentication(&self) -> Result<Authentication, TokenError> {
        Ok(Authentication {
            email: self.text(EMAIL)?,
            primary_id: self.text(PRIMARY_ID)?,
            primary_group_id: self.text(PRIMARY_GROUP_ID)?,
            role_id: self.text(ROLE_ID)?,
            alias: self.text(ALIAS)?,
            hidden: self.flag(HIDDEN)?,
        })
    }

    fn text(&self, name: &'static str) -> Result<String, TokenError> {
        match self.get(name) {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(other) => Err(TokenError::InvalidClaim { claim: name, value: other.to_string() }),
            None => Err(TokenError::MissingClaim(name)),
        }
    }

    fn flag(&self, name: &'static str) -> Result<bool, TokenError> {
        match self.get(name) {
            Some(Value::Bool(b)) => Ok(*b),
            Some(Value::String(s)) if s.trim().eq_ignore_ascii_case("true") => Ok(true),
            Some(Value::String(s)) if s.trim().eq_ignore_ascii_case("false") => Ok(false),
            Some(other) => Err(TokenError::InvalidClaim { claim: name, value: other.to_string() }),
            None => Err(TokenError::MissingClaim(name)),
        }
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for ClaimSet {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl TryFrom<&TokenClaims> for ClaimSet {
    type Error = TokenError;

    fn try_from(claims: &TokenClaims) -> Result<Self, Self::Error> {
        serde_json::to_value(claims)
            .and_then(serde_json::from_value)
            .map_err(|e| TokenError::Encoding(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{neo_auth, settings};
    use rstest::rstest;
    use serde_json::json;

    fn neo_claims() -> ClaimSet {
        ClaimSet::from_iter([
            (EMAIL, json!("neo@zion.org")),
            (PRIMARY_ID, json!("123")),
            (PRIMARY_GROUP_ID, json!("rebels")),
            (ROLE_ID, json!("admin")),
            (ALIAS, json!("Neo")),
            (HIDDEN, json!(false)),
        ])
    }

    #[test]
    fn issue_fills_identity_and_window() -> Result<(), TokenError> {
        let now = Utc::now();
        let claims = TokenClaims::issue(&neo_auth(), &settings(), now)?;
        assert_eq!(claims.email, "neo@zion.org");
        assert_eq!(claims.primary_id, "123");
        assert_eq!(claims.iat, now.timestamp());
        assert_eq!(claims.nbf, claims.iat);
        assert_eq!(claims.exp - claims.iat, settings().valid_for_secs as i64);
        assert_eq!(claims.iss, settings().issuer);
        assert_eq!(claims.aud, settings().audience);
        Ok(())
    }

    #[test]
    fn every_issue_gets_a_fresh_jti() -> Result<(), TokenError> {
        let now = Utc::now();
        let a = TokenClaims::issue(&neo_auth(), &settings(), now)?;
        let b = TokenClaims::issue(&neo_auth(), &settings(), now)?;
        assert_ne!(a.jti, b.jti);
        Ok(())
    }

    #[test]
    fn oversized_window_is_an_encoding_error() {
        let huge = IssuerSettings { valid_for_secs: u64::MAX, ..settings() };
        let err = TokenClaims::issue(&neo_auth(), &huge, Utc::now()).unwrap_err();
        assert!(matches!(err, TokenError::Encoding(_)));
    }

    #[test]
    fn claim_set_round_trips_identity() -> Result<(), TokenError> {
        let issued = TokenClaims::issue(&neo_auth(), &settings(), Utc::now())?;
        let set = ClaimSet::try_from(&issued)?;
        assert_eq!(set.to_authentication()?, neo_auth());
        assert_eq!(set.get("jti"), Some(&json!(issued.jti)));
        Ok(())
    }

    #[rstest]
    #[case(json!(true), true)]
    #[case(json!("True"), true)]
    #[case(json!(" false "), false)]
    #[case(json!("FALSE"), false)]
    fn hidden_accepts_bool_forms(#[case] raw: Value, #[case] expected: bool) {
        let mut set = neo_claims();
        set.insert(HIDDEN, raw);
        assert_eq!(set.to_authentication().unwrap().hidden, expected);
    }

    #[rstest]
    #[case(json!("maybe"))]
    #[case(json!(1))]
    #[case(Value::Null)]
    fn hidden_rejects_other_values(#[case] raw: Value) {
        let mut set = neo_claims();
        set.insert(HIDDEN, raw);
        let err = set.to_authentication().unwrap_err();
        assert!(matches!(err, TokenError::InvalidClaim { claim: "hidden", .. }));
    }

    #[test]
    fn missing_identity_claim_is_reported() {
        let mut set = neo_claims();
        set.remove(ROLE_ID);
        assert!(matches!(set.to_authentication(), Err(TokenError::MissingClaim("roleId"))));
    }

    #[test]
    fn non_string_identity_claim_is_invalid() {
        let mut set = neo_claims();
        set.insert(PRIMARY_ID, json!(123));
        assert!(matches!(set.to_authentication(), Err(TokenError::InvalidClaim { claim: "primaryId", .. })));
    }
}
