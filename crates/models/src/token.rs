use serde::{Deserialize, Serialize};

/// Bearer token handed back after authentication. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActorToken {
    #[serde(rename = "access_token")]
    pub token: String,
    /// Seconds until the token expires.
    pub expires_in: u64,
}
