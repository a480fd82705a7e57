use std::fmt;

use serde::{Deserialize, Serialize};

use crate::validation::{required, FieldViolation, Validate};

/// Credential-check input. Never persisted by the service layer.
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActorLogin {
    pub email: String,
    pub password: String,
}

impl ActorLogin {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }
}

impl fmt::Debug for ActorLogin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActorLogin")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Validate for ActorLogin {
    fn violations(&self) -> Vec<FieldViolation> {
        required(&[
            ("Email", self.email.as_str(), "Must provide login email"),
            ("Password", self.password.as_str(), "Must provide password"),
        ])
    }
}
