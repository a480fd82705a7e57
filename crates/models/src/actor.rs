use serde::{Deserialize, Serialize};

use crate::validation::{required, FieldViolation, Validate};

/// A registered user or system identity.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Actor {
    /// Assigned by the repository on creation.
    pub id: String,
    pub email: String,
    pub alias: String,
    pub hidden: bool,
}

impl Validate for Actor {
    fn violations(&self) -> Vec<FieldViolation> {
        required(&[("Email", self.email.as_str(), "Email Address is required")])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_email_is_reported() {
        let actor = Actor { alias: "Neo".into(), ..Default::default() };
        let err = actor.validate().unwrap_err();
        assert_eq!(err.field(), "Email");
        assert_eq!(err.to_string(), "Email: Email Address is required");
    }

    #[test]
    fn deserializes_with_defaults() {
        let actor: Actor = serde_json::from_str(r#"{"email":"a@b.com"}"#).unwrap();
        assert_eq!(actor.email, "a@b.com");
        assert!(actor.id.is_empty());
        assert!(!actor.hidden);
    }
}
