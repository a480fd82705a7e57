use models::errors::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {field}: {message}")]
    Validation { field: &'static str, message: String },
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn missing(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation { field, message: message.into() }
    }

    /// Field named by a validation failure.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ServiceError::Validation { field, .. } => Some(field),
            ServiceError::Db(_) => None,
        }
    }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::Validation { .. } => 1001,
            ServiceError::Db(_) => 1200,
        }
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::MissingField { field, message } => Self::missing(field, message),
        }
    }
}
