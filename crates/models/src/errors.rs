use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("{field}: {message}")]
    MissingField { field: &'static str, message: &'static str },
}

impl ModelError {
    /// Name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            ModelError::MissingField { field, .. } => field,
        }
    }
}
