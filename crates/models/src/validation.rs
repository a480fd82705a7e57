//! Required-field validation for entity records.
//!
//! Every check on a record is evaluated; callers that only care about the
//! first failure use [`Validate::validate`].

use crate::errors::ModelError;

/// A single required field that was empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: &'static str,
}

impl From<FieldViolation> for ModelError {
    fn from(v: FieldViolation) -> Self {
        ModelError::MissingField { field: v.field, message: v.message }
    }
}

/// Required string field: name, current value and the message reported when blank.
pub type RequiredField<'a> = (&'static str, &'a str, &'static str);

/// Collect violations for the given checks, in the order they are listed.
pub fn required(checks: &[RequiredField<'_>]) -> Vec<FieldViolation> {
    checks
        .iter()
        .filter(|(_, value, _)| value.trim().is_empty())
        .map(|&(field, _, message)| FieldViolation { field, message })
        .collect()
}

pub trait Validate {
    /// All violated fields in declaration order.
    fn violations(&self) -> Vec<FieldViolation>;

    /// Fail with the first violation; the rest are discarded.
    fn validate(&self) -> Result<(), ModelError> {
        match self.violations().into_iter().next() {
            Some(v) => Err(v.into()),
            None => Ok(()),
        }
    }
}
