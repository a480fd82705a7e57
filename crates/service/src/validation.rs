//! Pre-repository checks shared by every service.

use models::Validate;

use crate::errors::ServiceError;

/// Reject an empty key argument before it reaches a repository.
pub(crate) fn require_arg(field: &'static str, value: &str, message: &'static str) -> Result<(), ServiceError> {
    if value.is_empty() {
        return Err(ServiceError::missing(field, message));
    }
    Ok(())
}

/// Run every required-field check on `entity` and fail with the first violation.
pub(crate) fn require_valid<T: Validate>(entity: &T) -> Result<(), ServiceError> {
    entity.validate().map_err(ServiceError::from)
}

/// Update paths validate the record first, then insist on an id.
pub(crate) fn require_valid_with_id<T: Validate>(entity: &T, id: &str, message: &'static str) -> Result<(), ServiceError> {
    require_valid(entity)?;
    require_arg("id", id, message)
}
