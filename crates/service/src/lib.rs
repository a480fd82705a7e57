//! Service layer for the discussion board: actors, items, comments and token issuance.
//! - Validates input before any repository call.
//! - Data access goes through async repository traits; each ships an in-memory implementation.
//! - Token failures fail closed and are only visible in logs.

pub mod errors;
mod validation;
pub mod actor;
pub mod item;
pub mod comment;
pub mod token;
#[cfg(test)]
mod test_support;
