//! Entity records shared by the discussion-board service layer.
//! - Plain data types with serde wire names.
//! - Required-field validation through the [`validation::Validate`] trait.

pub mod errors;
pub mod validation;
pub mod actor;
pub mod item;
pub mod comment;
pub mod login;
pub mod token;
pub mod authentication;

pub use actor::Actor;
pub use authentication::Authentication;
pub use comment::Comment;
pub use item::Item;
pub use login::ActorLogin;
pub use token::ActorToken;
pub use validation::{FieldViolation, Validate};
