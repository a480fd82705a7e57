//! Actors: registration, lookup, profile updates and removal.

pub mod repository;
pub mod service;

pub use repository::ActorRepository;
pub use service::ActorService;
