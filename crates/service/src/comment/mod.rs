//! Comments: replies attached to items or to other comments.

pub mod repository;
pub mod service;

pub use repository::CommentRepository;
pub use service::CommentService;
