//! Items: top-level posted topics.

pub mod repository;
pub mod service;

pub use repository::ItemRepository;
pub use service::ItemService;
