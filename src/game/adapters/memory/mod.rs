//! In-memory adapters for game persistence.

mod repository;

pub use repository::InMemoryGameRepository;
