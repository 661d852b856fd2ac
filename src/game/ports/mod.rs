//! Port contracts for game persistence.

pub mod repository;

pub use repository::{GameRepository, GameRepositoryError, GameRepositoryResult};

#[cfg(test)]
pub use repository::MockGameRepository;
