//! `PostgreSQL` adapters for game persistence.

mod connection;
mod repository;
mod schema;

pub use connection::ConnectionString;
pub use repository::PostgresGameRepository;
