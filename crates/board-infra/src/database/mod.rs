//! Post store implementations and connection management.

mod connections;
pub mod memory;

#[cfg(feature = "postgres")]
pub mod entity;

#[cfg(feature = "postgres")]
pub mod postgres_repo;

pub use connections::DatabaseConfig;
pub use memory::InMemoryPostRepository;

#[cfg(feature = "postgres")]
pub use connections::DatabaseConnection;

#[cfg(feature = "postgres")]
pub use postgres_repo::PostgresPostRepository;
