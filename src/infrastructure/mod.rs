//! Infrastructure layer - external concerns

pub mod database;
pub mod storage;

pub use database::{init_database, redacted_url, DatabaseConfig};
pub use storage::InMemoryReadingRepository;
