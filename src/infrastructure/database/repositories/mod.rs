//! Database repository implementations

pub mod reading_repository;

pub use reading_repository::SeaOrmReadingRepository;
