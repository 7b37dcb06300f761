//! Reading aggregate
//!
//! Contains the persisted billing record and its repository interface.

pub mod model;
pub mod repository;

pub use model::BillingRecord;
pub use repository::ReadingRepository;
