//! Domain layer: billing engine, reading aggregate and errors

pub mod billing;
pub mod error;
pub mod reading;

pub use billing::{rate_per_unit, validate_and_derive, DerivedFields, ReadingError, ReadingPair};
pub use error::{DomainError, DomainResult};
pub use reading::{BillingRecord, ReadingRepository};
