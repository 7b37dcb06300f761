//! Database entities module

pub mod reading;

pub use reading::Entity as Reading;
