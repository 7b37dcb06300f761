//! HTTP interfaces
//!
//! - `common`: response envelope and extractors
//! - `modules`: handlers per resource (readings, health, metrics)
//! - `router`: router with Swagger documentation

pub mod common;
pub mod modules;
pub mod router;

pub use router::{create_api_router, ApiDoc, AppState};
