//! # Electricity Billing
//!
//! Logs successive electricity-meter readings and bills the consumption
//! between them on a tiered rate schedule.
//!
//! ## Architecture
//!
//! - **domain**: billing engine (rate tiers, reading validation) and the
//!   billing record aggregate with its repository trait
//! - **application**: record lifecycle service around the engine
//! - **infrastructure**: SeaORM persistence, migrations, in-memory store
//! - **interfaces**: REST API and form routes with Swagger documentation
//! - **shared**: graceful shutdown

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

pub use domain::billing::{rate_per_unit, validate_and_derive};
pub use infrastructure::{init_database, DatabaseConfig};
pub use interfaces::http::create_api_router;
