pub mod health;
pub mod metrics;
pub mod readings;
pub mod request_id;
