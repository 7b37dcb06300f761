pub mod services;

pub use services::BillingService;
