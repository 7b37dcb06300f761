//! Reading routes: REST API under `/api/v1/readings` plus the form surface

pub mod dto;
pub mod error;
pub mod form;
pub mod handlers;

pub use dto::*;
pub use error::ApiError;
pub use form::{InputError, ReadingForm};
pub use handlers::*;

use std::sync::Arc;

use crate::application::BillingService;

/// State for reading handlers
#[derive(Clone)]
pub struct ReadingsState {
    pub billing: Arc<BillingService>,
}
