//! Reading DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{BillingRecord, DerivedFields, ReadingPair};

/// Date format of the edit form fields.
pub const FORM_DATE_FORMAT: &str = "%Y-%m-%d";

/// Pair of meter readings submitted for billing
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ReadingRequest {
    /// Date of the previous reading (`YYYY-MM-DD`)
    pub last_reading_date: NaiveDate,
    /// Previous meter counter value
    pub last_reading: u32,
    /// Date of the current reading (`YYYY-MM-DD`)
    pub current_reading_date: NaiveDate,
    /// Current meter counter value
    pub current_reading: u32,
}

impl From<ReadingRequest> for ReadingPair {
    fn from(r: ReadingRequest) -> Self {
        Self {
            last_reading_date: r.last_reading_date,
            last_reading: r.last_reading,
            current_reading_date: r.current_reading_date,
            current_reading: r.current_reading,
        }
    }
}

/// Stored billing record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReadingResponse {
    pub id: i32,
    pub last_reading_date: NaiveDate,
    pub last_reading: u32,
    pub current_reading_date: NaiveDate,
    pub current_reading: u32,
    pub total_units: u32,
    pub total_charge: f64,
    /// e.g. "Jan 01, 2024 - Feb 01, 2024"
    pub billing_period: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BillingRecord> for ReadingResponse {
    fn from(r: BillingRecord) -> Self {
        Self {
            id: r.id,
            last_reading_date: r.last_reading_date,
            last_reading: r.last_reading,
            current_reading_date: r.current_reading_date,
            current_reading: r.current_reading,
            total_units: r.total_units,
            total_charge: r.total_charge,
            billing_period: r.billing_period,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// Computed bill for a reading pair that was not stored
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BillPreviewResponse {
    pub total_units: u32,
    pub rate_per_unit: f64,
    pub total_charge: f64,
    pub billing_period: String,
}

impl From<DerivedFields> for BillPreviewResponse {
    fn from(d: DerivedFields) -> Self {
        Self {
            total_units: d.total_units,
            rate_per_unit: d.rate_per_unit(),
            total_charge: d.total_charge,
            billing_period: d.billing_period,
        }
    }
}

/// Record prepared for the edit form, field names match the form inputs
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReadingFormResponse {
    pub id: i32,
    /// Last reading date, `YYYY-MM-DD`
    pub date1: String,
    /// Last reading
    pub num1: u32,
    /// Current reading date, `YYYY-MM-DD`
    pub date2: String,
    /// Current reading
    pub num2: u32,
    pub billing_period: String,
}

impl From<BillingRecord> for ReadingFormResponse {
    fn from(r: BillingRecord) -> Self {
        Self {
            id: r.id,
            date1: r.last_reading_date.format(FORM_DATE_FORMAT).to_string(),
            num1: r.last_reading,
            date2: r.current_reading_date.format(FORM_DATE_FORMAT).to_string(),
            num2: r.current_reading,
            billing_period: r.billing_period,
        }
    }
}
