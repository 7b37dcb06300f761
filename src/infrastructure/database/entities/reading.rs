//! Reading entity: one billed pair of meter readings

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "readings")]
pub struct Model {
    /// Unique reading ID
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Date of the previous meter reading
    pub last_reading_date: NaiveDate,

    /// Previous meter counter value
    pub last_reading: i64,

    /// Date of the current meter reading
    pub current_reading_date: NaiveDate,

    /// Current meter counter value
    pub current_reading: i64,

    /// Units consumed between the two readings
    pub total_units: i64,

    /// Billed amount
    #[sea_orm(column_type = "Double")]
    pub total_charge: f64,

    /// Human-readable period, e.g. "Jan 01, 2024 - Feb 01, 2024"
    pub billing_period: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
