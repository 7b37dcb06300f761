//! Billing record entity

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::billing::{DerivedFields, ReadingPair};

/// A stored pair of meter readings with the amounts billed for it.
///
/// Derived fields are only ever set together with the readings they were
/// computed from, through [`BillingRecord::new`] or [`BillingRecord::overwrite`].
#[derive(Debug, Clone, PartialEq)]
pub struct BillingRecord {
    pub id: i32,
    pub last_reading_date: NaiveDate,
    pub last_reading: u32,
    pub current_reading_date: NaiveDate,
    pub current_reading: u32,
    pub total_units: u32,
    pub total_charge: f64,
    pub billing_period: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BillingRecord {
    /// Unsaved record; the store assigns `id` on insert.
    pub fn new(pair: ReadingPair, derived: DerivedFields) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            last_reading_date: pair.last_reading_date,
            last_reading: pair.last_reading,
            current_reading_date: pair.current_reading_date,
            current_reading: pair.current_reading,
            total_units: derived.total_units,
            total_charge: derived.total_charge,
            billing_period: derived.billing_period,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every reading and derived field, keeping identity.
    pub fn overwrite(&mut self, pair: ReadingPair, derived: DerivedFields) {
        self.last_reading_date = pair.last_reading_date;
        self.last_reading = pair.last_reading;
        self.current_reading_date = pair.current_reading_date;
        self.current_reading = pair.current_reading;
        self.total_units = derived.total_units;
        self.total_charge = derived.total_charge;
        self.billing_period = derived.billing_period;
        self.updated_at = Utc::now();
    }

    pub fn reading_pair(&self) -> ReadingPair {
        ReadingPair {
            last_reading_date: self.last_reading_date,
            last_reading: self.last_reading,
            current_reading_date: self.current_reading_date,
            current_reading: self.current_reading,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────
