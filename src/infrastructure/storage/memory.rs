//! In-memory reading repository

use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use crate::domain::{BillingRecord, DomainError, DomainResult, ReadingRepository};

/// In-memory storage for development and testing
pub struct InMemoryReadingRepository {
    readings: DashMap<i32, BillingRecord>,
    reading_counter: AtomicI32,
}

impl InMemoryReadingRepository {
    pub fn new() -> Self {
        Self {
            readings: DashMap::new(),
            reading_counter: AtomicI32::new(1),
        }
    }
}

impl Default for InMemoryReadingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReadingRepository for InMemoryReadingRepository {
    async fn find_all(&self) -> DomainResult<Vec<BillingRecord>> {
        let mut records: Vec<BillingRecord> =
            self.readings.iter().map(|r| r.value().clone()).collect();
        records.sort_by_key(|r| r.id);
        Ok(records)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<BillingRecord>> {
        Ok(self.readings.get(&id).map(|r| r.value().clone()))
    }

    async fn save(&self, mut record: BillingRecord) -> DomainResult<BillingRecord> {
        record.id = self.reading_counter.fetch_add(1, Ordering::SeqCst);
        self.readings.insert(record.id, record.clone());
        Ok(record)
    }

    async fn update(&self, mut record: BillingRecord) -> DomainResult<BillingRecord> {
        let Some(mut existing) = self.readings.get_mut(&record.id) else {
            return Err(DomainError::reading_not_found(record.id));
        };
        record.created_at = existing.created_at;
        record.updated_at = Utc::now();
        *existing = record.clone();
        Ok(record)
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        self.readings
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::reading_not_found(id))
    }

    async fn ping(&self) -> DomainResult<()> {
        Ok(())
    }
}
