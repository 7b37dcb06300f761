//! Billing service: the record lifecycle around the billing engine

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{
    validate_and_derive, BillingRecord, DerivedFields, DomainError, DomainResult, ReadingError,
    ReadingPair, ReadingRepository,
};

/// Service for creating, listing, overwriting and deleting billing records
pub struct BillingService {
    repo: Arc<dyn ReadingRepository>,
}

impl BillingService {
    pub fn new(repo: Arc<dyn ReadingRepository>) -> Self {
        Self { repo }
    }

    /// All records, oldest first
    pub async fn list_readings(&self) -> DomainResult<Vec<BillingRecord>> {
        self.repo.find_all().await
    }

    pub async fn get_reading(&self, id: i32) -> DomainResult<BillingRecord> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::reading_not_found(id))
    }

    /// Derived fields for a pair without storing anything
    pub fn preview(&self, pair: &ReadingPair) -> DomainResult<DerivedFields> {
        derive(pair)
    }

    /// Validate a reading pair and store it as a new record
    pub async fn create_reading(&self, pair: ReadingPair) -> DomainResult<BillingRecord> {
        let derived = derive(&pair)?;
        let saved = self.repo.save(BillingRecord::new(pair, derived)).await?;

        metrics::counter!("billing_records_created_total").increment(1);
        info!(
            "Reading {} saved: {} units, charge {:.2} ({})",
            saved.id, saved.total_units, saved.total_charge, saved.billing_period
        );

        Ok(saved)
    }

    /// Overwrite every field of an existing record.
    ///
    /// A missing record is reported before the pair is validated; a rejected
    /// pair leaves the stored record untouched.
    pub async fn update_reading(&self, id: i32, pair: ReadingPair) -> DomainResult<BillingRecord> {
        let mut record = self.get_reading(id).await?;
        let derived = derive(&pair)?;

        record.overwrite(pair, derived);
        let updated = self.repo.update(record).await?;

        info!(
            "Reading {} updated: {} units, charge {:.2} ({})",
            updated.id, updated.total_units, updated.total_charge, updated.billing_period
        );

        Ok(updated)
    }

    pub async fn delete_reading(&self, id: i32) -> DomainResult<()> {
        self.repo.delete(id).await?;
        info!("Reading {} deleted", id);
        Ok(())
    }

    /// Probe the record store
    pub async fn ping(&self) -> DomainResult<()> {
        self.repo.ping().await
    }
}

fn derive(pair: &ReadingPair) -> DomainResult<DerivedFields> {
    validate_and_derive(pair).map_err(|e: ReadingError| {
        metrics::counter!("billing_validation_failures_total", "kind" => e.kind()).increment(1);
        warn!("Reading pair rejected: {} ({:?})", e, pair);
        DomainError::Validation(e)
    })
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryReadingRepository;
    use chrono::NaiveDate;

    fn service() -> BillingService {
        BillingService::new(Arc::new(InMemoryReadingRepository::new()))
    }

    fn pair(last: u32, last_day: u32, current: u32, current_day: u32) -> ReadingPair {
        ReadingPair {
            last_reading_date: NaiveDate::from_ymd_opt(2024, 1, last_day).unwrap(),
            last_reading: last,
            current_reading_date: NaiveDate::from_ymd_opt(2024, 1, current_day).unwrap(),
            current_reading: current,
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_derives_fields() {
        let svc = service();

        let record = svc.create_reading(pair(0, 1, 50, 15)).await.unwrap();

        assert_eq!(record.id, 1);
        assert_eq!(record.total_units, 50);
        assert_eq!(record.total_charge, 50.0 * 7.85);
        assert_eq!(record.billing_period, "Jan 01, 2024 - Jan 15, 2024");
        assert_eq!(svc.list_readings().await.unwrap(), vec![record]);
    }

    #[tokio::test]
    async fn rejected_pair_is_not_stored() {
        let svc = service();

        let err = svc.create_reading(pair(300, 1, 200, 15)).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ReadingError::NonIncreasingReading)
        ));

        let err = svc.create_reading(pair(100, 20, 200, 15)).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ReadingError::ReversedDateRange)
        ));

        assert!(svc.list_readings().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_overwrites_all_fields() {
        let svc = service();
        let created = svc.create_reading(pair(0, 1, 50, 15)).await.unwrap();

        let updated = svc
            .update_reading(created.id, pair(100, 2, 250, 31))
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.last_reading, 100);
        assert_eq!(updated.current_reading, 250);
        assert_eq!(updated.total_units, 150);
        assert_eq!(updated.total_charge, 150.0 * (32.0 + 480.0 / 150.0));
        assert_eq!(updated.billing_period, "Jan 02, 2024 - Jan 31, 2024");
        assert_eq!(svc.get_reading(created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn rejected_update_leaves_record_untouched() {
        let svc = service();
        let created = svc.create_reading(pair(0, 1, 50, 15)).await.unwrap();

        let err = svc
            .update_reading(created.id, pair(90, 1, 10, 15))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(svc.get_reading(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn update_of_missing_record_is_not_found_even_when_invalid() {
        let svc = service();

        let err = svc.update_reading(42, pair(90, 1, 10, 15)).await.unwrap_err();

        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let svc = service();
        let created = svc.create_reading(pair(0, 1, 50, 15)).await.unwrap();

        svc.delete_reading(created.id).await.unwrap();

        assert!(matches!(
            svc.get_reading(created.id).await,
            Err(DomainError::NotFound { .. })
        ));
        assert!(matches!(
            svc.delete_reading(created.id).await,
            Err(DomainError::NotFound { .. })
        ));
    }

    #[test]
    fn preview_does_not_touch_storage() {
        let svc = service();

        let derived = svc.preview(&pair(100, 1, 250, 31)).unwrap();

        assert_eq!(derived.total_units, 150);
        assert!(matches!(
            svc.preview(&pair(100, 31, 250, 1)),
            Err(DomainError::Validation(ReadingError::ReversedDateRange))
        ));
    }
}
