//! Billing record repository interface

use async_trait::async_trait;

use super::model::BillingRecord;
use crate::domain::DomainResult;

#[async_trait]
pub trait ReadingRepository: Send + Sync {
    /// All records, oldest id first.
    async fn find_all(&self) -> DomainResult<Vec<BillingRecord>>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<BillingRecord>>;
    /// Insert and return the record with its assigned id.
    async fn save(&self, record: BillingRecord) -> DomainResult<BillingRecord>;
    /// Overwrite an existing record. `NotFound` when `record.id` is unknown.
    async fn update(&self, record: BillingRecord) -> DomainResult<BillingRecord>;
    /// `NotFound` when nothing was deleted.
    async fn delete(&self, id: i32) -> DomainResult<()>;
    /// Cheap liveness probe for the backing store.
    async fn ping(&self) -> DomainResult<()>;
}
