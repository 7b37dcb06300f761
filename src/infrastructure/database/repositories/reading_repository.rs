//! SeaORM implementation of ReadingRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, EntityTrait, QueryOrder, Set,
};
use tracing::debug;

use crate::domain::{BillingRecord, DomainError, DomainResult, ReadingRepository};
use crate::infrastructure::database::entities::reading;

// ── Conversion helpers ──────────────────────────────────────────

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(format!("Database error: {}", e))
}

fn to_counter(column: &'static str, value: i64) -> DomainResult<u32> {
    u32::try_from(value).map_err(|_| {
        DomainError::Storage(format!("Column {} holds out-of-range value {}", column, value))
    })
}

fn entity_to_domain(r: reading::Model) -> DomainResult<BillingRecord> {
    Ok(BillingRecord {
        id: r.id,
        last_reading_date: r.last_reading_date,
        last_reading: to_counter("last_reading", r.last_reading)?,
        current_reading_date: r.current_reading_date,
        current_reading: to_counter("current_reading", r.current_reading)?,
        total_units: to_counter("total_units", r.total_units)?,
        total_charge: r.total_charge,
        billing_period: r.billing_period,
        created_at: r.created_at,
        updated_at: r.updated_at,
    })
}

// ── SeaOrmReadingRepository ─────────────────────────────────────

pub struct SeaOrmReadingRepository {
    db: DatabaseConnection,
}

impl SeaOrmReadingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReadingRepository for SeaOrmReadingRepository {
    async fn find_all(&self) -> DomainResult<Vec<BillingRecord>> {
        let models = reading::Entity::find()
            .order_by_asc(reading::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(entity_to_domain).collect()
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<BillingRecord>> {
        let model = reading::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        model.map(entity_to_domain).transpose()
    }

    async fn save(&self, r: BillingRecord) -> DomainResult<BillingRecord> {
        let now = Utc::now();
        let model = reading::ActiveModel {
            id: NotSet,
            last_reading_date: Set(r.last_reading_date),
            last_reading: Set(i64::from(r.last_reading)),
            current_reading_date: Set(r.current_reading_date),
            current_reading: Set(i64::from(r.current_reading)),
            total_units: Set(i64::from(r.total_units)),
            total_charge: Set(r.total_charge),
            billing_period: Set(r.billing_period),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        debug!("Reading row inserted: {}", result.id);
        entity_to_domain(result)
    }

    async fn update(&self, r: BillingRecord) -> DomainResult<BillingRecord> {
        let existing = reading::Entity::find_by_id(r.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::reading_not_found(r.id));
        };

        let model = reading::ActiveModel {
            id: Set(r.id),
            last_reading_date: Set(r.last_reading_date),
            last_reading: Set(i64::from(r.last_reading)),
            current_reading_date: Set(r.current_reading_date),
            current_reading: Set(i64::from(r.current_reading)),
            total_units: Set(i64::from(r.total_units)),
            total_charge: Set(r.total_charge),
            billing_period: Set(r.billing_period),
            created_at: Set(existing.created_at),
            updated_at: Set(Utc::now()),
        };
        let result = model.update(&self.db).await.map_err(db_err)?;
        entity_to_domain(result)
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = reading::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::reading_not_found(id));
        }
        Ok(())
    }

    async fn ping(&self) -> DomainResult<()> {
        self.db.ping().await.map_err(db_err)
    }
}

// ── Tests ──────────────────────────────────────────────────────
