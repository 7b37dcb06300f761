//! Create readings table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Readings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Readings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Readings::LastReadingDate).date().not_null())
                    .col(
                        ColumnDef::new(Readings::LastReading)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Readings::CurrentReadingDate)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Readings::CurrentReading)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Readings::TotalUnits)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Readings::TotalCharge).double().not_null())
                    .col(
                        ColumnDef::new(Readings::BillingPeriod)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Readings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Readings::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Readings::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Readings {
    Table,
    Id,
    LastReadingDate,
    LastReading,
    CurrentReadingDate,
    CurrentReading,
    TotalUnits,
    TotalCharge,
    BillingPeriod,
    CreatedAt,
    UpdatedAt,
}
