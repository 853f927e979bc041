//! Create `consultations` table.
//!
//! Richer intake than contacts; carries a free-form status column that
//! starts at `new`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Consultations::Table)
                    .if_not_exists()
                    .col(uuid(Consultations::Id).primary_key())
                    .col(string_len(Consultations::Name, 128).not_null())
                    .col(string_len(Consultations::Email, 255).not_null())
                    .col(string_len_null(Consultations::Phone, 64))
                    .col(string_len_null(Consultations::ProjectType, 128))
                    .col(string_len_null(Consultations::BudgetRange, 128))
                    .col(text_null(Consultations::Description))
                    .col(string_len(Consultations::Status, 32).not_null().default("new"))
                    .col(timestamp_with_time_zone(Consultations::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Consultations::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Consultations { Table, Id, Name, Email, Phone, ProjectType, BudgetRange, Description, Status, CreatedAt }
