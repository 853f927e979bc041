//! Create `contacts` table.
//!
//! Stores public contact-form submissions together with the submitter's
//! network metadata and an unread flag for the admin inbox.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contacts::Table)
                    .if_not_exists()
                    .col(uuid(Contacts::Id).primary_key())
                    .col(string_len(Contacts::Name, 128).not_null())
                    .col(string_len(Contacts::Email, 255).not_null())
                    .col(string_len_null(Contacts::Phone, 64))
                    .col(text(Contacts::Message).not_null())
                    .col(string_len_null(Contacts::IpAddress, 64))
                    .col(string_len_null(Contacts::UserAgent, 512))
                    .col(boolean(Contacts::IsRead).not_null().default(false))
                    .col(timestamp_with_time_zone(Contacts::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Contacts::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Contacts { Table, Id, Name, Email, Phone, Message, IpAddress, UserAgent, IsRead, CreatedAt }
