use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Contacts: list order and unread counter
        manager
            .create_index(
                Index::create()
                    .name("idx_contacts_created_at")
                    .table(Contacts::Table)
                    .col(Contacts::CreatedAt)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_contacts_is_read")
                    .table(Contacts::Table)
                    .col(Contacts::IsRead)
                    .to_owned(),
            )
            .await?;

        // Consultations: list order
        manager
            .create_index(
                Index::create()
                    .name("idx_consultations_created_at")
                    .table(Consultations::Table)
                    .col(Consultations::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_contacts_created_at").table(Contacts::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_contacts_is_read").table(Contacts::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_consultations_created_at").table(Consultations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Contacts { Table, CreatedAt, IsRead }

#[derive(DeriveIden)]
enum Consultations { Table, CreatedAt }
