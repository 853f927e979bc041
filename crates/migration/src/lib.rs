//! Migrator registering the lead tables in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240401_000001_create_contacts;
mod m20240401_000002_create_consultations;
mod m20240401_000003_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240401_000001_create_contacts::Migration),
            Box::new(m20240401_000002_create_consultations::Migration),
            // Indexes should always be applied last
            Box::new(m20240401_000003_add_indexes::Migration),
        ]
    }
}
