use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::leads::LeadStats;
use models::{consultation, contact};

/// Repository abstraction for lead persistence.
#[async_trait]
pub trait LeadRepository: Send + Sync {
    async fn create_contact(&self, input: contact::NewContact) -> Result<contact::Model, ServiceError>;
    async fn list_contacts(&self) -> Result<Vec<contact::Model>, ServiceError>;
    async fn set_contact_read(&self, id: Uuid, is_read: bool) -> Result<(), ServiceError>;
    async fn delete_contact(&self, id: Uuid) -> Result<(), ServiceError>;

    async fn create_consultation(&self, input: consultation::NewConsultation) -> Result<consultation::Model, ServiceError>;
    async fn list_consultations(&self) -> Result<Vec<consultation::Model>, ServiceError>;
    async fn update_consultation_status(&self, id: Uuid, status: &str) -> Result<(), ServiceError>;
    async fn delete_consultation(&self, id: Uuid) -> Result<(), ServiceError>;

    async fn stats(&self) -> Result<LeadStats, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmLeadRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl LeadRepository for SeaOrmLeadRepository {
    async fn create_contact(&self, input: contact::NewContact) -> Result<contact::Model, ServiceError> {
        Ok(contact::create(&self.db, input).await?)
    }

    async fn list_contacts(&self) -> Result<Vec<contact::Model>, ServiceError> {
        Ok(contact::list(&self.db).await?)
    }

    async fn set_contact_read(&self, id: Uuid, is_read: bool) -> Result<(), ServiceError> {
        Ok(contact::set_read(&self.db, id, is_read).await?)
    }

    async fn delete_contact(&self, id: Uuid) -> Result<(), ServiceError> {
        Ok(contact::delete(&self.db, id).await?)
    }

    async fn create_consultation(&self, input: consultation::NewConsultation) -> Result<consultation::Model, ServiceError> {
        Ok(consultation::create(&self.db, input).await?)
    }

    async fn list_consultations(&self) -> Result<Vec<consultation::Model>, ServiceError> {
        Ok(consultation::list(&self.db).await?)
    }

    async fn update_consultation_status(&self, id: Uuid, status: &str) -> Result<(), ServiceError> {
        Ok(consultation::update_status(&self.db, id, status).await?)
    }

    async fn delete_consultation(&self, id: Uuid) -> Result<(), ServiceError> {
        Ok(consultation::delete(&self.db, id).await?)
    }

    async fn stats(&self) -> Result<LeadStats, ServiceError> {
        Ok(LeadStats {
            contacts: contact::count(&self.db).await?,
            unread_contacts: contact::count_unread(&self.db).await?,
            consultations: consultation::count(&self.db).await?,
        })
    }
}
