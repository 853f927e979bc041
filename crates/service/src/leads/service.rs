use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::leads::repository::LeadRepository;
use crate::leads::LeadStats;
use models::{consultation, contact};

/// Application service over lead persistence.
///
/// Every operation is a single atomic statement in the store; updates and
/// deletes of a missing id succeed silently, matching the public API
/// contract.
pub struct LeadService<R: LeadRepository> {
    repo: Arc<R>,
}

impl<R: LeadRepository> LeadService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn create_contact(&self, input: contact::NewContact) -> Result<contact::Model, ServiceError> {
        let created = self.repo.create_contact(input).await?;
        info!(id = %created.id, "contact_created");
        Ok(created)
    }

    pub async fn list_contacts(&self) -> Result<Vec<contact::Model>, ServiceError> {
        self.repo.list_contacts().await
    }

    pub async fn set_contact_read(&self, id: Uuid, is_read: bool) -> Result<(), ServiceError> {
        self.repo.set_contact_read(id, is_read).await
    }

    #[instrument(skip(self))]
    pub async fn delete_contact(&self, id: Uuid) -> Result<(), ServiceError> {
        self.repo.delete_contact(id).await?;
        info!(%id, "contact_deleted");
        Ok(())
    }

    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn create_consultation(&self, input: consultation::NewConsultation) -> Result<consultation::Model, ServiceError> {
        let created = self.repo.create_consultation(input).await?;
        info!(id = %created.id, "consultation_created");
        Ok(created)
    }

    pub async fn list_consultations(&self) -> Result<Vec<consultation::Model>, ServiceError> {
        self.repo.list_consultations().await
    }

    pub async fn update_consultation_status(&self, id: Uuid, status: &str) -> Result<(), ServiceError> {
        self.repo.update_consultation_status(id, status).await
    }

    #[instrument(skip(self))]
    pub async fn delete_consultation(&self, id: Uuid) -> Result<(), ServiceError> {
        self.repo.delete_consultation(id).await?;
        info!(%id, "consultation_deleted");
        Ok(())
    }

    pub async fn stats(&self) -> Result<LeadStats, ServiceError> {
        self.repo.stats().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leads::repository::SeaOrmLeadRepository;
    use migration::MigratorTrait;

    async fn setup_service() -> LeadService<SeaOrmLeadRepository> {
        let path = std::env::temp_dir().join(format!("studio_leads_{}.db", Uuid::new_v4()));
        let db = models::db::connect_to(&format!("sqlite://{}?mode=rwc", path.display()))
            .await
            .expect("connect");
        migration::Migrator::up(&db, None).await.expect("migrate");
        LeadService::new(Arc::new(SeaOrmLeadRepository { db }))
    }

    fn contact_input(name: &str) -> contact::NewContact {
        contact::NewContact {
            name: name.into(),
            email: "lead@example.com".into(),
            phone: None,
            message: "Looking for a full home redesign.".into(),
            ip_address: Some("unknown".into()),
            user_agent: Some("unknown".into()),
        }
    }

    #[tokio::test]
    async fn deleted_contact_never_lists_again() {
        let svc = setup_service().await;
        let created = svc.create_contact(contact_input("Jordan Lee")).await.expect("create");
        let kept = svc.create_contact(contact_input("Sam Park")).await.expect("create");

        svc.delete_contact(created.id).await.expect("delete");
        // Deleting an already-deleted id is not an error.
        svc.delete_contact(created.id).await.expect("redelete");

        let listed = svc.list_contacts().await.expect("list");
        assert!(listed.iter().all(|c| c.id != created.id));
        assert!(listed.iter().any(|c| c.id == kept.id));
    }

    #[tokio::test]
    async fn consultation_status_flow() {
        let svc = setup_service().await;
        let created = svc
            .create_consultation(consultation::NewConsultation {
                name: "Jordan Lee".into(),
                email: "jordan@example.com".into(),
                phone: None,
                project_type: Some("residential".into()),
                budget_range: None,
                description: Some("Two bedrooms and the kitchen.".into()),
            })
            .await
            .expect("create");
        assert_eq!(created.status, consultation::STATUS_NEW);

        svc.update_consultation_status(created.id, "contacted").await.expect("update");
        let listed = svc.list_consultations().await.expect("list");
        assert_eq!(listed[0].status, "contacted");
    }

    #[tokio::test]
    async fn stats_track_reads_and_counts() {
        let svc = setup_service().await;
        let first = svc.create_contact(contact_input("Ana Reyes")).await.expect("create");
        svc.create_contact(contact_input("Noa Levi")).await.expect("create");

        let stats = svc.stats().await.expect("stats");
        assert_eq!(stats.contacts, 2);
        assert_eq!(stats.unread_contacts, 2);
        assert_eq!(stats.consultations, 0);

        svc.set_contact_read(first.id, true).await.expect("mark read");
        let stats = svc.stats().await.expect("stats");
        assert_eq!(stats.unread_contacts, 1);
    }
}
