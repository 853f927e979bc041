use std::sync::Arc;

use service::auth::service::AuthService;
use service::content::store::ContentStore;
use service::leads::repository::SeaOrmLeadRepository;
use service::leads::service::LeadService;

/// Shared application state handed to every handler.
///
/// Everything here is constructed once at startup; the auth configuration
/// inside `AuthService` is immutable afterwards, so the state clones
/// cheaply and needs no synchronization of its own.
#[derive(Clone)]
pub struct ServerState {
    pub auth: Arc<AuthService>,
    pub leads: Arc<LeadService<SeaOrmLeadRepository>>,
    pub content: Arc<ContentStore>,
    pub admin_path: String,
}
