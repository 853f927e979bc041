use std::path::Path;
use std::sync::Arc;

use crate::errors::ServiceError;
use crate::storage::json_doc_store::JsonDocStore;

use super::types::{DocKind, GlobalData, Project, Service, Testimonial};

/// File-backed store for the editable site content.
///
/// One JSON file per document kind under the data directory. Reads serve
/// the in-memory copy; replacements are whole-document with no revision
/// check, so the last writer wins. That is acceptable for the low write
/// volume of a single admin panel; anything stronger would need a
/// compare-and-swap on a document revision.
#[derive(Clone)]
pub struct ContentStore {
    settings: JsonDocStore<GlobalData>,
    services: JsonDocStore<Vec<Service>>,
    projects: JsonDocStore<Vec<Project>>,
    testimonials: JsonDocStore<Vec<Testimonial>>,
}

impl ContentStore {
    /// Open (or seed) all four documents under `data_dir`.
    pub async fn new<P: AsRef<Path>>(data_dir: P) -> Result<Arc<Self>, ServiceError> {
        let dir = data_dir.as_ref();
        Ok(Arc::new(Self {
            settings: JsonDocStore::new(dir.join(DocKind::Settings.file_name()), GlobalData::default()).await?,
            services: JsonDocStore::new(dir.join(DocKind::Services.file_name()), Vec::new()).await?,
            projects: JsonDocStore::new(dir.join(DocKind::Projects.file_name()), Vec::new()).await?,
            testimonials: JsonDocStore::new(dir.join(DocKind::Testimonials.file_name()), Vec::new()).await?,
        }))
    }

    pub async fn settings(&self) -> GlobalData {
        self.settings.get().await
    }

    pub async fn replace_settings(&self, doc: GlobalData) -> Result<(), ServiceError> {
        self.settings.replace(doc).await
    }

    pub async fn services(&self) -> Vec<Service> {
        self.services.get().await
    }

    pub async fn replace_services(&self, doc: Vec<Service>) -> Result<(), ServiceError> {
        self.services.replace(doc).await
    }

    pub async fn projects(&self) -> Vec<Project> {
        self.projects.get().await
    }

    pub async fn replace_projects(&self, doc: Vec<Project>) -> Result<(), ServiceError> {
        self.projects.replace(doc).await
    }

    pub async fn testimonials(&self) -> Vec<Testimonial> {
        self.testimonials.get().await
    }

    pub async fn replace_testimonials(&self, doc: Vec<Testimonial>) -> Result<(), ServiceError> {
        self.testimonials.replace(doc).await
    }
}
