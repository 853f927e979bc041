pub mod repository;
pub mod service;

use serde::Serialize;

/// Dashboard counters for the admin overview page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadStats {
    pub contacts: u64,
    pub unread_contacts: u64,
    pub consultations: u64,
}
