//! Editable site content documents.
//!
//! Each type mirrors one of the JSON data files behind the public pages.
//! Field names serialize in camelCase to stay byte-compatible with the
//! documents the site frontend consumes.

use serde::{Deserialize, Serialize};

/// The four document kinds, each persisted as one JSON file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocKind {
    Settings,
    Services,
    Projects,
    Testimonials,
}

impl DocKind {
    pub fn file_name(&self) -> &'static str {
        match self {
            DocKind::Settings => "global.json",
            DocKind::Services => "services.json",
            DocKind::Projects => "projects.json",
            DocKind::Testimonials => "testimonials.json",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub short_name: String,
    pub tagline: String,
    pub description: String,
    pub founded: String,
    pub proprietor: String,
    pub philosophy: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub address: Address,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Social {
    pub instagram: String,
    pub facebook: String,
    pub linkedin: String,
    pub twitter: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Maps {
    pub iframe_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seo {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub og_image: String,
}

/// Site-wide settings document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalData {
    pub company: Company,
    pub contact: ContactInfo,
    pub social: Social,
    pub maps: Maps,
    pub seo: Seo,
}

/// One entry of the services document. `slug` drives the public service
/// pages; uniqueness is the editor's responsibility, not enforced here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub short_description: String,
    pub description: String,
    pub icon: String,
    pub image: String,
    pub featured: bool,
    pub features: Vec<String>,
    pub process: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub category: String,
    pub location: String,
    pub year: String,
    pub cover_image: String,
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gallery_images: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slider_images: Option<Vec<String>>,
    pub description: String,
    pub featured: bool,
    pub services: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub role: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub rating: f32,
    pub text: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
}
