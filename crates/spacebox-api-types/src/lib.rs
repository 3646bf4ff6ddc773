//! Request and response types exchanged with the SpaceBox content API.
//!
//! The content service owns every record described here; consumers treat
//! them as read-only snapshots. Optional or nullable columns are modelled as
//! `Option` so that partially populated records still decode.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Blog article as returned by `/api/get_blog_list/` and `/api/get_blog_detail/{slug}/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: i64,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub short_description: String,
    /// Trusted HTML fragment rendered verbatim.
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub image: Option<String>,
    /// Comma-separated tag list; the first entry doubles as the display category.
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub status: Option<i64>,
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub meta_keywords: Option<String>,
    #[serde(default)]
    pub category: Option<i64>,
    #[serde(default)]
    pub created_by: Option<i64>,
    #[serde(default)]
    pub updated_by: Option<i64>,
}

/// One image of a project's gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectGalleryItem {
    pub id: i64,
    pub image: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub order: i64,
}

/// Portfolio project as returned by `/api/get_project_list/` and `/api/get_project_detail/{id}/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    #[serde(default)]
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Free-text size label, e.g. "2,400 sq ft".
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub hero_image: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub project_gallery: Option<Vec<ProjectGalleryItem>>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub category: Option<i64>,
    #[serde(default)]
    pub created_by: Option<i64>,
    #[serde(default)]
    pub updated_by: Option<i64>,
}

impl Project {
    pub fn status_label(&self) -> &'static str {
        if self.is_active { "Active" } else { "Completed" }
    }
}

/// Job opening as returned by `/api/get_job_list/` and `/api/get_job_detail/{id}/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub job_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "Requirements", default)]
    pub requirements: String,
    /// Trusted HTML fragment rendered verbatim.
    #[serde(rename = "Body", default)]
    pub body: String,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub status: Option<i64>,
    #[serde(default)]
    pub posted_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub meta_keywords: Option<String>,
    #[serde(default)]
    pub posted_by: Option<i64>,
    #[serde(default)]
    pub updated_by: Option<i64>,
}

/// Success body of `/api/apply_job/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyJobResponse {
    #[serde(default)]
    pub message: String,
}

/// Error body of `/api/apply_job/` when the submission is rejected.
///
/// `errors` maps a form field name to its messages; absence means the
/// server did not report field-level problems.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyJobErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}
