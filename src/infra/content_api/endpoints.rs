//! URL construction for the content API and its media assets.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

pub const BLOG_LIST: &str = "/api/get_blog_list/";
pub const PROJECT_LIST: &str = "/api/get_project_list/";
pub const JOB_LIST: &str = "/api/get_job_list/";
pub const APPLY_JOB: &str = "/api/apply_job/";

const ABSOLUTE_SCHEMES: [&str; 2] = ["http://", "https://"];

// Characters that may not appear raw inside a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub fn blog_detail(slug: &str) -> String {
    format!(
        "/api/get_blog_detail/{}/",
        utf8_percent_encode(slug, PATH_SEGMENT)
    )
}

pub fn project_detail(id: i64) -> String {
    format!("/api/get_project_detail/{id}/")
}

pub fn job_detail(id: i64) -> String {
    format!("/api/get_job_detail/{id}/")
}

/// Resolves API paths and media paths against one base origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
    base: String,
}

impl ApiEndpoints {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        let base = base.trim().trim_end_matches('/').to_string();
        Self { base }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Join `path` onto the base origin with exactly one separating slash.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }

    /// Resolve a media reference from an entity field.
    ///
    /// Empty input yields an empty string, absolute `http(s)` URLs pass through
    /// untouched, and anything else is treated as a path under the base origin.
    pub fn media_url(&self, path: Option<&str>) -> String {
        let Some(path) = path.filter(|value| !value.is_empty()) else {
            return String::new();
        };

        if is_absolute(path) {
            return path.to_string();
        }

        self.api_url(path)
    }
}

fn is_absolute(path: &str) -> bool {
    ABSOLUTE_SCHEMES.iter().any(|scheme| {
        path.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}
