//! Source traits describing the content API adapters.

use async_trait::async_trait;
use axum::http::StatusCode;
use spacebox_api_types::{BlogPost, Job, Project};
use thiserror::Error;

use crate::domain::careers::{FieldErrors, JobApplication};

/// Upper bound on how much of an upstream error body is kept for diagnostics.
pub const ERROR_BODY_LIMIT: usize = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    BlogList,
    BlogDetail,
    ProjectList,
    ProjectDetail,
    JobList,
    JobDetail,
}

impl Resource {
    pub fn failure_message(self) -> &'static str {
        match self {
            Resource::BlogList => "Failed to fetch blog list",
            Resource::BlogDetail => "Failed to fetch blog detail",
            Resource::ProjectList => "Failed to fetch project list",
            Resource::ProjectDetail => "Failed to fetch project detail",
            Resource::JobList => "Failed to fetch job list",
            Resource::JobDetail => "Failed to fetch job detail",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    NotFound,
    Unavailable,
}

/// Failure of a content read.
///
/// Displays as the static per-resource message; the upstream detail is kept
/// alongside for logs via [`FetchError::diagnostic`].
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("{}", resource.failure_message())]
    Status {
        resource: Resource,
        status: StatusCode,
        body: String,
    },
    #[error("{}", resource.failure_message())]
    Transport { resource: Resource, detail: String },
    #[error("{}", resource.failure_message())]
    Timeout { resource: Resource },
    #[error("{}", resource.failure_message())]
    Decode { resource: Resource, detail: String },
}

impl FetchError {
    pub fn status_error(resource: Resource, status: StatusCode, body: &str) -> Self {
        Self::Status {
            resource,
            status,
            body: truncate_body(body),
        }
    }

    pub fn transport(resource: Resource, detail: impl ToString) -> Self {
        Self::Transport {
            resource,
            detail: detail.to_string(),
        }
    }

    pub fn decode(resource: Resource, detail: impl ToString) -> Self {
        Self::Decode {
            resource,
            detail: detail.to_string(),
        }
    }

    pub fn resource(&self) -> Resource {
        match self {
            FetchError::Status { resource, .. }
            | FetchError::Transport { resource, .. }
            | FetchError::Timeout { resource }
            | FetchError::Decode { resource, .. } => *resource,
        }
    }

    /// Upstream HTTP status, when the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn kind(&self) -> FetchErrorKind {
        match self.status() {
            Some(StatusCode::NOT_FOUND) => FetchErrorKind::NotFound,
            _ => FetchErrorKind::Unavailable,
        }
    }

    pub fn diagnostic(&self) -> String {
        match self {
            FetchError::Status { status, body, .. } => {
                format!("upstream responded {status}: {body}")
            }
            FetchError::Transport { detail, .. } => format!("transport error: {detail}"),
            FetchError::Timeout { .. } => "request timed out".to_string(),
            FetchError::Decode { detail, .. } => format!("response did not decode: {detail}"),
        }
    }
}

pub fn truncate_body(body: &str) -> String {
    if body.len() <= ERROR_BODY_LIMIT {
        return body.to_string();
    }
    let mut end = ERROR_BODY_LIMIT;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…", &body[..end])
}

/// Result of a job application submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    Submitted {
        message: String,
    },
    ValidationFailure {
        message: String,
        field_errors: FieldErrors,
    },
    TransportFailure {
        status: Option<StatusCode>,
        raw_body: String,
    },
}

#[async_trait]
pub trait BlogSource: Send + Sync {
    async fn fetch_blog_list(&self) -> Result<Vec<BlogPost>, FetchError>;

    async fn fetch_blog_detail(&self, slug: &str) -> Result<BlogPost, FetchError>;
}

#[async_trait]
pub trait ProjectSource: Send + Sync {
    async fn fetch_project_list(&self) -> Result<Vec<Project>, FetchError>;

    async fn fetch_project_detail(&self, id: i64) -> Result<Project, FetchError>;
}

#[async_trait]
pub trait CareerSource: Send + Sync {
    async fn fetch_job_list(&self) -> Result<Vec<Job>, FetchError>;

    async fn fetch_job_detail(&self, id: i64) -> Result<Job, FetchError>;

    async fn apply_to_job(&self, application: JobApplication) -> ApplyOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_static_resource_message() {
        let error = FetchError::status_error(
            Resource::BlogList,
            StatusCode::NOT_FOUND,
            "<html>gone</html>",
        );
        assert_eq!(error.to_string(), "Failed to fetch blog list");
        assert_eq!(error.status(), Some(StatusCode::NOT_FOUND));
        assert_eq!(error.kind(), FetchErrorKind::NotFound);
        assert!(error.diagnostic().contains("<html>gone</html>"));
    }

    #[test]
    fn non_404_failures_are_unavailable() {
        let errors = [
            FetchError::status_error(Resource::JobDetail, StatusCode::BAD_GATEWAY, ""),
            FetchError::Timeout {
                resource: Resource::JobDetail,
            },
            FetchError::transport(Resource::JobDetail, "connection refused"),
        ];
        for error in errors {
            assert_eq!(error.kind(), FetchErrorKind::Unavailable);
            assert_eq!(error.to_string(), "Failed to fetch job detail");
        }
    }

    #[test]
    fn long_bodies_are_truncated_on_char_boundary() {
        let body = "é".repeat(ERROR_BODY_LIMIT);
        let truncated = truncate_body(&body);
        assert!(truncated.len() <= ERROR_BODY_LIMIT + '…'.len_utf8());
        assert!(truncated.ends_with('…'));
    }
}
