use async_trait::async_trait;
use axum::http::StatusCode;
use reqwest::{
    Body,
    multipart::{Form, Part},
};
use spacebox_api_types::{ApplyJobErrorBody, ApplyJobResponse, Job};

use super::{ContentApiClient, endpoints};
use crate::application::repos::{
    ApplyOutcome, CareerSource, FetchError, Resource, truncate_body,
};
use crate::domain::careers::{JobApplication, ResumeFile};

#[async_trait]
impl CareerSource for ContentApiClient {
    async fn fetch_job_list(&self) -> Result<Vec<Job>, FetchError> {
        self.get_json(Resource::JobList, endpoints::JOB_LIST).await
    }

    async fn fetch_job_detail(&self, id: i64) -> Result<Job, FetchError> {
        self.get_json(Resource::JobDetail, &endpoints::job_detail(id))
            .await
    }

    async fn apply_to_job(&self, application: JobApplication) -> ApplyOutcome {
        let form = Form::new()
            .text("full_name", application.full_name)
            .text("email", application.email)
            .text("message", application.message)
            .text("job_title", application.job_title)
            .part("resume", resume_part(&application.resume));

        let url = self.endpoints.api_url(endpoints::APPLY_JOB);
        let response = match self.http.post(url).multipart(form).send().await {
            Ok(response) => response,
            Err(err) => {
                return ApplyOutcome::TransportFailure {
                    status: None,
                    raw_body: err.to_string(),
                };
            }
        };

        let status = response.status();
        match response.bytes().await {
            Ok(body) => decode_apply_response(status, &body),
            Err(err) => ApplyOutcome::TransportFailure {
                status: Some(status),
                raw_body: err.to_string(),
            },
        }
    }
}

fn resume_part(resume: &ResumeFile) -> Part {
    let part = || {
        Part::stream_with_length(Body::from(resume.bytes.clone()), resume.len())
            .file_name(resume.file_name.clone())
    };

    match resume.content_type.as_deref() {
        Some(content_type) => part().mime_str(content_type).unwrap_or_else(|_| part()),
        None => part(),
    }
}

/// Classify the apply endpoint's answer without ever failing.
pub fn decode_apply_response(status: StatusCode, body: &[u8]) -> ApplyOutcome {
    if status.is_success() {
        let message = serde_json::from_slice::<ApplyJobResponse>(body)
            .map(|response| response.message)
            .unwrap_or_default();
        return ApplyOutcome::Submitted { message };
    }

    match serde_json::from_slice::<ApplyJobErrorBody>(body) {
        Ok(ApplyJobErrorBody {
            message,
            errors: Some(field_errors),
        }) => ApplyOutcome::ValidationFailure {
            message: message.unwrap_or_default(),
            field_errors,
        },
        _ => ApplyOutcome::TransportFailure {
            status: Some(status),
            raw_body: truncate_body(&String::from_utf8_lossy(body)),
        },
    }
}
