use std::sync::Arc;

use axum::http::StatusCode;
use metrics::counter;
use spacebox_api_types::Job;
use tracing::{info, warn};

use crate::application::error::AppError;
use crate::application::listing::ListPage;
use crate::application::repos::{ApplyOutcome, CareerSource};
use crate::cache::{QueryCache, QueryKey, QueryState};
use crate::domain::careers::{
    ApplicationDraft, FIELD_EMAIL, FIELD_FULL_NAME, FIELD_MESSAGE, FIELD_RESUME, FieldErrors,
    first_errors,
};
use crate::domain::error::parse_record_id;
use crate::presentation::views::{
    ApplyFormView, CareersView, JobCard, JobDetailView, NoticeView,
};
use crate::util::dates::format_optional_date;

const SOURCE: &str = "application::careers::CareerService";
const METRIC_APPLICATIONS: &str = "spacebox_job_applications_total";

pub const CAREERS_APOLOGY: &str = "Failed to load job openings. Please try again later.";
pub const APPLY_SUBMITTED: &str =
    "Application submitted successfully! We'll get back to you soon.";
pub const APPLY_VALIDATION_FALLBACK: &str = "Validation failed. Please check the form.";
pub const APPLY_TRANSPORT_FAILURE: &str = "Something went wrong. Please try again.";

/// Re-rendered apply form plus the status to send it with.
pub struct ApplyResult {
    pub status: StatusCode,
    pub form: ApplyFormView,
}

#[derive(Clone)]
pub struct CareerService {
    source: Arc<dyn CareerSource>,
    cache: QueryCache,
    max_resume_bytes: u64,
}

impl CareerService {
    pub fn new(source: Arc<dyn CareerSource>, cache: QueryCache, max_resume_bytes: u64) -> Self {
        Self {
            source,
            cache,
            max_resume_bytes,
        }
    }

    pub async fn list(&self) -> QueryState<Vec<Job>> {
        let source = Arc::clone(&self.source);
        self.cache
            .fetch(QueryKey::JobList, move || async move {
                source.fetch_job_list().await
            })
            .await
    }

    pub async fn detail(&self, id: i64) -> QueryState<Job> {
        let source = Arc::clone(&self.source);
        self.cache
            .fetch(QueryKey::JobDetail(id), move || async move {
                source.fetch_job_detail(id).await
            })
            .await
    }

    pub async fn list_page(&self) -> ListPage<CareersView> {
        let state = self.list().await;
        if let Some(error) = state.error() {
            return ListPage::failed(
                CareersView {
                    jobs: Vec::new(),
                    notice: Some(NoticeView::error(CAREERS_APOLOGY)),
                },
                error.clone(),
            );
        }

        ListPage::ok(CareersView {
            jobs: state.data_or_default().iter().map(job_card).collect(),
            notice: None,
        })
    }

    pub async fn detail_page(&self, raw_id: &str) -> Result<JobDetailView, AppError> {
        let id = parse_record_id("job", raw_id)?;
        let state = self.detail(id).await;
        if let Some(error) = state.error() {
            return Err(AppError::Fetch(error.clone()));
        }
        let Some(job) = state.data() else {
            return Err(AppError::unexpected(format!(
                "job detail `{id}` settled without data"
            )));
        };

        Ok(JobDetailView {
            title: job.title.clone(),
            location: job.location.clone(),
            job_type: job.job_type.clone(),
            description: job.description.clone(),
            requirements: job.requirements.clone(),
            body_html: job.body.clone(),
            deadline: format_optional_date(job.deadline.as_deref()),
            form: ApplyFormView::blank(&job.title, Some(job.id)),
        })
    }

    /// Validate and submit one application.
    ///
    /// Local validation failures never reach the network; the content API
    /// is called at most once and never retried.
    pub async fn apply(&self, draft: ApplicationDraft) -> ApplyResult {
        let mut form = ApplyFormView {
            job_title: draft.job_title.clone(),
            job_id: draft.job_id,
            full_name: draft.full_name.clone(),
            email: draft.email.clone(),
            message: draft.message.clone(),
            ..ApplyFormView::default()
        };

        let application = match draft.validate(self.max_resume_bytes) {
            Ok(application) => application,
            Err(errors) => {
                record_outcome("rejected");
                attach_field_errors(&mut form, &errors);
                form.notice = Some(NoticeView::error(APPLY_VALIDATION_FALLBACK));
                return ApplyResult {
                    status: StatusCode::UNPROCESSABLE_ENTITY,
                    form,
                };
            }
        };

        let job_title = application.job_title.clone();
        match self.source.apply_to_job(application).await {
            ApplyOutcome::Submitted { message } => {
                record_outcome("submitted");
                info!(
                    target = SOURCE,
                    job_title = %job_title,
                    message = %message,
                    "job application submitted"
                );
                let mut form = ApplyFormView::blank(&form.job_title, form.job_id);
                form.notice = Some(NoticeView::success(APPLY_SUBMITTED));
                ApplyResult {
                    status: StatusCode::OK,
                    form,
                }
            }
            ApplyOutcome::ValidationFailure {
                message,
                field_errors,
            } => {
                record_outcome("invalid");
                attach_field_errors(&mut form, &field_errors);
                let notice = if message.trim().is_empty() {
                    APPLY_VALIDATION_FALLBACK.to_string()
                } else {
                    message
                };
                form.notice = Some(NoticeView::error(notice));
                ApplyResult {
                    status: StatusCode::UNPROCESSABLE_ENTITY,
                    form,
                }
            }
            ApplyOutcome::TransportFailure { status, raw_body } => {
                record_outcome("failed");
                warn!(
                    target = SOURCE,
                    job_title = %job_title,
                    status = ?status.map(|status| status.as_u16()),
                    body = %raw_body,
                    "job application submission failed"
                );
                form.notice = Some(NoticeView::error(APPLY_TRANSPORT_FAILURE));
                ApplyResult {
                    status: StatusCode::BAD_GATEWAY,
                    form,
                }
            }
        }
    }
}

fn record_outcome(outcome: &'static str) {
    counter!(METRIC_APPLICATIONS, "outcome" => outcome).increment(1);
}

fn attach_field_errors(form: &mut ApplyFormView, errors: &FieldErrors) {
    for (field, message) in first_errors(errors) {
        match field.as_str() {
            FIELD_FULL_NAME => form.full_name_error = Some(message),
            FIELD_EMAIL => form.email_error = Some(message),
            FIELD_MESSAGE => form.message_error = Some(message),
            FIELD_RESUME => form.resume_error = Some(message),
            _ => form.other_errors.push(message),
        }
    }
}

fn job_card(job: &Job) -> JobCard {
    JobCard {
        id: job.id,
        href: format!("/careers/{}", job.id),
        title: job.title.clone(),
        location: job.location.clone(),
        job_type: job.job_type.clone(),
        description: job.description.clone(),
        deadline: format_optional_date(job.deadline.as_deref()),
        form: ApplyFormView::blank(&job.title, Some(job.id)),
    }
}
