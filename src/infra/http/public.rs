use std::sync::Arc;

use axum::{
    Router,
    extract::{DefaultBodyLimit, Path, Query, State},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use axum_extra::extract::Multipart;
use serde::Deserialize;
use tracing::error;

use crate::{
    application::{
        blog::BlogService,
        careers::{APPLY_TRANSPORT_FAILURE, ApplyResult, CareerService},
        chrome::ChromeService,
        error::{AppError, ErrorReport},
        listing::ListPage,
        projects::ProjectService,
        site::SiteService,
    },
    domain::careers::{ApplicationDraft, RESUME_TOO_LARGE, ResumeFile},
    presentation::views::{
        AboutTemplate, ApplyFormView, ApplyResultTemplate, ApplyResultView, BlogDetailTemplate,
        BlogListTemplate, CareersTemplate, ComingSoonTemplate, ContactTemplate, ErrorPageView,
        HomeTemplate, JobDetailTemplate, LayoutChrome, LayoutContext, NoticeView,
        ProjectDetailTemplate, ProjectsTemplate, ServiceDetailTemplate, ServicesTemplate,
        render_error_page, render_not_found_response, render_template_response,
    },
};

use super::middleware::{log_responses, set_request_context};

const SOURCE: &str = "infra::http::public";

#[derive(Clone)]
pub struct HttpState {
    pub chrome: Arc<ChromeService>,
    pub site: Arc<SiteService>,
    pub blog: Arc<BlogService>,
    pub projects: Arc<ProjectService>,
    pub careers: Arc<CareerService>,
    pub admin_url: Arc<str>,
    pub apply_body_limit: usize,
}

pub fn build_router(state: HttpState) -> Router {
    let apply_body_limit = state.apply_body_limit;

    Router::new()
        .route("/", get(coming_soon))
        .route("/home", get(home))
        .route("/about", get(about))
        .route("/services", get(services))
        .route("/services/{slug}", get(service_detail))
        .route("/projects", get(projects))
        .route("/projects/{id}", get(project_detail))
        .route("/blog", get(blog))
        .route("/blog/{slug}", get(blog_detail))
        .route("/careers", get(careers))
        .route(
            "/careers/apply",
            post(apply).layer(DefaultBodyLimit::max(apply_body_limit)),
        )
        .route("/careers/{id}", get(job_detail))
        .route("/contact", get(contact))
        .route("/admin", get(admin_redirect))
        .route("/admin/{*rest}", get(admin_redirect))
        .route("/_health", get(health))
        .fallback(fallback)
        .with_state(state)
        .layer(middleware::from_fn(log_responses))
        .layer(middleware::from_fn(set_request_context))
}

async fn coming_soon(State(state): State<HttpState>) -> Response {
    let brand = state.chrome.brand();
    render_template_response(ComingSoonTemplate { brand }, StatusCode::OK)
}

async fn home(State(state): State<HttpState>) -> Response {
    let chrome = state.chrome.load().with_title("Home");
    let content = state.site.home().await;
    let view = LayoutContext::new(chrome, content);
    render_template_response(HomeTemplate { view }, StatusCode::OK)
}

async fn about(State(state): State<HttpState>) -> Response {
    let chrome = state.chrome.load().with_title("About Us");
    let view = LayoutContext::new(chrome, state.site.about());
    render_template_response(AboutTemplate { view }, StatusCode::OK)
}

async fn contact(State(state): State<HttpState>) -> Response {
    let chrome = state.chrome.load().with_title("Contact");
    let view = LayoutContext::new(chrome, state.site.contact());
    render_template_response(ContactTemplate { view }, StatusCode::OK)
}

async fn services(State(state): State<HttpState>) -> Response {
    let chrome = state.chrome.load().with_title("Services");
    let view = LayoutContext::new(chrome, state.site.services());
    render_template_response(ServicesTemplate { view }, StatusCode::OK)
}

async fn service_detail(State(state): State<HttpState>, Path(slug): Path<String>) -> Response {
    let chrome = state.chrome.load();

    match state.site.service_detail(&slug) {
        Ok(content) => {
            let chrome = chrome.with_title(content.title);
            let view = LayoutContext::new(chrome, content);
            render_template_response(ServiceDetailTemplate { view }, StatusCode::OK)
        }
        Err(err) => detail_error_response(chrome, ErrorPageView::service_not_found(), err),
    }
}

async fn projects(State(state): State<HttpState>) -> Response {
    let chrome = state.chrome.load().with_title("Projects");
    let page = state.projects.list_page().await;
    list_response(chrome, page, |view| ProjectsTemplate { view })
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ImageQuery {
    image: Option<String>,
}

async fn project_detail(
    State(state): State<HttpState>,
    Path(id): Path<String>,
    Query(query): Query<ImageQuery>,
) -> Response {
    let chrome = state.chrome.load();
    let image = query
        .image
        .as_deref()
        .and_then(|value| value.trim().parse::<usize>().ok());

    match state.projects.detail_page(&id, image).await {
        Ok(content) => {
            let chrome = chrome.with_title(&content.title);
            let view = LayoutContext::new(chrome, content);
            render_template_response(ProjectDetailTemplate { view }, StatusCode::OK)
        }
        Err(err) => detail_error_response(chrome, ErrorPageView::project_not_found(), err),
    }
}

async fn blog(State(state): State<HttpState>) -> Response {
    let chrome = state.chrome.load().with_title("Blog");
    let page = state.blog.list_page().await;
    list_response(chrome, page, |view| BlogListTemplate { view })
}

async fn blog_detail(State(state): State<HttpState>, Path(slug): Path<String>) -> Response {
    let chrome = state.chrome.load();

    match state.blog.detail_page(&slug).await {
        Ok(content) => {
            let chrome = chrome.with_title(&content.title);
            let view = LayoutContext::new(chrome, content);
            render_template_response(BlogDetailTemplate { view }, StatusCode::OK)
        }
        Err(err) => detail_error_response(chrome, ErrorPageView::post_not_found(), err),
    }
}

async fn careers(State(state): State<HttpState>) -> Response {
    let chrome = state.chrome.load().with_title("Careers");
    let page = state.careers.list_page().await;
    list_response(chrome, page, |view| CareersTemplate { view })
}

async fn job_detail(State(state): State<HttpState>, Path(id): Path<String>) -> Response {
    let chrome = state.chrome.load();

    match state.careers.detail_page(&id).await {
        Ok(content) => {
            let chrome = chrome.with_title(&content.title);
            let view = LayoutContext::new(chrome, content);
            render_template_response(JobDetailTemplate { view }, StatusCode::OK)
        }
        Err(err) => detail_error_response(chrome, ErrorPageView::job_not_found(), err),
    }
}

async fn apply(State(state): State<HttpState>, mut multipart: Multipart) -> Response {
    let chrome = state.chrome.load().with_title("Apply");

    let result = match read_application_draft(&mut multipart).await {
        Ok(draft) => state.careers.apply(draft).await,
        Err(err) => err.into_result(),
    };

    let status = result.status;
    let report = result
        .form
        .notice
        .as_ref()
        .filter(|_| !status.is_success())
        .map(|notice| ErrorReport::from_message(SOURCE, status, notice.text.clone()));

    let (back_href, back_label) = match result.form.job_id {
        Some(id) => (format!("/careers/{id}"), "Back to Job"),
        None => ("/careers".to_string(), "Back to Careers"),
    };
    let content = ApplyResultView {
        back_href,
        back_label,
        form: result.form,
    };
    let view = LayoutContext::new(chrome, content);
    let mut response = render_template_response(ApplyResultTemplate { view }, status);
    if let Some(report) = report {
        report.attach(&mut response);
    }
    response
}

async fn admin_redirect(State(state): State<HttpState>) -> Response {
    Redirect::temporary(&state.admin_url).into_response()
}

async fn health() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

async fn fallback(State(state): State<HttpState>) -> Response {
    render_not_found_response(state.chrome.load().with_title("Page Not Found"))
}

fn detail_error_response(chrome: LayoutChrome, content: ErrorPageView, err: AppError) -> Response {
    let status = err.status_code();
    let chrome = chrome.with_title(&content.title);
    render_error_page(chrome, content, status, err.report(SOURCE))
}

fn list_response<V, T, F>(chrome: LayoutChrome, page: ListPage<V>, template: F) -> Response
where
    T: askama::Template,
    F: FnOnce(LayoutContext<V>) -> T,
{
    let status = page.status();
    let report = page.report(SOURCE);
    let view = LayoutContext::new(chrome, page.view);
    let mut response = render_template_response(template(view), status);
    if let Some(report) = report {
        report.attach(&mut response);
    }
    response
}

async fn read_application_draft(
    multipart: &mut Multipart,
) -> Result<ApplicationDraft, ApplyPayloadError> {
    let mut draft = ApplicationDraft::default();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(err) => {
                let status = err.status();
                error!(
                    target = SOURCE,
                    status = status.as_u16(),
                    error = %err,
                    "failed to read application form"
                );
                return Err(match status {
                    StatusCode::PAYLOAD_TOO_LARGE => ApplyPayloadError::PayloadTooLarge(draft),
                    _ => ApplyPayloadError::InvalidFormData(draft),
                });
            }
        };

        let name = field.name().unwrap_or_default().to_string();
        if name == "resume" {
            let file_name = field.file_name().unwrap_or_default().trim().to_string();
            let content_type = field.content_type().map(|mime| mime.to_string());
            let bytes = match field.bytes().await {
                Ok(bytes) => bytes,
                Err(err) if err.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                    return Err(ApplyPayloadError::PayloadTooLarge(draft));
                }
                Err(_) => return Err(ApplyPayloadError::InvalidFormData(draft)),
            };
            // Browsers send an empty part when no file was chosen.
            if !file_name.is_empty() || !bytes.is_empty() {
                draft.resume = Some(ResumeFile {
                    file_name,
                    content_type,
                    bytes,
                });
            }
            continue;
        }

        let Ok(value) = field.text().await else {
            return Err(ApplyPayloadError::InvalidFormData(draft));
        };
        match name.as_str() {
            "full_name" => draft.full_name = value,
            "email" => draft.email = value,
            "message" => draft.message = value,
            "job_title" => draft.job_title = value,
            "job_id" => draft.job_id = value.trim().parse().ok(),
            _ => {}
        }
    }

    Ok(draft)
}

/// Form bodies that could not be read; carries whatever fields arrived first.
enum ApplyPayloadError {
    PayloadTooLarge(ApplicationDraft),
    InvalidFormData(ApplicationDraft),
}

impl ApplyPayloadError {
    fn into_result(self) -> ApplyResult {
        let (status, draft) = match self {
            ApplyPayloadError::PayloadTooLarge(draft) => (StatusCode::PAYLOAD_TOO_LARGE, draft),
            ApplyPayloadError::InvalidFormData(draft) => (StatusCode::BAD_REQUEST, draft),
        };

        let mut form = ApplyFormView {
            full_name: draft.full_name,
            email: draft.email,
            message: draft.message,
            ..ApplyFormView::blank(&draft.job_title, draft.job_id)
        };
        if status == StatusCode::PAYLOAD_TOO_LARGE {
            form.resume_error = Some(RESUME_TOO_LARGE.to_string());
            form.notice = Some(NoticeView::error(RESUME_TOO_LARGE));
        } else {
            form.notice = Some(NoticeView::error(APPLY_TRANSPORT_FAILURE));
        }

        ApplyResult { status, form }
    }
}
