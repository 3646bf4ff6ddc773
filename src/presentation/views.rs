use crate::application::error::{ErrorReport, HttpError};
use askama::{Error as AskamaError, Template};
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("{public_message}")]
pub struct TemplateRenderError {
    pub(crate) source: &'static str,
    pub(crate) public_message: &'static str,
    #[source]
    pub(crate) error: AskamaError,
}

impl TemplateRenderError {
    pub fn new(source: &'static str, public_message: &'static str, error: AskamaError) -> Self {
        Self {
            source,
            public_message,
            error,
        }
    }
}

impl From<TemplateRenderError> for HttpError {
    fn from(err: TemplateRenderError) -> Self {
        let TemplateRenderError {
            source,
            public_message,
            error,
        } = err;

        HttpError::from_error(
            source,
            StatusCode::INTERNAL_SERVER_ERROR,
            public_message,
            &error,
        )
    }
}

pub fn render_template<T: Template>(template: T) -> Result<Html<String>, HttpError> {
    template.render().map(Html).map_err(|err| {
        TemplateRenderError::new(
            "presentation::views::render_template",
            "Template rendering failed",
            err,
        )
        .into()
    })
}

pub fn render_template_response<T: Template>(template: T, status: StatusCode) -> Response {
    match render_template(template) {
        Ok(html) => (status, html).into_response(),
        Err(err) => err.into_response(),
    }
}

/// Render the not-found view with `status`, attaching `report` for the response log.
pub fn render_error_page(
    chrome: LayoutChrome,
    content: ErrorPageView,
    status: StatusCode,
    report: ErrorReport,
) -> Response {
    let view = LayoutContext::new(chrome, content);
    let mut response = render_template_response(ErrorTemplate { view }, status);
    report.attach(&mut response);
    response
}

pub fn render_not_found_response(chrome: LayoutChrome) -> Response {
    render_error_page(
        chrome,
        ErrorPageView::not_found(),
        StatusCode::NOT_FOUND,
        ErrorReport::from_message(
            "presentation::views::render_not_found_response",
            StatusCode::NOT_FOUND,
            "Resource not found",
        ),
    )
}

// Layout chrome

#[derive(Clone)]
pub struct BrandView {
    pub title: String,
    pub href: String,
}

#[derive(Clone)]
pub struct NavigationLinkView {
    pub label: String,
    pub href: String,
    pub children: Vec<NavigationLinkView>,
}

#[derive(Clone)]
pub struct NavigationView {
    pub entries: Vec<NavigationLinkView>,
}

#[derive(Clone)]
pub struct PhoneView {
    pub display: String,
    pub tel: String,
}

#[derive(Clone)]
pub struct ContactView {
    pub email: String,
    pub phones: Vec<PhoneView>,
    pub whatsapp_url: String,
    pub instagram_url: String,
    pub instagram_handle: String,
    pub hours: Vec<String>,
}

#[derive(Clone)]
pub struct FooterView {
    pub copy: String,
    pub contact: ContactView,
}

/// Smooth-scroll parameters rendered as data attributes on `<body>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrollView {
    pub smooth: bool,
    pub duration: String,
    pub touch_multiplier: String,
    pub reset_on_navigate: bool,
}

#[derive(Clone)]
pub struct LayoutChrome {
    pub brand: BrandView,
    pub navigation: NavigationView,
    pub footer: FooterView,
    pub scroll: ScrollView,
    pub title: String,
}

impl LayoutChrome {
    pub fn with_title(self, page_title: &str) -> Self {
        let title = format!("{page_title} | {}", self.brand.title);
        Self { title, ..self }
    }
}

#[derive(Clone)]
pub struct LayoutContext<T> {
    pub brand: BrandView,
    pub navigation: NavigationView,
    pub footer: FooterView,
    pub scroll: ScrollView,
    pub title: String,
    pub content: T,
}

impl<T> LayoutContext<T> {
    pub fn new(chrome: LayoutChrome, content: T) -> Self {
        Self {
            brand: chrome.brand,
            navigation: chrome.navigation,
            footer: chrome.footer,
            scroll: chrome.scroll,
            title: chrome.title,
            content,
        }
    }
}

// Shared fragments

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NeighborLink {
    pub href: String,
    pub title: String,
}

/// Top-of-page message shown in place of, or above, the page content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoticeView {
    pub tone: NoticeTone,
    pub text: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeTone {
    Success,
    Error,
}

impl NoticeView {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            tone: NoticeTone::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            tone: NoticeTone::Error,
            text: text.into(),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.tone {
            NoticeTone::Success => "notice notice--success",
            NoticeTone::Error => "notice notice--error",
        }
    }
}

// Coming soon

#[derive(Template)]
#[template(path = "coming_soon.html")]
pub struct ComingSoonTemplate {
    pub brand: BrandView,
}

// Home

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceCard {
    pub href: String,
    pub title: String,
    pub summary: String,
    pub image: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlogCard {
    pub href: String,
    pub title: String,
    pub summary: String,
    pub image: String,
    pub category: Option<String>,
    pub date: String,
    pub iso_date: String,
}

pub struct HomeView {
    pub services: Vec<ServiceCard>,
    pub blog_teaser: Vec<BlogCard>,
}

impl HomeView {
    /// A failed or empty blog list hides the teaser section only.
    pub fn show_blog_teaser(&self) -> bool {
        !self.blog_teaser.is_empty()
    }
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub view: LayoutContext<HomeView>,
}

// Static pages

pub struct AboutView {
    pub services: Vec<ServiceCard>,
}

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub view: LayoutContext<AboutView>,
}

pub struct ContactPageView {
    pub contact: ContactView,
}

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub view: LayoutContext<ContactPageView>,
}

// Services

pub struct ServicesView {
    pub services: Vec<ServiceCard>,
}

#[derive(Template)]
#[template(path = "services.html")]
pub struct ServicesTemplate {
    pub view: LayoutContext<ServicesView>,
}

pub struct HighlightView {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct StepView {
    pub number: String,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct FaqView {
    pub question: &'static str,
    pub answer: &'static str,
}

pub struct ServiceDetailView {
    pub title: &'static str,
    pub tagline: &'static str,
    pub image: &'static str,
    pub description: &'static str,
    pub paragraphs: Vec<&'static str>,
    pub highlights: Vec<HighlightView>,
    pub steps: Vec<StepView>,
    pub faqs: Vec<FaqView>,
    pub prev: Option<NeighborLink>,
    pub next: Option<NeighborLink>,
}

#[derive(Template)]
#[template(path = "service_detail.html")]
pub struct ServiceDetailTemplate {
    pub view: LayoutContext<ServiceDetailView>,
}

// Projects

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectCard {
    pub href: String,
    pub title: String,
    pub description: String,
    pub area: String,
    pub year: String,
    pub status: &'static str,
    pub hero_image: String,
}

pub struct ProjectsView {
    pub projects: Vec<ProjectCard>,
    pub notice: Option<NoticeView>,
}

#[derive(Template)]
#[template(path = "projects.html")]
pub struct ProjectsTemplate {
    pub view: LayoutContext<ProjectsView>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryThumbView {
    pub href: String,
    pub image: String,
    pub label: String,
    pub is_current: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LightboxView {
    pub image: String,
    pub label: String,
    pub position: String,
    pub has_navigation: bool,
    pub prev_href: String,
    pub next_href: String,
}

pub struct ProjectDetailView {
    pub title: String,
    pub description: String,
    pub area: String,
    pub year: String,
    pub status: &'static str,
    pub thumbnails: Vec<GalleryThumbView>,
    pub lightbox: LightboxView,
}

#[derive(Template)]
#[template(path = "project_detail.html")]
pub struct ProjectDetailTemplate {
    pub view: LayoutContext<ProjectDetailView>,
}

// Blog

pub struct BlogListView {
    pub posts: Vec<BlogCard>,
    pub notice: Option<NoticeView>,
}

#[derive(Template)]
#[template(path = "blog.html")]
pub struct BlogListTemplate {
    pub view: LayoutContext<BlogListView>,
}

pub struct BlogDetailView {
    pub title: String,
    pub subtitle: String,
    pub tags: Vec<String>,
    pub image: String,
    pub date: String,
    pub iso_date: String,
    pub body_html: String,
    pub prev: Option<NeighborLink>,
    pub next: Option<NeighborLink>,
}

#[derive(Template)]
#[template(path = "blog_detail.html")]
pub struct BlogDetailTemplate {
    pub view: LayoutContext<BlogDetailView>,
}

// Careers

/// Apply form state, blank on first render and echoed back after a submission.
///
/// Renders as a fragment embedded by the careers, job and apply pages.
#[derive(Clone, Debug, Default, PartialEq, Eq, Template)]
#[template(path = "apply_form.html")]
pub struct ApplyFormView {
    pub job_title: String,
    pub job_id: Option<i64>,
    pub full_name: String,
    pub email: String,
    pub message: String,
    pub notice: Option<NoticeView>,
    pub full_name_error: Option<String>,
    pub email_error: Option<String>,
    pub message_error: Option<String>,
    pub resume_error: Option<String>,
    pub other_errors: Vec<String>,
}

impl ApplyFormView {
    pub fn blank(job_title: &str, job_id: Option<i64>) -> Self {
        Self {
            job_title: job_title.to_string(),
            job_id,
            ..Self::default()
        }
    }

    pub fn has_errors(&self) -> bool {
        self.full_name_error.is_some()
            || self.email_error.is_some()
            || self.message_error.is_some()
            || self.resume_error.is_some()
            || !self.other_errors.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobCard {
    pub id: i64,
    pub href: String,
    pub title: String,
    pub location: String,
    pub job_type: String,
    pub description: String,
    pub deadline: Option<String>,
    pub form: ApplyFormView,
}

pub struct CareersView {
    pub jobs: Vec<JobCard>,
    pub notice: Option<NoticeView>,
}

#[derive(Template)]
#[template(path = "careers.html")]
pub struct CareersTemplate {
    pub view: LayoutContext<CareersView>,
}

pub struct JobDetailView {
    pub title: String,
    pub location: String,
    pub job_type: String,
    pub description: String,
    pub requirements: String,
    pub body_html: String,
    pub deadline: Option<String>,
    pub form: ApplyFormView,
}

#[derive(Template)]
#[template(path = "job_detail.html")]
pub struct JobDetailTemplate {
    pub view: LayoutContext<JobDetailView>,
}

pub struct ApplyResultView {
    pub back_href: String,
    pub back_label: &'static str,
    pub form: ApplyFormView,
}

#[derive(Template)]
#[template(path = "apply.html")]
pub struct ApplyResultTemplate {
    pub view: LayoutContext<ApplyResultView>,
}

// Errors

pub struct ErrorPageView {
    pub title: String,
    pub message: String,
    pub primary_action: Option<ErrorAction>,
}

impl ErrorPageView {
    pub fn not_found() -> Self {
        Self {
            title: "Page Not Found".to_string(),
            message: "The page you requested does not exist. Try returning to the homepage to continue exploring.".to_string(),
            primary_action: Some(ErrorAction::home()),
        }
    }

    pub fn post_not_found() -> Self {
        Self::missing(
            "Post Not Found",
            "The article you're looking for doesn't exist or has been removed.",
            ErrorAction::new("/blog", "Back to Blog"),
        )
    }

    pub fn service_not_found() -> Self {
        Self::missing(
            "Service Not Found",
            "The service you're looking for doesn't exist.",
            ErrorAction::new("/services", "Back to Services"),
        )
    }

    pub fn project_not_found() -> Self {
        Self::missing(
            "Project Not Found",
            "The project you're looking for doesn't exist or has been removed.",
            ErrorAction::new("/projects", "Back to Projects"),
        )
    }

    pub fn job_not_found() -> Self {
        Self::missing(
            "Job Not Found",
            "This opening is no longer available.",
            ErrorAction::new("/careers", "Back to Careers"),
        )
    }

    fn missing(title: &str, message: &str, action: ErrorAction) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            primary_action: Some(action),
        }
    }
}

pub struct ErrorAction {
    pub href: String,
    pub label: String,
}

impl ErrorAction {
    pub fn new(href: &str, label: &str) -> Self {
        Self {
            href: href.to_string(),
            label: label.to_string(),
        }
    }

    pub fn home() -> Self {
        Self::new("/home", "Back to home")
    }
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub view: LayoutContext<ErrorPageView>,
}
