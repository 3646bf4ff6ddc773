use std::sync::Arc;

use spacebox_api_types::Project;

use crate::application::error::AppError;
use crate::application::listing::ListPage;
use crate::application::repos::ProjectSource;
use crate::cache::{QueryCache, QueryKey, QueryState};
use crate::domain::error::parse_record_id;
use crate::domain::gallery::Gallery;
use crate::infra::content_api::ApiEndpoints;
use crate::presentation::views::{
    GalleryThumbView, LightboxView, NoticeView, ProjectCard, ProjectDetailView, ProjectsView,
};

pub const PROJECTS_APOLOGY: &str = "Failed to load projects. Please try again later.";

#[derive(Clone)]
pub struct ProjectService {
    source: Arc<dyn ProjectSource>,
    cache: QueryCache,
    endpoints: ApiEndpoints,
}

impl ProjectService {
    pub fn new(
        source: Arc<dyn ProjectSource>,
        cache: QueryCache,
        endpoints: ApiEndpoints,
    ) -> Self {
        Self {
            source,
            cache,
            endpoints,
        }
    }

    pub async fn list(&self) -> QueryState<Vec<Project>> {
        let source = Arc::clone(&self.source);
        self.cache
            .fetch(QueryKey::ProjectList, move || async move {
                source.fetch_project_list().await
            })
            .await
    }

    pub async fn detail(&self, id: i64) -> QueryState<Project> {
        let source = Arc::clone(&self.source);
        self.cache
            .fetch(QueryKey::ProjectDetail(id), move || async move {
                source.fetch_project_detail(id).await
            })
            .await
    }

    pub async fn list_page(&self) -> ListPage<ProjectsView> {
        let state = self.list().await;
        if let Some(error) = state.error() {
            return ListPage::failed(
                ProjectsView {
                    projects: Vec::new(),
                    notice: Some(NoticeView::error(PROJECTS_APOLOGY)),
                },
                error.clone(),
            );
        }

        ListPage::ok(ProjectsView {
            projects: state
                .data_or_default()
                .iter()
                .map(|project| self.card(project))
                .collect(),
            notice: None,
        })
    }

    /// Project page with the lightbox opened at `image` (the hero when out of range).
    pub async fn detail_page(
        &self,
        raw_id: &str,
        image: Option<usize>,
    ) -> Result<ProjectDetailView, AppError> {
        let id = parse_record_id("project", raw_id)?;
        let state = self.detail(id).await;
        if let Some(error) = state.error() {
            return Err(AppError::Fetch(error.clone()));
        }
        let Some(project) = state.data() else {
            return Err(AppError::unexpected(format!(
                "project detail `{id}` settled without data"
            )));
        };

        let gallery = Gallery::for_project(&project);
        let current = gallery.clamp(image);
        let href = |index: usize| format!("{}?image={index}", project_href(&project));

        let thumbnails = gallery
            .images()
            .iter()
            .enumerate()
            .map(|(index, item)| GalleryThumbView {
                href: href(index),
                image: self.endpoints.media_url(Some(&item.image)),
                label: item.label.clone(),
                is_current: index == current,
            })
            .collect();

        let (image, label) = gallery
            .get(current)
            .map(|item| (self.endpoints.media_url(Some(&item.image)), item.label.clone()))
            .unwrap_or_default();

        Ok(ProjectDetailView {
            title: project.title.clone(),
            description: project.description.clone(),
            area: project.area.clone(),
            year: project.year.clone(),
            status: project.status_label(),
            thumbnails,
            lightbox: LightboxView {
                image,
                label,
                position: gallery.position_label(current),
                has_navigation: gallery.has_navigation(),
                prev_href: href(gallery.prev_index(current)),
                next_href: href(gallery.next_index(current)),
            },
        })
    }

    fn card(&self, project: &Project) -> ProjectCard {
        ProjectCard {
            href: project_href(project),
            title: project.title.clone(),
            description: project.description.clone(),
            area: project.area.clone(),
            year: project.year.clone(),
            status: project.status_label(),
            hero_image: self.endpoints.media_url(Some(&project.hero_image)),
        }
    }
}

fn project_href(project: &Project) -> String {
    format!("/projects/{}", project.id)
}
