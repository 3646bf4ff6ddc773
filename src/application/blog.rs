use std::sync::Arc;

use spacebox_api_types::BlogPost;

use crate::application::error::AppError;
use crate::application::listing::ListPage;
use crate::application::repos::BlogSource;
use crate::cache::{QueryCache, QueryKey, QueryState};
use crate::domain::error::parse_slug;
use crate::domain::listing::{neighbors_by, teaser};
use crate::domain::tags::{display_category, tag_list};
use crate::infra::content_api::ApiEndpoints;
use crate::presentation::views::{
    BlogCard, BlogDetailView, BlogListView, NeighborLink, NoticeView,
};
use crate::util::dates::{format_display_date, iso_date};

pub const BLOG_APOLOGY: &str = "Failed to load blog posts. Please try again later.";
const DEFAULT_SUBTITLE: &str = "Blog";

#[derive(Clone)]
pub struct BlogService {
    source: Arc<dyn BlogSource>,
    cache: QueryCache,
    endpoints: ApiEndpoints,
}

impl BlogService {
    pub fn new(source: Arc<dyn BlogSource>, cache: QueryCache, endpoints: ApiEndpoints) -> Self {
        Self {
            source,
            cache,
            endpoints,
        }
    }

    pub async fn list(&self) -> QueryState<Vec<BlogPost>> {
        let source = Arc::clone(&self.source);
        self.cache
            .fetch(QueryKey::BlogList, move || async move {
                source.fetch_blog_list().await
            })
            .await
    }

    pub async fn detail(&self, slug: &str) -> QueryState<BlogPost> {
        let source = Arc::clone(&self.source);
        let slug = slug.to_string();
        self.cache
            .fetch(QueryKey::BlogDetail(slug.clone()), move || async move {
                source.fetch_blog_detail(&slug).await
            })
            .await
    }

    pub async fn list_page(&self) -> ListPage<BlogListView> {
        let state = self.list().await;
        match state.error() {
            Some(error) => ListPage::failed(
                BlogListView {
                    posts: Vec::new(),
                    notice: Some(NoticeView::error(BLOG_APOLOGY)),
                },
                error.clone(),
            ),
            None => ListPage::ok(BlogListView {
                posts: state
                    .data_or_default()
                    .iter()
                    .map(|post| self.card(post))
                    .collect(),
                notice: None,
            }),
        }
    }

    /// The first few posts for the home page; empty when the list is unavailable.
    pub async fn teaser(&self) -> Vec<BlogCard> {
        let posts = self.list().await.data_or_default();
        teaser(&posts).iter().map(|post| self.card(post)).collect()
    }

    pub async fn detail_page(&self, slug: &str) -> Result<BlogDetailView, AppError> {
        let slug = parse_slug("blog post", slug)?;
        let (detail, list) = tokio::join!(self.detail(slug), self.list());

        if let Some(error) = detail.error() {
            return Err(AppError::Fetch(error.clone()));
        }
        let Some(post) = detail.data() else {
            return Err(AppError::unexpected(format!(
                "blog detail `{slug}` settled without data"
            )));
        };

        let posts = list.data_or_default();
        let neighbors = neighbors_by(&posts, |candidate| candidate.slug == slug);
        let tags: Vec<String> = tag_list(post.tags.as_deref())
            .into_iter()
            .map(str::to_string)
            .collect();

        Ok(BlogDetailView {
            title: post.title.clone(),
            subtitle: tags
                .first()
                .cloned()
                .unwrap_or_else(|| DEFAULT_SUBTITLE.to_string()),
            tags,
            image: self.endpoints.media_url(post.image.as_deref()),
            date: format_display_date(&post.created_at),
            iso_date: iso_date(&post.created_at).unwrap_or_default(),
            body_html: post.body.clone(),
            prev: neighbors.prev.map(neighbor_link),
            next: neighbors.next.map(neighbor_link),
        })
    }

    fn card(&self, post: &BlogPost) -> BlogCard {
        BlogCard {
            href: post_href(post),
            title: post.title.clone(),
            summary: post.short_description.clone(),
            image: self.endpoints.media_url(post.image.as_deref()),
            category: display_category(post.tags.as_deref()).map(str::to_string),
            date: format_display_date(&post.created_at),
            iso_date: iso_date(&post.created_at).unwrap_or_default(),
        }
    }
}

fn post_href(post: &BlogPost) -> String {
    format!("/blog/{}", post.slug)
}

fn neighbor_link(post: &BlogPost) -> NeighborLink {
    NeighborLink {
        href: post_href(post),
        title: post.title.clone(),
    }
}
