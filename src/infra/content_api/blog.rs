use async_trait::async_trait;
use axum::http::StatusCode;
use spacebox_api_types::BlogPost;

use super::{ContentApiClient, endpoints};
use crate::application::repos::{BlogSource, FetchError, Resource};
use crate::domain::error::is_dot_segment;

#[async_trait]
impl BlogSource for ContentApiClient {
    async fn fetch_blog_list(&self) -> Result<Vec<BlogPost>, FetchError> {
        self.get_json(Resource::BlogList, endpoints::BLOG_LIST).await
    }

    async fn fetch_blog_detail(&self, slug: &str) -> Result<BlogPost, FetchError> {
        // `..` survives percent-encoding and would resolve to a parent endpoint.
        if is_dot_segment(slug) {
            return Err(FetchError::status_error(
                Resource::BlogDetail,
                StatusCode::NOT_FOUND,
                "slug is not a path segment",
            ));
        }
        self.get_json(Resource::BlogDetail, &endpoints::blog_detail(slug))
            .await
    }
}
