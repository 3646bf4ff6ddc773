use async_trait::async_trait;
use spacebox_api_types::Project;

use super::{ContentApiClient, endpoints};
use crate::application::repos::{FetchError, ProjectSource, Resource};

#[async_trait]
impl ProjectSource for ContentApiClient {
    async fn fetch_project_list(&self) -> Result<Vec<Project>, FetchError> {
        self.get_json(Resource::ProjectList, endpoints::PROJECT_LIST)
            .await
    }

    async fn fetch_project_detail(&self, id: i64) -> Result<Project, FetchError> {
        self.get_json(Resource::ProjectDetail, &endpoints::project_detail(id))
            .await
    }
}
