//! HTTP adapter for the SpaceBox content API.

mod blog;
mod careers;
pub mod endpoints;
mod projects;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::application::repos::{FetchError, Resource};
use crate::config::ContentApiSettings;
use crate::infra::error::InfraError;

pub use careers::decode_apply_response;
pub use endpoints::ApiEndpoints;

const SOURCE: &str = "infra::content_api";

/// Shared client for every content resource.
#[derive(Clone, Debug)]
pub struct ContentApiClient {
    http: Client,
    endpoints: ApiEndpoints,
}

impl ContentApiClient {
    pub fn new(settings: &ContentApiSettings) -> Result<Self, InfraError> {
        let http = Client::builder()
            .user_agent(Self::user_agent())
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| InfraError::http_client(err.to_string()))?;

        Ok(Self {
            http,
            endpoints: ApiEndpoints::new(settings.base_url.as_str()),
        })
    }

    pub fn user_agent() -> &'static str {
        concat!("spacebox/", env!("CARGO_PKG_VERSION"))
    }

    pub fn endpoints(&self) -> &ApiEndpoints {
        &self.endpoints
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        resource: Resource,
        path: &str,
    ) -> Result<T, FetchError> {
        let url = self.endpoints.api_url(path);
        debug!(target = SOURCE, %url, ?resource, "fetching content");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|err| transport_error(resource, &err))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|err| transport_error(resource, &err))?;

        if !status.is_success() {
            return Err(FetchError::status_error(
                resource,
                status,
                &String::from_utf8_lossy(&bytes),
            ));
        }

        serde_json::from_slice(&bytes).map_err(|err| FetchError::decode(resource, err))
    }
}

fn transport_error(resource: Resource, err: &reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout { resource }
    } else {
        FetchError::transport(resource, err)
    }
}
