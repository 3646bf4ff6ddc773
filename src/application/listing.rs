//! List pages that degrade to an apology instead of failing.

use axum::http::StatusCode;

use crate::application::error::ErrorReport;
use crate::application::repos::FetchError;

/// A rendered list page plus the fetch failure, if any, that emptied it.
pub struct ListPage<V> {
    pub view: V,
    pub failure: Option<FetchError>,
}

impl<V> ListPage<V> {
    pub fn ok(view: V) -> Self {
        Self {
            view,
            failure: None,
        }
    }

    pub fn failed(view: V, failure: FetchError) -> Self {
        Self {
            view,
            failure: Some(failure),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self.failure {
            Some(_) => StatusCode::SERVICE_UNAVAILABLE,
            None => StatusCode::OK,
        }
    }

    pub fn report(&self, source: &'static str) -> Option<ErrorReport> {
        self.failure.as_ref().map(|failure| {
            let mut report = ErrorReport::from_error(source, self.status(), failure);
            report.messages.push(failure.diagnostic());
            report
        })
    }
}
