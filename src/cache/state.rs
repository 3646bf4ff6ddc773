//! Observable state of a single query.

use std::sync::Arc;

use crate::application::repos::FetchError;

#[derive(Debug, Clone)]
pub enum QueryStatus {
    Idle,
    Loading,
    Success,
    Error(FetchError),
}

/// Snapshot of a query: the last good data, if any, plus where the fetch stands.
#[derive(Debug)]
pub struct QueryState<T> {
    data: Option<Arc<T>>,
    status: QueryStatus,
}

// Manual impl: cloning only bumps the `Arc`.
impl<T> Clone for QueryState<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            status: self.status.clone(),
        }
    }
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self::idle()
    }
}

impl<T> QueryState<T> {
    pub fn idle() -> Self {
        Self {
            data: None,
            status: QueryStatus::Idle,
        }
    }

    pub fn loading(data: Option<Arc<T>>) -> Self {
        Self {
            data,
            status: QueryStatus::Loading,
        }
    }

    pub fn success(data: Arc<T>) -> Self {
        Self {
            data: Some(data),
            status: QueryStatus::Success,
        }
    }

    pub fn failed(error: FetchError) -> Self {
        Self {
            data: None,
            status: QueryStatus::Error(error),
        }
    }

    pub fn status(&self) -> &QueryStatus {
        &self.status
    }

    pub fn data(&self) -> Option<Arc<T>> {
        self.data.clone()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, QueryStatus::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self.status, QueryStatus::Success)
    }

    pub fn is_error(&self) -> bool {
        matches!(self.status, QueryStatus::Error(_))
    }

    pub fn error(&self) -> Option<&FetchError> {
        match &self.status {
            QueryStatus::Error(error) => Some(error),
            _ => None,
        }
    }
}

impl<T: Default> QueryState<T> {
    /// The data, or the empty placeholder while loading or after a failure.
    pub fn data_or_default(&self) -> Arc<T> {
        self.data.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;
    use crate::application::repos::Resource;

    #[test]
    fn failed_list_defaults_to_empty() {
        let state: QueryState<Vec<u32>> = QueryState::failed(FetchError::status_error(
            Resource::ProjectList,
            StatusCode::NOT_FOUND,
            "",
        ));
        assert!(state.is_error());
        assert!(!state.is_loading());
        assert!(state.data().is_none());
        assert!(state.data_or_default().is_empty());
    }

    #[test]
    fn loading_keeps_previous_data() {
        let state = QueryState::loading(Some(Arc::new(vec![1, 2])));
        assert!(state.is_loading());
        assert_eq!(state.data_or_default().as_slice(), &[1, 2]);
        assert!(state.error().is_none());
    }
}
