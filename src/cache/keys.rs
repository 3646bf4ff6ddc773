//! Query key definitions.

use std::fmt;

use crate::application::repos::Resource;

/// Identifies one logical content fetch: the query name plus its parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    BlogList,
    BlogDetail(String),
    ProjectList,
    ProjectDetail(i64),
    JobList,
    JobDetail(i64),
}

impl QueryKey {
    /// Query name without its parameter, used as a metric label.
    pub fn name(&self) -> &'static str {
        match self {
            QueryKey::BlogList => "blogList",
            QueryKey::BlogDetail(_) => "blogDetail",
            QueryKey::ProjectList => "projectList",
            QueryKey::ProjectDetail(_) => "projectDetail",
            QueryKey::JobList => "jobList",
            QueryKey::JobDetail(_) => "jobDetail",
        }
    }

    pub fn resource(&self) -> Resource {
        match self {
            QueryKey::BlogList => Resource::BlogList,
            QueryKey::BlogDetail(_) => Resource::BlogDetail,
            QueryKey::ProjectList => Resource::ProjectList,
            QueryKey::ProjectDetail(_) => Resource::ProjectDetail,
            QueryKey::JobList => Resource::JobList,
            QueryKey::JobDetail(_) => Resource::JobDetail,
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryKey::BlogDetail(slug) => write!(f, "{}:{slug}", self.name()),
            QueryKey::ProjectDetail(id) | QueryKey::JobDetail(id) => {
                write!(f, "{}:{id}", self.name())
            }
            _ => f.write_str(self.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_parameter() {
        assert_eq!(QueryKey::BlogList.to_string(), "blogList");
        assert_eq!(
            QueryKey::BlogDetail("warm-minimalism".into()).to_string(),
            "blogDetail:warm-minimalism"
        );
        assert_eq!(QueryKey::JobDetail(4).to_string(), "jobDetail:4");
    }

    #[test]
    fn parameters_distinguish_keys() {
        assert_ne!(QueryKey::ProjectDetail(1), QueryKey::ProjectDetail(2));
        assert_eq!(QueryKey::ProjectDetail(1).name(), QueryKey::ProjectDetail(2).name());
    }
}
