use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("domain entity `{entity}` not found")]
    NotFound { entity: &'static str },
    #[error("malformed {entity} identifier `{value}`")]
    MalformedId { entity: &'static str, value: String },
}

impl DomainError {
    pub fn not_found(entity: &'static str) -> Self {
        Self::NotFound { entity }
    }

    pub fn malformed_id(entity: &'static str, value: impl Into<String>) -> Self {
        Self::MalformedId {
            entity,
            value: value.into(),
        }
    }
}

/// Parse a numeric record id taken from a route segment.
pub fn parse_record_id(entity: &'static str, raw: &str) -> Result<i64, DomainError> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| DomainError::malformed_id(entity, raw))
}

/// Check a slug taken from a route segment before it is placed in an upstream path.
///
/// Empty and dot-only slugs would collapse into a parent path once the URL is
/// normalised, so they never name a record.
pub fn parse_slug<'a>(entity: &'static str, raw: &'a str) -> Result<&'a str, DomainError> {
    if is_dot_segment(raw) {
        return Err(DomainError::malformed_id(entity, raw));
    }
    Ok(raw)
}

/// `true` for slugs that a URL parser resolves as `.`/`..` or drops entirely.
pub fn is_dot_segment(raw: &str) -> bool {
    raw.trim().trim_matches('.').is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_ids_must_be_positive_integers() {
        assert_eq!(parse_record_id("project", "42").ok(), Some(42));
        for raw in ["", "abc", "0", "-3", "4.5"] {
            assert!(matches!(
                parse_record_id("project", raw),
                Err(DomainError::MalformedId { entity: "project", .. })
            ));
        }
    }

    #[test]
    fn dot_only_slugs_are_malformed() {
        assert_eq!(parse_slug("blog post", "warm-minimalism").ok(), Some("warm-minimalism"));
        assert_eq!(parse_slug("blog post", "v1.2-refresh").ok(), Some("v1.2-refresh"));
        for raw in ["", " ", ".", "..", "..."] {
            assert!(matches!(
                parse_slug("blog post", raw),
                Err(DomainError::MalformedId { entity: "blog post", .. })
            ));
        }
    }
}
