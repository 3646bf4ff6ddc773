//! Parsing of the comma-separated `tags` field on blog posts.

/// Display category: the text before the first comma, trimmed.
///
/// Returns `None` when there is nothing to show as a badge.
pub fn display_category(tags: Option<&str>) -> Option<&str> {
    let first = tags?.split(',').next()?.trim();
    (!first.is_empty()).then_some(first)
}

/// Every non-empty tag, trimmed, in written order.
pub fn tag_list(tags: Option<&str>) -> Vec<&str> {
    tags.map(|tags| {
        tags.split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .collect()
    })
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_is_first_token() {
        assert_eq!(display_category(Some("Residential, Modern")), Some("Residential"));
        assert_eq!(display_category(Some("  Commercial  ")), Some("Commercial"));
    }

    #[test]
    fn empty_or_absent_tags_have_no_category() {
        assert_eq!(display_category(Some("")), None);
        assert_eq!(display_category(None), None);
        assert_eq!(display_category(Some(" , Modern")), None);
    }

    #[test]
    fn tag_list_drops_blank_entries() {
        assert_eq!(
            tag_list(Some("Residential, , Modern ,Lighting,")),
            vec!["Residential", "Modern", "Lighting"]
        );
        assert!(tag_list(None).is_empty());
    }
}
