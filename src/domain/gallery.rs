//! Lightbox image sequences for portfolio projects.

use spacebox_api_types::{Project, ProjectGalleryItem};

pub const HERO_LABEL: &str = "Hero Image";

/// Ordered image sequence shown in the project lightbox.
///
/// Index 0 is always the hero image; gallery items follow in list order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    images: Vec<ProjectGalleryItem>,
}

impl Gallery {
    pub fn compose(hero_image: &str, gallery: &[ProjectGalleryItem]) -> Self {
        let hero = ProjectGalleryItem {
            id: 0,
            image: hero_image.to_string(),
            label: HERO_LABEL.to_string(),
            order: 0,
        };

        let mut images = Vec::with_capacity(gallery.len() + 1);
        images.push(hero);
        images.extend(gallery.iter().cloned());
        Self { images }
    }

    pub fn for_project(project: &Project) -> Self {
        Self::compose(
            &project.hero_image,
            project.project_gallery.as_deref().unwrap_or_default(),
        )
    }

    pub fn images(&self) -> &[ProjectGalleryItem] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ProjectGalleryItem> {
        self.images.get(index)
    }

    /// Map a requested index onto the sequence, falling back to the hero image.
    pub fn clamp(&self, requested: Option<usize>) -> usize {
        requested.filter(|index| *index < self.len()).unwrap_or(0)
    }

    pub fn next_index(&self, current: usize) -> usize {
        if self.is_empty() || current + 1 >= self.len() {
            0
        } else {
            current + 1
        }
    }

    pub fn prev_index(&self, current: usize) -> usize {
        match current {
            _ if self.is_empty() => 0,
            0 => self.len() - 1,
            _ if current >= self.len() => self.len() - 1,
            _ => current - 1,
        }
    }

    /// Whether prev/next controls make sense for this sequence.
    pub fn has_navigation(&self) -> bool {
        self.len() > 1
    }

    pub fn position_label(&self, index: usize) -> String {
        format!("{} of {}", index + 1, self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, image: &str) -> ProjectGalleryItem {
        ProjectGalleryItem {
            id,
            image: image.to_string(),
            label: format!("Image {id}"),
            order: id,
        }
    }

    #[test]
    fn hero_leads_gallery_in_fixed_order() {
        let gallery = Gallery::compose("H", &[item(1, "A"), item(2, "B")]);
        let images: Vec<&str> = gallery
            .images()
            .iter()
            .map(|image| image.image.as_str())
            .collect();

        assert_eq!(images, vec!["H", "A", "B"]);
        assert_eq!(gallery.images()[0].label, HERO_LABEL);
    }

    #[test]
    fn navigation_wraps_both_ways() {
        let gallery = Gallery::compose("H", &[item(1, "A"), item(2, "B")]);

        assert_eq!(gallery.next_index(2), 0);
        assert_eq!(gallery.prev_index(0), 2);
        assert_eq!(gallery.next_index(0), 1);
        assert_eq!(gallery.prev_index(2), 1);
    }

    #[test]
    fn hero_only_sequence_has_no_navigation() {
        let gallery = Gallery::compose("H", &[]);
        assert_eq!(gallery.len(), 1);
        assert!(!gallery.has_navigation());
        assert_eq!(gallery.next_index(0), 0);
        assert_eq!(gallery.prev_index(0), 0);
    }

    #[test]
    fn out_of_range_request_falls_back_to_hero() {
        let gallery = Gallery::compose("H", &[item(1, "A")]);
        assert_eq!(gallery.clamp(Some(1)), 1);
        assert_eq!(gallery.clamp(Some(7)), 0);
        assert_eq!(gallery.clamp(None), 0);
    }

    #[test]
    fn position_label_is_one_based() {
        let gallery = Gallery::compose("H", &[item(1, "A"), item(2, "B")]);
        assert_eq!(gallery.position_label(0), "1 of 3");
        assert_eq!(gallery.position_label(2), "3 of 3");
    }
}
