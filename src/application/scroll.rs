//! Smooth-scroll coordination for the page layout.
//!
//! One coordinator is built by the process root and handed to the chrome
//! service. Pages never reach it through a global; while it is not mounted
//! the layout falls back to native scrolling.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::info;

use crate::config::ScrollSettings;
use crate::presentation::views::ScrollView;

const SOURCE: &str = "application::scroll::ScrollCoordinator";

#[derive(Clone, Debug)]
pub struct ScrollCoordinator {
    settings: Arc<ScrollSettings>,
    mounted: Arc<AtomicBool>,
}

impl ScrollCoordinator {
    pub fn new(settings: ScrollSettings) -> Self {
        Self {
            settings: Arc::new(settings),
            mounted: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Activate smooth scrolling; a disabled configuration stays native.
    pub fn mount(&self) -> bool {
        if !self.settings.enabled {
            info!(target = SOURCE, "smooth scrolling disabled by configuration");
            return false;
        }
        let was_mounted = self.mounted.swap(true, Ordering::SeqCst);
        if !was_mounted {
            info!(
                target = SOURCE,
                duration_secs = self.settings.duration_secs,
                touch_multiplier = self.settings.touch_multiplier,
                "smooth scrolling mounted"
            );
        }
        true
    }

    pub fn teardown(&self) {
        if self.mounted.swap(false, Ordering::SeqCst) {
            info!(target = SOURCE, "smooth scrolling torn down");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    pub fn view(&self) -> ScrollView {
        ScrollView {
            smooth: self.is_mounted(),
            duration: format!("{}", self.settings.duration_secs),
            touch_multiplier: format!("{}", self.settings.touch_multiplier),
            reset_on_navigate: self.settings.reset_on_navigate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmounted_coordinator_renders_native_scroll() {
        let coordinator = ScrollCoordinator::new(ScrollSettings::default());
        let view = coordinator.view();
        assert!(!view.smooth);
        assert!(view.reset_on_navigate);
    }

    #[test]
    fn mount_and_teardown_toggle_smooth_scroll() {
        let coordinator = ScrollCoordinator::new(ScrollSettings::default());
        assert!(coordinator.mount());
        assert!(coordinator.view().smooth);
        assert_eq!(coordinator.view().duration, "1.2");
        assert_eq!(coordinator.view().touch_multiplier, "2");

        coordinator.teardown();
        assert!(!coordinator.is_mounted());
    }

    #[test]
    fn disabled_settings_never_mount() {
        let coordinator = ScrollCoordinator::new(ScrollSettings {
            enabled: false,
            ..ScrollSettings::default()
        });
        assert!(!coordinator.mount());
        assert!(!coordinator.view().smooth);
    }

    #[test]
    fn clones_share_mount_state() {
        let coordinator = ScrollCoordinator::new(ScrollSettings::default());
        let handle = coordinator.clone();
        coordinator.mount();
        assert!(handle.is_mounted());
    }
}
