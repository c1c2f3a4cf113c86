use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Fraction of a section that must be on screen before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.15;

/// Vertical scroll offset past which the back-to-top button shows up.
pub const BACK_TO_TOP_OFFSET: f64 = 400.0;

/// Element ids, class names and thresholds the page enhancer works against.
///
/// The defaults match the markup produced by the landing page; tests build
/// their own fixtures and may override any of them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnhancerConfig {
    pub menu_toggle_id: &'static str,
    pub mobile_menu_id: &'static str,
    pub menu_open_class: &'static str,
    pub back_to_top_id: &'static str,
    pub pending_class: &'static str,
    pub revealed_class: &'static str,
    pub reveal_threshold: f64,
    pub back_to_top_offset: f64,
}

impl Default for EnhancerConfig {
    fn default() -> Self {
        Self {
            menu_toggle_id: "menuToggle",
            mobile_menu_id: "mobileMenu",
            menu_open_class: "open",
            back_to_top_id: "backToTop",
            pending_class: "pre-reveal",
            revealed_class: "reveal",
            reveal_threshold: REVEAL_THRESHOLD,
            back_to_top_offset: BACK_TO_TOP_OFFSET,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_markup() {
        let config = EnhancerConfig::default();
        assert_eq!(config.menu_toggle_id, "menuToggle");
        assert_eq!(config.mobile_menu_id, "mobileMenu");
        assert_eq!(config.back_to_top_id, "backToTop");
        assert_eq!(config.reveal_threshold, 0.15);
        assert_eq!(config.back_to_top_offset, 400.0);
    }

    #[test]
    fn pending_and_revealed_classes_differ() {
        let config = EnhancerConfig::default();
        assert_ne!(config.pending_class, config.revealed_class);
    }
}
