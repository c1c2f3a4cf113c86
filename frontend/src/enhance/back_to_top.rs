use log::{debug, warn};
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use super::{as_html, EnhanceError, Listener};
use crate::config::EnhancerConfig;

const BUTTON_LABEL: &str = "↑";

// Inline so the synthesized button looks right without any stylesheet.
const BUTTON_STYLE: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("right", "1rem"),
    ("bottom", "1.25rem"),
    ("padding", "0.6rem 0.8rem"),
    ("border-radius", "999px"),
    ("border", "none"),
    ("box-shadow", "0 6px 18px rgba(0,0,0,0.15)"),
    ("cursor", "pointer"),
    ("display", "none"),
    ("z-index", "999"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Visible,
}

impl Visibility {
    /// Depends on nothing but the current offset.
    pub fn for_offset(offset: f64, threshold: f64) -> Self {
        if offset > threshold {
            Visibility::Visible
        } else {
            Visibility::Hidden
        }
    }

    pub fn display(self) -> &'static str {
        match self {
            Visibility::Visible => "block",
            Visibility::Hidden => "none",
        }
    }
}

/// Returns the page's back-to-top button, creating and appending one when the
/// markup has none. The flag tells whether it was created here.
pub fn ensure_button(document: &Document, config: &EnhancerConfig) -> Result<(HtmlElement, bool), EnhanceError> {
    if let Some(existing) = document.get_element_by_id(config.back_to_top_id) {
        return Ok((as_html(existing)?, false));
    }

    let body = document.body().ok_or(EnhanceError::NoBody)?;
    let button = as_html(document.create_element("button")?)?;
    button.set_id(config.back_to_top_id);
    button.set_text_content(Some(BUTTON_LABEL));
    button.set_attribute("type", "button")?;
    button.set_attribute("aria-label", "Back to top")?;

    let style = button.style();
    for (property, value) in BUTTON_STYLE {
        style.set_property(property, value)?;
    }

    body.append_child(&button)?;
    Ok((button, true))
}

pub fn apply_offset(button: &HtmlElement, offset: f64, threshold: f64) -> Result<Visibility, EnhanceError> {
    let visibility = Visibility::for_offset(offset, threshold);
    button.style().set_property("display", visibility.display())?;
    Ok(visibility)
}

pub fn scroll_to_top(window: &Window) {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub struct BackToTop {
    button: HtmlElement,
    created: bool,
    listeners: Vec<Listener>,
}

impl BackToTop {
    /// Owns the button before any listener exists, so a failed install
    /// still takes a synthesized button back out of the page.
    fn unwired(button: HtmlElement, created: bool) -> Self {
        Self {
            button,
            created,
            listeners: Vec::with_capacity(2),
        }
    }

    pub fn button(&self) -> &HtmlElement {
        &self.button
    }

    pub fn created(&self) -> bool {
        self.created
    }
}

impl Drop for BackToTop {
    fn drop(&mut self) {
        // Markup-provided buttons belong to the page, ours go with us.
        if self.created {
            self.button.remove();
        }
    }
}

pub(crate) fn install(window: &Window, document: &Document, config: &EnhancerConfig) -> Result<BackToTop, EnhanceError> {
    let (button, created) = ensure_button(document, config)?;
    let mut back_to_top = BackToTop::unwired(button, created);
    let threshold = config.back_to_top_offset;

    let on_scroll = {
        let window_ref = window.clone();
        let button = back_to_top.button.clone();
        Listener::new(window, "scroll", move |_| {
            let offset = window_ref.scroll_y().unwrap_or(0.0);
            if let Err(err) = apply_offset(&button, offset, threshold) {
                warn!("Back-to-top visibility update failed: {}", err);
            }
        })?
    };
    back_to_top.listeners.push(on_scroll);

    let on_click = {
        let window = window.clone();
        Listener::new(&back_to_top.button, "click", move |_| scroll_to_top(&window))?
    };
    back_to_top.listeners.push(on_click);

    // Sync once so a reload halfway down the page shows the button right away.
    apply_offset(&back_to_top.button, window.scroll_y().unwrap_or(0.0), threshold)?;
    debug!("Back-to-top button {}", if created { "created" } else { "reused" });

    Ok(back_to_top)
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f64 = 400.0;

    #[test]
    fn visibility_follows_current_offset_only() {
        let seen: Vec<Visibility> = [0.0, 500.0, 100.0]
            .into_iter()
            .map(|offset| Visibility::for_offset(offset, THRESHOLD))
            .collect();
        assert_eq!(seen, vec![Visibility::Hidden, Visibility::Visible, Visibility::Hidden]);
    }

    #[test]
    fn threshold_itself_is_hidden() {
        assert_eq!(Visibility::for_offset(400.0, THRESHOLD), Visibility::Hidden);
        assert_eq!(Visibility::for_offset(400.5, THRESHOLD), Visibility::Visible);
    }

    #[test]
    fn display_values() {
        assert_eq!(Visibility::Visible.display(), "block");
        assert_eq!(Visibility::Hidden.display(), "none");
    }

    #[test]
    fn synthesized_button_starts_hidden() {
        assert!(BUTTON_STYLE.contains(&("display", "none")));
        assert!(BUTTON_STYLE.contains(&("position", "fixed")));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn count(document: &Document) -> u32 {
        document.query_selector_all("#backToTop").unwrap().length()
    }

    #[wasm_bindgen_test]
    fn unwired_created_button_leaves_with_its_owner() {
        let document = web_sys::window().unwrap().document().unwrap();
        let config = EnhancerConfig::default();
        let (button, created) = ensure_button(&document, &config).unwrap();
        assert!(created);
        assert_eq!(count(&document), 1);

        // Same path as an install that bails out before wiring finishes.
        drop(BackToTop::unwired(button, created));
        assert_eq!(count(&document), 0);
    }

    #[wasm_bindgen_test]
    fn unwired_markup_button_stays() {
        let document = web_sys::window().unwrap().document().unwrap();
        let markup = document.create_element("button").unwrap();
        markup.set_id("backToTop");
        document.body().unwrap().append_child(&markup).unwrap();

        let (button, created) = ensure_button(&document, &EnhancerConfig::default()).unwrap();
        assert!(!created);
        drop(BackToTop::unwired(button, created));
        assert_eq!(count(&document), 1);
        markup.remove();
    }
}
